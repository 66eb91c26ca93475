//! Application settings, read from a JSON file shaped like:
//!
//! ```json
//! { "Maze": { "MazeFile": "mazes/maze8x6.txt", "MazeSolver": "BFS", ... } }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use maze_core::Charset;
use maze_paths::SolverKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings file looked up when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "mazesettings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed settings file {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl SettingsError {
    fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SettingsError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// The `"Maze"` section of the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MazeSettings {
    pub maze_file: String,
    pub maze_solver: String,
    pub min_width: i32,
    pub min_height: i32,
    pub open_char: String,
    pub wall_char: String,
    pub start_char: String,
    pub finish_char: String,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            maze_file: "mazes/maze8x6.txt".to_owned(),
            maze_solver: SolverKind::default().code().to_owned(),
            min_width: 2,
            min_height: 2,
            open_char: ".".to_owned(),
            wall_char: "#".to_owned(),
            start_char: "S".to_owned(),
            finish_char: "F".to_owned(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(rename = "Maze", default)]
    maze: MazeSettings,
}

impl MazeSettings {
    /// Parse the settings document. Keys missing from the `"Maze"` section
    /// keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<SettingsFile>(text).map(|f| f.maze)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&SettingsFile { maze: self.clone() })
    }

    /// Read settings from `path`.
    ///
    /// A relative `MazeFile` is taken relative to the directory holding the
    /// settings file. The built-in default and the `--file` override stay
    /// relative to the working directory.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_owned(),
            source,
        })?;
        let mut settings = Self::from_json(&text).map_err(|source| SettingsError::Json {
            path: path.to_owned(),
            source,
        })?;
        settings.resolve_maze_file(path);
        Ok(settings)
    }

    fn resolve_maze_file(&mut self, settings_path: &Path) {
        if Path::new(&self.maze_file).is_absolute() {
            return;
        }
        let Some(dir) = settings_path.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return;
        };
        let resolved = dir.join(&self.maze_file);
        log::debug!("MazeFile {} resolved to {}", self.maze_file, resolved.display());
        self.maze_file = resolved.to_string_lossy().into_owned();
    }

    /// Read settings from `path`, or fall back to the defaults when
    /// `path` is the default file and it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path == Path::new(DEFAULT_SETTINGS_FILE) && !path.exists() {
            log::debug!("{DEFAULT_SETTINGS_FILE} not found, using built-in settings");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, file: Option<String>, solver: Option<String>) -> Self {
        if let Some(file) = file {
            self.maze_file = file;
        }
        if let Some(solver) = solver {
            self.maze_solver = solver;
        }
        self
    }

    /// Check every parameter. The first failure names the offending one.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let strings = [
            ("MazeFile", &self.maze_file),
            ("MazeSolver", &self.maze_solver),
            ("OpenChar", &self.open_char),
            ("WallChar", &self.wall_char),
            ("StartChar", &self.start_char),
            ("FinishChar", &self.finish_char),
        ];
        for (name, value) in strings {
            if value.trim().is_empty() {
                return Err(SettingsError::invalid(name, "must not be empty"));
            }
        }

        // A maze is at least 2x2.
        for (name, value) in [("MinWidth", self.min_width), ("MinHeight", self.min_height)] {
            if value < 2 {
                return Err(SettingsError::invalid(
                    name,
                    format!("must be at least 2, got {value}"),
                ));
            }
        }

        self.charset()?;
        self.solver()?;
        Ok(())
    }

    /// The text-format characters, each checked to be a single character
    /// not already used by an earlier role.
    pub fn charset(&self) -> Result<Charset, SettingsError> {
        let mut used = Vec::with_capacity(4);
        let mut pick = |name: &'static str, value: &str| -> Result<char, SettingsError> {
            let mut chars = value.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(SettingsError::invalid(
                    name,
                    format!("must be exactly one character, got {value:?}"),
                ));
            };
            if used.contains(&c) {
                return Err(SettingsError::invalid(
                    name,
                    format!("{c:?} is already in use"),
                ));
            }
            used.push(c);
            Ok(c)
        };
        Ok(Charset {
            open: pick("OpenChar", &self.open_char)?,
            wall: pick("WallChar", &self.wall_char)?,
            start: pick("StartChar", &self.start_char)?,
            finish: pick("FinishChar", &self.finish_char)?,
        })
    }

    pub fn solver(&self) -> Result<SolverKind, SettingsError> {
        self.maze_solver
            .parse()
            .map_err(|e| SettingsError::invalid("MazeSolver", format!("{e}")))
    }
}
