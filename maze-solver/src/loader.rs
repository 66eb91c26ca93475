//! Reading mazes from `.txt` files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use maze_core::{Charset, MazeGrid, ParseError};
use thiserror::Error;

use crate::settings::{MazeSettings, SettingsError};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{}: only .txt maze files are supported", path.display())]
    UnsupportedFileType { path: PathBuf },

    #[error("{}: file is empty", path.display())]
    EmptyFile { path: PathBuf },

    #[error("{}: file is {size} bytes, more than the {max} a maze can take", path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("cannot read maze file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid maze in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("maze is {width}x{height}, smaller than the required {min_width}x{min_height}")]
    TooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
}

/// Loads a [`MazeGrid`] from a text file.
#[derive(Debug, Clone)]
pub struct TextLoader {
    path: PathBuf,
    charset: Charset,
    min_width: i32,
    min_height: i32,
}

impl TextLoader {
    pub fn new(path: impl Into<PathBuf>, charset: Charset) -> Self {
        Self {
            path: path.into(),
            charset,
            min_width: 1,
            min_height: 1,
        }
    }

    /// Loader for the file, charset and minimum size named by `settings`.
    pub fn from_settings(settings: &MazeSettings) -> Result<Self, SettingsError> {
        let charset = settings.charset()?;
        Ok(Self::new(&settings.maze_file, charset).min_size(settings.min_width, settings.min_height))
    }

    pub fn min_size(mut self, width: i32, height: i32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Largest file that could hold a maze in this charset.
    pub fn max_file_size(&self) -> u64 {
        let widest = [
            self.charset.open,
            self.charset.wall,
            self.charset.start,
            self.charset.finish,
        ]
        .iter()
        .map(|c| c.len_utf8() as u64)
        .max()
        .unwrap_or(1);
        i32::MAX as u64 * 2 * widest
    }

    pub fn load(&self) -> Result<MazeGrid, LoadError> {
        self.check_file()?;

        log::info!("Reading maze file {}", self.path.display());
        let text = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let grid = MazeGrid::parse(&text, &self.charset).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Found a {} x {} maze", grid.width(), grid.height());
        log::debug!("{} open cells", grid.open_count());

        if grid.width() < self.min_width || grid.height() < self.min_height {
            return Err(LoadError::TooSmall {
                width: grid.width(),
                height: grid.height(),
                min_width: self.min_width,
                min_height: self.min_height,
            });
        }
        Ok(grid)
    }

    fn check_file(&self) -> Result<(), LoadError> {
        log::trace!("validating maze file {}", self.path.display());
        if self.path.extension().is_none_or(|ext| ext != "txt") {
            return Err(LoadError::UnsupportedFileType {
                path: self.path.clone(),
            });
        }

        let size = fs::metadata(&self.path)
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?
            .len();
        if size == 0 {
            return Err(LoadError::EmptyFile {
                path: self.path.clone(),
            });
        }
        let max = self.max_file_size();
        if size > max {
            return Err(LoadError::FileTooLarge {
                path: self.path.clone(),
                size,
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Cell;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_a_valid_maze() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "m.txt", "S.#\n#.#\n#.F\n");
        let grid = TextLoader::new(&path, Charset::default())
            .min_size(2, 2)
            .load()
            .unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.start_cell(), Some(Cell::open(0, 0)));
        assert_eq!(grid.finish_cell(), Some(Cell::open(2, 2)));
    }

    #[test]
    fn uses_the_settings_charset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "m.txt", "A  \nXX \nXXB\n");
        let settings = MazeSettings {
            maze_file: path.to_string_lossy().into_owned(),
            open_char: " ".into(),
            wall_char: "X".into(),
            start_char: "A".into(),
            finish_char: "B".into(),
            ..MazeSettings::default()
        };
        let grid = TextLoader::from_settings(&settings).unwrap().load().unwrap();
        assert_eq!(grid.finish_cell(), Some(Cell::open(2, 2)));
    }

    #[test]
    fn rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "m.csv", "S.F\n");
        let err = TextLoader::new(&path, Charset::default()).load().unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFileType { .. }));
    }

    #[test]
    fn rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "m.txt", "");
        let err = TextLoader::new(&path, Charset::default()).load().unwrap_err();
        assert!(matches!(err, LoadError::EmptyFile { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextLoader::new(dir.path().join("nope.txt"), Charset::default())
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn parse_errors_are_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let no_start = write(&dir, "a.txt", "..#\n#.F\n");
        let err = TextLoader::new(&no_start, Charset::default()).load().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                source: ParseError::MissingStart,
                ..
            }
        ));

        let ragged = write(&dir, "b.txt", "S.#\n#F\n");
        let err = TextLoader::new(&ragged, Charset::default()).load().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                source: ParseError::RaggedLine { .. },
                ..
            }
        ));
    }

    #[test]
    fn enforces_minimum_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "m.txt", "S.F\n");
        let err = TextLoader::new(&path, Charset::default())
            .min_size(2, 2)
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::TooSmall { height: 1, .. }));
    }

    #[test]
    fn size_limit_scales_with_char_width() {
        let ascii = TextLoader::new("m.txt", Charset::default());
        let wide = TextLoader::new(
            "m.txt",
            Charset {
                wall: '█',
                ..Charset::default()
            },
        );
        assert_eq!(wide.max_file_size(), ascii.max_file_size() * 3);
    }
}
