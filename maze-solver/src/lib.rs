//! **maze-solver**: load a text maze, compact it into a graph and report
//! the paths the chosen solver finds.

pub mod loader;
pub mod report;
pub mod settings;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use maze_paths::{Path, SolverKind};

use crate::loader::TextLoader;
use crate::report::{SolveReport, format_path, sort_longest_first};
use crate::settings::{DEFAULT_SETTINGS_FILE, MazeSettings};

/// Solve a maze with BFS, BFSR, DFS, DFSR or DJK (Dijkstra).
#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file with a "Maze" section
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// Maze file to load, overriding MazeFile
    #[arg(short, long)]
    pub file: Option<String>,

    /// Solver code (BFS, BFSR, DFS, DFSR, DJK), overriding MazeSolver
    #[arg(short, long)]
    pub solver: Option<String>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the maze with the shortest reported path drawn in
    #[arg(long)]
    pub draw: bool,

    /// Character used to draw the path
    #[arg(long, default_value_t = '*')]
    pub mark: char,

    /// Print the paths as JSON
    #[arg(long)]
    pub json: bool,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved(usize),
    /// BFS found no route from start to finish.
    Unsolvable,
    /// The maze is solvable but the selected solver reported nothing.
    NoSolution,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Settings from the config file with the command-line overrides applied,
/// validated.
pub fn resolve_settings(cli: &Cli) -> anyhow::Result<MazeSettings> {
    let settings = MazeSettings::load_or_default(&cli.config)?
        .with_overrides(cli.file.clone(), cli.solver.clone());
    settings.validate()?;
    Ok(settings)
}

/// Load, check and solve the maze; report to the log and to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let settings = resolve_settings(cli)?;
    let charset = settings.charset()?;
    let kind = settings.solver()?;

    let loader = TextLoader::from_settings(&settings)?;
    let grid = loader
        .load()
        .with_context(|| format!("failed to load the maze {}", loader.path().display()))?;
    let (Some(start), Some(finish)) = (grid.start_cell(), grid.finish_cell()) else {
        anyhow::bail!("loaded maze has no start or finish");
    };

    let reachable = maze_paths::solve(&grid, SolverKind::Bfs, |_| {})?;
    if reachable == 0 {
        log::error!("This maze is unsolvable");
        return Ok(Outcome::Unsolvable);
    }

    log::info!("Solving with {kind}");
    let mut paths: Vec<Path> = Vec::new();
    maze_paths::solve(&grid, kind, |p| {
        if !p.is_empty() {
            paths.push(p);
        }
    })?;
    if paths.is_empty() {
        log::error!("No solutions were found for this solvable maze with {kind}");
        return Ok(Outcome::NoSolution);
    }

    sort_longest_first(&mut paths);
    log::info!("Found {} solution(s)", paths.len());
    for p in &paths {
        log::info!("{}", format_path(p, start, finish, &charset));
    }

    if cli.draw {
        if let Some(shortest) = paths.last() {
            // DFS reports its visit order, which is not a walkable route:
            // only join cells that are graph neighbours.
            let graph = maze_paths::build_graph(&grid)?;
            let drawing = if graph.path_cost(shortest).is_some() {
                grid.render_path(&charset, shortest, cli.mark)
            } else {
                grid.render_cells(&charset, shortest, cli.mark)
            };
            writeln!(out, "{drawing}")?;
        }
    }
    if cli.json {
        let report = SolveReport {
            solver: kind,
            start,
            finish,
            paths: &paths,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    }

    Ok(Outcome::Solved(paths.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SOLVABLE: &str = "\
S.....
.#.##.
.#...#
.###.F
";

    const UNSOLVABLE: &str = "\
S.#...
.##.#.
...#.F
";

    fn setup(maze: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.txt");
        fs::write(&path, maze).unwrap();
        (dir, path)
    }

    fn cli(maze: &std::path::Path, extra: &[&str]) -> Cli {
        let config = maze.with_file_name("settings.json");
        fs::write(&config, MazeSettings::default().to_json().unwrap()).unwrap();
        let mut args = vec![
            "maze-solver".to_owned(),
            "--config".to_owned(),
            config.to_string_lossy().into_owned(),
            "-f".to_owned(),
            maze.to_string_lossy().into_owned(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn solves_with_every_solver() {
        let (_dir, maze) = setup(SOLVABLE);
        for kind in SolverKind::ALL {
            let mut out = Vec::new();
            let outcome = run(&cli(&maze, &["-s", kind.code()]), &mut out).unwrap();
            assert!(outcome.is_success(), "{kind}: {outcome:?}");
            assert!(out.is_empty());
        }
    }

    #[test]
    fn unsolvable_maze_is_reported() {
        let (_dir, maze) = setup(UNSOLVABLE);
        let outcome = run(&cli(&maze, &["-s", "DJK"]), &mut Vec::new()).unwrap();
        assert_eq!(outcome, Outcome::Unsolvable);
        assert!(!outcome.is_success());
    }

    #[test]
    fn draw_overlays_the_path() {
        let (_dir, maze) = setup("S..\n##.\n##F\n");
        let mut out = Vec::new();
        run(&cli(&maze, &["--draw"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "S**\n##*\n##F\n\n");
    }

    #[test]
    fn draw_keeps_walls_for_dfs_visit_order() {
        // DFS visits (0,1) and (0,0) before F, and (0,0) is not next to F.
        let (_dir, maze) = setup("..\n#.\nFS\n");
        let mut out = Vec::new();
        run(&cli(&maze, &["-s", "DFS", "--draw"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "**\n#.\nFS\n\n");
    }

    #[test]
    fn json_lists_paths() {
        let (_dir, maze) = setup(SOLVABLE);
        let mut out = Vec::new();
        let outcome = run(&cli(&maze, &["-s", "BFSR", "--json"]), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["solver"], "BFSR");
        let Outcome::Solved(n) = outcome else {
            panic!("expected a solution, got {outcome:?}");
        };
        assert_eq!(value["paths"].as_array().map(Vec::len), Some(n));
    }

    #[test]
    fn bad_solver_code_fails_before_loading() {
        let (_dir, maze) = setup(SOLVABLE);
        let err = run(&cli(&maze, &["-s", "XYZ"]), &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("MazeSolver"), "{err:#}");
    }

    #[test]
    fn load_errors_carry_context() {
        let (_dir, maze) = setup("");
        let err = run(&cli(&maze, &[]), &mut Vec::new()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to load the maze"), "{msg}");
        assert!(msg.contains("empty"), "{msg}");
    }

    fn bundled(name: &str) -> Cli {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let config = root.join("mazesettings.json");
        let maze = root.join("mazes").join(name);
        Cli::try_parse_from([
            "maze-solver".to_owned(),
            "--config".to_owned(),
            config.to_string_lossy().into_owned(),
            "-f".to_owned(),
            maze.to_string_lossy().into_owned(),
        ])
        .unwrap()
    }

    #[test]
    fn bundled_mazes() {
        let mut out = Vec::new();
        assert!(run(&bundled("maze8x6.txt"), &mut out).unwrap().is_success());
        assert_eq!(
            run(&bundled("maze8x6-unsolvable.txt"), &mut out).unwrap(),
            Outcome::Unsolvable
        );

        let mut loops = bundled("maze10x6-loops.txt");
        loops.solver = Some("DFSR".into());
        let outcome = run(&loops, &mut out).unwrap();
        assert!(matches!(outcome, Outcome::Solved(n) if n > 1), "{outcome:?}");
    }

    #[test]
    fn verbosity_counts() {
        let (_dir, maze) = setup(SOLVABLE);
        assert_eq!(cli(&maze, &["-vv"]).verbose, 2);
        assert_eq!(cli(&maze, &[]).verbose, 0);
    }
}
