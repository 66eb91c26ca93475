//! Turning found paths into log lines and JSON.

use maze_core::{Cell, Charset};
use maze_paths::{Path, SolverKind};
use serde::Serialize;

/// Sort paths longest first. Paths of equal length keep the order the
/// solver reported them in.
pub fn sort_longest_first(paths: &mut [Path]) {
    paths.sort_by(|a, b| b.len().cmp(&a.len()));
}

/// Render `path` as `(r,c) (S), (r,c), ..., (r,c) (F)`.
pub fn format_path(path: &[Cell], start: Cell, finish: Cell, charset: &Charset) -> String {
    path.iter()
        .map(|&cell| {
            if cell == start {
                format!("{cell} ({})", charset.start)
            } else if cell == finish {
                format!("{cell} ({})", charset.finish)
            } else {
                cell.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON shape of one run, printed by `--json`.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub solver: SolverKind,
    pub start: Cell,
    pub finish: Cell,
    pub paths: &'a [Path],
}
