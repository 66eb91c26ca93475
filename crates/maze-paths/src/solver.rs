//! The solver family behind one selector.

use std::fmt;
use std::str::FromStr;

use maze_core::{Cell, MazeGrid};
use thiserror::Error;

use crate::backtrack::Backtrack;
use crate::bfs::Bfs;
use crate::builder::build_graph;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::error::BuildError;
use crate::graph::Graph;

/// Which search strategy to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum SolverKind {
    /// Fewest edges, one path.
    #[default]
    Bfs,
    /// Every simple path, by backtracking.
    BfsRecursive,
    /// Visit-order sequence each time the finish is reached.
    Dfs,
    /// Every simple path, by backtracking. Same enumeration as
    /// [`SolverKind::BfsRecursive`].
    DfsRecursive,
    /// Lowest total cost, one path.
    Dijkstra,
}

impl SolverKind {
    pub const ALL: [SolverKind; 5] = [
        SolverKind::Bfs,
        SolverKind::BfsRecursive,
        SolverKind::Dfs,
        SolverKind::DfsRecursive,
        SolverKind::Dijkstra,
    ];

    /// Short code used in settings files and on the command line.
    pub const fn code(self) -> &'static str {
        match self {
            SolverKind::Bfs => "BFS",
            SolverKind::BfsRecursive => "BFSR",
            SolverKind::Dfs => "DFS",
            SolverKind::DfsRecursive => "DFSR",
            SolverKind::Dijkstra => "DJK",
        }
    }

    /// Start searching `graph` from `start` to `finish`.
    ///
    /// If either cell has no node in `graph` the sequence is empty.
    pub fn solve(self, graph: &Graph, start: Cell, finish: Cell) -> Solutions<'_> {
        let (Some(s), Some(f)) = (graph.find(&start), graph.find(&finish)) else {
            log::debug!("{self}: start {start} or finish {finish} is not in the graph");
            return Solutions::Empty;
        };
        match self {
            SolverKind::Bfs => Solutions::Bfs(Bfs::new(graph, s, f)),
            SolverKind::BfsRecursive | SolverKind::DfsRecursive => {
                Solutions::Backtrack(Backtrack::new(graph, s, f))
            }
            SolverKind::Dfs => Solutions::Dfs(Dfs::new(graph, s, f)),
            SolverKind::Dijkstra => Solutions::Dijkstra(Dijkstra::new(graph, s, f)),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A solver code that is not one of `BFS`, `BFSR`, `DFS`, `DFSR`, `DJK`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown solver `{0}` (expected one of BFS, BFSR, DFS, DFSR, DJK)")]
pub struct UnknownSolver(pub String);

impl FromStr for SolverKind {
    type Err = UnknownSolver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        SolverKind::ALL
            .into_iter()
            .find(|k| k.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownSolver(s.to_owned()))
    }
}

impl TryFrom<String> for SolverKind {
    type Error = UnknownSolver;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SolverKind> for String {
    fn from(kind: SolverKind) -> String {
        kind.code().to_owned()
    }
}

/// Lazily produced paths of one solve call. Finite and not restartable.
pub enum Solutions<'g> {
    Empty,
    Bfs(Bfs<'g>),
    Backtrack(Backtrack<'g>),
    Dfs(Dfs<'g>),
    Dijkstra(Dijkstra<'g>),
}

impl Iterator for Solutions<'_> {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Vec<Cell>> {
        match self {
            Solutions::Empty => None,
            Solutions::Bfs(it) => it.next(),
            Solutions::Backtrack(it) => it.next(),
            Solutions::Dfs(it) => it.next(),
            Solutions::Dijkstra(it) => it.next(),
        }
    }
}

/// Build the graph for `grid` and run `kind` on it, calling `on_path` once
/// per path found. Returns how many paths were reported.
///
/// The graph is rebuilt on every call. An unreachable finish is not an
/// error: the callback simply never runs.
pub fn solve<F>(grid: &MazeGrid, kind: SolverKind, mut on_path: F) -> Result<usize, BuildError>
where
    F: FnMut(Vec<Cell>),
{
    let start = grid.start_cell().ok_or(BuildError::MissingStart)?;
    let finish = grid.finish_cell().ok_or(BuildError::MissingFinish)?;
    let graph = build_graph(grid)?;

    let mut count = 0;
    for path in kind.solve(&graph, start, finish) {
        count += 1;
        on_path(path);
    }
    log::debug!("{kind} reported {count} path(s)");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{CellState, Charset, Point};

    fn grid(text: &str) -> MazeGrid {
        MazeGrid::parse(text, &Charset::default()).unwrap()
    }

    fn collect(text: &str, kind: SolverKind) -> Vec<Vec<Cell>> {
        let mut paths = Vec::new();
        let n = solve(&grid(text), kind, |p| paths.push(p)).unwrap();
        assert_eq!(n, paths.len());
        paths
    }

    #[test]
    fn codes_round_trip() {
        for kind in SolverKind::ALL {
            assert_eq!(kind.code().parse::<SolverKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.code());
        }
        assert_eq!("djk".parse::<SolverKind>(), Ok(SolverKind::Dijkstra));
        assert_eq!(" bfsr ".parse::<SolverKind>(), Ok(SolverKind::BfsRecursive));
        assert_eq!(
            "AStar".parse::<SolverKind>(),
            Err(UnknownSolver("AStar".to_owned()))
        );
        assert_eq!(SolverKind::default(), SolverKind::Bfs);
    }

    #[test]
    fn every_solver_solves_the_corner_corridor() {
        let expected = vec![Cell::open(0, 0), Cell::open(0, 2), Cell::open(2, 2)];
        for kind in SolverKind::ALL {
            let paths = collect("S..\n##.\n##F\n", kind);
            assert_eq!(paths, vec![expected.clone()], "{kind}");
        }
    }

    #[test]
    fn enclosed_finish_gives_no_paths() {
        let text = "\
S...#
.##.#
...##
####F
";
        for kind in SolverKind::ALL {
            assert!(collect(text, kind).is_empty(), "{kind}");
        }
    }

    #[test]
    fn recursive_variants_agree() {
        let text = "\
S.....
.#.#..
......
.#.#.F
";
        let a = collect(text, SolverKind::BfsRecursive);
        let b = collect(text, SolverKind::DfsRecursive);
        assert_eq!(a, b);
        assert!(a.len() > 1);
    }

    #[test]
    fn missing_node_yields_empty_sequence() {
        let g = build_graph(&grid("S.F\n")).unwrap();
        for kind in SolverKind::ALL {
            let mut it = kind.solve(&g, Cell::open(0, 0), Cell::open(5, 5));
            assert!(it.next().is_none(), "{kind}");
        }
    }

    #[test]
    fn empty_grid_reports_nothing() {
        let mut g = grid("SF\n");
        g.set_state(Point::at(0, 0), CellState::Blocked).unwrap();
        g.set_state(Point::at(0, 1), CellState::Blocked).unwrap();
        for kind in SolverKind::ALL {
            // The endpoints are remembered but their cells are now blocked,
            // so neither has a node.
            let n = solve(&g, kind, |_| panic!("no path expected")).unwrap();
            assert_eq!(n, 0);
        }
    }

    #[test]
    fn missing_endpoints_are_errors() {
        let g = MazeGrid::new(2, 2);
        assert_eq!(
            solve(&g, SolverKind::Bfs, |_| {}),
            Err(BuildError::MissingStart)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&SolverKind::Dijkstra).unwrap();
        assert_eq!(json, "\"DJK\"");
        let kind: SolverKind = serde_json::from_str("\"dfsr\"").unwrap();
        assert_eq!(kind, SolverKind::DfsRecursive);
        assert!(serde_json::from_str::<SolverKind>("\"XYZ\"").is_err());
    }
}
