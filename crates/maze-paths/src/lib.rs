//! Corridor-compacted maze graphs and the searches that run on them.
//!
//! [`build_graph`] scans a [`MazeGrid`](maze_core::MazeGrid) once and keeps
//! only the cells where a corridor ends, turns or branches, plus the start
//! and finish. Each remaining straight run becomes one weighted edge.
//!
//! Five solvers share the resulting [`Graph`]:
//!
//! | [`SolverKind`] | Code | Yields |
//! |---|---|---|
//! | [`Bfs`] | `BFS` | one path with the fewest edges |
//! | [`Backtrack`] | `BFSR` | every simple path |
//! | [`Dfs`] | `DFS` | the visit order each time the finish is reached |
//! | [`Backtrack`] | `DFSR` | every simple path |
//! | [`Dijkstra`] | `DJK` | one path with the lowest total cost |
//!
//! Every solver is an iterator over [`Path`]s running from start to finish.
//! An unreachable finish gives an empty iterator, not an error.

mod backtrack;
mod bfs;
mod builder;
mod dfs;
mod dijkstra;
mod error;
mod graph;
mod solver;

pub use backtrack::Backtrack;
pub use bfs::Bfs;
pub use builder::build_graph;
pub use dfs::Dfs;
pub use dijkstra::{Dijkstra, UNREACHABLE};
pub use error::BuildError;
pub use graph::{Graph, GraphNode, NodeId};
pub use solver::{SolverKind, Solutions, UnknownSolver, solve};

/// Cells from start to finish, both included.
pub type Path = Vec<maze_core::Cell>;
