//! **maze-core**: the maze grid and its building blocks.
//!
//! This crate provides the types every other part of the workspace works
//! with: geometry primitives, open/blocked cells, the [`MazeGrid`] with its
//! start and finish, and the plain-text maze format.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod text;

pub use cell::{Cell, CellState};
pub use error::{GridError, ParseError};
pub use geom::{Direction, Point, Range};
pub use grid::MazeGrid;
pub use text::Charset;
