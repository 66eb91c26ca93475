//! The [`Cell`] type: one maze position and whether it can be walked.

use std::fmt;

use crate::geom::Point;

/// Walkability of a maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Open,
    #[default]
    Blocked,
}

impl CellState {
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, CellState::Open)
    }
}

/// A maze cell. Two cells are equal when position and state both match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub state: CellState,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32, state: CellState) -> Self {
        Self {
            pos: Point::at(row, col),
            state,
        }
    }

    /// An open cell at `(row, col)`.
    #[inline]
    pub const fn open(row: i32, col: i32) -> Self {
        Self::new(row, col, CellState::Open)
    }

    /// A blocked cell at `(row, col)`.
    #[inline]
    pub const fn blocked(row: i32, col: i32) -> Self {
        Self::new(row, col, CellState::Blocked)
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        self.state.is_open()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}
