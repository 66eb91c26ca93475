//! Error types for grid access and the text format.

use thiserror::Error;

use crate::geom::Point;

/// Grid access errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row/col lookup fell outside the grid.
    #[error("position (row {row}, col {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        width: i32,
        height: i32,
    },
}

impl GridError {
    pub(crate) fn out_of_bounds(p: Point, width: i32, height: i32) -> Self {
        GridError::OutOfBounds {
            row: p.y,
            col: p.x,
            width,
            height,
        }
    }
}

/// Errors raised while parsing a maze from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains no rows.
    #[error("maze text is empty")]
    Empty,

    /// A row is empty or whitespace only.
    #[error("line {line} is blank")]
    BlankLine { line: usize },

    /// A row is not as wide as the first one.
    #[error("line {line} has width {found}, expected {expected}")]
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character that is not part of the charset.
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnknownChar {
        ch: char,
        line: usize,
        column: usize,
    },

    /// More than one start marker.
    #[error("more than one start point (second at line {line}, column {column})")]
    DuplicateStart { line: usize, column: usize },

    /// More than one finish marker.
    #[error("more than one finish point (second at line {line}, column {column})")]
    DuplicateFinish { line: usize, column: usize },

    #[error("maze has no start point")]
    MissingStart,

    #[error("maze has no finish point")]
    MissingFinish,

    /// The charset maps two roles to the same character.
    #[error("charset character {0:?} is used for more than one role")]
    AmbiguousCharset(char),
}
