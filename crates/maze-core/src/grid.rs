//! The [`MazeGrid`] type: a rectangular grid of open/blocked cells with a
//! start and a finish.
//!
//! The grid knows nothing about graphs: corridor links produced by graph
//! construction live on the graph nodes, never on the cells.

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A 2D maze grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGrid {
    states: Vec<CellState>,
    bounds: Range,
    start: Option<Point>,
    finish: Option<Point>,
}

impl MazeGrid {
    /// Create a new grid with every cell blocked and no start or finish.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            states: vec![CellState::Blocked; bounds.len()],
            bounds,
            start: None,
            finish: None,
        }
    }

    /// Create a grid whose cell states are given by `f`, called in row-major
    /// order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> CellState) -> Self {
        let mut grid = Self::new(width, height);
        for (state, p) in grid.states.iter_mut().zip(grid.bounds.iter()) {
            *state = f(p);
        }
        grid
    }

    /// Assemble a grid from row-major states whose endpoints are already
    /// known to be in bounds and open.
    pub(crate) fn from_parts(
        width: i32,
        height: i32,
        states: Vec<CellState>,
        start: Point,
        finish: Point,
    ) -> Self {
        let bounds = Range::new(0, 0, width, height);
        debug_assert_eq!(states.len(), bounds.len());
        Self {
            states,
            bounds,
            start: Some(start),
            finish: Some(finish),
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.width() + p.x) as usize)
    }

    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p)
            .ok_or_else(|| GridError::out_of_bounds(p, self.width(), self.height()))
    }

    /// The cell at `(row, col)`. Out-of-range positions are an error.
    pub fn cell(&self, row: i32, col: i32) -> Result<Cell, GridError> {
        let p = Point::at(row, col);
        let i = self.checked_index(p)?;
        Ok(Cell {
            pos: p,
            state: self.states[i],
        })
    }

    /// The cell at `p`, or `None` if `p` is outside the grid.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| Cell {
            pos: p,
            state: self.states[i],
        })
    }

    /// State at `p`. Positions outside the grid read as blocked.
    #[inline]
    pub fn state_at(&self, p: Point) -> CellState {
        self.index(p)
            .map_or(CellState::Blocked, |i| self.states[i])
    }

    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.state_at(p).is_open()
    }

    /// Change the state of the cell at `p`.
    pub fn set_state(&mut self, p: Point, state: CellState) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.states[i] = state;
        Ok(())
    }

    /// Mark `p` as the start point. The cell is opened.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.set_state(p, CellState::Open)?;
        self.start = Some(p);
        Ok(())
    }

    /// Mark `p` as the finish point. The cell is opened.
    pub fn set_finish(&mut self, p: Point) -> Result<(), GridError> {
        self.set_state(p, CellState::Open)?;
        self.finish = Some(p);
        Ok(())
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Option<Point> {
        self.finish
    }

    /// The start cell with its current state.
    pub fn start_cell(&self) -> Option<Cell> {
        self.start.and_then(|p| self.at(p))
    }

    /// The finish cell with its current state.
    pub fn finish_cell(&self) -> Option<Cell> {
        self.finish.and_then(|p| self.at(p))
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_open()).count()
    }
}
