//! Plain-text maze format.
//!
//! One line per row; every row has the same width. Four characters of a
//! [`Charset`] mark open cells, walls, the start and the finish:
//!
//! ```text
//! S..#
//! #.##
//! #..F
//! ```

use crate::cell::{Cell, CellState};
use crate::error::ParseError;
use crate::geom::Point;
use crate::grid::MazeGrid;

/// Characters used by the text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Charset {
    pub open: char,
    pub wall: char,
    pub start: char,
    pub finish: char,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            open: '.',
            wall: '#',
            start: 'S',
            finish: 'F',
        }
    }
}

impl Charset {
    /// Check that the four roles use four different characters.
    pub fn validate(&self) -> Result<(), ParseError> {
        let chars = [self.open, self.wall, self.start, self.finish];
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(ParseError::AmbiguousCharset(*c));
            }
        }
        Ok(())
    }
}

impl MazeGrid {
    /// Parse a maze from text.
    ///
    /// The grid must be rectangular and contain exactly one start and one
    /// finish. Line and column numbers in errors are 1-based.
    pub fn parse(text: &str, charset: &Charset) -> Result<MazeGrid, ParseError> {
        charset.validate()?;

        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Err(ParseError::Empty);
        }

        let width = lines[0].chars().count();
        for (i, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                return Err(ParseError::BlankLine { line: i + 1 });
            }
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedLine {
                    line: i + 1,
                    expected: width,
                    found,
                });
            }
        }

        let mut states = Vec::with_capacity(width * lines.len());
        let mut start = None;
        let mut finish = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let p = Point::at(row as i32, col as i32);
                let state = if ch == charset.wall {
                    CellState::Blocked
                } else if ch == charset.open {
                    CellState::Open
                } else if ch == charset.start {
                    if start.replace(p).is_some() {
                        return Err(ParseError::DuplicateStart {
                            line: row + 1,
                            column: col + 1,
                        });
                    }
                    CellState::Open
                } else if ch == charset.finish {
                    if finish.replace(p).is_some() {
                        return Err(ParseError::DuplicateFinish {
                            line: row + 1,
                            column: col + 1,
                        });
                    }
                    CellState::Open
                } else {
                    return Err(ParseError::UnknownChar {
                        ch,
                        line: row + 1,
                        column: col + 1,
                    });
                };
                states.push(state);
            }
        }

        let start = start.ok_or(ParseError::MissingStart)?;
        let finish = finish.ok_or(ParseError::MissingFinish)?;
        Ok(MazeGrid::from_parts(
            width as i32,
            lines.len() as i32,
            states,
            start,
            finish,
        ))
    }

    /// Render the grid back to text.
    pub fn render(&self, charset: &Charset) -> String {
        self.render_path(charset, &[], charset.open)
    }

    /// Render the grid with `path` drawn using `mark`.
    ///
    /// Consecutive path cells are joined when they lie on one straight run
    /// of open cells, so a path over corridor end points draws every cell it
    /// walks through. Other pairs are not joined. Walls are never painted,
    /// and start and finish keep their own characters.
    pub fn render_path(&self, charset: &Charset, path: &[Cell], mark: char) -> String {
        self.render_marks(charset, self.walk(path), mark)
    }

    /// Render the grid with only the given cells marked, without joining
    /// them. Suits cell sequences that are not walkable routes, such as a
    /// traversal order.
    pub fn render_cells(&self, charset: &Charset, cells: &[Cell], mark: char) -> String {
        self.render_marks(charset, cells.iter().map(|c| c.pos), mark)
    }

    fn render_marks(
        &self,
        charset: &Charset,
        marks: impl IntoIterator<Item = Point>,
        mark: char,
    ) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| {
                        if self.is_open(Point::new(x, y)) {
                            charset.open
                        } else {
                            charset.wall
                        }
                    })
                    .collect()
            })
            .collect();

        let mut put = |p: Point, ch: char| {
            if self.is_open(p) {
                rows[p.y as usize][p.x as usize] = ch;
            }
        };

        for p in marks {
            put(p, mark);
        }
        if let Some(s) = self.start() {
            put(s, charset.start);
        }
        if let Some(f) = self.finish() {
            put(f, charset.finish);
        }

        let mut out = String::with_capacity(rows.len() * (self.width() as usize + 1));
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    /// Expand a path of corridor end points into every grid point it covers.
    fn walk(&self, path: &[Cell]) -> Vec<Point> {
        let mut result = Vec::new();
        for window in path.windows(2) {
            let a = window[0].pos;
            result.push(a);
            if let Some(run) = self.open_run(a, window[1].pos) {
                result.extend(run);
            }
        }
        if let Some(last) = path.last() {
            result.push(last.pos);
        }
        result
    }

    /// Points strictly between `a` and `b`, if they share a row or column
    /// and every one of them is open.
    fn open_run(&self, a: Point, b: Point) -> Option<Vec<Point>> {
        if a.x != b.x && a.y != b.y {
            return None;
        }
        let step = Point::new((b.x - a.x).signum(), (b.y - a.y).signum());
        let mut run = Vec::new();
        let mut c = a;
        while c != b {
            if c != a {
                if !self.is_open(c) {
                    return None;
                }
                run.push(c);
            }
            c = c + step;
        }
        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "S..#\n#.##\n#..F\n";

    #[test]
    fn parse_basic_maze() {
        let g = MazeGrid::parse(MAZE, &Charset::default()).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.start(), Some(Point::at(0, 0)));
        assert_eq!(g.finish(), Some(Point::at(2, 3)));
        assert_eq!(g.open_count(), 7);
        assert!(g.start_cell().unwrap().is_open());
    }

    #[test]
    fn parse_accepts_crlf() {
        let g = MazeGrid::parse("S.\r\n.F\r\n", &Charset::default()).unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.height(), 2);
    }

    #[test]
    fn parse_custom_charset() {
        let cs = Charset {
            open: '_',
            wall: 'X',
            start: 'A',
            finish: 'B',
        };
        let g = MazeGrid::parse("A_X\nX_B\n", &cs).unwrap();
        assert_eq!(g.start(), Some(Point::at(0, 0)));
        assert_eq!(g.finish(), Some(Point::at(1, 2)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        let cs = Charset::default();
        assert_eq!(MazeGrid::parse("", &cs), Err(ParseError::Empty));
        assert_eq!(
            MazeGrid::parse("S.\n  \n.F", &cs),
            Err(ParseError::BlankLine { line: 2 })
        );
        assert_eq!(
            MazeGrid::parse("S..\n.F", &cs),
            Err(ParseError::RaggedLine {
                line: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            MazeGrid::parse("S.\n?F", &cs),
            Err(ParseError::UnknownChar {
                ch: '?',
                line: 2,
                column: 1
            })
        );
        assert_eq!(
            MazeGrid::parse("SS\n.F", &cs),
            Err(ParseError::DuplicateStart { line: 1, column: 2 })
        );
        assert_eq!(
            MazeGrid::parse("SF\nF.", &cs),
            Err(ParseError::DuplicateFinish { line: 2, column: 1 })
        );
        assert_eq!(MazeGrid::parse("..\n.F", &cs), Err(ParseError::MissingStart));
        assert_eq!(MazeGrid::parse("S.\n..", &cs), Err(ParseError::MissingFinish));
    }

    #[test]
    fn ambiguous_charset_rejected() {
        let cs = Charset {
            open: '.',
            wall: '.',
            start: 'S',
            finish: 'F',
        };
        assert_eq!(
            MazeGrid::parse("S.F", &cs),
            Err(ParseError::AmbiguousCharset('.'))
        );
    }

    #[test]
    fn render_round_trips() {
        let cs = Charset::default();
        let g = MazeGrid::parse(MAZE, &cs).unwrap();
        assert_eq!(g.render(&cs), MAZE);
    }

    #[test]
    fn render_path_fills_corridors() {
        let cs = Charset::default();
        let g = MazeGrid::parse(MAZE, &cs).unwrap();
        let path = [
            Cell::open(0, 0),
            Cell::open(0, 1),
            Cell::open(2, 1),
            Cell::open(2, 3),
        ];
        assert_eq!(g.render_path(&cs, &path, '*'), "S*.#\n#*##\n#**F\n");
    }

    #[test]
    fn render_path_never_crosses_walls() {
        let cs = Charset::default();
        let g = MazeGrid::parse("..\n#.\nFS\n", &cs).unwrap();
        // A traversal order whose last step jumps down column 0 over a wall.
        let order = [
            Cell::open(2, 1),
            Cell::open(0, 1),
            Cell::open(0, 0),
            Cell::open(2, 0),
        ];
        assert_eq!(g.render_path(&cs, &order, '*'), "**\n#*\nFS\n");
        // Diagonal pairs are not joined either.
        let diagonal = [Cell::open(0, 0), Cell::open(1, 1)];
        assert_eq!(g.render_path(&cs, &diagonal, '*'), "*.\n#*\nFS\n");
    }

    #[test]
    fn render_cells_marks_only_given_cells() {
        let cs = Charset::default();
        let g = MazeGrid::parse("S...F\n", &cs).unwrap();
        let cells = [Cell::open(0, 0), Cell::open(0, 2), Cell::open(0, 4)];
        assert_eq!(g.render_cells(&cs, &cells, '*'), "S.*.F\n");
        assert_eq!(g.render_path(&cs, &cells, '*'), "S***F\n");
    }
}
