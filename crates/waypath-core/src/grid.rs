//! A rectangular walkability map.
//!
//! [`Grid`] is a row-major matrix of [`Cell`] markers distinguishing
//! walkable from blocked positions. It is a read-only input to the grid
//! search in `waypath-search`; construction and mutation happen before a
//! search starts.

use std::fmt;

use crate::geom::Point;

/// A map cell marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Walkable,
    Blocked,
}

/// Errors from [`Grid::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input had no rows, or an empty first row.
    #[error("grid input is empty")]
    Empty,
    /// Row `row` has a different length than the first row.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    /// A character other than `'0'` (walkable) or `'1'` (blocked).
    #[error("unknown cell marker {0:?}")]
    UnknownMarker(char),
}

/// A 2D grid of [`Cell`] markers with row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell walkable.
    ///
    /// Non-positive dimensions yield an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        if width <= 0 || height <= 0 {
            return Self {
                cells: Vec::new(),
                width: 0,
                height: 0,
            };
        }
        Self {
            cells: vec![Cell::Walkable; (width * height) as usize],
            width,
            height,
        }
    }

    /// Parse a grid from rows of `'0'` (walkable) and `'1'` (blocked)
    /// characters. All rows must have the same length.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        if height == 0 {
            return Err(GridError::Empty);
        }
        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    len,
                    expected: width,
                });
            }
            for c in row.chars() {
                cells.push(match c {
                    '0' => Cell::Walkable,
                    '1' => Cell::Blocked,
                    other => return Err(GridError::UnknownMarker(other)),
                });
            }
        }

        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Width (column count) of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (row count) of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the point lies within the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.cell(p) == Some(Cell::Walkable)
    }

    /// Set the cell at `p`. Out-of-bounds points are ignored.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if self.contains(p) {
            self.cells[(p.y * self.width + p.x) as usize] = cell;
        }
    }

    /// Mark the cell at `p` blocked.
    pub fn block(&mut self, p: Point) {
        self.set(p, Cell::Blocked);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = match self.cells[(y * self.width + x) as usize] {
                    Cell::Walkable => '0',
                    Cell::Blocked => '1',
                };
                write!(f, "{c}")?;
            }
            if y + 1 < self.height {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse(&["01", "10"]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
