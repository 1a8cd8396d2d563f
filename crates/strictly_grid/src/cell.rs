//! Cell coordinates on the 3x3 grid.

use crate::{GridError, GridErrorKind};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A cell on the grid, addressed by `(x, y)` with both coordinates in `0..3`.
///
/// The search scans `x` in the outer loop and `y` in the inner loop. The
/// shim draws `x` as the visual column and `y` as the visual row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    x: usize,
    y: usize,
}

impl Cell {
    /// Side length of the grid.
    pub const SIZE: usize = 3;

    /// All cells in search scan order (x outer, y inner).
    pub const ALL: [Cell; 9] = [
        Cell { x: 0, y: 0 },
        Cell { x: 0, y: 1 },
        Cell { x: 0, y: 2 },
        Cell { x: 1, y: 0 },
        Cell { x: 1, y: 1 },
        Cell { x: 1, y: 2 },
        Cell { x: 2, y: 0 },
        Cell { x: 2, y: 1 },
        Cell { x: 2, y: 2 },
    ];

    /// Creates a cell, rejecting coordinates outside the grid.
    #[track_caller]
    pub fn new(x: usize, y: usize) -> Result<Self, GridError> {
        if x < Self::SIZE && y < Self::SIZE {
            Ok(Self { x, y })
        } else {
            Err(GridError::new(GridErrorKind::OutOfBounds(x, y)))
        }
    }

    /// Column coordinate.
    pub fn x(self) -> usize {
        self.x
    }

    /// Row coordinate.
    pub fn y(self) -> usize {
        self.y
    }

    /// Key-pad index (0-8) in visual reading order, `y * 3 + x`.
    pub fn index(self) -> usize {
        self.y * Self::SIZE + self.x
    }

    /// Inverse of [`Cell::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::SIZE * Self::SIZE).then(|| Self {
            x: index % Self::SIZE,
            y: index / Self::SIZE,
        })
    }

    /// In-bounds orthogonal neighbours, in the fixed order
    /// `(x, y-1)`, `(x-1, y)`, `(x+1, y)`, `(x, y+1)`.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        let (x, y) = (self.x as isize, self.y as isize);
        [(x, y - 1), (x - 1, y), (x + 1, y), (x, y + 1)]
            .into_iter()
            .filter_map(|(nx, ny)| {
                let size = Self::SIZE as isize;
                ((0..size).contains(&nx) && (0..size).contains(&ny)).then(|| Cell {
                    x: nx as usize,
                    y: ny as usize,
                })
            })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = GridError;

    /// Parses `"x,y"` coordinates or a key-pad number `1..=9`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((x, y)) = s.split_once(',') {
            let parse = |part: &str| {
                part.trim().parse::<usize>().map_err(|e| {
                    GridError::new(GridErrorKind::Parse(format!("bad coordinate {part:?}: {e}")))
                })
            };
            return Cell::new(parse(x)?, parse(y)?);
        }

        let key = s
            .parse::<usize>()
            .map_err(|e| GridError::new(GridErrorKind::Parse(format!("bad cell {s:?}: {e}"))))?;
        key.checked_sub(1)
            .and_then(Cell::from_index)
            .ok_or_else(|| GridError::new(GridErrorKind::Parse(format!("key {key} is not 1-9"))))
    }
}
