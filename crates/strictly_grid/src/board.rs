//! The 3x3 board.

use crate::{Cell, GridError, GridErrorKind, Mark, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, trace};

/// 3x3 grid of marks, indexed `[x][y]`.
///
/// Only cells that were explicitly set are occupied. The search writes into
/// the board speculatively and restores every cell it touched before
/// returning, so callers observe it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; Cell::SIZE]; Cell::SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at a cell.
    pub fn get(&self, cell: Cell) -> Mark {
        self.cells[cell.x()][cell.y()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    /// Empty cells in search scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|&cell| self.is_empty(cell))
    }

    /// Occupied cells with their side, in search scan order.
    pub fn marks(&self) -> impl Iterator<Item = (Cell, Side)> + '_ {
        Cell::ALL
            .into_iter()
            .filter_map(|cell| self.get(cell).side().map(|side| (cell, side)))
    }

    /// Places a side's mark on an empty cell.
    #[track_caller]
    #[instrument(skip(self), fields(board = %self))]
    pub fn apply_move(&mut self, cell: Cell, side: Side) -> Result<(), GridError> {
        if !self.is_empty(cell) {
            return Err(GridError::new(GridErrorKind::Occupied(cell)));
        }
        self.set(cell, Mark::Occupied(side));
        trace!(%cell, %side, "Mark placed");
        Ok(())
    }

    /// Writes a cell without checking its previous contents.
    pub(crate) fn set(&mut self, cell: Cell, mark: Mark) {
        self.cells[cell.x()][cell.y()] = mark;
    }
}

impl fmt::Display for Board {
    /// Writes the `row/row/row` notation, each row listing `x = 0..3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..Cell::SIZE {
            if y > 0 {
                f.write_str("/")?;
            }
            for x in 0..Cell::SIZE {
                write!(f, "{}", self.cells[x][y].symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GridError;

    /// Parses the `row/row/row` notation: `A`/`B` marks, `.` for empty.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let rows: Vec<&str> = compact.split('/').collect();
        if rows.len() != Cell::SIZE {
            return Err(GridError::new(GridErrorKind::Parse(format!(
                "expected {} rows separated by '/', found {}",
                Cell::SIZE,
                rows.len()
            ))));
        }

        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != Cell::SIZE {
                return Err(GridError::new(GridErrorKind::Parse(format!(
                    "row {y} has {} cells, expected {}",
                    symbols.len(),
                    Cell::SIZE
                ))));
            }
            for (x, symbol) in symbols.into_iter().enumerate() {
                let mark = match symbol.to_ascii_uppercase() {
                    '.' | '_' | '-' => Mark::Empty,
                    'A' => Mark::Occupied(Side::A),
                    'B' => Mark::Occupied(Side::B),
                    other => {
                        return Err(GridError::new(GridErrorKind::Parse(format!(
                            "unexpected symbol {other:?} at ({x}, {y})"
                        ))));
                    }
                };
                board.cells[x][y] = mark;
            }
        }
        Ok(board)
    }
}
