//! Moves as first-class values.

use crate::{Cell, Side};
use derive_new::new;
use serde::Serialize;
use std::fmt;

/// A side placing its mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Where the mark goes.
    pub cell: Cell,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.side, self.cell)
    }
}
