//! Core domain types: sides and marks.

use serde::{Deserialize, Serialize};

/// One of the two competing sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Side A.
    A,
    /// Side B.
    B,
}

impl Side {
    /// Returns the opposing side. Applying it twice yields the original side.
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Single-character symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Side::A => 'A',
            Side::B => 'B',
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a side.
    Occupied(Side),
}

impl Mark {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(side) => Some(side),
        }
    }

    /// Returns true for an empty cell.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single-character symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Occupied(side) => side.symbol(),
        }
    }
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        Mark::Occupied(side)
    }
}
