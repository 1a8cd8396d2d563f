//! Error types for grid operations.

use crate::{Cell, Side};
use derive_more::{Display, Error};
use tracing::instrument;

/// Specific failure conditions when touching the grid or a game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GridErrorKind {
    /// The cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(Cell),

    /// Coordinates outside the 3x3 grid.
    #[display("coordinates ({}, {}) are out of bounds", _0, _1)]
    OutOfBounds(usize, usize),

    /// The game has already finished.
    #[display("game is already over")]
    GameOver,

    /// A move was attempted out of turn.
    #[display("it is {}'s turn", _0)]
    NotYourTurn(Side),

    /// Text input could not be parsed.
    #[display("parse error: {}", _0)]
    Parse(String),
}

/// Grid error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Grid error: {} at {}:{}", kind, file, line)]
pub struct GridError {
    /// What went wrong.
    pub kind: GridErrorKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl GridError {
    /// Creates a new grid error, recording the caller's location.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GridErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GridErrorKind {
        &self.kind
    }
}
