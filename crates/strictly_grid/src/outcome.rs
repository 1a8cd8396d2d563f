//! Game results and the ordering the search uses to compare them.

use crate::{Cell, Side};
use derive_new::new;
use serde::{Serialize, Serializer};
use std::fmt;

/// A finished result: one side won, or a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side won.
    Won(Side),
    /// Full board with no winner.
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won(side) => write!(f, "{side}"),
            Outcome::Tie => f.write_str("tie"),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    /// No winner yet and empty cells remain.
    InProgress,
    /// Game ended with a winner.
    Won(Side),
    /// Game ended in a tie.
    Tie,
}

impl GameStatus {
    /// Returns true once the game has a winner or is tied.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Won(side) => write!(f, "{side} wins!"),
            GameStatus::Tie => f.write_str("Tie!"),
        }
    }
}

/// A candidate move and the result it leads to under continued play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, new)]
pub struct MoveOutcome {
    /// Where the mark goes.
    #[serde(flatten)]
    pub cell: Cell,
    /// Result if this move is played.
    pub winner: Outcome,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.cell, self.winner)
    }
}

/// Whether `candidate` should replace `current` as the best result for `mover`.
///
/// Only a switch into a `mover` win, or from an opponent win into a tie,
/// counts as an improvement. Equal results never replace each other, so the
/// first move found in scan order is kept.
pub fn is_strictly_better(candidate: Outcome, current: Outcome, mover: Side) -> bool {
    let win = Outcome::Won(mover);
    if current == win {
        false
    } else if candidate == win {
        true
    } else if current == Outcome::Tie {
        false
    } else {
        candidate == Outcome::Tie
    }
}
