//! Win rules.
//!
//! Each rule is a pure function of the board. [`WinRule`] selects which one
//! is active so that detection and search stay independent of the variant.

pub mod adjacency;
pub mod draw;
pub mod line;

use crate::{Board, Cell, GameStatus, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The selectable win-rule variants.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WinRule {
    /// Three in a row, column or diagonal wins.
    #[default]
    Line,
    /// Two orthogonally adjacent marks of one side hand the win to the other side.
    Adjacency,
}

impl WinRule {
    /// Returns the winner under this rule, or `None` if nobody has won yet.
    ///
    /// Never reports a tie; see [`WinRule::status`] for that.
    pub fn detect(self, board: &Board) -> Option<Side> {
        match self {
            WinRule::Line => line::check_winner(board),
            WinRule::Adjacency => adjacency::check_winner(board),
        }
    }

    /// The winner recorded when `mover`'s placement triggers this rule.
    pub fn recorded_winner(self, mover: Side) -> Side {
        match self {
            WinRule::Line => mover,
            WinRule::Adjacency => mover.other(),
        }
    }

    /// Full game status: a winner, a tie on a full board, or still in progress.
    #[instrument(level = "debug", skip(board), fields(board = %board))]
    pub fn status(self, board: &Board) -> GameStatus {
        if draw::is_tie(board, self) {
            return GameStatus::Tie;
        }
        match self.detect(board) {
            Some(side) => GameStatus::Won(side),
            None => GameStatus::InProgress,
        }
    }

    /// Cells responsible for the current win, for display.
    pub fn highlight(self, board: &Board) -> Vec<Cell> {
        match self {
            WinRule::Line => line::winning_line(board)
                .map(|(_, cells)| cells.to_vec())
                .unwrap_or_default(),
            WinRule::Adjacency => adjacency::forfeit_pair(board)
                .map(|(_, first, second)| vec![first, second])
                .unwrap_or_default(),
        }
    }

    /// One-line rule summary.
    pub fn summary(self) -> &'static str {
        match self {
            WinRule::Line => "Complete a row, column or diagonal to win.",
            WinRule::Adjacency => "Placing two of your marks side by side loses.",
        }
    }
}

/// Detects the winner of a board under the given rule.
pub fn detect_winner(board: &Board, rule: WinRule) -> Option<Side> {
    rule.detect(board)
}
