//! Tie detection.

use super::WinRule;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner under the active rule is a tie.
#[instrument(level = "trace", skip(board))]
pub fn is_tie(board: &Board, rule: WinRule) -> bool {
    is_full(board) && rule.detect(board).is_none()
}
