//! Exhaustive look-ahead search.
//!
//! Plain minimax over every empty cell, without pruning or memoisation. The
//! board is mutated in place and every speculative mark is rolled back by a
//! guard, so the caller's board is unchanged when a search returns.

use crate::outcome::is_strictly_better;
use crate::{Board, Cell, Mark, MoveOutcome, Outcome, Side, WinRule};
use derive_new::new;
use serde::Serialize;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// A mark placed for the duration of one branch. Dropping it empties the cell.
struct Speculation<'a> {
    board: &'a mut Board,
    cell: Cell,
}

impl<'a> Speculation<'a> {
    fn place(board: &'a mut Board, cell: Cell, side: Side) -> Self {
        debug_assert!(board.is_empty(cell), "speculating on occupied {cell}");
        board.set(cell, Mark::Occupied(side));
        Self { board, cell }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.set(self.cell, Mark::Empty);
    }
}

/// Result of a search with the number of placements it examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct SearchReport {
    /// Best move, or `None` when the board has no empty cell.
    pub outcome: Option<MoveOutcome>,
    /// Speculative placements made during the search.
    pub nodes: u64,
}

/// Searches the game tree under a fixed rule.
#[derive(Debug, Clone)]
pub struct Searcher {
    rule: WinRule,
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher for the given rule.
    pub fn new(rule: WinRule) -> Self {
        Self { rule, nodes: 0 }
    }

    /// Finds the best move for `mover`.
    ///
    /// Cells are tried in scan order (x outer, y inner). A placement that
    /// triggers the rule is taken only if nothing has been recorded yet;
    /// otherwise the opponent's best reply decides the result, with a full
    /// board counting as a tie. A candidate replaces the current best only if
    /// [`is_strictly_better`], so the first of several equal moves is kept.
    #[instrument(skip_all, fields(rule = %self.rule, board = %board, mover = %mover))]
    pub fn search(&mut self, board: &mut Board, mover: Side) -> SearchReport {
        self.nodes = 0;
        let outcome = self.best_move(board, mover);
        debug!(nodes = self.nodes, ?outcome, "Search complete");
        SearchReport::new(outcome, self.nodes)
    }

    fn best_move(&mut self, board: &mut Board, mover: Side) -> Option<MoveOutcome> {
        let mut best: Option<MoveOutcome> = None;

        for cell in Cell::ALL {
            if !board.is_empty(cell) {
                continue;
            }
            self.nodes += 1;

            let mut speculation = Speculation::place(board, cell, mover);
            let candidate = if self.rule.detect(&speculation).is_some() {
                if best.is_some() {
                    continue;
                }
                Outcome::Won(self.rule.recorded_winner(mover))
            } else {
                match self.best_move(&mut speculation, mover.other()) {
                    Some(reply) => reply.winner,
                    None => Outcome::Tie,
                }
            };

            let improves = best
                .is_none_or(|current| is_strictly_better(candidate, current.winner, mover));
            if improves {
                best = Some(MoveOutcome::new(cell, candidate));
            }
        }

        best
    }
}

/// Finds the best move for `mover` under `rule`.
///
/// Returns `None` only when the board is full.
pub fn find_best_move(board: &mut Board, mover: Side, rule: WinRule) -> Option<MoveOutcome> {
    Searcher::new(rule).search(board, mover).outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    fn c(x: usize, y: usize) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn test_speculation_restores_on_drop() {
        let mut b = Board::new();
        {
            let guard = Speculation::place(&mut b, c(1, 1), Side::A);
            assert_eq!(guard.get(c(1, 1)), Mark::Occupied(Side::A));
        }
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("ABA/BAB/BAB");
        assert_eq!(find_best_move(&mut b, Side::A, WinRule::Line), None);
    }

    #[test]
    fn test_last_cell_line_win() {
        let mut b = board("ABA/BAB/BA.");
        let best = find_best_move(&mut b, Side::A, WinRule::Line).unwrap();
        assert_eq!(best, MoveOutcome::new(c(2, 2), Outcome::Won(Side::A)));
    }

    #[test]
    fn test_last_cell_without_win_is_tie() {
        let mut b = board("ABA/ABB/BA.");
        let best = find_best_move(&mut b, Side::A, WinRule::Line).unwrap();
        assert_eq!(best, MoveOutcome::new(c(2, 2), Outcome::Tie));
    }

    #[test]
    fn test_node_count_matches_empty_cells_at_last_ply() {
        let mut b = board("ABA/ABB/BA.");
        let report = Searcher::new(WinRule::Line).search(&mut b, Side::A);
        assert_eq!(report.nodes, 1);
    }
}
