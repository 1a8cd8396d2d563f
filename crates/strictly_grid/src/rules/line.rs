//! Line rule: three of a side's marks in a row, column or diagonal.

use crate::{Board, Cell, Side};

const fn c(x: usize, y: usize) -> Cell {
    Cell::ALL[x * Cell::SIZE + y]
}

/// The eight winning lines: fixed `x`, then fixed `y`, then diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Fixed x
    [c(0, 0), c(0, 1), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 0), c(2, 1), c(2, 2)],
    // Fixed y
    [c(0, 0), c(1, 0), c(2, 0)],
    [c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 2), c(1, 2), c(2, 2)],
    // Diagonals
    [c(0, 0), c(1, 1), c(2, 2)],
    [c(0, 2), c(1, 1), c(2, 0)],
];

/// Returns the first completed line and the side holding it.
pub fn winning_line(board: &Board) -> Option<(Side, [Cell; 3])> {
    LINES.into_iter().find_map(|line @ [first, second, third]| {
        let side = board.get(first).side()?;
        (board.get(second).side() == Some(side) && board.get(third).side() == Some(side))
            .then_some((side, line))
    })
}

/// Checks if a side has completed a line.
///
/// Returns the side owning the first completed line in [`LINES`] order.
pub fn check_winner(board: &Board) -> Option<Side> {
    winning_line(board).map(|(side, _)| side)
}
