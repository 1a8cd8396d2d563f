//! Adjacency rule: two orthogonally adjacent marks of one side forfeit the
//! game to the other side.

use crate::{Board, Cell, Side};

/// Returns the first same-side orthogonal pair in scan order.
///
/// Cells are visited in scan order and each cell's neighbours in the fixed
/// order of [`Cell::neighbors`].
pub fn forfeit_pair(board: &Board) -> Option<(Side, Cell, Cell)> {
    board.marks().find_map(|(cell, side)| {
        cell.neighbors()
            .find(|&neighbor| board.get(neighbor).side() == Some(side))
            .map(|neighbor| (side, cell, neighbor))
    })
}

/// Checks for a forfeit and returns the side that wins because of it.
pub fn check_winner(board: &Board) -> Option<Side> {
    forfeit_pair(board).map(|(side, _, _)| side.other())
}
