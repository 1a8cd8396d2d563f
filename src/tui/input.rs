//! Keyboard and pointer input mapping.

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use strictly_grid::Cell;

/// Moves the cursor one cell in the direction of an arrow key.
///
/// Other keys, and moves off the edge of the grid, leave it in place.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (x, y) = (cursor.x(), cursor.y());
    let target = match key {
        KeyCode::Left => x.checked_sub(1).map(|x| (x, y)),
        KeyCode::Right => Some((x + 1, y)),
        KeyCode::Up => y.checked_sub(1).map(|y| (x, y)),
        KeyCode::Down => Some((x, y + 1)),
        _ => None,
    };
    target
        .and_then(|(x, y)| Cell::new(x, y).ok())
        .unwrap_or(cursor)
}

/// Maps a key-pad digit `1`-`9` to a cell in reading order.
pub fn cell_for_digit(c: char) -> Option<Cell> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Cell::from_index)
}

/// Maps a terminal position to the cell drawn there.
///
/// `cells` holds the area each cell was last rendered into.
pub fn cell_at(cells: &[(Cell, Rect)], column: u16, row: u16) -> Option<Cell> {
    let position = Position::new(column, row);
    cells
        .iter()
        .find(|(_, area)| area.contains(position))
        .map(|&(cell, _)| cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn test_arrows_move_within_grid() {
        assert_eq!(move_cursor(c(1, 1), KeyCode::Left), c(0, 1));
        assert_eq!(move_cursor(c(1, 1), KeyCode::Right), c(2, 1));
        assert_eq!(move_cursor(c(1, 1), KeyCode::Up), c(1, 0));
        assert_eq!(move_cursor(c(1, 1), KeyCode::Down), c(1, 2));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(c(0, 0), KeyCode::Left), c(0, 0));
        assert_eq!(move_cursor(c(0, 0), KeyCode::Up), c(0, 0));
        assert_eq!(move_cursor(c(2, 2), KeyCode::Right), c(2, 2));
        assert_eq!(move_cursor(c(2, 2), KeyCode::Down), c(2, 2));
        assert_eq!(move_cursor(c(1, 1), KeyCode::Char('x')), c(1, 1));
    }

    #[test]
    fn test_digits() {
        assert_eq!(cell_for_digit('1'), Some(c(0, 0)));
        assert_eq!(cell_for_digit('3'), Some(c(2, 0)));
        assert_eq!(cell_for_digit('7'), Some(c(0, 2)));
        assert_eq!(cell_for_digit('0'), None);
        assert_eq!(cell_for_digit('q'), None);
    }

    fn uneven_layout() -> Vec<(Cell, Rect)> {
        // Columns 7, 6, 7 wide and rows 2, 1, 2 high, as a squeezed board draws.
        let cols = [(10, 7), (17, 6), (23, 7)];
        let rows = [(5, 2), (7, 1), (8, 2)];
        Cell::ALL
            .iter()
            .map(|&cell| {
                let (x, width) = cols[cell.x()];
                let (y, height) = rows[cell.y()];
                (cell, Rect::new(x, y, width, height))
            })
            .collect()
    }

    #[test]
    fn test_pointer_mapping() {
        let layout = uneven_layout();
        assert_eq!(cell_at(&layout, 10, 5), Some(c(0, 0)));
        assert_eq!(cell_at(&layout, 20, 5), Some(c(1, 0)));
        assert_eq!(cell_at(&layout, 29, 9), Some(c(2, 2)));
        assert_eq!(cell_at(&layout, 18, 7), Some(c(1, 1)));
    }

    #[test]
    fn test_pointer_follows_drawn_cell_edges() {
        let layout = uneven_layout();
        // Even thirds of the 20x5 area would put (23, 8) in the centre cell.
        assert_eq!(cell_at(&layout, 23, 8), Some(c(2, 2)));
        assert_eq!(cell_at(&layout, 22, 8), Some(c(1, 2)));
        assert_eq!(cell_at(&layout, 23, 6), Some(c(2, 0)));
    }

    #[test]
    fn test_pointer_outside_board() {
        let layout = uneven_layout();
        assert_eq!(cell_at(&layout, 9, 6), None);
        assert_eq!(cell_at(&layout, 12, 4), None);
        assert_eq!(cell_at(&layout, 30, 6), None);
        assert_eq!(cell_at(&layout, 12, 10), None);
        assert_eq!(cell_at(&[], 0, 0), None);
    }
}
