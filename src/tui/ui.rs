//! Stateless rendering of the game screen.

use super::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_grid::{Cell, Mark, Side};

const BOARD_WIDTH: u16 = 33;
const BOARD_HEIGHT: u16 = 9;

/// Draws the whole screen and returns the area each cell occupies.
pub fn draw(frame: &mut Frame, app: &App) -> Vec<(Cell, Rect)> {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area);

    let game = app.game();
    let title = Paragraph::new(vec![
        Line::from(format!("Strictly Noughts - {} rule", game.rule())),
        Line::from(format!("You are {} · {}", game.human(), game.rule().summary())),
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
    let cell_areas = draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9, arrows + Enter, or click to move · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    cell_areas
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Cell, Rect)> {
    let highlight = app.game().highlight();
    let thirds = [Constraint::Ratio(1, 3); 3];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(thirds)
        .split(area);

    let mut cell_areas = Vec::with_capacity(Cell::ALL.len());
    for (y, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(thirds)
            .split(*row);

        for (x, cell_area) in cols.iter().enumerate() {
            if let Ok(cell) = Cell::new(x, y) {
                draw_cell(frame, *cell_area, app, cell, highlight.contains(&cell));
                cell_areas.push((cell, *cell_area));
            }
        }
    }
    cell_areas
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: Cell, highlighted: bool) {
    let (symbol, base_style) = match app.game().board().get(cell) {
        Mark::Empty => (
            (cell.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Mark::Occupied(Side::A) => (
            "A".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Mark::Occupied(Side::B) => (
            "B".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::Yellow)
    } else if cell == app.cursor() && app.game().awaiting_human() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
