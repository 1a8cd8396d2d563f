//! Application state and input handling.

use super::input::{cell_at, cell_for_digit, move_cursor};
use crate::PlayConfig;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use strictly_grid::{Cell, Game, GameStatus, GridErrorKind};
use tracing::{debug, instrument, warn};

const HOME: Cell = Cell::ALL[4];

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Cell,
    status_message: String,
    cell_areas: Vec<(Cell, Rect)>,
}

impl App {
    /// Creates the application and lets the machine open if it moves first.
    #[instrument(skip(config))]
    pub fn new(config: &PlayConfig) -> Self {
        let game = Game::new(*config.rule(), *config.human(), config.first_side());
        let mut app = Self {
            game,
            cursor: HOME,
            status_message: String::new(),
            cell_areas: Vec::new(),
        };
        app.start();
        app
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// The current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Records where each cell was last drawn, for pointer mapping.
    pub fn set_cell_areas(&mut self, cell_areas: Vec<(Cell, Rect)>) {
        self.cell_areas = cell_areas;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(cell) = cell_for_digit(c) {
                    self.cursor = cell;
                    self.play(cell);
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Handles a left click at a terminal position.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        match cell_at(&self.cell_areas, column, row) {
            Some(cell) => {
                self.cursor = cell;
                self.play(cell);
            }
            None => debug!(column, row, "Click outside the board"),
        }
    }

    /// Plays the human's move at `cell` followed by the machine's reply.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: Cell) {
        if self.game.status().is_over() {
            debug!("Ignoring move after game over");
            return;
        }

        match self.game.play_human(cell) {
            Ok(turn) => {
                debug!(?turn, "Turn complete");
                self.report();
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = match e.kind() {
                    GridErrorKind::Occupied(_) => "That cell is already taken.".to_string(),
                    kind => kind.to_string(),
                };
            }
        }
    }

    /// Starts a new game with the same settings.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.cursor = HOME;
        self.start();
    }

    fn start(&mut self) {
        if self.game.awaiting_human() {
            self.status_message = format!(
                "You play {}. {}",
                self.game.human(),
                self.game.rule().summary()
            );
            return;
        }

        if let Err(e) = self.game.play_machine() {
            warn!(error = %e, "Machine could not open");
            self.status_message = e.kind().to_string();
            return;
        }
        self.report();
    }

    fn report(&mut self) {
        self.status_message = match (self.game.status(), self.game.prediction()) {
            (GameStatus::InProgress, Some(prediction)) => {
                format!("Computer calculated game result: {prediction}")
            }
            (GameStatus::InProgress, None) => format!("You play {}.", self.game.human()),
            (status, _) => format!("{status} Press 'r' to restart or 'q' to quit."),
        };
    }
}
