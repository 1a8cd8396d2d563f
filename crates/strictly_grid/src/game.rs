//! Human-versus-machine game session.
//!
//! Drives the turn cycle: the human places a mark, the rule is checked, the
//! machine searches for its reply and places it, and the rule is checked
//! again.

use crate::{
    Board, Cell, GameStatus, GridError, GridErrorKind, Move, MoveOutcome, Outcome, Searcher,
    Side, WinRule,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// What happened during one human turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// The human's move.
    pub human: Move,
    /// The machine's reply, absent when the human's move ended the game.
    pub reply: Option<MoveOutcome>,
    /// Status after the turn.
    pub status: GameStatus,
}

/// One game between a human and the search engine.
#[derive(Debug, Clone)]
pub struct Game {
    rule: WinRule,
    human: Side,
    first: Side,
    board: Board,
    to_move: Side,
    status: GameStatus,
    history: Vec<Move>,
    prediction: Option<Outcome>,
}

impl Game {
    /// Creates a game. `first` is the side that moves first.
    #[instrument]
    pub fn new(rule: WinRule, human: Side, first: Side) -> Self {
        Self {
            rule,
            human,
            first,
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
            prediction: None,
        }
    }

    /// The active rule.
    pub fn rule(&self) -> WinRule {
        self.rule
    }

    /// The human's side.
    pub fn human(&self) -> Side {
        self.human
    }

    /// The machine's side.
    pub fn machine(&self) -> Side {
        self.human.other()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The result the machine predicted with its last move.
    pub fn prediction(&self) -> Option<Outcome> {
        self.prediction
    }

    /// Returns true when the human is expected to move.
    pub fn awaiting_human(&self) -> bool {
        !self.status.is_over() && self.to_move == self.human
    }

    /// Cells that decided the game, empty while it is in progress.
    pub fn highlight(&self) -> Vec<Cell> {
        match self.status {
            GameStatus::Won(_) => self.rule.highlight(&self.board),
            _ => Vec::new(),
        }
    }

    /// Lets the machine search and play its move.
    ///
    /// Returns `Ok(None)` only if no empty cell is left.
    #[instrument(skip(self), fields(rule = %self.rule, machine = %self.machine()))]
    pub fn play_machine(&mut self) -> Result<Option<MoveOutcome>, GridError> {
        let machine = self.machine();
        self.ensure_turn(machine)?;

        let report = Searcher::new(self.rule).search(&mut self.board, machine);
        let Some(best) = report.outcome else {
            return Ok(None);
        };

        self.place(Move::new(machine, best.cell))?;
        self.prediction = Some(best.winner);
        info!(cell = %best.cell, predicted = %best.winner, nodes = report.nodes, "Machine moved");
        Ok(Some(best))
    }

    /// Plays the human's move and, if the game continues, the machine's reply.
    #[instrument(skip(self), fields(rule = %self.rule, human = %self.human))]
    pub fn play_human(&mut self, cell: Cell) -> Result<Turn, GridError> {
        self.ensure_turn(self.human)?;

        let human = Move::new(self.human, cell);
        self.place(human)?;

        let reply = if self.status.is_over() {
            None
        } else {
            self.play_machine()?
        };

        Ok(Turn {
            human,
            reply,
            status: self.status,
        })
    }

    /// Clears the board and starts again with the same settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.board = Board::new();
        self.to_move = self.first;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.prediction = None;
    }

    #[track_caller]
    fn ensure_turn(&self, side: Side) -> Result<(), GridError> {
        if self.status.is_over() {
            return Err(GridError::new(GridErrorKind::GameOver));
        }
        if self.to_move != side {
            return Err(GridError::new(GridErrorKind::NotYourTurn(self.to_move)));
        }
        Ok(())
    }

    fn place(&mut self, action: Move) -> Result<(), GridError> {
        self.board.apply_move(action.cell, action.side)?;
        self.history.push(action);
        self.to_move = action.side.other();
        self.status = self.rule.status(&self.board);
        debug!(%action, status = %self.status, "Move applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn test_machine_opening() {
        let mut game = Game::new(WinRule::Line, Side::B, Side::A);
        assert!(!game.awaiting_human());
        let opening = game.play_machine().unwrap().unwrap();
        assert_eq!(opening, MoveOutcome::new(c(0, 0), Outcome::Tie));
        assert_eq!(game.prediction(), Some(Outcome::Tie));
        assert!(game.awaiting_human());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_human_out_of_turn() {
        let mut game = Game::new(WinRule::Line, Side::B, Side::A);
        let err = game.play_human(c(1, 1)).unwrap_err();
        assert_eq!(err.kind(), &GridErrorKind::NotYourTurn(Side::A));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_machine_out_of_turn() {
        let mut game = Game::new(WinRule::Line, Side::A, Side::A);
        let err = game.play_machine().unwrap_err();
        assert_eq!(err.kind(), &GridErrorKind::NotYourTurn(Side::A));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new(WinRule::Line, Side::B, Side::A);
        game.play_machine().unwrap();
        let before = game.board().clone();
        let err = game.play_human(c(0, 0)).unwrap_err();
        assert_eq!(err.kind(), &GridErrorKind::Occupied(c(0, 0)));
        assert_eq!(game.board(), &before);
        assert!(game.awaiting_human());
    }

    #[test]
    fn test_human_forfeit_ends_game_without_reply() {
        let mut game = Game::new(WinRule::Adjacency, Side::A, Side::A);
        let first = game.play_human(c(0, 0)).unwrap();
        assert_eq!(
            first.reply,
            Some(MoveOutcome::new(c(2, 2), Outcome::Won(Side::B)))
        );
        assert_eq!(first.status, GameStatus::InProgress);

        let second = game.play_human(c(0, 1)).unwrap();
        assert_eq!(second.reply, None);
        assert_eq!(second.status, GameStatus::Won(Side::B));
        assert_eq!(game.highlight(), vec![c(0, 0), c(0, 1)]);

        let err = game.play_human(c(1, 1)).unwrap_err();
        assert_eq!(err.kind(), &GridErrorKind::GameOver);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut game = Game::new(WinRule::Line, Side::B, Side::A);
        game.play_machine().unwrap();
        game.play_human(c(1, 1)).unwrap();
        game.restart();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Side::A);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.prediction(), None);
    }
}
