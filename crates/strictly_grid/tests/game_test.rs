//! Scripted games through the session API.

use strictly_grid::{Cell, Game, GameStatus, GridErrorKind, MoveOutcome, Outcome, Side, WinRule};

fn c(x: usize, y: usize) -> Cell {
    Cell::new(x, y).unwrap()
}

#[test]
fn test_line_game_machine_punishes_blunder() {
    let mut game = Game::new(WinRule::Line, Side::B, Side::A);

    let opening = game.play_machine().unwrap();
    assert_eq!(opening, Some(MoveOutcome::new(c(0, 0), Outcome::Tie)));

    let turn = game.play_human(c(1, 1)).unwrap();
    assert_eq!(turn.reply, Some(MoveOutcome::new(c(0, 1), Outcome::Tie)));
    assert_eq!(turn.status, GameStatus::InProgress);

    let turn = game.play_human(c(2, 2)).unwrap();
    assert_eq!(turn.reply, Some(MoveOutcome::new(c(0, 2), Outcome::Won(Side::A))));
    assert_eq!(turn.status, GameStatus::Won(Side::A));
    assert_eq!(game.highlight(), vec![c(0, 0), c(0, 1), c(0, 2)]);
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_adjacency_game_machine_forced_to_forfeit() {
    let mut game = Game::new(WinRule::Adjacency, Side::B, Side::A);

    let opening = game.play_machine().unwrap();
    assert_eq!(opening, Some(MoveOutcome::new(c(0, 0), Outcome::Won(Side::B))));

    let turn = game.play_human(c(2, 2)).unwrap();
    assert_eq!(turn.reply, Some(MoveOutcome::new(c(0, 1), Outcome::Won(Side::B))));
    assert_eq!(turn.status, GameStatus::Won(Side::B));
    assert_eq!(game.prediction(), Some(Outcome::Won(Side::B)));

    let err = game.play_human(c(1, 1)).unwrap_err();
    assert_eq!(err.kind(), &GridErrorKind::GameOver);
}

#[test]
fn test_human_first_adjacency_game() {
    let mut game = Game::new(WinRule::Adjacency, Side::A, Side::A);
    assert!(game.awaiting_human());

    let turn = game.play_human(c(0, 0)).unwrap();
    assert_eq!(turn.human.cell, c(0, 0));
    assert_eq!(turn.reply, Some(MoveOutcome::new(c(2, 2), Outcome::Won(Side::B))));
    assert!(game.awaiting_human());
}
