//! Tests for the one-shot commands and the app driving a full game.

use crossterm::event::KeyCode;
use strictly_grid::{Board, GameStatus, Side, WinRule};
use strictly_noughts::{App, PlayConfig, check, solve};

#[test]
fn test_solve_reports_adjacency_forfeit() {
    let board: Board = "A../.../...".parse().unwrap();
    let out = solve(&board, Side::A, WinRule::Adjacency, false).unwrap();
    assert!(out.starts_with("best move for A: (0, 1) (result: B"), "{out}");
}

#[test]
fn test_solve_json_is_machine_readable() {
    let board: Board = "ABA/BAB/BA.".parse().unwrap();
    let out = solve(&board, Side::A, WinRule::Line, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["board"], "ABA/BAB/BA.");
    assert_eq!(value["best"]["x"], 2);
    assert_eq!(value["best"]["y"], 2);
    assert_eq!(value["best"]["winner"], "A");
    assert_eq!(value["nodes"], 1);
}

#[test]
fn test_check_adjacency_tie() {
    let board: Board = "ABA/BAB/ABA".parse().unwrap();
    assert_eq!(check(&board, WinRule::Adjacency), "Tie!");
    assert_eq!(check(&board, WinRule::Line), "A wins!");
}

#[test]
fn test_adjacency_game_through_app() {
    let config = PlayConfig::default().with_rule(WinRule::Adjacency);
    let mut app = App::new(&config);
    assert_eq!(app.game().board().to_string(), "A../.../...");
    assert_eq!(app.status_message(), "Computer calculated game result: B");

    // Every reply A finds touches its own opening mark.
    app.handle_key(KeyCode::Char('9'));
    assert_eq!(app.game().status(), GameStatus::Won(Side::B));
    assert!(app.status_message().starts_with("B wins!"));
}
