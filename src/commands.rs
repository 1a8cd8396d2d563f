//! One-shot commands that inspect a position.

use anyhow::{Context, Result};
use serde::Serialize;
use strictly_grid::{Board, GameStatus, MoveOutcome, Searcher, Side, WinRule};
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
struct SolveOutput {
    board: String,
    side: Side,
    rule: WinRule,
    best: Option<MoveOutcome>,
    nodes: u64,
}

/// Searches `board` for `side` and renders the result.
#[instrument(skip(board), fields(board = %board))]
pub fn solve(board: &Board, side: Side, rule: WinRule, json: bool) -> Result<String> {
    let mut scratch = board.clone();
    let report = Searcher::new(rule).search(&mut scratch, side);
    info!(nodes = report.nodes, "Solve finished");

    if json {
        let output = SolveOutput {
            board: board.to_string(),
            side,
            rule,
            best: report.outcome,
            nodes: report.nodes,
        };
        return serde_json::to_string_pretty(&output).context("Failed to serialize solve output");
    }

    Ok(match report.outcome {
        Some(best) => format!(
            "best move for {side}: {} (result: {}, {} placements searched)",
            best.cell, best.winner, report.nodes
        ),
        None => format!("no move for {side}: the board is full"),
    })
}

/// Renders the status of `board` under `rule`.
#[instrument(skip(board), fields(board = %board))]
pub fn check(board: &Board, rule: WinRule) -> String {
    match rule.status(board) {
        GameStatus::InProgress => "no winner yet".to_string(),
        status => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_solve_text() {
        let out = solve(&Board::new(), Side::A, WinRule::Line, false).unwrap();
        assert!(out.starts_with("best move for A: (0, 0) (result: tie"), "{out}");
    }

    #[test]
    fn test_solve_json() {
        let out = solve(&board("A../.../..."), Side::A, WinRule::Adjacency, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["best"], serde_json::json!({"x": 0, "y": 1, "winner": "B"}));
        assert_eq!(value["rule"], "adjacency");
        assert_eq!(value["side"], "A");
    }

    #[test]
    fn test_solve_full_board() {
        let out = solve(&board("ABA/BAB/BAB"), Side::A, WinRule::Line, false).unwrap();
        assert_eq!(out, "no move for A: the board is full");
    }

    #[test]
    fn test_check() {
        assert_eq!(check(&Board::new(), WinRule::Line), "no winner yet");
        assert_eq!(check(&board("AAA/.B./B.."), WinRule::Line), "A wins!");
        assert_eq!(check(&board("AAA/.B./B.."), WinRule::Adjacency), "B wins!");
        assert_eq!(check(&board("ABA/BAB/BAB"), WinRule::Line), "Tie!");
    }
}
