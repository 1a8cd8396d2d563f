//! Strictly Grid - 3x3 mark-placement game logic
//!
//! Two sides take turns placing marks on a 3x3 board. One side is played by
//! an exhaustive look-ahead search. Two win rules are available:
//!
//! - **Line**: a side wins by holding a whole row, column or diagonal.
//! - **Adjacency**: a side that places two marks orthogonally next to each
//!   other hands the win to the other side.
//!
//! # Example
//!
//! ```
//! use strictly_grid::{Board, Cell, Outcome, Side, WinRule, find_best_move};
//!
//! let mut board = Board::new();
//! let best = find_best_move(&mut board, Side::A, WinRule::Line).unwrap();
//! assert_eq!(best.cell, Cell::new(0, 0).unwrap());
//! assert_eq!(best.winner, Outcome::Tie);
//! assert_eq!(board, Board::new());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod error;
mod game;
mod outcome;
pub mod rules;
mod search;
mod types;

pub use action::Move;
pub use board::Board;
pub use cell::Cell;
pub use error::{GridError, GridErrorKind};
pub use game::{Game, Turn};
pub use outcome::{GameStatus, MoveOutcome, Outcome, is_strictly_better};
pub use rules::{WinRule, detect_winner};
pub use search::{SearchReport, Searcher, find_best_move};
pub use types::{Mark, Side};
