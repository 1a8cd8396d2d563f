//! Strictly Noughts - play a 3x3 mark-placement game against a search engine
//!
//! The game logic lives in [`strictly_grid`]. This crate adds the terminal
//! front end, the command-line commands and configuration.
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{PlayConfig, check, solve};
//! use strictly_grid::{Board, Side, WinRule};
//!
//! # fn example() -> anyhow::Result<()> {
//! let board: Board = "A../.../...".parse()?;
//! println!("{}", solve(&board, Side::A, WinRule::Adjacency, false)?);
//! println!("{}", check(&board, WinRule::Line));
//! let config = PlayConfig::default();
//! assert_eq!(config.first_side(), Side::A);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod tui;

pub use cli::{Cli, Command};
pub use commands::{check, solve};
pub use config::{ConfigError, PlayConfig};
pub use tui::{App, AppAction, cell_at, cell_for_digit, move_cursor, run_tui};
