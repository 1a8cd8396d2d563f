//! Command-line interface for strictly_noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_grid::{Board, Side, WinRule};

/// Strictly Noughts - play a 3x3 mark-placement game against an exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "3x3 mark-placement game against an exhaustive look-ahead search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the play configuration file
        #[arg(short, long, default_value = "strictly_noughts.toml")]
        config: PathBuf,

        /// Win rule (overrides the config file)
        #[arg(short, long)]
        rule: Option<WinRule>,

        /// Side played by the human (overrides the config file)
        #[arg(long)]
        human: Option<Side>,

        /// Let the human make the first move
        #[arg(long)]
        human_first: bool,
    },

    /// Search a position and print the best move
    Solve {
        /// Board in row/row/row notation, e.g. "A../.B./..."
        #[arg(short, long)]
        board: Board,

        /// Side to move
        #[arg(short, long)]
        side: Side,

        /// Win rule
        #[arg(short, long, default_value = "line")]
        rule: WinRule,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the status of a position
    Check {
        /// Board in row/row/row notation
        #[arg(short, long)]
        board: Board,

        /// Win rule
        #[arg(short, long, default_value = "line")]
        rule: WinRule,
    },
}
