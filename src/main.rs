//! Strictly Noughts - Unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_grid::{Board, Side, WinRule};
use strictly_noughts::{Cli, Command, PlayConfig, check, run_tui, solve};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            rule,
            human,
            human_first,
        } => run_play(&config, rule, human, human_first),
        Command::Solve {
            board,
            side,
            rule,
            json,
        } => {
            initialize_tracing();
            run_solve(&board, side, rule, json)
        }
        Command::Check { board, rule } => {
            initialize_tracing();
            run_check(&board, rule)
        }
    }
}

/// Run the interactive terminal game
fn run_play(
    config_path: &Path,
    rule: Option<WinRule>,
    human: Option<Side>,
    human_first: bool,
) -> Result<()> {
    let mut config = PlayConfig::load_or_default(config_path)?;

    // Command-line flags override the file
    if let Some(rule) = rule {
        config = config.with_rule(rule);
    }
    if let Some(human) = human {
        config = config.with_human(human);
    }
    if human_first {
        config = config.with_machine_first(false);
    }

    run_tui(config)
}

/// Search a position and print the best move
#[instrument(skip(board), fields(board = %board))]
fn run_solve(board: &Board, side: Side, rule: WinRule, json: bool) -> Result<()> {
    info!("Solving position");
    println!("{}", solve(board, side, rule, json)?);
    Ok(())
}

/// Print the status of a position
#[instrument(skip(board), fields(board = %board))]
fn run_check(board: &Board, rule: WinRule) -> Result<()> {
    println!("{}", check(board, rule));
    Ok(())
}

/// Log to stderr so stdout carries only command output
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_noughts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
