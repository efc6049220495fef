//! Strictly Rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_rewind::{Driver, RewindConfig, render_json};
use strictly_tictactoe::MoveOrder;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config)?;

    match cli.command {
        Command::Play { descending } => run_play(config, descending),
        Command::Replay { cells, jump, json } => run_replay(config, cells, jump, json),
    }
}

/// Run the interactive game loop on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: RewindConfig, descending: bool) -> Result<()> {
    let config = if descending {
        config.with_move_order(MoveOrder::Descending)
    } else {
        config
    };

    let mut driver = Driver::new(config);
    let stdin = std::io::stdin();
    driver
        .run(stdin.lock(), std::io::stdout())
        .context("Terminal I/O failed")
}

/// Replay cells and print the resulting view
#[instrument(skip(config))]
fn run_replay(config: RewindConfig, cells: Vec<usize>, jump: Option<usize>, json: bool) -> Result<()> {
    let (driver, _ignored) = Driver::replay(config, &cells, jump)?;
    let output = if json {
        render_json(&driver.session().current_view())?
    } else {
        driver.render()
    };
    println!("{}", output.trim_end());
    Ok(())
}
