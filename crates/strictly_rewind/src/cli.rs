//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play {
        /// List moves newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of moves and print the final position
    Replay {
        /// Cells to play in order (1-9, left to right, top to bottom)
        #[arg(required = true)]
        cells: Vec<usize>,

        /// Jump to this step after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
