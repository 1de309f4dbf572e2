//! Command-line interface for the `tictactoe` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Config file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG: &str = "tictactoe.toml";

/// Two-player tic-tac-toe with a persistent scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with undo and a persistent scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the score record (overrides config)
    #[arg(long, global = true)]
    pub score_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive session in the terminal
    Play {
        /// Name pre-filled for the first player
        #[arg(long)]
        first: Option<String>,

        /// Name pre-filled for the second player
        #[arg(long)]
        second: Option<String>,

        /// Symbol pre-selected for the first player
        #[arg(long)]
        first_glyph: Option<String>,

        /// Symbol pre-selected for the second player
        #[arg(long)]
        second_glyph: Option<String>,
    },

    /// Show the saved score
    Score {
        /// Reset the saved score to zero
        #[arg(long)]
        reset: bool,
    },
}
