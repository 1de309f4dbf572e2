//! Tic-tac-toe session in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe_session::cli::{Cli, Command, DEFAULT_CONFIG};
use tictactoe_session::{Engine, Mark, Score, SessionConfig, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SessionConfig::resolve(cli.config.as_deref(), Path::new(DEFAULT_CONFIG))?
        .with_score_dir(cli.score_dir);

    match cli.command {
        Command::Play {
            first,
            second,
            first_glyph,
            second_glyph,
        } => {
            let config = config.with_players(first, second, first_glyph, second_glyph);
            init_file_tracing(&config)?;
            run_play(config)
        }
        Command::Score { reset } => {
            init_stderr_tracing();
            run_score(&config, reset)
        }
    }
}

/// Log to a file so the TUI screen stays clean.
fn init_file_tracing(config: &SessionConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive TUI.
#[instrument(skip(config))]
fn run_play(config: SessionConfig) -> Result<()> {
    info!(score_dir = %config.score_dir().display(), "Starting session");
    let engine = Engine::new(config.score_store());
    tui::run(engine, &config)
}

/// Print, and optionally reset, the saved score.
#[instrument(skip(config))]
fn run_score(config: &SessionConfig, reset: bool) -> Result<()> {
    let mut engine = Engine::new(config.score_store());
    if reset {
        engine.try_reset_score().with_context(|| {
            format!(
                "Failed to reset score in {}",
                engine.store().path().display()
            )
        })?;
        info!("Score reset");
    }
    print_score(engine.score());
    Ok(())
}

fn print_score(score: Score) {
    println!("{} wins: {}", Mark::First, score.wins(Mark::First));
    println!("{} wins: {}", Mark::Second, score.wins(Mark::Second));
    println!("Draws:  {}", score.draws());
}
