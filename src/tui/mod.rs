//! Terminal UI for a tic-tac-toe session.
//!
//! The engine never calls into this module; the app feeds it key
//! presses and redraws from the snapshot each operation returns.

pub mod app;
pub mod input;
pub mod setup;
pub mod ui;

use crate::config::SessionConfig;
use crate::games::tictactoe::{Engine, Mark};
use crate::store::ScoreStore;
use anyhow::{Context, Result};
use app::{App, Control};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use setup::SetupForm;
use tracing::{error, info, instrument};

/// Runs an interactive session until the player quits.
#[instrument(skip(engine, config))]
pub fn run<S: ScoreStore>(engine: Engine<S>, config: &SessionConfig) -> Result<()> {
    let form = SetupForm::new(
        config.player_setup(Mark::First),
        config.player_setup(Mark::Second),
    );
    let mut app = App::new(engine, form);

    info!("Starting TUI");
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    }
    info!(score = ?app.snapshot().score, "TUI closed");
    result
}

fn event_loop<S: ScoreStore>(terminal: &mut DefaultTerminal, app: &mut App<S>) -> Result<()> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")?
            && app.handle_key(key) == Control::Quit
        {
            return Ok(());
        }
    }
}
