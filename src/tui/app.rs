//! Application state and logic.

use super::input::{PlayAction, move_cursor, play_action};
use super::setup::{FormEvent, SetupForm};
use crate::clock::{Clock, SystemClock};
use crate::games::tictactoe::{Engine, EngineError, Outcome, Position, Snapshot};
use crate::store::ScoreStore;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, instrument};

/// Which screen has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Entering names and glyphs.
    Setup,
    /// Playing rounds.
    Playing,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading input.
    Continue,
    /// Leave the program.
    Quit,
}

/// Main application state.
///
/// Holds the engine and the latest snapshot it returned; drawing only
/// ever reads the snapshot.
pub struct App<S, C = SystemClock> {
    engine: Engine<S, C>,
    snapshot: Snapshot,
    screen: Screen,
    form: SetupForm,
    cursor: Position,
    outcome: Option<Outcome>,
    status_message: String,
}

impl<S: ScoreStore, C: Clock> App<S, C> {
    /// Creates an application on the setup screen.
    pub fn new(engine: Engine<S, C>, form: SetupForm) -> Self {
        let snapshot = engine.snapshot();
        Self {
            engine,
            snapshot,
            screen: Screen::Setup,
            form,
            cursor: Position::Center,
            outcome: None,
            status_message: "Enter player names, then press Enter".to_string(),
        }
    }

    /// Latest engine snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The setup form.
    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Outcome of the last finished round, while it is on screen.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The underlying engine.
    pub fn engine(&self) -> &Engine<S, C> {
        &self.engine
    }

    /// Handles a key event from the terminal.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        match self.screen {
            Screen::Setup => self.handle_setup_key(key.code),
            Screen::Playing => self.handle_play_key(key.code),
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) -> Control {
        match self.form.handle_key(code) {
            FormEvent::Editing => {}
            FormEvent::Cancel => return Control::Quit,
            FormEvent::Submit => {
                let (first, second) = self.form.values();
                match self.engine.start_round(first, second) {
                    Ok(snapshot) => {
                        debug!("Setup complete");
                        self.snapshot = snapshot;
                        self.screen = Screen::Playing;
                        self.outcome = None;
                        self.cursor = Position::Center;
                        self.status_message = self.turn_message();
                    }
                    Err(EngineError::InvalidConfiguration(_)) => {
                        self.status_message = "Please enter both player names!".to_string();
                    }
                    Err(e) => self.status_message = e.to_string(),
                }
            }
        }
        Control::Continue
    }

    fn handle_play_key(&mut self, code: KeyCode) -> Control {
        let Some(action) = play_action(code) else {
            return Control::Continue;
        };
        debug!(?action, "Play action");

        match action {
            PlayAction::Quit => return Control::Quit,
            PlayAction::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            PlayAction::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            PlayAction::PlaceAtCursor => self.place(self.cursor),
            PlayAction::Undo => match self.engine.undo() {
                Ok(snapshot) => {
                    self.snapshot = snapshot;
                    self.status_message = self.turn_message();
                }
                Err(e) => self.status_message = e.to_string(),
            },
            PlayAction::ResetRound => {
                self.snapshot = self.engine.reset_round();
                self.outcome = None;
                self.status_message = self.turn_message();
            }
            PlayAction::NewGame => {
                self.snapshot = self.engine.new_game();
                self.outcome = None;
                self.screen = Screen::Setup;
                self.status_message = "Enter player names, then press Enter".to_string();
            }
        }
        Control::Continue
    }

    fn place(&mut self, pos: Position) {
        match self.engine.place(pos) {
            Ok(report) => {
                self.snapshot = report.snapshot;
                self.outcome = report.outcome;
                self.status_message = match report.outcome {
                    Some(_) => "r: play again   n: new game   q: quit".to_string(),
                    None => self.turn_message(),
                };
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn turn_message(&self) -> String {
        super::ui::turn_text(&self.snapshot)
    }
}
