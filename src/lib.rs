//! Two-player tic-tac-toe with session scoring, move history and undo.
//!
//! # Architecture
//!
//! - **Engine**: [`Engine`] owns players, the current round and the score.
//!   Every operation returns a [`Snapshot`] for the caller to redraw from.
//! - **Rules**: pure win/draw detection over a [`Board`].
//! - **Store**: [`ScoreStore`] persists the score between sessions.
//! - **TUI**: a ratatui front end that drives the engine from key presses.
//!
//! # Example
//!
//! ```
//! use tictactoe_session::{Engine, Mark, MemoryScoreStore, PlayerSetup};
//!
//! let mut engine = Engine::new(MemoryScoreStore::new());
//! engine
//!     .start_round(
//!         PlayerSetup::new(Mark::First, "Ada"),
//!         PlayerSetup::new(Mark::Second, "Bo"),
//!     )
//!     .unwrap();
//!
//! for pos in [0, 3, 1, 4] {
//!     engine.apply_move(pos).unwrap();
//! }
//! let report = engine.apply_move(2).unwrap();
//! assert_eq!(report.outcome.and_then(|o| o.winner()), Some(Mark::First));
//! assert_eq!(*engine.score().first_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod clock;
pub mod config;
mod games;
pub mod store;
pub mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Engine, EngineError, GlyphOption, Line, Mark, Move, MoveReport, Outcome, Player,
    PlayerSetup, Players, Position, RoundState, Score, Snapshot, Square, invariants, rules,
};

// Crate-level exports - Infrastructure
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{ConfigError, SessionConfig};
pub use store::{JsonFileScoreStore, MemoryScoreStore, SCORE_KEY, ScoreStore, StoreError};
