//! Tic-tac-toe rules, round state and the session engine.

mod action;
mod engine;
pub mod invariants;
mod outcome;
mod player;
mod position;
mod round;
pub mod rules;
mod score;
mod types;

pub use action::{EngineError, Move};
pub use engine::{Engine, MoveReport, Snapshot};
pub use outcome::{Line, Outcome};
pub use player::{GlyphOption, Player, PlayerSetup, Players};
pub use position::Position;
pub use round::RoundState;
pub use score::Score;
pub use types::{Board, Mark, Square};
