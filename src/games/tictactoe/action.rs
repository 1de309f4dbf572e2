//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The move log is the
//! ordered record of them and is what undo rewinds.

use super::{Mark, Position};
use crate::clock::Timestamp;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
    /// When it was placed.
    pub timestamp: Timestamp,
}

impl Move {
    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.coordinate())
    }
}

/// Rejected engine operation.
///
/// Every variant is recoverable; the engine state is untouched when one
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A player's display name was empty or whitespace-only.
    #[display("Player {} needs a display name", _0)]
    InvalidConfiguration(Mark),

    /// Move position outside 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfBounds(i64),

    /// The targeted square already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The round has ended; moves and undo are closed.
    #[display("Round is already over")]
    RoundAlreadyOver,

    /// Undo requested with an empty move log.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// Players have not been configured for this session.
    #[display("Players must be set up before playing")]
    SetupRequired,
}

impl std::error::Error for EngineError {}
