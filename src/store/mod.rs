//! Score persistence.
//!
//! The engine reads the score once at startup and writes it after every
//! finished round. Stores are best-effort: a failed write is logged and
//! never undoes the in-memory transition.

mod error;
mod json_file;
mod memory;

pub use error::StoreError;
pub use json_file::JsonFileScoreStore;
pub use memory::MemoryScoreStore;

use crate::games::tictactoe::Score;

/// Fixed identifier the score record is stored under.
pub const SCORE_KEY: &str = "tictactoe-score";

/// Key-value persistence for the session score.
pub trait ScoreStore {
    /// Reads the stored score.
    ///
    /// Returns a zeroed score when no record exists or the read fails.
    fn load(&self) -> Score;

    /// Writes the score.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record could not be written.
    fn save(&mut self, score: &Score) -> Result<(), StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> Score {
        (**self).load()
    }

    fn save(&mut self, score: &Score) -> Result<(), StoreError> {
        (**self).save(score)
    }
}
