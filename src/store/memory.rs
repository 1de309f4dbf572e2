//! In-memory score store.

use super::{ScoreStore, StoreError};
use crate::games::tictactoe::Score;
use tracing::{debug, instrument};

/// Keeps the score in memory and counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    score: Option<Score>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a previously saved score.
    pub fn with_score(score: Score) -> Self {
        Self {
            score: Some(score),
            ..Self::default()
        }
    }

    /// Creates a store whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// The last successfully saved score.
    pub fn saved(&self) -> Option<Score> {
        self.score
    }

    /// Number of save attempts, successful or not.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Score {
        self.score.unwrap_or_default()
    }

    #[instrument(skip(self))]
    fn save(&mut self, score: &Score) -> Result<(), StoreError> {
        self.saves += 1;
        if self.fail_saves {
            return Err(StoreError::new("store is read-only"));
        }
        debug!(saves = self.saves, "Score saved in memory");
        self.score = Some(*score);
        Ok(())
    }
}
