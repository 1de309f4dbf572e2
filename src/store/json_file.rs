//! JSON-file score store.

use super::{SCORE_KEY, ScoreStore, StoreError};
use crate::games::tictactoe::Score;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Stores the score as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileScoreStore {
    path: PathBuf,
}

impl JsonFileScoreStore {
    /// Creates a store under `dir` using the default key.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, SCORE_KEY)
    }

    /// Creates a store under `dir` for the given record key.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        let path = dir.as_ref().join(format!("{}.json", key));
        info!(path = %path.display(), "Using score file");
        Self { path }
    }

    /// Location of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Score>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }
}

impl ScoreStore for JsonFileScoreStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Score {
        match self.read() {
            Ok(Some(score)) => {
                debug!(?score, "Score loaded");
                score
            }
            Ok(None) => {
                debug!("No saved score, starting from zero");
                Score::default()
            }
            Err(e) => {
                warn!(error = %e, "Unreadable score record, starting from zero");
                Score::default()
            }
        }
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&mut self, score: &Score) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(score)?;
        // Replace the record whole so a partial write never clobbers it.
        let staged = self.path.with_extension("json.tmp");
        fs::write(&staged, json)?;
        fs::rename(&staged, &self.path)?;
        debug!("Score saved");
        Ok(())
    }
}
