//! Session configuration for the `tictactoe` binary.

use crate::games::tictactoe::{Mark, PlayerSetup};
use crate::store::{JsonFileScoreStore, SCORE_KEY};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for an interactive session.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the score record.
    score_dir: PathBuf,

    /// Record key; the file is `<score_dir>/<score_key>.json`.
    score_key: String,

    /// Name pre-filled for the first player.
    first_name: String,

    /// Name pre-filled for the second player.
    second_name: String,

    /// Glyph pre-selected for the first player.
    first_glyph: String,

    /// Glyph pre-selected for the second player.
    second_glyph: String,

    /// File the TUI writes its log to.
    log_file: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            score_dir: PathBuf::from(".tictactoe"),
            score_key: SCORE_KEY.to_string(),
            first_name: Mark::First.default_name().to_string(),
            second_name: Mark::Second.default_name().to_string(),
            first_glyph: Mark::First.default_glyph().to_string(),
            second_glyph: Mark::Second.default_glyph().to_string(),
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(score_dir = %config.score_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise `default_path` when it exists,
    /// otherwise built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicitly requested file is
    /// missing, or when any loaded file is invalid.
    #[instrument(skip(path, default_path))]
    pub fn resolve(path: Option<&Path>, default_path: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if default_path.exists() => Self::from_file(default_path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the pre-filled player names and glyphs.
    pub fn with_players(
        mut self,
        first_name: Option<String>,
        second_name: Option<String>,
        first_glyph: Option<String>,
        second_glyph: Option<String>,
    ) -> Self {
        if let Some(name) = first_name {
            self.first_name = name;
        }
        if let Some(name) = second_name {
            self.second_name = name;
        }
        if let Some(glyph) = first_glyph {
            self.first_glyph = glyph;
        }
        if let Some(glyph) = second_glyph {
            self.second_glyph = glyph;
        }
        self
    }

    /// Overrides the score directory.
    pub fn with_score_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.score_dir = dir;
        }
        self
    }

    /// Setup values pre-filled for `mark`.
    pub fn player_setup(&self, mark: Mark) -> PlayerSetup {
        let (name, glyph) = match mark {
            Mark::First => (&self.first_name, &self.first_glyph),
            Mark::Second => (&self.second_name, &self.second_glyph),
        };
        PlayerSetup::new(mark, name.as_str()).glyph(glyph.as_str())
    }

    /// Opens the configured score store.
    pub fn score_store(&self) -> JsonFileScoreStore {
        JsonFileScoreStore::with_key(&self.score_dir, &self.score_key)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
