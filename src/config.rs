//! Session configuration loaded from TOML.

use crate::games::tictactoe::Mark;
use crate::search::{DEFAULT_MEDIUM_DEPTH, Difficulty, FULL_DEPTH};
use crate::session::Side;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings a session starts from.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SessionConfig {
    /// Who moves first. `None` leaves the choice to the player.
    first_mover: Option<Side>,

    /// Engine strength. Unknown names fall back to Hard.
    difficulty: Difficulty,

    /// Lookahead in plies for Medium.
    medium_depth: u8,

    /// Mark the engine plays; the human gets the other one.
    automated_mark: Mark,

    /// Seed for Easy's random choices.
    seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first_mover: None,
            difficulty: Difficulty::default(),
            medium_depth: DEFAULT_MEDIUM_DEPTH,
            automated_mark: Mark::X,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or an out-of-range Medium depth.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not hold a valid configuration.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            difficulty = %config.difficulty,
            medium_depth = config.medium_depth,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    ///
    /// # Errors
    ///
    /// A file that exists but is invalid is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Medium depth must lie in `1..=9`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=FULL_DEPTH).contains(&self.medium_depth) {
            return Err(ConfigError::new(format!(
                "medium_depth must be between 1 and {}, got {}",
                FULL_DEPTH, self.medium_depth
            )));
        }
        Ok(())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
