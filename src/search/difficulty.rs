//! Difficulty levels and the search policy each one selects.

use super::alphabeta::FULL_DEPTH;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Default lookahead for [`Difficulty::Medium`]: the engine's move plus
/// one reply.
pub const DEFAULT_MEDIUM_DEPTH: u8 = 2;

/// How strongly the engine plays.
///
/// Unknown names passed to [`Difficulty::from_name`] (and therefore in config
/// files) resolve to [`Difficulty::Hard`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    /// Uniformly random legal move, no search.
    Easy,
    /// Shallow alpha-beta; misses threats past its horizon.
    Medium,
    /// Full-depth alpha-beta; never loses.
    #[default]
    Hard,
}

impl Difficulty {
    /// Resolves a difficulty name, falling back to [`Difficulty::Hard`].
    #[instrument]
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_else(|_| {
            warn!(name, "Unknown difficulty, using hard");
            Difficulty::Hard
        })
    }

    /// Search depth for this level, or `None` when no search runs.
    ///
    /// The Medium depth is clamped to `1..=9`; a zero-ply search would
    /// return no move.
    pub fn depth_budget(self, medium_depth: u8) -> Option<u8> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(medium_depth.clamp(1, FULL_DEPTH)),
            Difficulty::Hard => Some(FULL_DEPTH),
        }
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.to_string()
    }
}
