//! Which side of the table a move or a preference belongs to.

use crate::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two participants in a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Side {
    /// The person at the keyboard.
    Human,
    /// The search engine.
    #[serde(alias = "engine", alias = "ai")]
    #[strum(to_string = "automated", serialize = "engine", serialize = "ai")]
    #[value(aliases = ["engine", "ai"])]
    Automated,
}

/// Who takes the first move in a new game.
pub type FirstMover = Side;

impl Side {
    /// Returns the display label for this side.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Automated => "Engine",
        }
    }

    /// Toggles between `Human` and `Automated`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Automated,
            Self::Automated => Self::Human,
        }
    }
}

/// Marks assigned to each side for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marks {
    /// Mark played by the engine.
    pub automated: Mark,
    /// Mark played by the human.
    pub human: Mark,
}

impl Marks {
    /// Engine plays `automated`, human plays the other mark.
    pub fn new(automated: Mark) -> Self {
        Self {
            automated,
            human: automated.opponent(),
        }
    }

    /// The mark played by `side`.
    pub fn of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human,
            Side::Automated => self.automated,
        }
    }

    /// The side playing `mark`.
    pub fn side_of(&self, mark: Mark) -> Side {
        if mark == self.automated {
            Side::Automated
        } else {
            Side::Human
        }
    }
}

impl Default for Marks {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}
