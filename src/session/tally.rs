//! Running score across the games of one session.

use super::settings::Side;
use serde::{Deserialize, Serialize};

/// Wins per side and draws.
///
/// Counters only ever go up while a session lasts; [`ScoreTally::reset`] is
/// the explicit way back to zero. Starting a new game leaves them alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTally {
    human_wins: u32,
    automated_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Records one finished game. `None` is a draw.
    pub fn record(&mut self, winner: Option<Side>) {
        match winner {
            Some(Side::Human) => self.human_wins += 1,
            Some(Side::Automated) => self.automated_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Games won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Games won by the engine.
    pub fn automated_wins(&self) -> u32 {
        self.automated_wins
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Wins recorded for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human_wins,
            Side::Automated => self.automated_wins,
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.automated_wins + self.draws
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player: {}  |  Engine: {}  |  Draws: {}",
            self.human_wins, self.automated_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bumps_one_counter() {
        let mut tally = ScoreTally::default();
        tally.record(Some(Side::Automated));
        tally.record(None);
        tally.record(None);

        assert_eq!(tally.automated_wins(), 1);
        assert_eq!(tally.human_wins(), 0);
        assert_eq!(tally.draws(), 2);
        assert_eq!(tally.games(), 3);
        assert_eq!(tally.to_string(), "Player: 0  |  Engine: 1  |  Draws: 2");

        tally.reset();
        assert_eq!(tally.games(), 0);
    }
}
