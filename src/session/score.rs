//! Cumulative round wins for one session.

use serde::{Deserialize, Serialize};

use crate::rules::Outcome;

/// Round wins for each side. Ties are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionScore {
    pub player_wins: u32,
    pub opponent_wins: u32,
}

impl SessionScore {
    /// A fresh 0-0 score.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_wins: 0,
            opponent_wins: 0,
        }
    }

    /// Apply one round's outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player_wins = self.player_wins.saturating_add(1),
            Outcome::OpponentWins => self.opponent_wins = self.opponent_wins.saturating_add(1),
            Outcome::Tie => {}
        }
    }

    /// Back to 0-0.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Who is ahead, or `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Outcome> {
        match self.player_wins.cmp(&self.opponent_wins) {
            std::cmp::Ordering::Greater => Some(Outcome::PlayerWins),
            std::cmp::Ordering::Less => Some(Outcome::OpponentWins),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for SessionScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.player_wins, self.opponent_wins)
    }
}
