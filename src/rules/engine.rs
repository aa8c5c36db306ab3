//! Round judging.
//!
//! [`determine_winner`] is the whole rule set: equal moves tie, otherwise
//! the side whose move [`beats`](Move::beats) the other wins.

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Result of a single round, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human player's move won.
    PlayerWins,
    /// The opponent's move won.
    OpponentWins,
    /// Both sides played the same move.
    Tie,
}

impl Outcome {
    /// The same result seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Outcome {
        match self {
            Outcome::PlayerWins => Outcome::OpponentWins,
            Outcome::OpponentWins => Outcome::PlayerWins,
            Outcome::Tie => Outcome::Tie,
        }
    }

    /// Check if the round was a tie.
    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// Judge a round.
///
/// ```
/// use rust_rps::core::Move;
/// use rust_rps::rules::{determine_winner, Outcome};
///
/// assert_eq!(determine_winner(Move::Rock, Move::Scissors), Outcome::PlayerWins);
/// assert_eq!(determine_winner(Move::Rock, Move::Paper), Outcome::OpponentWins);
/// assert_eq!(determine_winner(Move::Rock, Move::Rock), Outcome::Tie);
/// ```
#[must_use]
pub fn determine_winner(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats() == opponent {
        Outcome::PlayerWins
    } else {
        Outcome::OpponentWins
    }
}

/// Rules engine trait.
///
/// A session judges every round through this trait. Implementations must
/// be pure: the same pair of moves always gives the same outcome.
pub trait RulesEngine {
    /// Judge `player` against `opponent`.
    fn judge(&self, player: Move, opponent: Move) -> Outcome;
}

/// Standard rock-paper-scissors rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicRules;

impl RulesEngine for ClassicRules {
    fn judge(&self, player: Move, opponent: Move) -> Outcome {
        determine_winner(player, opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_ties() {
        for m in Move::ALL {
            assert_eq!(determine_winner(m, m), Outcome::Tie);
        }
    }

    #[test]
    fn test_literal_wins() {
        assert_eq!(determine_winner(Move::Rock, Move::Scissors), Outcome::PlayerWins);
        assert_eq!(determine_winner(Move::Scissors, Move::Paper), Outcome::PlayerWins);
        assert_eq!(determine_winner(Move::Paper, Move::Rock), Outcome::PlayerWins);
    }

    #[test]
    fn test_literal_losses() {
        assert_eq!(determine_winner(Move::Scissors, Move::Rock), Outcome::OpponentWins);
        assert_eq!(determine_winner(Move::Paper, Move::Scissors), Outcome::OpponentWins);
        assert_eq!(determine_winner(Move::Rock, Move::Paper), Outcome::OpponentWins);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Outcome::PlayerWins.reversed(), Outcome::OpponentWins);
        assert_eq!(Outcome::OpponentWins.reversed(), Outcome::PlayerWins);
        assert_eq!(Outcome::Tie.reversed(), Outcome::Tie);
        assert!(Outcome::Tie.is_tie());
        assert!(!Outcome::PlayerWins.is_tie());
    }

    #[test]
    fn test_classic_rules_matches_free_function() {
        let rules = ClassicRules;
        for p in Move::ALL {
            for o in Move::ALL {
                assert_eq!(rules.judge(p, o), determine_winner(p, o));
            }
        }
    }
}
