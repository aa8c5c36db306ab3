//! The round orchestrator.
//!
//! A `GameSession` owns the score, the RNG and the opponent policy. Each
//! call to [`GameSession::play_round`] is one complete round:
//! draw the opponent's move, judge, update the score, return.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Move, SessionConfig};
use crate::opponent::{OpponentPolicy, UniformOpponent};
use crate::rules::{ClassicRules, Outcome, RulesEngine};

use super::score::SessionScore;

/// Everything a caller needs to render one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub player_move: Move,
    pub opponent_move: Move,
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} vs {} {}",
            self.player_move.symbol(),
            self.player_move,
            self.opponent_move.symbol(),
            self.opponent_move
        )
    }
}

/// A single play session against the computer.
///
/// ## Example
///
/// ```
/// use rust_rps::core::{Move, SessionConfig};
/// use rust_rps::session::GameSession;
///
/// let mut session = GameSession::from_config(&SessionConfig::default().with_seed(42));
/// let round = session.play_round(Move::Rock);
/// assert_eq!(round.player_move, Move::Rock);
/// assert_eq!(session.rounds_played(), 1);
///
/// session.reset_scores();
/// assert_eq!(session.score().player_wins, 0);
/// assert_eq!(session.score().opponent_wins, 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<R = ClassicRules, P = UniformOpponent> {
    rules: R,
    opponent: P,
    rng: GameRng,
    score: SessionScore,
    rounds_played: u32,
    config: SessionConfig,
}

impl GameSession {
    /// Entropy-seeded session with standard rules and a uniform opponent.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&SessionConfig::default())
    }

    /// Standard rules and a uniform opponent, configured by `config`.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::with_parts(config, ClassicRules, UniformOpponent)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RulesEngine, P: OpponentPolicy> GameSession<R, P> {
    /// Build a session from explicit rules and opponent policy.
    #[must_use]
    pub fn with_parts(config: &SessionConfig, rules: R, opponent: P) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(
            "new session: {} vs {} (seed {}{})",
            config.player_name,
            config.opponent_name,
            rng.seed(),
            if config.seed.is_some() { ", fixed" } else { "" }
        );

        Self {
            rules,
            opponent,
            rng,
            score: SessionScore::new(),
            rounds_played: 0,
            config: config.clone(),
        }
    }

    /// Play one round with the player's move.
    pub fn play_round(&mut self, player_move: Move) -> RoundResult {
        let opponent_move = self.opponent.choose(&mut self.rng);
        let outcome = self.rules.judge(player_move, opponent_move);

        self.score.record(outcome);
        self.rounds_played = self.rounds_played.saturating_add(1);

        debug!(
            "round {}: {player_move} vs {opponent_move} -> {outcome:?} (score {})",
            self.rounds_played, self.score
        );

        RoundResult {
            outcome,
            player_move,
            opponent_move,
        }
    }

    /// Zero both win counters.
    pub fn reset_scores(&mut self) {
        info!("scores reset (was {})", self.score);
        self.score.reset();
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> SessionScore {
        self.score
    }

    /// Rounds played since the session started. Not cleared by [`reset_scores`](Self::reset_scores).
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The configuration this session was built from.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seed of the opponent RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Score line with both names, e.g. `Player 2 - 1 CPU`.
    #[must_use]
    pub fn scoreboard(&self) -> String {
        format!(
            "{} {} {}",
            self.config.player_name, self.score, self.config.opponent_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::ScriptedOpponent;

    fn scripted(moves: &[Move]) -> GameSession<ClassicRules, ScriptedOpponent> {
        let opponent = ScriptedOpponent::new(moves.iter().copied()).unwrap();
        GameSession::with_parts(&SessionConfig::default().with_seed(1), ClassicRules, opponent)
    }

    #[test]
    fn test_play_round_updates_score() {
        let mut session = scripted(&[Move::Scissors, Move::Paper, Move::Rock]);

        let win = session.play_round(Move::Rock);
        assert_eq!(win.outcome, Outcome::PlayerWins);
        assert_eq!(win.opponent_move, Move::Scissors);
        assert_eq!(session.score(), SessionScore { player_wins: 1, opponent_wins: 0 });

        let loss = session.play_round(Move::Rock);
        assert_eq!(loss.outcome, Outcome::OpponentWins);
        assert_eq!(session.score(), SessionScore { player_wins: 1, opponent_wins: 1 });

        let tie = session.play_round(Move::Rock);
        assert_eq!(tie.outcome, Outcome::Tie);
        assert_eq!(session.score(), SessionScore { player_wins: 1, opponent_wins: 1 });
        assert_eq!(session.rounds_played(), 3);
    }

    #[test]
    fn test_reset_scores() {
        let mut session = scripted(&[Move::Scissors]);
        for _ in 0..4 {
            session.play_round(Move::Rock);
        }
        assert_eq!(session.score().player_wins, 4);

        session.reset_scores();
        assert_eq!(session.score(), SessionScore::new());
        assert_eq!(session.rounds_played(), 4);
    }

    #[test]
    fn test_scoreboard() {
        let opponent = ScriptedOpponent::always(Move::Scissors);
        let config = SessionConfig::default().with_player_name("Ana");
        let mut session = GameSession::with_parts(&config, ClassicRules, opponent);
        session.play_round(Move::Rock);
        assert_eq!(session.scoreboard(), "Ana 1 - 0 CPU");
    }

    #[test]
    fn test_seeded_sessions_match() {
        let config = SessionConfig::default().with_seed(99);
        let mut a = GameSession::from_config(&config);
        let mut b = GameSession::from_config(&config);

        for m in Move::ALL.iter().cycle().take(30) {
            assert_eq!(a.play_round(*m), b.play_round(*m));
        }
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_round_result_display() {
        let round = RoundResult {
            outcome: Outcome::PlayerWins,
            player_move: Move::Paper,
            opponent_move: Move::Rock,
        };
        assert_eq!(round.to_string(), "\u{270B} Paper vs \u{270A} Rock");

        let round = RoundResult {
            outcome: Outcome::PlayerWins,
            player_move: Move::Scissors,
            opponent_move: Move::Paper,
        };
        assert_eq!(round.to_string(), "\u{270C}\u{FE0F} Scissors vs \u{270B} Paper");
    }
}
