//! Opponent policies.
//!
//! - `OpponentPolicy`: How the computer picks its move
//! - `UniformOpponent`: Each move with probability 1/3
//! - `ScriptedOpponent`: A fixed, repeating sequence

use log::trace;

use crate::core::{GameRng, Move};

/// Policy for choosing the opponent's move each round.
pub trait OpponentPolicy {
    /// Choose a move for the coming round.
    ///
    /// `rng` is the session's generator; deterministic policies may ignore it.
    fn choose(&mut self, rng: &mut GameRng) -> Move;
}

/// Uniform random opponent policy.
///
/// Selects uniformly from [`Move::ALL`], independent of the player's move
/// and of earlier draws.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose(&mut self, rng: &mut GameRng) -> Move {
        let choice = rng.choose_move();
        trace!("uniform opponent drew {choice}");
        choice
    }
}

/// Plays a fixed sequence of moves, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// Create a scripted opponent.
    ///
    /// Returns `None` if `moves` is empty.
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Option<Self> {
        let moves: Vec<Move> = moves.into_iter().collect();
        if moves.is_empty() {
            return None;
        }
        Some(Self { moves, cursor: 0 })
    }

    /// An opponent that always plays `m`.
    #[must_use]
    pub fn always(m: Move) -> Self {
        Self {
            moves: vec![m],
            cursor: 0,
        }
    }
}

impl OpponentPolicy for ScriptedOpponent {
    fn choose(&mut self, _rng: &mut GameRng) -> Move {
        let choice = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        choice
    }
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose(&mut self, rng: &mut GameRng) -> Move {
        (**self).choose(rng)
    }
}
