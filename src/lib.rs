//! # rust-rps
//!
//! Rock-paper-scissors against a uniformly random computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Closed Domain**: `Move` and `Outcome` are plain enums. Input is
//!    validated when it is parsed into a `Move`, so nothing past that point
//!    can fail.
//!
//! 2. **Table-Driven Rules**: What each move beats is the total function
//!    `Move::beats`, not a chain of comparisons.
//!
//! 3. **Explicit State**: Scores live in a `GameSession` owned by the
//!    caller. There is no global state.
//!
//! ## Modules
//!
//! - `core`: Moves, parse errors, RNG, configuration
//! - `rules`: `determine_winner` and the `RulesEngine` trait
//! - `opponent`: Opponent policies (uniform random, scripted)
//! - `session`: Score counters and the round orchestrator
//! - `terminal`: Line-based play loop used by the `rps` binary

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Move, ParseMoveError, SessionConfig};

pub use crate::rules::{determine_winner, ClassicRules, Outcome, RulesEngine};

pub use crate::opponent::{OpponentPolicy, ScriptedOpponent, UniformOpponent};

pub use crate::session::{GameSession, RoundResult, SessionScore};
