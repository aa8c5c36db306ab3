//! Session state: cumulative score and the round orchestrator.
//!
//! A session lives for one program run. Scores are never persisted.

pub mod score;
pub mod game;

pub use score::SessionScore;
pub use game::{GameSession, RoundResult};
