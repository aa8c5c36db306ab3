//! Core types: moves, input errors, RNG, configuration.
//!
//! These are shared by the rules engine, the opponent policies and the
//! session. None of them know about scoring.

pub mod moves;
pub mod error;
pub mod rng;
pub mod config;

pub use moves::Move;
pub use error::ParseMoveError;
pub use rng::{GameRng, GameRngState};
pub use config::SessionConfig;
