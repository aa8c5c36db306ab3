//! Rules engine for rock-paper-scissors.
//!
//! - `determine_winner`: the pure judging function
//! - `RulesEngine`: the trait a session judges rounds through
//! - `ClassicRules`: the standard implementation

pub mod engine;

pub use engine::{determine_winner, ClassicRules, Outcome, RulesEngine};
