//! Sources of the computer's moves.

pub mod policy;

pub use policy::{OpponentPolicy, ScriptedOpponent, UniformOpponent};
