//! Errors raised at the input boundary.

use thiserror::Error;

/// Failure to turn caller input into a [`Move`](super::Move).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    /// Blank input.
    #[error("no move given")]
    Empty,

    /// Text that names no move.
    #[error("unknown move '{0}' (expected rock, paper or scissors)")]
    Unknown(String),

    /// Numeric index outside 0..=2.
    #[error("move index {0} out of range (expected 0-2)")]
    OutOfRange(u8),
}
