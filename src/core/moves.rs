//! The closed move domain shared by both sides of a round.
//!
//! ## Move
//!
//! One of `Rock`, `Paper`, `Scissors`. Each move beats exactly one other
//! move, given by the fixed table in [`Move::beats`]:
//!
//! ```text
//! Rock -> Scissors -> Paper -> Rock
//! ```
//!
//! ## Parsing
//!
//! Input from a presentation layer is validated here, before it reaches
//! the rules engine. See [`Move::from_str`](std::str::FromStr).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseMoveError;

/// A rock-paper-scissors move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in declaration order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    ///
    /// ```
    /// use rust_rps::core::Move;
    ///
    /// assert_eq!(Move::Rock.beats(), Move::Scissors);
    /// assert_eq!(Move::Scissors.beats(), Move::Paper);
    /// assert_eq!(Move::Paper.beats(), Move::Rock);
    /// ```
    #[must_use]
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Hand symbol for the move.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Move::Rock => "\u{270A}",
            Move::Paper => "\u{270B}",
            Move::Scissors => "\u{270C}\u{FE0F}",
        }
    }

    /// Position in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse a move name.
    ///
    /// Case-insensitive. Accepts the full English name, its first letter,
    /// or the Spanish name (`piedra`, `papel`, `tijera`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseMoveError::Empty);
        }

        match input.to_lowercase().as_str() {
            "rock" | "r" | "piedra" => Ok(Move::Rock),
            "paper" | "p" | "papel" => Ok(Move::Paper),
            "scissors" | "s" | "tijera" | "tijeras" => Ok(Move::Scissors),
            _ => Err(ParseMoveError::Unknown(input.to_string())),
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = ParseMoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or(ParseMoveError::OutOfRange(value))
    }
}
