//! Line-oriented play loop.
//!
//! Reads one command per line and writes results back. Generic over the
//! reader and writer so the `rps` binary can hand it stdin/stdout and tests
//! can hand it byte slices.

use std::io::{self, BufRead, Write};

use crate::core::{Move, ParseMoveError};
use crate::opponent::OpponentPolicy;
use crate::rules::{Outcome, RulesEngine};
use crate::session::{GameSession, RoundResult};

/// Usage text printed on start and on `help`.
pub const HELP: &str = "moves: rock (r), paper (p), scissors (s)\ncommands: score, reset, help, quit";

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Score,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Anything that is not a command word must be a move.
    pub fn parse(line: &str) -> Result<Self, ParseMoveError> {
        match line.trim().to_lowercase().as_str() {
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "reset" => Ok(Command::Reset),
            "score" => Ok(Command::Score),
            "help" | "?" => Ok(Command::Help),
            _ => line.parse().map(Command::Play),
        }
    }
}

/// Message shown after a round.
#[must_use]
pub fn result_message(round: &RoundResult, opponent_name: &str) -> String {
    match round.outcome {
        Outcome::PlayerWins => "You win!".to_string(),
        Outcome::OpponentWins => format!("You lose against the {opponent_name}"),
        Outcome::Tie => "Tie".to_string(),
    }
}

/// Play until `quit`, end of input, or `rounds` rounds have been played.
///
/// Bad input is reported and the loop carries on. Only I/O errors end it early.
pub fn run<R, P>(
    session: &mut GameSession<R, P>,
    rounds: Option<u32>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()>
where
    R: RulesEngine,
    P: OpponentPolicy,
{
    writeln!(out, "Welcome to Rock, Paper, Scissors!")?;
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    let mut played = 0u32;
    while rounds.map_or(true, |limit| played < limit) {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Play(m)) => {
                let round = session.play_round(m);
                played += 1;
                writeln!(out, "{round}")?;
                writeln!(out, "{}", result_message(&round, &session.config().opponent_name))?;
                writeln!(out, "{}", session.scoreboard())?;
            }
            Ok(Command::Score) => writeln!(out, "{}", session.scoreboard())?,
            Ok(Command::Reset) => {
                session.reset_scores();
                writeln!(out, "scores reset")?;
            }
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Quit) => break,
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    writeln!(out, "final score: {}", session.scoreboard())?;
    Ok(())
}
