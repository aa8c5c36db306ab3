//! Terminal front end.
//!
//! Reads moves from stdin and plays them against the computer.
//! Commands: a move (`rock`, `p`, `tijera`, ...), `score`, `reset`, `help`, `quit`.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rust_rps::terminal;
use rust_rps::{GameSession, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "rps", about = "Play rock-paper-scissors against the computer")]
struct Args {
    /// Fixed seed for the computer's moves
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Your display name
    #[arg(long, default_value = "Player")]
    player_name: String,

    /// The computer's display name
    #[arg(long, default_value = "CPU")]
    opponent_name: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = SessionConfig::default()
        .with_player_name(args.player_name)
        .with_opponent_name(args.opponent_name);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = GameSession::from_config(&config);
    terminal::run(&mut session, args.rounds, io::stdin().lock(), io::stdout().lock())
        .context("terminal I/O failed")
}
