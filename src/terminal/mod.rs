//! Text front end shared by the `rps` binary.

pub mod repl;

pub use repl::{result_message, run, Command, HELP};
