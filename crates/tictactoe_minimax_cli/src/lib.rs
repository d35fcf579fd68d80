//! Command-line driver for the tic-tac-toe minimax search.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Command};
pub use commands::{BestMoveOutput, SelfPlayOutput, best_move, run, self_play};
pub use config::{CliConfig, ConfigError};
