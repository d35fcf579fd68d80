//! Tic-tac-toe Minimax - command-line driver
//!
//! Prints optimal moves and plays out perfect games.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_minimax_cli::{Cli, CliConfig, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(&cli.config)?;

    let default_filter = config.log_filter().as_deref().unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    run(&cli, &config, &mut stdout.lock())
}
