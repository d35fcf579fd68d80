//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use tictactoe_minimax::Board;

/// Tic-tac-toe Minimax - perfect play by exhaustive search
///
/// Boards are nine cells in row-major order: X, O, or `.` for empty.
/// Rows may be separated with `/`, e.g. `XX./OO./...`.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Perfect tic-tac-toe play by minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to act
    BestMove {
        /// Board to search
        board: Board,
    },

    /// Play both sides optimally until the game ends
    SelfPlay {
        /// Starting board (empty if omitted)
        board: Option<Board>,
    },
}
