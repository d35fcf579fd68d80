//! Subcommand execution.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tictactoe_minimax::{Action, Board, GameStatus, Minimax, Player, initial, status, utility};
use tracing::instrument;

use crate::cli::{Cli, Command};
use crate::config::CliConfig;

/// Result of `best-move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveOutput {
    /// Board that was searched, in row notation.
    pub board: String,
    /// Status of the searched board.
    pub status: GameStatus,
    /// Player to act; `None` once the game is over.
    pub to_move: Option<Player>,
    /// Optimal move.
    pub action: Option<Action>,
    /// Minimax value from X's point of view.
    pub value: Option<i8>,
    /// Boards visited by the search.
    pub nodes: Option<u64>,
}

/// Result of `self-play`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayOutput {
    /// Final board.
    #[serde(skip)]
    pub finished: Board,
    /// Final board, in row notation.
    pub board: String,
    /// How the game ended.
    pub status: GameStatus,
    /// Final score from X's point of view.
    pub utility: i8,
}

/// Runs the parsed command, writing results to `out`.
#[instrument(skip(cli, config, out), fields(json = cli.json))]
pub fn run(cli: &Cli, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let search = Minimax::new(*config.search());
    match &cli.command {
        Command::BestMove { board } => {
            let output = best_move(&search, board);
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
            } else {
                writeln!(out, "{board}\n")?;
                match (output.to_move, output.action) {
                    (Some(player), Some(action)) => {
                        writeln!(out, "{player} to move: play {action}")?;
                        if let (Some(value), Some(nodes)) = (output.value, output.nodes) {
                            writeln!(out, "value {value:+}, {nodes} positions searched")?;
                        }
                    }
                    _ => writeln!(out, "Game over: {}", output.status)?,
                }
            }
        }
        Command::SelfPlay { board } => {
            let start = board.unwrap_or_else(initial);
            let output = self_play(&search, &start);
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
            } else {
                writeln!(out, "{}\n", output.finished)?;
                writeln!(out, "Result: {} ({:+})", output.status, output.utility)?;
            }
        }
    }
    Ok(())
}

/// Searches `board` and collects the answer.
pub fn best_move(search: &Minimax, board: &Board) -> BestMoveOutput {
    let report = search.search(board);
    BestMoveOutput {
        board: notation(board),
        status: status(board),
        to_move: report.map(|r| *r.player()),
        action: report.and_then(|r| r.action()),
        value: report.map(|r| r.evaluation().value),
        nodes: report.map(|r| *r.nodes()),
    }
}

/// Plays `board` out and collects the final position.
pub fn self_play(search: &Minimax, board: &Board) -> SelfPlayOutput {
    let finished = search.play_out(board);
    SelfPlayOutput {
        finished,
        board: notation(&finished),
        status: status(&finished),
        utility: utility(&finished),
    }
}

/// Compact `XX./OO./...` notation, which parses back into the same board.
fn notation(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell.mark() {
                    Some(Player::X) => 'X',
                    Some(Player::O) => 'O',
                    None => '.',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}
