//! Full-board detection for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is marked.
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| cell != Cell::Empty)
}
