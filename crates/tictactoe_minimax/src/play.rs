//! Optimal self-play.

use tracing::{info, instrument};

use super::rules::{current_player, status, successor};
use super::search::Minimax;
use super::types::Board;

impl Minimax {
    /// Plays both sides optimally from `board` until the game ends and
    /// returns the final board.
    #[instrument(skip(self, board))]
    pub fn play_out(&self, board: &Board) -> Board {
        let mut board = *board;
        while let Some(action) = self.best_action(&board) {
            info!(player = ?current_player(&board), %action, "Move");
            board = successor(&board, action);
        }
        info!(status = %status(&board), "Game over");
        board
    }
}

/// Plays both sides optimally from `board` with the default search
/// configuration and returns the final board.
pub fn play_out(board: &Board) -> Board {
    Minimax::default().play_out(board)
}
