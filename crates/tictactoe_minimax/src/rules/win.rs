//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// The eight lines that win the game, as `(row, col)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the player holding a complete line, if any.
///
/// Boards with lines for both players cannot arise from legal play; for
/// those the first line found wins.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.cell(a.0, a.1).mark()?;
        let owned = |(row, col): (usize, usize)| board.cell(row, col).mark() == Some(player);
        (owned(b) && owned(c)).then_some(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.O.".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X/.OX/X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX/.X./X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_double_line_same_player() {
        let board: Board = "XXX/OXO/OOX".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_full_board() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
