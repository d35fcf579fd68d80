//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Nothing here mutates a board: moves
//! produce a new board, and every query is answered from the marks alone, so
//! whose turn it is never has to be stored.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winner;

use super::action::{Action, Actions};
use super::error::InvalidAction;
use super::types::{Board, GameStatus, Player};
use tracing::instrument;

/// Returns the player to move.
///
/// X moves first, so X is to move whenever it has no more marks than O.
#[instrument(level = "trace", skip(board))]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell as an action, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> Actions {
    let mut actions = Actions::new();
    for row in 0..Board::SIZE {
        for col in 0..Board::SIZE {
            if board.is_empty(row, col) {
                actions.push(Action::new(row, col));
            }
        }
    }
    actions
}

/// Returns the board that results from the player to move taking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfBounds`] if the action is off the board and
/// [`InvalidAction::Occupied`] if the cell is already marked.
#[instrument(level = "trace", skip(board))]
pub fn apply_action(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    if !action.in_bounds() {
        return Err(InvalidAction::OutOfBounds(action));
    }
    if !board.is_empty(action.row, action.col) {
        return Err(InvalidAction::Occupied(action));
    }
    Ok(successor(board, action))
}

/// Applies an action taken from `legal_actions(board)` without re-checking it.
pub(crate) fn successor(board: &Board, action: Action) -> Board {
    board.with_mark(action.row, action.col, current_player(board))
}

/// Returns true once the game is over: someone has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board from X's point of view.
///
/// `1` if X has won, `-1` if O has won, `0` otherwise. Only meaningful on a
/// terminal board, where `0` means a draw.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board as won, drawn, or still in progress.
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
