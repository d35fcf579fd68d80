//! Moves on the board.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::types::Board;

/// A move: the `(row, col)` coordinate of the cell to mark.
///
/// Any pair of indices can be constructed. Whether the action is legal
/// depends on the board it is applied to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Action {
    /// Row index, `0..3` on a legal action.
    pub row: usize,
    /// Column index, `0..3` on a legal action.
    pub col: usize,
}

impl Action {
    /// Returns true if both indices address a cell on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < Board::SIZE && self.col < Board::SIZE
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Legal actions on a board, in row-major order.
///
/// A board never has more than nine empty cells, so this never allocates.
pub type Actions = ArrayVec<Action, 9>;
