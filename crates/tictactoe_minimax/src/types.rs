//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves first, maximizes).
    X,
    /// Player O (moves second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player holding this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Side length of the board.
const SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: the rules never mutate one in place, they
/// hand back a fresh copy with the new mark. A single board can therefore
/// be shared freely between branches of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    rows: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Number of rows (and columns).
    pub const SIZE: usize = SIZE;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    ///
    /// No reachability check is made; any combination of marks is accepted.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        Self { rows }
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..3`.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < Self::SIZE && col < Self::SIZE,
            "cell ({row}, {col}) is off the board"
        );
        self.rows[row][col]
    }

    /// Checks if the cell at `(row, col)` is empty.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..3`.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Cell::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.rows
    }

    /// Iterates over all nine cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|cell| *cell == Cell::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with `player` marked at `(row, col)`.
    ///
    /// Bounds and emptiness are the caller's responsibility.
    pub(crate) fn with_mark(mut self, row: usize, col: usize, player: Player) -> Self {
        self.rows[row][col] = Cell::Occupied(player);
        self
    }
}

/// Returns the starting board: every cell empty.
#[instrument(level = "trace")]
pub fn initial() -> Board {
    Board::new()
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
