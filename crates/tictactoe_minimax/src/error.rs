//! Error types for the rules engine and board notation.

use derive_more::{Display, Error};
use tracing::instrument;

use super::action::Action;

/// An action that cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidAction {
    /// One of the indices is outside `0..3`.
    #[display("Action {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] Action),

    /// The cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Action),
}

impl InvalidAction {
    /// Returns the rejected action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::OutOfBounds(action) | InvalidAction::Occupied(action) => *action,
        }
    }
}

/// Board notation could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct ParseBoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseBoardError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
