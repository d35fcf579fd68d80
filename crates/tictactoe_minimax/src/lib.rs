//! Tic-tac-toe rules and perfect play by exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] is a `Copy` 3x3 grid of [`Cell`]s; moves never
//!   mutate a board, they return a new one.
//! - **Rules**: free functions answering whose turn it is, which moves are
//!   legal, who has won and how a finished game scores.
//! - **Search**: [`Minimax`] walks the remaining game tree, X maximizing and
//!   O minimizing, and reports the best move.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{apply_action, best_action, initial, utility, Action, Board};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(best_action(&board), Some(Action::new(0, 2)));
//!
//! let finished = tictactoe_minimax::play_out(&initial());
//! assert_eq!(utility(&finished), 0);
//! # let _ = apply_action(&board, Action::new(0, 2))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
mod notation;
mod play;
mod rules;
mod search;
mod types;

pub use action::{Action, Actions};
pub use config::SearchConfig;
pub use error::{InvalidAction, ParseBoardError};
pub use play::play_out;
pub use rules::{
    apply_action, current_player, is_full, is_terminal, legal_actions, status, utility, winner,
};
pub use search::{Evaluation, Minimax, SearchReport, best_action, max_value, min_value};
pub use types::{Board, Cell, GameStatus, Player, initial};
