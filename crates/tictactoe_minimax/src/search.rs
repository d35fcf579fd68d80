//! Exhaustive minimax search.
//!
//! X maximizes the utility and O minimizes it. Each top-level call walks the
//! remaining game tree depth first from scratch; nothing is cached between
//! calls. The only pruning is an early exit once a node has found the best
//! value its side can possibly get (`+1` for X, `-1` for O).

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::action::Action;
use super::config::SearchConfig;
use super::rules::{current_player, is_terminal, legal_actions, successor, utility};
use super::types::{Board, Player};

/// Highest utility: X has won.
const X_WINS: i8 = 1;
/// Lowest utility: O has won.
const O_WINS: i8 = -1;

/// Minimax value of a board and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// Game value from X's point of view.
    pub value: i8,
    /// Move achieving `value`; `None` on a terminal board.
    pub action: Option<Action>,
}

impl Evaluation {
    fn terminal(board: &Board) -> Self {
        Self {
            value: utility(board),
            action: None,
        }
    }
}

/// Outcome of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Player the search chose a move for.
    player: Player,
    /// Value and move for `player`.
    evaluation: Evaluation,
    /// Boards visited, the root included.
    nodes: u64,
}

impl SearchReport {
    /// The chosen move.
    ///
    /// Always present: reports are only produced for boards with moves left.
    pub fn action(&self) -> Option<Action> {
        self.evaluation.action
    }
}

/// Minimax searcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, derive_new::new)]
pub struct Minimax {
    /// Search tunables.
    config: SearchConfig,
}

impl Minimax {
    /// Searches for the best move of the player to act.
    ///
    /// Returns `None` if the board is terminal.
    #[instrument(skip(self, board), fields(prune = *self.config.prune_proven()))]
    pub fn search(&self, board: &Board) -> Option<SearchReport> {
        if is_terminal(board) {
            debug!("Board is terminal, nothing to search");
            return None;
        }

        let player = current_player(board);
        let mut nodes = 0;
        let evaluation = match player {
            Player::X => self.max_node(board, &mut nodes),
            Player::O => self.min_node(board, &mut nodes),
        };

        debug!(
            ?player,
            value = evaluation.value,
            action = ?evaluation.action,
            nodes,
            "Search complete"
        );
        Some(SearchReport {
            player,
            evaluation,
            nodes,
        })
    }

    /// Returns the optimal move for the player to act, or `None` if the
    /// game is over.
    ///
    /// Ties between equally good moves go to the first in row-major order.
    pub fn best_action(&self, board: &Board) -> Option<Action> {
        self.search(board).and_then(|report| report.action())
    }

    /// Value of `board` with the mover maximizing, and the move achieving it.
    #[instrument(level = "trace", skip(self, board))]
    pub fn max_value(&self, board: &Board) -> Evaluation {
        self.max_node(board, &mut 0)
    }

    /// Value of `board` with the mover minimizing, and the move achieving it.
    #[instrument(level = "trace", skip(self, board))]
    pub fn min_value(&self, board: &Board) -> Evaluation {
        self.min_node(board, &mut 0)
    }

    fn max_node(&self, board: &Board, nodes: &mut u64) -> Evaluation {
        *nodes += 1;
        if is_terminal(board) {
            return Evaluation::terminal(board);
        }

        let mut best = Evaluation {
            value: i8::MIN,
            action: None,
        };
        for action in legal_actions(board) {
            let value = self.min_node(&successor(board, action), nodes).value;
            if value > best.value {
                best = Evaluation {
                    value,
                    action: Some(action),
                };
            }
            if *self.config.prune_proven() && best.value >= X_WINS {
                trace!(%action, "Forced win found, skipping remaining moves");
                break;
            }
        }
        best
    }

    fn min_node(&self, board: &Board, nodes: &mut u64) -> Evaluation {
        *nodes += 1;
        if is_terminal(board) {
            return Evaluation::terminal(board);
        }

        let mut best = Evaluation {
            value: i8::MAX,
            action: None,
        };
        for action in legal_actions(board) {
            let value = self.max_node(&successor(board, action), nodes).value;
            if value < best.value {
                best = Evaluation {
                    value,
                    action: Some(action),
                };
            }
            if *self.config.prune_proven() && best.value <= O_WINS {
                trace!(%action, "Forced win found, skipping remaining moves");
                break;
            }
        }
        best
    }
}

/// Returns the optimal move for the player to act, or `None` if the game is
/// over. Uses the default [`SearchConfig`].
pub fn best_action(board: &Board) -> Option<Action> {
    Minimax::default().best_action(board)
}

/// Maximizing minimax value of `board`. Uses the default [`SearchConfig`].
pub fn max_value(board: &Board) -> Evaluation {
    Minimax::default().max_value(board)
}

/// Minimizing minimax value of `board`. Uses the default [`SearchConfig`].
pub fn min_value(board: &Board) -> Evaluation {
    Minimax::default().min_value(board)
}
