//! Search configuration.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Tunables for [`Minimax`](crate::Minimax).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize, derive_new::new)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SearchConfig {
    /// Stop scanning a node's moves once the best possible value for the
    /// side to move has been found. Changes node counts, never values.
    prune_proven: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { prune_proven: true }
    }
}
