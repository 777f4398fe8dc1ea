//! MCTS configuration and search budgets.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How much work one [`search`](crate::mcts::MctsSearch::search) call may do.
///
/// Either way, at least one full iteration always completes before the
/// budget is consulted, so a legal move is available even when a
/// deadline has already passed at call time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchBudget {
    /// A fixed number of select/expand/simulate/backpropagate iterations.
    Iterations(u32),
    /// A wall-clock deadline measured from the start of the call.
    Timeout(Duration),
}

/// MCTS tuning parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsConfig {
    /// UCT exploration constant.
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Win score credited to an ancestor whose mover won the playout.
    pub win_reward: f64,

    /// Maximum nodes to allocate in the tree.
    /// Prevents memory exhaustion on long budgets.
    pub max_nodes: usize,

    /// Random seed for simulation RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 1.41,
            win_reward: 10.0,
            max_nodes: 100_000,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Override the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Override the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the node cap.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}
