//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one MCTS search call.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Full select/expand/simulate/backpropagate iterations completed.
    pub iterations: u32,

    /// Leaves expanded into child sets.
    pub nodes_expanded: u32,

    /// Playouts run to a terminal position.
    pub simulations: u32,

    /// Deepest node allocated during the search.
    pub max_depth: u16,

    /// Wall-clock time spent, microseconds.
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterations per second over the measured interval.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
