//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The searcher alternates maximizing layers (the searching player) and
//! minimizing layers (the opponent) over the legal-move set, pruning a
//! layer as soon as its running best crosses the opposing bound. Leaves
//! are scored by the supplied [`Evaluator`] from the searching player's
//! perspective.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Move, Player, SearchState};
use crate::eval::Evaluator;

/// Counters collected during one alpha-beta search.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct AlphaBetaStats {
    /// Nodes visited, terminal and interior.
    pub nodes: u64,
    /// Leaf evaluations performed.
    pub evaluations: u64,
    /// Branches abandoned by a beta (max layer) or alpha (min layer) cut.
    pub cutoffs: u64,
}

/// Result of one alpha-beta search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Minimax value of the root, from the searching player's perspective.
    pub score: f64,
    /// First move of the best line; `None` when the root itself was
    /// terminal (depth limit 0, finished game, or full board).
    pub best_move: Option<Move>,
    /// The principal state: the board at the end of the best line found.
    pub principal: SearchState,
}

/// Alpha-beta searcher.
///
/// Holds no position state between calls; only statistics from the most
/// recent search.
#[derive(Debug, Default)]
pub struct AlphaBeta {
    stats: AlphaBetaStats,
}

impl AlphaBeta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `depth_limit` plies ahead of `state` with `mover` to act.
    ///
    /// Alpha and beta start at the infinity sentinels, so evaluator
    /// scores must be finite for pruning comparisons to be unambiguous.
    pub fn search(
        &mut self,
        state: &SearchState,
        mover: Player,
        depth_limit: u32,
        evaluator: &dyn Evaluator,
    ) -> SearchOutcome {
        self.stats = AlphaBetaStats::default();
        let root_history = state.history().len();

        let (score, principal) = self.visit(
            state,
            mover,
            evaluator,
            0,
            depth_limit,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        );

        // Only the immediate move at the root is ever played; it is the
        // first entry the best line added past the root's own history.
        let best_move = principal.history().get(root_history).copied();

        debug!(
            "alpha-beta: depth {} -> score {:.1}, {} nodes, {} evals, {} cutoffs",
            depth_limit, score, self.stats.nodes, self.stats.evaluations, self.stats.cutoffs
        );

        SearchOutcome {
            score,
            best_move,
            principal,
        }
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> AlphaBetaStats {
        self.stats
    }

    #[allow(clippy::too_many_arguments)]
    fn visit(
        &mut self,
        state: &SearchState,
        root_mover: Player,
        evaluator: &dyn Evaluator,
        depth: u32,
        depth_limit: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, SearchState) {
        self.stats.nodes += 1;

        let terminal =
            depth == depth_limit || !state.status.is_in_progress() || state.board.is_full();
        if terminal {
            self.stats.evaluations += 1;
            let eval = evaluator.evaluate(&state.board, &state.captures, root_mover);
            return (eval.score, state.clone());
        }

        let mover = if maximizing {
            root_mover
        } else {
            root_mover.opponent()
        };

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_line: Option<SearchState> = None;

        for (row, col) in state.board.empty_cells() {
            let child = state
                .play(mover, row, col)
                .expect("empty cell is a legal move");
            let (score, line) = self.visit(
                &child,
                root_mover,
                evaluator,
                depth + 1,
                depth_limit,
                alpha,
                beta,
                !maximizing,
            );

            if maximizing {
                if best_line.is_none() || score > best_score {
                    best_score = score;
                    best_line = Some(line);
                }
                alpha = alpha.max(best_score);
                if best_score >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            } else {
                if best_line.is_none() || score < best_score {
                    best_score = score;
                    best_line = Some(line);
                }
                beta = beta.min(best_score);
                if best_score <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        let line = best_line.expect("non-terminal state has at least one legal move");
        (best_score, line)
    }
}
