//! The MCTS search loop: selection, expansion, simulation,
//! backpropagation.
//!
//! Selection descends by UCT; a child that has never been visited is an
//! unconditional top pick, selected before any visited sibling (a true
//! infinite priority, never approximated by substituting a visit count
//! of 1). Playouts run on disposable state copies and never touch nodes
//! already in the tree.

use std::time::Instant;

use log::debug;

use crate::core::{GameRng, Move, Player, SearchState};
use crate::eval::Evaluator;
use crate::rules;

use super::config::{MctsConfig, SearchBudget};
use super::node::{MctsNode, NodeId};
use super::stats::SearchStats;
use super::tree::MctsTree;

/// Monte Carlo Tree Search context.
///
/// Each call to [`search`](MctsSearch::search) rebuilds a fresh root from
/// the supplied state; no subtree is carried across real moves. The RNG
/// is owned, so a fixed seed makes the whole search deterministic given
/// the same evaluator.
pub struct MctsSearch {
    config: MctsConfig,
    tree: MctsTree,
    rng: GameRng,
    stats: SearchStats,
}

impl MctsSearch {
    /// Create a search context with the given configuration.
    #[must_use]
    pub fn new(config: MctsConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            tree: MctsTree::new(MctsNode::root(SearchState::initial(1), Player::Two)),
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Find the best next move for `mover` from `state`.
    ///
    /// Runs iterations until the budget is exhausted (always completing
    /// at least one, so a valid move exists whenever one is legal), then
    /// picks the root child with the highest visit count - the robust
    /// child, which is more stable under noisy rollouts than picking by
    /// raw win score. When `heuristic` is supplied, playout moves follow
    /// its score grid instead of uniform random choice.
    ///
    /// Returns the chosen move and the state after playing it, or `None`
    /// when the position is terminal or has no legal moves.
    pub fn search(
        &mut self,
        state: &SearchState,
        mover: Player,
        budget: SearchBudget,
        heuristic: Option<&dyn Evaluator>,
    ) -> Option<(Move, SearchState)> {
        let start = Instant::now();
        self.stats.reset();

        if !state.status.is_in_progress() {
            return None;
        }

        // The root position was produced by the opponent's last move, so
        // the first ply below the root belongs to `mover`.
        self.tree = MctsTree::new(MctsNode::root(state.clone(), mover.opponent()));

        let deadline = match budget {
            SearchBudget::Timeout(limit) => Some(start + limit),
            SearchBudget::Iterations(_) => None,
        };

        loop {
            self.iteration(heuristic);
            self.stats.iterations += 1;

            let exhausted = match budget {
                SearchBudget::Iterations(count) => self.stats.iterations >= count,
                SearchBudget::Timeout(_) => {
                    Instant::now() >= deadline.expect("deadline set for timeout budget")
                }
            };
            if exhausted || self.tree.len() >= self.config.max_nodes {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.stats.max_depth = self.tree.stats().max_depth;

        debug!(
            "mcts: {} iterations, {} nodes, {} simulations in {}us",
            self.stats.iterations,
            self.tree.len(),
            self.stats.simulations,
            self.stats.time_us
        );

        let best = self.robust_child()?;
        let node = self.tree.get(best);
        let mv = node.state.last_move()?;
        Some((mv, node.state.clone()))
    }

    /// One iteration: select a leaf, expand it, simulate, backpropagate.
    fn iteration(&mut self, heuristic: Option<&dyn Evaluator>) {
        // === Selection ===
        let mut current = self.tree.root();
        while !self.tree.get(current).is_leaf() {
            current = self.select_child(current);
        }

        // === Expansion ===
        if self.tree.get(current).state.status.is_in_progress() {
            self.expand(current);
        }

        // === Simulation ===
        // From a random new child, or the leaf itself if it had none.
        let sim_node = {
            let children = &self.tree.get(current).children;
            self.rng.choose(children).copied().unwrap_or(current)
        };
        let winner = self.simulate(sim_node, heuristic);
        self.stats.simulations += 1;

        // === Backpropagation ===
        self.backpropagate(sim_node, winner);
    }

    /// Pick the child of `parent` with the highest UCT score.
    ///
    /// The first never-visited child wins outright.
    fn select_child(&self, parent: NodeId) -> NodeId {
        let parent_node = self.tree.get(parent);
        let ln_parent = (parent_node.visits.max(1) as f64).ln();
        let c = self.config.exploration_constant;

        let mut best = parent_node.children[0];
        let mut best_score = f64::NEG_INFINITY;

        for &child_id in &parent_node.children {
            let child = self.tree.get(child_id);
            if child.visits == 0 {
                return child_id;
            }
            let visits = child.visits as f64;
            let uct = child.win_score / visits + c * (ln_parent / visits).sqrt();
            if uct > best_score {
                best_score = uct;
                best = child_id;
            }
        }

        best
    }

    /// Expand a leaf with one child per legal move.
    fn expand(&mut self, node_id: NodeId) {
        let (state, child_mover, depth) = {
            let node = self.tree.get(node_id);
            (node.state.clone(), node.mover.opponent(), node.depth + 1)
        };

        for (row, col) in state.board.empty_cells() {
            let child_state = state
                .play(child_mover, row, col)
                .expect("empty cell is a legal move");
            let child_id = self
                .tree
                .alloc(MctsNode::new(node_id, child_mover, child_state, depth));
            self.tree.get_mut(node_id).children.push(child_id);
        }

        self.stats.nodes_expanded += 1;
    }

    /// Play out from a node's position to a terminal status on a
    /// disposable copy, returning the winner (or `None` for a drawn-out
    /// full board).
    fn simulate(&mut self, node_id: NodeId, heuristic: Option<&dyn Evaluator>) -> Option<Player> {
        let (mut board, mut captures, mut status, mut current) = {
            let node = self.tree.get(node_id);
            (
                node.state.board.clone(),
                node.state.captures,
                node.state.status,
                node.mover,
            )
        };
        let mut rng = self.rng.fork();

        while status.is_in_progress() {
            current = current.opponent();

            let guided = heuristic
                .and_then(|h| h.evaluate(&board, &captures, current).grid.best_empty_cell(&board));
            let (row, col) = match guided {
                Some(cell) => cell,
                None => {
                    // No usable heuristic score (or no heuristic at all):
                    // fall back to a uniform random empty cell.
                    let empties: Vec<(usize, usize)> = board.empty_cells().collect();
                    match rng.choose(&empties) {
                        Some(&cell) => cell,
                        None => return None,
                    }
                }
            };

            let outcome = rules::apply(&board, &captures, current, row, col)
                .expect("empty cell is a legal move");
            board = outcome.board;
            captures = outcome.captures;
            status = outcome.status;
        }

        status.winner()
    }

    /// Walk from the simulated node to the root: every ancestor gains a
    /// visit, and ancestors whose mover won the playout gain the win
    /// reward. A drawn playout propagates visits only.
    fn backpropagate(&mut self, from: NodeId, winner: Option<Player>) {
        let mut current = from;
        while !current.is_none() {
            let node = self.tree.get_mut(current);
            node.visits += 1;
            if winner == Some(node.mover) {
                node.win_score += self.config.win_reward;
            }
            current = node.parent;
        }
    }

    /// The root child with the highest visit count.
    fn robust_child(&self) -> Option<NodeId> {
        self.tree
            .root_node()
            .children
            .iter()
            .copied()
            .max_by_key(|&id| self.tree.get(id).visits)
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The tree built by the most recent search.
    #[must_use]
    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}
