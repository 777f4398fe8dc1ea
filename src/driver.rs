//! Driving a game from raw position data.
//!
//! A caller holds the board, the capture counters, and knows whose turn
//! it is; [`play_turn`] asks a [`MoveSelector`] for a move and applies
//! it through the rules engine, returning the updated position and
//! status. Both searchers are wrapped as selectors, so callers can swap
//! or pit them without caring which algorithm is behind the trait.

use thiserror::Error;

use crate::alphabeta::AlphaBeta;
use crate::core::{Board, Captures, GameStatus, Move, Player, SearchState};
use crate::eval::Evaluator;
use crate::mcts::{MctsConfig, MctsSearch, SearchBudget};
use crate::rules::{self, InvalidMoveError};

/// Errors from driving a turn.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The selector produced no move for an in-progress position.
    #[error("no move available for {player}")]
    NoMove {
        /// The player who was to move.
        player: Player,
    },

    /// The selector proposed a move the rules reject.
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),
}

/// One completed turn.
#[derive(Clone, Debug)]
pub struct Turn {
    /// The move that was played.
    pub mv: Move,
    /// Board after the move, captures removed.
    pub board: Board,
    /// Capture counters after the move.
    pub captures: Captures,
    /// Game status after the move.
    pub status: GameStatus,
}

/// A move-selection strategy.
///
/// `select` returns `None` when no move exists: the position is already
/// decided or the board is full.
pub trait MoveSelector {
    fn select(&mut self, state: &SearchState, mover: Player) -> Option<Move>;
}

/// Alpha-beta search as a move selector.
pub struct AlphaBetaPlayer {
    search: AlphaBeta,
    depth: u32,
    evaluator: Box<dyn Evaluator>,
}

impl AlphaBetaPlayer {
    /// Create a selector searching to `depth` plies with the given
    /// leaf evaluator.
    #[must_use]
    pub fn new(depth: u32, evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            search: AlphaBeta::new(),
            depth,
            evaluator,
        }
    }

    /// The underlying search, for its statistics.
    #[must_use]
    pub fn search(&self) -> &AlphaBeta {
        &self.search
    }
}

impl MoveSelector for AlphaBetaPlayer {
    fn select(&mut self, state: &SearchState, mover: Player) -> Option<Move> {
        if !state.status.is_in_progress() {
            return None;
        }
        let outcome = self
            .search
            .search(state, mover, self.depth, self.evaluator.as_ref());
        outcome.best_move
    }
}

/// Monte Carlo Tree Search as a move selector.
pub struct MctsPlayer {
    search: MctsSearch,
    budget: SearchBudget,
    heuristic: Option<Box<dyn Evaluator>>,
}

impl MctsPlayer {
    /// Create a selector running MCTS under the given budget with
    /// uniform random playouts.
    #[must_use]
    pub fn new(config: MctsConfig, budget: SearchBudget) -> Self {
        Self {
            search: MctsSearch::new(config),
            budget,
            heuristic: None,
        }
    }

    /// Guide playout moves with an evaluator's score grid.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Box<dyn Evaluator>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// The underlying search, for its statistics and tree.
    #[must_use]
    pub fn search(&self) -> &MctsSearch {
        &self.search
    }
}

impl MoveSelector for MctsPlayer {
    fn select(&mut self, state: &SearchState, mover: Player) -> Option<Move> {
        let heuristic = self.heuristic.as_deref();
        self.search
            .search(state, mover, self.budget, heuristic)
            .map(|(mv, _)| mv)
    }
}

/// Ask `selector` for `mover`'s move on the given position and apply it.
///
/// The inputs are raw position data rather than a [`SearchState`], so a
/// caller holding only a board and capture counts (a UI, a protocol
/// adapter, a tournament harness) can drive turns directly.
///
/// # Errors
///
/// [`DriverError::NoMove`] when the selector has no move to offer;
/// [`DriverError::InvalidMove`] when the proposed move fails rule
/// validation.
pub fn play_turn(
    selector: &mut dyn MoveSelector,
    board: &Board,
    captures: &Captures,
    mover: Player,
) -> Result<Turn, DriverError> {
    let state = SearchState::new(board.clone(), *captures);
    let mv = selector
        .select(&state, mover)
        .ok_or(DriverError::NoMove { player: mover })?;

    let outcome = rules::apply(board, captures, mover, mv.row, mv.col)?;
    Ok(Turn {
        mv,
        board: outcome.board,
        captures: outcome.captures,
        status: outcome.status,
    })
}
