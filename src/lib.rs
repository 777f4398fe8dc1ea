//! # pente
//!
//! A Pente game-tree search engine: rules, evaluators, and two
//! interchangeable searchers (alpha-beta minimax and Monte Carlo Tree
//! Search).
//!
//! ## Design Principles
//!
//! 1. **Pure rules core**: the rules engine and search state are
//!    side-effect free. Applying a move builds a new position; parents
//!    and siblings are never mutated, so search trees can hold
//!    thousands of positions safely.
//!
//! 2. **Evaluation is a plug-in**: both searchers consume the
//!    [`Evaluator`](eval::Evaluator) trait. Alpha-beta reads the scalar
//!    score at its leaves; MCTS reads the per-cell grid to guide
//!    playouts. Heuristics compose by summation.
//!
//! 3. **Deterministic given a seed**: all randomness flows through
//!    [`GameRng`](core::GameRng); a fixed seed reproduces an MCTS
//!    search exactly.
//!
//! ## Modules
//!
//! - `core`: board, players, capture counters, search state, RNG
//! - `rules`: move application, captures, win detection
//! - `eval`: the evaluator contract and score grids
//! - `heuristics`: built-in evaluators (streaks, captures, momentum)
//! - `alphabeta`: depth-limited minimax with alpha-beta pruning
//! - `mcts`: arena-based Monte Carlo Tree Search
//! - `driver`: move selectors and turn-by-turn game driving

pub mod alphabeta;
pub mod core;
pub mod driver;
pub mod eval;
pub mod heuristics;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Captures, Cell, GameRng, GameStatus, Move, Player, SearchState};

pub use crate::rules::{InvalidMoveError, MoveOutcome, WIN_CAPTURES, WIN_RUN};

pub use crate::eval::{CompositeEvaluator, Evaluation, Evaluator, ScoreGrid};

pub use crate::heuristics::Heuristic;

pub use crate::alphabeta::{AlphaBeta, AlphaBetaStats, SearchOutcome};

pub use crate::mcts::{MctsConfig, MctsSearch, SearchBudget, SearchStats};

pub use crate::driver::{AlphaBetaPlayer, DriverError, MctsPlayer, MoveSelector, Turn};
