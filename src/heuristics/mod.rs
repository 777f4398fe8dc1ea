//! Concrete board evaluators.
//!
//! Each heuristic scores a position from one player's perspective and
//! fills a per-cell desirability grid usable for move ordering or
//! playout guidance. They are deliberately cheap: all of them run once
//! per node in alpha-beta and once per playout move in guided MCTS.
//!
//! [`Heuristic`] is the closed set of built-in evaluators; it implements
//! [`Evaluator`] by dispatch, so built-ins can be mixed freely with
//! user-supplied evaluators in a
//! [`CompositeEvaluator`](crate::eval::CompositeEvaluator).

pub mod captures;
pub mod momentum;
pub mod streaks;

pub use captures::evaluate_captures;
pub use momentum::{evaluate_momentum, momentum_score};
pub use streaks::{evaluate_center_control, evaluate_mid_control, evaluate_streaks};

use serde::{Deserialize, Serialize};

use crate::core::{Board, Captures, Player};
use crate::eval::{Evaluation, Evaluator};

/// The built-in heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heuristic {
    /// Empty cells adjacent to own runs, scored by run length.
    Streaks,

    /// [`Heuristic::Streaks`] with doubled weight near the board centre.
    MidControl,

    /// Stone-count balance inside the 5x5 centre block.
    CenterControl,

    /// Banked captures and open capture threats, netted.
    CapturedPieces,

    /// Open runs weighted by length and how blocked their ends are.
    Momentum,
}

impl Evaluator for Heuristic {
    fn evaluate(&self, board: &Board, captures: &Captures, mover: Player) -> Evaluation {
        match self {
            Self::Streaks => evaluate_streaks(board, captures, mover),
            Self::MidControl => evaluate_mid_control(board, captures, mover),
            Self::CenterControl => evaluate_center_control(board, captures, mover),
            Self::CapturedPieces => evaluate_captures(board, captures, mover),
            Self::Momentum => evaluate_momentum(board, captures, mover),
        }
    }
}
