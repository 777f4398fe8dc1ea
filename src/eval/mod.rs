//! The evaluator contract consumed by both searchers.
//!
//! An evaluator maps (board, captures, mover) to an [`Evaluation`]: a
//! per-cell desirability grid plus an aggregate scalar score. Alpha-beta
//! consumes the scalar at its leaves; MCTS consumes the grid to pick the
//! best empty cell during heuristic-guided playouts. Concrete scoring
//! logic is a plug-in (see [`crate::heuristics`]), not part of the
//! search core.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Captures, Player};

/// Per-cell desirability scores for an N×N board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreGrid {
    size: usize,
    values: Vec<f64>,
}

impl ScoreGrid {
    /// Create a zeroed grid matching a board's dimensions.
    #[must_use]
    pub fn zeroed(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Side length of the grid.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the score at (row, col).
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    /// Set the score at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.size + col] = value;
    }

    /// Add another grid cell-by-cell.
    ///
    /// Panics if the sizes differ; composite members must score the same
    /// board.
    pub fn add(&mut self, other: &ScoreGrid) {
        assert_eq!(self.size, other.size, "grid sizes must match");
        for (dst, src) in self.values.iter_mut().zip(other.values.iter()) {
            *dst += src;
        }
    }

    /// Sum of all cell scores.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// The empty cell of `board` with the highest score, ties broken by
    /// first-found in row-major scan order.
    ///
    /// Occupied cells are excluded. Returns `None` when no empty cell
    /// carries a positive score, which callers treat as "no usable
    /// score".
    #[must_use]
    pub fn best_empty_cell(&self, board: &Board) -> Option<(usize, usize)> {
        let mut best: Option<((usize, usize), f64)> = None;
        for (row, col) in board.empty_cells() {
            let score = self.get(row, col);
            if score > 0.0 && best.map_or(true, |(_, b)| score > b) {
                best = Some(((row, col), score));
            }
        }
        best.map(|(cell, _)| cell)
    }
}

/// Result of evaluating one position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Per-cell desirability for the mover's next placement.
    pub grid: ScoreGrid,
    /// Aggregate position value from the mover's perspective.
    pub score: f64,
}

impl Evaluation {
    /// An all-zero evaluation for the given board size.
    #[must_use]
    pub fn zeroed(size: usize) -> Self {
        Self {
            grid: ScoreGrid::zeroed(size),
            score: 0.0,
        }
    }
}

/// A board-scoring strategy.
///
/// Scores must be finite: alpha-beta initializes its window to the
/// infinity sentinels, and an infinite evaluation would make pruning
/// comparisons ambiguous at the boundary.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, captures: &Captures, mover: Player) -> Evaluation;
}

/// Sums the evaluations of several member heuristics, cell-by-cell for
/// the grid and additively for the scalar.
pub struct CompositeEvaluator {
    members: Vec<Box<dyn Evaluator>>,
}

impl CompositeEvaluator {
    #[must_use]
    pub fn new(members: Vec<Box<dyn Evaluator>>) -> Self {
        Self { members }
    }
}

impl Evaluator for CompositeEvaluator {
    fn evaluate(&self, board: &Board, captures: &Captures, mover: Player) -> Evaluation {
        let mut combined = Evaluation::zeroed(board.size());
        for member in &self.members {
            let eval = member.evaluate(board, captures, mover);
            combined.grid.add(&eval.grid);
            combined.score += eval.score;
        }
        combined
    }
}
