//! Game state snapshots shared by both searchers.
//!
//! A [`SearchState`] is an independent value: every search branch clones
//! its own copy and mutates nothing it does not own. Both searchers
//! explore many sibling futures from the same ancestor, so nothing here
//! may alias.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::{Captures, Player};
use crate::rules::{self, InvalidMoveError};

/// Outcome of the game so far.
///
/// Set exactly once by the rules engine, never reverted, and only as a
/// direct result of the winner's own move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Player),
}

impl GameStatus {
    /// Check whether the game is still being played.
    #[inline]
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// The winning player, if any.
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }
}

/// A stone placement: acting player plus board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(player: Player, row: usize, col: usize) -> Self {
        Self { player, row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// A board snapshot with its captures, status, and the moves that led to
/// it since the search root.
///
/// `history` records every move played through [`SearchState::play`], so
/// the move that produced a state is `history.last()` and the first move
/// of a principal line is the entry just past the root's history length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub board: Board,
    pub captures: Captures,
    pub status: GameStatus,
    history: Vec<Move>,
}

impl SearchState {
    /// Create a state for an empty board of the given size.
    #[must_use]
    pub fn initial(size: usize) -> Self {
        Self::new(Board::new(size), Captures::default())
    }

    /// Create a state from an existing in-progress position.
    #[must_use]
    pub fn new(board: Board, captures: Captures) -> Self {
        Self {
            board,
            captures,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Play one move, returning the successor state.
    ///
    /// The receiver is untouched; the successor owns fresh copies of the
    /// board and captures with the move appended to its history. Fails
    /// with [`InvalidMoveError`] when the target cell is occupied.
    pub fn play(&self, mover: Player, row: usize, col: usize) -> Result<SearchState, InvalidMoveError> {
        let outcome = rules::apply(&self.board, &self.captures, mover, row, col)?;

        let mut history = self.history.clone();
        history.push(Move::new(mover, row, col));

        Ok(SearchState {
            board: outcome.board,
            captures: outcome.captures,
            status: outcome.status,
            history,
        })
    }

    /// The move that produced this state, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// All moves played since the root this state descends from.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
