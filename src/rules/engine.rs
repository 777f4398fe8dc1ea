//! The Pente rules engine: a pure state-transition function.
//!
//! [`apply`] places one stone, resolves captures, and detects wins. It
//! never mutates its inputs; every call hands back fresh copies, so a
//! single ancestor position can feed any number of sibling search
//! branches.

use thiserror::Error;

use crate::core::board::{Board, Cell};
use crate::core::player::{Captures, Player};
use crate::core::state::GameStatus;

/// Run length that wins the game.
pub const WIN_RUN: usize = 5;

/// Captured-stone total that wins the game.
pub const WIN_CAPTURES: u32 = 10;

/// The four undirected line axes used for win detection.
pub const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// The eight directed unit vectors used for capture detection.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// A move targeted an occupied cell.
///
/// This is a caller contract violation, not a recoverable game event:
/// callers are expected to draw moves from the current legal-move set
/// (the board's empty cells), so this error must propagate rather than
/// be swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid move: cell ({row}, {col}) is already occupied")]
pub struct InvalidMoveError {
    pub row: usize,
    pub col: usize,
}

/// Result of applying one move.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveOutcome {
    pub board: Board,
    pub captures: Captures,
    pub status: GameStatus,
}

/// Apply one move: place the mover's stone at (row, col), then resolve
/// wins and captures.
///
/// The win check runs first: if the new stone completes a run of
/// [`WIN_RUN`] along any axis, the mover wins immediately and no capture
/// is evaluated. Otherwise each of the eight directions is checked for a
/// `opponent, opponent, mover` bracket; every match clears the two
/// flanked stones and credits the mover with 2 captures. Reaching
/// [`WIN_CAPTURES`] total wins the game.
pub fn apply(
    board: &Board,
    captures: &Captures,
    mover: Player,
    row: usize,
    col: usize,
) -> Result<MoveOutcome, InvalidMoveError> {
    if !board.get(row, col).is_empty() {
        return Err(InvalidMoveError { row, col });
    }

    let mut board = board.clone();
    let mut captures = *captures;
    board.set(row, col, Cell::Stone(mover));

    if completes_run(&board, mover, row, col) {
        return Ok(MoveOutcome {
            board,
            captures,
            status: GameStatus::Won(mover),
        });
    }

    let opponent = mover.opponent();
    for (dr, dc) in DIRECTIONS {
        let r = row as isize;
        let c = col as isize;

        let bracket = board.at(r + dr, c + dc).map_or(false, |cell| cell.is_stone_of(opponent))
            && board.at(r + 2 * dr, c + 2 * dc).map_or(false, |cell| cell.is_stone_of(opponent))
            && board.at(r + 3 * dr, c + 3 * dc).map_or(false, |cell| cell.is_stone_of(mover));

        if bracket {
            board.set((r + dr) as usize, (c + dc) as usize, Cell::Empty);
            board.set((r + 2 * dr) as usize, (c + 2 * dc) as usize, Cell::Empty);
            captures[mover] += 2;
        }
    }

    let status = if captures[mover] >= WIN_CAPTURES {
        GameStatus::Won(mover)
    } else {
        GameStatus::InProgress
    };

    Ok(MoveOutcome {
        board,
        captures,
        status,
    })
}

/// Check whether the stone just placed at (row, col) completes a run of
/// [`WIN_RUN`] along any axis.
///
/// Counts consecutive mover stones extending outward from the new stone
/// in both directions of each axis, stopping at the first non-mover cell
/// or board edge.
fn completes_run(board: &Board, mover: Player, row: usize, col: usize) -> bool {
    for (dr, dc) in AXES {
        let mut run = 1;
        run += count_ray(board, mover, row, col, dr, dc);
        run += count_ray(board, mover, row, col, -dr, -dc);
        if run >= WIN_RUN {
            return true;
        }
    }
    false
}

fn count_ray(board: &Board, mover: Player, row: usize, col: usize, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    for step in 1..WIN_RUN as isize {
        match board.at(row as isize + step * dr, col as isize + step * dc) {
            Some(cell) if cell.is_stone_of(mover) => count += 1,
            _ => break,
        }
    }
    count
}
