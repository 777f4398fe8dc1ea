//! Momentum evaluation: reward open runs, in proportion to how close
//! they are to five and how open their ends are.
//!
//! Each own stone is checked along every axis for the pattern starting
//! at it: a four-run scores 10, a three-run 6, a split pair (`X . X`)
//! 3. A run blocked on one end (by an opponent stone or the board edge)
//! scores half; blocked on both ends it scores nothing.

use crate::core::{Board, Captures, Player};
use crate::eval::Evaluation;
use crate::rules::AXES;

const FOUR_RUN: f64 = 10.0;
const THREE_RUN: f64 = 6.0;
const SPLIT_PAIR: f64 = 3.0;

fn is_own(board: &Board, r: isize, c: isize, player: Player) -> bool {
    board.at(r, c).map_or(false, |cell| cell.is_stone_of(player))
}

/// Opponent stone or off-board: either way the run cannot grow there.
fn is_blocked(board: &Board, r: isize, c: isize, player: Player) -> bool {
    match board.at(r, c) {
        Some(cell) => cell.is_stone_of(player.opponent()),
        None => true,
    }
}

/// Total momentum for `player` across the board.
#[must_use]
pub fn momentum_score(board: &Board, player: Player) -> f64 {
    let mut score = 0.0;

    for row in 0..board.size() {
        for col in 0..board.size() {
            if !board.get(row, col).is_stone_of(player) {
                continue;
            }
            let (r, c) = (row as isize, col as isize);

            for (dr, dc) in AXES {
                let mut blocked_ends = 0;
                if is_blocked(board, r - dr, c - dc, player) {
                    blocked_ends += 1;
                }

                let (reward, end) = if is_own(board, r + dr, c + dc, player)
                    && is_own(board, r + 2 * dr, c + 2 * dc, player)
                    && is_own(board, r + 3 * dr, c + 3 * dc, player)
                {
                    (FOUR_RUN, 4)
                } else if is_own(board, r + dr, c + dc, player)
                    && is_own(board, r + 2 * dr, c + 2 * dc, player)
                {
                    (THREE_RUN, 3)
                } else if is_own(board, r + 2 * dr, c + 2 * dc, player)
                    && !is_own(board, r + dr, c + dc, player)
                {
                    (SPLIT_PAIR, 3)
                } else {
                    continue;
                };

                if is_blocked(board, r + end * dr, c + end * dc, player) {
                    blocked_ends += 1;
                }
                score += match blocked_ends {
                    0 => reward,
                    1 => reward / 2.0,
                    _ => 0.0,
                };
            }
        }
    }

    score
}

/// Momentum evaluation for `mover`.
///
/// Scalar: the board's momentum as it stands. Grid: for every empty
/// cell, the momentum the board would have after `mover` plays there,
/// found by probing each cell on a scratch copy.
#[must_use]
pub fn evaluate_momentum(board: &Board, _captures: &Captures, mover: Player) -> Evaluation {
    use crate::core::Cell;

    let mut eval = Evaluation::zeroed(board.size());
    eval.score = momentum_score(board, mover);

    let mut probe = board.clone();
    let empties: Vec<(usize, usize)> = board.empty_cells().collect();
    for (row, col) in empties {
        probe.set(row, col, Cell::Stone(mover));
        eval.grid.set(row, col, momentum_score(&probe, mover));
        probe.set(row, col, Cell::Empty);
    }

    eval
}
