//! Streak-based evaluation: score empty cells next to runs of own
//! stones.
//!
//! A cell adjacent to a run of k own stones (1 <= k <= 4) scores k + 2,
//! so 3..6. A cell sitting between two runs combines them through a
//! fixed lookup table; a combined run length past 4 means the position
//! holds an open five and should already have been scored terminal, so
//! that lookup failing is a fatal internal error rather than a value to
//! clamp.

use rustc_hash::FxHashMap;

use crate::core::{Board, Captures, Player};
use crate::eval::{Evaluation, ScoreGrid};
use crate::rules::AXES;

/// Grid values below or equal to this are noise and excluded from the
/// scalar score.
const MIN_SCORING_VALUE: u32 = 3;

fn value_to_streak() -> FxHashMap<u32, u32> {
    [(0, 0), (3, 1), (4, 2), (5, 3), (6, 4)].into_iter().collect()
}

fn streak_to_value() -> FxHashMap<u32, u32> {
    [(0, 0), (1, 3), (2, 4), (3, 5), (4, 6)].into_iter().collect()
}

/// Build the streak desirability grid for `mover`.
///
/// Panics when two runs combine past length 4: such a board already
/// contains five in a row and must not reach evaluation.
fn streak_cells(board: &Board, mover: Player) -> Vec<u32> {
    let size = board.size();
    let values = value_to_streak();
    let streaks = streak_to_value();
    let mut grid = vec![0u32; size * size];

    for row in 0..size {
        for col in 0..size {
            if !board.get(row, col).is_stone_of(mover) {
                continue;
            }
            let (r, c) = (row as isize, col as isize);

            for (dr, dc) in AXES {
                // Length of the run starting here, as a cell value:
                // run of k stones scores k + 2.
                let mut value = 3u32;
                let mut steps = 1isize;
                while steps <= 4 {
                    match board.at(r + steps * dr, c + steps * dc) {
                        Some(cell) if cell.is_stone_of(mover) => {
                            value += 1;
                            steps += 1;
                        }
                        _ => break,
                    }
                }

                // The cell just before the run.
                if let Some(cell) = board.at(r - dr, c - dc) {
                    if cell.is_empty() {
                        let idx = (r - dr) as usize * size + (c - dc) as usize;
                        let current = grid[idx];
                        let behind_is_run = board
                            .at(r - 2 * dr, c - 2 * dc)
                            .map_or(false, |cell| cell.is_stone_of(mover));
                        if current == 0 {
                            grid[idx] = value;
                        } else if behind_is_run {
                            // Two runs meet at this cell: combine their
                            // lengths through the fixed table.
                            let combined = values[&current] + values[&value];
                            grid[idx] = *streaks.get(&combined).unwrap_or_else(|| {
                                panic!(
                                    "combined streak {combined} exceeds table; \
                                     board already holds a finished run"
                                )
                            });
                        } else if current < value {
                            let bumped = value + current % 2;
                            grid[idx] = if bumped > 6 { value } else { bumped };
                        }
                    }
                }

                // The first cell past the run.
                let (er, ec) = (r + steps * dr, c + steps * dc);
                if let Some(cell) = board.at(er, ec) {
                    if cell.is_empty() {
                        let idx = er as usize * size + ec as usize;
                        let current = grid[idx];
                        if current == 0 {
                            grid[idx] = value;
                        } else if current < value {
                            let bumped = value + current % 2;
                            grid[idx] = if bumped > 6 { value } else { bumped };
                        }
                    }
                }
            }
        }
    }

    grid
}

fn to_evaluation(board: &Board, cells: &[u32]) -> Evaluation {
    let size = board.size();
    let mut grid = ScoreGrid::zeroed(size);
    let mut score = 0.0;
    for row in 0..size {
        for col in 0..size {
            let value = cells[row * size + col];
            grid.set(row, col, value as f64);
            if value >= MIN_SCORING_VALUE {
                score += value as f64;
            }
        }
    }
    Evaluation { grid, score }
}

/// Streak evaluation: grid of adjacency scores, scalar = their sum.
#[must_use]
pub fn evaluate_streaks(board: &Board, _captures: &Captures, mover: Player) -> Evaluation {
    let cells = streak_cells(board, mover);
    to_evaluation(board, &cells)
}

/// Streak evaluation with a bonus for presence near the board centre:
/// streak cells inside the 5x5 centre block count double toward the
/// scalar. Boards smaller than 6x6 have no meaningful centre and fall
/// back to the plain streak score.
#[must_use]
pub fn evaluate_mid_control(board: &Board, captures: &Captures, mover: Player) -> Evaluation {
    let mut eval = evaluate_streaks(board, captures, mover);
    let size = board.size();
    if size < 6 {
        return eval;
    }

    let mid = size.div_ceil(2);
    for row in (mid - 3)..(mid + 2) {
        for col in (mid - 3)..(mid + 2) {
            let value = eval.grid.get(row, col);
            if value > f64::from(MIN_SCORING_VALUE - 1) {
                eval.score += 2.0 * value;
            }
        }
    }
    eval
}

/// Pure centre-presence balance: +1 per own stone, -1 per opponent
/// stone inside the 5x5 centre block. No per-cell grid.
#[must_use]
pub fn evaluate_center_control(board: &Board, _captures: &Captures, mover: Player) -> Evaluation {
    let size = board.size();
    let mut eval = Evaluation::zeroed(size);
    if size < 6 {
        return eval;
    }

    let mid = size.div_ceil(2);
    let opponent = mover.opponent();
    for row in (mid - 3)..(mid + 2) {
        for col in (mid - 3)..(mid + 2) {
            let cell = board.get(row, col);
            if cell.is_stone_of(mover) {
                eval.score += 1.0;
            } else if cell.is_stone_of(opponent) {
                eval.score -= 1.0;
            }
        }
    }
    eval
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn board_with(stones: &[(Player, usize, usize)], size: usize) -> Board {
        let mut board = Board::new(size);
        for &(player, row, col) in stones {
            board.set(row, col, Cell::Stone(player));
        }
        board
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(7);
        let eval = evaluate_streaks(&board, &Captures::default(), Player::One);

        assert_eq!(eval.score, 0.0);
        assert_eq!(eval.grid.best_empty_cell(&board), None);
    }

    #[test]
    fn test_single_stone_neighbors_score_three() {
        let board = board_with(&[(Player::One, 3, 3)], 7);
        let eval = evaluate_streaks(&board, &Captures::default(), Player::One);

        // A lone stone is a run of 1: adjacent cells on all four axes
        // score 3.
        assert_eq!(eval.grid.get(3, 2), 3.0);
        assert_eq!(eval.grid.get(3, 4), 3.0);
        assert_eq!(eval.grid.get(2, 3), 3.0);
        assert_eq!(eval.grid.get(4, 3), 3.0);
        assert_eq!(eval.grid.get(2, 2), 3.0);
        assert_eq!(eval.grid.get(4, 4), 3.0);
        assert_eq!(eval.grid.get(2, 4), 3.0);
        assert_eq!(eval.grid.get(4, 2), 3.0);
        assert_eq!(eval.score, 8.0 * 3.0);
    }

    #[test]
    fn test_pair_scores_four_at_ends() {
        let board = board_with(&[(Player::One, 3, 2), (Player::One, 3, 3)], 7);
        let eval = evaluate_streaks(&board, &Captures::default(), Player::One);

        assert_eq!(eval.grid.get(3, 1), 4.0);
        assert_eq!(eval.grid.get(3, 4), 4.0);
    }

    #[test]
    fn test_opponent_stones_are_ignored() {
        let board = board_with(&[(Player::Two, 3, 3)], 7);
        let eval = evaluate_streaks(&board, &Captures::default(), Player::One);

        assert_eq!(eval.score, 0.0);
    }

    #[test]
    fn test_gap_between_runs_combines() {
        // 1 1 . 1 : the gap joins a run of 2 and a run of 1 -> combined
        // streak 3 -> value 5.
        let board = board_with(
            &[(Player::One, 0, 0), (Player::One, 0, 1), (Player::One, 0, 3)],
            7,
        );
        let eval = evaluate_streaks(&board, &Captures::default(), Player::One);

        assert_eq!(eval.grid.get(0, 2), 5.0);
    }

    #[test]
    #[should_panic(expected = "combined streak")]
    fn test_combined_overlong_run_is_fatal() {
        // 1 1 1 . 1 1 : combining 3 and 2 through the gap exceeds the
        // table; the board would hold an open five.
        let board = board_with(
            &[
                (Player::One, 0, 0),
                (Player::One, 0, 1),
                (Player::One, 0, 2),
                (Player::One, 0, 4),
                (Player::One, 0, 5),
            ],
            7,
        );
        evaluate_streaks(&board, &Captures::default(), Player::One);
    }

    #[test]
    fn test_mid_control_doubles_center() {
        let center = board_with(&[(Player::One, 3, 3)], 7);
        let edge = board_with(&[(Player::One, 0, 0)], 7);
        let captures = Captures::default();

        let center_eval = evaluate_mid_control(&center, &captures, Player::One);
        let edge_eval = evaluate_mid_control(&edge, &captures, Player::One);

        assert!(center_eval.score > edge_eval.score);
    }

    #[test]
    fn test_mid_control_small_board_falls_back() {
        let board = board_with(&[(Player::One, 2, 2)], 5);
        let captures = Captures::default();

        let plain = evaluate_streaks(&board, &captures, Player::One);
        let mid = evaluate_mid_control(&board, &captures, Player::One);

        assert_eq!(plain.score, mid.score);
    }

    #[test]
    fn test_center_control_balance() {
        let board = board_with(
            &[
                (Player::One, 3, 3),
                (Player::One, 3, 4),
                (Player::Two, 4, 3),
                (Player::One, 0, 0), // outside the centre block
            ],
            7,
        );
        let eval = evaluate_center_control(&board, &Captures::default(), Player::One);

        assert_eq!(eval.score, 1.0);

        let flipped = evaluate_center_control(&board, &Captures::default(), Player::Two);
        assert_eq!(flipped.score, -1.0);
    }
}
