//! Capture-driven evaluation.
//!
//! Scores the material race toward the ten-capture win: captures
//! already banked plus capture threats on the board, netted against the
//! opponent's. A capture threat is a `self, opp, opp, empty` line in
//! any of the eight directions; playing the empty end completes the
//! bracket.

use crate::core::{Board, Captures, Player};
use crate::eval::Evaluation;
use crate::rules::DIRECTIONS;

/// Grid value for a cell that completes a capture bracket.
const THREAT_VALUE: f64 = 3.0;

/// Count capture threats open to `player`, marking the completing cell
/// in `grid` when one is supplied.
fn count_threats(board: &Board, player: Player, mut grid: Option<&mut Evaluation>) -> u32 {
    let opponent = player.opponent();
    let mut threats = 0;

    for row in 0..board.size() {
        for col in 0..board.size() {
            if !board.get(row, col).is_stone_of(player) {
                continue;
            }
            let (r, c) = (row as isize, col as isize);

            for (dr, dc) in DIRECTIONS {
                let pair = board
                    .at(r + dr, c + dc)
                    .map_or(false, |cell| cell.is_stone_of(opponent))
                    && board
                        .at(r + 2 * dr, c + 2 * dc)
                        .map_or(false, |cell| cell.is_stone_of(opponent));
                let end_open = board
                    .at(r + 3 * dr, c + 3 * dc)
                    .map_or(false, |cell| cell.is_empty());

                if pair && end_open {
                    threats += 1;
                    if let Some(eval) = grid.as_deref_mut() {
                        let end_row = (r + 3 * dr) as usize;
                        let end_col = (c + 3 * dc) as usize;
                        eval.grid.set(end_row, end_col, THREAT_VALUE);
                    }
                }
            }
        }
    }

    threats
}

/// Capture evaluation for `mover`.
///
/// Grid: cells that complete one of `mover`'s capture brackets score
/// [`THREAT_VALUE`]. Scalar: `mover`'s banked captures plus open
/// threats, minus the opponent's captures and threats.
#[must_use]
pub fn evaluate_captures(board: &Board, captures: &Captures, mover: Player) -> Evaluation {
    let mut eval = Evaluation::zeroed(board.size());
    let opponent = mover.opponent();

    let own_threats = count_threats(board, mover, Some(&mut eval));
    let opp_threats = count_threats(board, opponent, None);

    eval.score = f64::from(captures[mover]) + f64::from(own_threats)
        - f64::from(captures[opponent])
        - f64::from(opp_threats);
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
    fn test_empty_board_scores_captures_only() {
        let board = Board::new(7);
        let captures = Captures::new(4, 2);

        let eval = evaluate_captures(&board, &captures, Player::One);

        assert_eq!(eval.score, 2.0);
        assert_eq!(eval.grid.best_empty_cell(&board), None);
    }

    #[test]
    fn test_open_bracket_is_a_threat() {
        // 1 2 2 . along the top row: playing (0, 3) captures the pair.
        let board = board_with(
            &[(Player::One, 0, 0), (Player::Two, 0, 1), (Player::Two, 0, 2)],
            7,
        );

        let eval = evaluate_captures(&board, &Captures::default(), Player::One);

        assert_eq!(eval.score, 1.0);
        assert_eq!(eval.grid.get(0, 3), THREAT_VALUE);
        assert_eq!(eval.grid.best_empty_cell(&board), Some((0, 3)));
    }

    #[test]
    fn test_blocked_bracket_is_not_a_threat() {
        // 1 2 2 1 is already resolved; 2 2 1 against the edge has its
        // completing cell off the board.
        let closed = board_with(
            &[
                (Player::One, 0, 0),
                (Player::Two, 0, 1),
                (Player::Two, 0, 2),
                (Player::One, 0, 3),
            ],
            7,
        );
        let edge = board_with(
            &[(Player::Two, 0, 0), (Player::Two, 0, 1), (Player::One, 0, 2)],
            7,
        );

        assert_eq!(
            evaluate_captures(&closed, &Captures::default(), Player::One).score,
            0.0
        );
        assert_eq!(
            evaluate_captures(&edge, &Captures::default(), Player::One).score,
            0.0
        );
    }

    #[test]
    fn test_opponent_threats_count_against() {
        // 2 1 1 . : Player Two threatens a capture.
        let board = board_with(
            &[(Player::Two, 3, 0), (Player::One, 3, 1), (Player::One, 3, 2)],
            7,
        );

        let eval = evaluate_captures(&board, &Captures::default(), Player::One);

        assert_eq!(eval.score, -1.0);
        // The opponent's completing cell is not in the mover's grid.
        assert_eq!(eval.grid.get(3, 3), 0.0);
    }

    #[test]
    fn test_diagonal_threat() {
        let board = board_with(
            &[(Player::One, 0, 0), (Player::Two, 1, 1), (Player::Two, 2, 2)],
            7,
        );

        let eval = evaluate_captures(&board, &Captures::default(), Player::One);

        assert_eq!(eval.score, 1.0);
        assert_eq!(eval.grid.get(3, 3), THREAT_VALUE);
    }
}
