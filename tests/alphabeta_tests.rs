//! Integration tests for the alpha-beta searcher.
//!
//! The central check: pruning never changes the root value. A plain
//! minimax (no window) over the same tree must agree with alpha-beta at
//! every depth tried.

use pente::{
    AlphaBeta, Board, Captures, Cell, Evaluation, Evaluator, Heuristic, Player, ScoreGrid,
    SearchState,
};

/// Stone-count difference from the searching player's perspective.
struct StoneDiff;

impl Evaluator for StoneDiff {
    fn evaluate(&self, board: &Board, _captures: &Captures, mover: Player) -> Evaluation {
        let score =
            board.stone_count(mover) as f64 - board.stone_count(mover.opponent()) as f64;
        Evaluation {
            grid: ScoreGrid::zeroed(board.size()),
            score,
        }
    }
}

/// Plain minimax over the same move generator, no pruning window.
fn minimax(
    state: &SearchState,
    root_mover: Player,
    evaluator: &dyn Evaluator,
    depth: u32,
    maximizing: bool,
) -> f64 {
    if depth == 0 || !state.status.is_in_progress() || state.board.is_full() {
        return evaluator
            .evaluate(&state.board, &state.captures, root_mover)
            .score;
    }

    let mover = if maximizing {
        root_mover
    } else {
        root_mover.opponent()
    };

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for (row, col) in state.board.empty_cells() {
        let child = state.play(mover, row, col).unwrap();
        let score = minimax(&child, root_mover, evaluator, depth - 1, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[test]
fn test_pruning_preserves_minimax_value() {
    // A small asymmetric position so scores differ across moves.
    let mut board = Board::new(4);
    board.set(0, 0, Cell::Stone(Player::One));
    board.set(1, 1, Cell::Stone(Player::Two));
    board.set(2, 2, Cell::Stone(Player::Two));
    let state = SearchState::new(board, Captures::default());

    for depth in 1..=3 {
        let reference = minimax(&state, Player::One, &StoneDiff, depth, true);
        let mut search = AlphaBeta::new();
        let outcome = search.search(&state, Player::One, depth, &StoneDiff);

        assert_eq!(
            outcome.score, reference,
            "alpha-beta diverged from plain minimax at depth {depth}"
        );
    }
}

#[test]
fn test_pruning_preserves_value_with_captures() {
    // Capture material in play: the searcher must see the swing from the
    // bracket at (0,3).
    let mut board = Board::new(4);
    board.set(0, 0, Cell::Stone(Player::One));
    board.set(0, 1, Cell::Stone(Player::Two));
    board.set(0, 2, Cell::Stone(Player::Two));
    let state = SearchState::new(board, Captures::default());

    for depth in 1..=2 {
        let reference = minimax(&state, Player::One, &StoneDiff, depth, true);
        let mut search = AlphaBeta::new();
        let outcome = search.search(&state, Player::One, depth, &StoneDiff);

        assert_eq!(outcome.score, reference);
    }
}

#[test]
fn test_takes_the_winning_extension() {
    // Player Two holds (0,0)..(0,3); searching for Two at depth 1 under
    // the momentum heuristic scores the completed five highest (an open
    // four plus the interior runs it contains) and wins at (0,4).
    let mut board = Board::new(7);
    for col in 0..4 {
        board.set(0, col, Cell::Stone(Player::Two));
    }
    let state = SearchState::new(board, Captures::default());

    let mut search = AlphaBeta::new();
    let outcome = search.search(&state, Player::Two, 1, &Heuristic::Momentum);

    let mv = outcome.best_move.unwrap();
    assert_eq!((mv.row, mv.col), (0, 4), "expected the winning extension");
    assert_eq!(outcome.principal.status.winner(), Some(Player::Two));
}

#[test]
fn test_depth_zero_evaluates_in_place() {
    let state = SearchState::initial(5);
    let mut search = AlphaBeta::new();

    let outcome = search.search(&state, Player::One, 0, &Heuristic::Momentum);

    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.principal, state);
}
