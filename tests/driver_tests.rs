//! Integration tests driving full games through move selectors.

use pente::driver::{play_turn, AlphaBetaPlayer, DriverError, MctsPlayer, MoveSelector};
use pente::{Board, Captures, GameStatus, Heuristic, MctsConfig, Player, SearchBudget};

/// Drive a game to completion or to `max_turns`, returning the final
/// status and the number of turns played.
fn run_game<'a>(
    one: &'a mut dyn MoveSelector,
    two: &'a mut dyn MoveSelector,
    size: usize,
    max_turns: usize,
) -> (GameStatus, usize) {
    let mut board = Board::new(size);
    let mut captures = Captures::default();
    let mut mover = Player::One;

    for turn_count in 0..max_turns {
        let selector = match mover {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        let turn = match play_turn(selector, &board, &captures, mover) {
            Ok(turn) => turn,
            Err(DriverError::NoMove { .. }) => return (GameStatus::InProgress, turn_count),
            Err(err) => panic!("selector produced a rejected move: {err}"),
        };

        assert_eq!(turn.mv.player, mover);
        board = turn.board;
        captures = turn.captures;

        if let GameStatus::Won(winner) = turn.status {
            assert_eq!(winner, mover, "only the mover can win on their turn");
            return (turn.status, turn_count + 1);
        }
        mover = mover.opponent();
    }

    (GameStatus::InProgress, max_turns)
}

#[test]
fn test_alphabeta_vs_mcts_game() {
    let mut one = AlphaBetaPlayer::new(1, Box::new(Heuristic::Momentum));
    let mut two = MctsPlayer::new(
        MctsConfig::default().with_seed(3),
        SearchBudget::Iterations(40),
    )
    .with_heuristic(Box::new(Heuristic::Momentum));

    let (status, turns) = run_game(&mut one, &mut two, 7, 49);

    // The game always ends one way or the other within the board's
    // capacity.
    assert!(turns <= 49);
    if let GameStatus::Won(_) = status {
        assert!(turns >= 9, "a win needs at least five stones for one side");
    }
}

#[test]
fn test_mcts_vs_mcts_game_is_deterministic() {
    let play = || {
        let mut one = MctsPlayer::new(
            MctsConfig::default().with_seed(5),
            SearchBudget::Iterations(30),
        );
        let mut two = MctsPlayer::new(
            MctsConfig::default().with_seed(6),
            SearchBudget::Iterations(30),
        );
        run_game(&mut one, &mut two, 5, 25)
    };

    assert_eq!(play(), play());
}

#[test]
fn test_search_statistics_accumulate() {
    let board = Board::new(5);
    let captures = Captures::default();

    let mut player = AlphaBetaPlayer::new(2, Box::new(Heuristic::Momentum));
    play_turn(&mut player, &board, &captures, Player::One).unwrap();

    let stats = player.search().stats();
    assert!(stats.nodes > 0);
    assert!(stats.evaluations > 0);
}
