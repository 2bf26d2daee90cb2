//! Integration tests for the Mancala rules engine
//!
//! Plays seeded random games end to end and checks the board invariants after every move

use mancala_core::{
    Board, BoardView, GameOutcome, GameStatus, Move, Player, SowError, SIZE, TOTAL_SEEDS,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Upper bound on moves per random game
const MAX_MOVES: usize = 1000;

/// A move-by-move record of one random game
struct Playout {
    views: Vec<BoardView>,
    moves: Vec<Move>,
}

/// Play uniformly random legal moves from a fresh board
fn random_playout(seed: u64) -> Playout {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut views = vec![board.view()];
    let mut moves = Vec::new();

    while moves.len() < MAX_MOVES {
        let legal = board.legal_moves();
        let Some(&mv) = legal.choose(&mut rng) else {
            break;
        };
        board.apply(mv).unwrap();
        moves.push(mv);
        views.push(board.view());
    }

    Playout { views, moves }
}

fn row_total(view: &BoardView, player: Player) -> u32 {
    view.row(player).iter().sum()
}

// ============================================================================
// INVARIANT TESTS
// ============================================================================

#[test]
fn test_seed_conservation() {
    for seed in 0..200 {
        let playout = random_playout(seed);
        for view in &playout.views {
            assert_eq!(view.total_seeds(), TOTAL_SEEDS, "seed {}", seed);
        }
    }
}

#[test]
fn test_random_games_finish() {
    for seed in 0..200 {
        let playout = random_playout(seed);
        let last = playout.views.last().unwrap();

        assert_eq!(last.status, GameStatus::Finished, "seed {} did not finish", seed);
        assert_eq!(last.pits, [[0; SIZE]; 2]);
        assert_eq!(last.stores[0] + last.stores[1], TOTAL_SEEDS);
        assert!(last.outcome().is_some());
    }
}

#[test]
fn test_turn_alternation() {
    for seed in 0..50 {
        let playout = random_playout(seed);
        for (i, mv) in playout.moves.iter().enumerate() {
            let before = &playout.views[i];
            let after = &playout.views[i + 1];
            let store_gain = after.store(mv.player) - before.store(mv.player);

            assert_eq!(before.next_player, mv.player);
            if after.next_player == mv.player {
                // an extra turn means the last seed reached the sower's store
                assert!(store_gain > 0, "seed {} move {}", seed, i);
            }
        }
    }
}

#[test]
fn test_stores_never_decrease() {
    for seed in 0..50 {
        let playout = random_playout(seed);
        for pair in playout.views.windows(2) {
            assert!(pair[1].stores[0] >= pair[0].stores[0]);
            assert!(pair[1].stores[1] >= pair[0].stores[1]);
        }
    }
}

#[test]
fn test_status_transitions() {
    let playout = random_playout(7);
    assert_eq!(playout.views[0].status, GameStatus::Fresh);
    for view in &playout.views[1..playout.views.len() - 1] {
        assert_eq!(view.status, GameStatus::Started);
        assert!(row_total(view, Player::One) > 0);
        assert!(row_total(view, Player::Two) > 0);
    }
}

#[test]
fn test_finished_board_rejects_every_move() {
    let playout = random_playout(3);
    let mut board = Board::new();
    for &mv in &playout.moves {
        board.apply(mv).unwrap();
    }

    assert_eq!(board.status(), GameStatus::Finished);
    let before = board.view();
    for player in [Player::One, Player::Two] {
        for pit in 0..SIZE {
            assert_eq!(board.sow(player, pit), Err(SowError::GameOver));
        }
    }
    assert_eq!(board.view(), before);
}

#[test]
fn test_failed_sow_leaves_board_unchanged() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut board = Board::new();

    for _ in 0..20 {
        if board.status() == GameStatus::Finished {
            break;
        }
        let before = board.view();
        let wrong = board.next_player().opponent();
        assert!(board.sow(wrong, 0).is_err());
        assert!(board.sow(board.next_player(), SIZE).is_err());
        assert_eq!(board.view(), before);

        let mv = *board.legal_moves().choose(&mut rng).unwrap();
        board.apply(mv).unwrap();
    }
}

// ============================================================================
// SCENARIO TESTS
// ============================================================================

#[test]
fn test_reference_game() {
    let mut board = Board::new();
    let moves: Vec<Move> = ["p1:2", "p1:5", "p2:1", "p2:5", "p1:1", "p1:5", "p1:0"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let mut results = Vec::new();
    for mv in moves {
        results.push(board.apply(mv).unwrap());
    }

    let next: Vec<Player> = results.iter().map(|&(next, _)| next).collect();
    assert_eq!(
        next,
        vec![
            Player::One,
            Player::Two,
            Player::Two,
            Player::One,
            Player::One,
            Player::One,
            Player::Two,
        ]
    );

    let view = board.view();
    assert_eq!(view.row(Player::One), &[0, 1, 3, 8, 7, 0]);
    assert_eq!(view.row(Player::Two), &[0, 0, 6, 6, 5, 0]);
    assert_eq!(view.stores, [10, 2]);
    assert_eq!(view.status, GameStatus::Started);
    assert_eq!(view.outcome(), None);
}

#[test]
fn test_outcome_matches_stores() {
    for seed in 0..50 {
        let playout = random_playout(seed);
        let last = playout.views.last().unwrap();
        let expected = match last.stores[0].cmp(&last.stores[1]) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::One),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        };
        assert_eq!(last.outcome(), Some(expected));
    }
}
