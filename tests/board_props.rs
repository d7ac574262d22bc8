use dots_and_boxes::{Board, GameSession, Player, PlayerId, RandomPlayer};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// A board of the given size with `fill` random edges drawn.
fn random_board(seed: u64, rows: usize, cols: usize, fill: f64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(rows, cols).unwrap();
    for mv in board.legal_moves() {
        if rng.random_bool(fill) {
            board.apply_move(mv).unwrap();
        }
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn state_vector_roundtrip(seed in any::<u64>(), rows in 1..6usize, cols in 1..6usize, fill in 0.0..1.0f64) {
        let board = random_board(seed, rows, cols, fill);
        let vec = board.state_vector();
        prop_assert_eq!(vec.len(), (rows + 1) * cols + rows * (cols + 1));
        let restored = Board::from_state_vector(rows, cols, &vec).unwrap();
        prop_assert_eq!(restored.state_vector(), vec);
    }

    #[test]
    fn legal_moves_count_empty_edges(seed in any::<u64>(), rows in 1..6usize, cols in 1..6usize, fill in 0.0..1.0f64) {
        let board = random_board(seed, rows, cols, fill);
        let zeros = board.state_vector().iter().filter(|&&e| e == 0).count();
        prop_assert_eq!(board.legal_moves().len(), zeros);
        prop_assert_eq!(board.filled_count() + zeros, board.state_vector().len());
    }

    #[test]
    fn rejected_move_changes_nothing(seed in any::<u64>(), rows in 1..5usize, cols in 1..5usize) {
        let mut board = random_board(seed, rows, cols, 0.5);
        let before = board.clone();
        let drawn: Vec<_> = (0..board.state_vector().len())
            .filter_map(|i| board.move_at(i))
            .filter(|&mv| !board.is_legal(mv))
            .collect();
        for mv in drawn {
            prop_assert!(board.apply_move(mv).is_err());
        }
        prop_assert_eq!(board, before);
    }

    /// Every box completes exactly once over a full random game, and the
    /// scores always add up to the boxes owned.
    #[test]
    fn full_game_accounting(seed in any::<u64>(), rows in 1..5usize, cols in 1..5usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = GameSession::with_dimensions(rows, cols).unwrap();
        let mut completions = 0;
        while let Some(mv) = RandomPlayer.select_move(&mut rng, game.board()) {
            let mover = game.current_player();
            let before = game.score(mover);
            let completed = game.submit(mv).unwrap();
            completions += completed.len();
            prop_assert_eq!(game.score(mover), before + completed.len() as u32);
            if completed.is_empty() {
                prop_assert_eq!(game.current_player(), mover.other());
            } else {
                prop_assert_eq!(game.current_player(), mover);
            }
            let total: u32 = PlayerId::ALL.iter().map(|&p| game.score(p)).sum();
            prop_assert_eq!(total as usize, game.box_owners().len());
        }
        prop_assert!(game.is_game_over());
        prop_assert_eq!(completions, rows * cols);
    }
}
