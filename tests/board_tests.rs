use dots_and_boxes::{Board, BoardError, BoxCoord, GameSession, Move, PlayerId};

#[test]
fn test_fresh_board_sizes() {
    for (rows, cols) in [(1, 1), (2, 5), (4, 3), (7, 7)] {
        let board = Board::new(rows, cols).unwrap();
        assert_eq!(board.horizontal_edges().len(), (rows + 1) * cols);
        assert_eq!(board.vertical_edges().len(), rows * (cols + 1));
        assert!(board.state_vector().iter().all(|&e| e == 0));
    }
}

#[test]
fn test_legal_moves_initial() {
    let board = Board::new(1, 1).unwrap();
    // 1x1 box -> 2 horizontal + 2 vertical edges
    assert_eq!(board.legal_moves().len(), 4);
}

#[test]
fn test_single_box_completes_on_last_edge_in_any_order() {
    let edges = [
        Move::horizontal(0, 0),
        Move::horizontal(1, 0),
        Move::vertical(0, 0),
        Move::vertical(0, 1),
    ];
    for last in 0..edges.len() {
        let mut board = Board::new(1, 1).unwrap();
        let mut total = Vec::new();
        for (i, &mv) in edges.iter().enumerate() {
            if i != last {
                total.extend(board.apply_move(mv).unwrap());
            }
        }
        assert!(total.is_empty(), "box completed before its fourth edge");
        let completed = board.apply_move(edges[last]).unwrap();
        assert_eq!(completed, vec![BoxCoord::new(0, 0)]);
    }
}

#[test]
fn test_occupied_edge_rejected() {
    let mut board = Board::new(3, 3).unwrap();
    board.apply_move(Move::vertical(1, 2)).unwrap();
    let before = board.state_vector();
    assert_eq!(
        board.apply_move(Move::vertical(1, 2)).unwrap_err(),
        BoardError::IllegalMove(Move::vertical(1, 2))
    );
    assert_eq!(board.state_vector(), before);
}

#[test]
fn test_out_of_bounds_is_illegal_move_not_bounds_error() {
    let mut board = Board::new(2, 2).unwrap();
    let mv = Move::horizontal(0, 2);
    assert_eq!(board.get_edge(mv), Err(BoardError::OutOfBounds));
    assert!(!board.is_legal(mv));
    assert_eq!(board.apply_move(mv), Err(BoardError::IllegalMove(mv)));
}

#[test]
fn test_state_vector_roundtrip() {
    let mut board = Board::new(2, 2).unwrap();
    board.apply_move(Move::horizontal(0, 0)).unwrap();
    board.apply_move(Move::vertical(0, 0)).unwrap();

    let vec = board.state_vector();
    let board2 = Board::from_state_vector(2, 2, &vec).unwrap();
    assert_eq!(board2.rows(), 2);
    assert_eq!(board2.cols(), 2);
    assert_eq!(board2.state_vector(), vec);
    assert_eq!(board2, board);
}

#[test]
fn test_state_vector_wrong_length() {
    let err = Board::from_state_vector(3, 3, &[0; 23]).unwrap_err();
    assert_eq!(err, BoardError::InvalidVectorLength { expected: 24, actual: 23 });
}

#[test]
fn test_three_by_three_scenario() {
    let mut game = GameSession::new();

    // Player 1 draws the top edge of box (0,0) and completes nothing.
    assert!(game.submit(Move::horizontal(0, 0)).unwrap().is_empty());
    assert_eq!(game.current_player(), PlayerId::Two);

    // Fill the rest of box (0,0), alternating turns, leaving player 2 to close it.
    game.submit(Move::horizontal(1, 0)).unwrap(); // 2 -> 1
    game.submit(Move::vertical(0, 0)).unwrap(); // 1 -> 2
    assert_eq!(game.current_player(), PlayerId::Two);

    let completed = game.submit(Move::vertical(0, 1)).unwrap();
    assert_eq!(completed, vec![BoxCoord::new(0, 0)]);
    assert_eq!(game.score(PlayerId::Two), 1);
    assert_eq!(game.owner(BoxCoord::new(0, 0)), Some(PlayerId::Two));
    assert_eq!(game.current_player(), PlayerId::Two);
}

#[test]
fn test_game_over_after_fourth_edge() {
    let mut game = GameSession::with_dimensions(1, 1).unwrap();
    let moves = game.board().legal_moves();
    for &mv in &moves[..3] {
        game.submit(mv).unwrap();
    }
    assert!(!game.is_game_over());
    game.submit(moves[3]).unwrap();
    assert!(game.is_game_over());
    assert!(game.board().legal_moves().is_empty());
}
