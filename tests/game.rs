use chessvar::chess::board::Board;
use chessvar::chess::core::{Cell, Move, Piece, PieceKind, Side, Square};
use chessvar::chess::error::MoveError;
use chessvar::chess::game::{Game, GameResult, MoveOutcome};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

fn setup(placement: &str, side_to_move: Side) -> Game {
    Game::from_board(
        Board::from_placement(placement)
            .unwrap_or_else(|e| panic!("invalid placement {placement}: {e}")),
        side_to_move,
    )
}

/// Plays the moves and checks that every one of them succeeds.
fn play(game: &mut Game, moves: &[&str]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .map(|next_move| {
            let next_move = Move::from_uci(next_move)
                .unwrap_or_else(|e| panic!("invalid move {next_move}: {e}"));
            match game.apply(next_move) {
                Ok(outcome) => outcome,
                Err(e) => panic!("{next_move} failed: {e}\n{game:?}"),
            }
        })
        .collect()
}

/// Every piece missing from the board has been captured by the opponent.
fn check_material(game: &Game) {
    for side in [Side::White, Side::Black] {
        let on_board = game.board().pieces(side).count();
        let captured = game.score(side.opponent()).total();
        assert_eq!(on_board + captured, 16, "{game:?}");
        for kind in PieceKind::iter() {
            assert_eq!(
                game.board().pieces_of(Piece::new(side, kind)).count()
                    + u32::from(game.score(side.opponent()).get(kind)),
                u32::from(kind.starting_count()),
                "{game:?}"
            );
        }
    }
}

#[test]
fn new_game() {
    let game = Game::new();
    assert_eq!(game, Game::default());
    assert_eq!(game.board(), &Board::starting());
    assert_eq!(game.side_to_move(), Side::White);
    assert_eq!(game.round(), 1);
    assert_eq!(game.result(), GameResult::Unfinished);
    assert!(!game.is_over());
    for side in [Side::White, Side::Black] {
        for kind in PieceKind::iter() {
            assert_eq!(game.score(side).get(kind), 0);
        }
    }
    check_material(&game);
}

#[test]
fn pawn_push_changes_turn() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &["e2e4"]);
    assert_eq!(
        outcomes,
        vec![MoveOutcome {
            piece: Piece::new(Side::White, PieceKind::Pawn),
            captured: None,
            result: GameResult::Unfinished,
        }]
    );
    assert_eq!(
        game.at(Square::E4),
        Cell::Occupied(Piece::new(Side::White, PieceKind::Pawn))
    );
    assert_eq!(game.at(Square::E2), Cell::Empty);
    assert_eq!(game.side_to_move(), Side::Black);
}

#[test]
fn bishop_takes_freed_diagonal() {
    let mut game = Game::new();
    drop(play(&mut game, &["d2d4", "b7b5"]));
    let outcome = game
        .make_move(Square::C1, Square::F4)
        .expect("diagonal is free after d2d4");
    assert_eq!(outcome.captured, None);
    assert_eq!(outcome.piece, Piece::new(Side::White, PieceKind::Bishop));
    assert_eq!(game.score(Side::White).total(), 0);
    assert_eq!(game.side_to_move(), Side::Black);
}

#[test]
fn both_bishops_captured() {
    let mut game = Game::new();
    let outcomes = play(
        &mut game,
        &[
            "e2e4", "e7e6", "d2d4", "f8b4", "c2c3", "b7b6", "c3b4", "c8a6", "f1a6",
        ],
    );
    assert_eq!(outcomes[6].captured, Some(PieceKind::Bishop));
    assert_eq!(outcomes[6].result, GameResult::Unfinished);
    assert_eq!(outcomes[8].captured, Some(PieceKind::Bishop));
    assert_eq!(outcomes[8].result, GameResult::WhiteWon);
    assert_eq!(game.result(), GameResult::WhiteWon);
    assert_eq!(game.score(Side::White).get(PieceKind::Bishop), 2);
    assert_eq!(game.score(Side::White).annihilated(), Some(PieceKind::Bishop));
    check_material(&game);

    let before = game.clone();
    assert_eq!(
        game.make_move(Square::A7, Square::A5),
        Err(MoveError::GameOver {
            winner: Side::White
        })
    );
    // Moves which would be illegal anyway are refused because the game is
    // over, too.
    assert_eq!(
        game.make_move(Square::E4, Square::E8),
        Err(MoveError::GameOver {
            winner: Side::White
        })
    );
    assert_eq!(game, before);
}

#[test]
fn pawns_do_not_move_diagonally_onto_empty_squares() {
    let mut game = Game::new();
    assert!(!game.is_move_legal(Square::E2, Square::D3));
    assert!(!game.is_move_legal(Square::E2, Square::F3));
    drop(play(&mut game, &["e2e4", "d7d5"]));
    assert!(!game.is_move_legal(Square::E4, Square::F5));
    assert!(game.is_move_legal(Square::E4, Square::D5));
    // No en passant either.
    drop(play(&mut game, &["e4e5", "f7f5"]));
    assert!(!game.is_move_legal(Square::E5, Square::F6));
}

#[test]
fn rook_does_not_jump() {
    let game = Game::new();
    assert!(!game.is_move_legal(Square::A1, Square::A3));
    // Opponent's piece behind a blocker is not reachable either.
    let game = setup("4k3/8/8/8/8/p7/P7/R3K3", Side::White);
    assert!(!game.is_move_legal(Square::A1, Square::A3));
    let game = setup("4k3/8/8/8/8/p7/8/R3K3", Side::White);
    assert!(game.is_move_legal(Square::A1, Square::A3));
    assert!(!game.is_move_legal(Square::A1, Square::A4));
}

#[test]
fn queries_do_not_change_the_game() {
    let mut game = Game::new();
    drop(play(&mut game, &["g1f3", "b8c6"]));
    let before = game.clone();
    assert_eq!(game.at(Square::F3), game.at(Square::F3));
    assert_eq!(game.result(), game.result());
    assert!(game.is_move_legal(Square::F3, Square::E5));
    assert!(game.is_move_legal(Square::F3, Square::E5));
    assert_eq!(game, before);
}

#[test]
fn rejected_moves_change_nothing() {
    let mut game = Game::new();
    drop(play(&mut game, &["e2e4"]));
    let before = game.clone();
    for (from, to) in [
        // White piece on Black's turn.
        (Square::D2, Square::D4),
        // Empty origin.
        (Square::E5, Square::E4),
        // Own piece on the destination.
        (Square::D8, Square::D7),
        // Not a knight move.
        (Square::G8, Square::G6),
        (Square::A8, Square::A8),
    ] {
        assert_eq!(
            game.make_move(from, to),
            Err(MoveError::IllegalMove { from, to })
        );
        assert_eq!(game, before);
    }
    // Pawns can not capture straight ahead.
    drop(play(&mut game, &["e7e5"]));
    let before = game.clone();
    assert_eq!(
        game.make_move(Square::E4, Square::E5),
        Err(MoveError::IllegalMove {
            from: Square::E4,
            to: Square::E5
        })
    );
    assert_eq!(game, before);
}

#[test]
fn rounds() {
    let mut game = Game::new();
    let moves = ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"];
    for (index, next_move) in moves.iter().enumerate() {
        assert_eq!(usize::from(game.round()), index / 2 + 1);
        let expected_side = if index % 2 == 0 {
            Side::White
        } else {
            Side::Black
        };
        assert_eq!(game.side_to_move(), expected_side);
        drop(play(&mut game, &[*next_move]));
    }
    assert_eq!(game.round(), 4);
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn double_push_is_tracked_per_pawn() {
    let mut game = Game::new();
    drop(play(&mut game, &["a2a3", "a7a6", "b2b3", "b7b6"]));
    assert_eq!(game.round(), 3);
    // Pawns which have not moved yet may still advance two squares.
    assert!(game.is_move_legal(Square::H2, Square::H4));
    assert!(!game.is_move_legal(Square::A3, Square::A5));
    drop(play(&mut game, &["h2h4", "h7h5"]));
    assert!(!game.is_move_legal(Square::H4, Square::H6));
    // A pawn which only moved once has still moved.
    drop(play(&mut game, &["c2c3", "c7c6"]));
    assert!(!game.is_move_legal(Square::C3, Square::C5));
    assert!(game.is_move_legal(Square::C3, Square::C4));
}

#[test]
fn capture_accounting() {
    let mut game = Game::new();
    let outcomes = play(
        &mut game,
        &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a2", "a1a2"],
    );
    let captures = outcomes
        .iter()
        .filter_map(|outcome| outcome.captured)
        .collect::<Vec<_>>();
    assert_eq!(
        captures,
        vec![
            PieceKind::Pawn,
            PieceKind::Pawn,
            PieceKind::Pawn,
            PieceKind::Queen,
        ]
    );
    assert_eq!(outcomes[5].result, GameResult::Unfinished);
    assert_eq!(outcomes[6].piece, Piece::new(Side::White, PieceKind::Rook));
    assert_eq!(outcomes[6].result, GameResult::WhiteWon);
    assert_eq!(
        game.score(Side::White).to_string(),
        "pawn 1 rook 0 knight 0 bishop 0 queen 1 king 0"
    );
    assert_eq!(
        game.score(Side::Black).to_string(),
        "pawn 2 rook 0 knight 0 bishop 0 queen 0 king 0"
    );
    check_material(&game);
}

#[test]
fn queen_capture_ends_the_game() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &["e2e4", "e7e5", "d1h5", "g7g6", "a2a3", "g6h5"]);
    let last = outcomes.last().expect("six moves were played");
    assert_eq!(last.captured, Some(PieceKind::Queen));
    assert_eq!(last.result, GameResult::BlackWon);
    assert_eq!(game.result(), GameResult::BlackWon);
    assert_eq!(game.score(Side::Black).get(PieceKind::Queen), 1);
    check_material(&game);
    assert_eq!(
        game.make_move(Square::A3, Square::A4),
        Err(MoveError::GameOver {
            winner: Side::Black
        })
    );
}

#[test]
fn kings_can_be_captured() {
    let mut game = setup("8/8/8/8/3k4/4K3/8/8", Side::White);
    assert!(game.is_move_legal(Square::E3, Square::D4));
    let outcome = game.make_move(Square::E3, Square::D4).expect("king takes king");
    assert_eq!(outcome.captured, Some(PieceKind::King));
    assert_eq!(outcome.result, GameResult::WhiteWon);
}

#[test]
fn both_rooks_captured() {
    let mut game = setup("r3k2r/8/8/8/8/8/8/Q3K3", Side::White);
    let outcomes = play(&mut game, &["a1a8", "e8f7", "a8h8"]);
    assert_eq!(outcomes[0].captured, Some(PieceKind::Rook));
    assert_eq!(outcomes[0].result, GameResult::Unfinished);
    assert_eq!(outcomes[2].captured, Some(PieceKind::Rook));
    assert_eq!(outcomes[2].result, GameResult::WhiteWon);
}

#[test]
fn illegal_move_error_message() {
    let mut game = Game::new();
    let error = game
        .apply(Move::from_uci("e2e5").expect("valid squares"))
        .expect_err("pawns can not advance three squares");
    assert_eq!(error.to_string(), "illegal move: e2e5");
    assert_eq!(
        Move::from_uci("e2e9").expect_err("rank 9 does not exist"),
        MoveError::OutOfBounds("e9".to_string())
    );
    assert_eq!(
        Square::try_from("j1").expect_err("file j does not exist").to_string(),
        "square is out of bounds: j1"
    );
}

#[test]
fn long_game_keeps_material_consistent() {
    let mut game = Game::new();
    let moves = [
        "e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4", "g8f6", "b1c3", "a7a6", "c1e3",
        "e7e5", "d4b3", "c8e6", "f2f3", "f8e7", "d1d2", "b8d7", "g2g4", "b7b5", "g4g5", "b5b4",
        "c3e2", "f6h5",
    ];
    for next_move in moves {
        drop(play(&mut game, &[next_move]));
        check_material(&game);
        assert_eq!(game.result(), GameResult::Unfinished);
    }
    assert_eq!(game.score(Side::White).get(PieceKind::Pawn), 1);
    assert_eq!(game.score(Side::Black).get(PieceKind::Pawn), 1);
    assert_eq!(game.round(), 13);
}
