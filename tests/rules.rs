//! Movement geometry is compared against the attack tables of a well-tested
//! chess library. The evaluators do not check who owns the destination, so
//! "the piece can go there" is exactly "the piece attacks that square".

use chessvar::chess::board::Board;
use chessvar::chess::core::{Cell, Piece, PieceKind, Side, Square};
use chessvar::chess::rules::{self, Context};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

fn to_shakmaty(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(square as u8))
}

fn reference_attacks(
    kind: PieceKind,
    side: Side,
    from: Square,
    board: &Board,
) -> shakmaty::Bitboard {
    let from = to_shakmaty(from);
    let occupied = shakmaty::Bitboard(board.occupancy().bits());
    match kind {
        PieceKind::Pawn => shakmaty::attacks::pawn_attacks(
            match side {
                Side::White => shakmaty::Color::White,
                Side::Black => shakmaty::Color::Black,
            },
            from,
        ),
        PieceKind::Rook => shakmaty::attacks::rook_attacks(from, occupied),
        PieceKind::Knight => shakmaty::attacks::knight_attacks(from),
        PieceKind::Bishop => shakmaty::attacks::bishop_attacks(from, occupied),
        PieceKind::Queen => shakmaty::attacks::queen_attacks(from, occupied),
        PieceKind::King => shakmaty::attacks::king_attacks(from),
    }
}

fn compare(kind: PieceKind, side: Side, from: Square, board: &Board) {
    let context = Context {
        side,
        first_move: false,
    };
    let expected = reference_attacks(kind, side, from, board);
    let evaluator = rules::evaluator(kind);
    for to in Square::iter() {
        assert_eq!(
            evaluator(from, to, board, context),
            expected.contains(to_shakmaty(to)),
            "{side} {kind} {from}{to}\n{board:?}"
        );
    }
}

#[test]
fn pieces_on_empty_board() {
    for kind in PieceKind::iter().filter(|&kind| kind != PieceKind::Pawn) {
        for from in Square::iter() {
            let mut board = Board::empty();
            board.set(from, Piece::new(Side::White, kind).into());
            compare(kind, Side::White, from, &board);
        }
    }
}

#[test]
fn sliders_are_blocked() {
    for placement in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "2r3r1/p3k3/1p3pp1/1B5p/5P2/2P1p1P1/PP4KP/3R4",
        "r3k3/5p2/2p5/p7/P3r3/2N2n2/1PP2P2/2K2B2",
        "r1b1qrk1/ppp2pbp/n2p1np1/4p1B1/2PPP3/2NB1N1P/PP3PP1/R2QK2R",
        "rnbq1rk1/pp4pp/1b1ppn2/2p2p2/2PP4/1P2PN2/PB2BPPP/RN1Q1RK1",
    ] {
        let board = Board::from_placement(placement)
            .unwrap_or_else(|e| panic!("invalid placement {placement}: {e}"));
        for from in Square::iter() {
            if let Cell::Occupied(piece) = board.at(from) {
                if piece.kind != PieceKind::Pawn {
                    compare(piece.kind, piece.owner, from, &board);
                }
            }
        }
    }
}

#[test]
fn pawn_captures() {
    // Surrounded by the opponent's pieces a pawn can not push and may capture
    // on both forward diagonals.
    for side in [Side::White, Side::Black] {
        for from in Square::iter() {
            let mut board = Board::empty();
            for square in Square::iter() {
                board.set(square, Piece::new(side.opponent(), PieceKind::Knight).into());
            }
            board.set(from, Piece::new(side, PieceKind::Pawn).into());
            compare(PieceKind::Pawn, side, from, &board);
        }
    }
}
