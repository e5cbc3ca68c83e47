//! Movement rules of each piece kind. Every evaluator answers a single
//! question: does moving from one square to the other match the piece's
//! movement pattern on this board? Whose turn it is and whether the
//! destination holds a friendly piece is checked by the caller
//! ([`crate::chess::game::Game::is_move_legal`]).
//!
//! Evaluators never mutate anything and share the same signature
//! ([`Evaluator`]), so [`evaluator`] can pick one by [`PieceKind`].

use crate::chess::bitboard::Bitboard;
use crate::chess::board::Board;
use crate::chess::core::{Direction, PieceKind, Side, Square};

/// Extra information some evaluators need besides the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context {
    /// Owner of the moving piece. Decides which way pawns go.
    pub side: Side,
    /// True if the moving piece has never moved before. Only pawns care.
    pub first_move: bool,
}

/// Common shape of all movement rules.
pub type Evaluator = fn(Square, Square, &Board, Context) -> bool;

/// Picks the movement rule for the piece kind.
#[must_use]
pub fn evaluator(kind: PieceKind) -> Evaluator {
    match kind {
        PieceKind::Pawn => pawn,
        PieceKind::Rook => rook,
        PieceKind::Knight => knight,
        PieceKind::Bishop => bishop,
        PieceKind::Queen => queen,
        PieceKind::King => king,
    }
}

/// Checks the move against the movement rule of the piece kind.
#[must_use]
pub fn is_pseudo_legal(
    kind: PieceKind,
    from: Square,
    to: Square,
    board: &Board,
    context: Context,
) -> bool {
    evaluator(kind)(from, to, board, context)
}

/// Squares strictly between `from` and `to` if they share a rank, a file or a
/// diagonal. Neighbouring squares have an empty ray.
#[must_use]
pub fn ray(from: Square, to: Square) -> Option<Bitboard> {
    let direction = Direction::between(from, to)?;
    let mut result = Bitboard::empty();
    let mut current = from.shift(direction)?;
    while current != to {
        result |= Bitboard::from(current);
        current = current.shift(direction)?;
    }
    Some(result)
}

/// `(file, rank)` distance from `from` to `to`.
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file() as i8 - from.file() as i8,
        to.rank() as i8 - from.rank() as i8,
    )
}

/// Slides along the direction without jumping over anything.
fn slides(from: Square, to: Square, board: &Board, allowed: fn(Direction) -> bool) -> bool {
    match (Direction::between(from, to), ray(from, to)) {
        (Some(direction), Some(between)) => {
            allowed(direction) && (between & board.occupancy()).is_empty()
        },
        _ => false,
    }
}

/// Pawns push one square forward onto an empty square, or two on their first
/// move if both squares are empty. They capture one square diagonally forward
/// and only when an opponent's piece stands there. Straight captures,
/// diagonal non-captures, sideways and backward moves are all illegal.
#[must_use]
pub fn pawn(from: Square, to: Square, board: &Board, context: Context) -> bool {
    let forward = context.side.push_direction().delta().1;
    let target = board.at(to);
    match deltas(from, to) {
        (0, rank_delta) if rank_delta == forward => target.is_empty(),
        (0, rank_delta) if rank_delta == 2 * forward && context.first_move => {
            target.is_empty()
                && from
                    .shift(context.side.push_direction())
                    .is_some_and(|skipped| board.at(skipped).is_empty())
        },
        (-1 | 1, rank_delta) if rank_delta == forward => {
            target.is_owned_by(context.side.opponent())
        },
        _ => false,
    }
}

/// Rooks slide any distance along a rank or a file.
#[must_use]
pub fn rook(from: Square, to: Square, board: &Board, _: Context) -> bool {
    slides(from, to, board, Direction::is_orthogonal)
}

/// Knights jump in an L shape over anything in the way.
#[must_use]
pub fn knight(from: Square, to: Square, _: &Board, _: Context) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);
    matches!((file_delta.abs(), rank_delta.abs()), (1, 2) | (2, 1))
}

/// Bishops slide any distance along a diagonal.
#[must_use]
pub fn bishop(from: Square, to: Square, board: &Board, _: Context) -> bool {
    slides(from, to, board, Direction::is_diagonal)
}

/// Queens move like either a rook or a bishop.
#[must_use]
pub fn queen(from: Square, to: Square, board: &Board, context: Context) -> bool {
    rook(from, to, board, context) || bishop(from, to, board, context)
}

/// Kings step onto any neighbouring square.
#[must_use]
pub fn king(from: Square, to: Square, _: &Board, _: Context) -> bool {
    let (file_delta, rank_delta) = deltas(from, to);
    file_delta.abs().max(rank_delta.abs()) == 1
}
