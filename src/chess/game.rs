//! The [`Game`] owns the board, both capture tallies, the side to move and the
//! round counter. [`Game::make_move`] is the only way to change any of them.
//!
//! A move is applied in one step: legality check, capture accounting, board
//! update and turn change either all happen or none of them do.

use std::fmt;
use std::num::NonZeroU16;

use itertools::Itertools;

use crate::chess::bitboard::Bitboard;
use crate::chess::board::Board;
use crate::chess::core::{Cell, Move, Piece, PieceKind, Rank, Side, Square};
use crate::chess::error::MoveError;
use crate::chess::rules::{self, Context};
use crate::chess::score::CaptureTally;

/// Outcome of the game so far. It is derived from the capture tallies alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Neither side has captured all of the opponent's pieces of one kind.
    Unfinished,
    #[allow(missing_docs)]
    WhiteWon,
    #[allow(missing_docs)]
    BlackWon,
}

impl GameResult {
    /// The winning side, if there is one.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Unfinished => None,
            Self::WhiteWon => Some(Side::White),
            Self::BlackWon => Some(Side::Black),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unfinished => "UNFINISHED",
            Self::WhiteWon => "WHITE_WON",
            Self::BlackWon => "BLACK_WON",
        })
    }
}

/// What happened after a successful [`Game::make_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece that moved.
    pub piece: Piece,
    /// Kind of the opponent's piece taken on the destination square.
    pub captured: Option<PieceKind>,
    /// Result right after the move.
    pub result: GameResult,
}

/// State of a single game of the variant.
#[derive(Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    /// A round is one White move followed by one Black move.
    round: NonZeroU16,
    white_captures: CaptureTally,
    black_captures: CaptureTally,
    /// Squares with pawns that have not moved since the game started. Only
    /// those may advance two squares.
    unmoved_pawns: Bitboard,
}

impl Game {
    /// Starts a game from the standard opening position: White to move,
    /// round 1, nothing captured.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Side::White)
    }

    /// Starts a game from an arbitrary position with empty tallies. Pawns
    /// standing on their side's starting rank are treated as not moved yet.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let unmoved_pawns = [Side::White, Side::Black]
            .into_iter()
            .map(|side| {
                board.pieces_of(Piece::new(side, PieceKind::Pawn))
                    & Bitboard::rank_mask(Rank::pawns_starting(side))
            })
            .fold(Bitboard::empty(), |set, pawns| set | pawns);
        Self {
            board,
            side_to_move,
            round: NonZeroU16::MIN,
            white_captures: CaptureTally::new(),
            black_captures: CaptureTally::new(),
            unmoved_pawns,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Contents of the square.
    #[must_use]
    pub const fn at(&self, square: Square) -> Cell {
        self.board.at(square)
    }

    /// Side whose turn it is.
    #[must_use]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Current round, starting from 1.
    #[must_use]
    pub const fn round(&self) -> u16 {
        self.round.get()
    }

    /// Opponent's pieces captured by the side.
    #[must_use]
    pub const fn score(&self, side: Side) -> &CaptureTally {
        match side {
            Side::White => &self.white_captures,
            Side::Black => &self.black_captures,
        }
    }

    /// A side wins as soon as it has captured all of the opponent's pieces of
    /// any one kind. If both tallies somehow qualify, White is reported.
    #[must_use]
    pub fn result(&self) -> GameResult {
        if self.white_captures.annihilated().is_some() {
            return GameResult::WhiteWon;
        }
        if self.black_captures.annihilated().is_some() {
            return GameResult::BlackWon;
        }
        GameResult::Unfinished
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result() != GameResult::Unfinished
    }

    /// Checks whether the side to move may move the piece from `from` to
    /// `to`:
    ///
    /// - `from` holds a piece of the side to move,
    /// - `to` does not hold a piece of the same side,
    /// - the piece's movement rule accepts the move.
    ///
    /// Does not look at whether the game is over; [`Game::make_move`] does.
    #[must_use]
    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        self.moving_piece(from, to).is_some()
    }

    /// Returns the piece that would move if the move is legal.
    fn moving_piece(&self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.at(from).piece()?;
        if piece.owner != self.side_to_move || self.at(to).is_owned_by(self.side_to_move) {
            return None;
        }
        let context = Context {
            side: piece.owner,
            first_move: self.unmoved_pawns.contains(from),
        };
        rules::is_pseudo_legal(piece.kind, from, to, &self.board, context).then_some(piece)
    }

    /// Makes the move for the side to move, records a capture if the
    /// destination held an opponent's piece and passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if a side has already won.
    /// - [`MoveError::IllegalMove`] if [`Game::is_move_legal`] rejects the
    ///   move.
    ///
    /// The game is not modified in either case.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Some(winner) = self.result().winner() {
            return Err(MoveError::GameOver { winner });
        }
        let piece = self
            .moving_piece(from, to)
            .ok_or(MoveError::IllegalMove { from, to })?;
        let captured = self.board.at(to).piece().map(|captured| captured.kind);
        if let Some(kind) = captured {
            self.captures_mut(piece.owner).record(kind);
        }
        let moved = self.board.take(from);
        self.board.set(to, moved);
        self.unmoved_pawns -= Bitboard::from(from) | Bitboard::from(to);
        if self.side_to_move == Side::Black {
            self.round = self.round.saturating_add(1);
        }
        self.side_to_move = !self.side_to_move;
        Ok(MoveOutcome {
            piece,
            captured,
            result: self.result(),
        })
    }

    /// Same as [`Game::make_move`] for a parsed [`Move`].
    ///
    /// # Errors
    ///
    /// See [`Game::make_move`].
    pub fn apply(&mut self, next_move: Move) -> Result<MoveOutcome, MoveError> {
        self.make_move(next_move.from(), next_move.to())
    }

    fn captures_mut(&mut self, side: Side) -> &mut CaptureTally {
        match side {
            Side::White => &mut self.white_captures,
            Side::Black => &mut self.black_captures,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    /// Piece placement, side to move and round, FEN style:
    /// `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.board,
            self.side_to_move.symbol(),
            self.round
        )
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", &self.board)?;
        writeln!(f, "Side to move: {}", &self.side_to_move)?;
        writeln!(f, "Round: {}", &self.round)?;
        writeln!(f, "White captures: {}", &self.white_captures)?;
        writeln!(f, "Black captures: {}", &self.black_captures)?;
        writeln!(
            f,
            "Unmoved pawns: {}",
            self.unmoved_pawns.iter().map(|square| square.to_string()).join(" ")
        )?;
        writeln!(f, "Result: {}", self.result())?;
        Ok(())
    }
}
