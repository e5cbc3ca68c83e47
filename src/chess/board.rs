//! Square-centric representation of the board: one [`Cell`] per square. The
//! rule evaluators mostly ask "what stands on this square", which this layout
//! answers in constant time; set-like queries go through [`Bitboard`].

use std::fmt::{self, Write};

use anyhow::bail;
use strum::IntoEnumIterator;

use crate::chess::bitboard::Bitboard;
use crate::chess::core::{
    Cell,
    File,
    Piece,
    PieceKind,
    Rank,
    Side,
    Square,
    BOARD_SIZE,
    BOARD_WIDTH,
};

/// Order of the pieces on both back ranks, from the a-file to the h-file.
const BACK_RANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of [`Cell`]s indexed by [`Square`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE as usize],
}

impl Board {
    /// Board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE as usize],
        }
    }

    /// The standard opening setup: pawns on the second and seventh ranks,
    /// rook, knight, bishop, queen, king, bishop, knight, rook behind them.
    ///
    /// ```
    /// use chessvar::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for side in [Side::White, Side::Black] {
            for (file, kind) in File::iter().zip(BACK_RANK) {
                board.set(
                    Square::new(file, Rank::backrank(side)),
                    Piece::new(side, kind).into(),
                );
                board.set(
                    Square::new(file, Rank::pawns_starting(side)),
                    Piece::new(side, PieceKind::Pawn).into(),
                );
            }
        }
        board
    }

    /// Parses the piece placement field of [Forsyth-Edwards Notation]: ranks
    /// from eighth to first separated by `/`, digits for runs of empty
    /// squares.
    ///
    /// # Errors
    ///
    /// Returns an error if the placement does not describe exactly 8 ranks
    /// of exactly 8 squares or contains unknown piece symbols.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_placement(input: &str) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        let mut ranks = Rank::iter().rev();
        for rank_fen in input.trim().split('/') {
            let Some(rank) = ranks.next() else {
                bail!("incorrect placement: expected 8 ranks, got {input}");
            };
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                if file >= BOARD_WIDTH {
                    bail!("incorrect placement: rank {rank_fen} exceeds {BOARD_WIDTH} squares");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        file += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let piece = Piece::try_from(symbol)?;
                board.set(Square::new(File::try_from(file)?, rank), piece.into());
                file += 1;
            }
            if file != BOARD_WIDTH {
                bail!(
                    "incorrect placement: rank size should be exactly {BOARD_WIDTH}, got \
                     {rank_fen} of length {file}"
                );
            }
        }
        if ranks.next().is_some() {
            bail!("incorrect placement: there should be 8 ranks, got {input}");
        }
        Ok(board)
    }

    /// Contents of the square.
    #[must_use]
    pub const fn at(&self, square: Square) -> Cell {
        self.cells[square as usize]
    }

    /// Overwrites the square.
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square as usize] = cell;
    }

    /// Empties the square and returns what was standing there.
    pub fn take(&mut self, square: Square) -> Cell {
        std::mem::take(&mut self.cells[square as usize])
    }

    /// Squares with a piece on them.
    #[must_use]
    pub fn occupancy(&self) -> Bitboard {
        self.squares_where(|cell| !cell.is_empty())
    }

    /// Squares occupied by the side's pieces.
    #[must_use]
    pub fn pieces(&self, side: Side) -> Bitboard {
        self.squares_where(|cell| cell.is_owned_by(side))
    }

    /// Squares occupied by this exact piece.
    #[must_use]
    pub fn pieces_of(&self, piece: Piece) -> Bitboard {
        self.squares_where(|cell| cell == Cell::Occupied(piece))
    }

    fn squares_where(&self, predicate: impl Fn(Cell) -> bool) -> Bitboard {
        Square::iter()
            .filter(|&square| predicate(self.at(square)))
            .fold(Bitboard::empty(), |set, square| set | Bitboard::from(square))
    }
}

impl fmt::Display for Board {
    /// Prints the board in FEN piece placement format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut empty_squares = 0;
            for file in File::iter() {
                if let Some(piece) = self.at(Square::new(file, rank)).piece() {
                    if empty_squares != 0 {
                        write!(f, "{empty_squares}")?;
                        empty_squares = 0;
                    }
                    write!(f, "{piece}")?;
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if rank != Rank::One {
                f.write_char(RANK_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece), eighth rank on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.at(Square::new(file, rank)).piece() {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if file != File::H {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if rank != Rank::One {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

const RANK_SEPARATOR: char = '/';
const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
