//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::mem;
use std::ops::Not;

use anyhow::bail;
use itertools::Itertools;

use crate::chess::error::MoveError;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A request to move the piece standing on `from` to `to`. The variant has no
/// promotions, castling or en passant, so the pair of squares is all there is.
///
/// The textual form is the UCI one without promotion suffix, e.g. `e2e4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Parses a move in the `<from><to>` format (`e2e4`, `G1F3`).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] with the whole input if it is not
    /// four characters long, or with the offending half if it is not a square.
    pub fn from_uci(input: &str) -> Result<Self, MoveError> {
        let input = input.trim();
        if input.chars().count() != 4 {
            return Err(MoveError::OutOfBounds(input.to_string()));
        }
        match (input.get(..2), input.get(2..)) {
            (Some(from), Some(to)) => Ok(Self::new(from.try_into()?, to.try_into()?)),
            _ => Err(MoveError::OutOfBounds(input.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use chessvar::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use chessvar::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        unsafe { mem::transmute(file as u8 + (rank as u8) * BOARD_WIDTH) }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Grid coordinates of the square as `(row, column)`, both zero-based:
    /// `a1` is `(0, 0)`, `h8` is `(7, 7)`.
    ///
    /// ```
    /// use chessvar::chess::core::Square;
    ///
    /// assert_eq!(Square::E4.coordinates(), (3, 4));
    /// assert_eq!(Square::from_coordinates(3, 4).unwrap(), Square::E4);
    /// ```
    #[must_use]
    pub const fn coordinates(self) -> (u8, u8) {
        (self.rank() as u8, self.file() as u8)
    }

    /// Inverse of [`Square::coordinates`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside
    /// `0..BOARD_WIDTH`.
    pub fn from_coordinates(row: u8, column: u8) -> Result<Self, MoveError> {
        match (File::try_from(column), Rank::try_from(row)) {
            (Ok(file), Ok(rank)) => Ok(Self::new(file, rank)),
            _ => Err(MoveError::OutOfBounds(format!("({row}, {column})"))),
        }
    }

    /// Returns the neighbouring square in given direction or [`None`] if it
    /// would fall off the board.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (file_delta, rank_delta) = direction.delta();
        let file = u8::try_from(self.file() as i8 + file_delta).ok()?;
        let rank = u8::try_from(self.rank() as i8 + rank_delta).ok()?;
        Some(Self::new(File::try_from(file).ok()?, Rank::try_from(rank).ok()?))
    }
}

impl TryFrom<u8> for Square {
    type Error = MoveError;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> Result<Self, MoveError> {
        const MAX_INDEX: u8 = BOARD_SIZE - 1;
        match square_index {
            0..=MAX_INDEX => Ok(unsafe { mem::transmute::<u8, Self>(square_index) }),
            _ => Err(MoveError::OutOfBounds(format!(
                "square index should be in 0..{BOARD_SIZE}, got {square_index}"
            ))),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = MoveError;

    /// Parses algebraic notation, ignoring letter case: `"e4"` and `"E4"` are
    /// the same square.
    fn try_from(square: &str) -> Result<Self, MoveError> {
        let out_of_bounds = || MoveError::OutOfBounds(square.to_string());
        let (file, rank): (char, char) = square
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .collect_tuple()
            .ok_or_else(out_of_bounds)?;
        match (File::try_from(file), Rank::try_from(rank)) {
            (Ok(file), Ok(rank)) => Ok(Self::new(file, rank)),
            _ => Err(out_of_bounds()),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = MoveError;

    fn from_str(square: &str) -> Result<Self, MoveError> {
        Self::try_from(square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = MoveError;

    fn try_from(file: char) -> Result<Self, MoveError> {
        match file {
            'a'..='h' => Ok(unsafe { mem::transmute::<u8, Self>(file as u8 - b'a') }),
            _ => Err(MoveError::OutOfBounds(format!(
                "file should be within 'a'..='h', got '{file}'"
            ))),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = MoveError;

    fn try_from(column: u8) -> Result<Self, MoveError> {
        match column {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(column) }),
            _ => Err(MoveError::OutOfBounds(format!(
                "file should be within 0..{BOARD_WIDTH}, got {column}"
            ))),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// The rank where the side's rooks, knights, bishops, queen and king
    /// start.
    #[must_use]
    pub const fn backrank(side: Side) -> Self {
        match side {
            Side::White => Self::One,
            Side::Black => Self::Eight,
        }
    }

    /// The rank where the side's pawns start.
    #[must_use]
    pub const fn pawns_starting(side: Side) -> Self {
        match side {
            Side::White => Self::Two,
            Side::Black => Self::Seven,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = MoveError;

    fn try_from(rank: char) -> Result<Self, MoveError> {
        match rank {
            '1'..='8' => Ok(unsafe { mem::transmute::<u8, Self>(rank as u8 - b'1') }),
            _ => Err(MoveError::OutOfBounds(format!(
                "rank should be within '1'..='8', got '{rank}'"
            ))),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = MoveError;

    fn try_from(row: u8) -> Result<Self, MoveError> {
        match row {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(row) }),
            _ => Err(MoveError::OutOfBounds(format!(
                "rank should be within 0..{BOARD_WIDTH}, got {row}"
            ))),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// One of eight directions a piece can travel in, as seen from White's side
/// of the board ("up" is towards the eighth rank).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// `(file, rank)` step of a single move in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::UpLeft => (-1, 1),
            Self::UpRight => (1, 1),
            Self::DownLeft => (-1, -1),
            Self::DownRight => (1, -1),
        }
    }

    /// Returns the direction leading from one square to the other if they
    /// share a rank, a file or a diagonal. Identical squares are not aligned.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Option<Self> {
        let file_delta = to.file() as i8 - from.file() as i8;
        let rank_delta = to.rank() as i8 - from.rank() as i8;
        if file_delta != 0 && rank_delta != 0 && file_delta.abs() != rank_delta.abs() {
            return None;
        }
        match (file_delta.signum(), rank_delta.signum()) {
            (0, 1) => Some(Self::Up),
            (0, -1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            (-1, 1) => Some(Self::UpLeft),
            (1, 1) => Some(Self::UpRight),
            (-1, -1) => Some(Self::DownLeft),
            (1, -1) => Some(Self::DownRight),
            _ => None,
        }
    }

    /// Rook-like directions: along a rank or a file.
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    /// Bishop-like directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        !self.is_orthogonal()
    }
}

/// The game is played between two sides: White (having the advantage of the
/// first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Direction in which the side's pawns advance.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    /// Single-letter FEN notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<&str> for Side {
    type Error = anyhow::Error;

    fn try_from(side: &str) -> anyhow::Result<Self> {
        match side.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Self::White),
            "b" | "black" => Ok(Self::Black),
            _ => bail!("side should be 'white' or 'black', got '{side}'"),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}

/// Standard [chess pieces].
///
/// The order is the one in which capture tallies are reported.
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// How many pieces of this kind each side has in the starting position.
    /// Capturing that many of the opponent's pieces of one kind wins the game.
    #[must_use]
    pub const fn starting_count(self) -> u8 {
        match self {
            Self::Pawn => 8,
            Self::Rook | Self::Knight | Self::Bishop => 2,
            Self::Queen | Self::King => 1,
        }
    }

    /// Lowercase FEN letter.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Rook => 'r',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            'p' => Ok(Self::Pawn),
            'r' => Ok(Self::Rook),
            'n' => Ok(Self::Knight),
            'b' => Ok(Self::Bishop),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            _ => bail!("piece kind should be within \"prnbqk\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        })
    }
}

/// Represents a specific piece owned by a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Side,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Side, kind: PieceKind) -> Self {
        Self { owner, kind }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses FEN piece symbol: uppercase for White, lowercase for Black.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let owner = if symbol.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        match PieceKind::try_from(symbol.to_ascii_lowercase()) {
            Ok(kind) => Ok(Self { owner, kind }),
            Err(_) => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.symbol();
        f.write_char(match self.owner {
            // White player: uppercase symbols.
            Side::White => symbol.to_ascii_uppercase(),
            // Black player: lowercase symbols.
            Side::Black => symbol,
        })
    }
}

/// Contents of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[allow(missing_docs)]
    #[default]
    Empty,
    #[allow(missing_docs)]
    Occupied(Piece),
}

impl Cell {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Self::Empty => None,
            Self::Occupied(piece) => Some(piece),
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if a piece of given side stands here.
    #[must_use]
    pub fn is_owned_by(self, side: Side) -> bool {
        matches!(self, Self::Occupied(piece) if piece.owner == side)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Self::Occupied(piece)
    }
}

impl fmt::Display for Cell {
    /// Human-readable contents: `empty` or `<side> <kind>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::Occupied(piece) => write!(f, "{} {}", piece.owner, piece.kind),
        }
    }
}
