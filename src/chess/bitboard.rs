//! [`Bitboard`] is a set of squares packed into a single 64-bit integer. The
//! square-centric [`crate::chess::board::Board`] answers "what stands here"
//! questions; bitboards answer "where are all the X" questions: occupancy,
//! material counts and the set of pawns that have not moved yet.
//!
//! [Bitboard]: https://www.chessprogramming.org/Bitboards

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub, SubAssign};

use itertools::Itertools;

use crate::chess::core::{Rank, Square, BOARD_SIZE, BOARD_WIDTH};

/// Represents a set of squares and provides common operations (e.g. AND, OR,
/// difference) over these sets. Each bit corresponds to one of 64 squares of
/// the chess board.
///
/// Mirroring [`Square`] semantics, the least significant bit corresponds to
/// A1, and the most significant bit - to H8.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Constructs Bitboard from pre-calculated bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Constructs a bitboard representing empty set of squares.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Returns raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn from_squares(squares: &[Square]) -> Self {
        let mut result = Self::empty();
        for square in squares {
            result |= Self::from(*square);
        }
        result
    }

    /// All squares of the given rank.
    #[must_use]
    pub const fn rank_mask(rank: Rank) -> Self {
        Self::from_bits(0xFF_u64 << (rank as u8 * BOARD_WIDTH))
    }

    /// Returns true if this bitboard contains given square.
    #[must_use]
    pub const fn contains(self, square: Square) -> bool {
        (self.bits & (1u64 << square as u8)) != 0
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of squares in the set.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterates over the set squares from A1 to H8.
    #[must_use]
    pub const fn iter(self) -> BitboardIterator {
        BitboardIterator { bits: self.bits }
    }
}

impl fmt::Debug for Bitboard {
    /// Dumps the set as an 8x8 grid, eighth rank first: `1` for squares in the
    /// set and `.` for the rest.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format!("{:#066b}", self.bits)
                .chars()
                .rev()
                .take(BOARD_SIZE as usize)
                .chunks(BOARD_WIDTH as usize)
                .into_iter()
                .map(|chunk| chunk.map(|ch| if ch == '1' { '1' } else { '.' }).join(" "))
                .collect::<Vec<String>>()
                .iter()
                .rev()
                .join("\n")
        )
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl Not for Bitboard {
    type Output = Self;

    /// Complement set: every square not in `self`.
    fn not(self) -> Self::Output {
        Self::from_bits(!self.bits)
    }
}

impl Sub for Bitboard {
    type Output = Self;

    /// [Relative component], i.e. Result = LHS \ RHS.
    ///
    /// [Relative component]: https://en.wikipedia.org/wiki/Complement_%28set_theory%29#Relative_complement
    fn sub(self, rhs: Self) -> Self::Output {
        self & !rhs
    }
}

impl SubAssign for Bitboard {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Self {
        Self::from_bits(1u64 << square as u8)
    }
}

/// Iterates over set squares in a given [Bitboard] from least significant 1
/// bits (LS1B) to most significant 1 bits (MS1B).
#[derive(Debug)]
pub struct BitboardIterator {
    bits: u64,
}

impl Iterator for BitboardIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        // Get the LS1B and consume it from the iterator.
        let next_index = self.bits.trailing_zeros();
        self.bits ^= 1 << next_index;
        u8::try_from(next_index)
            .ok()
            .and_then(|index| Square::try_from(index).ok())
    }
}
