//! Capture bookkeeping. The variant is decided by material of a single kind:
//! whoever takes all of the opponent's pieces of any one kind first wins.

use std::fmt;

use strum::IntoEnumIterator;

use crate::chess::core::PieceKind;

/// Number of the opponent's pieces of each kind captured by one side. Only
/// ever grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CaptureTally {
    captured: [u8; 6],
}

impl CaptureTally {
    /// Tally with nothing captured yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { captured: [0; 6] }
    }

    /// How many pieces of this kind were captured.
    #[must_use]
    pub const fn get(&self, kind: PieceKind) -> u8 {
        self.captured[kind as usize]
    }

    /// Counts one more captured piece of this kind.
    pub fn record(&mut self, kind: PieceKind) {
        self.captured[kind as usize] = self.captured[kind as usize].saturating_add(1);
    }

    /// `(kind, count)` pairs for all piece kinds.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        PieceKind::iter().map(move |kind| (kind, self.get(kind)))
    }

    /// The first piece kind (in [`PieceKind`] order) the opponent has no
    /// pieces left of, if any.
    #[must_use]
    pub fn annihilated(&self) -> Option<PieceKind> {
        self.iter()
            .find(|&(kind, count)| count >= kind.starting_count())
            .map(|(kind, _)| kind)
    }

    /// Total number of captured pieces.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.captured.iter().copied().map(u32::from).sum()
    }
}

impl fmt::Display for CaptureTally {
    /// `pawn 0 rook 1 knight 0 bishop 0 queen 0 king 0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (kind, count)) in self.iter().enumerate() {
            if index != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{kind} {count}")?;
        }
        Ok(())
    }
}
