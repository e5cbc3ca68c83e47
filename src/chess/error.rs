//! Failures reported by [`crate::chess::game::Game`] and square parsing.

use thiserror::Error;

use crate::chess::core::{Side, Square};

/// Reasons a query or a move can be rejected. A rejected move leaves the game
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The input does not name one of the 64 squares.
    #[error("square is out of bounds: {0}")]
    OutOfBounds(String),
    /// The move breaks the movement rules or the turn order.
    #[error("illegal move: {from}{to}")]
    IllegalMove {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
    },
    /// A side has already won.
    #[error("game is over: {winner} won")]
    GameOver {
        #[allow(missing_docs)]
        winner: Side,
    },
}
