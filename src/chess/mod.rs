//! Rules of the annihilation chess variant: the board, piece movement, capture
//! bookkeeping and the game state machine.

pub mod bitboard;
pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod score;
