//! Rules engine for an annihilation chess variant: standard piece movement
//! without castling, en passant or promotion, and a side wins by capturing all
//! of the opponent's pieces of any one kind.
//!
//! [`chess::game::Game`] holds the whole state of a game and is the only way
//! to change it. [`Engine`] drives a game through a line-oriented text
//! protocol.
//!
//! ```
//! use chessvar::chess::core::{PieceKind, Square};
//! use chessvar::chess::game::{Game, GameResult};
//!
//! let mut game = Game::new();
//! for (from, to) in [
//!     (Square::E2, Square::E4),
//!     (Square::E7, Square::E5),
//!     (Square::D1, Square::H5),
//!     (Square::G7, Square::G6),
//!     (Square::A2, Square::A3),
//! ] {
//!     assert!(game.make_move(from, to).is_ok());
//! }
//! let outcome = game.make_move(Square::G6, Square::H5).unwrap();
//! assert_eq!(outcome.captured, Some(PieceKind::Queen));
//! assert_eq!(game.result(), GameResult::BlackWon);
//! ```

pub mod chess;

mod engine;
pub use engine::Engine;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the engine version and its authors on startup.
pub fn print_engine_info() {
    println!("Chessvar rules engine {}", engine_version());
    println!("{}", env!("CARGO_PKG_AUTHORS"));
}

/// Prints the build type and whether the build is clean on startup.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
