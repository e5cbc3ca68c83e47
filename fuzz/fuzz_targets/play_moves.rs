#![no_main]
use chessvar::chess::core::{Side, Square};
use chessvar::chess::error::MoveError;
use chessvar::chess::game::Game;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

// Every pair of bytes is a move attempt. Out-of-range bytes are skipped.
fuzz_target!(|data: &[u8]| {
    let mut game = Game::new();
    for pair in data.chunks_exact(2) {
        let (Ok(from), Ok(to)) = (Square::try_from(pair[0]), Square::try_from(pair[1])) else {
            continue;
        };
        let before = game.clone();
        let pieces = game.board().occupancy().count();
        match game.make_move(from, to) {
            Ok(outcome) => {
                assert!(before.is_move_legal(from, to));
                let removed = u32::from(outcome.captured.is_some());
                assert_eq!(game.board().occupancy().count(), pieces - removed);
                assert_eq!(game.side_to_move(), !before.side_to_move());
            },
            Err(MoveError::GameOver { .. }) => {
                assert!(before.is_over());
                assert_eq!(game, before);
            },
            Err(e) => {
                assert!(!before.is_move_legal(from, to), "{e}");
                assert_eq!(game, before);
            },
        }
        for side in [Side::White, Side::Black] {
            assert_eq!(
                game.board().pieces(side).count() + game.score(side.opponent()).total(),
                16
            );
        }
    }
});
