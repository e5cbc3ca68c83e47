#![no_main]
use chessvar::chess::board::Board;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(board) = Board::from_placement(input) else {
        return;
    };
    let placement = board.to_string();
    assert_eq!(Board::from_placement(&placement).unwrap(), board);
});
