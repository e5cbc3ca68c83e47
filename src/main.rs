//! Plays a game of annihilation chess over stdin/stdout. See [`chessvar::Engine`]
//! for the list of supported commands.

use std::io;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Do not print the version banner on startup.
    #[arg(long)]
    quiet: bool,
    /// Dump the board after every successful move.
    #[arg(long)]
    show_board: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if !args.quiet {
        chessvar::print_engine_info();
        chessvar::print_binary_info();
    }
    let mut engine = chessvar::Engine::new(io::stdin().lock(), io::stdout().lock())
        .with_board_dumps(args.show_board);
    engine.run()
}
