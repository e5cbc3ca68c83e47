//! The engine wraps a [`Game`] into a line-oriented text protocol so that the
//! game can be played and inspected by a human in a terminal or by a script
//! driving the binary through pipes.
//!
//! [`Engine::run`] is the "main loop" which reads commands from the input
//! stream, executes them and writes responses to the output stream. Every
//! rejected command is reported as an `info string` line and never stops the
//! loop.

use std::io::{BufRead, Write};

use crate::chess::core::{Move, Side, Square};
use crate::chess::game::{Game, GameResult};
use crate::engine::command::Command;

mod command;

/// The Engine connects the game with the I/O streams.
pub struct Engine<R: BufRead, W: Write> {
    game: Game,
    input: R,
    output: W,
    show_board: bool,
}

impl<R: BufRead, W: Write> Engine<R, W> {
    /// Creates a new instance of the engine with a new game and provided I/O.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            game: Game::new(),
            input,
            output,
            show_board: false,
        }
    }

    /// Dumps the board after every successful move when enabled.
    #[must_use]
    pub fn with_board_dumps(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }

    /// Continuously reads the input stream and executes the commands until
    /// `quit` is sent or the input is exhausted.
    ///
    /// Supported commands:
    ///
    /// - `<from><to>` or `move <from> <to>`: make a move
    /// - `legal <from> <to>`: check a move without making it
    /// - `square <square>`: contents of the square
    /// - `turn`, `round`, `state`, `score <side>`: game status
    /// - `d` or `board`: dump the game
    /// - `fen`: piece placement, side to move and round
    /// - `newgame`: start over
    /// - `quit`
    ///
    /// # Errors
    ///
    /// Returns an error only if reading the input or writing the output
    /// fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Command::parse(line) {
                Command::MakeMove(next_move) => self.handle_move(next_move)?,
                Command::IsLegal(next_move) => writeln!(
                    self.output,
                    "{}",
                    self.game.is_move_legal(next_move.from(), next_move.to())
                )?,
                Command::Square(square) => self.handle_square(square)?,
                Command::Turn => writeln!(self.output, "{}", self.game.side_to_move())?,
                Command::Round => writeln!(self.output, "{}", self.game.round())?,
                Command::Score(side) => self.handle_score(side)?,
                Command::State => writeln!(self.output, "{}", self.game.result())?,
                Command::Dump => write!(self.output, "{:?}", self.game)?,
                Command::Fen => writeln!(self.output, "{}", self.game)?,
                Command::NewGame => self.game = Game::new(),
                Command::Quit => break,
                Command::Malformed(reason) => writeln!(self.output, "info string {reason}")?,
                Command::Unknown(command) => {
                    writeln!(self.output, "info string Unsupported command: {command}")?;
                },
            }
            self.output.flush()?;
        }
        Ok(())
    }

    /// Makes the move and reports the capture and the end of the game, if
    /// any. Rejected moves leave the game untouched.
    fn handle_move(&mut self, next_move: Move) -> anyhow::Result<()> {
        let outcome = match self.game.apply(next_move) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(self.output, "info string {e}")?;
                return Ok(());
            },
        };
        match outcome.captured {
            Some(kind) => writeln!(self.output, "ok capture {kind}")?,
            None => writeln!(self.output, "ok")?,
        }
        if outcome.result != GameResult::Unfinished {
            writeln!(self.output, "result {}", outcome.result)?;
        }
        if self.show_board {
            write!(self.output, "{:?}", self.game)?;
        }
        Ok(())
    }

    fn handle_square(&mut self, square: Square) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.game.at(square))?;
        Ok(())
    }

    fn handle_score(&mut self, side: Side) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.game.score(side))?;
        Ok(())
    }
}
