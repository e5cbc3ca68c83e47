use crate::chess::core::{Move, Side, Square};

#[derive(Debug, PartialEq)]
pub(super) enum Command {
    MakeMove(Move),
    IsLegal(Move),
    Square(Square),
    Turn,
    Round,
    Score(Side),
    State,
    Dump,
    Fen,
    NewGame,
    Quit,
    /// A known command with arguments that could not be parsed.
    Malformed(String),
    Unknown(String),
}

fn parse_move(parts: &[&str]) -> Result<Move, String> {
    match parts {
        [from, to] => Ok(Move::new(
            Square::try_from(*from).map_err(|e| e.to_string())?,
            Square::try_from(*to).map_err(|e| e.to_string())?,
        )),
        [uci] => Move::from_uci(uci).map_err(|e| e.to_string()),
        _ => Err(format!("expected <from> <to>, got: {:?}", parts.join(" "))),
    }
}

fn parse_square(parts: &[&str]) -> Command {
    match parts {
        [square] => Square::try_from(*square)
            .map_or_else(|e| Command::Malformed(e.to_string()), Command::Square),
        _ => Command::Malformed(format!("expected one square, got: {:?}", parts.join(" "))),
    }
}

fn parse_score(parts: &[&str]) -> Command {
    match parts {
        [side] => Side::try_from(*side)
            .map_or_else(|e| Command::Malformed(e.to_string()), Command::Score),
        _ => Command::Malformed(format!("expected a side, got: {:?}", parts.join(" "))),
    }
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();

        let Some((&command, arguments)) = parts.split_first() else {
            return Self::Unknown(input.to_string());
        };

        match command {
            "move" => parse_move(arguments).map_or_else(Self::Malformed, Self::MakeMove),
            "legal" => parse_move(arguments).map_or_else(Self::Malformed, Self::IsLegal),
            "square" => parse_square(arguments),
            "turn" => Self::Turn,
            "round" => Self::Round,
            "score" => parse_score(arguments),
            "state" => Self::State,
            "d" | "board" => Self::Dump,
            "fen" => Self::Fen,
            "newgame" => Self::NewGame,
            "quit" => Self::Quit,
            _ if arguments.is_empty() => Move::from_uci(command)
                .map_or_else(|_| Self::Unknown(input.to_string()), Self::MakeMove),
            _ => Self::Unknown(input.to_string()),
        }
    }
}
