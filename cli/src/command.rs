use core::str::FromStr;

use sweeper_core::{BoardConfig, CellCount, Coord, Coord2, Difficulty, GameError, UnknownDifficulty};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    New,
    Difficulty(Difficulty),
    Save,
    Load,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub(crate) enum CommandError {
    #[error("Type a command, or h for help")]
    Empty,
    #[error("Unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error("Not a number: {0:?}")]
    InvalidNumber(String),
    #[error(transparent)]
    Difficulty(#[from] UnknownDifficulty),
    #[error("Invalid custom board: {0}")]
    Config(#[from] GameError),
}

pub(crate) const HELP: &str = "\
r X Y             reveal the cell at column X, row Y
f X Y             toggle a flag at column X, row Y
n                 new game
d NAME            switch to beginner, intermediate or expert
d custom R C M    switch to a custom board with R rows, C columns and M mines
s                 save the game
l                 load the saved game
h                 show this help
q                 quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "n" | "new" => Self::New,
            "d" | "difficulty" => Self::Difficulty(parse_difficulty(&mut words)?),
            "s" | "save" => Self::Save,
            "l" | "load" => Self::Load,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(verb.to_owned())),
        };
        Ok(command)
    }
}

fn parse_number<'a, T: FromStr>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<T, CommandError> {
    let word = words.next().ok_or(CommandError::MissingArgument(name))?;
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_owned()))
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    let x: Coord = parse_number(words, "column")?;
    let y: Coord = parse_number(words, "row")?;
    Ok((x, y))
}

fn parse_difficulty<'a>(
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Difficulty, CommandError> {
    let name = words
        .next()
        .ok_or(CommandError::MissingArgument("difficulty"))?;

    if name.eq_ignore_ascii_case("custom") {
        let rows: Coord = parse_number(words, "rows")?;
        let columns: Coord = parse_number(words, "columns")?;
        let mines: CellCount = parse_number(words, "mines")?;
        let config = BoardConfig::new(rows, columns, mines).validate()?;
        return Ok(Difficulty::Custom(config));
    }

    Ok(name.parse::<Difficulty>()?)
}
