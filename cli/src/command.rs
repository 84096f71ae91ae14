use std::str::FromStr;

use sapper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Quit,
    Reveal(Coord2),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("expected two coordinates separated by a single space")]
    Malformed,
    #[error("{0:?} is not a non-negative whole number")]
    NotANumber(String),
    #[error("{0} is too large to be a board coordinate")]
    OutOfRange(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim_end_matches(['\r', '\n']) {
            "h" => Ok(Command::Help),
            "q" => Ok(Command::Quit),
            line => {
                let (x, y) = line.split_once(' ').ok_or(CommandError::Malformed)?;
                Ok(Command::Reveal((parse_coord(x)?, parse_coord(y)?)))
            }
        }
    }
}

fn parse_coord(text: &str) -> Result<Coord, CommandError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::NotANumber(text.to_owned()));
    }
    text.parse()
        .map_err(|_| CommandError::OutOfRange(text.to_owned()))
}
