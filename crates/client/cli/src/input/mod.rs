//! Input processing for the CLI client.
//!
//! This module owns the line-to-command mapping so the rest of the
//! application can remain agnostic about the concrete command syntax.
//! A line that does not start with `:` is a region guess.

use std::str::FromStr;

use quiz_core::{Continent, Difficulty, GameAction, GameMode, GameState};

/// High-level outcome of parsing one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Guess a region by name.
    Select(String),
    Skip,
    Difficulty(Difficulty),
    Continent(Continent),
    Mode(GameMode),
    Reset,
    /// Show the names still in play.
    List,
    Help,
    Quit,
    /// Blank line; nothing to do.
    None,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command :{0} (try :help)")]
    Unknown(String),

    #[error(":{command} needs an argument, one of: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: String,
    },

    #[error("{value:?} is not a valid {kind}, expected one of: {expected}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

impl Command {
    /// Parses a single input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::None);
        }

        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Command::Select(line.to_owned()));
        };

        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "skip" | "s" => Ok(Command::Skip),
            "difficulty" | "d" => {
                parse_argument("difficulty", argument).map(Command::Difficulty)
            }
            "continent" | "c" => parse_argument("continent", argument).map(Command::Continent),
            "mode" | "m" => parse_argument("mode", argument).map(Command::Mode),
            "reset" | "r" => Ok(Command::Reset),
            "list" | "l" => Ok(Command::List),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }

    /// Returns the engine action behind this command, if any.
    pub fn into_action(self) -> Option<GameAction> {
        match self {
            Command::Select(region) => Some(GameAction::SelectRegion(region)),
            Command::Skip => Some(GameAction::SkipRegion),
            Command::Difficulty(difficulty) => Some(GameAction::ChangeDifficulty(difficulty)),
            Command::Continent(continent) => Some(GameAction::ChangeContinent(continent)),
            Command::Mode(mode) => Some(GameAction::ChangeGameMode(mode)),
            Command::Reset => Some(GameAction::ResetGame),
            Command::List | Command::Help | Command::Quit | Command::None => None,
        }
    }
}

/// Maps a typed guess onto the round's spelling of that region.
///
/// Case is ignored. A name outside the round is returned unchanged and still
/// counts as a wrong guess.
pub fn resolve_guess(state: &GameState, typed: &str) -> String {
    let wanted = typed.to_lowercase();
    state
        .region_to_find
        .iter()
        .chain(&state.regions_remaining)
        .chain(&state.regions_found)
        .find(|name| name.to_lowercase() == wanted)
        .cloned()
        .unwrap_or_else(|| typed.to_owned())
}

fn parse_argument<T>(command: &'static str, argument: &str) -> Result<T, CommandError>
where
    T: FromStr + strum::IntoEnumIterator + std::fmt::Display,
{
    if argument.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: choices::<T>(),
        });
    }

    argument.parse().map_err(|_| CommandError::InvalidValue {
        kind: command,
        value: argument.to_owned(),
        expected: choices::<T>(),
    })
}

/// Comma-separated display names of every variant of `T`.
pub fn choices<T>() -> String
where
    T: strum::IntoEnumIterator + std::fmt::Display,
{
    T::iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
