//! Command parsing
//!
//! Turns one line of player input into a [`Command`]. Anything malformed is
//! rejected here, before the engine sees it.

use crate::world::Cave;

/// A parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Cave),
    /// Caves to aim at, in order; may be empty
    Shoot(Vec<Cave>),
    Help,
    Quit,
}

/// Why a line could not be understood
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Say something! Type 'help' for the commands")]
    Empty,

    #[error("I don't know how to '{0}'. Type 'help' for the commands")]
    Unknown(String),

    #[error("'{0}' needs a cave number")]
    MissingArgument(&'static str),

    #[error("Invalid input: '{0}' is not a cave number")]
    NotANumber(String),

    #[error("Invalid input: there is no cave {0}")]
    NoSuchCave(u32),

    #[error("Invalid input: unexpected '{0}'")]
    UnexpectedArgument(String),
}

/// Parse a line of input
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(CommandError::Empty)?.to_lowercase();
    let rest: Vec<&str> = words.collect();

    match verb.as_str() {
        "move" | "m" => {
            let (first, extra) = rest.split_first().ok_or(CommandError::MissingArgument("move"))?;
            if let Some(extra) = extra.first() {
                return Err(CommandError::UnexpectedArgument(extra.to_string()));
            }
            Ok(Command::Move(parse_cave(first)?))
        }
        "shoot" | "s" => {
            let targets = rest
                .iter()
                .flat_map(|word| word.split(','))
                .filter(|token| !token.is_empty())
                .map(parse_cave)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::Shoot(targets))
        }
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(verb)),
    }
}

fn parse_cave(token: &str) -> Result<Cave, CommandError> {
    let id: u32 = token
        .parse()
        .map_err(|_| CommandError::NotANumber(token.to_string()))?;
    Cave::new(id).map_err(|_| CommandError::NoSuchCave(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cave(id: u32) -> Cave {
        Cave::new(id).unwrap()
    }

    #[test]
    fn test_move() {
        assert_eq!(parse_command("move 5"), Ok(Command::Move(cave(5))));
        assert_eq!(parse_command("  M 12 \n"), Ok(Command::Move(cave(12))));
        assert_eq!(parse_command("move"), Err(CommandError::MissingArgument("move")));
        assert_eq!(
            parse_command("move 5 6"),
            Err(CommandError::UnexpectedArgument("6".to_string()))
        );
    }

    #[test]
    fn test_shoot_lists() {
        let expected = Command::Shoot(vec![cave(2), cave(10), cave(11)]);
        assert_eq!(parse_command("shoot 2 10 11"), Ok(expected.clone()));
        assert_eq!(parse_command("shoot 2,10,11"), Ok(expected.clone()));
        assert_eq!(parse_command("s 2, 10 ,11"), Ok(expected));
        assert_eq!(parse_command("shoot"), Ok(Command::Shoot(Vec::new())));
    }

    #[test]
    fn test_bad_numbers() {
        assert_eq!(
            parse_command("move north"),
            Err(CommandError::NotANumber("north".to_string()))
        );
        assert_eq!(
            parse_command("shoot 2 -1"),
            Err(CommandError::NotANumber("-1".to_string()))
        );
        assert_eq!(parse_command("move 21"), Err(CommandError::NoSuchCave(21)));
        assert_eq!(parse_command("shoot 0"), Err(CommandError::NoSuchCave(0)));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command(""), Err(CommandError::Empty));
        assert_eq!(parse_command("dance"), Err(CommandError::Unknown("dance".to_string())));
    }
}
