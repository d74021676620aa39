//! Command grammar: one line of text to one [`Command`].
//!
//! ```text
//! PLACE <int>,<int>,<NORTH|SOUTH|EAST|WEST>
//! MOVE
//! LEFT
//! RIGHT
//! REPORT
//! ```
//!
//! Keywords and direction words are case-insensitive. Surrounding whitespace
//! is ignored, but the `PLACE` argument block must be exactly `X,Y,F` after a
//! single space.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::direction::Direction;

/// A single instruction for the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { x: i32, y: i32, facing: Direction },
    Move,
    Left,
    Right,
    Report,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { x, y, facing } => write!(f, "PLACE {x},{y},{facing}"),
            Command::Move => f.write_str("MOVE"),
            Command::Left => f.write_str("LEFT"),
            Command::Right => f.write_str("RIGHT"),
            Command::Report => f.write_str("REPORT"),
        }
    }
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    Empty,
    UnknownKeyword,
    /// A bare keyword was followed by more text.
    UnexpectedArguments,
    /// `PLACE` arguments are not `<int>,<int>,<direction>`.
    InvalidPlaceArguments,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MalformedReason::Empty => "empty command",
            MalformedReason::UnknownKeyword => "unknown keyword",
            MalformedReason::UnexpectedArguments => "unexpected arguments",
            MalformedReason::InvalidPlaceArguments => "expected PLACE X,Y,F",
        };
        f.write_str(text)
    }
}

/// A line that does not match the command grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown command [{input}]: {reason}")]
pub struct MalformedCommand {
    /// The offending line, trimmed.
    pub input: String,
    pub reason: MalformedReason,
}

impl MalformedCommand {
    fn new(input: &str, reason: MalformedReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

static PLACE_ARGS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?[0-9]+),([+-]?[0-9]+),([A-Za-z]+)$").expect("valid PLACE pattern")
});

/// Parse one line into a [`Command`].
///
/// Pure and deterministic: the same input always yields the same result.
pub fn parse_command(line: &str) -> Result<Command, MalformedCommand> {
    let input = line.trim();
    if input.is_empty() {
        return Err(MalformedCommand::new(input, MalformedReason::Empty));
    }

    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (input, None),
    };

    let bare = match keyword.to_ascii_uppercase().as_str() {
        // Exactly one plain space separates the keyword from `X,Y,F`.
        "PLACE" => {
            return match input[keyword.len()..].strip_prefix(' ') {
                Some(args) => parse_place(input, args),
                None => Err(MalformedCommand::new(
                    input,
                    MalformedReason::InvalidPlaceArguments,
                )),
            };
        }
        "MOVE" => Command::Move,
        "LEFT" => Command::Left,
        "RIGHT" => Command::Right,
        "REPORT" => Command::Report,
        _ => {
            return Err(MalformedCommand::new(
                input,
                MalformedReason::UnknownKeyword,
            ));
        }
    };

    match rest {
        None => Ok(bare),
        Some(_) => Err(MalformedCommand::new(
            input,
            MalformedReason::UnexpectedArguments,
        )),
    }
}

fn parse_place(input: &str, args: &str) -> Result<Command, MalformedCommand> {
    let invalid = || MalformedCommand::new(input, MalformedReason::InvalidPlaceArguments);
    let caps = PLACE_ARGS_RE.captures(args).ok_or_else(invalid)?;
    let x = caps[1].parse::<i32>().map_err(|_| invalid())?;
    let y = caps[2].parse::<i32>().map_err(|_| invalid())?;
    let facing = caps[3].parse::<Direction>().map_err(|_| invalid())?;
    Ok(Command::Place { x, y, facing })
}
