//! Per-line grammars for the three readers.
//!
//! Each function looks at one line of input, without its line terminator, and
//! either builds the typed value or says why the line was rejected. Nothing
//! here keeps state between calls.

use crate::domain::commands::{is_valid_command, Command};
use crate::domain::model::{CommandSequence, RoverPose, SurfaceSize};
use crate::domain::ports::DirectionResolver;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("expected {expected} tokens, found {found}")]
    TokenCount { expected: usize, found: usize },

    #[error("'{token}' is not an integer")]
    NotAnInteger { token: String },

    #[error("'{token}' is not a single character")]
    NotACharacter { token: String },

    #[error("'{0}' is not a known direction")]
    UnknownDirection(char),

    #[error("invalid command characters: {0:?}")]
    InvalidCommands(Vec<char>),

    #[error("no commands entered")]
    NoCommands,
}

/// Drops one `\n` or `\r\n`, the way `str::lines` does.
pub fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

fn tokens<const N: usize>(line: &str) -> Result<[&str; N], Rejection> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let found = fields.len();
    fields
        .try_into()
        .map_err(|_| Rejection::TokenCount { expected: N, found })
}

fn parse_int(token: &str) -> Result<i32, Rejection> {
    token.parse::<i32>().map_err(|_| Rejection::NotAnInteger {
        token: token.to_string(),
    })
}

fn parse_char(token: &str) -> Result<char, Rejection> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Rejection::NotACharacter {
            token: token.to_string(),
        }),
    }
}

/// `"<width> <height>"`.
pub fn parse_surface_size(line: &str) -> Result<SurfaceSize, Rejection> {
    let [width, height] = tokens::<2>(line)?;
    Ok(SurfaceSize {
        width: parse_int(width)?,
        height: parse_int(height)?,
    })
}

/// `"<x> <y> <direction>"`, where the direction is one character the resolver knows.
pub fn parse_rover_pose<D>(line: &str, directions: &D) -> Result<RoverPose, Rejection>
where
    D: DirectionResolver + ?Sized,
{
    let [x, y, direction] = tokens::<3>(line)?;
    let x = parse_int(x)?;
    let y = parse_int(y)?;
    let direction = parse_char(direction)?;
    let direction_state = directions
        .resolve_direction(direction)
        .ok_or(Rejection::UnknownDirection(direction))?;

    Ok(RoverPose {
        x,
        y,
        direction_state,
    })
}

/// A contiguous run of command letters. Every character is checked, so the
/// rejection lists all offending characters, not just the first.
pub fn parse_command_sequence(line: &str) -> Result<CommandSequence, Rejection> {
    let mut commands = Vec::new();
    let mut invalid = Vec::new();

    for c in line.to_uppercase().chars() {
        if !is_valid_command(c) {
            invalid.push(c);
            continue;
        }
        commands.extend(Command::from_symbol(c));
    }

    if !invalid.is_empty() {
        return Err(Rejection::InvalidCommands(invalid));
    }
    CommandSequence::new(commands).ok_or(Rejection::NoCommands)
}
