//! The rover command alphabet.
//!
//! The alphabet is a fixed, ordered table: `L = 0`, `R = 1`, `M = 2`.
//! Lookups by symbol are case-insensitive; lookups by index are bounds
//! checked and fall back to an empty name.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "M")]
    Move,
}

/// Symbol table, in index order.
static COMMANDS: [(&str, Command); 3] = [
    ("L", Command::Left),
    ("R", Command::Right),
    ("M", Command::Move),
];

impl Command {
    pub fn symbol(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Move => 'M',
        }
    }

    pub fn index(self) -> usize {
        match self {
            Command::Left => 0,
            Command::Right => 1,
            Command::Move => 2,
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        let upper = c.to_uppercase().collect::<String>();
        COMMANDS
            .iter()
            .find(|(name, _)| *name == upper)
            .map(|(_, command)| *command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn is_valid_command(c: char) -> bool {
    let upper = c.to_uppercase().collect::<String>();
    (0..command_count()).any(|i| command_name(i as isize) == upper)
}

pub fn command_count() -> usize {
    COMMANDS.len()
}

/// Name of the command at `index`, or `""` when the index is out of range.
pub fn command_name(index: isize) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| COMMANDS.get(i))
        .map(|(name, _)| *name)
        .unwrap_or("")
}
