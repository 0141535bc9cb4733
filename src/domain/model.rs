use crate::domain::commands::Command;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

impl fmt::Display for SurfaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverPose {
    pub x: i32,
    pub y: i32,
    /// Index handed out by the direction resolver.
    pub direction_state: usize,
}

impl fmt::Display for RoverPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} #{}", self.x, self.y, self.direction_state)
    }
}

/// Non-empty run of rover commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Command>", into = "Vec<Command>")]
pub struct CommandSequence(Vec<Command>);

impl CommandSequence {
    pub fn new(commands: Vec<Command>) -> Option<Self> {
        if commands.is_empty() {
            None
        } else {
            Some(Self(commands))
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> Vec<char> {
        self.0.iter().map(|c| c.symbol()).collect()
    }
}

impl TryFrom<Vec<Command>> for CommandSequence {
    type Error = String;

    fn try_from(commands: Vec<Command>) -> Result<Self, Self::Error> {
        Self::new(commands).ok_or_else(|| "command sequence cannot be empty".to_string())
    }
}

impl From<CommandSequence> for Vec<Command> {
    fn from(sequence: CommandSequence) -> Self {
        sequence.0
    }
}

impl fmt::Display for CommandSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.0 {
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverPlan {
    pub pose: RoverPose,
    pub commands: CommandSequence,
}

/// Everything the simulator needs, in the order it was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionPlan {
    pub surface: SurfaceSize,
    pub rovers: Vec<RoverPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_cannot_be_built() {
        assert!(CommandSequence::new(vec![]).is_none());
        assert!(serde_json::from_str::<CommandSequence>("[]").is_err());
    }

    #[test]
    fn test_sequence_display_and_json() {
        let sequence =
            CommandSequence::new(vec![Command::Left, Command::Move, Command::Right]).unwrap();
        assert_eq!(sequence.to_string(), "LMR");
        assert_eq!(sequence.symbols(), vec!['L', 'M', 'R']);
        assert_eq!(serde_json::to_string(&sequence).unwrap(), r#"["L","M","R"]"#);
    }

    #[test]
    fn test_plan_serializes_for_downstream() {
        let plan = MissionPlan {
            surface: SurfaceSize {
                width: 5,
                height: 5,
            },
            rovers: vec![RoverPlan {
                pose: RoverPose {
                    x: 1,
                    y: 2,
                    direction_state: 0,
                },
                commands: CommandSequence::new(vec![Command::Move]).unwrap(),
            }],
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["surface"]["width"], 5);
        assert_eq!(json["rovers"][0]["pose"]["direction_state"], 0);
        assert_eq!(json["rovers"][0]["commands"][0], "M");
    }
}
