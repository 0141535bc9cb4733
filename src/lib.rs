pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{InputConfig, MessagesConfig};

pub use crate::core::{directions::CompassDirections, input_manager::InputManager};
pub use domain::commands::{command_count, command_name, is_valid_command, Command};
pub use domain::model::{CommandSequence, MissionPlan, RoverPlan, RoverPose, SurfaceSize};
pub use domain::ports::{DirectionResolver, MessageProvider};
pub use utils::error::{InputError, Result};
