pub mod directions;
pub mod input_manager;
pub mod parse;

pub use crate::domain::model::{CommandSequence, MissionPlan, RoverPlan, RoverPose, SurfaceSize};
pub use crate::domain::ports::{DirectionResolver, MessageProvider};
pub use crate::utils::error::Result;
