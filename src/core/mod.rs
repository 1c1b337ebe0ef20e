pub mod config;
pub mod error;
pub mod types;

pub use config::{PlannerConfig, RoomConfig};
pub use error::{PlannerError, Result};
pub use types::{Dimensions, ItemId, ItemType, WallSide};
