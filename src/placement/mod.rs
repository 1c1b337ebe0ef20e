//! Placement engine - collisions, wall fills, boundaries, resizing, stacking

pub mod boundary;
pub mod collision;
pub mod fill;
pub mod resize;
pub mod stacking;

pub use boundary::{validate_placement, PlacementCheck, PlacementRequest};
pub use collision::find_collision;
pub use fill::{compute_fill, FillResult};
pub use resize::{plan_resize, ResizePlan};
pub use stacking::{stack_ovens, unstack};
