//! Kitchen Planner - placement, collision and work-triangle engine

pub mod core;
pub mod kitchen;
pub mod placement;
pub mod spatial;
pub mod triangle;
pub mod world;
