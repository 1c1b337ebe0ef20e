//! Kitchen items - catalog templates, instances and the inventory pools

pub mod catalog;
pub mod inventory;
pub mod item;

pub use catalog::{Catalog, CABINET_DEPTH, CABINET_HEIGHT, COUNTERTOP_COUNT};
pub use inventory::Inventory;
pub use item::{ItemDefinition, KitchenItem};
