//! Item definitions and runtime item instances

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::types::{Dimensions, ItemId, ItemType};
use crate::spatial::{rotated_extent, Extent};

/// Immutable catalog template for a placeable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub item_type: ItemType,
    /// Human-readable name
    pub name: String,
    /// Unrotated size in meters
    pub dimensions: Dimensions,
    /// Default rotation in radians
    #[serde(default)]
    pub rotation: f32,
}

impl ItemDefinition {
    pub fn new(item_type: ItemType, name: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            item_type,
            name: name.into(),
            dimensions,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

/// A concrete item, either waiting in inventory or standing in the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenItem {
    pub id: ItemId,
    pub item_type: ItemType,
    pub name: String,
    pub dimensions: Dimensions,
    /// World position; y is only non-zero for a unit stacked on another
    pub position: Vec3,
    /// Rotation about the vertical axis in radians
    pub rotation: f32,
    /// Which pool the item is in
    pub placed: bool,
    /// Base unit this item sits on top of
    pub stacked_on: Option<ItemId>,
    /// Unit sitting on top of this item
    pub stacked_with: Option<ItemId>,
}

impl KitchenItem {
    /// Fresh, unplaced instance of a definition
    pub fn from_definition(id: ItemId, definition: &ItemDefinition) -> Self {
        Self {
            id,
            item_type: definition.item_type,
            name: definition.name.clone(),
            dimensions: definition.dimensions,
            position: Vec3::ZERO,
            rotation: definition.rotation,
            placed: false,
            stacked_on: None,
            stacked_with: None,
        }
    }

    /// Axis-aligned footprint at the current rotation
    pub fn extent(&self) -> Extent {
        rotated_extent(self.dimensions, self.rotation)
    }

    /// True for the upper unit of a stack; its footprint belongs to the base
    pub fn is_stacked_on_other(&self) -> bool {
        self.stacked_on.is_some()
    }

    /// Placed and owning its own floor footprint
    pub fn occupies_floor(&self) -> bool {
        self.placed && !self.is_stacked_on_other()
    }

    /// Send the item back to inventory at the origin with no rotation
    pub fn reset(&mut self) {
        self.placed = false;
        self.position = Vec3::ZERO;
        self.rotation = 0.0;
        self.stacked_on = None;
        self.stacked_with = None;
    }
}
