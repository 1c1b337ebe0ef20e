//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for kitchen items
///
/// Ids are handed out sequentially when the catalog is seeded and double as
/// the index of the item in the inventory arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena slot for this id
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of placeable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Sink,
    Stove,
    Oven,
    Refrigerator,
    Countertop,
}

impl ItemType {
    /// Every item type, in catalog order
    pub const ALL: [ItemType; 5] = [
        ItemType::Sink,
        ItemType::Stove,
        ItemType::Oven,
        ItemType::Refrigerator,
        ItemType::Countertop,
    ];

    /// Work centers that take part in the golden triangle
    pub fn is_triangle_member(&self) -> bool {
        matches!(
            self,
            ItemType::Sink | ItemType::Stove | ItemType::Refrigerator
        )
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Sink => "Sink",
            ItemType::Stove => "Stove",
            ItemType::Oven => "Oven",
            ItemType::Refrigerator => "Refrigerator",
            ItemType::Countertop => "Countertop",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical size of an item in meters (unrotated)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along the item's local x axis
    pub width: f32,
    /// Extent along the item's local z axis (front to back)
    pub depth: f32,
    /// Vertical extent
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, depth: f32, height: f32) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }
}

/// Wall of the room, used for the window wall set up at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallSide {
    #[default]
    North,
    South,
    East,
    West,
}
