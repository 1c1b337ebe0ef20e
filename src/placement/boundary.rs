//! Room boundary validation for a proposed placement

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::config::{PlannerConfig, RoomConfig};
use crate::core::types::ItemId;
use crate::kitchen::item::KitchenItem;
use crate::placement::collision::find_collision;
use crate::spatial::aligned_footprint;

/// A footprint the user wants to put somewhere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub position: Vec3,
    pub rotation: f32,
    /// Unrotated width
    pub width: f32,
    /// Unrotated depth
    pub depth: f32,
    /// Item being moved, ignored during the collision pass
    pub exclude: Option<ItemId>,
}

/// Outcome of a legality check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementCheck {
    pub valid: bool,
    /// Why the placement was rejected
    pub reason: Option<String>,
}

impl PlacementCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Check a footprint against the room walls, then against placed items
///
/// Walls get a generous tolerance so corner placements and float noise do
/// not bounce the user; only overflow beyond tolerance plus a small
/// allowance is rejected.
pub fn validate_placement(
    items: &[KitchenItem],
    room: &RoomConfig,
    config: &PlannerConfig,
    request: &PlacementRequest,
) -> PlacementCheck {
    let footprint = aligned_footprint(request.width, request.depth, request.rotation);
    let pos = request.position;

    let width_limit = room.half_width() + config.boundary_tolerance;
    let length_limit = room.half_length() + config.boundary_tolerance;

    let overflow_x = (pos.x.abs() + footprint.half_width()) - width_limit;
    if overflow_x > config.boundary_overflow_allowance {
        return PlacementCheck::rejected(format!(
            "Exceeds room width by {:.1}cm",
            overflow_x * 100.0
        ));
    }

    let overflow_z = (pos.z.abs() + footprint.half_depth()) - length_limit;
    if overflow_z > config.boundary_overflow_allowance {
        return PlacementCheck::rejected(format!(
            "Exceeds room length by {:.1}cm",
            overflow_z * 100.0
        ));
    }

    if let Some(other) = find_collision(items, pos, footprint, request.exclude, config) {
        return PlacementCheck::rejected(format!("Collides with {}", other.name));
    }

    PlacementCheck::ok()
}
