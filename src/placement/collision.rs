//! Collision detection between a candidate footprint and placed items
//!
//! The test is deliberately forgiving: items may touch or overlap a little
//! without a collision being reported. Only a deep overlap on both axes
//! counts, which keeps the rotation approximation and float noise from
//! blocking placements the user clearly intended.

use glam::Vec3;

use crate::core::config::PlannerConfig;
use crate::core::types::ItemId;
use crate::kitchen::item::KitchenItem;
use crate::spatial::{overlap_depth, Extent};

/// Keeps the per-axis gate inclusive when the center distance lands exactly
/// on the buffered half-extent sum
const GATE_EPSILON: f32 = 1e-4;

/// Find the first placed item that collides with a candidate footprint
///
/// `footprint` is the candidate's axis-aligned extent. Items stacked on top
/// of another unit never collide on their own, and `exclude` (the item being
/// moved) is skipped.
pub fn find_collision<'a>(
    items: &'a [KitchenItem],
    position: Vec3,
    footprint: Extent,
    exclude: Option<ItemId>,
    config: &PlannerConfig,
) -> Option<&'a KitchenItem> {
    items
        .iter()
        .filter(|item| item.occupies_floor() && Some(item.id) != exclude)
        .find(|item| collides(position, footprint, item, config))
}

fn collides(position: Vec3, footprint: Extent, item: &KitchenItem, config: &PlannerConfig) -> bool {
    let other = item.extent();

    let half_x = footprint.half_width() + other.half_width();
    let half_z = footprint.half_depth() + other.half_depth();
    let dx = (position.x - item.position.x).abs();
    let dz = (position.z - item.position.z).abs();

    let gate_x = dx < half_x + config.collision_buffer + GATE_EPSILON;
    let gate_z = dz < half_z + config.collision_buffer + GATE_EPSILON;
    if !(gate_x && gate_z) {
        return false;
    }

    let depth_x = overlap_depth(
        position.x,
        footprint.half_width(),
        item.position.x,
        other.half_width(),
    );
    let depth_z = overlap_depth(
        position.z,
        footprint.half_depth(),
        item.position.z,
        other.half_depth(),
    );

    depth_x > config.collision_report_depth && depth_z > config.collision_report_depth
}
