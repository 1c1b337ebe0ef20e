//! Wall-gap fill sizing
//!
//! A fill stretches a cabinet to occupy the free run between the nearest
//! neighbours in its row (or the room walls when there are none).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::config::{PlannerConfig, RoomConfig};
use crate::core::types::ItemId;
use crate::kitchen::item::KitchenItem;
use crate::spatial::FillAxis;

/// Width and center for a cabinet filling its gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillResult {
    pub width: f32,
    pub position: Vec3,
}

/// Compute the fill width and re-centered position for a cabinet
///
/// Only items in the same row (centers within `fill_row_alignment` on the
/// perpendicular axis) narrow the gap. The resulting width is clamped to
/// the configured fill range.
pub fn compute_fill(
    items: &[KitchenItem],
    room: &RoomConfig,
    config: &PlannerConfig,
    target: Vec3,
    rotation: f32,
    exclude: Option<ItemId>,
) -> FillResult {
    let axis = FillAxis::for_rotation(rotation);
    let mut span = axis.room_span(room).inset(config.wall_margin);

    let target_along = axis.along(target);
    let target_across = axis.across(target);

    let row = items.iter().filter(|item| {
        item.occupies_floor()
            && Some(item.id) != exclude
            && (axis.across(item.position) - target_across).abs() < config.fill_row_alignment
    });

    for item in row {
        let center = axis.along(item.position);
        let half = axis.extent_along(item.extent()) / 2.0;
        if center < target_along {
            span.clip_min(center + half + config.neighbor_buffer);
        } else {
            span.clip_max(center - half - config.neighbor_buffer);
        }
    }

    let width = (span.len() - config.neighbor_buffer).clamp(config.min_fill_width, config.max_fill_width);

    FillResult {
        width,
        position: axis.with_along(target, span.center()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Dimensions, ItemType};
    use crate::kitchen::item::ItemDefinition;
    use std::f32::consts::FRAC_PI_2;

    fn placed(id: u32, width: f32, x: f32, z: f32, rotation: f32) -> KitchenItem {
        let def = ItemDefinition::new(
            ItemType::Countertop,
            format!("Cabinet {}", id),
            Dimensions::new(width, 0.6, 0.9),
        );
        let mut item = KitchenItem::from_definition(ItemId(id), &def);
        item.placed = true;
        item.position = Vec3::new(x, 0.0, z);
        item.rotation = rotation;
        item
    }

    #[test]
    fn test_empty_row_fills_wall_to_wall() {
        let room = RoomConfig::new(3.0, 4.0);
        let fill = compute_fill(&[], &room, &PlannerConfig::default(), Vec3::ZERO, 0.0, None);
        assert!((fill.width - 2.975).abs() < 1e-4);
        assert!(fill.position.x.abs() < 1e-5);
    }

    #[test]
    fn test_neighbours_bound_the_gap() {
        let room = RoomConfig::new(3.0, 4.0);
        let items = vec![placed(0, 0.6, -0.9, 1.5, 0.0), placed(1, 0.6, 0.9, 1.5, 0.0)];
        let fill = compute_fill(&items, &room, &PlannerConfig::default(), Vec3::new(-0.2, 0.0, 1.5), 0.0, None);

        // Gap runs from -0.595 to 0.595
        assert!((fill.width - 1.185).abs() < 1e-4);
        assert!(fill.position.x.abs() < 1e-5);
        assert_eq!(fill.position.z, 1.5);
    }

    #[test]
    fn test_items_in_other_rows_ignored() {
        let room = RoomConfig::new(3.0, 4.0);
        let items = vec![placed(0, 0.6, 0.9, 0.0, 0.0)];
        let fill = compute_fill(&items, &room, &PlannerConfig::default(), Vec3::new(0.0, 0.0, 1.0), 0.0, None);
        assert!((fill.width - 2.975).abs() < 1e-4);
    }

    #[test]
    fn test_excluded_item_does_not_narrow() {
        let room = RoomConfig::new(3.0, 4.0);
        let items = vec![placed(0, 0.6, 0.9, 0.0, 0.0)];
        let fill = compute_fill(&items, &room, &PlannerConfig::default(), Vec3::ZERO, 0.0, Some(ItemId(0)));
        assert!((fill.width - 2.975).abs() < 1e-4);
    }

    #[test]
    fn test_rotated_fill_runs_along_length() {
        let room = RoomConfig::new(3.0, 4.0);
        let fill = compute_fill(&[], &room, &PlannerConfig::default(), Vec3::new(1.2, 0.0, 0.5), FRAC_PI_2, None);
        assert!((fill.width - 3.975).abs() < 1e-4);
        assert_eq!(fill.position.x, 1.2);
        assert!(fill.position.z.abs() < 1e-5);
    }

    #[test]
    fn test_fill_width_clamped() {
        let config = PlannerConfig::default();

        let wide_room = RoomConfig::new(6.0, 4.0);
        let fill = compute_fill(&[], &wide_room, &config, Vec3::ZERO, 0.0, None);
        assert_eq!(fill.width, config.max_fill_width);

        // Neighbours 0.05m apart leave almost nothing
        let room = RoomConfig::new(3.0, 4.0);
        let items = vec![placed(0, 0.6, -0.325, 0.0, 0.0), placed(1, 0.6, 0.325, 0.0, 0.0)];
        let fill = compute_fill(&items, &room, &config, Vec3::ZERO, 0.0, None);
        assert_eq!(fill.width, config.min_fill_width);
    }

    #[test]
    fn test_rotated_neighbour_uses_rotated_extent() {
        let room = RoomConfig::new(3.0, 4.0);
        // 1.0m wide unit turned sideways only occupies 0.6m along x
        let items = vec![placed(0, 1.0, 1.0, 0.0, FRAC_PI_2)];
        let fill = compute_fill(&items, &room, &PlannerConfig::default(), Vec3::ZERO, 0.0, None);
        // Right bound at 1.0 - 0.3 - 0.005 = 0.695, left at -1.49
        assert!((fill.width - (0.695 + 1.49 - 0.005)).abs() < 1e-4);
    }
}
