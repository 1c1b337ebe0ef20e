//! Cabinet resizing with gap re-centering

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::config::{PlannerConfig, RoomConfig};
use crate::kitchen::item::KitchenItem;
use crate::spatial::FillAxis;

/// New geometry for a resized cabinet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizePlan {
    pub width: f32,
    pub position: Vec3,
    /// True when the change was large enough to count as a fill
    pub recentered: bool,
}

/// Work out where a cabinet ends up after changing its width
///
/// Small tweaks keep the cabinet where it is. A change larger than
/// `fill_resize_threshold` is treated as a fill: the cabinet moves to the
/// middle of the free run between its row neighbours so it sits centered in
/// its gap instead of staying anchored at its old position.
pub fn plan_resize(
    items: &[KitchenItem],
    room: &RoomConfig,
    config: &PlannerConfig,
    cabinet: &KitchenItem,
    new_width: f32,
) -> ResizePlan {
    let delta = (new_width - cabinet.dimensions.width).abs();
    if delta <= config.fill_resize_threshold {
        return ResizePlan {
            width: new_width,
            position: cabinet.position,
            recentered: false,
        };
    }

    let axis = FillAxis::for_rotation(cabinet.rotation);
    let mut bound = axis.room_span(room).inset(config.resize_neighbor_margin);

    let center = axis.along(cabinet.position);
    let across = axis.across(cabinet.position);

    let neighbours = items.iter().filter(|item| {
        item.occupies_floor()
            && item.id != cabinet.id
            && (axis.across(item.position) - across).abs() < config.resize_row_alignment
    });

    for item in neighbours {
        let other = axis.along(item.position);
        let half = axis.extent_along(item.extent()) / 2.0;
        if other < center {
            bound.clip_min(other + half + config.resize_neighbor_margin);
        } else {
            bound.clip_max(other - half - config.resize_neighbor_margin);
        }
    }

    ResizePlan {
        width: new_width,
        position: axis.with_along(cabinet.position, bound.center()),
        recentered: true,
    }
}
