//! Live distance feedback while an item is being dragged

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::config::PlannerConfig;
use crate::core::types::ItemType;
use crate::kitchen::item::KitchenItem;
use crate::spatial::distance;
use crate::triangle::validator::check_distance;

/// Distances from a hypothetical position to the placed triangle partners
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DragValidation {
    /// Every measured distance is inside the allowed range
    pub is_valid: bool,
    /// Distance to each partner, keyed by its catalog name (unique per catalog)
    pub distances: BTreeMap<String, f32>,
}

/// Measure a candidate position against the other work centers
///
/// Only touches distances; collisions and walls are left to the placement
/// checks. Items that are not triangle members always come back valid with
/// no distances. Items of the dragged type are never partners, so an item
/// that is already placed does not measure against its own old position.
pub fn drag_validation(
    items: &[KitchenItem],
    candidate: Vec3,
    item_type: ItemType,
    config: &PlannerConfig,
) -> DragValidation {
    if !item_type.is_triangle_member() {
        return DragValidation {
            is_valid: true,
            distances: BTreeMap::new(),
        };
    }

    let distances: BTreeMap<String, f32> = items
        .iter()
        .filter(|item| {
            item.placed
                && item.item_type.is_triangle_member()
                && is_partner(item_type, item.item_type)
        })
        .map(|item| (item.name.clone(), distance(candidate, item.position)))
        .collect();

    let is_valid = distances
        .values()
        .all(|d| check_distance(*d, config).is_ok());

    DragValidation {
        is_valid,
        distances,
    }
}

/// Work centers of the same type never measure against each other
fn is_partner(dragged: ItemType, other: ItemType) -> bool {
    dragged != other
}
