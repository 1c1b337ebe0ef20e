//! Oven stacking
//!
//! Two ovens can share one footprint, one on top of the other. The base
//! keeps the footprint and grows to the combined height; the upper unit is
//! lifted to the base's original height and no longer collides on its own.
//! Stack links are stored as ids on both items.

use glam::Vec3;

use crate::core::error::{PlannerError, Result};
use crate::core::types::{ItemId, ItemType};
use crate::kitchen::inventory::Inventory;

/// Put `top` on top of the placed oven `base`
///
/// `top` may come from either pool; it ends up placed at the base's
/// footprint. No collision check is run afterwards since the pair occupies
/// exactly the base's floor space.
pub fn stack_ovens(inventory: &mut Inventory, base_id: ItemId, top_id: ItemId) -> Result<()> {
    if base_id == top_id {
        return Err(PlannerError::InvalidStack(format!(
            "cannot stack {} on itself",
            base_id
        )));
    }

    let base = inventory
        .get(base_id)
        .ok_or(PlannerError::ItemNotFound(base_id))?;
    let top = inventory
        .get(top_id)
        .ok_or(PlannerError::ItemNotFound(top_id))?;

    if base.item_type != ItemType::Oven {
        return Err(PlannerError::NotAnOven(base_id));
    }
    if top.item_type != ItemType::Oven {
        return Err(PlannerError::NotAnOven(top_id));
    }
    if !base.placed {
        return Err(PlannerError::ItemNotPlaced(base_id));
    }
    if base.stacked_on.is_some() || base.stacked_with.is_some() {
        return Err(PlannerError::InvalidStack(format!(
            "{} is already part of a stack",
            base_id
        )));
    }
    if top.stacked_on.is_some() || top.stacked_with.is_some() {
        return Err(PlannerError::InvalidStack(format!(
            "{} is already part of a stack",
            top_id
        )));
    }

    let base_position = base.position;
    let base_rotation = base.rotation;
    let base_height = base.dimensions.height;
    let top_height = top.dimensions.height;
    let base_name = template_name(inventory, base_id);
    let top_name = template_name(inventory, top_id);

    if let Some(top) = inventory.get_mut(top_id) {
        top.placed = true;
        top.position = Vec3::new(base_position.x, base_height, base_position.z);
        top.rotation = base_rotation;
        top.stacked_on = Some(base_id);
        top.name = format!("{} (Stacked)", top_name);
    }

    if let Some(base) = inventory.get_mut(base_id) {
        base.stacked_with = Some(top_id);
        base.dimensions.height = base_height + top_height;
        base.name = format!("Double {}", base_name);
    }

    Ok(())
}

/// Break up the stack `id` belongs to, if any
///
/// Both units get their catalog name and height back and stand on the
/// floor. An upper unit whose base is going away stays placed at the same
/// footprint. Returns the partner's id; placement of `id` itself is left to
/// the caller.
pub fn unstack(inventory: &mut Inventory, id: ItemId) -> Option<ItemId> {
    let item = inventory.get(id)?;
    let (partner_id, partner_was_base) = match (item.stacked_on, item.stacked_with) {
        (Some(base), _) => (base, true),
        (None, Some(top)) => (top, false),
        (None, None) => return None,
    };

    let own = inventory.template(id)?.clone();
    let template = inventory.template(partner_id)?.clone();

    if let Some(item) = inventory.get_mut(id) {
        item.stacked_on = None;
        item.stacked_with = None;
        item.name = own.name;
        item.dimensions.height = own.dimensions.height;
        item.position.y = 0.0;
    }

    let partner = inventory.get_mut(partner_id)?;
    partner.name = template.name;
    partner.dimensions.height = template.dimensions.height;
    if partner_was_base {
        partner.stacked_with = None;
    } else {
        partner.stacked_on = None;
        partner.position.y = 0.0;
    }

    Some(partner_id)
}

fn template_name(inventory: &Inventory, id: ItemId) -> String {
    inventory
        .template(id)
        .map(|t| t.name.clone())
        .unwrap_or_default()
}
