//! Kitchen world - owns the item pools and the latest triangle report
//!
//! All mutation goes through [`KitchenWorld`]. Every mutating command ends
//! by re-running triangle validation, so the report is always in step with
//! the item pools when the command returns.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::config::{PlannerConfig, RoomConfig};
use crate::core::error::{PlannerError, Result};
use crate::core::types::{ItemId, ItemType};
use crate::kitchen::catalog::Catalog;
use crate::kitchen::inventory::Inventory;
use crate::kitchen::item::KitchenItem;
use crate::placement::{
    compute_fill, plan_resize, stack_ovens, unstack, validate_placement, FillResult,
    PlacementCheck, PlacementRequest, ResizePlan,
};
use crate::triangle::{drag_validation, validate_triangle, DragValidation, TriangleReport};

/// What `place_item` did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// Item moved from inventory into the room
    Placed,
    /// Countertop cap already reached; nothing changed
    CabinetLimitReached,
}

/// The session state of one kitchen design
pub struct KitchenWorld {
    room: RoomConfig,
    config: PlannerConfig,
    catalog: Catalog,
    inventory: Inventory,
    /// Type chosen in the UI for the next placement
    selected: Option<ItemType>,
    report: TriangleReport,
    completed: bool,
}

impl KitchenWorld {
    /// Create a world seeded with the standard catalog
    pub fn new(room: RoomConfig, config: PlannerConfig) -> Result<Self> {
        Self::with_catalog(room, config, Catalog::standard())
    }

    /// Create a world seeded from a custom catalog
    pub fn with_catalog(room: RoomConfig, config: PlannerConfig, catalog: Catalog) -> Result<Self> {
        room.validate().map_err(PlannerError::InvalidConfig)?;
        config.validate().map_err(PlannerError::InvalidConfig)?;
        catalog.validate().map_err(PlannerError::InvalidConfig)?;

        let inventory = Inventory::seed(&catalog);
        tracing::debug!(
            "Seeded {} items for a {}m x {}m room",
            inventory.len(),
            room.width,
            room.length
        );

        Ok(Self {
            room,
            config,
            catalog,
            inventory,
            selected: None,
            report: TriangleReport::incomplete(),
            completed: false,
        })
    }

    /// Put every item back in inventory and forget the session state
    pub fn reset(&mut self) {
        self.inventory = Inventory::seed(&self.catalog);
        self.selected = None;
        self.report = TriangleReport::incomplete();
        self.completed = false;
        tracing::debug!("Kitchen reset");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn room(&self) -> &RoomConfig {
        &self.room
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn item(&self, id: ItemId) -> Option<&KitchenItem> {
        self.inventory.get(id)
    }

    /// Every item, in id order
    pub fn items(&self) -> &[KitchenItem] {
        self.inventory.items()
    }

    pub fn available_items(&self) -> impl Iterator<Item = &KitchenItem> {
        self.inventory.available()
    }

    pub fn placed_items(&self) -> impl Iterator<Item = &KitchenItem> {
        self.inventory.placed()
    }

    /// Remaining inventory per type
    pub fn available_counts(&self) -> BTreeMap<ItemType, usize> {
        self.inventory.available_counts()
    }

    pub fn selected(&self) -> Option<ItemType> {
        self.selected
    }

    /// Latest triangle validation
    pub fn triangle_report(&self) -> &TriangleReport {
        &self.report
    }

    /// Whether the user has signed off on the design
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Legality of putting an item at a position, optionally at a new width
    pub fn check_placement(
        &self,
        id: ItemId,
        position: Vec3,
        rotation: f32,
        width: Option<f32>,
    ) -> Result<PlacementCheck> {
        let item = self.inventory.get(id).ok_or(PlannerError::ItemNotFound(id))?;
        let request = PlacementRequest {
            position,
            rotation,
            width: width.unwrap_or(item.dimensions.width),
            depth: item.dimensions.depth,
            exclude: Some(id),
        };
        Ok(validate_placement(
            self.inventory.items(),
            &self.room,
            &self.config,
            &request,
        ))
    }

    /// Width and center a cabinet would take to fill its gap
    pub fn compute_fill(&self, position: Vec3, rotation: f32, exclude: Option<ItemId>) -> FillResult {
        compute_fill(
            self.inventory.items(),
            &self.room,
            &self.config,
            position,
            rotation,
            exclude,
        )
    }

    /// Distances from a hypothetical position to the placed triangle partners
    pub fn drag_validation(&self, candidate: Vec3, item_type: ItemType) -> DragValidation {
        drag_validation(self.inventory.items(), candidate, item_type, &self.config)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Choose a type for the next placement
    ///
    /// Returns the item that will be placed.
    pub fn select_item(&mut self, item_type: ItemType) -> Result<ItemId> {
        let id = self
            .inventory
            .next_available(item_type)
            .ok_or(PlannerError::NothingAvailable(item_type))?;
        self.selected = Some(item_type);
        tracing::debug!("Selected {} ({})", item_type, id);
        Ok(id)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move an item from inventory into the room
    ///
    /// No geometry checks happen here; callers use [`Self::check_placement`]
    /// first. Without a rotation the catalog default is used.
    pub fn place_item(
        &mut self,
        id: ItemId,
        position: Vec3,
        rotation: Option<f32>,
    ) -> Result<PlaceOutcome> {
        let item = self.inventory.get(id).ok_or(PlannerError::ItemNotFound(id))?;
        if item.placed {
            return Err(PlannerError::ItemNotAvailable(id));
        }

        let item_type = item.item_type;
        if item_type == ItemType::Countertop
            && self.inventory.placed_count(ItemType::Countertop) >= self.config.max_placed_countertops
        {
            tracing::warn!(
                "Cabinet limit of {} reached, not placing {}",
                self.config.max_placed_countertops,
                id
            );
            return Ok(PlaceOutcome::CabinetLimitReached);
        }

        let default_rotation = self
            .inventory
            .template(id)
            .map(|t| t.rotation)
            .unwrap_or_default();

        if let Some(item) = self.inventory.get_mut(id) {
            item.placed = true;
            item.position = position;
            item.rotation = rotation.unwrap_or(default_rotation);
            tracing::debug!("Placed {} ({}) at {:?}", item.name, id, position);
        }

        if self.selected == Some(item_type) {
            self.selected = None;
        }

        self.revalidate();
        Ok(PlaceOutcome::Placed)
    }

    /// Send a placed item back to inventory
    ///
    /// Removing either oven of a stack breaks the stack first. Completion is
    /// always withdrawn.
    pub fn remove_item(&mut self, id: ItemId) -> Result<()> {
        let item = self.inventory.get(id).ok_or(PlannerError::ItemNotFound(id))?;
        if !item.placed {
            return Err(PlannerError::ItemNotPlaced(id));
        }

        if let Some(partner) = unstack(&mut self.inventory, id) {
            tracing::debug!("Unstacked {} from {}", partner, id);
        }

        if let Some(item) = self.inventory.get_mut(id) {
            item.reset();
            tracing::debug!("Removed {} ({})", item.name, id);
        }

        self.completed = false;
        self.revalidate();
        Ok(())
    }

    /// Change a placed cabinet's width, re-centering it on large changes
    pub fn update_cabinet_size(&mut self, id: ItemId, width: f32) -> Result<ResizePlan> {
        if !(width.is_finite() && width > 0.0) {
            return Err(PlannerError::InvalidWidth(width));
        }

        let cabinet = self.inventory.get(id).ok_or(PlannerError::ItemNotFound(id))?;
        if cabinet.item_type != ItemType::Countertop {
            return Err(PlannerError::NotACabinet(id));
        }
        if !cabinet.placed {
            return Err(PlannerError::ItemNotPlaced(id));
        }

        let plan = plan_resize(
            self.inventory.items(),
            &self.room,
            &self.config,
            cabinet,
            width,
        );

        if let Some(cabinet) = self.inventory.get_mut(id) {
            cabinet.dimensions.width = plan.width;
            cabinet.position = plan.position;
        }
        tracing::debug!(
            "Resized {} to {:.3}m (recentered: {})",
            id,
            plan.width,
            plan.recentered
        );

        self.revalidate();
        Ok(plan)
    }

    /// Stack oven `top` onto the placed oven `base`
    pub fn update_oven_stack(&mut self, base: ItemId, top: ItemId) -> Result<()> {
        if let Err(err) = stack_ovens(&mut self.inventory, base, top) {
            tracing::warn!("Rejected oven stack {} + {}: {}", base, top, err);
            return Err(err);
        }
        tracing::debug!("Stacked {} on {}", top, base);

        self.revalidate();
        Ok(())
    }

    /// Sign off on the design
    ///
    /// Only allowed while the triangle is complete and valid.
    pub fn mark_complete(&mut self) -> Result<()> {
        if !self.report.is_complete {
            tracing::warn!("Completion refused: triangle incomplete");
            return Err(PlannerError::TriangleNotSatisfied(
                "sink, stove and refrigerator must all be placed".into(),
            ));
        }
        if !self.report.is_valid {
            tracing::warn!("Completion refused: {} violation(s)", self.report.violations.len());
            return Err(PlannerError::TriangleNotSatisfied(
                self.report.violations.join("; "),
            ));
        }

        self.completed = true;
        tracing::info!("Kitchen design marked complete");
        Ok(())
    }

    /// Recompute the triangle report after a mutation
    fn revalidate(&mut self) {
        let report = validate_triangle(self.inventory.items(), &self.config);

        if report.is_valid && !self.report.is_valid {
            tracing::info!("Work triangle is now valid");
        } else if report.is_complete && !report.is_valid {
            tracing::debug!("Work triangle has {} violation(s)", report.violations.len());
        }

        if self.completed && !report.is_valid {
            tracing::info!("Completion withdrawn: triangle no longer valid");
            self.completed = false;
        }

        self.report = report;
    }
}
