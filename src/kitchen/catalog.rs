//! Fixed catalog of placeable items

use std::collections::HashSet;

use crate::core::types::{Dimensions, ItemType};
use crate::kitchen::item::ItemDefinition;

/// Standard depth of counter-height units
pub const CABINET_DEPTH: f32 = 0.6;

/// Standard height of counter-height units
pub const CABINET_HEIGHT: f32 = 0.9;

/// Number of countertop cabinets in the standard catalog
pub const COUNTERTOP_COUNT: usize = 10;

/// Ordered list of item templates; one item instance is seeded per entry
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    definitions: Vec<ItemDefinition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard kitchen set: 2 sinks, 1 stove, 2 ovens, 1 refrigerator
    /// and 10 countertop cabinets
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.add(ItemDefinition::new(
            ItemType::Sink,
            "Main Sink",
            Dimensions::new(0.8, CABINET_DEPTH, CABINET_HEIGHT),
        ));
        catalog.add(ItemDefinition::new(
            ItemType::Sink,
            "Prep Sink",
            Dimensions::new(0.6, CABINET_DEPTH, CABINET_HEIGHT),
        ));

        catalog.add(ItemDefinition::new(
            ItemType::Stove,
            "Stove",
            Dimensions::new(0.6, CABINET_DEPTH, CABINET_HEIGHT),
        ));

        for n in 1..=2 {
            catalog.add(ItemDefinition::new(
                ItemType::Oven,
                format!("Wall Oven {}", n),
                Dimensions::new(0.6, CABINET_DEPTH, 0.6),
            ));
        }

        catalog.add(ItemDefinition::new(
            ItemType::Refrigerator,
            "Refrigerator",
            Dimensions::new(0.9, 0.7, 1.8),
        ));

        for n in 1..=COUNTERTOP_COUNT {
            catalog.add(ItemDefinition::new(
                ItemType::Countertop,
                format!("Countertop Cabinet {}", n),
                Dimensions::new(0.6, CABINET_DEPTH, CABINET_HEIGHT),
            ));
        }

        catalog
    }

    /// Add a definition to the catalog
    pub fn add(&mut self, definition: ItemDefinition) {
        self.definitions.push(definition);
    }

    /// All definitions in seeding order
    pub fn all(&self) -> &[ItemDefinition] {
        &self.definitions
    }

    /// Definitions of a single type
    pub fn of_type(&self, item_type: ItemType) -> impl Iterator<Item = &ItemDefinition> {
        self.definitions
            .iter()
            .filter(move |d| d.item_type == item_type)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Names identify items in drag feedback and reports, so they must be
    /// unique
    pub fn validate(&self) -> std::result::Result<(), String> {
        let mut seen = HashSet::new();
        for definition in &self.definitions {
            if !seen.insert(definition.name.as_str()) {
                return Err(format!("Duplicate catalog name: {}", definition.name));
            }
        }
        Ok(())
    }
}
