//! Item arena split into the available and placed pools
//!
//! Every item instance is created once when the catalog is seeded and lives
//! for the whole session. Pool membership is the `placed` flag on the item,
//! so an item can never be in both pools or in neither.

use std::collections::BTreeMap;

use crate::core::types::{ItemId, ItemType};
use crate::kitchen::catalog::Catalog;
use crate::kitchen::item::{ItemDefinition, KitchenItem};

/// Storage for all item instances, indexed by [`ItemId`]
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<KitchenItem>,
    /// Definition each item was seeded from, same index as `items`
    templates: Vec<ItemDefinition>,
}

impl Inventory {
    /// Create one unplaced instance per catalog entry
    pub fn seed(catalog: &Catalog) -> Self {
        let templates = catalog.all().to_vec();
        let items = templates
            .iter()
            .enumerate()
            .map(|(i, def)| KitchenItem::from_definition(ItemId(i as u32), def))
            .collect();
        Self { items, templates }
    }

    pub fn get(&self, id: ItemId) -> Option<&KitchenItem> {
        self.items.get(id.index())
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut KitchenItem> {
        self.items.get_mut(id.index())
    }

    /// Catalog definition an item was created from
    pub fn template(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.templates.get(id.index())
    }

    /// Every item, placed or not
    pub fn items(&self) -> &[KitchenItem] {
        &self.items
    }

    /// Items still in inventory
    pub fn available(&self) -> impl Iterator<Item = &KitchenItem> {
        self.items.iter().filter(|item| !item.placed)
    }

    /// Items standing in the room
    pub fn placed(&self) -> impl Iterator<Item = &KitchenItem> {
        self.items.iter().filter(|item| item.placed)
    }

    /// Remaining count per type (types with nothing left are omitted)
    pub fn available_counts(&self) -> BTreeMap<ItemType, usize> {
        let mut counts = BTreeMap::new();
        for item in self.available() {
            *counts.entry(item.item_type).or_insert(0) += 1;
        }
        counts
    }

    /// Lowest-id available item of a type
    pub fn next_available(&self, item_type: ItemType) -> Option<ItemId> {
        self.available()
            .find(|item| item.item_type == item_type)
            .map(|item| item.id)
    }

    /// Number of placed items of a type
    pub fn placed_count(&self, item_type: ItemType) -> usize {
        self.placed()
            .filter(|item| item.item_type == item_type)
            .count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
