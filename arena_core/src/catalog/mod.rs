//! Equipment catalog - Immutable registry of every obtainable item

mod item;

pub use item::{Effect, Item};

use crate::config::ConfigError;
use crate::types::Rarity;
use std::collections::HashMap;

/// Read-only item registry, built once at startup
///
/// Items keep their declaration order so that random draws over a rarity
/// tier are reproducible for a given seed.
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl EquipmentCatalog {
    /// Build a catalog from items, rejecting duplicate or empty names
    pub fn new(items: Vec<Item>) -> Result<Self, ConfigError> {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "item #{} has an empty name", i
                )));
            }
            if index.insert(item.name.clone(), i).is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate item name: {}", item.name
                )));
            }
        }
        Ok(EquipmentCatalog { items, index })
    }

    /// Look up an item by name
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All items in declaration order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items of one rarity tier, in declaration order
    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.rarity == rarity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
