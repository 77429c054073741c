//! PlayerState - Currencies, inventory and the equipped slot

use crate::catalog::{EquipmentCatalog, Item};
use crate::error::GameError;
use crate::types::Rarity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mutable per-session player data
///
/// Invariant: `equipped`, when set, names an owned item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    gold: u64,
    gems: u64,
    enhance_stones: u64,
    /// Owned item name -> level (always >= 1)
    owned: BTreeMap<String, u32>,
    equipped: Option<String>,
}

impl PlayerState {
    /// Create a fresh player with no currency and an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn gems(&self) -> u64 {
        self.gems
    }

    pub fn enhance_stones(&self) -> u64 {
        self.enhance_stones
    }

    pub fn credit_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn credit_gems(&mut self, amount: u64) {
        self.gems = self.gems.saturating_add(amount);
    }

    pub fn credit_enhance_stones(&mut self, amount: u64) {
        self.enhance_stones = self.enhance_stones.saturating_add(amount);
    }

    /// Remove gems, leaving the balance untouched when it is too small
    pub fn debit_gems(&mut self, amount: u64) -> Result<(), GameError> {
        if self.gems < amount {
            return Err(GameError::InsufficientCurrency {
                required: amount,
                available: self.gems,
            });
        }
        self.gems -= amount;
        Ok(())
    }

    /// Add an item at level 1. Returns false (and changes nothing) if it
    /// is already owned.
    pub fn add_owned_item(&mut self, item: &Item) -> bool {
        if self.owned.contains_key(&item.name) {
            return false;
        }
        self.owned.insert(item.name.clone(), 1);
        true
    }

    pub fn owns(&self, name: &str) -> bool {
        self.owned.contains_key(name)
    }

    pub fn level_of(&self, name: &str) -> Option<u32> {
        self.owned.get(name).copied()
    }

    /// Owned items as (name, level), sorted by name
    pub fn owned(&self) -> impl Iterator<Item = (&str, u32)> {
        self.owned.iter().map(|(name, &level)| (name.as_str(), level))
    }

    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    /// Equip an owned item, replacing whatever was equipped
    pub fn set_equipped(&mut self, name: &str) -> Result<(), GameError> {
        if !self.owns(name) {
            return Err(GameError::EquipNotOwned(name.to_string()));
        }
        self.equipped = Some(name.to_string());
        Ok(())
    }

    /// Clear the equipped slot, returning the previous item name
    pub fn unequip(&mut self) -> Option<String> {
        self.equipped.take()
    }

    pub fn equipped(&self) -> Option<&str> {
        self.equipped.as_deref()
    }

    /// Resolve the equipped item against the catalog
    pub fn equipped_item<'c>(&self, catalog: &'c EquipmentCatalog) -> Option<&'c Item> {
        self.equipped().and_then(|name| catalog.get(name))
    }

    /// Number of owned items per rarity, in rarity order
    pub fn count_owned_by_rarity(&self, catalog: &EquipmentCatalog) -> BTreeMap<Rarity, usize> {
        let mut counts: BTreeMap<Rarity, usize> = Rarity::all().iter().map(|&r| (r, 0)).collect();
        for name in self.owned.keys() {
            if let Some(item) = catalog.get(name) {
                *counts.entry(item.rarity).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Effect;
    use proptest::prelude::*;

    fn item(name: &str, rarity: Rarity) -> Item {
        Item {
            name: name.to_string(),
            rarity,
            description: String::new(),
            effect: Effect::HpPlus(5),
        }
    }

    #[test]
    fn test_new_player_is_empty() {
        let player = PlayerState::new();
        assert_eq!((player.gold(), player.gems(), player.enhance_stones()), (0, 0, 0));
        assert_eq!(player.owned_count(), 0);
        assert!(player.equipped().is_none());
    }

    #[test]
    fn test_debit_gems() {
        let mut player = PlayerState::new();
        player.credit_gems(150);
        assert!(player.debit_gems(100).is_ok());
        assert_eq!(player.gems(), 50);

        let err = player.debit_gems(100).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientCurrency {
                required: 100,
                available: 50
            }
        );
        assert_eq!(player.gems(), 50);
    }

    #[test]
    fn test_add_owned_item_is_idempotent() {
        let mut player = PlayerState::new();
        let nails = item("Nails", Rarity::Common);
        assert!(player.add_owned_item(&nails));
        assert!(!player.add_owned_item(&nails));
        assert_eq!(player.owned_count(), 1);
        assert_eq!(player.level_of("Nails"), Some(1));
    }

    #[test]
    fn test_equip_not_owned_is_rejected() {
        let mut player = PlayerState::new();
        player.add_owned_item(&item("Chain", Rarity::Rare));
        player.set_equipped("Chain").unwrap();

        let err = player.set_equipped("Claw").unwrap_err();
        assert_eq!(err, GameError::EquipNotOwned("Claw".to_string()));
        assert_eq!(player.equipped(), Some("Chain"));
    }

    #[test]
    fn test_equip_replaces_single_slot() {
        let mut player = PlayerState::new();
        player.add_owned_item(&item("Chain", Rarity::Rare));
        player.add_owned_item(&item("Nails", Rarity::Common));
        player.set_equipped("Chain").unwrap();
        player.set_equipped("Nails").unwrap();
        assert_eq!(player.equipped(), Some("Nails"));
        assert_eq!(player.unequip().as_deref(), Some("Nails"));
        assert!(player.equipped().is_none());
    }

    #[test]
    fn test_count_owned_by_rarity() {
        let catalog = EquipmentCatalog::new(vec![
            item("A", Rarity::Common),
            item("B", Rarity::Common),
            item("C", Rarity::Mythic),
        ])
        .unwrap();
        let mut player = PlayerState::new();
        for it in catalog.items() {
            player.add_owned_item(it);
        }

        let counts = player.count_owned_by_rarity(&catalog);
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[&Rarity::Common], 2);
        assert_eq!(counts[&Rarity::Epic], 0);
        assert_eq!(counts[&Rarity::Mythic], 1);
    }

    proptest! {
        #[test]
        fn prop_add_owned_never_changes_existing(names in proptest::collection::vec("[a-e]", 1..40)) {
            let mut player = PlayerState::new();
            for name in &names {
                let before = player.owned_count();
                let was_owned = player.owns(name);
                let added = player.add_owned_item(&item(name, Rarity::Common));
                prop_assert_eq!(added, !was_owned);
                prop_assert_eq!(player.owned_count(), before + usize::from(added));
                prop_assert_eq!(player.level_of(name), Some(1));
            }
        }

        #[test]
        fn prop_debit_never_goes_negative(start in 0u64..500, amount in 0u64..500) {
            let mut player = PlayerState::new();
            player.credit_gems(start);
            match player.debit_gems(amount) {
                Ok(()) => prop_assert_eq!(player.gems(), start - amount),
                Err(_) => {
                    prop_assert!(amount > start);
                    prop_assert_eq!(player.gems(), start);
                }
            }
        }
    }
}
