//! Gacha - Gem-gated random item draws with duplicate refunds

use crate::catalog::{EquipmentCatalog, Item};
use crate::config::GachaConstants;
use crate::error::GameError;
use crate::player::PlayerState;
use crate::types::Rarity;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of a paid draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GachaOutcome {
    /// A new item was added at level 1
    Obtained { item: String, rarity: Rarity },
    /// Every item of the drawn tier is already owned; the cost was refunded
    Duplicate { rarity: Rarity, refunded: u64 },
}

/// Draws items from the catalog for a player
#[derive(Debug, Clone, Copy)]
pub struct Gacha<'a> {
    catalog: &'a EquipmentCatalog,
    constants: &'a GachaConstants,
}

impl<'a> Gacha<'a> {
    pub fn new(catalog: &'a EquipmentCatalog, constants: &'a GachaConstants) -> Self {
        Gacha { catalog, constants }
    }

    /// Gems charged per draw
    pub fn cost(&self) -> u64 {
        self.constants.cost
    }

    /// Spend gems on one draw
    ///
    /// Fails with `InsufficientCurrency` (nothing charged) when the player
    /// cannot pay. On a duplicate tier the cost is refunded, so the balance
    /// only stays debited when an item is obtained.
    pub fn pull(
        &self,
        player: &mut PlayerState,
        rng: &mut impl Rng,
    ) -> Result<GachaOutcome, GameError> {
        let cost = self.cost();
        if let Err(err) = player.debit_gems(cost) {
            tracing::warn!(%err, "gacha draw rejected");
            return Err(err);
        }

        let rarity = self.draw_rarity(rng);
        let outcome = match self.draw_from_tier(player, rarity, rng) {
            Some(item) => GachaOutcome::Obtained {
                item: item.name.clone(),
                rarity,
            },
            None => {
                player.credit_gems(cost);
                GachaOutcome::Duplicate {
                    rarity,
                    refunded: cost,
                }
            }
        };

        tracing::info!(?outcome, gems = player.gems(), "gacha draw");
        Ok(outcome)
    }

    /// Draw a rarity tier using the configured weights
    pub fn draw_rarity(&self, rng: &mut impl Rng) -> Rarity {
        let tiers = Rarity::all();
        let weights = &self.constants.rarity_weights;
        match WeightedIndex::new(tiers.iter().map(|&r| weights.weight(r))) {
            Ok(dist) => tiers[dist.sample(rng)],
            Err(err) => {
                tracing::warn!(%err, "invalid rarity weights, drawing uniformly");
                tiers[rng.gen_range(0..tiers.len())]
            }
        }
    }

    /// Add a random unowned item of `rarity` to the player at level 1
    ///
    /// Returns `None` without touching the inventory when every item of the
    /// tier is already owned.
    pub fn draw_from_tier(
        &self,
        player: &mut PlayerState,
        rarity: Rarity,
        rng: &mut impl Rng,
    ) -> Option<&'a Item> {
        let candidates: Vec<&'a Item> = self
            .catalog
            .by_rarity(rarity)
            .filter(|item| !player.owns(&item.name))
            .collect();

        let item = *candidates.choose(rng)?;
        player.add_owned_item(item);
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_catalog, RarityWeights};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn constants_only(rarity: Rarity) -> GachaConstants {
        GachaConstants {
            rarity_weights: RarityWeights::only(rarity),
            ..Default::default()
        }
    }

    #[test]
    fn test_insufficient_gems_is_rejected() {
        let catalog = default_catalog();
        let constants = GachaConstants::default();
        let gacha = Gacha::new(&catalog, &constants);
        let mut player = PlayerState::new();
        player.credit_gems(99);

        let err = gacha
            .pull(&mut player, &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientCurrency {
                required: 100,
                available: 99
            }
        );
        assert_eq!(player.gems(), 99);
        assert_eq!(player.owned_count(), 0);
    }

    #[test]
    fn test_duplicate_tier_refunds() {
        let catalog = default_catalog();
        let constants = constants_only(Rarity::Common);
        let gacha = Gacha::new(&catalog, &constants);
        let mut player = PlayerState::new();
        for item in catalog.by_rarity(Rarity::Common) {
            player.add_owned_item(item);
        }
        player.credit_gems(100);
        let owned_before = player.clone();

        let outcome = gacha
            .pull(&mut player, &mut StdRng::seed_from_u64(2))
            .unwrap();

        assert_eq!(
            outcome,
            GachaOutcome::Duplicate {
                rarity: Rarity::Common,
                refunded: 100
            }
        );
        assert_eq!(player.gems(), 100);
        assert_eq!(player, owned_before);
    }

    #[test]
    fn test_unowned_item_is_obtained() {
        let catalog = default_catalog();
        let constants = constants_only(Rarity::Rare);
        let gacha = Gacha::new(&catalog, &constants);
        let mut player = PlayerState::new();
        player.credit_gems(100);

        let outcome = gacha
            .pull(&mut player, &mut StdRng::seed_from_u64(3))
            .unwrap();

        let GachaOutcome::Obtained { item, rarity } = outcome else {
            panic!("expected an item, got {:?}", outcome);
        };
        assert_eq!(rarity, Rarity::Rare);
        assert_eq!(catalog.get(&item).map(|i| i.rarity), Some(Rarity::Rare));
        assert_eq!(player.level_of(&item), Some(1));
        assert_eq!(player.gems(), 0);
    }

    #[test]
    fn test_tier_draws_never_repeat() {
        let catalog = default_catalog();
        let constants = constants_only(Rarity::Epic);
        let gacha = Gacha::new(&catalog, &constants);
        let mut player = PlayerState::new();
        let mut rng = StdRng::seed_from_u64(4);

        let mut drawn = Vec::new();
        while let Some(item) = gacha.draw_from_tier(&mut player, Rarity::Epic, &mut rng) {
            assert!(!drawn.contains(&item.name));
            drawn.push(item.name.clone());
        }
        assert_eq!(drawn.len(), 4);
        assert_eq!(player.owned_count(), 4);
    }

    #[test]
    fn test_uniform_rarity_draws() {
        let catalog = default_catalog();
        let constants = GachaConstants::default();
        let gacha = Gacha::new(&catalog, &constants);
        let mut rng = StdRng::seed_from_u64(5);

        let draws = 50_000;
        let mut counts = [0u32; 5];
        for _ in 0..draws {
            let rarity = gacha.draw_rarity(&mut rng);
            let index = Rarity::all().iter().position(|&r| r == rarity).unwrap();
            counts[index] += 1;
        }
        for count in counts {
            let pct = count as f64 / draws as f64 * 100.0;
            assert!((pct - 20.0).abs() < 1.5, "tier share {:.2}%", pct);
        }
    }

    #[test]
    fn test_weighted_rarity_draws() {
        let catalog = default_catalog();
        let constants = GachaConstants {
            rarity_weights: RarityWeights {
                common: 9,
                rare: 0,
                epic: 0,
                legendary: 0,
                mythic: 1,
            },
            ..Default::default()
        };
        let gacha = Gacha::new(&catalog, &constants);
        let mut rng = StdRng::seed_from_u64(6);

        let mythic = (0..10_000)
            .filter(|_| gacha.draw_rarity(&mut rng) == Rarity::Mythic)
            .count();
        assert!((800..1200).contains(&mythic), "mythic draws: {}", mythic);
    }

    proptest! {
        #[test]
        fn prop_gem_accounting(seed in any::<u64>(), gems in 0u64..400, owned_mask in 0u16..(1 << 15)) {
            let catalog = default_catalog();
            let constants = GachaConstants::default();
            let gacha = Gacha::new(&catalog, &constants);
            let mut player = PlayerState::new();
            for (i, item) in catalog.items().iter().enumerate() {
                if owned_mask & (1 << i) != 0 {
                    player.add_owned_item(item);
                }
            }
            player.credit_gems(gems);
            let owned_before = player.owned_count();

            match gacha.pull(&mut player, &mut StdRng::seed_from_u64(seed)) {
                Ok(GachaOutcome::Obtained { item, .. }) => {
                    prop_assert_eq!(player.gems(), gems - 100);
                    prop_assert_eq!(player.owned_count(), owned_before + 1);
                    prop_assert_eq!(player.level_of(&item), Some(1));
                }
                Ok(GachaOutcome::Duplicate { .. }) => {
                    prop_assert_eq!(player.gems(), gems);
                    prop_assert_eq!(player.owned_count(), owned_before);
                }
                Err(_) => {
                    prop_assert!(gems < 100);
                    prop_assert_eq!(player.gems(), gems);
                    prop_assert_eq!(player.owned_count(), owned_before);
                }
            }
        }
    }
}
