//! Core classification types shared across the arena

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item rarity tier, ordered from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// Get all rarities in ascending order
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythic,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monster difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Normal,
    Elite,
    Boss,
}

impl Grade {
    pub fn all() -> &'static [Grade] {
        &[Grade::Normal, Grade::Elite, Grade::Boss]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grade::Normal => "Normal",
            Grade::Elite => "Elite",
            Grade::Boss => "Boss",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Roll a percentage check: uniform 1..=100 compared against `chance`
///
/// A chance of 0 never succeeds, 100 or more always succeeds.
pub fn roll(chance: u32, rng: &mut impl rand::Rng) -> bool {
    rng.gen_range(1..=100u32) <= chance
}
