//! Item - Immutable equipment definition

use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// A single equipment entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the item's identity
    pub name: String,
    pub rarity: Rarity,
    /// Short description shown to the player
    #[serde(default)]
    pub description: String,
    /// The combat modifier granted while equipped
    pub effect: Effect,
}

/// Combat modifier carried by an item
///
/// Percentage payloads are percentage points added to (or subtracted from)
/// a base chance. Unit variants take their magnitudes from
/// [`EffectConstants`](crate::config::EffectConstants).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Added to the player's hit chance
    HitPp(u32),
    /// Subtracted from every hit the player takes
    DmgReduce(u32),
    /// Added to the player's max HP
    HpPlus(u32),
    /// Added to the player's crit chance
    CritPp(u32),
    /// Flat damage added to the first successful hit of a battle
    ClockFirstHitBonus(u32),
    /// Added to the crit multiplier
    CritMultBonus(f64),
    /// Subtracted from the monster's hit chance
    EnemyHitMinusPp(u32),
    /// Added to Guard's block chance
    GuardPp(u32),
    /// Flat damage added to every successful hit
    DmgFlat(u32),
    /// Monster bleeds every turn
    ClawBleed,
    /// Chance per hit for bonus damage and a monster stun
    Gauntlet,
    /// Chance per hit to heal the player
    SpiritFist,
}

impl Effect {
    /// Stable identifier matching the configuration key
    pub fn key(&self) -> &'static str {
        match self {
            Effect::HitPp(_) => "hit_pp",
            Effect::DmgReduce(_) => "dmg_reduce",
            Effect::HpPlus(_) => "hp_plus",
            Effect::CritPp(_) => "crit_pp",
            Effect::ClockFirstHitBonus(_) => "clock_first_hit_bonus",
            Effect::CritMultBonus(_) => "crit_mult_bonus",
            Effect::EnemyHitMinusPp(_) => "enemy_hit_minus_pp",
            Effect::GuardPp(_) => "guard_pp",
            Effect::DmgFlat(_) => "dmg_flat",
            Effect::ClawBleed => "claw_bleed",
            Effect::Gauntlet => "gauntlet",
            Effect::SpiritFist => "spirit_fist",
        }
    }
}
