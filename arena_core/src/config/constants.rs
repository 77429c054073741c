//! Game constants configuration

use super::ConfigError;
use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub effects: EffectConstants,
    #[serde(default)]
    pub gacha: GachaConstants,
    #[serde(default)]
    pub grades: GradeThresholds,
    #[serde(default)]
    pub pvp: PvpConstants,
}

impl GameConstants {
    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.combat.player_base_hp == 0 {
            return Err(ConfigError::ValidationError(
                "combat.player_base_hp must be positive".to_string(),
            ));
        }
        if self.combat.crit_multiplier < 1.0 || self.combat.monster_crit_multiplier < 1.0 {
            return Err(ConfigError::ValidationError(
                "crit multipliers must be at least 1.0".to_string(),
            ));
        }
        if self.grades.normal_max > self.grades.elite_max || self.grades.elite_max > 100 {
            return Err(ConfigError::ValidationError(format!(
                "grade thresholds must satisfy normal_max <= elite_max <= 100 (got {} / {})",
                self.grades.normal_max, self.grades.elite_max
            )));
        }
        if self.pvp.starting_hp == 0 {
            return Err(ConfigError::ValidationError(
                "pvp.starting_hp must be positive".to_string(),
            ));
        }
        if self.pvp.hit_chance == 0 || self.pvp.damage == 0 {
            return Err(ConfigError::ValidationError(
                "pvp.hit_chance and pvp.damage must be positive or a duel never ends".to_string(),
            ));
        }
        if self.gacha.rarity_weights.total() == 0 {
            return Err(ConfigError::ValidationError(
                "gacha.rarity_weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Player HP at the start of every battle, before equipment
    #[serde(default = "default_player_base_hp")]
    pub player_base_hp: u32,
    /// Player crit chance in percent
    #[serde(default = "default_player_base_crit")]
    pub player_base_crit: u32,
    /// Damage multiplier for player crits
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    /// Monster hit chance in percent
    #[serde(default = "default_monster_hit_chance")]
    pub monster_hit_chance: u32,
    /// Damage multiplier for monster crits
    #[serde(default = "default_crit_multiplier")]
    pub monster_crit_multiplier: f64,
    /// Chance in percent that Guard blocks a landed monster hit
    #[serde(default = "default_guard_block_chance")]
    pub guard_block_chance: u32,
    /// Gold credited on victory
    #[serde(default = "default_victory_gold")]
    pub victory_gold: u64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            player_base_hp: default_player_base_hp(),
            player_base_crit: default_player_base_crit(),
            crit_multiplier: default_crit_multiplier(),
            monster_hit_chance: default_monster_hit_chance(),
            monster_crit_multiplier: default_crit_multiplier(),
            guard_block_chance: default_guard_block_chance(),
            victory_gold: default_victory_gold(),
        }
    }
}

fn default_player_base_hp() -> u32 {
    100
}
fn default_player_base_crit() -> u32 {
    20
}
fn default_crit_multiplier() -> f64 {
    2.0
}
fn default_monster_hit_chance() -> u32 {
    80
}
fn default_guard_block_chance() -> u32 {
    70
}
fn default_victory_gold() -> u64 {
    1000
}

/// Magnitudes for effects whose catalog entry carries no payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectConstants {
    #[serde(default = "default_bleed_damage")]
    pub bleed_damage: u32,
    #[serde(default = "default_gauntlet_chance")]
    pub gauntlet_chance: u32,
    #[serde(default = "default_gauntlet_bonus_damage")]
    pub gauntlet_bonus_damage: u32,
    #[serde(default = "default_spirit_fist_chance")]
    pub spirit_fist_chance: u32,
    #[serde(default = "default_spirit_fist_heal")]
    pub spirit_fist_heal: u32,
}

impl Default for EffectConstants {
    fn default() -> Self {
        EffectConstants {
            bleed_damage: default_bleed_damage(),
            gauntlet_chance: default_gauntlet_chance(),
            gauntlet_bonus_damage: default_gauntlet_bonus_damage(),
            spirit_fist_chance: default_spirit_fist_chance(),
            spirit_fist_heal: default_spirit_fist_heal(),
        }
    }
}

fn default_bleed_damage() -> u32 {
    2
}
fn default_gauntlet_chance() -> u32 {
    40
}
fn default_gauntlet_bonus_damage() -> u32 {
    10
}
fn default_spirit_fist_chance() -> u32 {
    50
}
fn default_spirit_fist_heal() -> u32 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GachaConstants {
    /// Gems spent per draw
    #[serde(default = "default_gacha_cost")]
    pub cost: u64,
    /// Relative weight of each rarity tier (uniform by default)
    #[serde(default)]
    pub rarity_weights: RarityWeights,
}

impl Default for GachaConstants {
    fn default() -> Self {
        GachaConstants {
            cost: default_gacha_cost(),
            rarity_weights: RarityWeights::default(),
        }
    }
}

fn default_gacha_cost() -> u64 {
    100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityWeights {
    #[serde(default = "default_weight")]
    pub common: u32,
    #[serde(default = "default_weight")]
    pub rare: u32,
    #[serde(default = "default_weight")]
    pub epic: u32,
    #[serde(default = "default_weight")]
    pub legendary: u32,
    #[serde(default = "default_weight")]
    pub mythic: u32,
}

impl Default for RarityWeights {
    fn default() -> Self {
        RarityWeights {
            common: 1,
            rare: 1,
            epic: 1,
            legendary: 1,
            mythic: 1,
        }
    }
}

fn default_weight() -> u32 {
    1
}

impl RarityWeights {
    /// Weight for a single tier
    pub fn weight(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythic => self.mythic,
        }
    }

    pub fn total(&self) -> u64 {
        Rarity::all().iter().map(|&r| self.weight(r) as u64).sum()
    }

    /// Weights where only `rarity` can be drawn
    pub fn only(rarity: Rarity) -> Self {
        let mut weights = RarityWeights {
            common: 0,
            rare: 0,
            epic: 0,
            legendary: 0,
            mythic: 0,
        };
        match rarity {
            Rarity::Common => weights.common = 1,
            Rarity::Rare => weights.rare = 1,
            Rarity::Epic => weights.epic = 1,
            Rarity::Legendary => weights.legendary = 1,
            Rarity::Mythic => weights.mythic = 1,
        }
        weights
    }
}

/// Cumulative thresholds on a 1..=100 roll that pick a monster grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeThresholds {
    /// Rolls up to this value are Normal
    #[serde(default = "default_normal_max")]
    pub normal_max: u32,
    /// Rolls above `normal_max` up to this value are Elite, the rest Boss
    #[serde(default = "default_elite_max")]
    pub elite_max: u32,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        GradeThresholds {
            normal_max: default_normal_max(),
            elite_max: default_elite_max(),
        }
    }
}

fn default_normal_max() -> u32 {
    80
}
fn default_elite_max() -> u32 {
    95
}

/// Hot-seat duel rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvpConstants {
    #[serde(default = "default_pvp_starting_hp")]
    pub starting_hp: u32,
    #[serde(default = "default_pvp_hit_chance")]
    pub hit_chance: u32,
    #[serde(default = "default_pvp_damage")]
    pub damage: u32,
}

impl Default for PvpConstants {
    fn default() -> Self {
        PvpConstants {
            starting_hp: default_pvp_starting_hp(),
            hit_chance: default_pvp_hit_chance(),
            damage: default_pvp_damage(),
        }
    }
}

fn default_pvp_starting_hp() -> u32 {
    100
}
fn default_pvp_hit_chance() -> u32 {
    80
}
fn default_pvp_damage() -> u32 {
    10
}
