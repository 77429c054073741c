//! Effect resolution - Turn an equipped item's effect into combat modifiers

use crate::catalog::{Effect, Item};
use crate::config::EffectConstants;
use serde::{Deserialize, Serialize};

/// A chance-on-hit trigger with a magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnHitProc {
    /// Trigger chance in percent
    pub chance: u32,
    pub amount: u32,
}

/// Modifiers consumed by turn resolution
///
/// The default value is neutral: a battle without equipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatModifiers {
    // === Offense ===
    /// Percentage points added to every action's hit chance
    pub hit_bonus: u32,
    /// Percentage points added to the player's crit chance
    pub crit_bonus: u32,
    /// Added to the player's crit multiplier
    pub crit_multiplier_bonus: f64,
    /// Flat damage on every successful hit
    pub flat_damage: u32,
    /// Flat damage on the first successful hit of the battle only
    pub first_hit_bonus: u32,
    /// Damage dealt to the monster every turn regardless of the action
    pub bleed_per_turn: u32,
    /// Bonus damage plus a stun on the monster's next turn
    pub stun_strike: Option<OnHitProc>,

    // === Defense ===
    /// Added to max HP at the start of the battle
    pub max_hp_bonus: u32,
    /// Subtracted from every landed monster hit
    pub damage_reduction: u32,
    /// Percentage points subtracted from the monster's hit chance
    pub enemy_hit_penalty: u32,
    /// Percentage points added to Guard's block chance
    pub guard_bonus: u32,

    // === Recovery ===
    /// Heal on hit
    pub life_steal: Option<OnHitProc>,
}

impl CombatModifiers {
    /// Resolve the modifiers for the (optional) equipped item
    pub fn resolve(equipped: Option<&Item>, constants: &EffectConstants) -> Self {
        let mut mods = CombatModifiers::default();
        if let Some(item) = equipped {
            mods.apply_effect(&item.effect, constants);
        }
        mods
    }

    /// Fold a single effect into these modifiers
    pub fn apply_effect(&mut self, effect: &Effect, constants: &EffectConstants) {
        match *effect {
            Effect::HitPp(pp) => self.hit_bonus = self.hit_bonus.saturating_add(pp),
            Effect::DmgReduce(amount) => self.damage_reduction = self.damage_reduction.saturating_add(amount),
            Effect::HpPlus(amount) => self.max_hp_bonus = self.max_hp_bonus.saturating_add(amount),
            Effect::CritPp(pp) => self.crit_bonus = self.crit_bonus.saturating_add(pp),
            Effect::ClockFirstHitBonus(amount) => self.first_hit_bonus = self.first_hit_bonus.saturating_add(amount),
            Effect::CritMultBonus(bonus) => self.crit_multiplier_bonus += bonus,
            Effect::EnemyHitMinusPp(pp) => self.enemy_hit_penalty = self.enemy_hit_penalty.saturating_add(pp),
            Effect::GuardPp(pp) => self.guard_bonus = self.guard_bonus.saturating_add(pp),
            Effect::DmgFlat(amount) => self.flat_damage = self.flat_damage.saturating_add(amount),
            Effect::ClawBleed => {
                self.bleed_per_turn = self.bleed_per_turn.saturating_add(constants.bleed_damage)
            }
            Effect::Gauntlet => {
                self.stun_strike = Some(OnHitProc {
                    chance: constants.gauntlet_chance,
                    amount: constants.gauntlet_bonus_damage,
                })
            }
            Effect::SpiritFist => {
                self.life_steal = Some(OnHitProc {
                    chance: constants.spirit_fist_chance,
                    amount: constants.spirit_fist_heal,
                })
            }
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == CombatModifiers::default()
    }
}
