//! Turn resolution - Pure state transition for one battle turn

use super::{BattleEvent, BattleOutcome, PlayerAction};
use crate::config::CombatConstants;
use crate::effect::CombatModifiers;
use crate::monster::Monster;
use crate::types::roll;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything fixed for the duration of one battle
#[derive(Debug, Clone, PartialEq)]
pub struct BattleContext {
    pub constants: CombatConstants,
    pub modifiers: CombatModifiers,
}

impl BattleContext {
    pub fn new(constants: CombatConstants, modifiers: CombatModifiers) -> Self {
        BattleContext {
            constants,
            modifiers,
        }
    }

    /// Player HP at battle start
    pub fn player_max_hp(&self) -> u32 {
        self.constants
            .player_base_hp
            .saturating_add(self.modifiers.max_hp_bonus)
    }
}

/// Snapshot of a battle between turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub monster: Monster,
    pub player_hp: u32,
    pub player_max_hp: u32,
    /// Turns resolved so far
    pub turn: u32,
    /// Whether the one-shot first-hit bonus has been spent
    pub first_hit_landed: bool,
    /// Monster skips its next turn
    pub monster_stunned: bool,
    pub outcome: BattleOutcome,
}

impl BattleState {
    /// Start a battle with the player at full HP
    pub fn new(monster: Monster, ctx: &BattleContext) -> Self {
        let max_hp = ctx.player_max_hp();
        BattleState {
            monster,
            player_hp: max_hp,
            player_max_hp: max_hp,
            turn: 0,
            first_hit_landed: false,
            monster_stunned: false,
            outcome: BattleOutcome::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    fn heal_player(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.player_max_hp - self.player_hp);
        self.player_hp += healed;
        healed
    }

    fn damage_player(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.player_hp);
        self.player_hp -= dealt;
        dealt
    }
}

/// Resolve one turn (immutable API)
///
/// Returns the new battle state and the events of the turn, in order:
/// 1. Player action: Guard, or hit roll then crit roll and on-hit bonuses
/// 2. Per-turn bleed on the monster
/// 3. Victory check (the monster does not retaliate when it dies)
/// 4. Monster attack: stun skip, hit roll, crit roll, Guard block, reduction
/// 5. Defeat check
///
/// A finished battle is returned unchanged with no events.
pub fn resolve_turn(
    state: &BattleState,
    action: PlayerAction,
    ctx: &BattleContext,
    rng: &mut impl Rng,
) -> (BattleState, Vec<BattleEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();
    if state.is_over() {
        return (next, events);
    }

    let constants = &ctx.constants;
    let mods = &ctx.modifiers;
    next.turn = next.turn.saturating_add(1);

    // Step 1: Player action
    match action.attack() {
        None => events.push(BattleEvent::Guarded),
        Some(profile) => {
            if roll(profile.hit_chance.saturating_add(mods.hit_bonus), rng) {
                let critical = roll(constants.player_base_crit.saturating_add(mods.crit_bonus), rng);
                let mut damage = if critical {
                    scale(
                        profile.damage,
                        constants.crit_multiplier + mods.crit_multiplier_bonus,
                    )
                } else {
                    profile.damage
                };
                damage = damage.saturating_add(mods.flat_damage);

                let first_hit_bonus = if next.first_hit_landed {
                    0
                } else {
                    next.first_hit_landed = true;
                    mods.first_hit_bonus
                };
                damage = damage.saturating_add(first_hit_bonus);

                let stun_bonus = match mods.stun_strike {
                    Some(proc_) if roll(proc_.chance, rng) => {
                        next.monster_stunned = true;
                        Some(proc_.amount)
                    }
                    _ => None,
                };
                damage = damage.saturating_add(stun_bonus.unwrap_or(0));

                next.monster.take_damage(damage);
                events.push(BattleEvent::PlayerHit {
                    action,
                    damage,
                    critical,
                    first_hit_bonus,
                });
                if let Some(bonus_damage) = stun_bonus {
                    events.push(BattleEvent::StunStrike { bonus_damage });
                }

                if let Some(proc_) = mods.life_steal {
                    if roll(proc_.chance, rng) {
                        let healed = next.heal_player(proc_.amount);
                        events.push(BattleEvent::LifeSteal { healed });
                    }
                }
            } else {
                events.push(BattleEvent::PlayerMissed { action });
            }
        }
    }

    // Step 2: Bleed ticks every turn, hit or miss
    if mods.bleed_per_turn > 0 && next.monster.is_alive() {
        let damage = next.monster.take_damage(mods.bleed_per_turn);
        events.push(BattleEvent::Bleed { damage });
    }

    // Step 3: Victory ends the battle before the monster acts
    if !next.monster.is_alive() {
        next.outcome = BattleOutcome::Victory;
        events.push(BattleEvent::Victory);
        tracing::debug!(turn = next.turn, "monster defeated");
        return (next, events);
    }

    // Step 4: Monster attack
    if next.monster_stunned {
        next.monster_stunned = false;
        events.push(BattleEvent::MonsterStunned);
    } else {
        let hit_chance = constants
            .monster_hit_chance
            .saturating_sub(mods.enemy_hit_penalty);
        if roll(hit_chance, rng) {
            let critical = roll(next.monster.crit_chance, rng);
            let raw = if critical {
                scale(next.monster.damage, constants.monster_crit_multiplier)
            } else {
                next.monster.damage
            };

            let blocked = action == PlayerAction::Guard
                && roll(constants.guard_block_chance.saturating_add(mods.guard_bonus), rng);
            if blocked {
                events.push(BattleEvent::Blocked { critical });
            } else {
                let damage = raw.saturating_sub(mods.damage_reduction);
                next.damage_player(damage);
                events.push(BattleEvent::MonsterHit {
                    damage,
                    critical,
                    reduced: raw - damage,
                });
            }
        } else {
            events.push(BattleEvent::MonsterMissed);
        }
    }

    // Step 5: Defeat check
    if next.player_hp == 0 {
        next.outcome = BattleOutcome::Defeat;
        events.push(BattleEvent::Defeat);
    }

    tracing::debug!(
        turn = next.turn,
        action = action.name(),
        player_hp = next.player_hp,
        monster_hp = next.monster.hp,
        "turn resolved"
    );

    (next, events)
}

/// Multiply integer damage, rounding to the nearest point
fn scale(damage: u32, multiplier: f64) -> u32 {
    (damage as f64 * multiplier).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_monsters, EffectConstants, GradeThresholds};
    use crate::effect::OnHitProc;
    use crate::monster::MonsterFactory;
    use crate::types::Grade;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Every 1..=100 roll comes up 1, so every chance above zero succeeds
    fn always_succeeds() -> StepRng {
        StepRng::new(0, 0)
    }

    fn monster(grade: Grade) -> Monster {
        let templates = default_monsters();
        let thresholds = GradeThresholds::default();
        MonsterFactory::new(&templates, &thresholds).instantiate(grade)
    }

    fn context(mods: CombatModifiers) -> BattleContext {
        BattleContext::new(CombatConstants::default(), mods)
    }

    /// Context where the monster can never land a hit
    fn harmless_monster(mods: CombatModifiers) -> BattleContext {
        let mut ctx = context(mods);
        ctx.constants.monster_hit_chance = 0;
        ctx
    }

    #[test]
    fn test_crit_punch_kills_normal_without_retaliation() {
        let ctx = context(CombatModifiers::default());
        let state = BattleState::new(monster(Grade::Normal), &ctx);
        let mut rng = always_succeeds();

        let (next, events) = resolve_turn(&state, PlayerAction::Punch, &ctx, &mut rng);

        assert_eq!(next.monster.hp, 0);
        assert_eq!(next.outcome, BattleOutcome::Victory);
        assert_eq!(next.player_hp, 100);
        assert_eq!(
            events,
            vec![
                BattleEvent::PlayerHit {
                    action: PlayerAction::Punch,
                    damage: 20,
                    critical: true,
                    first_hit_bonus: 0,
                },
                BattleEvent::Victory,
            ]
        );
    }

    #[test]
    fn test_monster_crit_hits_player() {
        let mut ctx = context(CombatModifiers::default());
        ctx.constants.player_base_crit = 0;
        let state = BattleState::new(monster(Grade::Boss), &ctx);
        let mut rng = always_succeeds();

        let (next, events) = resolve_turn(&state, PlayerAction::Kick, &ctx, &mut rng);

        assert_eq!(next.monster.hp, 80);
        assert_eq!(next.player_hp, 50);
        assert_eq!(
            events[1],
            BattleEvent::MonsterHit {
                damage: 50,
                critical: true,
                reduced: 0
            }
        );
        assert_eq!(next.outcome, BattleOutcome::InProgress);
    }

    #[test]
    fn test_guard_blocks_landed_hit() {
        let ctx = context(CombatModifiers::default());
        let state = BattleState::new(monster(Grade::Boss), &ctx);
        let mut rng = always_succeeds();

        let (next, events) = resolve_turn(&state, PlayerAction::Guard, &ctx, &mut rng);

        assert_eq!(
            events,
            vec![BattleEvent::Guarded, BattleEvent::Blocked { critical: true }]
        );
        assert_eq!(next.player_hp, 100);
        assert_eq!(next.monster.hp, 100);
        assert_eq!(next.turn, 1);
    }

    #[test]
    fn test_guard_without_block_chance_takes_damage() {
        let mut ctx = context(CombatModifiers::default());
        ctx.constants.guard_block_chance = 0;
        let state = BattleState::new(monster(Grade::Normal), &ctx);
        let mut rng = always_succeeds();

        let (next, events) = resolve_turn(&state, PlayerAction::Guard, &ctx, &mut rng);

        assert!(matches!(events[1], BattleEvent::MonsterHit { damage: 10, .. }));
        assert_eq!(next.player_hp, 90);
    }

    #[test]
    fn test_guard_bonus_enables_block() {
        let mut ctx = context(CombatModifiers {
            guard_bonus: 10,
            ..Default::default()
        });
        ctx.constants.guard_block_chance = 0;
        let state = BattleState::new(monster(Grade::Normal), &ctx);

        let (_, events) = resolve_turn(&state, PlayerAction::Guard, &ctx, &mut always_succeeds());
        assert!(matches!(events[1], BattleEvent::Blocked { .. }));
    }

    #[test]
    fn test_damage_reduction_and_flat_damage() {
        let mut ctx = context(CombatModifiers {
            damage_reduction: 5,
            flat_damage: 10,
            ..Default::default()
        });
        ctx.constants.player_base_crit = 0;
        let state = BattleState::new(monster(Grade::Boss), &ctx);

        let (next, events) = resolve_turn(&state, PlayerAction::Punch, &ctx, &mut always_succeeds());

        assert!(matches!(events[0], BattleEvent::PlayerHit { damage: 20, critical: false, .. }));
        assert_eq!(next.monster.hp, 80);
        assert_eq!(
            events[1],
            BattleEvent::MonsterHit {
                damage: 45,
                critical: true,
                reduced: 5
            }
        );
        assert_eq!(next.player_hp, 55);
    }

    #[test]
    fn test_first_hit_bonus_applies_once() {
        let mut ctx = harmless_monster(CombatModifiers {
            first_hit_bonus: 20,
            ..Default::default()
        });
        ctx.constants.player_base_crit = 0;
        let state = BattleState::new(monster(Grade::Boss), &ctx);
        let mut rng = always_succeeds();

        let (first, events) = resolve_turn(&state, PlayerAction::Punch, &ctx, &mut rng);
        assert!(matches!(
            events[0],
            BattleEvent::PlayerHit { damage: 30, first_hit_bonus: 20, .. }
        ));
        assert!(first.first_hit_landed);

        let (second, events) = resolve_turn(&first, PlayerAction::Punch, &ctx, &mut rng);
        assert!(matches!(
            events[0],
            BattleEvent::PlayerHit { damage: 10, first_hit_bonus: 0, .. }
        ));
        assert_eq!(second.monster.hp, 60);
    }

    #[test]
    fn test_crit_multiplier_bonus() {
        let ctx = harmless_monster(CombatModifiers {
            crit_multiplier_bonus: 0.2,
            ..Default::default()
        });
        let state = BattleState::new(monster(Grade::Boss), &ctx);

        let (next, _) = resolve_turn(&state, PlayerAction::Counter, &ctx, &mut always_succeeds());
        // 50 * 2.2 = 110
        assert_eq!(next.monster.hp, 0);
        assert_eq!(next.outcome, BattleOutcome::Victory);
    }

    #[test]
    fn test_enemy_hit_penalty_can_zero_monster_hit() {
        let ctx = context(CombatModifiers {
            enemy_hit_penalty: 80,
            ..Default::default()
        });
        let state = BattleState::new(monster(Grade::Boss), &ctx);

        let (next, events) = resolve_turn(&state, PlayerAction::Guard, &ctx, &mut always_succeeds());
        assert_eq!(events, vec![BattleEvent::Guarded, BattleEvent::MonsterMissed]);
        assert_eq!(next.player_hp, 100);
    }

    #[test]
    fn test_bleed_ticks_on_guard_and_can_finish() {
        let ctx = harmless_monster(CombatModifiers {
            bleed_per_turn: 2,
            ..Default::default()
        });
        let mut state = BattleState::new(monster(Grade::Normal), &ctx);
        state.monster.hp = 3;
        let mut rng = always_succeeds();

        let (next, events) = resolve_turn(&state, PlayerAction::Guard, &ctx, &mut rng);
        assert_eq!(events[1], BattleEvent::Bleed { damage: 2 });
        assert_eq!(next.monster.hp, 1);

        let (last, events) = resolve_turn(&next, PlayerAction::Guard, &ctx, &mut rng);
        assert_eq!(events[1], BattleEvent::Bleed { damage: 1 });
        assert_eq!(last.outcome, BattleOutcome::Victory);
        assert_eq!(last.monster.hp, 0);
    }

    #[test]
    fn test_stun_strike_skips_monster_turn() {
        let mut ctx = context(CombatModifiers {
            stun_strike: Some(OnHitProc {
                chance: 40,
                amount: 10,
            }),
            ..Default::default()
        });
        ctx.constants.player_base_crit = 0;
        let state = BattleState::new(monster(Grade::Boss), &ctx);

        let (next, events) = resolve_turn(&state, PlayerAction::Punch, &ctx, &mut always_succeeds());

        assert_eq!(
            events,
            vec![
                BattleEvent::PlayerHit {
                    action: PlayerAction::Punch,
                    damage: 20,
                    critical: false,
                    first_hit_bonus: 0,
                },
                BattleEvent::StunStrike { bonus_damage: 10 },
                BattleEvent::MonsterStunned,
            ]
        );
        assert!(!next.monster_stunned);
        assert_eq!(next.player_hp, 100);
    }

    #[test]
    fn test_life_steal_caps_at_max_hp() {
        let mut ctx = context(CombatModifiers {
            life_steal: Some(OnHitProc {
                chance: 50,
                amount: 5,
            }),
            ..Default::default()
        });
        ctx.constants.player_base_crit = 0;
        let mut state = BattleState::new(monster(Grade::Boss), &ctx);
        state.player_hp = 97;

        let (next, events) = resolve_turn(&state, PlayerAction::Punch, &ctx, &mut always_succeeds());
        assert_eq!(events[1], BattleEvent::LifeSteal { healed: 3 });
        // healed to 100, then the boss crit lands for 50
        assert_eq!(next.player_hp, 50);
    }

    #[test]
    fn test_hp_bonus_raises_starting_hp() {
        let ctx = context(CombatModifiers {
            max_hp_bonus: 5,
            ..Default::default()
        });
        let state = BattleState::new(monster(Grade::Normal), &ctx);
        assert_eq!((state.player_hp, state.player_max_hp), (105, 105));
    }

    #[test]
    fn test_defeat_stops_at_zero() {
        let ctx = context(CombatModifiers::default());
        let mut state = BattleState::new(monster(Grade::Boss), &ctx);
        state.player_hp = 10;

        let (next, events) = resolve_turn(&state, PlayerAction::Kick, &ctx, &mut always_succeeds());
        assert_eq!(next.player_hp, 0);
        assert_eq!(next.outcome, BattleOutcome::Defeat);
        assert_eq!(events.last(), Some(&BattleEvent::Defeat));
    }

    #[test]
    fn test_oversized_config_values_saturate() {
        let mut ctx = context(CombatModifiers {
            max_hp_bonus: 5,
            hit_bonus: u32::MAX,
            flat_damage: u32::MAX,
            first_hit_bonus: 20,
            guard_bonus: u32::MAX,
            ..Default::default()
        });
        ctx.constants.player_base_hp = u32::MAX;
        ctx.constants.player_base_crit = u32::MAX;
        let state = BattleState::new(monster(Grade::Boss), &ctx);
        assert_eq!(state.player_max_hp, u32::MAX);

        let (next, events) = resolve_turn(&state, PlayerAction::Kick, &ctx, &mut always_succeeds());
        assert!(matches!(
            events[0],
            BattleEvent::PlayerHit { damage: u32::MAX, critical: true, .. }
        ));
        assert_eq!(next.outcome, BattleOutcome::Victory);
    }

    #[test]
    fn test_finished_battle_is_unchanged() {
        let ctx = context(CombatModifiers::default());
        let mut state = BattleState::new(monster(Grade::Normal), &ctx);
        state.outcome = BattleOutcome::Victory;

        let (next, events) = resolve_turn(&state, PlayerAction::Punch, &ctx, &mut always_succeeds());
        assert_eq!(next, state);
        assert!(events.is_empty());
    }

    #[test]
    fn test_scale_rounds() {
        assert_eq!(scale(10, 2.0), 20);
        assert_eq!(scale(10, 2.2), 22);
        assert_eq!(scale(25, 2.0), 50);
        assert_eq!(scale(5, 1.5), 8);
    }

    proptest! {
        #[test]
        fn prop_hp_stays_in_bounds(seed in any::<u64>(), actions in proptest::collection::vec(0usize..4, 1..200)) {
            let ctx = BattleContext::new(
                CombatConstants::default(),
                CombatModifiers::resolve(None, &EffectConstants::default()),
            );
            let mut state = BattleState::new(monster(Grade::Elite), &ctx);
            let mut rng = StdRng::seed_from_u64(seed);

            for index in actions {
                let was_over = state.is_over();
                let (next, events) = resolve_turn(&state, PlayerAction::all()[index], &ctx, &mut rng);
                prop_assert!(next.player_hp <= next.player_max_hp);
                prop_assert!(next.monster.hp <= next.monster.max_hp);
                if was_over {
                    prop_assert!(events.is_empty());
                }
                if next.player_hp == 0 {
                    prop_assert_eq!(next.outcome, BattleOutcome::Defeat);
                }
                if next.monster.hp == 0 {
                    prop_assert_eq!(next.outcome, BattleOutcome::Victory);
                }
                state = next;
            }
        }
    }
}
