//! Combat engine - Drives a battle from encounter to settlement

use super::{resolve_turn, BattleContext, BattleOutcome, BattleState, PlayerAction};
use crate::catalog::EquipmentCatalog;
use crate::config::GameConstants;
use crate::effect::CombatModifiers;
use crate::error::InputError;
use crate::io::{DisplaySink, GameEvent, InputProvider, Prompt};
use crate::monster::Monster;
use crate::player::PlayerState;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Summary of a finished battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub monster: String,
    pub outcome: BattleOutcome,
    pub turns: u32,
    pub gold_awarded: u64,
}

/// Battle driver bound to the game configuration
#[derive(Debug, Clone, Copy)]
pub struct CombatEngine<'a> {
    constants: &'a GameConstants,
    catalog: &'a EquipmentCatalog,
}

impl<'a> CombatEngine<'a> {
    pub fn new(constants: &'a GameConstants, catalog: &'a EquipmentCatalog) -> Self {
        CombatEngine { constants, catalog }
    }

    /// Battle context for the player's current loadout
    pub fn context_for(&self, player: &PlayerState) -> BattleContext {
        let modifiers =
            CombatModifiers::resolve(player.equipped_item(self.catalog), &self.constants.effects);
        BattleContext::new(self.constants.combat.clone(), modifiers)
    }

    /// Initial state and context for a fight against `monster`
    pub fn start(&self, monster: Monster, player: &PlayerState) -> (BattleState, BattleContext) {
        let ctx = self.context_for(player);
        let state = BattleState::new(monster, &ctx);
        (state, ctx)
    }

    /// Apply the battle outcome to the player
    ///
    /// Victory credits the victory gold; defeat and unfinished battles grant
    /// nothing.
    pub fn settle(&self, state: &BattleState, player: &mut PlayerState) -> BattleReport {
        let gold_awarded = match state.outcome {
            BattleOutcome::Victory => self.constants.combat.victory_gold,
            BattleOutcome::Defeat | BattleOutcome::InProgress => 0,
        };
        player.credit_gold(gold_awarded);

        tracing::info!(
            monster = %state.monster.name,
            outcome = ?state.outcome,
            turns = state.turn,
            gold_awarded,
            "battle settled"
        );

        BattleReport {
            monster: state.monster.name.clone(),
            outcome: state.outcome,
            turns: state.turn,
            gold_awarded,
        }
    }

    /// Fight `monster` to the end, asking `input` for each action
    ///
    /// Unrecognized tokens are reported as `Rejected` and re-prompted without
    /// consuming a turn. Input failure aborts the battle with no reward.
    pub fn run(
        &self,
        monster: Monster,
        player: &mut PlayerState,
        input: &mut impl InputProvider,
        sink: &mut impl DisplaySink,
        rng: &mut impl Rng,
    ) -> Result<BattleReport, InputError> {
        let (mut state, ctx) = self.start(monster, player);
        sink.emit(&GameEvent::BattleStarted {
            monster: state.monster.name.clone(),
            grade: state.monster.grade,
            monster_hp: state.monster.hp,
            player_hp: state.player_hp,
            player_max_hp: state.player_max_hp,
        });

        while !state.is_over() {
            let token = input.next_token(&Prompt::BattleAction { battle: &state })?;
            let action = match PlayerAction::from_selection(&token) {
                Ok(action) => action,
                Err(err) => {
                    sink.emit(&GameEvent::Rejected(err));
                    continue;
                }
            };

            let (next, events) = resolve_turn(&state, action, &ctx, rng);
            for event in events {
                sink.emit(&GameEvent::Battle(event));
            }
            state = next;
        }

        let report = self.settle(&state, player);
        sink.emit(&GameEvent::BattleEnded(report.clone()));
        Ok(report)
    }
}
