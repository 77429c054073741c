//! Collaborator seams between the game core and a frontend
//!
//! The core never formats text or reads a terminal. It asks an
//! [`InputProvider`] for one token per [`Prompt`] and reports what happened
//! to a [`DisplaySink`] as [`GameEvent`]s.

use crate::catalog::EquipmentCatalog;
use crate::combat::{BattleEvent, BattleReport, BattleState};
use crate::error::{GameError, InputError};
use crate::gacha::GachaOutcome;
use crate::player::PlayerState;
use crate::pvp::{PvpDuel, PvpEvent, PvpSide};
use crate::types::Grade;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What the core is waiting for
#[derive(Debug, Clone, Copy)]
pub enum Prompt<'a> {
    /// Main menu
    Home {
        player: &'a PlayerState,
        catalog: &'a EquipmentCatalog,
    },
    /// Next battle action
    BattleAction { battle: &'a BattleState },
    /// Item to equip from the owned list, `0` to unequip
    Equipment {
        player: &'a PlayerState,
        catalog: &'a EquipmentCatalog,
    },
    /// Acknowledge before `attacker` strikes
    PvpTurn {
        duel: &'a PvpDuel,
        attacker: PvpSide,
    },
    /// Any token continues
    Continue,
}

/// Source of player input, one token per prompt
pub trait InputProvider {
    fn next_token(&mut self, prompt: &Prompt<'_>) -> Result<String, InputError>;
}

/// Receiver of semantic game events
pub trait DisplaySink {
    fn emit(&mut self, event: &GameEvent);
}

/// Informational messages with no game effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// Feature not available yet (Tournament)
    ComingSoon,
    Goodbye,
}

/// Everything a frontend may want to show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum GameEvent {
    BattleStarted {
        monster: String,
        grade: Grade,
        monster_hp: u32,
        player_hp: u32,
        player_max_hp: u32,
    },
    Battle(BattleEvent),
    BattleEnded(BattleReport),
    Gacha(GachaOutcome),
    Equipped { item: String },
    Unequipped,
    /// A recoverable operation error; nothing changed
    Rejected(GameError),
    Notice(Notice),
    Pvp(PvpEvent),
}

// === Scripted collaborators ===

/// Input from a fixed queue of tokens
///
/// Yields `InputError::Closed` once the queue is exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl InputProvider for ScriptedInput {
    fn next_token(&mut self, _prompt: &Prompt<'_>) -> Result<String, InputError> {
        self.tokens.pop_front().ok_or(InputError::Closed)
    }
}

/// Sink that records every event
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DisplaySink for EventLog {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
