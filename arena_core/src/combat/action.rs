//! Player actions available each turn

use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// Damage and accuracy of an attacking action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackProfile {
    pub damage: u32,
    /// Hit chance in percent
    pub hit_chance: u32,
}

/// One player choice per turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    Punch,
    Kick,
    Counter,
    Guard,
}

impl PlayerAction {
    pub fn all() -> &'static [PlayerAction] {
        &[
            PlayerAction::Punch,
            PlayerAction::Kick,
            PlayerAction::Counter,
            PlayerAction::Guard,
        ]
    }

    /// Parse a selection token: the menu number or the action name
    pub fn from_selection(token: &str) -> Result<Self, GameError> {
        let token = token.trim();
        let action = match token {
            "1" => PlayerAction::Punch,
            "2" => PlayerAction::Kick,
            "3" => PlayerAction::Counter,
            "4" => PlayerAction::Guard,
            _ => PlayerAction::all()
                .iter()
                .copied()
                .find(|a| a.name().eq_ignore_ascii_case(token))
                .ok_or_else(|| GameError::InvalidSelection(token.to_string()))?,
        };
        Ok(action)
    }

    /// Menu key for this action
    pub fn key(&self) -> &'static str {
        match self {
            PlayerAction::Punch => "1",
            PlayerAction::Kick => "2",
            PlayerAction::Counter => "3",
            PlayerAction::Guard => "4",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Punch => "Punch",
            PlayerAction::Kick => "Kick",
            PlayerAction::Counter => "Counter",
            PlayerAction::Guard => "Guard",
        }
    }

    /// Attack stats, or `None` for Guard
    pub fn attack(&self) -> Option<AttackProfile> {
        match self {
            PlayerAction::Punch => Some(AttackProfile {
                damage: 10,
                hit_chance: 80,
            }),
            PlayerAction::Kick => Some(AttackProfile {
                damage: 20,
                hit_chance: 50,
            }),
            PlayerAction::Counter => Some(AttackProfile {
                damage: 50,
                hit_chance: 20,
            }),
            PlayerAction::Guard => None,
        }
    }
}
