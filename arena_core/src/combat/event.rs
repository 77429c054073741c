//! Battle events and outcomes

use super::PlayerAction;
use serde::{Deserialize, Serialize};

/// Battle state machine position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    InProgress,
    Victory,
    Defeat,
}

impl BattleOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattleOutcome::InProgress)
    }
}

/// Something that happened during one turn, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BattleEvent {
    /// Player guarded instead of attacking
    Guarded,
    PlayerMissed {
        action: PlayerAction,
    },
    PlayerHit {
        action: PlayerAction,
        /// Total damage of the hit, including every bonus
        damage: u32,
        critical: bool,
        /// Portion of `damage` from the first-hit bonus
        first_hit_bonus: u32,
    },
    /// On-hit stun proc: bonus damage (already in the hit) and a skipped monster turn
    StunStrike {
        bonus_damage: u32,
    },
    LifeSteal {
        healed: u32,
    },
    Bleed {
        damage: u32,
    },
    /// Monster lost its turn to a stun
    MonsterStunned,
    MonsterMissed,
    MonsterHit {
        damage: u32,
        critical: bool,
        /// Damage removed by the player's damage reduction
        reduced: u32,
    },
    /// Guard stopped a landed monster hit
    Blocked {
        critical: bool,
    },
    Victory,
    Defeat,
}
