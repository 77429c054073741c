//! PvP - Hot-seat duel between two local players

use crate::config::PvpConstants;
use crate::types::roll;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PvpSide {
    PlayerOne,
    PlayerTwo,
}

impl PvpSide {
    pub fn opponent(&self) -> PvpSide {
        match self {
            PvpSide::PlayerOne => PvpSide::PlayerTwo,
            PvpSide::PlayerTwo => PvpSide::PlayerOne,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PvpSide::PlayerOne => "Player 1",
            PvpSide::PlayerTwo => "Player 2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PvpEvent {
    Attack {
        attacker: PvpSide,
        hit: bool,
        damage: u32,
        /// Defender HP after the attack
        defender_hp: u32,
    },
    Winner {
        side: PvpSide,
    },
}

/// Duel state: both sides' HP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvpDuel {
    pub p1_hp: u32,
    pub p2_hp: u32,
    max_hp: u32,
    hit_chance: u32,
    damage: u32,
}

impl PvpDuel {
    pub fn new(constants: &PvpConstants) -> Self {
        PvpDuel {
            p1_hp: constants.starting_hp,
            p2_hp: constants.starting_hp,
            max_hp: constants.starting_hp,
            hit_chance: constants.hit_chance,
            damage: constants.damage,
        }
    }

    pub fn hp(&self, side: PvpSide) -> u32 {
        match side {
            PvpSide::PlayerOne => self.p1_hp,
            PvpSide::PlayerTwo => self.p2_hp,
        }
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn hp_mut(&mut self, side: PvpSide) -> &mut u32 {
        match side {
            PvpSide::PlayerOne => &mut self.p1_hp,
            PvpSide::PlayerTwo => &mut self.p2_hp,
        }
    }

    /// One attack by `attacker`; HP saturates at 0
    pub fn attack(&mut self, attacker: PvpSide, rng: &mut impl Rng) -> PvpEvent {
        let hit = roll(self.hit_chance, rng);
        let base = self.damage;
        let defender = self.hp_mut(attacker.opponent());
        let damage = if hit { base.min(*defender) } else { 0 };
        *defender -= damage;

        PvpEvent::Attack {
            attacker,
            hit,
            damage,
            defender_hp: *defender,
        }
    }

    /// The side still standing, once the other is at 0
    pub fn winner(&self) -> Option<PvpSide> {
        if self.p2_hp == 0 {
            Some(PvpSide::PlayerOne)
        } else if self.p1_hp == 0 {
            Some(PvpSide::PlayerTwo)
        } else {
            None
        }
    }
}
