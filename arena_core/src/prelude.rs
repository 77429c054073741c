//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Core types
pub use crate::player::PlayerState;
pub use crate::types::{Grade, Rarity};

// Catalog and monsters
pub use crate::catalog::{Effect, EquipmentCatalog, Item};
pub use crate::monster::{Monster, MonsterFactory, MonsterTemplates};

// Combat
pub use crate::combat::{BattleEvent, BattleOutcome, BattleReport, BattleState, CombatEngine, PlayerAction};
pub use crate::effect::CombatModifiers;

// Gacha and PvP
pub use crate::gacha::{Gacha, GachaOutcome};
pub use crate::pvp::{PvpDuel, PvpEvent, PvpSide};

// Session and collaborators
pub use crate::io::{DisplaySink, EventLog, GameEvent, InputProvider, Notice, Prompt, ScriptedInput};
pub use crate::session::Session;

// Config
pub use crate::config::{default_catalog, default_monsters, GameConstants};
pub use crate::error::{GameError, InputError, SessionError};
