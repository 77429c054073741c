//! arena_core - Core game logic for the monster arena
//!
//! This library provides:
//! - MonsterFactory: Grade discovery and monster instantiation
//! - CombatEngine: Turn resolution with equipment effects
//! - Gacha: Gem-gated item draws with duplicate refunds
//! - PlayerState: Currency, inventory and the equipped slot
//! - Session: The menu loop driving everything through input/display seams

pub mod catalog;
pub mod combat;
pub mod config;
pub mod effect;
pub mod error;
pub mod gacha;
pub mod io;
pub mod monster;
pub mod player;
pub mod prelude;
pub mod pvp;
pub mod session;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Effect, EquipmentCatalog, Item};
pub use combat::{
    resolve_turn, BattleContext, BattleEvent, BattleOutcome, BattleReport, BattleState,
    CombatEngine, PlayerAction,
};
pub use config::{default_catalog, default_monsters, GameConstants};
pub use effect::CombatModifiers;
pub use error::{GameError, InputError, SessionError};
pub use gacha::{Gacha, GachaOutcome};
pub use io::{DisplaySink, EventLog, GameEvent, InputProvider, Notice, Prompt, ScriptedInput};
pub use monster::{Monster, MonsterFactory, MonsterTemplate, MonsterTemplates};
pub use player::PlayerState;
pub use pvp::{PvpDuel, PvpEvent, PvpSide};
pub use session::{MenuChoice, Session};
pub use types::{Grade, Rarity};
