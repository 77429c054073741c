//! Combat - Turn-based battles between the player and one monster
//!
//! [`resolve_turn`] is a pure state transition; [`CombatEngine`] wires it to
//! the input and display collaborators and settles rewards.

mod action;
mod engine;
mod event;
mod turn;

pub use action::{AttackProfile, PlayerAction};
pub use engine::{BattleReport, CombatEngine};
pub use event::{BattleEvent, BattleOutcome};
pub use turn::{resolve_turn, BattleContext, BattleState};
