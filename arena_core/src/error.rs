//! Error types for game operations and collaborator failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable failure of a single game operation
///
/// None of these leave the player state modified.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameError {
    #[error("Unrecognized selection: {0:?}")]
    InvalidSelection(String),
    #[error("Not enough currency: need {required}, have {available}")]
    InsufficientCurrency { required: u64, available: u64 },
    #[error("Cannot equip {0}: item is not owned")]
    EquipNotOwned(String),
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

/// Failure of the input collaborator
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input stream closed")]
    Closed,
    #[error("Input interrupted")]
    Interrupted,
    #[error("Input I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal session failure
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
}
