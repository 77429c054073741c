//! Equipment catalog loading

use super::ConfigError;
use crate::catalog::{EquipmentCatalog, Item};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for item definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentConfig {
    #[serde(rename = "items")]
    pub items: Vec<Item>,
}

/// Load the equipment catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<EquipmentCatalog, ConfigError> {
    let config: EquipmentConfig = super::load_toml(path)?;
    EquipmentCatalog::new(config.items)
}

/// Load the equipment catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<EquipmentCatalog, ConfigError> {
    let config: EquipmentConfig = super::parse_toml(content)?;
    EquipmentCatalog::new(config.items)
}

/// Get the built-in equipment catalog
pub fn default_catalog() -> EquipmentCatalog {
    let toml = include_str!("../../config/equipment.toml");
    parse_catalog(toml).unwrap_or_else(|err| {
        tracing::error!(%err, "built-in equipment catalog failed to load");
        EquipmentCatalog::default()
    })
}
