//! Frontend configuration
//!
//! Read from the TOML file named by `ARENA_CONFIG`; without it every field
//! takes its default.

use arena_core::config::{load_catalog, load_monsters, load_toml, ConfigError};
use arena_core::{default_catalog, default_monsters, EquipmentCatalog, GameConstants, MonsterTemplates};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "ARENA_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default)]
    pub constants: GameConstants,
    /// Replaces the built-in equipment catalog
    #[serde(default)]
    pub equipment_path: Option<PathBuf>,
    /// Replaces the built-in monster templates
    #[serde(default)]
    pub monsters_path: Option<PathBuf>,
    /// Fixed RNG seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub starting_gold: u64,
    #[serde(default)]
    pub starting_gems: u64,
    /// Log destination; no logging when absent
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    /// Load from `ARENA_CONFIG`, or defaults when it is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(&PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let config: TuiConfig = load_toml(path)?;
        config.constants.validate()?;
        Ok(config)
    }

    pub fn catalog(&self) -> Result<EquipmentCatalog, ConfigError> {
        match &self.equipment_path {
            Some(path) => load_catalog(path),
            None => Ok(default_catalog()),
        }
    }

    pub fn monsters(&self) -> Result<MonsterTemplates, ConfigError> {
        match &self.monsters_path {
            Some(path) => load_monsters(path),
            None => Ok(default_monsters()),
        }
    }
}
