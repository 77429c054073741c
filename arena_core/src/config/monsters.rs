//! Monster template loading

use super::ConfigError;
use crate::monster::{MonsterTemplate, MonsterTemplates};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for monster templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonstersConfig {
    #[serde(rename = "monsters")]
    pub monsters: Vec<MonsterTemplate>,
}

/// Load monster templates from a TOML file
pub fn load_monsters(path: &Path) -> Result<MonsterTemplates, ConfigError> {
    let config: MonstersConfig = super::load_toml(path)?;
    MonsterTemplates::new(config.monsters)
}

/// Load monster templates from a TOML string
pub fn parse_monsters(content: &str) -> Result<MonsterTemplates, ConfigError> {
    let config: MonstersConfig = super::parse_toml(content)?;
    MonsterTemplates::new(config.monsters)
}

/// Get the built-in monster templates
pub fn default_monsters() -> MonsterTemplates {
    let toml = include_str!("../../config/monsters.toml");
    parse_monsters(toml).unwrap_or_else(|err| {
        tracing::error!(%err, "built-in monster templates failed to load, using fallback");
        fallback_monsters()
    })
}

fn fallback_monsters() -> MonsterTemplates {
    use crate::types::Grade;

    let template = |grade: Grade, name: &str, max_hp, damage, crit_chance| MonsterTemplate {
        grade,
        name: name.to_string(),
        max_hp,
        damage,
        crit_chance,
    };
    MonsterTemplates::from_grades(
        template(Grade::Normal, "Normal Monster", 20, 5, 10),
        template(Grade::Elite, "Elite Monster", 50, 15, 15),
        template(Grade::Boss, "Boss Monster", 100, 25, 20),
    )
}
