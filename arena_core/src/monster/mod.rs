//! Monsters - Templates, grade discovery and per-battle instances

mod factory;

pub use factory::MonsterFactory;

use crate::config::ConfigError;
use crate::types::Grade;
use serde::{Deserialize, Serialize};

/// Immutable stat template for one grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub grade: Grade,
    pub name: String,
    pub max_hp: u32,
    /// Damage per landed hit, before crits
    pub damage: u32,
    /// Crit chance in percent
    pub crit_chance: u32,
}

/// Registry holding exactly one template per grade
#[derive(Debug, Clone)]
pub struct MonsterTemplates {
    normal: MonsterTemplate,
    elite: MonsterTemplate,
    boss: MonsterTemplate,
}

impl MonsterTemplates {
    /// Build the registry, requiring every grade exactly once
    pub fn new(templates: Vec<MonsterTemplate>) -> Result<Self, ConfigError> {
        let (mut normal, mut elite, mut boss) = (None, None, None);
        for template in templates {
            if template.max_hp == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} template has zero max_hp", template.grade
                )));
            }
            let grade = template.grade;
            let slot = match grade {
                Grade::Normal => &mut normal,
                Grade::Elite => &mut elite,
                Grade::Boss => &mut boss,
            };
            if slot.replace(template).is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate template for grade {}", grade
                )));
            }
        }
        match (normal, elite, boss) {
            (Some(normal), Some(elite), Some(boss)) => Ok(MonsterTemplates {
                normal,
                elite,
                boss,
            }),
            (None, _, _) => Err(ConfigError::ValidationError(
                "missing template for grade Normal".to_string(),
            )),
            (_, None, _) => Err(ConfigError::ValidationError(
                "missing template for grade Elite".to_string(),
            )),
            (_, _, None) => Err(ConfigError::ValidationError(
                "missing template for grade Boss".to_string(),
            )),
        }
    }

    /// Build the registry from one template per grade, trusting the caller
    /// to pass them in grade order
    pub(crate) fn from_grades(
        normal: MonsterTemplate,
        elite: MonsterTemplate,
        boss: MonsterTemplate,
    ) -> Self {
        MonsterTemplates {
            normal,
            elite,
            boss,
        }
    }

    pub fn get(&self, grade: Grade) -> &MonsterTemplate {
        match grade {
            Grade::Normal => &self.normal,
            Grade::Elite => &self.elite,
            Grade::Boss => &self.boss,
        }
    }
}

/// A live monster for a single battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub grade: Grade,
    pub max_hp: u32,
    /// Current HP, always within `0..=max_hp`
    pub hp: u32,
    pub damage: u32,
    pub crit_chance: u32,
}

impl Monster {
    /// Create a fresh monster at full HP from a template
    pub fn from_template(template: &MonsterTemplate) -> Self {
        Monster {
            name: template.name.clone(),
            grade: template.grade,
            max_hp: template.max_hp,
            hp: template.max_hp,
            damage: template.damage,
            crit_chance: template.crit_chance,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage, saturating at zero. Returns the HP actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64 * 100.0
    }
}
