//! MonsterFactory - Grade discovery and monster instantiation

use super::{Monster, MonsterTemplates};
use crate::config::GradeThresholds;
use crate::types::Grade;
use rand::Rng;

/// Draws encounter grades and builds fresh monsters from templates
#[derive(Debug, Clone, Copy)]
pub struct MonsterFactory<'a> {
    templates: &'a MonsterTemplates,
    thresholds: &'a GradeThresholds,
}

impl<'a> MonsterFactory<'a> {
    pub fn new(templates: &'a MonsterTemplates, thresholds: &'a GradeThresholds) -> Self {
        MonsterFactory {
            templates,
            thresholds,
        }
    }

    /// Draw a grade from a uniform 1..=100 roll using the cumulative thresholds
    pub fn discover_grade(&self, rng: &mut impl Rng) -> Grade {
        let r = rng.gen_range(1..=100u32);
        self.grade_for_roll(r)
    }

    /// Map a 1..=100 roll to a grade
    pub fn grade_for_roll(&self, roll: u32) -> Grade {
        if roll <= self.thresholds.normal_max {
            Grade::Normal
        } else if roll <= self.thresholds.elite_max {
            Grade::Elite
        } else {
            Grade::Boss
        }
    }

    /// Create a new monster of `grade` at full HP
    pub fn instantiate(&self, grade: Grade) -> Monster {
        Monster::from_template(self.templates.get(grade))
    }

    /// Discover a grade and instantiate a monster for it
    pub fn encounter(&self, rng: &mut impl Rng) -> Monster {
        let grade = self.discover_grade(rng);
        let monster = self.instantiate(grade);
        tracing::debug!(%grade, name = %monster.name, hp = monster.hp, "monster encountered");
        monster
    }
}
