//! Ability definitions

use serde::{Deserialize, Serialize};

use crate::core::error::{CombatError, Result};
use crate::core::types::Points;

/// What kind of technique an ability is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityCategory {
    /// Body-driven technique
    #[serde(alias = "kung_fu")]
    PhysicalTechnique,
    /// Spirit-driven technique paid for with chi
    #[serde(alias = "chi_kung")]
    ResourceTechnique,
    /// Always-on effect, never chosen as an action
    Passive,
}

impl AbilityCategory {
    pub fn is_passive(&self) -> bool {
        matches!(self, AbilityCategory::Passive)
    }
}

fn default_true() -> bool {
    true
}

/// A catalog entry describing one ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub category: AbilityCategory,
    /// Lowest damage roll (inclusive)
    pub damage_min: Points,
    /// Highest damage roll (inclusive)
    pub damage_max: Points,
    /// Chi spent on use
    #[serde(default)]
    pub chi_cost: Points,
    /// Cleared for abilities that exist only as passive bonuses
    #[serde(default = "default_true")]
    pub usable_in_combat: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Ability {
    pub fn new(
        name: impl Into<String>,
        category: AbilityCategory,
        damage_min: Points,
        damage_max: Points,
        chi_cost: Points,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            damage_min,
            damage_max,
            chi_cost,
            usable_in_combat: !category.is_passive(),
            description: None,
        }
    }

    /// Can this ability be picked as an action at all?
    pub fn is_directly_usable(&self) -> bool {
        self.usable_in_combat && !self.category.is_passive()
    }

    /// Can an attacker with `chi` available pay for it?
    pub fn affordable_with(&self, chi: Points) -> bool {
        chi >= self.chi_cost
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CombatError::InvalidEncounter("ability name is empty".into()));
        }
        if self.damage_min > self.damage_max {
            return Err(CombatError::InvalidEncounter(format!(
                "ability {} has damage range {}..={}",
                self.name, self.damage_min, self.damage_max
            )));
        }
        if self.chi_cost < 0 {
            return Err(CombatError::InvalidEncounter(format!(
                "ability {} has negative chi cost ({})",
                self.name, self.chi_cost
            )));
        }
        Ok(())
    }
}
