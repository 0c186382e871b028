//! Fighter snapshots: the read-only view of a combatant the engine consumes
//!
//! Snapshots are typed records. Fields a data source may leave out carry
//! explicit serde defaults instead of lookups with fallbacks.

use serde::{Deserialize, Serialize};

use crate::core::error::{CombatError, Result};
use crate::core::types::Points;

/// Flat mitigation assumed when a source omits defense
pub const DEFAULT_DEFENSE: Points = 5;

/// Flow assumed when a source omits it
pub const DEFAULT_FLOW: Points = 10;

fn default_defense() -> Points {
    DEFAULT_DEFENSE
}

fn default_flow() -> Points {
    DEFAULT_FLOW
}

/// Core attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Physical power, governs techniques and basic attacks
    pub body: Points,
    /// Chi power, governs resource techniques
    #[serde(default)]
    pub spirit: Points,
    /// Speed and crit chance
    #[serde(default = "default_flow")]
    pub flow: Points,
}

impl Attributes {
    pub fn new(body: Points, spirit: Points, flow: Points) -> Self {
        Self { body, spirit, flow }
    }
}

/// Current and maximum vital pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hp: Points,
    pub max_hp: Points,
    #[serde(default)]
    pub chi: Points,
    #[serde(default)]
    pub max_chi: Points,
}

impl Vitals {
    /// Vitals with both pools full
    pub fn full(max_hp: Points, max_chi: Points) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            chi: max_chi,
            max_chi,
        }
    }
}

/// Immutable view of a combatant at encounter start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterSnapshot {
    pub name: String,
    pub attributes: Attributes,
    pub vitals: Vitals,
    #[serde(default = "default_defense")]
    pub defense: Points,
}

impl FighterSnapshot {
    pub fn new(name: impl Into<String>, attributes: Attributes, vitals: Vitals, defense: Points) -> Self {
        Self {
            name: name.into(),
            attributes,
            vitals,
            defense,
        }
    }

    /// Check the snapshot can enter an encounter
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CombatError::InvalidEncounter("fighter name is empty".into()));
        }

        let v = &self.vitals;
        if v.max_hp <= 0 {
            return Err(CombatError::InvalidEncounter(format!(
                "{} has non-positive max HP ({})",
                self.name, v.max_hp
            )));
        }
        if v.hp <= 0 || v.hp > v.max_hp {
            return Err(CombatError::InvalidEncounter(format!(
                "{} has HP {} outside 1..={}",
                self.name, v.hp, v.max_hp
            )));
        }
        if v.chi < 0 || v.chi > v.max_chi {
            return Err(CombatError::InvalidEncounter(format!(
                "{} has chi {} outside 0..={}",
                self.name, v.chi, v.max_chi
            )));
        }

        Ok(())
    }
}
