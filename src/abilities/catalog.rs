//! Ability catalog - every technique the game knows about
//!
//! Loaded from TOML (`[[abilities]]` tables) or built in code.

use serde::Deserialize;
use std::path::Path;

use crate::abilities::definition::{Ability, AbilityCategory};
use crate::core::error::{CombatError, Result};

/// Catalog of all available abilities
#[derive(Debug, Clone, Default)]
pub struct AbilityCatalog {
    abilities: Vec<Ability>,
}

impl AbilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter techniques shipped with the game
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();

        catalog.abilities.push(Ability::new(
            "Tiger Claw",
            AbilityCategory::PhysicalTechnique,
            10,
            14,
            10,
        ));
        catalog.abilities.push(Ability::new(
            "Dragon Palm",
            AbilityCategory::ResourceTechnique,
            12,
            18,
            20,
        ));
        catalog.abilities.push(Ability::new(
            "Iron Shirt",
            AbilityCategory::Passive,
            0,
            0,
            0,
        ));

        catalog
    }

    /// Add an ability, rejecting malformed entries and duplicate names
    pub fn add(&mut self, ability: Ability) -> Result<()> {
        ability.validate()?;
        if self.get(&ability.name).is_some() {
            return Err(CombatError::InvalidConfig(format!(
                "duplicate ability: {}",
                ability.name
            )));
        }
        self.abilities.push(ability);
        Ok(())
    }

    /// Get an ability by name
    pub fn get(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.name == name)
    }

    /// Get an ability by name or fail with `UnknownAbility`
    pub fn require(&self, name: &str) -> Result<&Ability> {
        self.get(name)
            .ok_or_else(|| CombatError::UnknownAbility(name.to_string()))
    }

    /// Get all abilities of a category
    pub fn by_category(&self, category: AbilityCategory) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(move |a| a.category == category)
    }

    pub fn all(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Load abilities from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse abilities from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let data: TomlAbilities = toml::from_str(content)?;

        let mut catalog = Self::new();
        for ability in data.abilities {
            catalog.add(ability)?;
        }
        tracing::debug!(count = catalog.len(), "loaded ability catalog");
        Ok(catalog)
    }
}

/// TOML representation of an abilities file
#[derive(Debug, Deserialize)]
struct TomlAbilities {
    #[serde(default)]
    abilities: Vec<Ability>,
}
