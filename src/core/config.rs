//! Combat configuration with documented constants
//!
//! Every tunable number of the resolver lives here. The defaults reproduce
//! the live game's balance; a TOML file can override any subset of them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{CombatError, Result};

/// Configuration for combat resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    // === BASIC ATTACK ===
    /// Lowest damage roll of a basic (no-ability) attack
    pub basic_attack_min: i64,

    /// Highest damage roll of a basic attack (inclusive)
    pub basic_attack_max: i64,

    /// Damage rolls are divided by this before scaling the governing
    /// attribute. At 10.0, a roll of 10 means "attribute × 1.0".
    pub damage_roll_divisor: f64,

    /// Floor applied after defense. A landed hit always matters.
    pub min_damage: i64,

    // === INITIATIVE ===
    /// Sides of the initiative die added to each fighter's speed
    ///
    /// Rolled uniformly in [1, initiative_die] every turn.
    pub initiative_die: i64,

    // === CRITICAL HITS ===
    /// Crit chance every attacker gets before flow is added
    ///
    /// Total chance = flow / 100 + base_crit_chance.
    pub base_crit_chance: f64,

    /// Multiplier applied to scaled damage on a crit (before defense)
    pub crit_multiplier: f64,

    // === RAGE ===
    /// Fraction of the player's max HP that, once taken as wounds,
    /// switches the encounter into rage
    pub rage_threshold_ratio: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            basic_attack_min: 8,
            basic_attack_max: 12,
            damage_roll_divisor: 10.0,
            min_damage: 1,

            initiative_die: 10,

            base_crit_chance: 0.05,
            crit_multiplier: 2.0,

            rage_threshold_ratio: 0.5,
        }
    }
}

impl CombatConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, falling back to defaults for missing keys
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CombatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("damage_roll_divisor", self.damage_roll_divisor),
            ("base_crit_chance", self.base_crit_chance),
            ("crit_multiplier", self.crit_multiplier),
            ("rage_threshold_ratio", self.rage_threshold_ratio),
        ] {
            if !value.is_finite() {
                return Err(CombatError::InvalidConfig(format!(
                    "{} ({}) must be a finite number",
                    name, value
                )));
            }
        }

        if self.basic_attack_min > self.basic_attack_max {
            return Err(CombatError::InvalidConfig(format!(
                "basic_attack_min ({}) must be <= basic_attack_max ({})",
                self.basic_attack_min, self.basic_attack_max
            )));
        }

        if self.initiative_die < 1 {
            return Err(CombatError::InvalidConfig(format!(
                "initiative_die ({}) must be at least 1",
                self.initiative_die
            )));
        }

        if self.damage_roll_divisor <= 0.0 {
            return Err(CombatError::InvalidConfig(
                "damage_roll_divisor must be positive".into(),
            ));
        }

        if self.min_damage < 1 {
            return Err(CombatError::InvalidConfig(format!(
                "min_damage ({}) must be at least 1",
                self.min_damage
            )));
        }

        if self.rage_threshold_ratio <= 0.0 || self.rage_threshold_ratio > 1.0 {
            return Err(CombatError::InvalidConfig(format!(
                "rage_threshold_ratio ({}) must be in (0, 1]",
                self.rage_threshold_ratio
            )));
        }

        if self.base_crit_chance < 0.0 || self.crit_multiplier < 1.0 {
            return Err(CombatError::InvalidConfig(
                "crit chance must be non-negative and crit multiplier at least 1".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<CombatConfig> = OnceLock::new();

/// Get the global combat config (initializes with defaults if not set)
pub fn config() -> &'static CombatConfig {
    CONFIG.get_or_init(CombatConfig::default)
}

/// Set the global combat config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: CombatConfig) -> std::result::Result<(), CombatConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CombatConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CombatConfig::from_toml_str("initiative_die = 20\n").unwrap();
        assert_eq!(config.initiative_die, 20);
        assert_eq!(config.basic_attack_min, 8);
        assert_eq!(config.basic_attack_max, 12);
    }

    #[test]
    fn test_inverted_basic_range_rejected() {
        let result = CombatConfig::from_toml_str("basic_attack_min = 15\nbasic_attack_max = 3\n");
        assert!(matches!(result, Err(CombatError::InvalidConfig(_))));
    }

    #[test]
    fn test_rage_ratio_out_of_bounds_rejected() {
        let config = CombatConfig {
            rage_threshold_ratio: 1.5,
            ..CombatConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        for key in [
            "damage_roll_divisor",
            "base_crit_chance",
            "crit_multiplier",
            "rage_threshold_ratio",
        ] {
            let result = CombatConfig::from_toml_str(&format!("{} = nan\n", key));
            assert!(
                matches!(result, Err(CombatError::InvalidConfig(_))),
                "{} = nan accepted",
                key
            );
        }

        let result = CombatConfig::from_toml_str("crit_multiplier = inf\n");
        assert!(matches!(result, Err(CombatError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = CombatConfig::from_toml_str("initiative_die = \"ten\"");
        assert!(matches!(result, Err(CombatError::TomlError(_))));
    }
}
