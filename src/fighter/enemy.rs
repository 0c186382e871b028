//! Opponent profiles
//!
//! Enemies are stored with attack power and agility rather than the
//! body/spirit/flow triple. The mapping into a snapshot halves attack power
//! into the body slot and moves agility into the flow slot.

use serde::{Deserialize, Serialize};

use crate::core::types::Points;
use crate::fighter::snapshot::{Attributes, FighterSnapshot, Vitals, DEFAULT_DEFENSE};

fn default_level() -> u32 {
    1
}

fn default_defense() -> Points {
    DEFAULT_DEFENSE
}

/// Stored enemy definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    pub max_hp: Points,
    pub attack_power: Points,
    #[serde(default = "default_defense")]
    pub defense: Points,
    pub agility: Points,
    #[serde(default)]
    pub xp_reward: u32,
    #[serde(default)]
    pub gold_reward: u32,
}

/// Rewards granted for defeating an opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rewards {
    pub xp: u32,
    pub gold: u32,
}

impl EnemyProfile {
    /// Test enemy: the seeded bandit
    pub fn shadow_bandit() -> Self {
        Self {
            name: "Shadow Bandit".into(),
            level: 1,
            max_hp: 80,
            attack_power: 15,
            defense: 5,
            agility: 8,
            xp_reward: 50,
            gold_reward: 20,
        }
    }

    /// Build the opponent snapshot. Enemies always start at full HP and
    /// carry no chi.
    pub fn to_snapshot(&self) -> FighterSnapshot {
        FighterSnapshot {
            name: self.name.clone(),
            attributes: Attributes::new(self.attack_power / 2, 0, self.agility),
            vitals: Vitals::full(self.max_hp, 0),
            defense: self.defense,
        }
    }

    pub fn rewards(&self) -> Rewards {
        Rewards {
            xp: self.xp_reward,
            gold: self.gold_reward,
        }
    }
}

impl From<&EnemyProfile> for FighterSnapshot {
    fn from(profile: &EnemyProfile) -> Self {
        profile.to_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_power_halved_into_body() {
        let snapshot = EnemyProfile::shadow_bandit().to_snapshot();
        assert_eq!(snapshot.attributes.body, 7);
        assert_eq!(snapshot.attributes.flow, 8);
        assert_eq!(snapshot.defense, 5);
    }

    #[test]
    fn test_enemy_starts_full_without_chi() {
        let snapshot = EnemyProfile::shadow_bandit().to_snapshot();
        assert_eq!(snapshot.vitals.hp, 80);
        assert_eq!(snapshot.vitals.chi, 0);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_toml_profile_defaults() {
        let profile: EnemyProfile = toml::from_str(
            r#"
            name = "Wolf"
            max_hp = 40
            attack_power = 9
            agility = 12
            "#,
        )
        .unwrap();
        assert_eq!(profile.level, 1);
        assert_eq!(profile.defense, DEFAULT_DEFENSE);
        assert_eq!(profile.rewards(), Rewards::default());
    }
}
