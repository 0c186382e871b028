//! Observable encounter state returned after every turn

use serde::{Deserialize, Serialize};

use crate::combat::outcome::EncounterStatus;
use crate::core::types::{Points, Turn};

/// Post-turn view of an encounter. Field names are the external contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub character_hp: Points,
    pub character_max_hp: Points,
    pub character_chi: Points,
    pub character_max_chi: Points,
    pub enemy_hp: Points,
    pub enemy_max_hp: Points,
    pub enemy_name: String,
    pub wounds: Points,
    pub rage_active: bool,
    pub turn: Turn,
    pub log: Vec<String>,
    pub victory: bool,
    pub defeat: bool,
}

impl EncounterSnapshot {
    pub fn status(&self) -> EncounterStatus {
        EncounterStatus::from_flags(self.victory, self.defeat)
    }

    pub fn is_terminal(&self) -> bool {
        self.victory || self.defeat
    }
}
