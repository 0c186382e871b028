//! State delta handed to the persistence layer once an encounter ends

use serde::{Deserialize, Serialize};

use crate::combat::outcome::EncounterStatus;
use crate::core::types::{Points, Turn};
use crate::fighter::Rewards;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub character_name: String,
    /// Raw HP, may be negative
    pub character_hp: Points,
    pub character_chi: Points,
    pub wounds: Points,
    pub status: EncounterStatus,
    pub turns_taken: Turn,
    /// Granted only on a clean victory, not on mutual defeat
    pub rewards: Option<Rewards>,
}
