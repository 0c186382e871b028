//! Player character sheet and its derived combat stats

use serde::{Deserialize, Serialize};

use crate::core::types::Points;
use crate::fighter::snapshot::{Attributes, FighterSnapshot, Vitals};

/// HP every character has before body is added
pub const BASE_HP: Points = 100;
/// Chi every character has before spirit is added
pub const BASE_CHI: Points = 100;
/// Max HP gained per point of body
pub const HP_PER_BODY: Points = 10;
/// Max chi gained per point of spirit
pub const CHI_PER_SPIRIT: Points = 10;
/// Defense before body is added
pub const BASE_DEFENSE: Points = 5;

/// Persisted character data relevant to combat
///
/// Current vitals are optional: a freshly created character has none stored
/// and starts at full pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub body: Points,
    pub spirit: Points,
    pub flow: Points,
    #[serde(default)]
    pub current_hp: Option<Points>,
    #[serde(default)]
    pub current_chi: Option<Points>,
}

/// Stats recalculated from the core attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub max_hp: Points,
    pub max_chi: Points,
    pub defense: Points,
}

impl CharacterSheet {
    pub fn new(name: impl Into<String>, body: Points, spirit: Points, flow: Points) -> Self {
        Self {
            name: name.into(),
            body,
            spirit,
            flow,
            current_hp: None,
            current_chi: None,
        }
    }

    /// Test character: the seeded warrior
    pub fn test_warrior() -> Self {
        Self::new("TestWarrior", 15, 10, 12)
    }

    pub fn derived(&self) -> DerivedStats {
        DerivedStats {
            max_hp: BASE_HP + self.body * HP_PER_BODY,
            max_chi: BASE_CHI + self.spirit * CHI_PER_SPIRIT,
            defense: BASE_DEFENSE + self.body / 2,
        }
    }

    /// Build the snapshot the engine consumes
    pub fn to_snapshot(&self) -> FighterSnapshot {
        let derived = self.derived();
        FighterSnapshot {
            name: self.name.clone(),
            attributes: Attributes::new(self.body, self.spirit, self.flow),
            vitals: Vitals {
                hp: self.current_hp.unwrap_or(derived.max_hp),
                max_hp: derived.max_hp,
                chi: self.current_chi.unwrap_or(derived.max_chi),
                max_chi: derived.max_chi,
            },
            defense: derived.defense,
        }
    }
}

impl From<&CharacterSheet> for FighterSnapshot {
    fn from(sheet: &CharacterSheet) -> Self {
        sheet.to_snapshot()
    }
}
