//! Encounter termination
//!
//! Status is always derived from the two HP values, never stored.

use serde::{Deserialize, Serialize};

use crate::core::types::Points;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterStatus {
    Ongoing,
    Victory,
    Defeat,
    /// Both sides at or below zero HP. Callers pick the tie-break.
    MutualDefeat,
}

impl EncounterStatus {
    pub fn from_hp(player_hp: Points, opponent_hp: Points) -> Self {
        Self::from_flags(opponent_hp <= 0, player_hp <= 0)
    }

    pub fn from_flags(victory: bool, defeat: bool) -> Self {
        match (victory, defeat) {
            (false, false) => EncounterStatus::Ongoing,
            (true, false) => EncounterStatus::Victory,
            (false, true) => EncounterStatus::Defeat,
            (true, true) => EncounterStatus::MutualDefeat,
        }
    }

    /// Opponent down
    pub fn victory(&self) -> bool {
        matches!(self, EncounterStatus::Victory | EncounterStatus::MutualDefeat)
    }

    /// Player down
    pub fn defeat(&self) -> bool {
        matches!(self, EncounterStatus::Defeat | EncounterStatus::MutualDefeat)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, EncounterStatus::Ongoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_hp() {
        assert_eq!(EncounterStatus::from_hp(10, 10), EncounterStatus::Ongoing);
        assert_eq!(EncounterStatus::from_hp(10, 0), EncounterStatus::Victory);
        assert_eq!(EncounterStatus::from_hp(-3, 10), EncounterStatus::Defeat);
        assert_eq!(EncounterStatus::from_hp(0, -12), EncounterStatus::MutualDefeat);
    }

    #[test]
    fn test_mutual_defeat_sets_both_flags() {
        let status = EncounterStatus::MutualDefeat;
        assert!(status.victory());
        assert!(status.defeat());
        assert!(status.is_terminal());
    }

    #[test]
    fn test_flags_roundtrip() {
        for status in [
            EncounterStatus::Ongoing,
            EncounterStatus::Victory,
            EncounterStatus::Defeat,
            EncounterStatus::MutualDefeat,
        ] {
            assert_eq!(EncounterStatus::from_flags(status.victory(), status.defeat()), status);
        }
    }
}
