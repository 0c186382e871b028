//! Equipped abilities and the player's selection policy

use serde::{Deserialize, Serialize};

use crate::abilities::catalog::AbilityCatalog;
use crate::abilities::definition::Ability;
use crate::core::error::{CombatError, Result};

fn default_page() -> u8 {
    1
}

/// An ability a character has learned, with its hotbar placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedAbility {
    pub ability: Ability,
    /// `None` means learned but not placed on the hotbar
    #[serde(default)]
    pub hotbar_slot: Option<u8>,
    #[serde(default = "default_page")]
    pub hotbar_page: u8,
}

impl EquippedAbility {
    pub fn slotted(ability: Ability, slot: u8) -> Self {
        Self {
            ability,
            hotbar_slot: Some(slot),
            hotbar_page: 1,
        }
    }

    pub fn unslotted(ability: Ability) -> Self {
        Self {
            ability,
            hotbar_slot: None,
            hotbar_page: 1,
        }
    }

    pub fn in_active_slot(&self) -> bool {
        self.hotbar_slot.is_some()
    }
}

/// Ordered list of a character's equipped abilities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    entries: Vec<EquippedAbility>,
}

impl Loadout {
    pub fn new(entries: Vec<EquippedAbility>) -> Self {
        Self { entries }
    }

    /// Resolve `(name, slot)` pairs against a catalog, keeping their order
    pub fn from_catalog(catalog: &AbilityCatalog, picks: &[(&str, Option<u8>)]) -> Result<Self> {
        let entries = picks
            .iter()
            .map(|(name, slot)| {
                let ability = catalog.require(name)?.clone();
                Ok(EquippedAbility {
                    ability,
                    hotbar_slot: *slot,
                    hotbar_page: 1,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Put `names` on the hotbar in order, slots 1, 2, ...
    pub fn hotbar<S: AsRef<str>>(catalog: &AbilityCatalog, names: &[S]) -> Result<Self> {
        let picks = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let slot = u8::try_from(i + 1).map_err(|_| {
                    CombatError::InvalidEncounter(format!(
                        "hotbar holds at most {} abilities, got {}",
                        u8::MAX,
                        names.len()
                    ))
                })?;
                Ok((name.as_ref(), Some(slot)))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_catalog(catalog, &picks)
    }

    /// First ability that sits in an active slot and can be used directly.
    ///
    /// Order is the configured order; nothing is re-sorted by slot number.
    pub fn select_active(&self) -> Option<&Ability> {
        self.entries
            .iter()
            .find(|e| e.in_active_slot() && e.ability.is_directly_usable())
            .map(|e| &e.ability)
    }

    pub fn entries(&self) -> &[EquippedAbility] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<EquippedAbility>> for Loadout {
    fn from(entries: Vec<EquippedAbility>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::definition::AbilityCategory;

    #[test]
    fn test_empty_loadout_selects_nothing() {
        assert!(Loadout::default().select_active().is_none());
    }

    #[test]
    fn test_skips_unslotted_and_passive() {
        let catalog = AbilityCatalog::with_defaults();
        let loadout = Loadout::from_catalog(
            &catalog,
            &[("Tiger Claw", None), ("Iron Shirt", Some(1)), ("Dragon Palm", Some(2))],
        )
        .unwrap();

        assert_eq!(loadout.select_active().unwrap().name, "Dragon Palm");
    }

    #[test]
    fn test_configured_order_wins_over_slot_number() {
        let claw = Ability::new("Claw", AbilityCategory::PhysicalTechnique, 1, 2, 0);
        let palm = Ability::new("Palm", AbilityCategory::ResourceTechnique, 1, 2, 0);
        let loadout = Loadout::new(vec![
            EquippedAbility::slotted(claw, 5),
            EquippedAbility::slotted(palm, 1),
        ]);

        assert_eq!(loadout.select_active().unwrap().name, "Claw");
    }

    #[test]
    fn test_unknown_name_fails() {
        let catalog = AbilityCatalog::with_defaults();
        let result = Loadout::from_catalog(&catalog, &[("Missing", Some(1))]);
        assert!(matches!(result, Err(CombatError::UnknownAbility(_))));
    }

    #[test]
    fn test_hotbar_numbers_slots_in_order() {
        let catalog = AbilityCatalog::with_defaults();
        let loadout = Loadout::hotbar(&catalog, &["Iron Shirt", "Tiger Claw"]).unwrap();

        let slots: Vec<_> = loadout.entries().iter().map(|e| e.hotbar_slot).collect();
        assert_eq!(slots, vec![Some(1), Some(2)]);
        assert_eq!(loadout.select_active().unwrap().name, "Tiger Claw");
    }

    #[test]
    fn test_hotbar_overflow_is_an_error() {
        let catalog = AbilityCatalog::with_defaults();
        let names = vec!["Tiger Claw"; 256];
        let result = Loadout::hotbar(&catalog, &names);
        assert!(matches!(result, Err(CombatError::InvalidEncounter(_))));

        assert_eq!(Loadout::hotbar(&catalog, &names[..255]).unwrap().entries().len(), 255);
    }
}
