//! Ability definitions, catalog and equipped loadouts

pub mod catalog;
pub mod definition;
pub mod loadout;

pub use catalog::AbilityCatalog;
pub use definition::{Ability, AbilityCategory};
pub use loadout::{EquippedAbility, Loadout};
