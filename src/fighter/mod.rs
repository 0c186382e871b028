//! Combatant data consumed by the engine

pub mod character;
pub mod enemy;
pub mod snapshot;

pub use character::{CharacterSheet, DerivedStats};
pub use enemy::{EnemyProfile, Rewards};
pub use snapshot::{Attributes, FighterSnapshot, Vitals, DEFAULT_DEFENSE, DEFAULT_FLOW};
