pub mod damage;
pub mod engine;
pub mod initiative;
pub mod log;
pub mod outcome;
pub mod rage;
pub mod rng;
pub mod settlement;
pub mod snapshot;

pub use damage::{resolve_action, ActionChoice, ActionKind, ActionResult, BASIC_ATTACK_NAME};
pub use engine::{Action, CombatEngine, EncounterBuilder};
pub use initiative::{roll_initiative, InitiativeRoll, Side};
pub use log::{CombatLog, LogEntry, LogEntryKind};
pub use outcome::EncounterStatus;
pub use rage::{RageState, RageTransition, WoundTracker};
pub use rng::{CombatRng, ScriptedRng};
pub use settlement::Settlement;
pub use snapshot::EncounterSnapshot;
