use thiserror::Error;

use crate::core::types::SessionId;

#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Invalid encounter: {0}")]
    InvalidEncounter(String),

    #[error("Encounter already resolved (turn {turn})")]
    EncounterAlreadyResolved { turn: u32 },

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown ability: {0}")]
    UnknownAbility(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CombatError>;
