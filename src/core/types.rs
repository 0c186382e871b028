//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SESSION_PREFIX: &str = "combat_";

/// Opaque identifier for one live combat session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a session id handed back by an external caller. Accepts the
    /// displayed `combat_<uuid>` form as well as a bare UUID.
    pub fn parse(s: &str) -> Option<Self> {
        let raw = s.strip_prefix(SESSION_PREFIX).unwrap_or(s);
        Uuid::parse_str(raw).ok().map(SessionId)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", SESSION_PREFIX, self.0.simple())
    }
}

/// Turn counter (1-based)
pub type Turn = u32;

/// Hit points and chi are signed: HP is allowed to go below zero.
pub type Points = i64;
