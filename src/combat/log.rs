//! Append-only combat narration

use serde::{Deserialize, Serialize};

use crate::core::types::Turn;

pub const RAGE_MESSAGE: &str = "🔥 RAGE ACTIVATED!";
pub const DEFEND_MESSAGE: &str = "You take a defensive stance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogEntryKind {
    TurnHeader,
    PlayerAction,
    PlayerDefend,
    OpponentAction,
    RageActivated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: Turn,
    pub kind: LogEntryKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLog {
    entries: Vec<LogEntry>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn, kind: LogEntryKind, text: impl Into<String>) {
        self.entries.push(LogEntry {
            turn,
            kind,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Narration lines in order, as reported in snapshots
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    pub fn count(&self, kind: LogEntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Entries written during one turn
    pub fn for_turn(&self, turn: Turn) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.turn == turn)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn turn_header(turn: Turn) -> String {
    format!("--- Turn {} ---", turn)
}

pub fn crit_suffix(is_crit: bool) -> &'static str {
    if is_crit {
        " CRITICAL!"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_order() {
        let mut log = CombatLog::new();
        log.push(1, LogEntryKind::TurnHeader, turn_header(1));
        log.push(1, LogEntryKind::PlayerDefend, DEFEND_MESSAGE);
        log.push(2, LogEntryKind::TurnHeader, turn_header(2));

        assert_eq!(
            log.lines(),
            vec!["--- Turn 1 ---", "You take a defensive stance", "--- Turn 2 ---"]
        );
        assert_eq!(log.count(LogEntryKind::TurnHeader), 2);
        assert_eq!(log.for_turn(1).count(), 2);
    }

    #[test]
    fn test_turn_header_is_a_single_line() {
        // Each entry is one line; spacing between turns is left to the renderer
        assert_eq!(turn_header(7), "--- Turn 7 ---");
        assert!(!turn_header(1).contains('\n'));
    }
}
