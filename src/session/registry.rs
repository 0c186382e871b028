//! Session registry: opaque session id -> one live combat engine
//!
//! Each engine sits behind its own mutex, so at most one turn is in flight
//! per encounter while different encounters proceed independently. The map
//! lock is only held long enough to look up, insert or remove an entry.

use ahash::AHashMap;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::combat::engine::{Action, CombatEngine};
use crate::combat::rng::CombatRng;
use crate::combat::settlement::Settlement;
use crate::combat::snapshot::EncounterSnapshot;
use crate::core::error::{CombatError, Result};
use crate::core::types::SessionId;

type SharedEngine<R> = Arc<Mutex<CombatEngine<R>>>;

/// Result of playing one turn through the registry
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub snapshot: EncounterSnapshot,
    /// Present when this turn ended the encounter and the session was evicted
    pub settlement: Option<Settlement>,
}

pub struct SessionRegistry<R = ChaCha8Rng> {
    sessions: RwLock<AHashMap<SessionId, SharedEngine<R>>>,
}

impl<R> Default for SessionRegistry<R> {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(AHashMap::new()),
        }
    }
}

impl<R: CombatRng + Send + 'static> SessionRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new encounter and return its id and opening snapshot
    pub async fn start(&self, engine: CombatEngine<R>) -> (SessionId, EncounterSnapshot) {
        let id = SessionId::new();
        let snapshot = engine.snapshot();

        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(engine)));

        tracing::info!(session = %id, enemy = %snapshot.enemy_name, "combat session started");
        (id, snapshot)
    }

    async fn lookup(&self, id: SessionId) -> Result<SharedEngine<R>> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).cloned().ok_or_else(|| {
            tracing::warn!(session = %id, "no active combat");
            CombatError::SessionNotFound(id)
        })
    }

    /// Play one turn. A turn that ends the encounter evicts the session.
    pub async fn act(&self, id: SessionId, action: Action) -> Result<TurnOutcome> {
        let engine = self.lookup(id).await?;

        let (snapshot, settlement) = {
            let mut engine = engine.lock().await;
            let snapshot = engine.resolve_turn(action)?;
            let settlement = snapshot.is_terminal().then(|| engine.settlement());
            (snapshot, settlement)
        };

        if settlement.is_some() {
            self.evict(id).await;
        }

        Ok(TurnOutcome {
            snapshot,
            settlement,
        })
    }

    /// Current snapshot without playing a turn
    pub async fn snapshot(&self, id: SessionId) -> Result<EncounterSnapshot> {
        let engine = self.lookup(id).await?;
        let engine = engine.lock().await;
        Ok(engine.snapshot())
    }

    /// Drop a session. Returns false if it was not registered.
    pub async fn evict(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(session = %id, "combat session evicted");
        }
        removed
    }

    pub async fn contains(&self, id: SessionId) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::engine::EncounterBuilder;
    use crate::combat::rng::ScriptedRng;
    use crate::fighter::{CharacterSheet, EnemyProfile, Vitals};

    fn engine(enemy_hp: i64) -> CombatEngine<ScriptedRng> {
        let mut bandit = EnemyProfile::shadow_bandit().to_snapshot();
        bandit.vitals = Vitals::full(enemy_hp, 0);
        EncounterBuilder::new()
            .player(CharacterSheet::test_warrior().to_snapshot())
            .opponent(bandit)
            .build(ScriptedRng::fixed(10, 1.0))
            .unwrap()
    }

    #[tokio::test]
    async fn test_start_and_act() {
        let registry = SessionRegistry::new();
        let (id, opening) = registry.start(engine(80)).await;
        assert_eq!(opening.turn, 1);
        assert!(registry.contains(id).await);

        let outcome = registry.act(id, Action::Attack).await.unwrap();
        assert_eq!(outcome.snapshot.enemy_hp, 70);
        assert!(outcome.settlement.is_none());
        assert_eq!(registry.snapshot(id).await.unwrap(), outcome.snapshot);
    }

    #[tokio::test]
    async fn test_terminal_turn_evicts() {
        let registry = SessionRegistry::new();
        let (id, _) = registry.start(engine(10)).await;

        let outcome = registry.act(id, Action::Attack).await.unwrap();
        assert!(outcome.snapshot.victory);
        assert!(outcome.settlement.is_some());
        assert!(registry.is_empty().await);

        let err = registry.act(id, Action::Attack).await.unwrap_err();
        assert!(matches!(err, CombatError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let registry: SessionRegistry<ScriptedRng> = SessionRegistry::new();
        let err = registry.snapshot(SessionId::new()).await.unwrap_err();
        assert!(matches!(err, CombatError::SessionNotFound(_)));
        assert!(!registry.evict(SessionId::new()).await);
    }
}
