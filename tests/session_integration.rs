//! Session registry integration tests

use std::sync::Arc;

use chi_combat::combat::{Action, CombatEngine, EncounterBuilder, EncounterStatus};
use chi_combat::core::config::CombatConfig;
use chi_combat::core::error::CombatError;
use chi_combat::fighter::{CharacterSheet, EnemyProfile};
use chi_combat::session::SessionRegistry;

fn seeded_engine(seed: u64) -> CombatEngine {
    let enemy = EnemyProfile::shadow_bandit();
    EncounterBuilder::new()
        .player(CharacterSheet::test_warrior().to_snapshot())
        .opponent(enemy.to_snapshot())
        .config(CombatConfig::default())
        .rewards(enemy.rewards())
        .seeded(seed)
        .unwrap()
}

#[tokio::test]
async fn test_fight_to_settlement() {
    let registry = SessionRegistry::new();
    let (id, opening) = registry.start(seeded_engine(7)).await;
    assert_eq!(opening.turn, 1);
    assert!(opening.log.is_empty());

    let mut settlement = None;
    for _ in 0..200 {
        let outcome = registry.act(id, Action::Attack).await.unwrap();
        if let Some(done) = outcome.settlement {
            assert!(outcome.snapshot.is_terminal());
            settlement = Some(done);
            break;
        }
    }

    let settlement = settlement.expect("encounter should finish");
    assert!(settlement.status.is_terminal());
    if settlement.status == EncounterStatus::Victory {
        let rewards = settlement.rewards.unwrap();
        assert_eq!((rewards.xp, rewards.gold), (50, 20));
    } else {
        assert!(settlement.rewards.is_none());
    }

    assert!(!registry.contains(id).await);
    assert!(matches!(
        registry.act(id, Action::Attack).await,
        Err(CombatError::SessionNotFound(missing)) if missing == id
    ));
}

#[tokio::test]
async fn test_concurrent_sessions_match_solo_runs() {
    let registry = Arc::new(SessionRegistry::new());
    let seeds = [1u64, 2, 3, 4];

    let mut handles = Vec::new();
    for seed in seeds {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            let (id, _) = registry.start(seeded_engine(seed)).await;
            let mut last = None;
            for _ in 0..200 {
                let outcome = registry.act(id, Action::Attack).await.unwrap();
                let done = outcome.settlement.is_some();
                last = Some(outcome.snapshot);
                if done {
                    break;
                }
            }
            last.unwrap()
        }));
    }

    for (seed, handle) in seeds.into_iter().zip(handles) {
        let shared = handle.await.unwrap();

        let mut solo = seeded_engine(seed);
        let mut expected = solo.snapshot();
        while !expected.is_terminal() {
            expected = solo.resolve_turn(Action::Attack).unwrap();
        }
        assert_eq!(shared, expected);
    }

    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn test_evict_and_snapshot() {
    let registry = SessionRegistry::new();
    let (id, _) = registry.start(seeded_engine(11)).await;

    registry.act(id, Action::Defend).await.unwrap();
    let snapshot = registry.snapshot(id).await.unwrap();
    assert_eq!(snapshot.turn, 2);
    assert!(snapshot.log.iter().any(|l| l == "You take a defensive stance"));
    assert_eq!(snapshot.enemy_hp, snapshot.enemy_max_hp);

    assert!(registry.evict(id).await);
    assert!(!registry.evict(id).await);
    assert!(registry.snapshot(id).await.is_err());
}
