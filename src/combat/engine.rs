//! Combat engine - owns one encounter and resolves it turn by turn
//!
//! A turn is: roll initiative, first side acts, second side acts only if
//! still standing, turn counter advances. Calls after the encounter has
//! ended are rejected and leave the state untouched.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::abilities::Loadout;
use crate::combat::damage::{resolve_action, ActionKind, ActionResult};
use crate::combat::initiative::{roll_initiative, InitiativeRoll, Side};
use crate::combat::log::{crit_suffix, turn_header, CombatLog, LogEntryKind, DEFEND_MESSAGE, RAGE_MESSAGE};
use crate::combat::outcome::EncounterStatus;
use crate::combat::rage::{RageState, WoundTracker};
use crate::combat::rng::CombatRng;
use crate::combat::settlement::Settlement;
use crate::combat::snapshot::EncounterSnapshot;
use crate::core::config::{config, CombatConfig};
use crate::core::error::{CombatError, Result};
use crate::core::types::{Points, Turn};
use crate::fighter::{FighterSnapshot, Rewards};

/// Player's chosen action for a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Use the first ready ability, or a basic attack
    #[default]
    Attack,
    /// Logged stance with no mechanical effect yet
    Defend,
}

impl FromStr for Action {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(Action::Attack),
            "defend" => Ok(Action::Defend),
            other => Err(CombatError::InvalidAction(other.to_string())),
        }
    }
}

/// Collects the pieces of an encounter and validates them together
#[derive(Debug, Clone, Default)]
pub struct EncounterBuilder {
    player: Option<FighterSnapshot>,
    opponent: Option<FighterSnapshot>,
    loadout: Loadout,
    config: Option<CombatConfig>,
    rewards: Rewards,
}

impl EncounterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, player: FighterSnapshot) -> Self {
        self.player = Some(player);
        self
    }

    pub fn opponent(mut self, opponent: FighterSnapshot) -> Self {
        self.opponent = Some(opponent);
        self
    }

    pub fn loadout(mut self, loadout: impl Into<Loadout>) -> Self {
        self.loadout = loadout.into();
        self
    }

    /// Override the global config for this encounter
    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Rewards paid out on victory
    pub fn rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }

    /// Build with a ChaCha generator seeded from `seed`
    pub fn seeded(self, seed: u64) -> Result<CombatEngine<ChaCha8Rng>> {
        self.build(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn build<R: CombatRng>(self, rng: R) -> Result<CombatEngine<R>> {
        let player = self
            .player
            .ok_or_else(|| CombatError::InvalidEncounter("missing player snapshot".into()))?;
        let opponent = self
            .opponent
            .ok_or_else(|| CombatError::InvalidEncounter("missing opponent snapshot".into()))?;

        player.validate()?;
        opponent.validate()?;
        if player.name == opponent.name {
            return Err(CombatError::InvalidEncounter(format!(
                "both fighters are named {}",
                player.name
            )));
        }
        for equipped in self.loadout.entries() {
            equipped.ability.validate()?;
        }

        let config = self.config.unwrap_or_else(|| config().clone());
        config.validate()?;

        let wounds = WoundTracker::new(player.vitals.max_hp, config.rage_threshold_ratio);

        tracing::debug!(
            player = %player.name,
            opponent = %opponent.name,
            rage_threshold = wounds.threshold(),
            abilities = self.loadout.entries().len(),
            "encounter created"
        );

        Ok(CombatEngine {
            character_hp: player.vitals.hp,
            character_chi: player.vitals.chi,
            enemy_hp: opponent.vitals.hp,
            player,
            opponent,
            loadout: self.loadout,
            config,
            rewards: self.rewards,
            wounds,
            turn: 1,
            log: CombatLog::new(),
            last_initiative: None,
            last_actions: Vec::new(),
            rng,
        })
    }
}

/// One live encounter
///
/// Not safe for concurrent `resolve_turn` calls; the session registry
/// serializes access.
#[derive(Debug)]
pub struct CombatEngine<R = ChaCha8Rng> {
    player: FighterSnapshot,
    opponent: FighterSnapshot,
    loadout: Loadout,
    config: CombatConfig,
    rewards: Rewards,

    character_hp: Points,
    character_chi: Points,
    enemy_hp: Points,
    wounds: WoundTracker,
    turn: Turn,
    log: CombatLog,

    last_initiative: Option<InitiativeRoll>,
    last_actions: Vec<ActionResult>,
    rng: R,
}

impl<R: CombatRng> CombatEngine<R> {
    /// Start an encounter with the global config
    pub fn new(
        player: FighterSnapshot,
        opponent: FighterSnapshot,
        loadout: impl Into<Loadout>,
        rng: R,
    ) -> Result<Self> {
        EncounterBuilder::new()
            .player(player)
            .opponent(opponent)
            .loadout(loadout)
            .build(rng)
    }

    /// Resolve one full turn
    pub fn resolve_turn(&mut self, action: Action) -> Result<EncounterSnapshot> {
        if self.status().is_terminal() {
            tracing::warn!(turn = self.turn, status = ?self.status(), "turn requested on finished encounter");
            return Err(CombatError::EncounterAlreadyResolved { turn: self.turn });
        }

        self.last_actions.clear();

        let initiative = roll_initiative(
            self.player.attributes.flow,
            self.opponent.attributes.flow,
            self.config.initiative_die,
            &mut self.rng,
        );
        tracing::debug!(
            turn = self.turn,
            player_speed = initiative.player_speed,
            opponent_speed = initiative.opponent_speed,
            first = ?initiative.first,
            "initiative"
        );
        self.last_initiative = Some(initiative);

        self.log.push(self.turn, LogEntryKind::TurnHeader, turn_header(self.turn));

        self.act(initiative.first, action);
        let second = initiative.first.other();
        if self.is_standing(second) {
            self.act(second, action);
        }

        self.turn += 1;

        let snapshot = self.snapshot();
        if snapshot.is_terminal() {
            tracing::info!(
                status = ?snapshot.status(),
                turns = self.turns_taken(),
                character_hp = self.character_hp,
                enemy_hp = self.enemy_hp,
                "encounter ended"
            );
        }
        Ok(snapshot)
    }

    fn is_standing(&self, side: Side) -> bool {
        match side {
            Side::Player => self.character_hp > 0,
            Side::Opponent => self.enemy_hp > 0,
        }
    }

    fn act(&mut self, side: Side, action: Action) {
        match side {
            Side::Player => self.player_act(action),
            Side::Opponent => self.opponent_act(),
        }
    }

    fn player_act(&mut self, action: Action) {
        match action {
            Action::Defend => {
                self.log.push(self.turn, LogEntryKind::PlayerDefend, DEFEND_MESSAGE);
            }
            Action::Attack => {
                let result = resolve_action(
                    &self.player,
                    &mut self.character_chi,
                    &self.opponent,
                    self.loadout.select_active(),
                    &self.config,
                    &mut self.rng,
                );

                self.enemy_hp -= result.damage;

                let line = match (&result.kind, &result.ability) {
                    (ActionKind::Skill, Some(name)) => format!(
                        "You use {} for {} damage{}",
                        name,
                        result.damage,
                        crit_suffix(result.is_crit)
                    ),
                    _ => format!(
                        "You attack for {} damage{}",
                        result.damage,
                        crit_suffix(result.is_crit)
                    ),
                };
                self.log.push(self.turn, LogEntryKind::PlayerAction, line);
                self.last_actions.push(result);
            }
        }
    }

    /// The opponent never spends chi and always uses the basic attack.
    fn opponent_act(&mut self) {
        let mut opponent_chi = self.opponent.vitals.chi;
        let result = resolve_action(
            &self.opponent,
            &mut opponent_chi,
            &self.player,
            None,
            &self.config,
            &mut self.rng,
        );

        self.character_hp -= result.damage;

        if let Some(transition) = self.wounds.record(result.damage) {
            tracing::info!(
                wounds = transition.wounds,
                threshold = transition.threshold,
                turn = self.turn,
                "rage activated"
            );
            self.log.push(self.turn, LogEntryKind::RageActivated, RAGE_MESSAGE);
        }

        self.log.push(
            self.turn,
            LogEntryKind::OpponentAction,
            format!("{} attacks for {} damage", self.opponent.name, result.damage),
        );
        self.last_actions.push(result);
    }

    /// Full observable state
    pub fn snapshot(&self) -> EncounterSnapshot {
        let status = self.status();
        EncounterSnapshot {
            character_hp: self.character_hp,
            character_max_hp: self.player.vitals.max_hp,
            character_chi: self.character_chi,
            character_max_chi: self.player.vitals.max_chi,
            enemy_hp: self.enemy_hp,
            enemy_max_hp: self.opponent.vitals.max_hp,
            enemy_name: self.opponent.name.clone(),
            wounds: self.wounds.wounds(),
            rage_active: self.wounds.is_raging(),
            turn: self.turn,
            log: self.log.lines(),
            victory: status.victory(),
            defeat: status.defeat(),
        }
    }

    pub fn status(&self) -> EncounterStatus {
        EncounterStatus::from_hp(self.character_hp, self.enemy_hp)
    }

    /// State delta for persistence. Rewards only on a clean victory.
    pub fn settlement(&self) -> Settlement {
        let status = self.status();
        Settlement {
            character_name: self.player.name.clone(),
            character_hp: self.character_hp,
            character_chi: self.character_chi,
            wounds: self.wounds.wounds(),
            status,
            turns_taken: self.turns_taken(),
            rewards: (status == EncounterStatus::Victory).then_some(self.rewards),
        }
    }

    /// Turn counter as reported in snapshots (next turn to be played)
    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn turns_taken(&self) -> Turn {
        self.turn - 1
    }

    pub fn rage_state(&self) -> RageState {
        self.wounds.state()
    }

    pub fn wounds(&self) -> &WoundTracker {
        &self.wounds
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    /// Actions resolved during the most recent turn, in order
    pub fn last_actions(&self) -> &[ActionResult] {
        &self.last_actions
    }

    pub fn last_initiative(&self) -> Option<InitiativeRoll> {
        self.last_initiative
    }

    pub fn player(&self) -> &FighterSnapshot {
        &self.player
    }

    pub fn opponent(&self) -> &FighterSnapshot {
        &self.opponent
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }
}
