//! Action resolution: ability gating, damage roll, scaling, crits, defense
//!
//! The choice between an ability and a basic attack is made once per action
//! and carried through as `ActionChoice`.

use serde::{Deserialize, Serialize};

use crate::abilities::{Ability, AbilityCategory};
use crate::combat::rng::CombatRng;
use crate::core::config::CombatConfig;
use crate::core::types::Points;
use crate::fighter::{Attributes, FighterSnapshot};

/// Label used in narration when no ability is used
pub const BASIC_ATTACK_NAME: &str = "Basic Attack";

/// What an attacker actually does this action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionChoice<'a> {
    UseAbility(&'a Ability),
    BasicAttack,
}

impl<'a> ActionChoice<'a> {
    /// Gate a candidate ability on the attacker's chi. Unaffordable
    /// abilities fall back to a basic attack.
    pub fn decide(candidate: Option<&'a Ability>, chi: Points) -> Self {
        match candidate {
            Some(ability) if ability.affordable_with(chi) => ActionChoice::UseAbility(ability),
            _ => ActionChoice::BasicAttack,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            ActionChoice::UseAbility(_) => ActionKind::Skill,
            ActionChoice::BasicAttack => ActionKind::Attack,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ActionChoice::UseAbility(ability) => &ability.name,
            ActionChoice::BasicAttack => BASIC_ATTACK_NAME,
        }
    }

    /// Attribute that scales the damage roll
    pub fn governing_attribute(&self, attributes: &Attributes) -> Points {
        match self {
            ActionChoice::UseAbility(ability)
                if ability.category == AbilityCategory::ResourceTechnique =>
            {
                attributes.spirit
            }
            _ => attributes.body,
        }
    }
}

/// Reported category of a resolved action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Attack,
    Skill,
}

/// Result of one resolved action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub damage: Points,
    pub is_crit: bool,
    pub attacker_name: String,
    pub defender_name: String,
    pub kind: ActionKind,
    /// Name of the ability used, `None` for a basic attack
    pub ability: Option<String>,
    pub chi_spent: Points,
    pub message: String,
}

/// Scale a damage roll by the governing attribute
pub fn scale_damage(attribute: Points, roll: Points, divisor: f64) -> f64 {
    attribute as f64 * (roll as f64 / divisor)
}

/// Crit chance for an attacker with the given flow
pub fn crit_chance(flow: Points, base_chance: f64) -> f64 {
    flow as f64 / 100.0 + base_chance
}

/// Subtract defense and floor, never going below `min_damage`
pub fn mitigate(damage: f64, defense: Points, min_damage: Points) -> Points {
    // f64::max ignores a NaN operand, so a NaN hit still lands min_damage
    (damage - defense as f64).floor().max(min_damage as f64) as Points
}

/// Resolve one action of `attacker` against `defender`.
///
/// `attacker_chi` is the attacker's live chi pool; an affordable ability's
/// cost is deducted from it before any roll.
pub fn resolve_action<R: CombatRng + ?Sized>(
    attacker: &FighterSnapshot,
    attacker_chi: &mut Points,
    defender: &FighterSnapshot,
    candidate: Option<&Ability>,
    config: &CombatConfig,
    rng: &mut R,
) -> ActionResult {
    // Step 1: gate the ability on chi
    let choice = ActionChoice::decide(candidate, *attacker_chi);
    let chi_spent = match choice {
        ActionChoice::UseAbility(ability) => {
            *attacker_chi -= ability.chi_cost;
            ability.chi_cost
        }
        ActionChoice::BasicAttack => 0,
    };

    // Step 2: roll base damage
    let roll = match choice {
        ActionChoice::UseAbility(ability) => rng.roll_range(ability.damage_min, ability.damage_max),
        ActionChoice::BasicAttack => rng.roll_range(config.basic_attack_min, config.basic_attack_max),
    };

    // Step 3: scale by the governing attribute
    let attribute = choice.governing_attribute(&attacker.attributes);
    let mut damage = scale_damage(attribute, roll, config.damage_roll_divisor);

    // Step 4: crit after scaling, before defense
    let chance = crit_chance(attacker.attributes.flow, config.base_crit_chance);
    let is_crit = rng.roll_unit() < chance;
    if is_crit {
        damage *= config.crit_multiplier;
    }

    // Step 5: defense, floored at the minimum
    let final_damage = mitigate(damage, defender.defense, config.min_damage);

    let message = format!(
        "{}: {}{} damage",
        choice.label(),
        if is_crit { "Critical hit! " } else { "" },
        final_damage
    );

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        action = choice.label(),
        roll,
        is_crit,
        damage = final_damage,
        chi_spent,
        "resolved action"
    );

    ActionResult {
        damage: final_damage,
        is_crit,
        attacker_name: attacker.name.clone(),
        defender_name: defender.name.clone(),
        kind: choice.kind(),
        ability: match choice {
            ActionChoice::UseAbility(ability) => Some(ability.name.clone()),
            ActionChoice::BasicAttack => None,
        },
        chi_spent,
        message,
    }
}
