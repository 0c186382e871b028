//! Initiative: who acts first this turn
//!
//! Rolled fresh every turn. Nothing carries over between turns.

use serde::{Deserialize, Serialize};

use crate::combat::rng::CombatRng;
use crate::core::types::Points;

/// One side of the encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Result of one initiative roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitiativeRoll {
    pub player_speed: Points,
    pub opponent_speed: Points,
    pub first: Side,
}

/// Roll speed = flow + d(die) for each side. Ties go to the player.
///
/// The player's die is rolled before the opponent's.
pub fn roll_initiative<R: CombatRng + ?Sized>(
    player_flow: Points,
    opponent_flow: Points,
    die: Points,
    rng: &mut R,
) -> InitiativeRoll {
    let player_speed = player_flow + rng.roll_range(1, die);
    let opponent_speed = opponent_flow + rng.roll_range(1, die);

    let first = if player_speed >= opponent_speed {
        Side::Player
    } else {
        Side::Opponent
    };

    InitiativeRoll {
        player_speed,
        opponent_speed,
        first,
    }
}
