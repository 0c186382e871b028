//! Wound and rage state machine
//!
//! Wounds only ever grow. Once they reach the threshold the encounter flips
//! from `Calm` to `Raging` and stays there.

use serde::{Deserialize, Serialize};

use crate::core::types::Points;

/// Rage state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RageState {
    #[default]
    Calm,
    Raging,
}

impl RageState {
    pub fn is_raging(&self) -> bool {
        matches!(self, RageState::Raging)
    }

    /// Next state given the total wounds taken so far
    pub fn apply(self, wounds: Points, threshold: f64) -> RageState {
        match self {
            RageState::Calm if wounds as f64 >= threshold => RageState::Raging,
            RageState::Calm => RageState::Calm,
            RageState::Raging => RageState::Raging,
        }
    }
}

/// A fired state change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RageTransition {
    pub from: RageState,
    pub to: RageState,
    /// Wounds at the moment of the transition
    pub wounds: Points,
    pub threshold: f64,
}

/// Tracks cumulative wounds and drives the rage state
#[derive(Debug, Clone, PartialEq)]
pub struct WoundTracker {
    wounds: Points,
    threshold: f64,
    state: RageState,
}

impl WoundTracker {
    pub fn new(max_hp: Points, threshold_ratio: f64) -> Self {
        Self {
            wounds: 0,
            threshold: max_hp as f64 * threshold_ratio,
            state: RageState::Calm,
        }
    }

    /// Record damage taken. Returns the transition if this hit ignited rage.
    pub fn record(&mut self, damage: Points) -> Option<RageTransition> {
        self.wounds += damage.max(0);

        let from = self.state;
        self.state = from.apply(self.wounds, self.threshold);

        (from != self.state).then_some(RageTransition {
            from,
            to: self.state,
            wounds: self.wounds,
            threshold: self.threshold,
        })
    }

    pub fn wounds(&self) -> Points {
        self.wounds
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> RageState {
        self.state
    }

    pub fn is_raging(&self) -> bool {
        self.state.is_raging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_half_max_hp() {
        let tracker = WoundTracker::new(250, 0.5);
        assert_eq!(tracker.threshold(), 125.0);
        assert_eq!(tracker.state(), RageState::Calm);
    }

    #[test]
    fn test_exact_threshold_ignites() {
        let mut tracker = WoundTracker::new(100, 0.5);
        assert!(tracker.record(49).is_none());

        let transition = tracker.record(1).unwrap();
        assert_eq!(transition.from, RageState::Calm);
        assert_eq!(transition.to, RageState::Raging);
        assert_eq!(transition.wounds, 50);
        assert!(tracker.is_raging());
    }

    #[test]
    fn test_fires_only_once() {
        let mut tracker = WoundTracker::new(100, 0.5);
        assert!(tracker.record(80).is_some());
        assert!(tracker.record(10).is_none());
        assert!(tracker.record(10).is_none());
        assert!(tracker.is_raging());
        assert_eq!(tracker.wounds(), 100);
    }

    #[test]
    fn test_odd_max_hp_threshold() {
        // threshold 12.5: 12 wounds stay calm, 13 ignite
        let mut tracker = WoundTracker::new(25, 0.5);
        assert!(tracker.record(12).is_none());
        assert!(tracker.record(1).is_some());
    }

    #[test]
    fn test_raging_never_calms() {
        assert_eq!(RageState::Raging.apply(0, 100.0), RageState::Raging);
        assert_eq!(RageState::Calm.apply(99, 100.0), RageState::Calm);
        assert_eq!(RageState::Calm.apply(100, 100.0), RageState::Raging);
    }
}
