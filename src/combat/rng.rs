//! Randomness for combat resolution
//!
//! The engine draws every roll through `CombatRng`. Any `rand` generator
//! works (production uses a seeded `ChaCha8Rng`); `ScriptedRng` replays
//! fixed rolls so tests can pin down initiative, damage and crits.

use rand::Rng;

use crate::core::types::Points;

/// Source of combat rolls
pub trait CombatRng {
    /// Uniform integer in `[min, max]` (inclusive). Returns `min` when the
    /// range is empty or a single value.
    fn roll_range(&mut self, min: Points, max: Points) -> Points;

    /// Uniform float in `[0, 1)`
    fn roll_unit(&mut self) -> f64;
}

impl<R: rand::RngCore> CombatRng for R {
    fn roll_range(&mut self, min: Points, max: Points) -> Points {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn roll_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays scripted rolls, cycling when a script runs out.
///
/// Integer rolls are clamped into the requested range. An empty integer
/// script yields the range minimum; an empty unit script yields 1.0, which
/// never lands a crit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ranges: Vec<Points>,
    units: Vec<f64>,
    range_cursor: usize,
    unit_cursor: usize,
}

impl ScriptedRng {
    pub fn new(ranges: Vec<Points>, units: Vec<f64>) -> Self {
        Self {
            ranges,
            units,
            range_cursor: 0,
            unit_cursor: 0,
        }
    }

    /// Every integer roll is `range`, every unit roll is `unit`
    pub fn fixed(range: Points, unit: f64) -> Self {
        Self::new(vec![range], vec![unit])
    }

    /// Number of integer rolls drawn so far
    pub fn range_rolls(&self) -> usize {
        self.range_cursor
    }

    /// Number of unit rolls drawn so far
    pub fn unit_rolls(&self) -> usize {
        self.unit_cursor
    }
}

impl CombatRng for ScriptedRng {
    fn roll_range(&mut self, min: Points, max: Points) -> Points {
        let value = if self.ranges.is_empty() {
            min
        } else {
            self.ranges[self.range_cursor % self.ranges.len()]
        };
        self.range_cursor += 1;
        value.clamp(min, max.max(min))
    }

    fn roll_unit(&mut self) -> f64 {
        let value = if self.units.is_empty() {
            1.0
        } else {
            self.units[self.unit_cursor % self.units.len()]
        };
        self.unit_cursor += 1;
        value
    }
}
