//! Survival score

use serde::{Deserialize, Serialize};

/// Score that grows with time survived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    value: f32,
    /// Points per second
    rate: f32,
}

impl ScoreTracker {
    pub fn new(rate: f32) -> Self {
        Self {
            value: 0.0,
            rate: rate.max(0.0),
        }
    }

    /// Add `rate * dt` when permitted. Non-positive or non-finite `dt` is ignored.
    pub fn tick(&mut self, dt: f32, permitted: bool) {
        if permitted && dt.is_finite() && dt > 0.0 {
            self.value += self.rate * dt;
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Whole points shown to the player
    pub fn display_value(&self) -> u32 {
        self.value.floor() as u32
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// Overwrite the score (for hosts restoring a run and for tests)
    pub fn set_value(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value.max(0.0);
        }
    }
}
