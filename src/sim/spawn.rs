//! Random spawn placement for obstacles
//!
//! Obstacles enter from a band above the visible area with a downward
//! velocity and a small horizontal drift.

use glam::Vec2;
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::settings::{ConfigError, GameConfig, Range};

/// A freshly sampled spawn position and velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSample {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// One sampled axis: the configured bounds and their distribution
#[derive(Debug, Clone, Copy)]
struct Axis {
    range: Range,
    dist: Uniform<f32>,
}

impl Axis {
    fn new(range: Range, field: &'static str) -> Result<Self, ConfigError> {
        range.validate(field)?;
        let dist = Uniform::new_inclusive(range.min, range.max).map_err(|_| {
            ConfigError::InvalidRange {
                field,
                min: range.min,
                max: range.max,
            }
        })?;
        Ok(Self { range, dist })
    }
}

/// Uniform spawn sampler over validated bounds
#[derive(Debug, Clone)]
pub struct SpawnPolicy {
    x: Axis,
    y: Axis,
    vx: Axis,
    vy: Axis,
}

impl SpawnPolicy {
    /// Build a policy, rejecting empty, non-finite or overflowing ranges
    pub fn new(x: Range, y: Range, vx: Range, vy: Range) -> Result<Self, ConfigError> {
        Ok(Self {
            x: Axis::new(x, "spawn_x")?,
            y: Axis::new(y, "spawn_y")?,
            vx: Axis::new(vx, "spawn_vx")?,
            vy: Axis::new(vy, "spawn_vy")?,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(config.spawn_x, config.spawn_y, config.spawn_vx, config.spawn_vy)
    }

    pub fn x_range(&self) -> Range {
        self.x.range
    }

    pub fn y_range(&self) -> Range {
        self.y.range
    }

    pub fn vx_range(&self) -> Range {
        self.vx.range
    }

    pub fn vy_range(&self) -> Range {
        self.vy.range
    }

    /// Draw a spawn sample. Draw order is fixed (x, y, vy, vx) so a seeded
    /// RNG always reproduces the same placements.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SpawnSample {
        let x = self.x.dist.sample(rng);
        let y = self.y.dist.sample(rng);
        let vy = self.vy.dist.sample(rng);
        let vx = self.vx.dist.sample(rng);
        SpawnSample {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
        }
    }
}
