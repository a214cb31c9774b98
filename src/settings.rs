//! Game configuration
//!
//! Every tunable of a run lives here. Defaults reproduce the classic
//! 800x600 layout; hosts may override any subset from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while building or validating a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A `[min, max]` range is empty or not finite
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    /// A value that must be strictly positive is not
    NonPositive { field: &'static str, value: f32 },
    /// JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRange { field, min, max } => {
                write!(f, "Invalid range for {field}: [{min}, {max}]")
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::Parse(msg) => write!(f, "Config parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// An inclusive `[min, max]` interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Fails if the range is empty, has non-finite bounds, or is too wide
    /// for its width to fit in an f32
    pub fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && (self.max - self.min).is_finite()
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Full configuration of a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Spawning ===
    pub spawn_x: Range,
    pub spawn_y: Range,
    pub spawn_vx: Range,
    pub spawn_vy: Range,
    /// Obstacles per group (hazards and balls each get this many)
    pub obstacles_per_group: usize,
    pub obstacle_scale: f32,

    // === Player ===
    pub player_start: (f32, f32),
    pub player_speed: f32,
    pub player_radius: f32,

    // === Scoring ===
    /// Points per second while playing
    pub score_rate: f32,
    pub win_threshold: f32,

    // === Timers ===
    pub restart_delay_ms: u64,
    pub explosion_visible_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            spawn_x: Range::new(SPAWN_X_MIN, SPAWN_X_MAX),
            spawn_y: Range::new(SPAWN_Y_MIN, SPAWN_Y_MAX),
            spawn_vx: Range::new(SPAWN_VX_MIN, SPAWN_VX_MAX),
            spawn_vy: Range::new(SPAWN_VY_MIN, SPAWN_VY_MAX),
            obstacles_per_group: OBSTACLES_PER_GROUP,
            obstacle_scale: OBSTACLE_SCALE,

            player_start: (PLAYER_START_X, PLAYER_START_Y),
            player_speed: PLAYER_SPEED,
            player_radius: PLAYER_RADIUS,

            score_rate: SCORE_RATE,
            win_threshold: WIN_THRESHOLD,

            restart_delay_ms: RESTART_DELAY_MS,
            explosion_visible_ms: EXPLOSION_VISIBLE_MS,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every range and positive quantity
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        self.spawn_x.validate("spawn_x")?;
        self.spawn_y.validate("spawn_y")?;
        self.spawn_vx.validate("spawn_vx")?;
        self.spawn_vy.validate("spawn_vy")?;
        positive("obstacle_scale", self.obstacle_scale)?;
        positive("player_speed", self.player_speed)?;
        positive("player_radius", self.player_radius)?;
        positive("win_threshold", self.win_threshold)?;
        if !self.score_rate.is_finite() || self.score_rate < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "score_rate",
                value: self.score_rate,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.win_threshold, 150.0);
        assert_eq!(config.restart_delay_ms, 2000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "win_threshold": 10.0 }"#).unwrap();
        assert_eq!(config.win_threshold, 10.0);
        assert_eq!(config.screen_height, 600.0);
        assert_eq!(config.spawn_x, Range::new(50.0, 750.0));
    }

    #[test]
    fn test_empty_range_rejected() {
        let json = r#"{ "spawn_x": { "min": 700.0, "max": 100.0 } }"#;
        let err = GameConfig::from_json(json).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidRange {
                field: "spawn_x",
                min: 700.0,
                max: 100.0
            }
        );
    }

    #[test]
    fn test_overflowing_range_rejected() {
        let json = r#"{ "spawn_x": { "min": -3.0e38, "max": 3.0e38 } }"#;
        assert!(matches!(
            GameConfig::from_json(json),
            Err(ConfigError::InvalidRange { field: "spawn_x", .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = GameConfig {
            player_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "player_speed", .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let config = GameConfig {
            obstacles_per_group: 3,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
