//! Space Dodger - A 2D arcade dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, scoring, win/lose state, frame loop)
//! - `settings`: Data-driven game configuration
//!
//! Rendering, audio and input devices belong to the hosting engine, which
//! drives the game through [`sim::on_frame`], [`sim::on_collision`] and
//! [`sim::display_text`].

pub mod settings;
pub mod sim;

pub use settings::{ConfigError, GameConfig};
pub use sim::{GamePhase, GameSession, TickInput};

/// Game configuration constants
pub mod consts {
    /// Nominal frame timestep (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Spawn band above the visible area
    pub const SPAWN_X_MIN: f32 = 50.0;
    pub const SPAWN_X_MAX: f32 = 750.0;
    pub const SPAWN_Y_MIN: f32 = -150.0;
    pub const SPAWN_Y_MAX: f32 = -50.0;

    /// Obstacle velocity ranges (pixels/s)
    pub const SPAWN_VX_MIN: f32 = -50.0;
    pub const SPAWN_VX_MAX: f32 = 50.0;
    pub const SPAWN_VY_MIN: f32 = 100.0;
    pub const SPAWN_VY_MAX: f32 = 200.0;

    /// Obstacles created per group (hazards and balls)
    pub const OBSTACLES_PER_GROUP: usize = 10;
    pub const OBSTACLE_SCALE: f32 = 0.5;

    /// Player ship
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 500.0;
    pub const PLAYER_SPEED: f32 = 160.0;
    pub const PLAYER_RADIUS: f32 = 16.0;

    /// Points gained per second of survival
    pub const SCORE_RATE: f32 = 1.0;
    /// Score at which the run is won
    pub const WIN_THRESHOLD: f32 = 150.0;

    /// Delay between losing and the automatic restart
    pub const RESTART_DELAY_MS: u64 = 2000;
    /// How long the explosion stays on screen
    pub const EXPLOSION_VISIBLE_MS: u64 = 500;
}
