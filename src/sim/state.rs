//! Game session and core simulation types
//!
//! A `GameSession` owns everything a run needs: configuration, the seeded
//! RNG, obstacles, score, win/lose state, the player and pending timers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleField, ObstacleKind};
use super::phase::{GamePhase, GameStateMachine};
use super::score::ScoreTracker;
use super::spawn::SpawnPolicy;
use super::timer::TimerQueue;
use crate::settings::{ConfigError, GameConfig};

/// Things that happened during a frame, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player collided with an obstacle
    Lost { score: u32 },
    /// Score reached the win threshold
    Won { score: u32 },
    /// Run restarted after a loss
    Restarted,
    /// Explosion sprite should appear at `pos`
    ExplosionShown { pos: Vec2 },
    ExplosionHidden,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerShip {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Red hit tint, applied on loss
    pub tinted: bool,
}

impl PlayerShip {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            tinted: false,
        }
    }

    /// Move by velocity and keep the ship inside `[0, world]`
    pub fn integrate(&mut self, dt: f32, world: Vec2) {
        self.pos += self.vel * dt;
        self.clamp_to(world);
    }

    pub fn clamp_to(&mut self, world: Vec2) {
        let r = Vec2::splat(self.radius).min(world * 0.5);
        self.pos = self.pos.clamp(r, world - r);
    }
}

/// Serializable view of a session for hosts and debugging
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub seed: u64,
    pub phase: GamePhase,
    pub score: f32,
    pub display_score: u32,
    pub clock_ms: u64,
    pub player: PlayerShip,
    pub obstacles: Vec<Obstacle>,
    pub explosion: Option<Vec2>,
    pub pending_timers: usize,
}

/// Complete state of a run (single-threaded, deterministic for a seed)
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub field: ObstacleField,
    pub score: ScoreTracker,
    pub state: GameStateMachine,
    pub player: PlayerShip,
    /// Explosion sprite position while visible
    pub explosion: Option<Vec2>,
    pub(crate) timers: TimerQueue,
    pub(crate) policy: SpawnPolicy,
    pub(crate) rng: Pcg32,
    seed: u64,
    /// Session clock in seconds
    elapsed: f64,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Validate the config and build a fresh run with the given seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let policy = SpawnPolicy::from_config(&config)?;
        let (sx, sy) = config.player_start;

        let mut session = Self {
            field: ObstacleField::new(),
            score: ScoreTracker::new(config.score_rate),
            state: GameStateMachine::new(config.win_threshold),
            player: PlayerShip::new(Vec2::new(sx, sy), config.player_radius),
            explosion: None,
            timers: TimerQueue::new(),
            policy,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            elapsed: 0.0,
            events: Vec::new(),
            config,
        };
        session.populate();

        log::info!(
            "Session started (seed {}, {} obstacles, {} pts/s, win at {})",
            seed,
            session.field.len(),
            session.score.rate(),
            session.state.win_threshold()
        );
        Ok(session)
    }

    /// Session with the default configuration
    pub fn with_seed(seed: u64) -> Self {
        // The default config always validates
        Self::new(GameConfig::default(), seed).unwrap_or_else(|e| unreachable!("{e}"))
    }

    fn populate(&mut self) {
        self.field.initialize(
            self.config.obstacles_per_group,
            self.config.obstacle_scale,
            ObstacleKind::random_hazard,
            &self.policy,
            &mut self.rng,
        );
        let (sx, sy) = self.config.player_start;
        self.player = PlayerShip::new(Vec2::new(sx, sy), self.config.player_radius);
        self.player.clamp_to(self.world_size());
    }

    /// Score 0, phase Playing, fresh obstacles and player, no pending timers.
    /// Valid from any phase.
    pub fn reset(&mut self) {
        self.score.reset();
        self.state.reset();
        self.timers.clear();
        self.explosion = None;
        self.populate();
        log::info!("Session reset");
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.config.screen_width, self.config.screen_height)
    }

    pub fn spawn_policy(&self) -> &SpawnPolicy {
        &self.policy
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Session clock in whole milliseconds
    pub fn clock_ms(&self) -> u64 {
        (self.elapsed * 1000.0).floor() as u64
    }

    pub(crate) fn advance_clock(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt as f64;
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            seed: self.seed,
            phase: self.phase(),
            score: self.score.value(),
            display_score: self.score.display_value(),
            clock_ms: self.clock_ms(),
            player: self.player.clone(),
            obstacles: self.field.iter().cloned().collect(),
            explosion: self.explosion,
            pending_timers: self.timers.len(),
        }
    }
}
