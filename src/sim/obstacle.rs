//! Falling obstacles and the field that recycles them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::spawn::SpawnPolicy;

/// Visual kind of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Planet,
    Block,
    Rocket,
    Ball,
}

impl ObstacleKind {
    /// Kinds the hazard group chooses from
    pub const HAZARDS: [ObstacleKind; 3] =
        [ObstacleKind::Planet, ObstacleKind::Block, ObstacleKind::Rocket];

    /// Uniform choice over planet, block and rocket
    pub fn random_hazard<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::HAZARDS[rng.random_range(0..Self::HAZARDS.len())]
    }

    /// Collision radius at scale 1.0 (half the sprite size)
    pub fn base_radius(&self) -> f32 {
        match self {
            ObstacleKind::Planet => 32.0,
            ObstacleKind::Block => 24.0,
            ObstacleKind::Rocket => 20.0,
            ObstacleKind::Ball => 16.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Planet => "planet",
            ObstacleKind::Block => "block",
            ObstacleKind::Rocket => "rocket",
            ObstacleKind::Ball => "ball",
        }
    }
}

/// Which spawn group an obstacle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleGroup {
    /// Planets, blocks and rockets
    Hazard,
    /// Blue balls
    Ball,
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub group: ObstacleGroup,
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: f32,
}

impl Obstacle {
    /// Collision radius including scale
    #[inline]
    pub fn radius(&self) -> f32 {
        self.kind.base_radius() * self.scale
    }
}

/// Owns every obstacle, sorted by id for deterministic iteration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Replace the field with `count` balls followed by `count` hazards.
    /// Each hazard's kind comes from `select_kind`, drawn before its placement.
    pub fn initialize<R, F>(
        &mut self,
        count: usize,
        scale: f32,
        mut select_kind: F,
        policy: &SpawnPolicy,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> ObstacleKind,
    {
        self.obstacles.clear();
        self.next_id = 1;
        self.obstacles.reserve(count * 2);

        for _ in 0..count {
            self.spawn(ObstacleKind::Ball, ObstacleGroup::Ball, scale, policy, rng);
        }
        for _ in 0..count {
            let kind = select_kind(rng);
            self.spawn(kind, ObstacleGroup::Hazard, scale, policy, rng);
        }

        if log::log_enabled!(log::Level::Debug) {
            let mix: Vec<String> = [
                ObstacleKind::Planet,
                ObstacleKind::Block,
                ObstacleKind::Rocket,
                ObstacleKind::Ball,
            ]
            .iter()
            .map(|k| format!("{}={}", k.as_str(), self.count_by_kind(*k)))
            .collect();
            log::debug!(
                "Obstacle field initialized with {} obstacles ({})",
                self.obstacles.len(),
                mix.join(", ")
            );
        }
    }

    /// Add a single obstacle at a sampled spawn point, returning its id
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        kind: ObstacleKind,
        group: ObstacleGroup,
        scale: f32,
        policy: &SpawnPolicy,
        rng: &mut R,
    ) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let sample = policy.sample(rng);
        self.obstacles.push(Obstacle {
            id,
            kind,
            group,
            pos: sample.pos,
            vel: sample.vel,
            scale,
        });
        id
    }

    /// Linear motion for every obstacle
    pub fn step(&mut self, dt: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.pos += obstacle.vel * dt;
        }
    }

    /// Send every obstacle below `screen_height` back to the spawn band with
    /// a fresh velocity. Returns the recycled ids in ascending order.
    pub fn recycle_offscreen<R: Rng + ?Sized>(
        &mut self,
        screen_height: f32,
        policy: &SpawnPolicy,
        rng: &mut R,
    ) -> Vec<u32> {
        let mut recycled = Vec::new();
        for obstacle in &mut self.obstacles {
            if obstacle.pos.y > screen_height {
                let sample = policy.sample(rng);
                obstacle.pos = sample.pos;
                obstacle.vel = sample.vel;
                recycled.push(obstacle.id);
            }
        }
        if !recycled.is_empty() {
            log::debug!("Recycled obstacles {:?}", recycled);
        }
        recycled
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Mutable access for hosts that own the physics (positions are pushed
    /// back from the engine each frame)
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn get(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles
            .binary_search_by_key(&id, |o| o.id)
            .ok()
            .map(|i| &self.obstacles[i])
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Obstacle> {
        match self.obstacles.binary_search_by_key(&id, |o| o.id) {
            Ok(i) => Some(&mut self.obstacles[i]),
            Err(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn count_by_kind(&self, kind: ObstacleKind) -> usize {
        self.obstacles.iter().filter(|o| o.kind == kind).count()
    }
}
