//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by obstacle ID)
//! - Delayed effects go through the timer queue, never wall-clock time
//! - No rendering or platform dependencies

pub mod contact;
pub mod obstacle;
pub mod phase;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use contact::{circles_overlap, contacts, first_contact};
pub use obstacle::{Obstacle, ObstacleField, ObstacleGroup, ObstacleKind};
pub use phase::{GamePhase, GameStateMachine};
pub use score::ScoreTracker;
pub use spawn::{SpawnPolicy, SpawnSample};
pub use state::{GameEvent, GameSession, PlayerShip, SessionSnapshot};
pub use tick::{TickInput, display_text, on_collision, on_frame, run_frame, step_physics};
pub use timer::{TimerEvent, TimerQueue};
