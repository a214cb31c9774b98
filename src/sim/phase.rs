//! Win/lose state machine
//!
//! Playing is the only live phase. Lost and Won are terminal until an
//! explicit reset; only a loss schedules one automatically.

use serde::{Deserialize, Serialize};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Player hit an obstacle
    Lost,
    /// Score reached the win threshold
    Won,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "Playing",
            GamePhase::Lost => "Lost",
            GamePhase::Won => "Won",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameStateMachine {
    phase: GamePhase,
    win_threshold: f32,
}

impl GameStateMachine {
    pub fn new(win_threshold: f32) -> Self {
        Self {
            phase: GamePhase::Playing,
            win_threshold,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn win_threshold(&self) -> f32 {
        self.win_threshold
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_playing()
    }

    /// Playing -> Lost. Returns true if the transition happened.
    pub fn on_collision(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            self.transition(GamePhase::Lost);
            true
        } else {
            false
        }
    }

    /// Playing -> Won once `score` reaches the threshold
    pub fn on_score_update(&mut self, score: f32) -> bool {
        if self.phase == GamePhase::Playing && score >= self.win_threshold {
            log::debug!("Score {score:.1} reached threshold {}", self.win_threshold);
            self.transition(GamePhase::Won);
            true
        } else {
            false
        }
    }

    /// Back to Playing from any phase
    pub fn reset(&mut self) {
        if self.phase != GamePhase::Playing {
            self.transition(GamePhase::Playing);
        }
    }

    fn transition(&mut self, next: GamePhase) {
        log::info!("Phase: {} -> {}", self.phase.as_str(), next.as_str());
        self.phase = next;
    }
}
