//! Per-frame game loop
//!
//! The host calls [`on_frame`] once per rendered frame and [`on_collision`]
//! whenever its physics reports a ship/obstacle contact. Hosts without a
//! physics engine use [`run_frame`], which adds linear motion and circle
//! contacts on top.

use glam::Vec2;

use super::contact;
use super::phase::GamePhase;
use super::state::{GameEvent, GameSession};
use super::timer::TimerEvent;

/// Four-way directional input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Ship velocity for this input. Each axis is independent; left and up
    /// take priority when both directions on an axis are held.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let vx = if self.left {
            -speed
        } else if self.right {
            speed
        } else {
            0.0
        };
        let vy = if self.up {
            -speed
        } else if self.down {
            speed
        } else {
            0.0
        };
        Vec2::new(vx, vy)
    }
}

/// Advance the game loop by one frame of `dt` seconds
pub fn on_frame(session: &mut GameSession, input: &TickInput, dt: f32) {
    session.advance_clock(dt);
    if fire_timers(session) {
        // Fresh run starts on the next frame
        return;
    }

    // Input is ignored once the run is over (physics paused)
    if session.state.is_playing() {
        session.player.vel = input.velocity(session.config.player_speed);
    } else {
        session.player.vel = Vec2::ZERO;
        return;
    }

    session.score.tick(dt, true);
    if session.state.on_score_update(session.score.value()) {
        // No automatic restart after a win
        session.player.vel = Vec2::ZERO;
        let score = session.score.display_value();
        session.push_event(GameEvent::Won { score });
        return;
    }

    let screen_height = session.config.screen_height;
    session
        .field
        .recycle_offscreen(screen_height, &session.policy, &mut session.rng);
}

/// Apply due timers. Returns true if the run restarted.
fn fire_timers(session: &mut GameSession) -> bool {
    let now = session.clock_ms();
    let mut restarted = false;
    for event in session.timers.drain_due(now) {
        log::debug!("Timer fired at {}ms: {:?}", now, event);
        match event {
            TimerEvent::HideExplosion => {
                if session.explosion.take().is_some() {
                    session.push_event(GameEvent::ExplosionHidden);
                }
            }
            TimerEvent::Restart => {
                session.reset();
                session.push_event(GameEvent::Restarted);
                restarted = true;
            }
        }
    }
    restarted
}

/// Ship hit an obstacle. Returns true if this ended the run; later contacts
/// while Lost or Won change nothing.
pub fn on_collision(session: &mut GameSession, obstacle_id: u32) -> bool {
    if session.field.get(obstacle_id).is_none() {
        log::debug!("Collision reported for unknown obstacle {}", obstacle_id);
    }

    if !session.state.on_collision() {
        return false;
    }

    let now = session.clock_ms();
    let score = session.score.display_value();
    log::info!("Ship destroyed by obstacle {} at score {}", obstacle_id, score);

    session.player.vel = Vec2::ZERO;
    session.player.tinted = true;

    let pos = session.player.pos;
    session.explosion = Some(pos);
    session.push_event(GameEvent::ExplosionShown { pos });
    session
        .timers
        .schedule(now, session.config.explosion_visible_ms, TimerEvent::HideExplosion);
    session
        .timers
        .schedule(now, session.config.restart_delay_ms, TimerEvent::Restart);

    session.push_event(GameEvent::Lost { score });
    true
}

/// Score line or end-of-run message for the HUD
pub fn display_text(session: &GameSession) -> String {
    let score = session.score.display_value();
    match session.phase() {
        GamePhase::Playing => format!("Score: {}", score),
        GamePhase::Lost => format!("Game Over\nScore: {}", score),
        GamePhase::Won => format!("You Win!\nScore: {}", score),
    }
}

/// Linear motion for obstacles and the ship, ship clamped to the world.
/// Does nothing once the run is over.
pub fn step_physics(session: &mut GameSession, dt: f32) {
    if !session.state.is_playing() || !dt.is_finite() || dt <= 0.0 {
        return;
    }
    session.field.step(dt);
    let world = session.world_size();
    session.player.integrate(dt, world);
}

/// One complete headless frame: loop, motion, then contacts. Returns the id
/// of the obstacle that ended the run, if any.
pub fn run_frame(session: &mut GameSession, input: &TickInput, dt: f32) -> Option<u32> {
    on_frame(session, input, dt);
    step_physics(session, dt);

    if !session.state.is_playing() {
        return None;
    }
    let hit = contact::first_contact(session)?;
    on_collision(session, hit).then_some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::settings::GameConfig;

    #[test]
    fn test_input_to_velocity() {
        let input = TickInput {
            left: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(input.velocity(160.0), Vec2::new(-160.0, 160.0));

        let both = TickInput {
            left: true,
            right: true,
            up: true,
            down: true,
        };
        assert_eq!(both.velocity(160.0), Vec2::new(-160.0, -160.0));
        assert_eq!(TickInput::default().velocity(160.0), Vec2::ZERO);
    }

    #[test]
    fn test_frame_sets_velocity_and_score() {
        let mut session = GameSession::with_seed(12345);
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        on_frame(&mut session, &input, 0.1);
        assert_eq!(session.player.vel, Vec2::new(160.0, 0.0));
        assert!((session.score.value() - 0.1).abs() < 1e-6);
        assert_eq!(display_text(&session), "Score: 0");
    }

    #[test]
    fn test_collision_at_42_7() {
        let mut session = GameSession::with_seed(12345);
        on_frame(&mut session, &TickInput::default(), 0.25);
        session.score.set_value(42.7);
        let now = session.clock_ms();

        assert!(on_collision(&mut session, 1));
        assert_eq!(session.phase(), GamePhase::Lost);
        assert_eq!(display_text(&session), "Game Over\nScore: 42");
        assert_eq!(
            session.timers().due_time_of(TimerEvent::Restart),
            Some(now + 2000)
        );
        assert!(session.player.tinted);
        assert!(session.explosion.is_some());

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::Lost { score: 42 }));
    }

    #[test]
    fn test_second_collision_is_noop() {
        let mut session = GameSession::with_seed(7);
        session.score.set_value(10.0);
        assert!(on_collision(&mut session, 1));
        let timers = session.timers().len();
        assert!(!on_collision(&mut session, 2));
        assert_eq!(session.phase(), GamePhase::Lost);
        assert_eq!(session.score.value(), 10.0);
        assert_eq!(session.timers().len(), timers);
    }

    #[test]
    fn test_score_frozen_after_loss() {
        let mut session = GameSession::with_seed(7);
        on_frame(&mut session, &TickInput::default(), 0.5);
        on_collision(&mut session, 1);
        let score = session.score.value();
        let input = TickInput {
            up: true,
            ..Default::default()
        };
        for _ in 0..10 {
            on_frame(&mut session, &input, 0.1);
            assert_eq!(session.score.value(), score);
            assert_eq!(session.player.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn test_explosion_hidden_then_restart() {
        let mut session = GameSession::with_seed(21);
        on_collision(&mut session, 1);
        session.drain_events();

        on_frame(&mut session, &TickInput::default(), 0.5);
        assert!(session.explosion.is_none());
        assert_eq!(session.drain_events(), vec![GameEvent::ExplosionHidden]);
        assert_eq!(session.phase(), GamePhase::Lost);

        on_frame(&mut session, &TickInput::default(), 1.0);
        assert_eq!(session.phase(), GamePhase::Lost);

        on_frame(&mut session, &TickInput::default(), 0.5);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.score.value(), 0.0);
        assert!(session.drain_events().contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_win_is_terminal_without_restart() {
        let config = GameConfig {
            win_threshold: 1.0,
            ..Default::default()
        };
        let mut session = GameSession::new(config, 4).unwrap();
        on_frame(&mut session, &TickInput::default(), 1.0);
        assert_eq!(session.phase(), GamePhase::Won);
        assert_eq!(display_text(&session), "You Win!\nScore: 1");
        assert!(session.timers().is_empty());
        assert_eq!(session.drain_events(), vec![GameEvent::Won { score: 1 }]);

        for _ in 0..600 {
            on_frame(&mut session, &TickInput::default(), FRAME_DT);
        }
        assert_eq!(session.phase(), GamePhase::Won);
        assert!(!on_collision(&mut session, 1));
    }

    #[test]
    fn test_physics_paused_when_not_playing() {
        let mut session = GameSession::with_seed(2);
        on_collision(&mut session, 1);
        let before: Vec<Vec2> = session.field.iter().map(|o| o.pos).collect();
        step_physics(&mut session, 0.5);
        let after: Vec<Vec2> = session.field.iter().map(|o| o.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_frame_recycles_fallen_obstacles() {
        let mut session = GameSession::with_seed(31);
        let id = session.field.iter().next().unwrap().id;
        session.field.get_mut(id).unwrap().pos.y = 650.0;
        on_frame(&mut session, &TickInput::default(), FRAME_DT);
        assert!(session.field.get(id).unwrap().pos.y < 0.0);
    }

    #[test]
    fn test_run_frame_detects_contact() {
        let mut session = GameSession::with_seed(13);
        let id = session.field.iter().nth(4).unwrap().id;
        let obstacle = session.field.get_mut(id).unwrap();
        obstacle.pos = Vec2::new(400.0, 500.0);
        obstacle.vel = Vec2::ZERO;

        assert_eq!(run_frame(&mut session, &TickInput::default(), FRAME_DT), Some(id));
        assert_eq!(session.phase(), GamePhase::Lost);
        assert_eq!(run_frame(&mut session, &TickInput::default(), FRAME_DT), None);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameSession::with_seed(99999);
        let mut b = GameSession::with_seed(99999);
        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                up: true,
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            run_frame(&mut a, input, FRAME_DT);
            run_frame(&mut b, input, FRAME_DT);
        }

        assert_eq!(a.phase(), b.phase());
        assert_eq!(a.score.value(), b.score.value());
        assert_eq!(a.player.pos, b.player.pos);
        let pa: Vec<Vec2> = a.field.iter().map(|o| o.pos).collect();
        let pb: Vec<Vec2> = b.field.iter().map(|o| o.pos).collect();
        assert_eq!(pa, pb);
    }
}
