//! Space Dodger entry point
//!
//! Native builds run a headless session with a simple dodging autopilot and
//! report how the run went. Usage: `space-dodger [seed] [frames]`.

use space_dodger::consts::FRAME_DT;
use space_dodger::sim::{self, GameEvent, GameSession, TickInput};

/// Default run length: two minutes at 60 Hz
const DEFAULT_FRAMES: u32 = 60 * 120;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5eed);
    let frames = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    log::info!("Space Dodger (headless) starting with seed {}", seed);

    let mut session = GameSession::with_seed(seed);
    let mut losses = 0u32;

    for frame in 0..frames {
        let input = autopilot(&session);
        sim::run_frame(&mut session, &input, FRAME_DT);

        for event in session.drain_events() {
            match event {
                GameEvent::Lost { score } => {
                    losses += 1;
                    log::info!("Frame {}: lost at score {}", frame, score);
                }
                GameEvent::Won { score } => {
                    log::info!("Frame {}: won with score {}", frame, score);
                }
                GameEvent::Restarted => log::info!("Frame {}: restarted", frame),
                GameEvent::ExplosionShown { .. } | GameEvent::ExplosionHidden => {}
            }
        }

        if session.phase() == sim::GamePhase::Won {
            break;
        }
    }

    println!("{}", sim::display_text(&session));
    println!("Losses: {}", losses);
    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Snapshot error: {:?}", e),
    }
}

/// Steer away from the nearest obstacle that is above the ship and closing in
fn autopilot(session: &GameSession) -> TickInput {
    let ship = session.player.pos;
    let threat = session
        .field
        .iter()
        .filter(|o| o.pos.y < ship.y + o.radius() && o.pos.y > ship.y - 200.0)
        .min_by(|a, b| {
            a.pos
                .distance_squared(ship)
                .partial_cmp(&b.pos.distance_squared(ship))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut input = TickInput::default();
    if let Some(o) = threat {
        if (o.pos.x - ship.x).abs() < 80.0 {
            // Dodge toward the side with more room
            if o.pos.x > ship.x || ship.x > session.config.screen_width - 60.0 {
                input.left = true;
            } else {
                input.right = true;
            }
        }
    }
    // Drift back toward the bottom when nothing is close
    if threat.is_none() && ship.y < session.config.player_start.1 {
        input.down = true;
    }
    input
}
