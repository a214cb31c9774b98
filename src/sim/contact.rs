//! Player/obstacle contact detection for headless hosts
//!
//! A real engine reports contacts itself and calls [`super::on_collision`].
//! Without one, obstacles and the ship are treated as circles.

use glam::Vec2;

use super::state::GameSession;

/// Check if two circles overlap (touching counts)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) <= reach * reach
}

/// Ids of every obstacle touching the player, ascending
pub fn contacts(session: &GameSession) -> Vec<u32> {
    let player = &session.player;
    session
        .field
        .iter()
        .filter(|o| circles_overlap(player.pos, player.radius, o.pos, o.radius()))
        .map(|o| o.id)
        .collect()
}

/// Lowest-id obstacle touching the player
pub fn first_contact(session: &GameSession) -> Option<u32> {
    let player = &session.player;
    session
        .field
        .iter()
        .find(|o| circles_overlap(player.pos, player.radius, o.pos, o.radius()))
        .map(|o| o.id)
}
