//! Motion integration
//!
//! One Euler step per tick at a fixed period, then geometric damping.
//! Pure damping only ever approaches zero asymptotically; the sub-epsilon
//! snap below trades that endless creep for deterministic rest.

use glam::Vec2;

use super::state::Ball;

/// Advance every active ball by one tick and damp its velocity.
///
/// `position += velocity` (the fixed tick is the time unit), then
/// `velocity *= damping`. Speeds at or below `rest_epsilon` snap to zero;
/// pass 0 to disable the snap.
pub fn integrate(balls: &mut [Ball], damping: f32, rest_epsilon: f32) {
    for ball in balls.iter_mut().filter(|b| b.active) {
        ball.position += ball.velocity;
        ball.velocity *= damping;
        if rest_epsilon > 0.0 && ball.velocity.length() <= rest_epsilon {
            ball.velocity = Vec2::ZERO;
        }
    }
}
