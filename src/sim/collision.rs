//! Collision detection and response
//!
//! Three independent tests per tick: cushion reflection, ball-ball contact,
//! pocket capture. Two behaviors here are load-bearing for trajectory
//! compatibility and must not be "improved":
//!
//! - De-penetration moves ball `a` first and then nudges `b` from the
//!   already-moved `a` position with the pre-move distance. The split is
//!   not perfectly symmetric.
//! - The impulse is an unnormalized equal-mass exchange along the center
//!   line (`scale = dot / dist²`), with no restitution coefficient or mass
//!   weighting.

use glam::Vec2;

use super::state::{Ball, Pocket};

/// An intersecting pair of balls, by arena index, `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: usize,
    pub b: usize,
}

/// Reflect a ball off the cushions.
///
/// Velocity-only: the sign of a component flips when the ball extends past
/// the matching bound. Position is never clamped, so a fast ball can sit
/// past the cushion for a tick or two before the flipped velocity carries
/// it back (known limitation; callers must not assume strict containment).
pub fn reflect_walls(ball: &mut Ball, width: f32, height: f32) {
    let r = ball.radius;
    if ball.position.x - r < 0.0 || ball.position.x + r > width {
        ball.velocity.x = -ball.velocity.x;
    }
    if ball.position.y - r < 0.0 || ball.position.y + r > height {
        ball.velocity.y = -ball.velocity.y;
    }
}

/// True iff two ball centers are closer than the sum of the radii.
pub fn intersects(a: &Ball, b: &Ball) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// All intersecting active pairs, in ascending `(id_a, id_b)` order.
///
/// Simultaneous multi-pair contacts have no physically canonical order;
/// ascending id is the tie-break that makes outcomes reproducible under
/// test. The balls slice is sorted by id, so index order is id order.
pub fn find_contacts(balls: &[Ball]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for a in 0..balls.len() {
        if !balls[a].active {
            continue;
        }
        for b in a + 1..balls.len() {
            if !balls[b].active {
                continue;
            }
            if intersects(&balls[a], &balls[b]) {
                contacts.push(Contact { a, b });
            }
        }
    }
    contacts
}

/// De-penetrate and apply the collision impulse to one contact pair.
pub fn resolve_contact(a: &mut Ball, b: &mut Ball) {
    let delta = b.position - a.position;
    let dist = delta.length();

    // Coincident centers have no separation axis. Skip the positional split
    // and fall back to +x with unit distance so the impulse math below
    // cannot divide by zero.
    let degenerate = dist == 0.0;

    if !degenerate {
        let overlap = 0.5 * (dist - (a.radius + b.radius));
        // a moves first; b is pushed from a's updated position but with the
        // pre-move distance. Asymmetric, and kept that way on purpose.
        a.position -= overlap * (a.position - b.position) / dist;
        b.position += overlap * (a.position - b.position) / dist;
    }

    let (axis, dist) = if degenerate { (Vec2::X, 1.0) } else { (delta, dist) };

    // Impulse only for approaching pairs; a separating pair would otherwise
    // be pulled back together on the tick after a bounce.
    let relative = a.velocity - b.velocity;
    let dot = axis.dot(relative);
    if dot > 0.0 {
        let impulse = axis * (dot / (dist * dist));
        a.velocity -= impulse;
        b.velocity += impulse;
    }
}

/// Index of the first pocket that captures the ball, if any.
pub fn pocket_capture(ball: &Ball, pockets: &[Pocket]) -> Option<usize> {
    pockets
        .iter()
        .position(|p| ball.position.distance(p.position) < p.capture_radius + ball.radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::CUE_COLOR;

    fn ball(id: u32, position: Vec2, velocity: Vec2) -> Ball {
        let mut b = Ball::new(id, position, 15.0, CUE_COLOR, id as u8);
        b.velocity = velocity;
        b
    }

    #[test]
    fn wall_reflection_flips_velocity_sign_only() {
        let mut b = ball(0, Vec2::new(10.0, 200.0), Vec2::new(-4.0, 1.0));
        reflect_walls(&mut b, 800.0, 400.0);
        assert_eq!(b.velocity, Vec2::new(4.0, 1.0));
        // Position is untouched; containment is not guaranteed.
        assert_eq!(b.position, Vec2::new(10.0, 200.0));

        let mut b = ball(0, Vec2::new(400.0, 395.0), Vec2::new(0.0, 3.0));
        reflect_walls(&mut b, 800.0, 400.0);
        assert_eq!(b.velocity, Vec2::new(0.0, -3.0));
    }

    #[test]
    fn contact_threshold_is_sum_of_radii() {
        let a = ball(0, Vec2::new(100.0, 100.0), Vec2::ZERO);
        let touching = ball(1, Vec2::new(130.0, 100.0), Vec2::ZERO);
        let overlapping = ball(1, Vec2::new(129.0, 100.0), Vec2::ZERO);
        assert!(!intersects(&a, &touching));
        assert!(intersects(&a, &overlapping));
    }

    #[test]
    fn contacts_come_out_in_ascending_id_order() {
        let balls = vec![
            ball(0, Vec2::new(100.0, 100.0), Vec2::ZERO),
            ball(1, Vec2::new(120.0, 100.0), Vec2::ZERO),
            ball(2, Vec2::new(140.0, 100.0), Vec2::ZERO),
        ];
        let contacts = find_contacts(&balls);
        assert_eq!(
            contacts,
            vec![Contact { a: 0, b: 1 }, Contact { a: 1, b: 2 }]
        );
    }

    #[test]
    fn captured_balls_are_skipped() {
        let mut balls = vec![
            ball(0, Vec2::new(100.0, 100.0), Vec2::ZERO),
            ball(1, Vec2::new(110.0, 100.0), Vec2::ZERO),
        ];
        balls[1].active = false;
        assert!(find_contacts(&balls).is_empty());
    }

    #[test]
    fn head_on_approach_reverses_both_balls() {
        // Distance 29 < 30, closing at 10 units/tick.
        let mut a = ball(0, Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0));
        let mut b = ball(1, Vec2::new(129.0, 100.0), Vec2::new(-5.0, 0.0));
        resolve_contact(&mut a, &mut b);
        assert!(a.velocity.x < 0.0);
        assert!(b.velocity.x > 0.0);
        // Equal-mass head-on contact swaps the approach velocities.
        assert!((a.velocity.x + 5.0).abs() < 1e-3);
        assert!((b.velocity.x - 5.0).abs() < 1e-3);
        // De-penetration leaves the pair at least touching; the asymmetric
        // split overshoots the exact contact distance by a whisker.
        let sep = a.position.distance(b.position);
        assert!(sep >= 30.0 - 1e-3 && sep < 30.1);
    }

    #[test]
    fn separating_pair_gets_no_impulse() {
        let mut a = ball(0, Vec2::new(100.0, 100.0), Vec2::new(-2.0, 0.0));
        let mut b = ball(1, Vec2::new(125.0, 100.0), Vec2::new(2.0, 0.0));
        resolve_contact(&mut a, &mut b);
        // Positions separate but velocities are untouched.
        assert_eq!(a.velocity, Vec2::new(-2.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(2.0, 0.0));
        assert!(a.position.distance(b.position) >= 30.0 - 1e-3);
    }

    #[test]
    fn coincident_centers_stay_finite() {
        let p = Vec2::new(200.0, 200.0);
        let mut a = ball(0, p, Vec2::new(1.0, 0.0));
        let mut b = ball(1, p, Vec2::new(-1.0, 0.0));
        resolve_contact(&mut a, &mut b);
        for ball in [&a, &b] {
            assert!(ball.position.is_finite());
            assert!(ball.velocity.is_finite());
        }
    }

    #[test]
    fn glancing_contact_exchanges_along_the_center_line() {
        // b sits above-right of a; a moves straight right.
        let mut a = ball(0, Vec2::new(100.0, 100.0), Vec2::new(6.0, 0.0));
        let mut b = ball(1, Vec2::new(121.0, 121.0), Vec2::ZERO);
        let axis = (b.position - a.position).normalize();
        resolve_contact(&mut a, &mut b);
        // The impulse on b lies along the center line.
        let b_dir = b.velocity.normalize();
        assert!((b_dir - axis).length() < 1e-3);
        assert!(b.speed() > 0.0);
    }

    #[test]
    fn pocket_test_uses_combined_radius() {
        let pockets = [Pocket {
            position: Vec2::new(20.0, 20.0),
            capture_radius: 20.0,
        }];
        // Distance 5 < 20 + 15: captured.
        let near = ball(0, Vec2::new(25.0, 20.0), Vec2::ZERO);
        assert_eq!(pocket_capture(&near, &pockets), Some(0));
        // Distance 40 > 35: safe.
        let far = ball(0, Vec2::new(60.0, 20.0), Vec2::ZERO);
        assert_eq!(pocket_capture(&far, &pockets), None);
    }
}
