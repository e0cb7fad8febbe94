//! Fixed timestep simulation tick
//!
//! One tick is atomic with respect to external readers: apply shot input,
//! integrate, reflect off cushions, resolve ball-ball contacts, capture and
//! score. Cushion reflection runs before the pair pass so an out-of-bounds
//! sign flip is visible to the resolver in the same tick.

use glam::Vec2;

use super::collision::{find_contacts, pocket_capture, reflect_walls, resolve_contact};
use super::integrate::integrate;
use super::state::GameState;
use crate::consts::SHOT_POWER_DIVISOR;

/// A completed cue drag gesture, in table coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    /// Where the drag started (pointer down)
    pub cue_start: Vec2,
    /// Where the drag ended (pointer up)
    pub cue_end: Vec2,
}

impl Shot {
    /// Cue-ball velocity for this drag: one tenth of the start-to-end
    /// pullback, so dragging away from the target fires toward it.
    pub fn velocity(&self) -> Vec2 {
        (self.cue_start - self.cue_end) / SHOT_POWER_DIVISOR
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Shot released this tick, if any
    pub shot: Option<Shot>,
}

/// Advance the table by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(shot) = input.shot {
        apply_shot(state, shot);
    }

    let damping = state.config.damping;
    let rest_epsilon = state.config.rest_epsilon;
    integrate(&mut state.balls, damping, rest_epsilon);

    let (width, height) = (state.config.width, state.config.height);
    for ball in state.balls.iter_mut().filter(|b| b.active) {
        reflect_walls(ball, width, height);
    }

    for contact in find_contacts(&state.balls) {
        // Two disjoint &mut into the arena; contact indices satisfy a < b.
        let (head, tail) = state.balls.split_at_mut(contact.b);
        resolve_contact(&mut head[contact.a], &mut tail[0]);
    }

    // Mark captures during the scan, deactivate after it, so the ball list
    // is never restructured mid-iteration.
    let mut captured: Vec<usize> = Vec::new();
    for (idx, ball) in state.balls.iter().enumerate().filter(|(_, b)| b.active) {
        if pocket_capture(ball, &state.pockets).is_some() {
            captured.push(idx);
        }
    }
    for idx in captured {
        let ball = &mut state.balls[idx];
        ball.active = false;
        ball.velocity = Vec2::ZERO;
        state.score += 1;
        log::debug!("ball {} pocketed, score {}", ball.id, state.score);
    }

    state.time_ticks += 1;
}

/// Set the cue ball velocity from a drag gesture.
///
/// Only the active cue ball is ever touched; a no-op once it has been
/// pocketed. Gestures that start or end outside the table are tolerated,
/// the pullback vector is all that matters.
pub fn apply_shot(state: &mut GameState, shot: Shot) {
    if let Some(cue) = state.cue_ball_mut() {
        cue.velocity = shot.velocity();
    }
}
