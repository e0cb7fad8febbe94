//! Render snapshot
//!
//! A renderer never reads live simulation state; once per tick it takes an
//! immutable snapshot of everything it needs to draw. On a shared thread
//! that is just a clone between ticks; across threads, publish the snapshot
//! through your hand-off of choice - there is exactly one writer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{ColorTag, GameState};

/// One drawable ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub id: u32,
    pub position: Vec2,
    pub radius: f32,
    pub color: ColorTag,
    pub number: u8,
}

/// One drawable pocket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PocketView {
    pub position: Vec2,
    pub radius: f32,
}

/// Aim feedback while a shot is being dragged. Derived from pointer state by
/// the host, not by the physics; it rides along in the snapshot so the
/// renderer has one source of truth per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimLine {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl AimLine {
    /// Aim from the cue ball through the current pointer position.
    ///
    /// Returns `None` when the pointer sits exactly on the cue ball and no
    /// direction exists.
    pub fn from_drag(cue_position: Vec2, pointer: Vec2) -> Option<Self> {
        let direction = (cue_position - pointer).normalize_or_zero();
        if direction == Vec2::ZERO {
            return None;
        }
        Some(Self {
            origin: cue_position,
            direction,
        })
    }
}

/// Everything the renderer reads for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    /// Active balls, ascending id
    pub balls: Vec<BallView>,
    pub pockets: Vec<PocketView>,
    pub score: u32,
    pub aim: Option<AimLine>,
}

impl GameState {
    /// Snapshot the active balls, pockets, and score for rendering.
    pub fn snapshot(&self, aim: Option<AimLine>) -> RenderSnapshot {
        RenderSnapshot {
            tick: self.time_ticks,
            balls: self
                .balls
                .iter()
                .filter(|b| b.active)
                .map(|b| BallView {
                    id: b.id,
                    position: b.position,
                    radius: b.radius,
                    color: b.color,
                    number: b.number,
                })
                .collect(),
            pockets: self
                .pockets
                .iter()
                .map(|p| PocketView {
                    position: p.position,
                    radius: p.capture_radius,
                })
                .collect(),
            score: self.score,
            aim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableConfig;

    #[test]
    fn snapshot_lists_only_active_balls_in_id_order() {
        let mut state = GameState::new(TableConfig::default());
        state.balls[4].active = false;
        state.score = 1;
        let snap = state.snapshot(None);
        assert_eq!(snap.balls.len(), 15);
        assert!(snap.balls.iter().all(|b| b.id != 4));
        assert!(snap.balls.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(snap.pockets.len(), 4);
        assert_eq!(snap.score, 1);
    }

    #[test]
    fn aim_line_points_from_pointer_toward_cue() {
        let aim = AimLine::from_drag(Vec2::new(400.0, 200.0), Vec2::new(400.0, 300.0)).unwrap();
        assert_eq!(aim.origin, Vec2::new(400.0, 200.0));
        assert_eq!(aim.direction, Vec2::new(0.0, -1.0));
        assert!(AimLine::from_drag(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn snapshot_serializes() {
        let state = GameState::new(TableConfig::default());
        let snap = state.snapshot(None);
        let json = serde_json::to_string(&snap).unwrap();
        let back: RenderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
