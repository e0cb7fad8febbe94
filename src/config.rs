//! Table configuration
//!
//! Every tunable the physics core reads lives here so that tests and hosts
//! can build tables of any size without touching the simulation code.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Dimensions and physics tuning for one table.
///
/// Defaults reproduce the classic table: `800x400` units, ball radius `15`,
/// pocket radius `20`, damping `0.99`, one tick every `20` ms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Playing surface width
    pub width: f32,
    /// Playing surface height
    pub height: f32,
    /// Radius of every ball
    pub ball_radius: f32,
    /// Capture radius of every pocket
    pub pocket_radius: f32,
    /// Per-tick multiplicative velocity decay, in (0, 1]
    pub damping: f32,
    /// Fixed simulation period in milliseconds
    pub tick_period_ms: u32,
    /// Speeds below this snap to zero after damping; 0 disables the snap
    #[serde(default = "default_rest_epsilon")]
    pub rest_epsilon: f32,
}

fn default_rest_epsilon() -> f32 {
    REST_EPSILON
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: TABLE_WIDTH,
            height: TABLE_HEIGHT,
            ball_radius: BALL_RADIUS,
            pocket_radius: POCKET_RADIUS,
            damping: DAMPING,
            tick_period_ms: TICK_PERIOD_MS,
            rest_epsilon: REST_EPSILON,
        }
    }
}

impl TableConfig {
    /// Fixed tick period in seconds, for the scheduler.
    pub fn tick_period_secs(&self) -> f32 {
        self.tick_period_ms as f32 / 1000.0
    }

    /// Corner pocket centers, one pocket radius in from each corner.
    pub fn pocket_positions(&self) -> [Vec2; 4] {
        let r = self.pocket_radius;
        [
            Vec2::new(r, r),
            Vec2::new(self.width - r, r),
            Vec2::new(self.width - r, self.height - r),
            Vec2::new(r, self.height - r),
        ]
    }

    /// Parse a config from JSON. `rest_epsilon` may be omitted.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
