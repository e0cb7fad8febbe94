//! Baize - a deterministic billiards physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, capture, score)
//! - `config`: Table dimensions and physics tuning
//! - `schedule`: Fixed-timestep accumulator scheduler
//!
//! The crate is headless: rendering and pointer input are external
//! collaborators that feed a [`sim::Shot`] in and read a
//! [`sim::RenderSnapshot`] out once per tick.

pub mod config;
pub mod schedule;
pub mod sim;

pub use config::TableConfig;
pub use schedule::FixedTimestep;

/// Table and physics constants
pub mod consts {
    /// Playing surface width in table units
    pub const TABLE_WIDTH: f32 = 800.0;
    /// Playing surface height in table units
    pub const TABLE_HEIGHT: f32 = 400.0;

    /// Radius shared by every ball on the table
    pub const BALL_RADIUS: f32 = 15.0;
    /// Pocket capture radius
    pub const POCKET_RADIUS: f32 = 20.0;

    /// Per-tick multiplicative velocity decay (rolling friction stand-in)
    pub const DAMPING: f32 = 0.99;
    /// Fixed simulation period in milliseconds
    pub const TICK_PERIOD_MS: u32 = 20;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Speeds below this snap to zero after damping (0 disables)
    pub const REST_EPSILON: f32 = 1e-3;

    /// Drag-to-velocity divisor for the cue shot
    pub const SHOT_POWER_DIVISOR: f32 = 10.0;

    /// Number of object balls racked alongside the cue ball
    pub const OBJECT_BALL_COUNT: usize = 15;
}
