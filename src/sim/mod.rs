//! Deterministic simulation module
//!
//! All table physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by ball id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod integrate;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{
    Contact, find_contacts, intersects, pocket_capture, reflect_walls, resolve_contact,
};
pub use integrate::integrate;
pub use snapshot::{AimLine, BallView, PocketView, RenderSnapshot};
pub use state::{
    Ball, CUE_BALL_ID, CUE_COLOR, ColorTag, GameState, Motion, OBJECT_COLORS, Pocket,
};
pub use tick::{Shot, TickInput, apply_shot, tick};
