//! Fixed-timestep scheduling
//!
//! The simulation advances in whole ticks of a fixed period. The host feeds
//! wall-clock elapsed time into the accumulator and runs as many ticks as it
//! drains, so the simulation rate is decoupled from the display rate and the
//! physics stays deterministic regardless of frame pacing.

use crate::consts::MAX_SUBSTEPS;

/// Accumulator-pattern scheduler for a fixed simulation period.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    period: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedTimestep {
    /// Scheduler for the given period in seconds.
    pub fn new(period_secs: f32) -> Self {
        Self {
            period: period_secs,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Scheduler for the given period in milliseconds.
    pub fn from_millis(period_ms: u32) -> Self {
        Self::new(period_ms as f32 / 1000.0)
    }

    /// Fixed period in seconds.
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Feed elapsed wall-clock seconds; returns how many ticks to run now.
    ///
    /// Capped at `max_substeps` per call; on overload the excess backlog is
    /// discarded so a long stall cannot trigger a catch-up spiral.
    pub fn advance(&mut self, elapsed_secs: f32) -> u32 {
        self.accumulator += elapsed_secs;
        let mut substeps = 0;
        while self.accumulator >= self.period && substeps < self.max_substeps {
            self.accumulator -= self.period;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Drop any banked time, e.g. after a pause or game reset.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
