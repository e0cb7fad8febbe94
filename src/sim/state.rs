//! Table state and core simulation types
//!
//! Balls live in a flat arena sorted by id; capture deactivates a ball in
//! place so ids stay stable and iteration order stays deterministic.

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::TableConfig;
use crate::consts::OBJECT_BALL_COUNT;

/// RGB color tag carried through to the render snapshot.
pub type ColorTag = [u8; 3];

/// Cue ball color
pub const CUE_COLOR: ColorTag = [255, 255, 255];

/// Object ball colors, indexed by `number - 1`.
pub const OBJECT_COLORS: [ColorTag; OBJECT_BALL_COUNT] = [
    [255, 0, 0],
    [255, 127, 0],
    [255, 255, 0],
    [0, 255, 0],
    [0, 255, 255],
    [0, 0, 255],
    [139, 0, 255],
    [255, 69, 0],
    [255, 105, 180],
    [255, 215, 0],
    [0, 128, 0],
    [0, 191, 255],
    [75, 0, 130],
    [128, 0, 128],
    [178, 34, 34],
];

/// Id reserved for the cue ball.
pub const CUE_BALL_ID: u32 = 0;

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Stable unique id; 0 is the cue ball
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Painted color, for the renderer only
    pub color: ColorTag,
    /// Painted number, for the renderer only
    pub number: u8,
    /// False once captured; never flips back
    pub active: bool,
}

impl Ball {
    pub fn new(id: u32, position: Vec2, radius: f32, color: ColorTag, number: u8) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            radius,
            color,
            number,
            active: true,
        }
    }

    /// True for the player-controlled white ball.
    pub fn is_cue(&self) -> bool {
        self.id == CUE_BALL_ID
    }

    /// Current speed.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Descriptive motion label; the physics never branches on it.
    pub fn motion(&self, rest_epsilon: f32) -> Motion {
        if !self.active {
            Motion::Captured
        } else if self.speed() > rest_epsilon {
            Motion::Moving
        } else {
            Motion::Idle
        }
    }
}

/// Descriptive per-ball motion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// At (or effectively at) rest
    Idle,
    /// Speed above the rest threshold
    Moving,
    /// Pocketed; terminal
    Captured,
}

/// A pocket; immutable after setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pocket {
    pub position: Vec2,
    pub capture_radius: f32,
}

/// Complete session state: balls, pockets, score, tick counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: TableConfig,
    /// Active and captured balls, sorted by id
    pub balls: Vec<Ball>,
    pub pockets: Vec<Pocket>,
    /// Captured-ball count for the session
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Rack shuffle seed, if any
    pub seed: Option<u64>,
}

impl GameState {
    /// New game with the deterministic rack.
    pub fn new(config: TableConfig) -> Self {
        Self::build(config, None)
    }

    /// New game with the ball numbers shuffled across rack slots.
    pub fn with_seed(config: TableConfig, seed: u64) -> Self {
        Self::build(config, Some(seed))
    }

    fn build(config: TableConfig, seed: Option<u64>) -> Self {
        let pockets = config
            .pocket_positions()
            .into_iter()
            .map(|position| Pocket {
                position,
                capture_radius: config.pocket_radius,
            })
            .collect();

        let mut state = Self {
            config,
            balls: Vec::new(),
            pockets,
            score: 0,
            time_ticks: 0,
            seed,
        };
        state.rack();
        state
    }

    /// Reset score and tick counter and re-rack every ball.
    pub fn new_game(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.rack();
        log::info!("new game, seed {:?}", self.seed);
    }

    /// Place the cue ball at table center and the 15 object balls in a
    /// five-row triangle on the right half of the table.
    fn rack(&mut self) {
        let r = self.config.ball_radius;
        let center = Vec2::new(self.config.width / 2.0, self.config.height / 2.0);

        self.balls.clear();
        self.balls
            .push(Ball::new(CUE_BALL_ID, center, r, CUE_COLOR, 0));

        // Slot order shuffles under a seed; ids and positions stay put.
        let mut numbers: Vec<u8> = (1..=OBJECT_BALL_COUNT as u8).collect();
        if let Some(seed) = self.seed {
            let mut rng = Pcg32::seed_from_u64(seed);
            numbers.shuffle(&mut rng);
        }

        // Rows advance toward the right cushion; each row fans out in y.
        // A hair of slack between neighbors so the rack starts contact-free.
        let gap = 0.5;
        let pitch = 2.0 * r + gap;
        let row_pitch = pitch * 3.0_f32.sqrt() / 2.0;
        let apex = Vec2::new(self.config.width * 0.7, self.config.height / 2.0);

        let mut slot = 0usize;
        for row in 0..5u32 {
            for col in 0..=row {
                let number = numbers[slot];
                let position = apex
                    + Vec2::new(
                        row as f32 * row_pitch,
                        (col as f32 - row as f32 / 2.0) * pitch,
                    );
                self.balls.push(Ball::new(
                    slot as u32 + 1,
                    position,
                    r,
                    OBJECT_COLORS[number as usize - 1],
                    number,
                ));
                slot += 1;
            }
        }
    }

    /// The cue ball, if it has not been pocketed.
    pub fn cue_ball(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| b.is_cue() && b.active)
    }

    /// Mutable cue ball access, if it has not been pocketed.
    pub fn cue_ball_mut(&mut self) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.is_cue() && b.active)
    }

    /// Count of balls still on the table.
    pub fn active_count(&self) -> usize {
        self.balls.iter().filter(|b| b.active).count()
    }

    /// True once every active ball is at rest.
    pub fn at_rest(&self) -> bool {
        self.balls
            .iter()
            .filter(|b| b.active)
            .all(|b| b.speed() <= self.config.rest_epsilon)
    }
}
