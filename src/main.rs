//! Headless demo: rack a table, take one break shot, run the simulation
//! until every ball is at rest, then print the final render snapshot as
//! JSON. `baize [seed] [--realtime]`; with `--realtime` the loop paces
//! itself off the wall clock through the accumulator scheduler.

use std::time::Instant;

use glam::Vec2;

use baize::sim::{GameState, Shot, TickInput, tick};
use baize::{FixedTimestep, TableConfig};

/// Ticks to give up after if the table never settles.
const MAX_TICKS: u64 = 60_000;

fn main() {
    env_logger::init();

    let mut seed = None;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            other => match other.parse::<u64>() {
                Ok(s) => seed = Some(s),
                Err(_) => {
                    eprintln!("usage: baize [seed] [--realtime]");
                    std::process::exit(2);
                }
            },
        }
    }

    let config = TableConfig::default();
    let mut state = match seed {
        Some(seed) => GameState::with_seed(config, seed),
        None => GameState::new(config),
    };
    log::info!(
        "table {}x{}, {} balls, seed {:?}",
        config.width,
        config.height,
        state.balls.len(),
        state.seed
    );

    // One hard break shot into the rack.
    let cue = state.cue_ball().expect("fresh rack has a cue ball").position;
    let input = TickInput {
        shot: Some(Shot {
            cue_start: cue,
            cue_end: cue - Vec2::new(120.0, 8.0),
        }),
    };
    tick(&mut state, &input);

    let mut scheduler = FixedTimestep::new(config.tick_period_secs());
    let mut last = Instant::now();
    let idle = TickInput::default();

    while !state.at_rest() && state.time_ticks < MAX_TICKS {
        let steps = if realtime {
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f32();
            last = now;
            scheduler.advance(elapsed)
        } else {
            scheduler.advance(config.tick_period_secs())
        };
        for _ in 0..steps {
            tick(&mut state, &idle);
        }
        if realtime && steps == 0 {
            std::thread::yield_now();
        }
    }

    log::info!(
        "settled after {} ticks, {} captured",
        state.time_ticks,
        state.score
    );

    let snapshot = state.snapshot(None);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("snapshot serialization failed: {e}");
            std::process::exit(1);
        }
    }
}
