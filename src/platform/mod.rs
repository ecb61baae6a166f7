//! Platform abstraction layer
//!
//! Clock sources and a fixed-cadence driver, so the loop can run against a
//! real clock or headless in tests.

use std::time::Instant;

use crate::consts::TICK_INTERVAL;
use crate::highscores::BestScoreStore;
use crate::sim::{GameLoop, UniformSource, WorldSize};

/// Source of clock readings in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Monotonic wall clock, zeroed at construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    time: f64,
}

impl ManualClock {
    pub fn new(time: f64) -> Self {
        Self { time }
    }

    pub fn advance(&mut self, seconds: f64) {
        self.time += seconds;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time
    }
}

/// Feeds clock readings into a loop at a fixed cadence (100 Hz by default)
#[derive(Debug, Clone)]
pub struct FixedDriver {
    clock: ManualClock,
    interval: f64,
}

impl Default for FixedDriver {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl FixedDriver {
    pub fn new(interval: f64) -> Self {
        Self {
            clock: ManualClock::default(),
            interval,
        }
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Deliver the current reading, then move the clock one interval on.
    /// Returns true if the loop ran its pipeline.
    pub fn step<S: BestScoreStore, R: UniformSource>(&mut self, game: &mut GameLoop<S, R>, world: WorldSize) -> bool {
        let ran = game.on_clock(self.clock.now(), world);
        self.clock.advance(self.interval);
        ran
    }

    /// Step until `seconds` of clock time have been delivered or the loop
    /// stops accepting ticks. `before_tick` runs ahead of every step and may
    /// issue actions. Returns the number of ticks that ran.
    pub fn run_for<S, R, F>(&mut self, game: &mut GameLoop<S, R>, world: WorldSize, seconds: f64, mut before_tick: F) -> u64
    where
        S: BestScoreStore,
        R: UniformSource,
        F: FnMut(&mut GameLoop<S, R>),
    {
        let steps = (seconds / self.interval).round().max(0.0) as u64;
        let mut ran = 0;
        for _ in 0..steps {
            before_tick(game);
            if !self.step(game, world) {
                break;
            }
            ran += 1;
        }
        ran
    }
}
