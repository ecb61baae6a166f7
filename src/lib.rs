//! Flappy Sim - headless core of a side-scrolling gap-dodging game
//!
//! Core modules:
//! - `sim`: Simulation (physics, obstacle track, collisions, scoring, game loop)
//! - `settings`: Tunable constants, loadable from JSON
//! - `highscores`: Best-score persistence capability
//! - `platform`: Clock abstraction and a fixed-cadence headless driver

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::{BestScoreStore, MemoryStore};
pub use settings::Settings;
pub use sim::{GameLoop, GamePhase, Snapshot, WorldSize};

/// Game configuration constants
pub mod consts {
    /// Nominal clock cadence (100 Hz)
    pub const TICK_INTERVAL: f64 = 0.01;
    /// Largest dt a single tick may integrate (keeps the actor from tunnelling after a stall)
    pub const MAX_TICK_DT: f32 = 0.1;
    /// Maximum substeps per tick when the pair scrolls faster than the pass window
    pub const MAX_SUBSTEPS: u32 = 16;

    /// Default world dimensions, used until the environment reports its own
    pub const DEFAULT_WORLD_WIDTH: f32 = 400.0;
    pub const DEFAULT_WORLD_HEIGHT: f32 = 800.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 100.0;
    pub const ACTOR_START_Y: f32 = 300.0;
    pub const ACTOR_SIZE: f32 = 50.0;
    pub const ACTOR_HIT_RADIUS: f32 = 40.0;

    /// Uniform downward acceleration (units/s²)
    pub const GRAVITY: f32 = 1200.0;
    /// Velocity set by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -400.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 100.0;
    pub const OBSTACLE_GAP: f32 = 140.0;
    pub const OBSTACLE_SPEED: f32 = 300.0;
    pub const MIN_GAP_HEIGHT: f32 = 100.0;
    pub const MAX_GAP_HEIGHT: f32 = 500.0;

    pub const GROUND_HEIGHT: f32 = 100.0;
}

/// Replace a non-finite or negative dt with zero and cap it at `max`
#[inline]
pub fn sanitize_dt(dt: f32, max: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        0.0
    } else {
        dt.min(max)
    }
}
