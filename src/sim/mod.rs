//! Simulation module
//!
//! All gameplay logic lives here. No rendering, input devices or storage:
//! - Time arrives as clock readings or explicit dt
//! - Randomness is injected
//! - The best score goes through an injected store

pub mod collision;
pub mod obstacle;
pub mod physics;
pub mod rng;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use obstacle::PassEvent;
pub use rng::{ScriptedSource, UniformSource};
pub use score::ScoreKeeper;
pub use state::{ActorState, GameEvent, GamePhase, ObstacleState, ScoreState, Snapshot, WorldSize};
pub use tick::{Action, GameLoop};
