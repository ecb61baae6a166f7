//! Game state and core simulation types
//!
//! Everything the loop owns for one run, plus the read-only snapshot it
//! hands to the presentation layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start action
    #[default]
    Ready,
    /// Run in progress
    Active,
    /// Actor hit an obstacle; waiting for reset
    Ended,
}

/// Viewport dimensions supplied by the environment each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldSize {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT)
    }
}

impl WorldSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Non-finite or negative dimensions collapse to zero
    pub fn sanitized(self) -> Self {
        let fix = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: fix(self.width),
            height: fix(self.height),
        }
    }
}

/// The player's actor. Only moves vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorState {
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
}

impl ActorState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(settings.actor_x, settings.actor_start_y),
            vel_y: 0.0,
        }
    }

    /// Velocity as a vector; dx is always 0
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(0.0, self.vel_y)
    }
}

/// The single recycled obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleState {
    /// Horizontal offset from the right edge of the world (≤ 0)
    pub offset: f32,
    /// Height of the top segment, i.e. where the gap begins
    pub gap_top: f32,
    /// Whether the current cycle has already been scored
    pub passed: bool,
}

impl ObstacleState {
    pub fn new(gap_top: f32) -> Self {
        Self {
            offset: 0.0,
            gap_top,
            passed: false,
        }
    }

    /// Left edge of the pair in world coordinates
    pub fn left(&self, world_width: f32) -> f32 {
        world_width + self.offset
    }
}

/// Current run score and the best across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub current: u32,
    pub best: u32,
}

/// Notable things that happened since the last drain (audio/UI hooks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    Scored { score: u32 },
    NewBest { best: u32 },
    Crashed { score: u32 },
    Reset,
}

/// Read-only view of the loop, published after every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub actor_position: Vec2,
    pub obstacle_offset: f32,
    pub obstacle_gap_top: f32,
    pub current_score: u32,
    pub best_score: u32,
    /// Dimensions the last tick was evaluated against
    pub world: WorldSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_starts_at_configured_position() {
        let settings = Settings::default();
        let actor = ActorState::new(&settings);
        assert_eq!(actor.pos, Vec2::new(settings.actor_x, settings.actor_start_y));
        assert_eq!(actor.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_world_size_sanitized() {
        let world = WorldSize::new(f32::NAN, -20.0).sanitized();
        assert_eq!(world, WorldSize::new(0.0, 0.0));

        let world = WorldSize::new(320.0, 480.0).sanitized();
        assert_eq!(world, WorldSize::new(320.0, 480.0));
    }

    #[test]
    fn test_obstacle_left_edge() {
        let mut obstacle = ObstacleState::new(200.0);
        assert_eq!(obstacle.left(800.0), 800.0);
        obstacle.offset = -300.0;
        assert_eq!(obstacle.left(800.0), 500.0);
    }
}
