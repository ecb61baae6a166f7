//! Game settings
//!
//! Immutable tunables for one run. Can be loaded from a JSON document; anything
//! that fails to parse or breaks an invariant falls back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,

    // === Actor ===
    /// Rendered size of the actor; also offsets the ground line
    pub actor_size: f32,
    /// Side of the square hit box centered on the actor
    pub actor_hit_radius: f32,
    /// Fixed horizontal position of the actor
    pub actor_x: f32,
    /// Vertical position at the start of a run
    pub actor_start_y: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Vertical opening between the top and bottom segment
    pub obstacle_gap: f32,
    /// Scroll speed (units/s)
    pub obstacle_speed: f32,
    pub min_gap_height: f32,
    pub max_gap_height: f32,

    // === World ===
    pub ground_height: f32,

    // === Clock ===
    /// Cap applied to each tick's dt
    pub max_tick_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            actor_size: ACTOR_SIZE,
            actor_hit_radius: ACTOR_HIT_RADIUS,
            actor_x: ACTOR_X,
            actor_start_y: ACTOR_START_Y,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            min_gap_height: MIN_GAP_HEIGHT,
            max_gap_height: MAX_GAP_HEIGHT,

            ground_height: GROUND_HEIGHT,

            max_tick_dt: MAX_TICK_DT,
        }
    }
}

impl Settings {
    /// Check the invariants: finite values, non-negative magnitudes, a
    /// positive gap, an ordered gap range, and a scroll speed that
    /// `MAX_SUBSTEPS` steps can keep inside the pass window
    pub fn is_valid(&self) -> bool {
        let all = [
            self.gravity,
            self.jump_impulse,
            self.actor_size,
            self.actor_hit_radius,
            self.actor_x,
            self.actor_start_y,
            self.obstacle_width,
            self.obstacle_gap,
            self.obstacle_speed,
            self.min_gap_height,
            self.max_gap_height,
            self.ground_height,
            self.max_tick_dt,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return false;
        }

        // jump_impulse is a signed velocity, gravity may point either way
        let magnitudes = [
            self.actor_size,
            self.actor_hit_radius,
            self.actor_x,
            self.actor_start_y,
            self.obstacle_width,
            self.obstacle_speed,
            self.min_gap_height,
            self.ground_height,
            self.max_tick_dt,
        ];
        // Even the longest tick must split into steps that fit the pass window
        let longest_tick = self.obstacle_speed * self.max_tick_dt;
        let reachable = longest_tick <= 0.0
            || longest_tick < self.max_scroll_step() * MAX_SUBSTEPS as f32;

        magnitudes.iter().all(|v| *v >= 0.0)
            && self.obstacle_gap > 0.0
            && self.min_gap_height < self.max_gap_height
            && reachable
    }

    /// Largest horizontal distance the pair may scroll in one pipeline step.
    ///
    /// Half of the narrower of two windows: the `actor_x` wide stretch between
    /// the pass line and the recycle threshold, and the stretch where the pair
    /// overlaps the actor's hit box.
    pub fn max_scroll_step(&self) -> f32 {
        self.actor_x.min(self.obstacle_width + self.actor_hit_radius) / 2.0
    }

    /// Number of pipeline steps needed to integrate `dt` without the pair
    /// skipping a window
    pub fn substeps(&self, dt: f32) -> u32 {
        let travel = self.obstacle_speed * dt;
        let step = self.max_scroll_step();
        if travel <= 0.0 || step <= 0.0 {
            return 1;
        }
        ((travel / step).ceil() as u32).clamp(1, MAX_SUBSTEPS)
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    /// Returns `None` if the document is malformed or the result is invalid.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) if settings.is_valid() => {
                log::info!("Loaded settings from JSON");
                Some(settings)
            }
            Ok(_) => {
                log::warn!("Rejected settings: invariants violated");
                None
            }
            Err(e) => {
                log::warn!("Rejected settings: {}", e);
                None
            }
        }
    }

    /// Parse settings from JSON, falling back to defaults
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|| {
            log::info!("Using default settings");
            Self::default()
        })
    }

    /// Serialize to a JSON document
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Lowest y the actor may occupy for a world of the given height
    pub fn ground_line(&self, world_height: f32) -> f32 {
        (world_height - self.ground_height - self.actor_size / 2.0).max(0.0)
    }

    /// Offset at which the obstacle has fully left the screen
    pub fn recycle_threshold(&self, world_width: f32) -> f32 {
        -(world_width + self.obstacle_width)
    }
}
