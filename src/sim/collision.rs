//! Collision detection between the actor and the obstacle pair
//!
//! Everything is axis-aligned. Touching edges count as a hit.

use glam::Vec2;

use super::state::{ActorState, ObstacleState};
use crate::settings::Settings;

/// Axis-aligned rectangle (origin at top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square of side `side` centered on `center`
    pub fn centered(center: Vec2, side: f32) -> Self {
        Self {
            min: center - Vec2::splat(side / 2.0),
            size: Vec2::splat(side),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Closed-interval overlap test
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x <= b_max.x && other.min.x <= a_max.x && self.min.y <= b_max.y && other.min.y <= a_max.y
    }
}

/// Hit box of the actor
pub fn actor_rect(actor: &ActorState, settings: &Settings) -> Rect {
    Rect::centered(actor.pos, settings.actor_hit_radius)
}

/// Top and bottom segment of the pair.
///
/// The bottom segment reuses the top segment's height rather than running
/// to the ground; this is the game's actual hit geometry.
pub fn obstacle_rects(obstacle: &ObstacleState, settings: &Settings, world_width: f32) -> [Rect; 2] {
    let x = obstacle.left(world_width);
    let top = Rect::new(x, 0.0, settings.obstacle_width, obstacle.gap_top);
    let bottom = Rect::new(
        x,
        obstacle.gap_top + settings.obstacle_gap,
        settings.obstacle_width,
        obstacle.gap_top,
    );
    [top, bottom]
}

/// True if the actor overlaps either segment of the pair
pub fn test(actor: &ActorState, obstacle: &ObstacleState, settings: &Settings, world_width: f32) -> bool {
    let hit_box = actor_rect(actor, settings);
    obstacle_rects(obstacle, settings, world_width)
        .iter()
        .any(|segment| hit_box.intersects(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            actor_hit_radius: 40.0,
            obstacle_width: 80.0,
            obstacle_gap: 150.0,
            ..Default::default()
        }
    }

    fn actor_at(x: f32, y: f32) -> ActorState {
        ActorState {
            pos: Vec2::new(x, y),
            vel_y: 0.0,
        }
    }

    /// Pair whose left edge sits at world x = 60 in a 400-wide world
    fn obstacle(gap_top: f32) -> ObstacleState {
        ObstacleState {
            offset: -340.0,
            gap_top,
            passed: false,
        }
    }

    #[test]
    fn test_inside_top_segment_hits() {
        assert!(test(&actor_at(100.0, 100.0), &obstacle(300.0), &settings(), 400.0));
    }

    #[test]
    fn test_inside_gap_misses() {
        // Gap spans y 300..450; actor box spans 355..395
        assert!(!test(&actor_at(100.0, 375.0), &obstacle(300.0), &settings(), 400.0));
    }

    #[test]
    fn test_inside_bottom_segment_hits() {
        // Bottom segment spans y 450..750
        assert!(test(&actor_at(100.0, 600.0), &obstacle(300.0), &settings(), 400.0));
    }

    #[test]
    fn test_below_mirrored_bottom_segment_misses() {
        // Bottom segment is only gap_top tall (y 250..350), so y 700 is clear
        let s = settings();
        assert!(!test(&actor_at(100.0, 700.0), &obstacle(100.0), &s, 400.0));
    }

    #[test]
    fn test_horizontally_clear_misses() {
        assert!(!test(&actor_at(10.0, 100.0), &obstacle(300.0), &settings(), 400.0));
    }

    #[test]
    fn test_touching_counts() {
        // Actor box right edge at 60 touches the pair's left edge at 60
        assert!(test(&actor_at(40.0, 100.0), &obstacle(300.0), &settings(), 400.0));
        // Actor box top edge at 300 touches the bottom of the top segment
        assert!(test(&actor_at(100.0, 320.0), &obstacle(300.0), &settings(), 400.0));
    }

    #[test]
    fn test_rect_intersects_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 5.0, 4.0, 4.0);
        let c = Rect::new(11.0, 5.0, 4.0, 4.0);
        assert!(a.intersects(&b) && b.intersects(&a));
        assert!(!a.intersects(&c) && !c.intersects(&a));
    }
}
