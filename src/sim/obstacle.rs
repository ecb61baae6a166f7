//! Obstacle track: one recycled pair scrolling right to left
//!
//! Only a single pair ever exists. When it leaves the screen it jumps back to
//! the right edge with a freshly drawn gap.

use super::rng::UniformSource;
use super::state::ObstacleState;

/// Emitted once per obstacle cycle when the pair clears the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassEvent;

/// Scroll the pair left by `speed * dt`
#[inline]
pub fn advance(obstacle: &mut ObstacleState, dt: f32, speed: f32) {
    obstacle.offset -= speed * dt;
}

/// Reset the pair to the right edge once it has fully left the screen.
/// Returns true if it was recycled.
pub fn recycle_if_needed(
    obstacle: &mut ObstacleState,
    world_width: f32,
    obstacle_width: f32,
    min_gap: f32,
    max_gap: f32,
    rng: &mut impl UniformSource,
) -> bool {
    if obstacle.offset > -(world_width + obstacle_width) {
        return false;
    }

    obstacle.offset = 0.0;
    obstacle.gap_top = rng.uniform(min_gap, max_gap);
    debug_assert!(obstacle.gap_top >= min_gap && (obstacle.gap_top <= max_gap || max_gap <= min_gap));
    true
}

/// Report the first tick the pair's trailing edge is behind `actor_x`.
///
/// The `passed` latch clears again once the leading edge is back ahead of
/// the actor, so each cycle scores exactly once.
pub fn check_passed(
    obstacle: &mut ObstacleState,
    actor_x: f32,
    world_width: f32,
    obstacle_width: f32,
) -> Option<PassEvent> {
    let left = obstacle.left(world_width);
    if left + obstacle_width < actor_x && !obstacle.passed {
        obstacle.passed = true;
        Some(PassEvent)
    } else {
        if left > actor_x {
            obstacle.passed = false;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedSource, seeded};

    #[test]
    fn test_advance() {
        let mut obstacle = ObstacleState::new(200.0);
        advance(&mut obstacle, 0.1, 300.0);
        assert!((obstacle.offset + 30.0).abs() < 1e-4);
        advance(&mut obstacle, 0.0, 300.0);
        assert!((obstacle.offset + 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_recycle_past_threshold() {
        let mut obstacle = ObstacleState::new(200.0);
        obstacle.offset = -950.0;
        let mut rng = ScriptedSource::new(vec![333.0]);
        assert!(recycle_if_needed(&mut obstacle, 800.0, 80.0, 100.0, 500.0, &mut rng));
        assert_eq!(obstacle.offset, 0.0);
        assert_eq!(obstacle.gap_top, 333.0);
    }

    #[test]
    fn test_recycle_exactly_at_threshold() {
        let mut obstacle = ObstacleState::new(200.0);
        obstacle.offset = -880.0;
        assert!(recycle_if_needed(&mut obstacle, 800.0, 80.0, 100.0, 500.0, &mut seeded(3)));
        assert_eq!(obstacle.offset, 0.0);
    }

    #[test]
    fn test_no_recycle_before_threshold() {
        let mut obstacle = ObstacleState::new(200.0);
        obstacle.offset = -879.0;
        assert!(!recycle_if_needed(&mut obstacle, 800.0, 80.0, 100.0, 500.0, &mut seeded(3)));
        assert_eq!(obstacle.offset, -879.0);
        assert_eq!(obstacle.gap_top, 200.0);
    }

    #[test]
    fn test_pass_scores_once() {
        // world 400, width 100, actor at 100: trailing edge behind the
        // actor once offset < -400
        let mut obstacle = ObstacleState::new(200.0);
        obstacle.offset = -350.0;
        assert_eq!(check_passed(&mut obstacle, 100.0, 400.0, 100.0), None);

        obstacle.offset = -401.0;
        assert_eq!(check_passed(&mut obstacle, 100.0, 400.0, 100.0), Some(PassEvent));
        assert!(obstacle.passed);

        obstacle.offset = -450.0;
        assert_eq!(check_passed(&mut obstacle, 100.0, 400.0, 100.0), None);
    }

    #[test]
    fn test_latch_clears_when_pair_is_ahead_again() {
        let mut obstacle = ObstacleState::new(200.0);
        obstacle.offset = -401.0;
        assert!(check_passed(&mut obstacle, 100.0, 400.0, 100.0).is_some());

        // Recycled to the right edge
        obstacle.offset = 0.0;
        assert_eq!(check_passed(&mut obstacle, 100.0, 400.0, 100.0), None);
        assert!(!obstacle.passed);

        obstacle.offset = -401.0;
        assert!(check_passed(&mut obstacle, 100.0, 400.0, 100.0).is_some());
    }
}
