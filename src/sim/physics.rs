//! Actor motion: semi-implicit Euler under uniform gravity

use super::state::ActorState;

/// Advance velocity by `gravity * dt`, then position by the new velocity
#[inline]
pub fn integrate(actor: &mut ActorState, dt: f32, gravity: f32) {
    actor.vel_y += gravity * dt;
    actor.pos.y += actor.vel_y * dt;
}

/// Overwrite the vertical velocity (a kick, not an accumulation)
#[inline]
pub fn apply_impulse(actor: &mut ActorState, impulse: f32) {
    actor.vel_y = impulse;
}

/// Keep the actor between the ceiling and the ground line.
///
/// The ceiling only stops position; the ground also arrests the fall.
pub fn clamp_to_bounds(actor: &mut ActorState, world_height: f32, ground_height: f32, actor_size: f32) {
    if actor.pos.y < 0.0 {
        actor.pos.y = 0.0;
    }

    let ground_line = (world_height - ground_height - actor_size / 2.0).max(0.0);
    if actor.pos.y > ground_line {
        actor.pos.y = ground_line;
        actor.vel_y = 0.0;
    }

    debug_assert!(actor.pos.y >= 0.0 && actor.pos.y <= ground_line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn actor(y: f32, vel_y: f32) -> ActorState {
        ActorState {
            pos: Vec2::new(100.0, y),
            vel_y,
        }
    }

    #[test]
    fn test_integrate_velocity_before_position() {
        let mut a = actor(300.0, 0.0);
        integrate(&mut a, 0.1, 1200.0);
        assert!((a.vel_y - 120.0).abs() < 1e-3);
        assert!((a.pos.y - 312.0).abs() < 1e-3);
        assert_eq!(a.pos.x, 100.0);
    }

    #[test]
    fn test_integrate_zero_dt_is_noop() {
        let mut a = actor(250.0, -80.0);
        integrate(&mut a, 0.0, 1200.0);
        assert_eq!(a, actor(250.0, -80.0));
    }

    #[test]
    fn test_impulse_overwrites() {
        let mut a = actor(300.0, 500.0);
        apply_impulse(&mut a, -400.0);
        assert_eq!(a.vel_y, -400.0);
        apply_impulse(&mut a, -400.0);
        assert_eq!(a.vel_y, -400.0);
    }

    #[test]
    fn test_ceiling_is_soft() {
        let mut a = actor(-15.0, -300.0);
        clamp_to_bounds(&mut a, 800.0, 0.0, 50.0);
        assert_eq!(a.pos.y, 0.0);
        assert_eq!(a.vel_y, -300.0);
    }

    #[test]
    fn test_ground_is_hard() {
        let mut a = actor(790.0, 450.0);
        clamp_to_bounds(&mut a, 800.0, 0.0, 50.0);
        assert_eq!(a.pos.y, 775.0);
        assert_eq!(a.vel_y, 0.0);
    }

    #[test]
    fn test_within_bounds_untouched() {
        let mut a = actor(400.0, 30.0);
        clamp_to_bounds(&mut a, 800.0, 100.0, 50.0);
        assert_eq!(a, actor(400.0, 30.0));
    }

    #[test]
    fn test_shrunk_world_keeps_actor_non_negative() {
        let mut a = actor(400.0, 30.0);
        clamp_to_bounds(&mut a, 20.0, 100.0, 50.0);
        assert_eq!(a.pos.y, 0.0);
        assert_eq!(a.vel_y, 0.0);
    }
}
