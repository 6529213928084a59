//! Kinematics system - semi-implicit Euler integration for balls in flight.

use bevy::prelude::*;

use crate::components::Ball;
use crate::resources::{CourtEnvironment, PauseState};

/// Advance every ball by one tick of gravity.
///
/// Runs in FixedUpdate for deterministic simulation. The pause flag gates
/// the whole pass, so a paused frame leaves positions, velocities, and ages
/// untouched. Each ball's position at the start of the tick is stashed in
/// `previous_position` first; the score detector later tests exactly the
/// segment this pass produced.
///
/// # Arguments
/// * `time` - Bevy FixedTime resource to get delta time
/// * `env` - Court environment with the gravity vector
/// * `pause` - Global pause flag
/// * `query` - Transform and ball components to update
pub fn update_ball_kinematics(
    time: Res<Time<Fixed>>,
    env: Res<CourtEnvironment>,
    pause: Res<PauseState>,
    mut query: Query<(&mut Transform, &mut Ball)>,
) {
    if pause.paused {
        return;
    }

    let dt = time.delta_secs();
    let gravity = env.gravity;

    query.par_iter_mut().for_each(|(mut transform, mut ball)| {
        ball.previous_position = transform.translation;
        integrate_ball(&mut transform, &mut ball, gravity, dt);
    });
}

/// Semi-implicit Euler step: velocity from gravity first, then position
/// from the updated velocity, within the same timestep.
///
/// # Arguments
/// * `transform` - Transform to advance
/// * `ball` - Ball carrying velocity and age
/// * `gravity` - Gravity vector (m/s²)
/// * `dt` - Timestep in seconds
pub fn integrate_ball(transform: &mut Transform, ball: &mut Ball, gravity: Vec3, dt: f32) {
    ball.velocity += gravity * dt;
    transform.translation += ball.velocity * dt;
    ball.age += dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAVITY: Vec3 = Vec3::new(0.0, -9.82, 0.0);

    #[test]
    fn test_velocity_updates_before_position() {
        let mut transform = Transform::from_translation(Vec3::ZERO);
        let mut ball = Ball::new(Vec3::ZERO, Vec3::new(0.0, 5.0, -3.0));

        integrate_ball(&mut transform, &mut ball, GRAVITY, 1.0);

        // One full step pulls the velocity down before the position moves,
        // so the position picks up the post-gravity velocity.
        assert!((ball.velocity - Vec3::new(0.0, -4.82, -3.0)).length() < 1e-4);
        assert!((transform.translation - Vec3::new(0.0, -4.82, -3.0)).length() < 1e-4);
    }

    #[test]
    fn test_vertical_velocity_closed_form() {
        let mut transform = Transform::from_translation(Vec3::ZERO);
        let mut ball = Ball::new(Vec3::ZERO, Vec3::new(0.0, 2.5, 0.0));
        let dt = 1.0 / 60.0;
        let steps = 120;

        for _ in 0..steps {
            integrate_ball(&mut transform, &mut ball, GRAVITY, dt);
        }

        let expected_vy = 2.5 + steps as f32 * GRAVITY.y * dt;
        assert!((ball.velocity.y - expected_vy).abs() < 1e-3);
    }

    #[test]
    fn test_age_accumulates_per_step() {
        let mut transform = Transform::default();
        let mut ball = Ball::default();

        for _ in 0..30 {
            integrate_ball(&mut transform, &mut ball, GRAVITY, 0.1);
        }

        assert!((ball.age - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_gravity_is_uniform_motion() {
        let mut transform = Transform::from_translation(Vec3::ZERO);
        let mut ball = Ball::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -2.0));

        for _ in 0..10 {
            integrate_ball(&mut transform, &mut ball, Vec3::ZERO, 0.1);
        }

        assert!((transform.translation - Vec3::new(1.0, 0.0, -2.0)).length() < 1e-5);
        assert_eq!(ball.velocity, Vec3::new(1.0, 0.0, -2.0));
    }
}
