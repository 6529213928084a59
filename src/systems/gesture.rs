//! Gesture system - folds pointer events into a gesture record and maps swipes to throws.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::components::Ball;
use crate::events::{PointerInput, PointerPhase, ThrowEvent};
use crate::resources::{ActiveGesture, CameraRig, HoopAnchor, HoopConfig, PauseState, ScoreBoard};
use crate::types::GestureSample;

/// Track the pointer and turn qualifying releases into throws.
///
/// A press opens the gesture record, moves refresh it, and the release pairs
/// the press sample with the final position. Releases while no hoop is
/// placed, or while paused, just close the record; a release whose swipe is
/// too short maps to nothing. Only mapped swipes emit a [`ThrowEvent`].
///
/// # Arguments
/// * `pointer` - Pointer messages from the host
/// * `gesture` - The in-flight gesture record
/// * `camera` - Host-fed camera pose
/// * `config` - Simulation tunables
/// * `anchor` - Placement state gating throws
/// * `pause` - Pause flag gating throws
/// * `throws` - Writer for accepted throws
pub fn track_pointer(
    mut pointer: MessageReader<PointerInput>,
    mut gesture: ResMut<ActiveGesture>,
    camera: Res<CameraRig>,
    config: Res<HoopConfig>,
    anchor: Res<HoopAnchor>,
    pause: Res<PauseState>,
    mut throws: MessageWriter<ThrowEvent>,
) {
    for input in pointer.read() {
        let sample = GestureSample::new(input.position, input.time);

        match input.phase {
            PointerPhase::Began => {
                gesture.start = Some(sample);
                gesture.latest = Some(sample);
            }
            PointerPhase::Moved => {
                if gesture.start.is_some() {
                    gesture.latest = Some(sample);
                }
            }
            PointerPhase::Ended => {
                let Some(start) = gesture.start else {
                    continue;
                };
                gesture.clear();

                if !anchor.placed || pause.paused {
                    continue;
                }

                if let Some(throw) = swipe_throw(start, sample, &camera, &config) {
                    throws.write(throw);
                }
            }
        }
    }
}

/// Map a press/release pair to a throw.
///
/// Screen velocities come from the displacement over the elapsed time
/// (clamped to `min_swipe_secs` so an instantaneous release cannot divide by
/// zero). The vertical component is sign-flipped so an upward drag is
/// positive. The world velocity projects these onto the camera's right and
/// up axes and adds a forward component that grows with the upward swipe
/// speed, so steeper and faster swipes throw harder. The final speed is
/// capped to keep numeric glitches in the input stream from launching
/// outliers.
///
/// # Arguments
/// * `start` - Sample taken at the press
/// * `end` - Sample taken at the release
/// * `camera` - Camera pose providing the projection axes
/// * `config` - Simulation tunables
///
/// # Returns
/// The throw, or None when the swipe displacement is under the threshold
pub fn swipe_throw(
    start: GestureSample,
    end: GestureSample,
    camera: &CameraRig,
    config: &HoopConfig,
) -> Option<ThrowEvent> {
    let displacement = end.position - start.position;
    if displacement.length() < config.min_swipe_px {
        return None;
    }

    let elapsed = (end.time - start.time).max(config.min_swipe_secs) as f32;
    let screen_vx = displacement.x / elapsed;
    let screen_vy = -displacement.y / elapsed;

    let velocity = camera.right() * screen_vx * config.lateral_gain
        + camera.up() * screen_vy * config.vertical_gain
        + camera.forward() * (config.base_forward_speed + config.forward_boost * screen_vy.abs());
    let velocity = velocity.clamp_length_max(config.max_throw_speed);

    let origin = camera.translation + camera.forward() * config.spawn_forward_offset
        - camera.up() * config.spawn_drop_offset;

    Some(ThrowEvent::new(origin, velocity))
}

/// Spawn a ball for every accepted throw and count the attempt.
///
/// Also the entry point for programmatic throws: any [`ThrowEvent`] written
/// by the host goes through the same gate (hoop placed, not paused) and the
/// same attempt accounting as a swipe.
pub fn spawn_thrown_balls(
    mut commands: Commands,
    mut throws: MessageReader<ThrowEvent>,
    config: Res<HoopConfig>,
    anchor: Res<HoopAnchor>,
    pause: Res<PauseState>,
    mut score: ResMut<ScoreBoard>,
) {
    for throw in throws.read() {
        if !anchor.placed || pause.paused {
            continue;
        }

        commands.spawn((
            Ball::new(throw.origin, throw.velocity).with_radius(config.ball_radius),
            Transform::from_translation(throw.origin),
        ));
        score.record_attempt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_camera() -> CameraRig {
        CameraRig {
            translation: Vec3::new(0.0, 1.5, 0.0),
            rotation: Quat::IDENTITY,
        }
    }

    #[test]
    fn test_tiny_swipe_is_rejected() {
        let config = HoopConfig::default();
        let start = GestureSample::new(Vec2::new(100.0, 100.0), 0.0);
        let end = GestureSample::new(Vec2::new(103.0, 96.0), 0.8);

        assert!(swipe_throw(start, end, &level_camera(), &config).is_none());
    }

    #[test]
    fn test_upward_swipe_throws_up_and_forward() {
        let config = HoopConfig::default();
        let start = GestureSample::new(Vec2::new(200.0, 600.0), 0.0);
        let end = GestureSample::new(Vec2::new(200.0, 200.0), 0.2);

        let throw = swipe_throw(start, end, &level_camera(), &config).unwrap();

        assert_eq!(throw.velocity.x, 0.0);
        assert!(throw.velocity.y > 0.0, "upward drag must throw upward");
        assert!(throw.velocity.z < 0.0, "throw must go into the scene");
        // Faster vertical swipes add forward speed beyond the base
        assert!(-throw.velocity.z > config.base_forward_speed);
    }

    #[test]
    fn test_rightward_swipe_curves_right() {
        let config = HoopConfig::default();
        let start = GestureSample::new(Vec2::new(100.0, 400.0), 0.0);
        let end = GestureSample::new(Vec2::new(400.0, 380.0), 0.2);

        let throw = swipe_throw(start, end, &level_camera(), &config).unwrap();

        assert!(throw.velocity.x > 0.0);
    }

    #[test]
    fn test_instant_release_clamps_elapsed_time() {
        let config = HoopConfig::default();
        let start = GestureSample::new(Vec2::new(100.0, 500.0), 1.0);
        // Same timestamp as the press; elapsed clamps to min_swipe_secs
        let end = GestureSample::new(Vec2::new(100.0, 100.0), 1.0);

        let throw = swipe_throw(start, end, &level_camera(), &config).unwrap();

        assert!(throw.velocity.is_finite());
        assert!(throw.velocity.length() <= config.max_throw_speed + 1e-4);
    }

    #[test]
    fn test_throw_speed_is_capped() {
        let config = HoopConfig::default();
        let start = GestureSample::new(Vec2::new(0.0, 2000.0), 0.0);
        let end = GestureSample::new(Vec2::new(0.0, 0.0), 0.01);

        let throw = swipe_throw(start, end, &level_camera(), &config).unwrap();

        assert!(throw.velocity.length() <= config.max_throw_speed + 1e-4);
    }

    #[test]
    fn test_spawn_origin_sits_forward_and_below_camera() {
        let config = HoopConfig::default();
        let camera = level_camera();
        let start = GestureSample::new(Vec2::new(100.0, 500.0), 0.0);
        let end = GestureSample::new(Vec2::new(100.0, 100.0), 0.3);

        let throw = swipe_throw(start, end, &camera, &config).unwrap();

        let expected = camera.translation + Vec3::NEG_Z * config.spawn_forward_offset
            - Vec3::Y * config.spawn_drop_offset;
        assert!((throw.origin - expected).length() < 1e-5);
    }
}
