//! Placement system - anchors the hoop on a detected surface or a camera-relative fallback.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::events::{NudgeHoopEvent, PlaceHoopEvent};
use crate::resources::{CameraRig, HoopAnchor, HoopConfig, SurfaceTracking};
use crate::types::SurfacePose;

/// Consume placement requests and anchor the hoop.
///
/// Placement is idempotent per session: once `placed` is set, further
/// requests drain with no effect until a reset clears the flag. The resolver
/// itself is total, so this system has no failure path; a missing surface
/// just selects the fallback anchor.
///
/// # Arguments
/// * `requests` - Placement request messages
/// * `tracking` - Latest surface-detection result from the host
/// * `camera` - Host-fed camera pose
/// * `config` - Simulation tunables
/// * `anchor` - The hoop anchor to fill in
pub fn place_hoop(
    mut requests: MessageReader<PlaceHoopEvent>,
    tracking: Res<SurfaceTracking>,
    camera: Res<CameraRig>,
    config: Res<HoopConfig>,
    mut anchor: ResMut<HoopAnchor>,
) {
    if requests.read().next().is_none() {
        return;
    }

    if anchor.placed {
        return;
    }

    let (translation, rotation) = resolve_anchor(tracking.surface.as_ref(), &camera, &config);
    anchor.translation = translation;
    anchor.rotation = rotation;
    anchor.placed = true;

    info!(
        "hoop placed at {translation} ({})",
        if tracking.surface.is_some() {
            "detected surface"
        } else {
            "camera fallback"
        }
    );
}

/// Resolve the hoop anchor transform from the current poses.
///
/// With a detected surface, the rim sits `rim_height` above the surface
/// point. Without one, the anchor goes `fallback_distance` along the
/// camera's horizontal forward axis, raised by a fraction of the rim height
/// above camera level. Either way the hoop faces the camera with a yaw-only
/// rotation, keeping the rim plane vertical.
///
/// # Arguments
/// * `surface` - Detected surface pose, if any
/// * `camera` - Camera pose
/// * `config` - Simulation tunables
///
/// # Returns
/// The anchor translation and rotation
pub fn resolve_anchor(
    surface: Option<&SurfacePose>,
    camera: &CameraRig,
    config: &HoopConfig,
) -> (Vec3, Quat) {
    let translation = match surface {
        Some(pose) => pose.translation + Vec3::Y * config.rim_height,
        None => {
            let mut flat = camera.forward();
            flat.y = 0.0;
            let flat = if flat.length_squared() > 1e-6 {
                flat.normalize()
            } else {
                Vec3::NEG_Z
            };
            camera.translation
                + flat * config.fallback_distance
                + Vec3::Y * (config.rim_height * config.fallback_rim_fraction)
        }
    };

    (translation, yaw_facing(translation, camera.translation))
}

/// Yaw-only rotation turning local +Z at `from` toward `toward`.
fn yaw_facing(from: Vec3, toward: Vec3) -> Quat {
    let mut dir = toward - from;
    dir.y = 0.0;

    if dir.length_squared() < 1e-6 {
        return Quat::IDENTITY;
    }

    let dir = dir.normalize();
    Quat::from_rotation_y(dir.x.atan2(dir.z))
}

/// Apply manual height adjustments to the placed hoop.
///
/// Nudges while no hoop is placed are dropped.
pub fn nudge_hoop_height(
    mut nudges: MessageReader<NudgeHoopEvent>,
    mut anchor: ResMut<HoopAnchor>,
) {
    for nudge in nudges.read() {
        if anchor.placed {
            anchor.translation.y += nudge.delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(translation: Vec3) -> CameraRig {
        CameraRig {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    #[test]
    fn test_surface_placement_raises_rim() {
        let config = HoopConfig::default();
        let camera = camera_at(Vec3::new(0.0, 1.5, 0.0));
        let surface = SurfacePose {
            translation: Vec3::new(0.0, 0.0, -2.0),
            rotation: Quat::IDENTITY,
        };

        let (translation, rotation) = resolve_anchor(Some(&surface), &camera, &config);

        assert_eq!(translation, Vec3::new(0.0, config.rim_height, -2.0));
        // Rim plane normal points back at the camera
        let normal = rotation * Vec3::Z;
        assert!((normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_fallback_placement_sits_ahead_of_camera() {
        let config = HoopConfig::default();
        let camera = camera_at(Vec3::new(0.0, 1.5, 0.0));

        let (translation, _) = resolve_anchor(None, &camera, &config);

        assert!((translation.z - (-config.fallback_distance)).abs() < 1e-5);
        let expected_y = 1.5 + config.rim_height * config.fallback_rim_fraction;
        assert!((translation.y - expected_y).abs() < 1e-5);
    }

    #[test]
    fn test_yaw_facing_ignores_height_difference() {
        let rotation = yaw_facing(Vec3::new(0.0, 1.6, -2.0), Vec3::new(0.0, 0.2, 0.0));
        let normal = rotation * Vec3::Z;

        assert!(normal.y.abs() < 1e-6);
        assert!((normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_anchor_faces_offset_camera() {
        let config = HoopConfig::default();
        let camera = camera_at(Vec3::new(2.0, 1.5, 0.0));
        let surface = SurfacePose {
            translation: Vec3::new(0.0, 0.0, -2.0),
            rotation: Quat::IDENTITY,
        };

        let (translation, rotation) = resolve_anchor(Some(&surface), &camera, &config);
        let normal = rotation * Vec3::Z;
        let mut expected = camera.translation - translation;
        expected.y = 0.0;
        let expected = expected.normalize();

        assert!((normal - expected).length() < 1e-5);
    }
}
