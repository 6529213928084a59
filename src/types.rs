//! Common value types for the hoop-shot simulation.

use bevy::prelude::*;

/// The mathematical plane through the hoop's rim.
///
/// Ball trajectories are tested against this plane each tick: a made basket
/// is a front-to-back crossing whose interpolated hit point lies within the
/// scoring radius of the center. The plane is derived from the current
/// [`HoopAnchor`](crate::resources::HoopAnchor) transform, so nudging or
/// re-placing the hoop moves the plane with it.
///
/// # Fields
/// * `center` - World-space rim center
/// * `normal` - Unit normal; the positive half-space faces the player
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_hoop_shot::types::RingPlane;
///
/// let plane = RingPlane {
///     center: Vec3::new(0.0, 1.6, -2.0),
///     normal: Vec3::Z,
/// };
/// assert_eq!(plane.signed_distance(Vec3::new(0.0, 1.6, -1.5)), 0.5);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct RingPlane {
    /// Rim center in world space
    pub center: Vec3,
    /// Unit normal, pointing toward the player side
    pub normal: Vec3,
}

impl RingPlane {
    /// Signed distance from a point to the plane.
    ///
    /// Positive on the player-facing side, negative behind the rim.
    ///
    /// # Arguments
    /// * `point` - World-space point to test
    ///
    /// # Returns
    /// The signed distance along the plane normal
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.center).dot(self.normal)
    }

    /// Detect a front-to-back crossing of the motion segment `prev -> cur`.
    ///
    /// Only crossings entering from the positive half-space count, so a ball
    /// rebounding back through the rim can never trigger twice. The hit point
    /// is interpolated from the ratio of the two signed distances.
    ///
    /// # Arguments
    /// * `prev` - Position at the start of the segment
    /// * `cur` - Position at the end of the segment
    ///
    /// # Returns
    /// The interpolated crossing point, or None when the segment does not
    /// cross front-to-back
    pub fn front_to_back_crossing(&self, prev: Vec3, cur: Vec3) -> Option<Vec3> {
        let d0 = self.signed_distance(prev);
        let d1 = self.signed_distance(cur);

        if d0 > 0.0 && d1 <= 0.0 {
            let t = d0 / (d0 - d1);
            Some(prev.lerp(cur, t))
        } else {
            None
        }
    }

    /// Radial distance of a point from the rim center, measured in the plane.
    ///
    /// The component along the normal is removed first, so a point slightly
    /// off the plane is judged by its projection onto it.
    ///
    /// # Arguments
    /// * `point` - World-space point (typically a crossing point)
    ///
    /// # Returns
    /// Distance from the rim center within the plane
    pub fn radial_distance(&self, point: Vec3) -> f32 {
        let offset = point - self.center;
        let in_plane = offset - self.normal * offset.dot(self.normal);
        in_plane.length()
    }
}

/// Pose of a detected real-world horizontal surface.
///
/// Produced by the host's AR tracking layer and forwarded through
/// [`SurfaceTracking`](crate::resources::SurfaceTracking). Absence of a pose
/// is a normal condition (still searching), not an error; placement falls
/// back to a camera-relative anchor.
///
/// # Fields
/// * `translation` - World-space position on the detected surface
/// * `rotation` - Surface orientation (Y up for a horizontal plane)
#[derive(Clone, Copy, PartialEq)]
pub struct SurfacePose {
    pub translation: Vec3,
    pub rotation: Quat,
}

/// A single pointer sample: screen position plus timestamp.
///
/// Two of these (press and release) are all the throw mapper needs; the
/// intermediate moves only keep the record current so a release always pairs
/// with the latest press.
///
/// # Fields
/// * `position` - Screen-space position in logical pixels (Y down)
/// * `time` - Host-supplied timestamp in seconds
#[derive(Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Screen position in logical pixels, Y pointing down
    pub position: Vec2,
    /// Timestamp in seconds
    pub time: f64,
}

impl GestureSample {
    /// Creates a sample from a position and timestamp.
    pub fn new(position: Vec2, time: f64) -> Self {
        Self { position, time }
    }
}
