//! Global resources for the hoop-shot simulation.

use bevy::prelude::*;

use crate::types::{GestureSample, RingPlane, SurfacePose};

/// Global environment settings affecting all balls.
///
/// # Fields
/// * `gravity` - Gravity vector in meters per second squared
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_hoop_shot::resources::CourtEnvironment;
///
/// let env = CourtEnvironment {
///     gravity: Vec3::new(0.0, -9.82, 0.0),
/// };
/// ```
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct CourtEnvironment {
    /// Gravity vector (m/s²)
    pub gravity: Vec3,
}

impl Default for CourtEnvironment {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.82, 0.0),
        }
    }
}

/// Global configuration for the hoop-shot simulation.
///
/// Everything here is a plain tunable; hosts adjust them at startup or live.
/// With the `serialize` feature the whole struct round-trips through serde
/// for settings persistence.
///
/// # Fields
/// * `rim_height` - Rim height above the detected surface (m)
/// * `fallback_distance` - Anchor distance along camera forward when no surface was found (m)
/// * `fallback_rim_fraction` - Fraction of `rim_height` the fallback anchor is raised above camera height
/// * `ring_inner_radius` - Inner rim radius (m)
/// * `ball_radius` - Radius of thrown balls (m)
/// * `ball_lifetime` - Seconds before a ball is culled
/// * `score_margin_fraction` - Fraction of the ball radius subtracted from the rim radius for the scoring test
/// * `min_swipe_px` - Minimum 2D swipe displacement; shorter drags are ignored (logical px)
/// * `min_swipe_secs` - Lower clamp on swipe duration, preventing division by zero (s)
/// * `lateral_gain` - Screen px/s to m/s factor along the camera right axis
/// * `vertical_gain` - Screen px/s to m/s factor along the camera up axis
/// * `base_forward_speed` - Forward speed every throw starts from (m/s)
/// * `forward_boost` - Extra forward m/s per px/s of upward swipe speed
/// * `max_throw_speed` - Hard cap on throw speed (m/s)
/// * `spawn_forward_offset` - Ball spawn distance in front of the camera (m)
/// * `spawn_drop_offset` - Ball spawn distance below the camera (m)
/// * `flash_secs` - Duration of the score flash (s)
/// * `debug_draw` - Enable the gizmo overlay
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct HoopConfig {
    /// Rim height above the detected surface (m)
    pub rim_height: f32,
    /// Fallback anchor distance along camera forward (m)
    pub fallback_distance: f32,
    /// Fraction of rim_height the fallback anchor sits above camera height
    pub fallback_rim_fraction: f32,
    /// Inner rim radius (m)
    pub ring_inner_radius: f32,
    /// Ball radius (m)
    pub ball_radius: f32,
    /// Ball lifetime before culling (s)
    pub ball_lifetime: f32,
    /// Fraction of ball radius subtracted from the rim radius when scoring
    pub score_margin_fraction: f32,
    /// Minimum swipe displacement (logical px)
    pub min_swipe_px: f32,
    /// Minimum swipe duration clamp (s)
    pub min_swipe_secs: f64,
    /// px/s to m/s along the camera right axis
    pub lateral_gain: f32,
    /// px/s to m/s along the camera up axis
    pub vertical_gain: f32,
    /// Forward speed floor for every throw (m/s)
    pub base_forward_speed: f32,
    /// Extra forward m/s per px/s of upward swipe speed
    pub forward_boost: f32,
    /// Throw speed cap (m/s)
    pub max_throw_speed: f32,
    /// Spawn offset in front of the camera (m)
    pub spawn_forward_offset: f32,
    /// Spawn offset below the camera (m)
    pub spawn_drop_offset: f32,
    /// Score flash duration (s)
    pub flash_secs: f32,
    /// Gizmo overlay toggle
    pub debug_draw: bool,
}

impl Default for HoopConfig {
    /// Defaults tuned for a room-scale court: rim at 1.6 m, regulation-ish
    /// 0.19 m rim and 0.08 m ball, five-second ball lifetime, 10 px swipe
    /// threshold, and a 9 m/s throw cap.
    fn default() -> Self {
        Self {
            rim_height: 1.6,
            fallback_distance: 2.0,
            fallback_rim_fraction: 0.25,
            ring_inner_radius: 0.19,
            ball_radius: 0.08,
            ball_lifetime: 5.0,
            score_margin_fraction: 0.5,
            min_swipe_px: 10.0,
            min_swipe_secs: 0.001,
            lateral_gain: 0.0012,
            vertical_gain: 0.0018,
            base_forward_speed: 2.2,
            forward_boost: 0.0015,
            max_throw_speed: 9.0,
            spawn_forward_offset: 0.3,
            spawn_drop_offset: 0.12,
            flash_secs: 0.12,
            debug_draw: false,
        }
    }
}

impl HoopConfig {
    /// Radius a crossing must land within to count as a make.
    ///
    /// The ball radius buys a forgiving margin: only a fraction of it is
    /// subtracted from the inner rim radius, so rim-grazing shots still
    /// drop. The boundary itself is inclusive.
    pub fn scoring_radius(&self) -> f32 {
        self.ring_inner_radius - self.score_margin_fraction * self.ball_radius
    }
}

/// Running score for the current session.
///
/// Both counters only ever grow between resets; `makes` increments at most
/// once per ball, `attempts` once per accepted throw. Rejected gestures
/// count nothing.
///
/// # Fields
/// * `makes` - Balls that passed through the rim
/// * `attempts` - Balls thrown
#[derive(Resource, Reflect, Clone, Copy, Default)]
#[reflect(Resource)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBoard {
    /// Balls that passed through the rim
    pub makes: u32,
    /// Balls thrown
    pub attempts: u32,
}

impl ScoreBoard {
    /// Count one accepted throw.
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Count one made basket.
    pub fn record_make(&mut self) {
        self.makes += 1;
    }

    /// Zero both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The hoop's anchor transform and placement flag.
///
/// Until `placed` is set by the placement system the transform is
/// meaningless and every consumer ignores it; the host uses `placed` as the
/// hoop's visibility flag. The rim plane is derived from the current
/// transform on demand, so height nudges move the plane with the hoop.
///
/// # Fields
/// * `translation` - Rim center in world space
/// * `rotation` - Anchor orientation; local +Z faces the player
/// * `placed` - Whether a placement happened this session
#[derive(Resource, Reflect, Clone, Default)]
#[reflect(Resource)]
pub struct HoopAnchor {
    /// Rim center in world space
    pub translation: Vec3,
    /// Anchor orientation; local +Z faces the player
    pub rotation: Quat,
    /// Set by placement, cleared by reset
    pub placed: bool,
}

impl HoopAnchor {
    /// The rim plane derived from the current anchor transform.
    pub fn ring_plane(&self) -> RingPlane {
        RingPlane {
            center: self.translation,
            normal: (self.rotation * Vec3::Z).normalize(),
        }
    }
}

/// Camera pose fed by the host each frame.
///
/// The simulation never talks to a real camera; the host copies its AR
/// camera's world pose in here before the simulation runs. Axis accessors
/// follow Bevy's convention of forward being -Z.
///
/// # Fields
/// * `translation` - Camera position in world space
/// * `rotation` - Camera orientation
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_hoop_shot::resources::CameraRig;
///
/// let rig = CameraRig {
///     translation: Vec3::new(0.0, 1.5, 0.0),
///     rotation: Quat::IDENTITY,
/// };
/// assert_eq!(rig.forward(), Vec3::NEG_Z);
/// ```
#[derive(Resource, Reflect, Clone, Default)]
#[reflect(Resource)]
pub struct CameraRig {
    /// Camera position in world space
    pub translation: Vec3,
    /// Camera orientation
    pub rotation: Quat,
}

impl CameraRig {
    /// View direction (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Camera-space right axis in world space.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Camera-space up axis in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Latest surface-detection result from the host's AR tracking.
///
/// `None` means still searching; placement then uses the camera-relative
/// fallback. The host overwrites this every frame, the simulation only
/// reads it.
#[derive(Resource, Default)]
pub struct SurfaceTracking {
    /// Most recent detected surface, if any
    pub surface: Option<SurfacePose>,
}

/// Global pause flag.
///
/// While set, no simulation tick runs: balls neither move nor age, and no
/// scoring happens. Toggling takes effect at the next tick boundary.
#[derive(Resource, Reflect, Clone, Copy, Default)]
#[reflect(Resource)]
pub struct PauseState {
    /// Simulation frozen while true
    pub paused: bool,
}

/// The in-flight gesture record.
///
/// Populated on press, refreshed on move, consumed on release. Empty
/// whenever no finger is down.
#[derive(Resource, Default)]
pub struct ActiveGesture {
    /// Sample taken at the press
    pub start: Option<GestureSample>,
    /// Most recent sample
    pub latest: Option<GestureSample>,
}

impl ActiveGesture {
    /// Drop the record, e.g. after a release or on reset.
    pub fn clear(&mut self) {
        self.start = None;
        self.latest = None;
    }
}

/// Shared handles for the score-flash effect.
///
/// Filled once at startup by the VFX plugin.
#[derive(Resource, Default)]
pub struct HoopAssets {
    /// Unit sphere used for the flash billboard
    pub flash_mesh: Handle<Mesh>,
    /// Emissive flash material
    pub flash_material: Handle<StandardMaterial>,
}
