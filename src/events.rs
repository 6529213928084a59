//! Messages crossing the host/simulation boundary.
//!
//! Note: In Bevy 0.18, buffered events use the `Message` trait instead of `Event`.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Phase of a pointer (touch or mouse) event.
///
/// # Variants
/// * `Began` - Finger down / button press; opens a gesture record
/// * `Moved` - Drag update; refreshes the latest sample
/// * `Ended` - Release; the press/release pair becomes a throw candidate
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Finger down / button press
    Began,
    /// Drag update
    Moved,
    /// Release
    Ended,
}

/// A pointer event forwarded from the host's input layer.
///
/// The simulation does not capture input itself; the host translates its
/// platform touch or mouse stream into these messages. Coordinates are
/// screen-space logical pixels with Y pointing down, timestamps are seconds
/// on any monotonic clock shared across one gesture.
///
/// # Fields
/// * `phase` - Began / Moved / Ended
/// * `position` - Screen position in logical pixels
/// * `time` - Timestamp in seconds
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_hoop_shot::events::{PointerInput, PointerPhase};
///
/// let press = PointerInput::new(PointerPhase::Began, Vec2::new(200.0, 600.0), 0.0);
/// let release = PointerInput::new(PointerPhase::Ended, Vec2::new(210.0, 240.0), 0.25);
/// ```
#[derive(Message, Clone)]
pub struct PointerInput {
    /// Event phase
    pub phase: PointerPhase,
    /// Screen position in logical pixels (Y down)
    pub position: Vec2,
    /// Timestamp in seconds
    pub time: f64,
}

impl PointerInput {
    /// Creates a pointer message from phase, position, and timestamp.
    pub fn new(phase: PointerPhase, position: Vec2, time: f64) -> Self {
        Self {
            phase,
            position,
            time,
        }
    }
}

/// Request to place (or re-confirm) the hoop anchor.
///
/// Consumed by the placement system, which resolves the anchor from the
/// current surface-detection result and camera pose. Placement is idempotent:
/// once the hoop is placed, further requests are no-ops until a reset.
#[derive(Message, Clone, Default)]
pub struct PlaceHoopEvent;

/// A throw entering the simulation.
///
/// Written by the gesture mapper when a swipe qualifies, and available to
/// hosts that want to throw programmatically (replays, tutorials, tests).
/// Each consumed throw spawns one ball and counts one attempt.
///
/// # Fields
/// * `origin` - World-space spawn position
/// * `velocity` - Initial velocity vector in meters per second
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_hoop_shot::events::ThrowEvent;
///
/// let throw = ThrowEvent::new(Vec3::new(0.0, 1.4, 0.0), Vec3::new(0.0, 3.5, -4.5));
/// ```
#[derive(Message, Clone)]
pub struct ThrowEvent {
    /// Spawn position in world space
    pub origin: Vec3,
    /// Initial velocity (m/s)
    pub velocity: Vec3,
}

impl ThrowEvent {
    /// Creates a throw from an origin and initial velocity.
    ///
    /// # Arguments
    /// * `origin` - World-space spawn position
    /// * `velocity` - Initial velocity in meters per second
    pub fn new(origin: Vec3, velocity: Vec3) -> Self {
        Self { origin, velocity }
    }
}

/// Fired when a ball passes through the rim.
///
/// Emitted at most once per ball. Drives the built-in score flash and gives
/// the host a hook for sounds, haptics, or UI.
///
/// # Fields
/// * `ball` - Entity of the scoring ball
/// * `crossing_point` - Interpolated point where the ball crossed the rim plane
/// * `radial_distance` - Distance from the rim center at the crossing, in meters
#[derive(Message, Clone)]
pub struct ScoreEvent {
    /// Scoring ball entity
    pub ball: Entity,
    /// Interpolated rim-plane crossing point
    pub crossing_point: Vec3,
    /// Distance from the rim center at the crossing (m)
    pub radial_distance: f32,
}

/// Manual height adjustment for the placed hoop.
///
/// Ignored while no hoop is placed.
///
/// # Fields
/// * `delta` - Vertical offset to apply, in meters (positive raises the rim)
#[derive(Message, Clone)]
pub struct NudgeHoopEvent {
    /// Vertical offset in meters
    pub delta: f32,
}

/// Explicit reset action.
///
/// Clears all balls, zeroes both counters, and un-places the hoop; throws
/// are rejected again until a new placement happens.
#[derive(Message, Clone, Default)]
pub struct ResetGameEvent;

/// Notification that the host's AR session ended.
///
/// Triggers the same full reset as [`ResetGameEvent`]; the next session
/// starts from a clean slate.
#[derive(Message, Clone, Default)]
pub struct SessionEndedEvent;
