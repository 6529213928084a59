//! Core components for the hoop-shot simulation.

use bevy::prelude::*;

/// A thrown ball in flight.
///
/// Each ball lives on its own entity next to a `Transform` the host renders.
/// The component carries everything the simulation needs between ticks: the
/// current velocity, the accumulated age used for culling, the one-shot
/// scored latch, and the previous frame's position for the rim-crossing test.
///
/// # Fields
/// * `velocity` - Current velocity vector in meters per second
/// * `age` - Seconds since the ball was thrown
/// * `scored` - Set once when the ball passes through the rim; never cleared
/// * `previous_position` - Position at the start of the current tick
/// * `radius` - Ball radius in meters, part of the scoring margin
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_hoop_shot::components::Ball;
///
/// let ball = Ball::new(Vec3::new(0.0, 1.4, 0.0), Vec3::new(0.0, 3.0, -5.0))
///     .with_radius(0.08);
/// ```
#[derive(Component, Reflect, Clone)]
#[reflect(Component)]
pub struct Ball {
    /// Current velocity (m/s)
    pub velocity: Vec3,
    /// Seconds since spawn
    pub age: f32,
    /// One-shot make latch; transitions false to true at most once
    pub scored: bool,
    /// Position at the start of the current tick, for crossing detection
    pub previous_position: Vec3,
    /// Ball radius (m)
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            age: 0.0,
            scored: false,
            previous_position: Vec3::ZERO,
            radius: 0.08,
        }
    }
}

impl Ball {
    /// Creates a ball at its spawn point with an initial velocity.
    ///
    /// `previous_position` starts at the spawn point itself, so the first
    /// tick's crossing test sees a zero-length segment and can never report
    /// a make before the ball has moved.
    ///
    /// # Arguments
    /// * `origin` - Spawn position in world space
    /// * `velocity` - Initial velocity in meters per second
    ///
    /// # Returns
    /// A new Ball with zero age and the scored latch clear
    pub fn new(origin: Vec3, velocity: Vec3) -> Self {
        Self {
            velocity,
            previous_position: origin,
            ..Default::default()
        }
    }

    /// Builder pattern: set the ball radius.
    ///
    /// # Arguments
    /// * `radius` - Radius in meters
    ///
    /// # Returns
    /// The modified Ball for method chaining
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Transient visual feedback for a made basket.
///
/// Spawned at the rim-crossing point when a ball scores and despawned by the
/// VFX system once `remaining` runs out (about 120 ms by default). The host
/// may also listen for [`ScoreEvent`](crate::events::ScoreEvent) directly
/// and ignore these entities.
///
/// # Fields
/// * `remaining` - Seconds of flash left
#[derive(Component, Default)]
pub struct ScoreFlash {
    /// Seconds of flash left
    pub remaining: f32,
}
