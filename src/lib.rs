//! # Bevy Hoop Shot
//!
//! AR basketball mini-game simulation plugin for Bevy 0.18.
//!
//! The crate owns the playable core of a swipe-to-shoot hoops game: it
//! anchors a hoop against a detected real-world surface (or a camera-relative
//! fallback), maps pointer swipes to throws, integrates ball flight under
//! gravity, and detects made baskets with a rim-plane crossing test. The AR
//! session, camera tracking, surface hit-testing, raw input capture, and all
//! rendering stay with the host application; the boundary is a handful of
//! resources the host updates each frame and buffered messages in both
//! directions.
//!
//! ## Features
//! - Surface-anchored hoop placement with a camera-forward fallback
//! - Swipe-to-velocity throw mapping with tap rejection and a speed cap
//! - Semi-implicit Euler ball flight, deterministic under FixedUpdate
//! - Front-to-back rim-plane scoring with a once-per-ball make latch
//! - Pause, reset, session teardown, and manual rim-height nudging
//! - Runs headless for tests and simulation tooling
//!
//! ## Quick Start
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_hoop_shot::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(HoopShotPluginGroup)
//!         .run();
//! }
//! ```

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
pub mod types;


pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::*;
    pub use crate::resources::*;
    pub use crate::types::*;
    pub use crate::HoopShotPluginGroup;
    pub use crate::{HoopCorePlugin, HoopDebugPlugin, HoopVfxPlugin};
}

use bevy::prelude::*;

/// Main plugin group that includes all hoop-shot subsystems.
///
/// This plugin group bundles together the full mini-game:
/// - Placement, gesture mapping, kinematics, scoring, and lifecycle
/// - Visual feedback for made baskets
/// - Debug gizmo overlay
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_hoop_shot::prelude::*;
///
/// fn main() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(HoopShotPluginGroup)
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct HoopShotPluginGroup;

impl PluginGroup for HoopShotPluginGroup {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(HoopCorePlugin)
            .add(HoopVfxPlugin)
            .add(HoopDebugPlugin)
    }
}

/// Core simulation plugin (placement, gestures, physics, scoring).
///
/// Registers the message boundary toward the host, initializes all
/// simulation resources, and schedules one chained FixedUpdate pass:
///
/// 1. `handle_reset` - reset / session-end teardown
/// 2. `place_hoop` + `nudge_hoop_height` - anchor management
/// 3. `track_pointer` + `spawn_thrown_balls` - swipe mapping and spawning
/// 4. `update_ball_kinematics` - gravity integration
/// 5. `detect_scores` - rim-plane crossing test
/// 6. `cull_expired_balls` - lifetime culling
///
/// The chain keeps all mutation of the ball set, scoreboard, and anchor in
/// one single-writer pass per tick; hosts porting the simulation onto other
/// schedules must preserve that ordering.
pub struct HoopCorePlugin;

impl Plugin for HoopCorePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<components::Ball>()
            .register_type::<resources::CourtEnvironment>()
            .register_type::<resources::HoopConfig>()
            .register_type::<resources::ScoreBoard>()
            .register_type::<resources::HoopAnchor>()
            .register_type::<resources::CameraRig>()
            .register_type::<resources::PauseState>()
            .init_resource::<resources::CourtEnvironment>()
            .init_resource::<resources::HoopConfig>()
            .init_resource::<resources::ScoreBoard>()
            .init_resource::<resources::HoopAnchor>()
            .init_resource::<resources::CameraRig>()
            .init_resource::<resources::SurfaceTracking>()
            .init_resource::<resources::PauseState>()
            .init_resource::<resources::ActiveGesture>()
            .add_message::<events::PointerInput>()
            .add_message::<events::PlaceHoopEvent>()
            .add_message::<events::ThrowEvent>()
            .add_message::<events::ScoreEvent>()
            .add_message::<events::NudgeHoopEvent>()
            .add_message::<events::ResetGameEvent>()
            .add_message::<events::SessionEndedEvent>()
            .add_systems(
                FixedUpdate,
                (
                    systems::lifecycle::handle_reset,
                    systems::placement::place_hoop,
                    systems::placement::nudge_hoop_height,
                    systems::gesture::track_pointer,
                    systems::gesture::spawn_thrown_balls,
                    systems::kinematics::update_ball_kinematics,
                    systems::scoring::detect_scores,
                    systems::lifecycle::cull_expired_balls,
                )
                    .chain(),
            );
    }
}

/// VFX plugin (score flash).
///
/// Prepares the shared flash assets at startup and runs the flash systems in
/// `Update`. Headless hosts can simply leave this plugin out; scoring works
/// without it.
pub struct HoopVfxPlugin;

impl Plugin for HoopVfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<resources::HoopAssets>()
            .add_systems(Startup, setup_hoop_assets)
            .add_systems(
                Update,
                (systems::vfx::spawn_score_flash, systems::vfx::update_score_flash),
            );
    }
}

/// Setup shared assets for the score flash.
fn setup_hoop_assets(
    mut assets: ResMut<resources::HoopAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    assets.flash_mesh = meshes.add(Sphere::new(1.0));

    assets.flash_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.9, 0.5),
        emissive: LinearRgba::rgb(5.0, 4.0, 1.0),
        unlit: true,
        ..default()
    });
}

/// Debug plugin for court visualization.
pub struct HoopDebugPlugin;

impl Plugin for HoopDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::debug::draw_court_debug);
    }
}
