//! VFX system - the transient score flash.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::components::ScoreFlash;
use crate::events::ScoreEvent;
use crate::resources::{HoopAssets, HoopConfig};

/// Spawn a flash at the rim crossing for every made basket.
///
/// The flash is a small emissive sphere the host's camera will see through
/// the rim; it lives for `flash_secs` (about 120 ms) and swells slightly
/// while it lasts.
pub fn spawn_score_flash(
    mut commands: Commands,
    mut score_events: MessageReader<ScoreEvent>,
    assets: Res<HoopAssets>,
    config: Res<HoopConfig>,
) {
    for event in score_events.read() {
        commands.spawn((
            Mesh3d(assets.flash_mesh.clone()),
            MeshMaterial3d(assets.flash_material.clone()),
            Transform::from_translation(event.crossing_point)
                .with_scale(Vec3::splat(config.ring_inner_radius)),
            ScoreFlash {
                remaining: config.flash_secs,
            },
        ));
    }
}

/// Swell and expire active flashes.
pub fn update_score_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut flashes: Query<(Entity, &mut ScoreFlash, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (entity, mut flash, mut transform) in flashes.iter_mut() {
        flash.remaining -= dt;

        if flash.remaining <= 0.0 {
            commands.entity(entity).despawn();
        } else {
            transform.scale *= 1.0 + 2.0 * dt;
        }
    }
}
