//! Lifecycle systems - ball culling, explicit reset, and session teardown.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::components::{Ball, ScoreFlash};
use crate::events::{ResetGameEvent, SessionEndedEvent};
use crate::resources::{ActiveGesture, HoopAnchor, HoopConfig, PauseState, ScoreBoard};

/// Despawn balls that outlived their flight time.
///
/// Runs as its own pass after scoring; despawns go through `Commands`, so
/// the ball set is never mutated while the earlier passes iterate it.
/// Culling has no scoring consequence either way: a scored ball keeps its
/// latch until it expires, an unscored one simply disappears.
pub fn cull_expired_balls(
    mut commands: Commands,
    config: Res<HoopConfig>,
    pause: Res<PauseState>,
    balls: Query<(Entity, &Ball)>,
) {
    if pause.paused {
        return;
    }

    for (entity, ball) in balls.iter() {
        if ball.age > config.ball_lifetime {
            commands.entity(entity).despawn();
        }
    }
}

/// Handle the explicit reset action and the host's session-end notification.
///
/// Both take the same path: every ball (and any flash still fading) is
/// despawned, the counters return to zero, the placement flag clears so the
/// host hides the hoop, and any half-finished gesture is dropped. Throws are
/// rejected again until a new placement happens.
pub fn handle_reset(
    mut commands: Commands,
    mut resets: MessageReader<ResetGameEvent>,
    mut session_ends: MessageReader<SessionEndedEvent>,
    mut score: ResMut<ScoreBoard>,
    mut anchor: ResMut<HoopAnchor>,
    mut gesture: ResMut<ActiveGesture>,
    balls: Query<Entity, With<Ball>>,
    flashes: Query<Entity, With<ScoreFlash>>,
) {
    let explicit = resets.read().next().is_some();
    let session_ended = session_ends.read().next().is_some();

    if !explicit && !session_ended {
        return;
    }

    for entity in balls.iter().chain(flashes.iter()) {
        commands.entity(entity).despawn();
    }

    score.reset();
    anchor.placed = false;
    gesture.clear();

    if session_ended {
        info!("session ended, court cleared");
    } else {
        info!("game reset");
    }
}
