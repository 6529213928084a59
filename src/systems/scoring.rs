//! Score detection - front-to-back rim-plane crossings within the scoring radius.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::components::Ball;
use crate::events::ScoreEvent;
use crate::resources::{HoopAnchor, HoopConfig, PauseState, ScoreBoard};

/// Detect made baskets.
///
/// Runs right after integration, before the cull pass, so every motion
/// segment is inspected exactly once. For each unscored ball the segment
/// from `previous_position` to the current position is tested against the
/// frame's rim plane: a make is a front-to-back crossing whose interpolated
/// hit point lands within the scoring radius (rim radius minus a fraction of
/// the ball radius, boundary inclusive). The `scored` latch guarantees the
/// makes counter moves at most once per ball, whatever the ball does
/// afterwards.
///
/// # Arguments
/// * `anchor` - Hoop anchor providing the rim plane
/// * `config` - Simulation tunables
/// * `pause` - Global pause flag
/// * `score` - Scoreboard receiving the make
/// * `score_events` - Writer notifying VFX and the host
/// * `balls` - Balls to test
pub fn detect_scores(
    anchor: Res<HoopAnchor>,
    config: Res<HoopConfig>,
    pause: Res<PauseState>,
    mut score: ResMut<ScoreBoard>,
    mut score_events: MessageWriter<ScoreEvent>,
    mut balls: Query<(Entity, &Transform, &mut Ball)>,
) {
    if pause.paused || !anchor.placed {
        return;
    }

    let plane = anchor.ring_plane();

    for (entity, transform, mut ball) in balls.iter_mut() {
        if ball.scored {
            continue;
        }

        let Some(crossing) =
            plane.front_to_back_crossing(ball.previous_position, transform.translation)
        else {
            continue;
        };

        let radial = plane.radial_distance(crossing);
        let accepted = config.ring_inner_radius - config.score_margin_fraction * ball.radius;

        if radial <= accepted {
            ball.scored = true;
            score.record_make();
            score_events.write(ScoreEvent {
                ball: entity,
                crossing_point: crossing,
                radial_distance: radial,
            });
            debug!("made basket, {radial:.3} m off center");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RingPlane;

    fn rim() -> RingPlane {
        RingPlane {
            center: Vec3::new(0.0, 1.6, -2.0),
            normal: Vec3::Z,
        }
    }

    #[test]
    fn test_center_crossing_interpolates_hit_point() {
        let plane = rim();
        let prev = Vec3::new(0.0, 1.6, -1.9);
        let cur = Vec3::new(0.0, 1.6, -2.1);

        let crossing = plane.front_to_back_crossing(prev, cur).unwrap();

        assert!((crossing - Vec3::new(0.0, 1.6, -2.0)).length() < 1e-5);
        assert!(plane.radial_distance(crossing) < 1e-5);
    }

    #[test]
    fn test_back_to_front_does_not_count() {
        let plane = rim();
        let prev = Vec3::new(0.0, 1.6, -2.1);
        let cur = Vec3::new(0.0, 1.6, -1.9);

        assert!(plane.front_to_back_crossing(prev, cur).is_none());
    }

    #[test]
    fn test_segment_on_front_side_does_not_count() {
        let plane = rim();
        let prev = Vec3::new(0.0, 1.6, -1.5);
        let cur = Vec3::new(0.0, 1.6, -1.9);

        assert!(plane.front_to_back_crossing(prev, cur).is_none());
    }

    #[test]
    fn test_landing_exactly_on_plane_counts() {
        let plane = rim();
        let prev = Vec3::new(0.0, 1.6, -1.9);
        let cur = Vec3::new(0.0, 1.6, -2.0);

        assert!(plane.front_to_back_crossing(prev, cur).is_some());
    }

    #[test]
    fn test_scoring_radius_boundary_is_inclusive() {
        // Exactly representable numbers keep the boundary comparison exact:
        // 0.25 - 0.5 * 0.125 = 0.1875.
        let inner_radius = 0.25_f32;
        let ball_radius = 0.125_f32;
        let accepted = inner_radius - 0.5 * ball_radius;

        let plane = rim();
        let on_boundary = plane
            .front_to_back_crossing(
                Vec3::new(0.1875, 1.6, -1.9),
                Vec3::new(0.1875, 1.6, -2.1),
            )
            .unwrap();
        let beyond = plane
            .front_to_back_crossing(
                Vec3::new(0.189, 1.6, -1.9),
                Vec3::new(0.189, 1.6, -2.1),
            )
            .unwrap();

        assert!(plane.radial_distance(on_boundary) <= accepted);
        assert!(plane.radial_distance(beyond) > accepted);
    }

    #[test]
    fn test_radial_distance_ignores_normal_component() {
        let plane = rim();
        // A point off the plane along the normal projects straight down onto it
        let point = Vec3::new(0.1, 1.6, -1.7);

        assert!((plane.radial_distance(point) - 0.1).abs() < 1e-5);
    }
}
