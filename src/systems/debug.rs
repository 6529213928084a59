use bevy::prelude::*;

use crate::components::Ball;
use crate::resources::{HoopAnchor, HoopConfig};

/// Draw debug gizmos for the court.
///
/// Draws the rim circle with its plane normal, plus ball markers and
/// velocity vectors.
pub fn draw_court_debug(
    mut gizmos: Gizmos,
    config: Res<HoopConfig>,
    anchor: Res<HoopAnchor>,
    balls: Query<(&Transform, &Ball)>,
) {
    if !config.debug_draw {
        return;
    }

    if anchor.placed {
        let plane = anchor.ring_plane();
        let facing = Quat::from_rotation_arc(Vec3::Z, plane.normal);

        gizmos.circle(
            Isometry3d::new(plane.center, facing),
            config.ring_inner_radius,
            Color::srgb(1.0, 0.5, 0.0),
        );
        gizmos.line(
            plane.center,
            plane.center + plane.normal * 0.3,
            Color::srgb(0.2, 0.8, 1.0),
        );
    }

    for (transform, ball) in balls.iter() {
        gizmos.sphere(transform.translation, ball.radius, Color::srgb(1.0, 0.2, 0.2));

        // Scale down for visibility
        let end = transform.translation + ball.velocity * 0.1;
        gizmos.line(transform.translation, end, Color::srgb(0.0, 1.0, 0.0));
    }
}
