//! Benchmark for ball simulation performance.

use bevy::prelude::*;
use bevy_hoop_shot::components::Ball;
use bevy_hoop_shot::resources::CourtEnvironment;
use bevy_hoop_shot::systems::kinematics::integrate_ball;
use bevy_hoop_shot::types::RingPlane;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_euler_integration(c: &mut Criterion) {
    let env = CourtEnvironment::default();

    let mut group = c.benchmark_group("Semi-Implicit Euler Integration");

    for ball_count in [100, 1000, 10000].iter() {
        let balls: Vec<(Transform, Ball)> = (0..*ball_count)
            .map(|i| {
                let origin = Vec3::new(0.0, 1.4, 0.0);
                let velocity = Vec3::new((i % 7) as f32 * 0.1 - 0.3, 3.5, -4.5);
                (
                    Transform::from_translation(origin),
                    Ball::new(origin, velocity),
                )
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(ball_count),
            ball_count,
            |b, &_count| {
                b.iter(|| {
                    let dt = 1.0 / 60.0;
                    for (transform, ball) in &balls {
                        let mut transform = *transform;
                        let mut ball = ball.clone();
                        ball.previous_position = transform.translation;
                        integrate_ball(&mut transform, &mut ball, env.gravity, dt);
                    }
                });
            },
        );
    }

    group.finish();
}

fn benchmark_crossing_test(c: &mut Criterion) {
    let plane = RingPlane {
        center: Vec3::new(0.0, 1.6, -2.0),
        normal: Vec3::Z,
    };

    let segments: Vec<(Vec3, Vec3)> = (0..1000)
        .map(|i| {
            let x = i as f32 * 0.001 - 0.5;
            (Vec3::new(x, 1.7, -1.9), Vec3::new(x, 1.55, -2.1))
        })
        .collect();

    c.bench_function("Rim Crossing Test", |b| {
        b.iter(|| {
            let mut makes = 0u32;
            for &(prev, cur) in &segments {
                if let Some(hit) = plane.front_to_back_crossing(prev, cur) {
                    if plane.radial_distance(hit) <= 0.15 {
                        makes += 1;
                    }
                }
            }
            makes
        });
    });
}

criterion_group!(benches, benchmark_euler_integration, benchmark_crossing_test);
criterion_main!(benches);
