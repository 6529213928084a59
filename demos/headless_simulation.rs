use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_hoop_shot::prelude::*;
use std::time::Duration;

fn main() {
    println!("Starting Headless Hoop Shot Simulation...");
    println!("Placing a hoop and throwing one ball per second for 6 seconds...");

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(HoopCorePlugin)
        // Skip VFX and Debug plugins (headless)
        .add_systems(Startup, setup_court)
        .add_systems(Update, (ensure_placement, throw_on_timer, report_score))
        .run();
}

/// Ballistic aim helper: initial velocity reaching `target` from `origin`
/// in `flight_time` seconds under constant gravity. Close enough to the
/// discrete integrator at 60 Hz to drop most throws straight through.
fn aim_throw(origin: Vec3, target: Vec3, flight_time: f32, gravity: Vec3) -> Vec3 {
    (target - origin - 0.5 * gravity * flight_time * flight_time) / flight_time
}

fn setup_court(mut camera: ResMut<CameraRig>) {
    camera.translation = Vec3::new(0.0, 1.5, 0.0);
    camera.rotation = Quat::IDENTITY;
    println!("[SETUP] Camera pinned at head height; placement will use the camera fallback.");
}

/// Keep requesting placement until it sticks; placement itself is idempotent.
fn ensure_placement(
    anchor: Res<HoopAnchor>,
    mut placements: MessageWriter<PlaceHoopEvent>,
    mut announced: Local<bool>,
) {
    if !anchor.placed {
        placements.write(PlaceHoopEvent);
    } else if !*announced {
        *announced = true;
        println!("[SETUP] Hoop placed at {}.", anchor.translation);
    }
}

fn throw_on_timer(
    time: Res<Time>,
    env: Res<CourtEnvironment>,
    anchor: Res<HoopAnchor>,
    camera: Res<CameraRig>,
    mut throws: MessageWriter<ThrowEvent>,
    mut timer: Local<f32>,
    mut thrown: Local<u32>,
) {
    if !anchor.placed {
        return;
    }

    *timer += time.delta_secs();
    if *timer < 1.0 {
        return;
    }
    *timer = 0.0;

    let origin = camera.translation + camera.forward() * 0.3 - camera.up() * 0.12;
    let velocity = aim_throw(origin, anchor.translation, 0.7, env.gravity);
    throws.write(ThrowEvent::new(origin, velocity));

    *thrown += 1;
    println!(
        "[THROW] Ball {} released at {:.1} m/s",
        *thrown,
        velocity.length()
    );
}

fn report_score(time: Res<Time>, score: Res<ScoreBoard>, mut last_makes: Local<u32>) {
    if score.makes != *last_makes {
        *last_makes = score.makes;
        println!(
            "[SCORE] {} / {} after {:.1}s",
            score.makes,
            score.attempts,
            time.elapsed_secs()
        );
    }

    if time.elapsed_secs() > 6.0 {
        println!(
            "[FINISHED] Final score: {} makes / {} attempts.",
            score.makes, score.attempts
        );
        std::process::exit(0);
    }
}
