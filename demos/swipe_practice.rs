//! Interactive swipe practice demo.
//!
//! Plays the host role: feeds the camera pose and mouse drags into the
//! simulation, dresses spawned balls with meshes, and shows the hoop where
//! the anchor lands. Space places the hoop, drag-and-release throws, R
//! resets, P pauses, Up/Down nudge the rim height.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_hoop_shot::prelude::*;
use std::f32::consts::FRAC_PI_2;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(HoopShotPluginGroup)
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                feed_camera_rig,
                forward_mouse,
                keyboard_actions,
                dress_new_balls,
                sync_hoop_visual,
                update_ui,
            ),
        )
        .run();
}

#[derive(Resource)]
struct DemoAssets {
    ball_mesh: Handle<Mesh>,
    ball_material: Handle<StandardMaterial>,
    rim_mesh: Handle<Mesh>,
    rim_material: Handle<StandardMaterial>,
}

#[derive(Component)]
struct HoopVisual;

#[derive(Component)]
struct UiText;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera standing roughly at head height
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.5, 0.0).looking_at(Vec3::new(0.0, 1.5, -2.0), Vec3::Y),
    ));

    // Light
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.6, 0.4, 0.0)),
    ));

    // Floor stand-in for the detected surface
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(10.0, 10.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.4, 0.45),
            ..default()
        })),
    ));

    commands.insert_resource(DemoAssets {
        ball_mesh: meshes.add(Sphere::new(0.08)),
        ball_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.85, 0.45, 0.15),
            ..default()
        }),
        rim_mesh: meshes.add(Torus::new(0.17, 0.21)),
        rim_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.25, 0.15),
            ..default()
        }),
    });

    // UI instructions
    commands.spawn((
        Text::new("SPACE place hoop | drag to throw | R reset | P pause | Up/Down nudge\nScore: 0 / 0"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        UiText,
    ));
}

/// Copy the render camera's pose into the simulation's camera rig.
fn feed_camera_rig(
    mut rig: ResMut<CameraRig>,
    camera: Query<&Transform, With<Camera3d>>,
) {
    let Ok(transform) = camera.single() else {
        return;
    };
    rig.translation = transform.translation;
    rig.rotation = transform.rotation;
}

/// Translate mouse presses and drags into pointer messages.
fn forward_mouse(
    time: Res<Time>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut pointer: MessageWriter<PointerInput>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(position) = window.cursor_position() else {
        return;
    };
    let now = time.elapsed_secs_f64();

    if buttons.just_pressed(MouseButton::Left) {
        pointer.write(PointerInput::new(PointerPhase::Began, position, now));
    } else if buttons.just_released(MouseButton::Left) {
        pointer.write(PointerInput::new(PointerPhase::Ended, position, now));
    } else if buttons.pressed(MouseButton::Left) {
        pointer.write(PointerInput::new(PointerPhase::Moved, position, now));
    }
}

fn keyboard_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pause: ResMut<PauseState>,
    mut placements: MessageWriter<PlaceHoopEvent>,
    mut resets: MessageWriter<ResetGameEvent>,
    mut nudges: MessageWriter<NudgeHoopEvent>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        placements.write(PlaceHoopEvent);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        resets.write(ResetGameEvent);
    }
    if keyboard.just_pressed(KeyCode::KeyP) {
        pause.paused = !pause.paused;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        nudges.write(NudgeHoopEvent { delta: 0.05 });
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        nudges.write(NudgeHoopEvent { delta: -0.05 });
    }
}

/// Give freshly thrown balls a mesh; the simulation spawns them bare.
fn dress_new_balls(
    mut commands: Commands,
    assets: Res<DemoAssets>,
    new_balls: Query<Entity, (Added<Ball>, Without<Mesh3d>)>,
) {
    for entity in new_balls.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.ball_mesh.clone()),
            MeshMaterial3d(assets.ball_material.clone()),
        ));
    }
}

/// Keep a rim mesh where the anchor says the hoop is.
fn sync_hoop_visual(
    mut commands: Commands,
    assets: Res<DemoAssets>,
    anchor: Res<HoopAnchor>,
    mut visuals: Query<(Entity, &mut Transform), With<HoopVisual>>,
) {
    // Torus lies flat (normal +Y); stand it up so its plane faces the player
    let rim_transform = Transform::from_translation(anchor.translation)
        .with_rotation(anchor.rotation * Quat::from_rotation_x(FRAC_PI_2));

    match visuals.single_mut() {
        Ok((entity, mut transform)) => {
            if anchor.placed {
                *transform = rim_transform;
            } else {
                commands.entity(entity).despawn();
            }
        }
        Err(_) => {
            if anchor.placed {
                commands.spawn((
                    Mesh3d(assets.rim_mesh.clone()),
                    MeshMaterial3d(assets.rim_material.clone()),
                    rim_transform,
                    HoopVisual,
                ));
            }
        }
    }
}

fn update_ui(score: Res<ScoreBoard>, mut ui_text: Query<&mut Text, With<UiText>>) {
    if score.is_changed() {
        for mut text in ui_text.iter_mut() {
            text.0 = format!(
                "SPACE place hoop | drag to throw | R reset | P pause | Up/Down nudge\nScore: {} / {}",
                score.makes, score.attempts
            );
        }
    }
}
