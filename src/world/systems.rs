//! Systems for the world: environment spawn, orbit camera, cinematic dolly.
use bevy::{
    ecs::message::MessageReader,
    input::mouse::{MouseMotion, MouseWheel},
    input::ButtonInput,
    math::primitives::Plane3d,
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};

use crate::{
    core::{plugin::SimulationClock, settings::GameSettings},
    interaction::events::DollyEvent,
    world::components::{ease_in_out, CameraDolly, DollyTween, OrbitCamera},
};

const GROUND_SCALE: f32 = 100.0;
/// The roster line the camera keeps in frame.
const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.8, -6.0);
const CAMERA_START_DISTANCE: f32 = 22.0;
const MIN_DISTANCE: f32 = 6.0;
const MAX_DISTANCE: f32 = 28.0;
const PITCH_RANGE: (f32, f32) = (0.2, 1.1);

const DOLLY_IN_DISTANCE: f32 = 9.0;
const DOLLY_IN_SECS: f32 = 0.22;
const DOLLY_OUT_DISTANCE: f32 = 14.0;
const DOLLY_OUT_SECS: f32 = 0.26;

/// Spawns the street scene: ground plane, lights, and the orbit camera.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(120, 118, 110),
            perceptual_roughness: 0.95,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(GROUND_SCALE)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    // No shadow maps; the panorama look keeps lighting flat.
    commands.spawn((
        DirectionalLight {
            illuminance: 20_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::default(),
        OrbitCamera::new(0.59, 0.26, CAMERA_START_DISTANCE, CAMERA_TARGET),
    ));
}

/// Grabs the cursor while the orbit drag is held.
pub fn update_cursor_grab(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    if mouse_buttons.just_pressed(MouseButton::Right) {
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    } else if mouse_buttons.just_released(MouseButton::Right) {
        cursor_options.visible = true;
        cursor_options.grab_mode = CursorGrabMode::None;
    }
}

/// Applies mouse drag to the orbit angles and the wheel to the distance.
pub fn orbit_camera_look(
    mut motion_events: MessageReader<MouseMotion>,
    mut wheel_events: MessageReader<MouseWheel>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut query: Query<&mut OrbitCamera>,
) {
    let mut cumulative_delta = Vec2::ZERO;
    for ev in motion_events.read() {
        cumulative_delta += ev.delta;
    }
    let mut zoom = 0.0;
    for ev in wheel_events.read() {
        zoom += ev.y;
    }

    let Ok(mut camera) = query.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Right) && cumulative_delta != Vec2::ZERO {
        camera.yaw -= cumulative_delta.x * camera.look_sensitivity * time.delta_secs();
        camera.pitch += cumulative_delta.y * camera.look_sensitivity * time.delta_secs();
        camera.pitch = camera.pitch.clamp(PITCH_RANGE.0, PITCH_RANGE.1);
    }

    if zoom != 0.0 {
        camera.distance = (camera.distance - zoom).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Starts the quick push-in on a success, unless reduced motion is on.
pub fn start_camera_dolly(
    mut events: MessageReader<DollyEvent>,
    settings: Res<GameSettings>,
    mut dolly: ResMut<CameraDolly>,
    query: Query<&OrbitCamera>,
) {
    let fired = events.read().count() > 0;
    if !fired || settings.reduced_motion {
        return;
    }
    let Ok(camera) = query.single() else {
        return;
    };
    dolly.tween = Some(DollyTween {
        from: camera.distance,
        to: DOLLY_IN_DISTANCE,
        duration: DOLLY_IN_SECS,
        elapsed: 0.0,
        then_out: true,
    });
}

/// Advances the dolly tween; the push-in chains into the pull-out.
pub fn tween_camera_dolly(
    sim_clock: Res<SimulationClock>,
    mut dolly: ResMut<CameraDolly>,
    mut query: Query<&mut OrbitCamera>,
) {
    let Some(mut tween) = dolly.tween else {
        return;
    };
    let Ok(mut camera) = query.single_mut() else {
        return;
    };

    tween.elapsed += sim_clock.last_scaled_delta().as_secs_f32();
    let t = (tween.elapsed / tween.duration).min(1.0);
    camera.distance = tween.from + (tween.to - tween.from) * ease_in_out(t);

    if t < 1.0 {
        dolly.tween = Some(tween);
    } else if tween.then_out {
        dolly.tween = Some(DollyTween {
            from: camera.distance,
            to: DOLLY_OUT_DISTANCE,
            duration: DOLLY_OUT_SECS,
            elapsed: 0.0,
            then_out: false,
        });
    } else {
        dolly.tween = None;
    }
}

/// Places the camera from its spherical state and aims it at the target.
pub fn sync_orbit_camera(mut query: Query<(&OrbitCamera, &mut Transform)>) {
    for (camera, mut transform) in query.iter_mut() {
        let offset = Vec3::new(
            camera.yaw.sin() * camera.pitch.cos(),
            camera.pitch.sin(),
            camera.yaw.cos() * camera.pitch.cos(),
        ) * camera.distance;
        transform.translation = camera.target + offset;
        transform.look_at(camera.target, Vec3::Y);
    }
}
