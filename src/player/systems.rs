//! Systems driving Ralph: movement, tricks, pose blending, call and bark.
use bevy::{
    math::primitives::{Capsule3d, Cuboid, Sphere},
    prelude::*,
};

use crate::{
    audio::events::{SfxCue, SfxEvent},
    core::plugin::SimulationClock,
    interaction::{config::GameplayConfig, systems::nearest_npc},
    npc::components::{ActiveCall, CallOrder, Identity},
    player::{
        components::{FootstepCadence, MobileDirection, Ralph, RalphBody, Trick, TrickState},
        events::{DustPuffEvent, TrickPerformedEvent},
    },
};

const RALPH_START: Vec3 = Vec3::new(0.0, 0.5, 0.0);
/// Called animals stop just behind Ralph's left shoulder.
const CALL_OFFSET: Vec3 = Vec3::new(-1.2, 0.0, -0.6);
/// Footstep dust cadence in puffs per second.
const DUST_RATE: f32 = 3.0;

/// Spawns Ralph: a root entity owning position and heading, with a body group
/// child that pose blending tilts and lowers.
pub fn spawn_ralph(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let coat = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(139, 90, 43),
        perceptual_roughness: 0.7,
        ..default()
    });
    let dark = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(92, 58, 26),
        perceptual_roughness: 0.7,
        ..default()
    });

    let torso = meshes.add(Mesh::from(Capsule3d::new(0.22, 0.9)));
    let head = meshes.add(Mesh::from(Sphere::new(0.2)));
    let snout = meshes.add(Mesh::from(Cuboid::new(0.14, 0.12, 0.25)));
    let ear = meshes.add(Mesh::from(Cuboid::new(0.06, 0.18, 0.1)));
    let leg = meshes.add(Mesh::from(Capsule3d::new(0.05, 0.18)));
    let tail = meshes.add(Mesh::from(Capsule3d::new(0.04, 0.3)));

    commands
        .spawn((
            Transform::from_translation(RALPH_START),
            Visibility::default(),
            Ralph::default(),
            TrickState::default(),
            Name::new("Ralph"),
        ))
        .with_children(|root| {
            root.spawn((
                Transform::default(),
                Visibility::default(),
                RalphBody::default(),
            ))
            .with_children(|body| {
                // Long dachshund torso, lying along the forward (+z) axis.
                body.spawn((
                    Mesh3d(torso),
                    MeshMaterial3d(coat.clone()),
                    Transform::from_xyz(0.0, 0.35, 0.0)
                        .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                ));
                body.spawn((
                    Mesh3d(head),
                    MeshMaterial3d(coat.clone()),
                    Transform::from_xyz(0.0, 0.5, 0.62),
                ));
                body.spawn((
                    Mesh3d(snout),
                    MeshMaterial3d(dark.clone()),
                    Transform::from_xyz(0.0, 0.44, 0.82),
                ));
                for side in [-1.0f32, 1.0] {
                    body.spawn((
                        Mesh3d(ear.clone()),
                        MeshMaterial3d(dark.clone()),
                        Transform::from_xyz(side * 0.14, 0.58, 0.58)
                            .with_rotation(Quat::from_rotation_z(side * -0.3)),
                    ));
                }
                for (x, z) in [(0.14, 0.35), (-0.14, 0.35), (0.14, -0.35), (-0.14, -0.35)] {
                    body.spawn((
                        Mesh3d(leg.clone()),
                        MeshMaterial3d(coat.clone()),
                        Transform::from_xyz(x, 0.09, z),
                    ));
                }
                body.spawn((
                    Mesh3d(tail),
                    MeshMaterial3d(coat.clone()),
                    Transform::from_xyz(0.0, 0.42, -0.6)
                        .with_rotation(Quat::from_rotation_x(-0.9)),
                ));
            });
        });
}

/// One movement integration step: the input vector is normalized before
/// scaling, so diagonals confer no speed advantage, and the result is clamped
/// per-axis to the play square.
pub fn step_position(
    current: Vec3,
    input: Vec2,
    speed: f32,
    half_extent: f32,
    delta_secs: f32,
) -> Vec3 {
    if input == Vec2::ZERO {
        return current;
    }
    let velocity = input.normalize() * speed;
    Vec3::new(
        (current.x + velocity.x * delta_secs).clamp(-half_extent, half_extent),
        current.y,
        (current.z + velocity.y * delta_secs).clamp(-half_extent, half_extent),
    )
}

/// Integrates directional input into Ralph's position and smooths his heading
/// toward the direction of travel.
pub fn move_ralph(
    keyboard: Res<ButtonInput<KeyCode>>,
    mobile: Res<MobileDirection>,
    sim_clock: Res<SimulationClock>,
    config: Res<GameplayConfig>,
    mut query: Query<(&mut Transform, &mut Ralph)>,
) {
    let Ok((mut transform, mut ralph)) = query.single_mut() else {
        return;
    };

    let mut input = Vec2::ZERO;
    if keyboard.pressed(KeyCode::ArrowUp) {
        input.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) {
        input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        input.x += 1.0;
    }
    input += mobile.vector();

    let moving = input != Vec2::ZERO;
    ralph.moving = moving;
    if !moving {
        return;
    }

    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    transform.translation = step_position(
        transform.translation,
        input,
        config.movement.speed,
        config.movement.half_extent,
        delta,
    );

    let desired_yaw = input.x.atan2(input.y);
    ralph.yaw += (desired_yaw - ralph.yaw) * config.movement.yaw_smoothing;
    transform.rotation = Quat::from_rotation_y(ralph.yaw);
}

/// Starts a trick on its key press and announces it exactly once. A press
/// while another trick is running replaces it immediately.
pub fn handle_trick_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&Transform, &mut TrickState), With<Ralph>>,
    mut performed: MessageWriter<TrickPerformedEvent>,
) {
    let Ok((transform, mut state)) = query.single_mut() else {
        return;
    };

    for (key, trick) in [
        (KeyCode::KeyS, Trick::Sit),
        (KeyCode::KeyL, Trick::Lie),
        (KeyCode::KeyR, Trick::Roll),
    ] {
        if keyboard.just_pressed(key) {
            state.begin(trick);
            performed.write(TrickPerformedEvent {
                trick,
                position: transform.translation,
            });
        }
    }
}

/// Counts down the active trick; expiry returns Ralph to neutral.
pub fn advance_trick_state(
    sim_clock: Res<SimulationClock>,
    mut query: Query<&mut TrickState>,
) {
    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    for mut state in query.iter_mut() {
        if state.tick(delta) {
            debug!("Trick finished; back to neutral");
        }
    }
}

/// Damps the body group toward the per-state pose targets. Rolling spins the
/// body continuously about the forward axis; every other state damps the
/// spin back out along with pitch and height.
pub fn blend_pose(
    sim_clock: Res<SimulationClock>,
    config: Res<GameplayConfig>,
    trick_query: Query<&TrickState, With<Ralph>>,
    mut body_query: Query<(&mut RalphBody, &mut Transform)>,
) {
    let Ok(state) = trick_query.single() else {
        return;
    };
    let Ok((mut body, mut transform)) = body_query.single_mut() else {
        return;
    };

    let (target_pitch, target_height) = match state.current() {
        Some(Trick::Sit) => (-0.55, -0.10),
        Some(Trick::Lie) => (-0.05, -0.28),
        Some(Trick::Roll) => (0.0, -0.15),
        None => (0.0, 0.0),
    };

    let k = config.movement.pose_smoothing;
    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    body.pitch += (target_pitch - body.pitch) * k;
    body.height += (target_height - body.height) * k;
    if state.current() == Some(Trick::Roll) {
        body.roll += config.movement.roll_spin_rate * delta;
    } else {
        body.roll += (0.0 - body.roll) * k;
    }

    transform.translation.y = body.height;
    transform.rotation = Quat::from_rotation_x(body.pitch) * Quat::from_rotation_z(body.roll);
}

/// While the call key is held, the nearest animal (recomputed continuously)
/// carries an order to walk to a spot beside Ralph. Release clears the order.
pub fn track_call_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    ralph_query: Query<&Transform, With<Ralph>>,
    npc_query: Query<(&Identity, &Transform), Without<Ralph>>,
    mut call: ResMut<ActiveCall>,
) {
    if !keyboard.pressed(KeyCode::KeyC) {
        if call.order.is_some() {
            call.order = None;
        }
        return;
    }

    let Ok(ralph_transform) = ralph_query.single() else {
        return;
    };
    let origin = ralph_transform.translation;

    call.order = nearest_npc(
        origin,
        npc_query
            .iter()
            .map(|(identity, transform)| {
                (identity.id, identity.roster_index, transform.translation)
            }),
    )
    .map(|(npc, _)| CallOrder {
        npc,
        target: origin + CALL_OFFSET,
    });
}

/// Bark is pure feedback: a fire-and-forget cue with no game-state effect.
pub fn handle_bark_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sfx: MessageWriter<SfxEvent>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        sfx.write(SfxEvent { cue: SfxCue::Bark });
    }
}

/// Emits dust puffs at a fixed cadence while Ralph covers ground.
pub fn emit_footstep_dust(
    sim_clock: Res<SimulationClock>,
    mut cadence: ResMut<FootstepCadence>,
    query: Query<(&Transform, &Ralph)>,
    mut dust: MessageWriter<DustPuffEvent>,
) {
    let Ok((transform, ralph)) = query.single() else {
        return;
    };
    if !ralph.moving {
        return;
    }

    let bucket = (sim_clock.elapsed().as_secs_f32() * DUST_RATE) as u64;
    if cadence.last_bucket != Some(bucket) {
        cadence.last_bucket = Some(bucket);
        dust.write(DustPuffEvent {
            position: Vec3::new(transform.translation.x, 0.02, transform.translation.z),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_stays_inside_the_play_square() {
        let mut position = Vec3::new(24.0, 0.5, -24.0);
        // Push hard into a corner for far longer than reaching it takes.
        for _ in 0..600 {
            position = step_position(position, Vec2::new(1.0, -1.0), 7.0, 25.0, 0.1);
            assert!(position.x.abs() <= 25.0);
            assert!(position.z.abs() <= 25.0);
        }
        assert_eq!(position.x, 25.0);
        assert_eq!(position.z, -25.0);
    }

    #[test]
    fn diagonal_input_confers_no_speed_advantage() {
        let from = Vec3::ZERO;
        let straight = step_position(from, Vec2::new(0.0, 1.0), 7.0, 25.0, 0.1);
        let diagonal = step_position(from, Vec2::new(1.0, 1.0), 7.0, 25.0, 0.1);
        let straight_dist = straight.distance(from);
        let diagonal_dist = diagonal.distance(from);
        assert!((straight_dist - diagonal_dist).abs() < 1e-5);
        assert!((straight_dist - 0.7).abs() < 1e-5);
    }

    #[test]
    fn zero_input_leaves_position_untouched() {
        let position = Vec3::new(3.0, 0.5, -4.0);
        assert_eq!(step_position(position, Vec2::ZERO, 7.0, 25.0, 0.1), position);
    }

    #[test]
    fn height_is_never_integrated() {
        let position = Vec3::new(0.0, 0.5, 0.0);
        let stepped = step_position(position, Vec2::new(1.0, 0.0), 7.0, 25.0, 0.1);
        assert_eq!(stepped.y, 0.5);
    }
}
