//! Systems for roster spawning, mood decay, and the "come here" seek.
use bevy::{
    math::primitives::{Capsule3d, Sphere},
    prelude::*,
};

use crate::{
    core::plugin::{IntervalTicker, SimulationClock},
    interaction::config::GameplayConfig,
    npc::{
        components::{ActiveCall, Approval, Identity, MoodDecayTicker, NpcId},
        roster::street_roster,
    },
};

/// Spawns the six street animals from the fixed roster.
pub fn spawn_street_roster(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body_mesh = meshes.add(Mesh::from(Capsule3d::new(0.35, 0.9)));
    let head_mesh = meshes.add(Mesh::from(Sphere::new(0.28)));

    for (roster_index, entry) in street_roster().into_iter().enumerate() {
        let material = materials.add(StandardMaterial {
            base_color: entry.color,
            perceptual_roughness: 0.8,
            ..default()
        });

        commands
            .spawn((
                Transform::from_translation(entry.position),
                Visibility::default(),
                Identity {
                    id: NpcId(entry.id),
                    display_name: entry.name,
                    species: entry.species,
                    roster_index,
                },
                Approval::new(entry.desired),
                Name::new(format!("{} ({})", entry.name, entry.id)),
            ))
            .with_children(|animal| {
                // Body lying along the street, head toward the player.
                animal.spawn((
                    Mesh3d(body_mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_xyz(0.0, 0.6, 0.0)
                        .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                ));
                animal.spawn((
                    Mesh3d(head_mesh.clone()),
                    MeshMaterial3d(material),
                    Transform::from_xyz(0.0, 0.95, 0.55),
                ));
            });
    }

    info!("Street roster spawned with 6 animals");
}

/// Creates the decay ticker once the gameplay config resource exists.
pub fn init_mood_decay_ticker(mut commands: Commands, config: Res<GameplayConfig>) {
    commands.insert_resource(MoodDecayTicker(IntervalTicker::new(
        config.approval.decay_interval_secs,
    )));
}

/// Fixed-rate mood decay: every interval, every animal's mood drops by the
/// configured amount toward 0. Runs independently of interaction events and
/// never touches `happy` or `desired`.
pub fn decay_mood(
    sim_clock: Res<SimulationClock>,
    config: Res<GameplayConfig>,
    mut ticker: ResMut<MoodDecayTicker>,
    mut query: Query<(&Identity, &mut Approval)>,
) {
    ticker
        .0
        .accumulate(sim_clock.last_scaled_delta().as_secs_f32());
    let pending = ticker.0.take_pending();
    if pending == 0 {
        return;
    }

    for (identity, mut approval) in query.iter_mut() {
        let before = approval.mood();
        for _ in 0..pending {
            approval.decay(config.approval.decay_amount);
        }
        if approval.mood() != before {
            debug!(
                "{} mood decays {} -> {}",
                identity.display_name,
                before,
                approval.mood()
            );
        }
    }
}

/// Walks the called animal toward its target at a fixed speed, stopping once
/// within the stop radius. No order means no movement (and no auto-return).
pub fn seek_call_target(
    sim_clock: Res<SimulationClock>,
    config: Res<GameplayConfig>,
    call: Res<ActiveCall>,
    mut query: Query<(&Identity, &mut Transform)>,
) {
    let Some(order) = call.order else {
        return;
    };
    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    if delta <= 0.0 {
        return;
    }

    for (identity, mut transform) in query.iter_mut() {
        if identity.id != order.npc {
            continue;
        }
        let to_target = Vec3::new(
            order.target.x - transform.translation.x,
            0.0,
            order.target.z - transform.translation.z,
        );
        let dist = to_target.length();
        if dist > config.call.stop_radius {
            let step = to_target / dist * config.call.speed * delta;
            transform.translation.x += step.x;
            transform.translation.z += step.z;
        }
    }
}
