//! Particle spawn and animation systems.
use bevy::{
    math::primitives::{Circle, Rectangle},
    prelude::*,
};
use rand::Rng;

use crate::{
    core::plugin::SimulationClock,
    effects::components::{
        ConfettiParticle, DustPuff, EffectsRng, CONFETTI_GRAVITY, CONFETTI_LIFETIME_SECS,
        CONFETTI_PALETTE, DUST_LIFETIME_SECS,
    },
    interaction::events::BurstEvent,
    player::events::DustPuffEvent,
};

pub fn spawn_confetti_bursts(
    mut bursts: MessageReader<BurstEvent>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<EffectsRng>,
) {
    for burst in bursts.read() {
        let quad = meshes.add(Mesh::from(Rectangle::new(0.15, 0.08)));
        for i in 0..burst.count {
            let color = CONFETTI_PALETTE[i as usize % CONFETTI_PALETTE.len()];
            let velocity = Vec3::new(
                (rng.0.gen::<f32>() - 0.5) * 2.0,
                rng.0.gen::<f32>() * 2.0 + 1.0,
                (rng.0.gen::<f32>() - 0.5) * 2.0,
            );
            let tumble = Vec3::new(
                rng.0.gen::<f32>() * 2.0,
                rng.0.gen::<f32>() * 2.0,
                rng.0.gen::<f32>() * 2.0,
            );
            commands.spawn((
                Mesh3d(quad.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: color,
                    unlit: true,
                    alpha_mode: AlphaMode::Blend,
                    cull_mode: None,
                    ..default()
                })),
                Transform::from_translation(burst.position),
                ConfettiParticle {
                    velocity,
                    tumble,
                    age: 0.0,
                },
            ));
        }
        debug!("Confetti burst of {} at {:?}", burst.count, burst.position);
    }
}

pub fn animate_confetti(
    sim_clock: Res<SimulationClock>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(
        Entity,
        &mut ConfettiParticle,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    for (entity, mut particle, mut transform, material) in query.iter_mut() {
        particle.age += delta;
        if particle.age >= CONFETTI_LIFETIME_SECS {
            commands.entity(entity).despawn();
            continue;
        }

        particle.velocity.y -= CONFETTI_GRAVITY * delta;
        let step = particle.velocity * delta;
        transform.translation += step;
        let spin = particle.tumble * delta;
        transform.rotation *=
            Quat::from_euler(EulerRot::XYZ, spin.x, spin.y, spin.z);

        // Opacity runs out slightly before the particle despawns.
        if let Some(material) = materials.get_mut(&material.0) {
            let alpha = (1.0 - particle.age).max(0.0);
            material.base_color = material.base_color.with_alpha(alpha);
        }
    }
}

pub fn spawn_dust_puffs(
    mut puffs: MessageReader<DustPuffEvent>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for puff in puffs.read() {
        commands.spawn((
            Mesh3d(meshes.add(Mesh::from(Circle::new(0.12)))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(0.47, 0.47, 0.47, 0.4),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                ..default()
            })),
            Transform::from_translation(puff.position)
                .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            DustPuff::default(),
        ));
    }
}

pub fn animate_dust_puffs(
    sim_clock: Res<SimulationClock>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(
        Entity,
        &mut DustPuff,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    for (entity, mut puff, mut transform, material) in query.iter_mut() {
        puff.age += delta;
        if puff.age >= DUST_LIFETIME_SECS {
            commands.entity(entity).despawn();
            continue;
        }

        let t = puff.age / DUST_LIFETIME_SECS;
        transform.scale = Vec3::splat(1.0 + t * 1.5);
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = material.base_color.with_alpha(0.4 * (1.0 - t));
        }
    }
}
