//! Components for short-lived particle entities.
use bevy::prelude::*;
use rand::rngs::SmallRng;

pub const CONFETTI_LIFETIME_SECS: f32 = 1.2;
pub const CONFETTI_GRAVITY: f32 = 3.0;
pub const DUST_LIFETIME_SECS: f32 = 0.5;

pub const CONFETTI_PALETTE: [Color; 5] = [
    Color::srgb(1.0, 0.42, 0.42),
    Color::srgb(1.0, 0.85, 0.24),
    Color::srgb(0.42, 0.80, 0.94),
    Color::srgb(0.70, 0.55, 1.0),
    Color::srgb(0.30, 0.84, 0.60),
];

/// One confetti quad: launched with a fixed velocity, pulled down by gravity,
/// tumbling and fading until its lifetime runs out.
#[derive(Component, Debug)]
pub struct ConfettiParticle {
    pub velocity: Vec3,
    pub tumble: Vec3,
    pub age: f32,
}

/// A ground disc that grows and fades behind Ralph's footsteps.
#[derive(Component, Debug, Default)]
pub struct DustPuff {
    pub age: f32,
}

/// RNG for particle scatter; visual only, never touches game state.
#[derive(Resource, Debug)]
pub struct EffectsRng(pub SmallRng);
