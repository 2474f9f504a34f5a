//! Effects plugin wiring particle spawn and animation.
use bevy::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

use crate::effects::{
    components::EffectsRng,
    systems::{animate_confetti, animate_dust_puffs, spawn_confetti_bursts, spawn_dust_puffs},
};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(EffectsRng(SmallRng::from_entropy()))
            .add_systems(
                Update,
                (
                    spawn_confetti_bursts,
                    animate_confetti.after(spawn_confetti_bursts),
                    spawn_dust_puffs,
                    animate_dust_puffs.after(spawn_dust_puffs),
                ),
            );
    }
}
