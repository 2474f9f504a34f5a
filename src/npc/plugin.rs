//! NPC plugin wiring the roster, mood decay, and call-seek systems.
use bevy::prelude::*;

use crate::{
    npc::{
        components::ActiveCall,
        systems::{decay_mood, init_mood_decay_ticker, seek_call_target, spawn_street_roster},
    },
    world::systems::spawn_world_environment,
};

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveCall>()
            .add_systems(
                Startup,
                (
                    spawn_street_roster.after(spawn_world_environment),
                    init_mood_decay_ticker,
                ),
            )
            .add_systems(Update, (decay_mood, seek_call_target));
    }
}
