use bevy::prelude::*;

mod audio;
mod challenge;
mod core;
mod effects;
mod interaction;
mod npc;
mod player;
mod ui;
mod world;

use crate::{
    audio::AudioPlugin, challenge::ChallengePlugin, core::CorePlugin, effects::EffectsPlugin,
    interaction::InteractionPlugin, npc::NpcPlugin, player::PlayerPlugin, ui::UiPlugin,
    world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin::default(),
            WorldPlugin,
            NpcPlugin,
            PlayerPlugin,
            InteractionPlugin, // After PlayerPlugin to receive TrickPerformedEvent
            ChallengePlugin,
            EffectsPlugin,
            AudioPlugin,
            UiPlugin,
        ))
        .run();
}
