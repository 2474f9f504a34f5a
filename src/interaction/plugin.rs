//! Interaction plugin wiring the approval resolver and streak state.
use bevy::prelude::*;

use crate::{
    interaction::{
        config::GameplayConfig,
        events::{BurstEvent, DollyEvent, ToastEvent},
        streak::StreakState,
        systems::resolve_trick,
    },
    player::systems::handle_trick_input,
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GameplayConfig::load_or_default())
            .init_resource::<StreakState>()
            .add_event::<BurstEvent>()
            .add_event::<ToastEvent>()
            .add_event::<DollyEvent>()
            .add_systems(Update, resolve_trick.after(handle_trick_input));
    }
}
