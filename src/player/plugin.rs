//! Player plugin wiring Ralph's controller systems.
use bevy::prelude::*;

use crate::player::{
    components::{FootstepCadence, MobileDirection},
    events::{DustPuffEvent, TrickPerformedEvent},
    systems::{
        advance_trick_state, blend_pose, emit_footstep_dust, handle_bark_input,
        handle_trick_input, move_ralph, spawn_ralph, track_call_key,
    },
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MobileDirection>()
            .init_resource::<FootstepCadence>()
            .add_event::<TrickPerformedEvent>()
            .add_event::<DustPuffEvent>()
            .add_systems(Startup, spawn_ralph)
            .add_systems(
                Update,
                (
                    move_ralph,
                    handle_trick_input.after(move_ralph),
                    advance_trick_state.after(handle_trick_input),
                    blend_pose.after(advance_trick_state),
                    track_call_key.after(move_ralph),
                    handle_bark_input,
                    emit_footstep_dust.after(move_ralph),
                ),
            );
    }
}
