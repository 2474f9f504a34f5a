//! Audio plugin wiring cue resolution and playback.
use bevy::prelude::*;

use crate::audio::{
    events::SfxEvent,
    systems::{build_sfx_library, play_sfx},
};

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SfxEvent>()
            .add_systems(Startup, build_sfx_library)
            .add_systems(Update, play_sfx);
    }
}
