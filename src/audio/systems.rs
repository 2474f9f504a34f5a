//! Sound library construction and fire-and-forget playback.
use std::{collections::HashMap, path::Path};

use bevy::{audio::Volume, prelude::*};

use crate::{
    audio::{
        events::{SfxCue, SfxEvent},
        resolver::resolve_manifest,
    },
    core::settings::GameSettings,
};

const ASSETS_ROOT: &str = "assets";

/// Loaded audio handles per cue. Cues without a resolved source are absent
/// and play as silence.
#[derive(Resource, Debug, Default)]
pub struct SfxLibrary {
    handles: HashMap<SfxCue, Handle<AudioSource>>,
}

impl SfxLibrary {
    pub fn handle(&self, cue: SfxCue) -> Option<&Handle<AudioSource>> {
        self.handles.get(&cue)
    }
}

/// Resolves sound sources once at startup and loads them. Runs before the
/// first frame; gameplay never waits on it afterwards.
pub fn build_sfx_library(mut commands: Commands, asset_server: Res<AssetServer>) {
    let manifest = resolve_manifest(Path::new(ASSETS_ROOT));
    let mut library = SfxLibrary::default();

    let mut cues: Vec<SfxCue> = vec![SfxCue::Bark];
    cues.extend(
        crate::npc::roster::street_roster()
            .iter()
            .map(|entry| SfxCue::Approval(entry.species)),
    );
    for cue in cues {
        if let Some(source) = manifest.source(cue) {
            library.handles.insert(cue, asset_server.load(source.to_string()));
        }
    }

    info!("Sound library ready ({} cues resolved)", library.handles.len());
    commands.insert_resource(library);
}

/// Plays queued cues at the persisted volume. A cue with no source is
/// dropped silently; playback failure never reaches game state.
pub fn play_sfx(
    mut events: MessageReader<SfxEvent>,
    library: Res<SfxLibrary>,
    settings: Res<GameSettings>,
    mut commands: Commands,
) {
    for event in events.read() {
        let Some(handle) = library.handle(event.cue) else {
            debug!("No source for {:?}; skipping", event.cue);
            continue;
        };
        commands.spawn((
            AudioPlayer(handle.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(settings.sfx_volume)),
        ));
    }
}
