//! Sound cue events. Producing a cue never guarantees audible output.
use bevy::prelude::Message;

use crate::npc::components::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxCue {
    /// An animal approving of a trick, keyed by species.
    Approval(Species),
    Bark,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct SfxEvent {
    pub cue: SfxCue,
}
