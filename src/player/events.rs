//! Events emitted by the player character.
use bevy::prelude::{Message, Vec3};

use super::components::Trick;

/// Fired once per trick key-press, at the moment the trick begins.
#[derive(Message, Debug, Clone, Copy)]
pub struct TrickPerformedEvent {
    pub trick: Trick,
    /// Ralph's position when the key was pressed; the resolver measures NPC
    /// distance from here, not from wherever Ralph ends up.
    pub position: Vec3,
}

/// Fired on the footstep cadence while Ralph is actually covering ground.
#[derive(Message, Debug, Clone, Copy)]
pub struct DustPuffEvent {
    pub position: Vec3,
}
