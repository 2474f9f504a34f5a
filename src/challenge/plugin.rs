//! Challenge plugin wiring the initial pick and expiry polling.
use bevy::prelude::*;

use crate::{
    challenge::systems::{assign_first_challenge, poll_challenge_expiry},
    npc::systems::spawn_street_roster,
};

pub struct ChallengePlugin;

impl Plugin for ChallengePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            assign_first_challenge.after(spawn_street_roster),
        )
        .add_systems(Update, poll_challenge_expiry);
    }
}
