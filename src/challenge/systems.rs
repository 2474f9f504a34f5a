//! Challenge lifecycle systems: the initial pick and the expiry poll.
use std::time::Duration;

use bevy::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    challenge::state::{ActiveChallenge, ChallengePollTicker, ChallengeRng},
    core::plugin::{IntervalTicker, SimulationClock},
    interaction::config::GameplayConfig,
    npc::components::{Identity, NpcId},
};

fn roster_ids(query: &Query<&Identity>) -> Vec<NpcId> {
    let mut entries: Vec<(usize, NpcId)> = query
        .iter()
        .map(|identity| (identity.roster_index, identity.id))
        .collect();
    entries.sort_by_key(|(index, _)| *index);
    entries.into_iter().map(|(_, id)| id).collect()
}

/// Picks the first challenge once the roster exists. From here on the scene
/// is never without an active challenge.
pub fn assign_first_challenge(
    mut commands: Commands,
    sim_clock: Res<SimulationClock>,
    config: Res<GameplayConfig>,
    query: Query<&Identity>,
) {
    let mut rng = SmallRng::from_entropy();
    let candidates = roster_ids(&query);
    let Some(challenge) = ActiveChallenge::sample(
        &candidates,
        &mut rng,
        sim_clock.elapsed(),
        Duration::from_secs_f32(config.challenge.duration_secs),
    ) else {
        warn!("No NPCs available for a challenge; roster is empty");
        return;
    };

    info!(
        "First challenge: {} near {}",
        challenge.trick.label(),
        challenge.target
    );
    commands.insert_resource(challenge);
    commands.insert_resource(ChallengeRng(rng));
    commands.insert_resource(ChallengePollTicker(IntervalTicker::new(
        config.challenge.poll_interval_secs,
    )));
}

/// Fixed-rate expiry check: a lapsed challenge regenerates immediately with a
/// freshly sampled target and trick. Regeneration cannot fail.
pub fn poll_challenge_expiry(
    sim_clock: Res<SimulationClock>,
    config: Res<GameplayConfig>,
    mut ticker: ResMut<ChallengePollTicker>,
    mut challenge: ResMut<ActiveChallenge>,
    mut rng: ResMut<ChallengeRng>,
    query: Query<&Identity>,
) {
    ticker
        .0
        .accumulate(sim_clock.last_scaled_delta().as_secs_f32());
    if ticker.0.take_pending() == 0 {
        return;
    }

    let now = sim_clock.elapsed();
    if !challenge.expired(now) {
        return;
    }

    let candidates = roster_ids(&query);
    if let Some(next) = ActiveChallenge::sample(
        &candidates,
        &mut rng.0,
        now,
        Duration::from_secs_f32(config.challenge.duration_secs),
    ) {
        info!(
            "Challenge expired; next: {} near {}",
            next.trick.label(),
            next.target
        );
        *challenge = next;
    }
}
