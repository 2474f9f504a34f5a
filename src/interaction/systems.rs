//! The trick/approval resolver: nearest-neighbor targeting and success rules.
use std::time::Duration;

use bevy::prelude::*;

use crate::{
    audio::events::{SfxCue, SfxEvent},
    challenge::state::{ActiveChallenge, ChallengeRng},
    core::plugin::SimulationClock,
    interaction::{
        config::GameplayConfig,
        events::{BurstEvent, DollyEvent, ToastEvent},
        streak::StreakState,
    },
    npc::components::{Approval, Identity, NpcId},
    player::{components::Trick, events::TrickPerformedEvent},
};

const SUCCESS_TOAST: &str = "Great!";
const BURST_HEIGHT: f32 = 0.5;
const TOAST_HEIGHT: f32 = 1.2;

pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

/// Nearest NPC to `origin` by planar distance, ties broken by roster order.
pub fn nearest_npc<I>(origin: Vec3, candidates: I) -> Option<(NpcId, f32)>
where
    I: IntoIterator<Item = (NpcId, usize, Vec3)>,
{
    let mut best: Option<(NpcId, usize, f32)> = None;
    for (id, index, position) in candidates {
        let dist = planar_distance(origin, position);
        let better = match best {
            Some((_, best_index, best_dist)) => {
                dist < best_dist || (dist == best_dist && index < best_index)
            }
            None => true,
        };
        if better {
            best = Some((id, index, dist));
        }
    }
    best.map(|(id, _, dist)| (id, dist))
}

/// Picks the NPC a performed trick lands on, or `None` for a near miss.
///
/// The nearest NPC is selected unconditionally; the trick only registers when
/// that NPC is within `radius` and desires exactly this trick. Anything else
/// is a silent no-op, never an error.
pub fn select_target<I>(position: Vec3, trick: Trick, radius: f32, candidates: I) -> Option<NpcId>
where
    I: IntoIterator<Item = (NpcId, usize, Vec3, Trick)>,
{
    let mut best: Option<(NpcId, usize, f32, Trick)> = None;
    for (id, index, npc_position, desired) in candidates {
        let dist = planar_distance(position, npc_position);
        let better = match best {
            Some((_, best_index, best_dist, _)) => {
                dist < best_dist || (dist == best_dist && index < best_index)
            }
            None => true,
        };
        if better {
            best = Some((id, index, dist, desired));
        }
    }
    let (id, _, dist, desired) = best?;
    (dist < radius && desired == trick).then_some(id)
}

/// Resolves each performed trick against the roster.
///
/// Resolution is synchronous and total: every event either succeeds (with the
/// full bundle of state changes and effect requests) or leaves all state
/// untouched.
#[allow(clippy::too_many_arguments)]
pub fn resolve_trick(
    mut performed: MessageReader<TrickPerformedEvent>,
    sim_clock: Res<SimulationClock>,
    config: Res<GameplayConfig>,
    mut streak: ResMut<StreakState>,
    mut challenge: ResMut<ActiveChallenge>,
    mut rng: ResMut<ChallengeRng>,
    mut npcs: Query<(&Identity, &Transform, &mut Approval)>,
    mut bursts: MessageWriter<BurstEvent>,
    mut toasts: MessageWriter<ToastEvent>,
    mut sfx: MessageWriter<SfxEvent>,
    mut dolly: MessageWriter<DollyEvent>,
) {
    for event in performed.read() {
        let target = select_target(
            event.position,
            event.trick,
            config.approval.radius,
            npcs.iter().map(|(identity, transform, approval)| {
                (
                    identity.id,
                    identity.roster_index,
                    transform.translation,
                    approval.desired(),
                )
            }),
        );
        let Some(target_id) = target else {
            continue;
        };

        let mut roster_ids: Vec<(usize, NpcId)> = npcs
            .iter()
            .map(|(identity, _, _)| (identity.roster_index, identity.id))
            .collect();
        roster_ids.sort_by_key(|(index, _)| *index);
        let candidates: Vec<NpcId> = roster_ids.into_iter().map(|(_, id)| id).collect();

        for (identity, _, mut approval) in npcs.iter_mut() {
            if identity.id != target_id {
                continue;
            }

            approval.register_success(config.approval.mood_gain);

            let now = sim_clock.elapsed();
            // Burst intensity reads the streak before the window check; a
            // success after a lapse still pays out the old run's tier.
            let tier = streak.burst_tier(config.streak.tier_size, config.streak.max_tier);
            let count =
                streak.register_success(now, Duration::from_secs_f32(config.streak.window_secs));

            bursts.write(BurstEvent {
                position: event.position + Vec3::Y * BURST_HEIGHT,
                count: config.effects.burst_base * (1 + tier),
            });
            toasts.write(ToastEvent {
                position: event.position + Vec3::Y * TOAST_HEIGHT,
                text: SUCCESS_TOAST.to_string(),
            });
            sfx.write(SfxEvent {
                cue: SfxCue::Approval(identity.species),
            });
            dolly.write(DollyEvent);

            info!(
                "{} approves of {} (mood {}, streak {})",
                identity.display_name,
                event.trick.label(),
                approval.mood(),
                count
            );

            if challenge.matches(target_id, event.trick) {
                bursts.write(BurstEvent {
                    position: event.position + Vec3::Y * BURST_HEIGHT,
                    count: config.effects.bonus_burst,
                });
                // Matching the challenge regenerates it on the spot rather
                // than waiting for the expiry poll.
                if let Some(next) = ActiveChallenge::sample(
                    &candidates,
                    &mut rng.0,
                    now,
                    Duration::from_secs_f32(config.challenge.duration_secs),
                ) {
                    info!(
                        "Challenge completed! Next: {} near {}",
                        next.trick.label(),
                        next.target
                    );
                    *challenge = next;
                }
            }
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::state::ActiveChallenge;
    use crate::npc::components::Approval;
    use rand::{rngs::SmallRng, SeedableRng};

    fn roster() -> Vec<(NpcId, usize, Vec3, Trick)> {
        vec![
            (NpcId("a1"), 0, Vec3::new(-15.0, 0.0, -6.0), Trick::Sit),
            (NpcId("a2"), 1, Vec3::new(-9.0, 0.0, -6.0), Trick::Lie),
            (NpcId("a3"), 2, Vec3::new(-3.0, 0.0, -6.0), Trick::Roll),
        ]
    }

    #[test]
    fn nearest_prefers_smaller_distance() {
        let (id, dist) = nearest_npc(
            Vec3::new(-14.0, 0.5, -6.0),
            roster().into_iter().map(|(id, i, p, _)| (id, i, p)),
        )
        .expect("roster is not empty");
        assert_eq!(id, NpcId("a1"));
        assert!((dist - 1.0).abs() < 1e-5);
    }

    #[test]
    fn nearest_tie_breaks_by_roster_order() {
        // Exactly between a1 and a2.
        let (id, _) = nearest_npc(
            Vec3::new(-12.0, 0.5, -6.0),
            roster().into_iter().map(|(id, i, p, _)| (id, i, p)),
        )
        .expect("roster is not empty");
        assert_eq!(id, NpcId("a1"));
    }

    #[test]
    fn close_trick_matching_desired_succeeds() {
        // Distance ~0.5 from a1, which desires Sit.
        let target = select_target(
            Vec3::new(-15.0, 0.5, -6.5),
            Trick::Sit,
            2.0,
            roster(),
        );
        assert_eq!(target, Some(NpcId("a1")));
    }

    #[test]
    fn mismatched_trick_is_a_silent_miss() {
        let target = select_target(Vec3::new(-15.0, 0.5, -6.5), Trick::Roll, 2.0, roster());
        assert_eq!(target, None);
    }

    #[test]
    fn out_of_range_trick_is_a_silent_miss() {
        // a1 desires Sit but sits 3 units away.
        let target = select_target(Vec3::new(-12.0, 0.5, -6.0), Trick::Sit, 2.0, roster());
        assert_eq!(target, None);
    }

    #[test]
    fn empty_roster_yields_no_target() {
        assert_eq!(
            select_target(Vec3::ZERO, Trick::Sit, 2.0, Vec::new()),
            None
        );
    }

    #[test]
    fn scenario_a1_sit_then_repeat_sit() {
        // First sit at distance ~0.5 succeeds and cycles desired to Lie.
        let mut approval = Approval::new(Trick::Sit);
        let position = Vec3::new(-15.0, 0.5, -6.5);
        let candidates = vec![(NpcId("a1"), 0, Vec3::new(-15.0, 0.0, -6.0), approval.desired())];
        assert_eq!(
            select_target(position, Trick::Sit, 2.0, candidates),
            Some(NpcId("a1"))
        );
        approval.register_success(25);
        assert!(approval.happy());
        assert_eq!(approval.mood(), 25);
        assert_eq!(approval.desired(), Trick::Lie);

        // Repeating Sit now mismatches; nothing changes.
        let candidates = vec![(NpcId("a1"), 0, Vec3::new(-15.0, 0.0, -6.0), approval.desired())];
        assert_eq!(select_target(position, Trick::Sit, 2.0, candidates), None);
        assert_eq!(approval.mood(), 25);
        assert_eq!(approval.desired(), Trick::Lie);
    }

    #[test]
    fn scenario_a3_roll_completes_the_challenge() {
        let challenge = ActiveChallenge {
            target: NpcId("a3"),
            trick: Trick::Roll,
            created_at: Duration::ZERO,
            expires_at: Duration::from_secs(12),
        };

        // Rolling next to a3 both satisfies the animal and the challenge.
        let position = Vec3::new(-3.0, 0.5, -6.5);
        let target = select_target(position, Trick::Roll, 2.0, roster());
        assert_eq!(target, Some(NpcId("a3")));
        assert!(challenge.matches(NpcId("a3"), Trick::Roll));

        // The match regenerates on the spot with a fresh 12 s window.
        let mut rng = SmallRng::seed_from_u64(3);
        let now = Duration::from_secs(5);
        let candidates: Vec<NpcId> = roster().into_iter().map(|(id, _, _, _)| id).collect();
        let next = ActiveChallenge::sample(&candidates, &mut rng, now, Duration::from_secs(12))
            .expect("candidates are non-empty");
        assert_eq!(next.created_at, now);
        assert_eq!(next.expires_at, now + Duration::from_secs(12));
    }
}
