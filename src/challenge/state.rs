//! Challenge resource and sampling rules.
use std::time::Duration;

use bevy::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng};

use crate::{core::plugin::IntervalTicker, npc::components::NpcId, player::components::Trick};

/// The single active challenge. Exactly one exists at all times once the
/// scene has started; it is only ever replaced, never removed.
#[derive(Resource, Debug, Clone)]
pub struct ActiveChallenge {
    pub target: NpcId,
    pub trick: Trick,
    pub created_at: Duration,
    pub expires_at: Duration,
}

impl ActiveChallenge {
    /// Samples a uniformly random target and trick. An already-happy NPC is a
    /// legitimate pick since its desired trick keeps cycling.
    pub fn sample(
        candidates: &[NpcId],
        rng: &mut impl Rng,
        now: Duration,
        duration: Duration,
    ) -> Option<Self> {
        let target = *candidates.choose(rng)?;
        let trick = *Trick::ALL
            .choose(rng)
            .expect("trick list is non-empty");
        Some(Self {
            target,
            trick,
            created_at: now,
            expires_at: now + duration,
        })
    }

    pub fn matches(&self, npc: NpcId, trick: Trick) -> bool {
        self.target == npc && self.trick == trick
    }

    pub fn expired(&self, now: Duration) -> bool {
        now > self.expires_at
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.expires_at.saturating_sub(now)
    }
}

/// RNG used for challenge sampling; seeded from entropy at startup, seedable
/// in tests.
#[derive(Resource, Debug)]
pub struct ChallengeRng(pub SmallRng);

/// Drives the fixed-rate expiry poll.
#[derive(Resource, Debug)]
pub struct ChallengePollTicker(pub IntervalTicker);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ids() -> Vec<NpcId> {
        vec![NpcId("a1"), NpcId("a2"), NpcId("a3")]
    }

    #[test]
    fn sample_sets_expiry_relative_to_now() {
        let mut rng = SmallRng::seed_from_u64(7);
        let now = Duration::from_secs(30);
        let challenge =
            ActiveChallenge::sample(&ids(), &mut rng, now, Duration::from_secs(12))
                .expect("candidates are non-empty");
        assert_eq!(challenge.created_at, now);
        assert_eq!(challenge.expires_at, now + Duration::from_secs(12));
        assert!(ids().contains(&challenge.target));
    }

    #[test]
    fn sample_with_no_candidates_yields_none() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(ActiveChallenge::sample(&[], &mut rng, Duration::ZERO, Duration::ZERO).is_none());
    }

    #[test]
    fn matches_requires_both_target_and_trick() {
        let challenge = ActiveChallenge {
            target: NpcId("a3"),
            trick: Trick::Roll,
            created_at: Duration::ZERO,
            expires_at: Duration::from_secs(12),
        };
        assert!(challenge.matches(NpcId("a3"), Trick::Roll));
        assert!(!challenge.matches(NpcId("a3"), Trick::Sit));
        assert!(!challenge.matches(NpcId("a1"), Trick::Roll));
    }

    #[test]
    fn expiry_is_strictly_after_deadline() {
        let challenge = ActiveChallenge {
            target: NpcId("a1"),
            trick: Trick::Sit,
            created_at: Duration::ZERO,
            expires_at: Duration::from_secs(12),
        };
        assert!(!challenge.expired(Duration::from_secs(12)));
        assert!(challenge.expired(Duration::from_millis(12_001)));
        assert_eq!(
            challenge.remaining(Duration::from_secs(9)),
            Duration::from_secs(3)
        );
        assert_eq!(challenge.remaining(Duration::from_secs(20)), Duration::ZERO);
    }

    #[test]
    fn sampling_eventually_covers_all_tricks() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let challenge = ActiveChallenge::sample(
                &ids(),
                &mut rng,
                Duration::ZERO,
                Duration::from_secs(12),
            )
            .expect("candidates are non-empty");
            seen.insert(challenge.trick);
        }
        assert_eq!(seen.len(), 3);
    }
}
