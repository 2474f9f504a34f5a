//! Consecutive-success streak tracking and effect-intensity tiers.
use std::time::Duration;

use bevy::prelude::*;

/// Counts consecutive timely successes. The count resets to 1 when the gap
/// since the previous success exceeds the configured window.
#[derive(Resource, Debug, Default)]
pub struct StreakState {
    count: u32,
    last_success: Option<Duration>,
}

impl StreakState {
    /// Records a success at `now`, returning the updated count.
    pub fn register_success(&mut self, now: Duration, window: Duration) -> u32 {
        let within = self
            .last_success
            .is_some_and(|last| now.saturating_sub(last) <= window);
        self.count = if within { self.count + 1 } else { 1 };
        self.last_success = Some(now);
        self.count
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Effect-intensity tier for the success about to be recorded: one tier
    /// per `tier_size` successes, capped at `max_tier`. Read from the count
    /// before the window check, so a success arriving after the window has
    /// lapsed still bursts at the tier the old run earned.
    pub fn burst_tier(&self, tier_size: u32, max_tier: u32) -> u32 {
        ((self.count + 1) / tier_size.max(1)).min(max_tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(3);

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn first_success_starts_at_one() {
        let mut streak = StreakState::default();
        assert_eq!(streak.register_success(secs(10), WINDOW), 1);
    }

    #[test]
    fn timely_successes_increment_by_one() {
        let mut streak = StreakState::default();
        streak.register_success(secs(10), WINDOW);
        assert_eq!(streak.register_success(secs(12), WINDOW), 2);
        assert_eq!(streak.register_success(secs(15), WINDOW), 3);
    }

    #[test]
    fn gap_beyond_window_resets_to_one() {
        let mut streak = StreakState::default();
        streak.register_success(secs(10), WINDOW);
        streak.register_success(secs(11), WINDOW);
        assert_eq!(streak.register_success(secs(20), WINDOW), 1);
    }

    #[test]
    fn gap_exactly_at_window_still_counts() {
        let mut streak = StreakState::default();
        streak.register_success(secs(10), WINDOW);
        assert_eq!(streak.register_success(secs(13), WINDOW), 2);
    }

    #[test]
    fn tier_steps_every_three_and_caps() {
        let mut streak = StreakState::default();
        let mut now = secs(0);
        let mut tiers = Vec::new();
        for _ in 0..13 {
            now += Duration::from_secs(1);
            tiers.push(streak.burst_tier(3, 3));
            streak.register_success(now, WINDOW);
        }
        assert_eq!(tiers[0], 0); // first success
        assert_eq!(tiers[2], 1); // third success
        assert_eq!(tiers[5], 2); // sixth success
        assert_eq!(tiers[8], 3); // ninth success
        assert_eq!(tiers[12], 3); // capped past the twelfth
    }

    #[test]
    fn lapsed_streak_still_bursts_at_its_earned_tier() {
        let mut streak = StreakState::default();
        for s in 1..=5 {
            streak.register_success(secs(s), WINDOW);
        }
        assert_eq!(streak.count(), 5);

        // Well past the window: the count resets to 1 but the burst for this
        // success is still sized from the run it closes out.
        assert_eq!(streak.burst_tier(3, 3), 2);
        assert_eq!(streak.register_success(secs(20), WINDOW), 1);
        assert_eq!(streak.burst_tier(3, 3), 0);
    }
}
