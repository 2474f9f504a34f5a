//! CorePlugin wires global timing utilities for the game loop.
//!
//! All interval behavior in the game (mood decay, challenge polling, footstep
//! cadence) is driven from [`SimulationClock`] deltas rather than wall-clock
//! reads, so every timed rule stays deterministic under synthetic clocks.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

use crate::core::settings::{persist_settings, GameSettings};

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Tracks scaled game time derived from real frame deltas.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    time_scale: f32,
    last_real_delta: Duration,
    last_scaled_delta: Duration,
    elapsed: Duration,
}

impl SimulationClock {
    /// Creates a new clock with the provided time-scale multiplier.
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            last_real_delta: Duration::ZERO,
            last_scaled_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Last scaled delta after applying the multiplier.
    pub fn last_scaled_delta(&self) -> Duration {
        self.last_scaled_delta
    }

    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn last_real_delta(&self) -> Duration {
        self.last_real_delta
    }

    /// Total scaled duration elapsed since startup. Timed game state
    /// (trick timers, challenge expiry, streak windows) is anchored to this.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Applies a real delta, storing both the real and scaled durations.
    pub fn tick(&mut self, real_delta: Duration) {
        self.last_real_delta = real_delta;
        self.last_scaled_delta = real_delta.mul_f32(self.time_scale);
        self.elapsed += self.last_scaled_delta;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Fixed-step accumulator converting frame deltas into whole interval ticks.
///
/// A stalled frame yields several pending ticks rather than one late tick, so
/// fixed-rate rules (mood decay, challenge polls) never lose steps.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: f32,
    accumulated: f32,
    pending: u32,
}

impl IntervalTicker {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval: interval_secs.max(f32::EPSILON),
            accumulated: 0.0,
            pending: 0,
        }
    }

    pub fn accumulate(&mut self, delta_secs: f32) {
        if delta_secs <= 0.0 {
            return;
        }
        self.accumulated += delta_secs;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            self.pending = self.pending.saturating_add(1);
        }
    }

    pub fn take_pending(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

/// Registers timing resources, persisted settings, and their systems.
#[derive(Debug, Clone, Copy)]
pub struct CorePlugin {
    time_scale: f32,
}

impl CorePlugin {
    pub const fn with_time_scale(time_scale: f32) -> Self {
        Self { time_scale }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::with_time_scale(DEFAULT_TIME_SCALE)
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimulationClock::new(self.time_scale))
            .insert_resource(GameSettings::load_or_default())
            .add_systems(Update, (update_simulation_clock, persist_settings));

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_scaled_ticks);
        }
    }
}

pub fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

#[cfg(feature = "core_debug")]
fn log_scaled_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<SimulationClock>) {
    if timer.timer.tick(clock.last_scaled_delta()).just_finished() {
        info!(
            target: "core_debug",
            "Game elapsed: {:.2}s | scale: {:.3} | real dt: {:.4}s | scaled dt: {:.4}s",
            clock.elapsed().as_secs_f32(),
            clock.time_scale(),
            clock.last_real_delta().as_secs_f32(),
            clock.last_scaled_delta().as_secs_f32(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_scales_delta_with_multiplier() {
        let mut clock = SimulationClock::new(2.0);
        clock.tick(Duration::from_secs_f32(0.5));

        assert_eq!(clock.last_real_delta(), Duration::from_secs_f32(0.5));
        assert_eq!(clock.last_scaled_delta(), Duration::from_secs_f32(1.0));
        assert_eq!(clock.elapsed(), Duration::from_secs_f32(1.0));
    }

    #[test]
    fn clock_clamps_min_time_scale() {
        let clock = SimulationClock::new(0.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);
    }

    #[test]
    fn ticker_emits_whole_intervals() {
        let mut ticker = IntervalTicker::new(1.0);
        ticker.accumulate(0.6);
        assert_eq!(ticker.take_pending(), 0);
        ticker.accumulate(0.6);
        assert_eq!(ticker.take_pending(), 1);
    }

    #[test]
    fn ticker_batches_stalled_frames() {
        let mut ticker = IntervalTicker::new(0.5);
        ticker.accumulate(2.3);
        assert_eq!(ticker.take_pending(), 4);
        assert_eq!(ticker.take_pending(), 0);
    }
}
