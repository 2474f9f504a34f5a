use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/gameplay.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawGameplayConfig {
    #[serde(default)]
    movement: RawMovement,
    #[serde(default)]
    approval: RawApproval,
    #[serde(default)]
    streak: RawStreak,
    #[serde(default)]
    challenge: RawChallenge,
    #[serde(default)]
    call: RawCall,
    #[serde(default)]
    effects: RawEffects,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovement {
    speed: f32,
    half_extent: f32,
    yaw_smoothing: f32,
    pose_smoothing: f32,
    roll_spin_rate: f32,
}

impl Default for RawMovement {
    fn default() -> Self {
        Self {
            speed: 7.0,
            half_extent: 25.0,
            yaw_smoothing: 0.2,
            pose_smoothing: 0.2,
            roll_spin_rate: 6.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawApproval {
    radius: f32,
    mood_gain: u8,
    decay_interval_secs: f32,
    decay_amount: u8,
}

impl Default for RawApproval {
    fn default() -> Self {
        Self {
            radius: 2.0,
            mood_gain: 25,
            decay_interval_secs: 1.0,
            decay_amount: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawStreak {
    window_secs: f32,
    tier_size: u32,
    max_tier: u32,
}

impl Default for RawStreak {
    fn default() -> Self {
        Self {
            window_secs: 3.0,
            tier_size: 3,
            max_tier: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawChallenge {
    duration_secs: f32,
    poll_interval_secs: f32,
}

impl Default for RawChallenge {
    fn default() -> Self {
        Self {
            duration_secs: 12.0,
            poll_interval_secs: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCall {
    speed: f32,
    stop_radius: f32,
}

impl Default for RawCall {
    fn default() -> Self {
        Self {
            speed: 1.6,
            stop_radius: 0.2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawEffects {
    burst_base: u32,
    bonus_burst: u32,
    toast_secs: f32,
    label_radius: f32,
}

impl Default for RawEffects {
    fn default() -> Self {
        Self {
            burst_base: 32,
            bonus_burst: 96,
            toast_secs: 1.2,
            label_radius: 4.0,
        }
    }
}

/// Runtime gameplay tunables derived from `config/gameplay.toml`.
#[derive(Resource, Debug, Clone)]
pub struct GameplayConfig {
    pub movement: MovementConfig,
    pub approval: ApprovalConfig,
    pub streak: StreakConfig,
    pub challenge: ChallengeConfig,
    pub call: CallConfig,
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone)]
pub struct MovementConfig {
    pub speed: f32,
    /// Half-width of the square play area; positions clamp to ±this.
    pub half_extent: f32,
    pub yaw_smoothing: f32,
    pub pose_smoothing: f32,
    pub roll_spin_rate: f32,
}

#[derive(Debug, Clone)]
pub struct ApprovalConfig {
    /// A trick only registers when the nearest NPC is closer than this.
    pub radius: f32,
    pub mood_gain: u8,
    pub decay_interval_secs: f32,
    pub decay_amount: u8,
}

#[derive(Debug, Clone)]
pub struct StreakConfig {
    /// Maximum gap between successes before the streak resets to 1.
    pub window_secs: f32,
    /// Consecutive successes per effect-intensity tier.
    pub tier_size: u32,
    pub max_tier: u32,
}

#[derive(Debug, Clone)]
pub struct ChallengeConfig {
    pub duration_secs: f32,
    pub poll_interval_secs: f32,
}

#[derive(Debug, Clone)]
pub struct CallConfig {
    pub speed: f32,
    pub stop_radius: f32,
}

#[derive(Debug, Clone)]
pub struct EffectsConfig {
    pub burst_base: u32,
    pub bonus_burst: u32,
    pub toast_secs: f32,
    /// NPC name labels appear when Ralph is within this distance.
    pub label_radius: f32,
}

impl GameplayConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawGameplayConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawGameplayConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawGameplayConfig::default().into()
            }
        }
    }
}

impl From<RawGameplayConfig> for GameplayConfig {
    fn from(value: RawGameplayConfig) -> Self {
        let movement = MovementConfig {
            speed: value.movement.speed.max(0.0),
            half_extent: value.movement.half_extent.max(1.0),
            yaw_smoothing: value.movement.yaw_smoothing.clamp(0.0, 1.0),
            pose_smoothing: value.movement.pose_smoothing.clamp(0.0, 1.0),
            roll_spin_rate: value.movement.roll_spin_rate.max(0.0),
        };

        let approval = ApprovalConfig {
            radius: value.approval.radius.max(0.0),
            mood_gain: value.approval.mood_gain,
            decay_interval_secs: value.approval.decay_interval_secs.max(0.05),
            decay_amount: value.approval.decay_amount,
        };

        let streak = StreakConfig {
            window_secs: value.streak.window_secs.max(0.0),
            tier_size: value.streak.tier_size.max(1),
            max_tier: value.streak.max_tier,
        };

        let challenge = ChallengeConfig {
            duration_secs: value.challenge.duration_secs.max(1.0),
            poll_interval_secs: value.challenge.poll_interval_secs.max(0.05),
        };

        let call = CallConfig {
            speed: value.call.speed.max(0.0),
            stop_radius: value.call.stop_radius.max(0.0),
        };

        let effects = EffectsConfig {
            burst_base: value.effects.burst_base.max(1),
            bonus_burst: value.effects.bonus_burst.max(1),
            toast_secs: value.effects.toast_secs.max(0.1),
            label_radius: value.effects.label_radius.max(0.0),
        };

        Self {
            movement,
            approval,
            streak,
            challenge,
            call,
            effects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_defaults() {
        let config = GameplayConfig::from(RawGameplayConfig::default());
        assert_eq!(config.movement.speed, 7.0);
        assert_eq!(config.movement.half_extent, 25.0);
        assert_eq!(config.approval.radius, 2.0);
        assert_eq!(config.approval.mood_gain, 25);
        assert_eq!(config.challenge.duration_secs, 12.0);
        assert_eq!(config.effects.bonus_burst, 96);
    }

    #[test]
    fn conversion_clamps_invalid_values() {
        let mut raw = RawGameplayConfig::default();
        raw.movement.yaw_smoothing = 4.0;
        raw.streak.tier_size = 0;
        raw.challenge.poll_interval_secs = 0.0;
        let config = GameplayConfig::from(raw);
        assert_eq!(config.movement.yaw_smoothing, 1.0);
        assert_eq!(config.streak.tier_size, 1);
        assert!(config.challenge.poll_interval_secs > 0.0);
    }

    #[test]
    fn partial_toml_keeps_other_sections_default() {
        let raw: RawGameplayConfig = toml::from_str("[movement]\nspeed = 5.0\n")
            .expect("partial config should parse");
        let config = GameplayConfig::from(raw);
        assert_eq!(config.movement.speed, 5.0);
        assert_eq!(config.approval.radius, 2.0);
    }
}
