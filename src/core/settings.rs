//! Persisted player settings backed by a small JSON file.
//!
//! A missing or unreadable file means "use defaults" and is never surfaced as
//! an error; individual missing keys likewise fall back field by field.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

const SETTINGS_PATH: &str = "settings.json";

/// Player-facing settings, loaded once at startup and saved on change.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Sound effect volume, linear `[0, 1]`.
    pub sfx_volume: f32,
    /// Skips cinematic camera moves when set.
    pub reduced_motion: bool,
    pub show_minimap: bool,
    /// Whether the first-run help overlay has been dismissed before.
    pub help_seen: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sfx_volume: 1.0,
            reduced_motion: false,
            show_minimap: false,
            help_seen: false,
        }
    }
}

impl GameSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(SETTINGS_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<GameSettings>(&raw) {
                Ok(settings) => settings.sanitized(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        SETTINGS_PATH, err
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn step_volume(&mut self, delta: f32) {
        self.sfx_volume = (self.sfx_volume + delta).clamp(0.0, 1.0);
    }

    fn sanitized(mut self) -> Self {
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }

    fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(raw) => {
                if let Err(err) = fs::write(SETTINGS_PATH, raw) {
                    warn!("Failed to write {} ({}).", SETTINGS_PATH, err);
                }
            }
            Err(err) => warn!("Failed to serialize settings ({}).", err),
        }
    }
}

/// Writes settings back to disk whenever another system changes them.
pub fn persist_settings(settings: Res<GameSettings>) {
    if settings.is_changed() && !settings.is_added() {
        settings.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = GameSettings::default();
        assert_eq!(settings.sfx_volume, 1.0);
        assert!(!settings.reduced_motion);
        assert!(!settings.show_minimap);
        assert!(!settings.help_seen);
    }

    #[test]
    fn missing_keys_fall_back_per_field() {
        let settings: GameSettings = serde_json::from_str(r#"{"show_minimap": true}"#)
            .expect("partial settings should deserialize");
        assert!(settings.show_minimap);
        assert_eq!(settings.sfx_volume, 1.0);
    }

    #[test]
    fn volume_steps_stay_in_range() {
        let mut settings = GameSettings::default();
        settings.step_volume(0.5);
        assert_eq!(settings.sfx_volume, 1.0);
        settings.step_volume(-2.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn out_of_range_volume_is_clamped_on_load() {
        let settings: GameSettings = serde_json::from_str(r#"{"sfx_volume": 7.0}"#)
            .expect("settings should deserialize");
        assert_eq!(settings.sanitized().sfx_volume, 1.0);
    }
}
