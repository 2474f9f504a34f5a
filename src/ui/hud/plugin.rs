// src/ui/hud/plugin.rs
//
// Plugin registration for the HUD systems.

use bevy::prelude::*;

use super::components::HudSettings;
use super::systems::{
    dismiss_help_overlay, handle_settings_hotkeys, setup_hud, spawn_toasts, sync_minimap,
    update_challenge_pill, update_minimap_dots, update_toasts,
};

/// Plugin providing the fixed HUD layer.
///
/// # Dependencies
///
/// - `CorePlugin` must be registered (provides SimulationClock and GameSettings)
/// - `InteractionPlugin` must be registered (provides ToastEvent and GameplayConfig)
/// - `WorldPlugin` must be registered (provides OrbitCamera for projections)
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudSettings>()
            .add_systems(Startup, setup_hud)
            .add_systems(
                Update,
                (
                    update_challenge_pill,
                    (spawn_toasts, update_toasts.after(spawn_toasts)),
                    handle_settings_hotkeys,
                    (sync_minimap, update_minimap_dots.after(sync_minimap))
                        .after(handle_settings_hotkeys),
                    dismiss_help_overlay,
                ),
            );

        info!("HudPlugin registered");
    }
}
