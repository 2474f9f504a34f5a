// src/ui/mod.rs
//
// Screen-space UI: HUD (challenge pill, toasts, minimap, help overlay) and
// the per-animal labels that appear when Ralph gets close.

pub mod hud;
pub mod labels;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((hud::HudPlugin, labels::NpcLabelPlugin));
    }
}
