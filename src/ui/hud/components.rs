// src/ui/hud/components.rs
//
// Components and resources for the fixed HUD elements.

use bevy::prelude::*;

use crate::npc::components::NpcId;

/// Marker for the text entity inside the challenge pill.
#[derive(Component, Debug)]
pub struct ChallengePillText;

/// A short praise popup anchored to a 3D world position.
///
/// Toasts are UI nodes projected into screen space each frame. They drift
/// upward and fade out over their lifetime, then despawn.
#[derive(Component, Debug)]
pub struct Toast {
    anchor: Vec3,
    lifetime: Timer,
}

impl Toast {
    pub fn new(anchor: Vec3, lifetime_secs: f32) -> Self {
        Self {
            anchor,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
        }
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.lifetime.tick(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.lifetime.is_finished()
    }

    /// Completed fraction of the lifetime, `0.0` at spawn to `1.0` at expiry.
    pub fn progress(&self) -> f32 {
        self.lifetime.fraction()
    }
}

/// Marker for the minimap panel. Spawned and despawned as the setting toggles.
#[derive(Component, Debug)]
pub struct MinimapPanel;

/// One dot on the minimap. `None` tracks Ralph, `Some(id)` tracks an animal.
#[derive(Component, Debug)]
pub struct MinimapDot {
    pub npc: Option<NpcId>,
}

/// Marker for the first-run help overlay.
#[derive(Component, Debug)]
pub struct HelpOverlay;

/// Resource holding the full-screen overlay root that toasts parent to.
#[derive(Resource, Debug)]
pub struct HudUiRoot(pub Entity);

/// Layout and styling knobs for the HUD.
#[derive(Resource, Debug)]
pub struct HudSettings {
    pub pill_font_size: f32,
    pub toast_font_size: f32,
    /// World-space height of the toast anchor drift over its lifetime.
    pub toast_rise: f32,
    pub minimap_size_px: f32,
    pub dot_size_px: f32,
    pub volume_step: f32,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            pill_font_size: 16.0,
            toast_font_size: 18.0,
            toast_rise: 0.8,
            minimap_size_px: 140.0,
            dot_size_px: 8.0,
            volume_step: 0.05,
        }
    }
}
