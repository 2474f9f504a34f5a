// src/ui/labels/components.rs
//
// Components and tracking state for proximity labels.

use bevy::prelude::*;

use crate::npc::components::NpcId;

/// Root node of one animal's label. Tracks the animal entity in 3D space.
#[derive(Component, Debug)]
pub struct NpcLabel {
    npc_id: NpcId,
    tracked: Entity,
}

impl NpcLabel {
    pub fn new(npc_id: NpcId, tracked: Entity) -> Self {
        Self { npc_id, tracked }
    }

    pub fn npc_id(&self) -> NpcId {
        self.npc_id
    }

    pub fn tracked(&self) -> Entity {
        self.tracked
    }
}

/// Marker for the hint line showing the favorite trick (or "Happy!").
#[derive(Component, Debug)]
pub struct LabelHintText {
    pub npc: NpcId,
}

/// Marker for the filled portion of the mood bar.
#[derive(Component, Debug)]
pub struct MoodBarFill {
    pub npc: NpcId,
}

/// Resource tracking spawned labels by NPC ID.
///
/// Ensures each animal has at most one label at a time.
#[derive(Resource, Debug, Default)]
pub struct NpcLabelTracker {
    pub by_npc: std::collections::HashMap<NpcId, Entity>,
}

/// Resource holding the full-screen overlay root that labels parent to.
#[derive(Resource, Debug)]
pub struct NpcLabelUiRoot(pub Entity);

/// Styling knobs for the labels.
#[derive(Resource, Debug)]
pub struct NpcLabelSettings {
    pub name_font_size: f32,
    pub hint_font_size: f32,
    /// World-space offset above the animal's origin.
    pub vertical_offset: f32,
    pub bar_width_px: f32,
    pub bar_height_px: f32,
}

impl Default for NpcLabelSettings {
    fn default() -> Self {
        Self {
            name_font_size: 15.0,
            hint_font_size: 13.0,
            vertical_offset: 1.6,
            bar_width_px: 72.0,
            bar_height_px: 6.0,
        }
    }
}

/// Pick the mood bar color for a mood value in `[0, 100]`.
pub fn mood_color(mood: u8) -> Color {
    if mood > 66 {
        Color::srgb(0.35, 0.8, 0.4)
    } else if mood > 33 {
        Color::srgb(0.9, 0.8, 0.3)
    } else {
        Color::srgb(0.85, 0.35, 0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_color_uses_three_bands() {
        assert_eq!(mood_color(100), mood_color(67));
        assert_eq!(mood_color(66), mood_color(34));
        assert_eq!(mood_color(33), mood_color(0));
        assert_ne!(mood_color(100), mood_color(50));
        assert_ne!(mood_color(50), mood_color(0));
    }
}
