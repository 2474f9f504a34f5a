// src/ui/labels/plugin.rs
//
// Plugin registration for proximity label systems.

use bevy::prelude::*;

use super::components::{NpcLabelSettings, NpcLabelTracker};
use super::systems::{position_npc_labels, refresh_npc_labels, setup_label_root, sync_npc_labels};

/// Plugin providing name, hint, and mood labels above nearby animals.
///
/// # System Ordering
///
/// 1. `sync_npc_labels` - Spawns and despawns labels by proximity
/// 2. `position_npc_labels` - Projects labels into screen space
/// 3. `refresh_npc_labels` - Updates hint text and mood bars
///
/// # Dependencies
///
/// - `NpcPlugin` must be registered (provides Identity and Approval)
/// - `PlayerPlugin` must be registered (provides the Ralph entity)
/// - `WorldPlugin` must be registered (provides OrbitCamera for projections)
pub struct NpcLabelPlugin;

impl Plugin for NpcLabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NpcLabelTracker>()
            .init_resource::<NpcLabelSettings>()
            .add_systems(Startup, setup_label_root)
            .add_systems(
                Update,
                (
                    sync_npc_labels,
                    position_npc_labels.after(sync_npc_labels),
                    refresh_npc_labels.after(sync_npc_labels),
                ),
            );

        info!("NpcLabelPlugin registered");
    }
}
