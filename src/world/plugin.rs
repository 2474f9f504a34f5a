//! WorldPlugin coordinates environment setup and camera behavior.
use bevy::prelude::*;

use crate::world::{
    components::CameraDolly,
    systems::{
        orbit_camera_look, spawn_world_environment, start_camera_dolly, sync_orbit_camera,
        tween_camera_dolly, update_cursor_grab,
    },
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraDolly>()
            .add_systems(Startup, spawn_world_environment)
            .add_systems(
                Update,
                (
                    update_cursor_grab,
                    orbit_camera_look.after(update_cursor_grab),
                    start_camera_dolly,
                    tween_camera_dolly.after(start_camera_dolly),
                    sync_orbit_camera
                        .after(orbit_camera_look)
                        .after(tween_camera_dolly),
                ),
            );
    }
}
