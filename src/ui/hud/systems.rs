// src/ui/hud/systems.rs
//
// HUD spawning and per-frame updates.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::challenge::state::ActiveChallenge;
use crate::core::plugin::SimulationClock;
use crate::core::settings::GameSettings;
use crate::interaction::config::GameplayConfig;
use crate::interaction::events::ToastEvent;
use crate::interaction::streak::StreakState;
use crate::npc::components::Identity;
use crate::player::components::Ralph;
use crate::world::components::OrbitCamera;

use super::components::{
    ChallengePillText, HelpOverlay, HudSettings, HudUiRoot, MinimapDot, MinimapPanel, Toast,
};

// Visual constants
const PILL_BACKGROUND: Color = Color::srgba(0.08, 0.08, 0.12, 0.85);
const PILL_TEXT_COLOR: Color = Color::srgb(1.0, 0.95, 0.8);
const TOAST_COLOR: Color = Color::srgb(1.0, 0.9, 0.3);
const MINIMAP_BACKGROUND: Color = Color::srgba(0.05, 0.08, 0.05, 0.8);
const MINIMAP_BORDER: Color = Color::srgb(0.3, 0.35, 0.3);
const RALPH_DOT_COLOR: Color = Color::srgb(1.0, 0.75, 0.2);
const NPC_DOT_COLOR: Color = Color::srgb(0.8, 0.8, 0.75);
const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.75);

const HELP_LINES: [&str; 5] = [
    "Arrow keys: walk around the street",
    "S / L / R: sit, lie down, roll over",
    "C (hold): call the nearest animal over",
    "Space: bark",
    "Match an animal's favorite trick up close to cheer it up!",
];

/// Set up the overlay root, the challenge pill, and (first run only) the
/// help overlay.
pub fn setup_hud(mut commands: Commands, hud: Res<HudSettings>, settings: Res<GameSettings>) {
    let root = commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .insert(ZIndex(100))
        .insert(BackgroundColor(Color::NONE))
        .id();
    commands.insert_resource(HudUiRoot(root));

    // Challenge pill, centered along the top edge.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(14.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .insert(ZIndex(110))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(PILL_BACKGROUND),
                ))
                .with_children(|pill| {
                    pill.spawn((
                        ChallengePillText,
                        Text::new(""),
                        TextFont {
                            font_size: hud.pill_font_size,
                            ..default()
                        },
                        TextColor(PILL_TEXT_COLOR),
                    ));
                });
        });

    if !settings.help_seen {
        spawn_help_overlay(&mut commands);
    }

    info!("HUD root created");
}

fn spawn_help_overlay(commands: &mut Commands) {
    commands
        .spawn((
            HelpOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(OVERLAY_BACKGROUND),
            ZIndex(200),
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("Ralph's Adventure"),
                TextFont {
                    font_size: 34.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            for line in HELP_LINES {
                overlay.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.85, 0.85, 0.85)),
                ));
            }
            overlay.spawn((
                Text::new("Press Enter to start"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(PILL_TEXT_COLOR),
            ));
        });
}

/// Dismiss the help overlay and remember the dismissal across runs.
pub fn dismiss_help_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    overlay_query: Query<Entity, With<HelpOverlay>>,
    mut settings: ResMut<GameSettings>,
) {
    if overlay_query.is_empty() {
        return;
    }
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::Escape) {
        for entity in overlay_query.iter() {
            commands.entity(entity).despawn();
        }
        settings.help_seen = true;
        info!("Help overlay dismissed");
    }
}

/// Refresh the challenge pill text with the current target, countdown, and
/// streak counter.
pub fn update_challenge_pill(
    challenge: Option<Res<ActiveChallenge>>,
    clock: Res<SimulationClock>,
    streak: Res<StreakState>,
    npc_query: Query<&Identity>,
    mut text_query: Query<&mut Text, With<ChallengePillText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let Some(challenge) = challenge else {
        text.0.clear();
        return;
    };

    let target_name = npc_query
        .iter()
        .find(|identity| identity.id == challenge.target)
        .map(|identity| identity.display_name)
        .unwrap_or("a friend");

    let seconds_left = challenge.remaining(clock.elapsed()).as_secs_f32().ceil() as u32;
    let mut line = format!(
        "Do a {} for {}  ({}s)",
        challenge.trick.label(),
        target_name,
        seconds_left
    );
    if streak.count() >= 2 {
        line.push_str(&format!("   Streak x{}", streak.count()));
    }
    text.0 = line;
}

/// Spawn a praise toast for each resolver event.
pub fn spawn_toasts(
    mut commands: Commands,
    mut events: MessageReader<ToastEvent>,
    hud: Res<HudSettings>,
    config: Res<GameplayConfig>,
    root: Res<HudUiRoot>,
) {
    for event in events.read() {
        let toast = commands
            .spawn((
                Toast::new(event.position, config.effects.toast_secs),
                Node {
                    position_type: PositionType::Absolute,
                    display: Display::None,
                    ..default()
                },
                ZIndex(120),
                Text::new(event.text.clone()),
                TextFont {
                    font_size: hud.toast_font_size,
                    ..default()
                },
                TextColor(TOAST_COLOR),
            ))
            .id();
        commands.entity(root.0).add_child(toast);
    }
}

/// Age toasts, drift them upward in world space, and project them to the
/// screen each frame.
pub fn update_toasts(
    mut commands: Commands,
    clock: Res<SimulationClock>,
    hud: Res<HudSettings>,
    camera_query: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut toast_query: Query<(Entity, &mut Toast, &mut Node, &mut TextColor)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(window) = window_query.single() else {
        return;
    };
    let window_height = window.resolution.height();

    for (entity, mut toast, mut node, mut text_color) in toast_query.iter_mut() {
        toast.tick(clock.last_scaled_delta());
        if toast.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        let progress = toast.progress();
        let world_position = toast.anchor() + Vec3::Y * (progress * hud.toast_rise);
        let Ok(viewport_position) = camera.world_to_viewport(camera_transform, world_position)
        else {
            node.display = Display::None;
            continue;
        };

        node.display = Display::Flex;
        node.left = Val::Px(viewport_position.x);
        node.top = Val::Px(window_height - viewport_position.y);
        text_color.0 = TOAST_COLOR.with_alpha(1.0 - progress);
    }
}

/// Settings hotkeys: M toggles the minimap, N toggles reduced motion, and
/// minus/equals nudge the sound volume.
pub fn handle_settings_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    hud: Res<HudSettings>,
    mut settings: ResMut<GameSettings>,
) {
    if keyboard.just_pressed(KeyCode::KeyM) {
        settings.show_minimap = !settings.show_minimap;
        info!("Minimap {}", if settings.show_minimap { "on" } else { "off" });
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        settings.reduced_motion = !settings.reduced_motion;
        info!(
            "Reduced motion {}",
            if settings.reduced_motion { "on" } else { "off" }
        );
    }
    if keyboard.just_pressed(KeyCode::Minus) {
        settings.step_volume(-hud.volume_step);
        info!("Volume: {:.2}", settings.sfx_volume);
    }
    if keyboard.just_pressed(KeyCode::Equal) {
        settings.step_volume(hud.volume_step);
        info!("Volume: {:.2}", settings.sfx_volume);
    }
}

/// Spawn or despawn the minimap panel as the setting flips.
pub fn sync_minimap(
    mut commands: Commands,
    settings: Res<GameSettings>,
    hud: Res<HudSettings>,
    panel_query: Query<Entity, With<MinimapPanel>>,
    npc_query: Query<&Identity>,
) {
    if settings.show_minimap && panel_query.is_empty() {
        commands
            .spawn((
                MinimapPanel,
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(14.0),
                    right: Val::Px(14.0),
                    width: Val::Px(hud.minimap_size_px),
                    height: Val::Px(hud.minimap_size_px),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(MINIMAP_BACKGROUND),
                BorderColor::from(MINIMAP_BORDER),
                ZIndex(110),
            ))
            .with_children(|panel| {
                panel.spawn((
                    MinimapDot { npc: None },
                    Node {
                        position_type: PositionType::Absolute,
                        width: Val::Px(hud.dot_size_px),
                        height: Val::Px(hud.dot_size_px),
                        ..default()
                    },
                    BackgroundColor(RALPH_DOT_COLOR),
                ));
                for identity in npc_query.iter() {
                    panel.spawn((
                        MinimapDot {
                            npc: Some(identity.id),
                        },
                        Node {
                            position_type: PositionType::Absolute,
                            width: Val::Px(hud.dot_size_px),
                            height: Val::Px(hud.dot_size_px),
                            ..default()
                        },
                        BackgroundColor(NPC_DOT_COLOR),
                    ));
                }
            });
    } else if !settings.show_minimap {
        for entity in panel_query.iter() {
            commands.entity(entity).despawn();
        }
    }
}

/// Map world positions into minimap panel coordinates.
pub fn update_minimap_dots(
    settings: Res<GameSettings>,
    hud: Res<HudSettings>,
    config: Res<GameplayConfig>,
    ralph_query: Query<&Transform, With<Ralph>>,
    npc_query: Query<(&Identity, &Transform)>,
    mut dot_query: Query<(&MinimapDot, &mut Node)>,
) {
    if !settings.show_minimap {
        return;
    }
    let half = config.movement.half_extent;
    let span = hud.minimap_size_px - hud.dot_size_px;

    let place = |position: Vec3, node: &mut Node| {
        let u = ((position.x + half) / (2.0 * half)).clamp(0.0, 1.0);
        let v = ((position.z + half) / (2.0 * half)).clamp(0.0, 1.0);
        node.left = Val::Px(u * span);
        node.top = Val::Px(v * span);
    };

    for (dot, mut node) in dot_query.iter_mut() {
        match dot.npc {
            None => {
                if let Ok(transform) = ralph_query.single() {
                    place(transform.translation, &mut node);
                }
            }
            Some(npc_id) => {
                if let Some((_, transform)) =
                    npc_query.iter().find(|(identity, _)| identity.id == npc_id)
                {
                    place(transform.translation, &mut node);
                }
            }
        }
    }
}
