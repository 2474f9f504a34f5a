// src/ui/labels/systems.rs
//
// Systems for spawning, positioning, and refreshing proximity labels.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::interaction::config::GameplayConfig;
use crate::interaction::systems::planar_distance;
use crate::npc::components::{Approval, Identity};
use crate::player::components::Ralph;
use crate::world::components::OrbitCamera;

use super::components::{
    mood_color, LabelHintText, MoodBarFill, NpcLabel, NpcLabelSettings, NpcLabelTracker,
    NpcLabelUiRoot,
};

// Visual constants
const LABEL_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.1, 0.8);
const NAME_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const HINT_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
const HAPPY_COLOR: Color = Color::srgb(0.5, 0.9, 0.5);
const BAR_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

/// Set up the UI root node that holds all proximity labels.
pub fn setup_label_root(mut commands: Commands) {
    let root = commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .insert(ZIndex(90))
        .insert(BackgroundColor(Color::NONE))
        .id();

    commands.insert_resource(NpcLabelUiRoot(root));
    info!("NPC label UI root created");
}

/// Spawn labels for animals within the label radius and despawn labels for
/// animals Ralph has walked away from.
pub fn sync_npc_labels(
    mut commands: Commands,
    mut tracker: ResMut<NpcLabelTracker>,
    settings: Res<NpcLabelSettings>,
    config: Res<GameplayConfig>,
    root: Res<NpcLabelUiRoot>,
    ralph_query: Query<&Transform, With<Ralph>>,
    npc_query: Query<(Entity, &Identity, &Transform)>,
) {
    let Ok(ralph_transform) = ralph_query.single() else {
        return;
    };
    let ralph_position = ralph_transform.translation;

    for (npc_entity, identity, npc_transform) in npc_query.iter() {
        let within =
            planar_distance(ralph_position, npc_transform.translation) < config.effects.label_radius;
        let spawned = tracker.by_npc.contains_key(&identity.id);

        if within && !spawned {
            let label = commands
                .spawn((
                    NpcLabel::new(identity.id, npc_entity),
                    Node {
                        position_type: PositionType::Absolute,
                        display: Display::None,
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(6.0)),
                        row_gap: Val::Px(2.0),
                        ..default()
                    },
                    BackgroundColor(LABEL_BACKGROUND),
                    ZIndex(91),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Text::new(identity.display_name),
                        TextFont {
                            font_size: settings.name_font_size,
                            ..default()
                        },
                        TextColor(NAME_COLOR),
                    ));
                    parent.spawn((
                        LabelHintText { npc: identity.id },
                        Text::new(""),
                        TextFont {
                            font_size: settings.hint_font_size,
                            ..default()
                        },
                        TextColor(HINT_COLOR),
                    ));
                    parent
                        .spawn((
                            Node {
                                width: Val::Px(settings.bar_width_px),
                                height: Val::Px(settings.bar_height_px),
                                ..default()
                            },
                            BackgroundColor(BAR_BACKGROUND),
                        ))
                        .with_children(|bar| {
                            bar.spawn((
                                MoodBarFill { npc: identity.id },
                                Node {
                                    width: Val::Percent(0.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                                BackgroundColor(mood_color(0)),
                            ));
                        });
                })
                .id();

            commands.entity(root.0).add_child(label);
            tracker.by_npc.insert(identity.id, label);
            debug!("Label spawned for {}", identity.id);
        } else if !within && spawned {
            if let Some(label) = tracker.by_npc.remove(&identity.id) {
                commands.entity(label).despawn();
            }
        }
    }
}

/// Project each label to the screen position above its animal. A label whose
/// animal entity no longer exists is despawned along with its tracker entry.
pub fn position_npc_labels(
    mut commands: Commands,
    mut tracker: ResMut<NpcLabelTracker>,
    settings: Res<NpcLabelSettings>,
    camera_query: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    tracked_transforms: Query<&GlobalTransform>,
    mut label_query: Query<(Entity, &NpcLabel, &mut Node)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(window) = window_query.single() else {
        return;
    };
    let window_height = window.resolution.height();

    for (entity, label, mut node) in label_query.iter_mut() {
        let Ok(tracked) = tracked_transforms.get(label.tracked()) else {
            tracker.by_npc.remove(&label.npc_id());
            commands.entity(entity).despawn();
            continue;
        };

        let mut world_position = tracked.translation();
        world_position.y += settings.vertical_offset;

        let Ok(viewport_position) = camera.world_to_viewport(camera_transform, world_position)
        else {
            node.display = Display::None;
            continue;
        };

        node.display = Display::Flex;
        node.left = Val::Px(viewport_position.x);
        node.top = Val::Px(window_height - viewport_position.y);
    }
}

/// Refresh the hint line and mood bar from each animal's approval state.
pub fn refresh_npc_labels(
    npc_query: Query<(&Identity, &Approval)>,
    mut hint_query: Query<(&LabelHintText, &mut Text, &mut TextColor)>,
    mut fill_query: Query<(&MoodBarFill, &mut Node, &mut BackgroundColor)>,
) {
    for (hint, mut text, mut color) in hint_query.iter_mut() {
        let Some((_, approval)) = npc_query.iter().find(|(identity, _)| identity.id == hint.npc)
        else {
            continue;
        };
        if approval.happy() {
            text.0 = String::from("Happy!");
            color.0 = HAPPY_COLOR;
        } else {
            let desired = approval.desired();
            text.0 = format!("{} ({})", desired.label(), desired.key_hint());
            color.0 = HINT_COLOR;
        }
    }

    for (fill, mut node, mut background) in fill_query.iter_mut() {
        let Some((_, approval)) = npc_query.iter().find(|(identity, _)| identity.id == fill.npc)
        else {
            continue;
        };
        node.width = Val::Percent(f32::from(approval.mood()));
        background.0 = mood_color(approval.mood());
    }
}
