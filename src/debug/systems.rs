//! Debug overlay: F3 toggle and per-frame text refresh.

use bevy::prelude::*;

use crate::camera::FollowCamera;
use crate::core::Body;
use crate::debug::DebugState;
use crate::debug::ui::{DebugInfoOverlay, debug_info_overlay, format_debug_info};
use crate::movement::{MovementState, Player, Velocity};

/// Toggle the info overlay with F3
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "Debug info overlay {}",
            if debug_state.show_info { "on" } else { "off" }
        );
    }
}

/// Spawn, refresh or remove the overlay to match [`DebugState::show_info`].
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    camera: Res<FollowCamera>,
    player_query: Query<(&Body, &Velocity, &MovementState), With<Player>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    let info = match player_query.single() {
        Ok((body, velocity, state)) => format_debug_info(body, **velocity, state, &camera),
        Err(_) => "No player".to_string(),
    };

    if overlay_query.is_empty() {
        commands.spawn(debug_info_overlay(info));
        return;
    }
    for (_, mut text) in &mut overlay_query {
        **text = info.clone();
    }
}
