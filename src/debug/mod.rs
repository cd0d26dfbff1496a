//! Debug overlay for tuning movement and camera feel.
//!
//! F3 toggles a text panel with the player's position, velocity, motion
//! state and the camera offset. Only compiled with the `dev-tools` feature.

mod systems;
mod ui;


use bevy::prelude::*;

use crate::debug::systems::{toggle_debug_info, update_debug_info_overlay};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the info overlay
    pub show_info: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, update_debug_info_overlay).chain(),
        );
    }
}
