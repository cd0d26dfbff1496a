//! Level domain: platform layout, collision and per-tick orchestration.
//!
//! Every simulation tick runs in `FixedUpdate` as a chain of [`TickSet`]s:
//! input is sampled, the controller advances, collisions are resolved and
//! finally the camera follows the player.

pub mod collision;
mod components;
mod spawn;
mod systems;


pub use components::{LevelBounds, Platform};

use bevy::prelude::*;

use crate::content::LevelLayout;
use crate::level::spawn::spawn_level;
use crate::level::systems::resolve_player_movement;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Input,
    Control,
    Collision,
    Camera,
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelBounds>()
            .init_resource::<LevelLayout>()
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Input,
                    TickSet::Control,
                    TickSet::Collision,
                    TickSet::Camera,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_level)
            .add_systems(
                FixedUpdate,
                resolve_player_movement.in_set(TickSet::Collision),
            );
    }
}
