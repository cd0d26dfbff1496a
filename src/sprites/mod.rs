//! Sprites module: image handles, the draw enumeration and sprite sync.
//!
//! This module handles:
//! - Loading the penguin and ice block images (flat colors if missing)
//! - Enumerating drawables in registration order with camera offsets
//! - Mapping level-space boxes onto Bevy transforms each frame

pub mod assets;
pub mod draw;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use assets::*;
pub use draw::*;

use crate::sprites::systems::{sync_player_facing, sync_sprites};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_sprite_assets)
            .add_systems(Update, (sync_sprites, sync_player_facing));
    }
}
