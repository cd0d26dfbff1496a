//! Core domain: fixed screen, level and physics constants.

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use std::path::PathBuf;

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

pub const LEVEL_WIDTH: f32 = SCREEN_WIDTH * 10.0;
pub const LEVEL_HEIGHT: f32 = SCREEN_HEIGHT;

/// Simulation ticks per second.
pub const FPS: f64 = 60.0;

pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_JUMP_FORCE: f32 = -18.5;
pub const PLAYER_GRAVITY: f32 = 1.0;
pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 50.0);

/// Edge length of one platform tile. Platforms are tiled from square blocks.
pub const BLOCK_SIZE: f32 = 50.0;

/// Sky blue (#87CEEB)
pub const SKY_COLOR: Color = Color::srgb(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0);
/// Snow white (#FFFFFF)
pub const SNOW_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
/// Light ice blue (#ADD8E6)
pub const ICE_COLOR: Color = Color::srgb(173.0 / 255.0, 216.0 / 255.0, 230.0 / 255.0);
/// Fallback tint for the player when the penguin image is missing.
pub const PENGUIN_COLOR: Color = Color::srgb(0.12, 0.12, 0.18);

pub const WINDOW_TITLE: &str = "Penguin Platformer";

/// Asset folder name, the `AssetPlugin` default.
pub const ASSET_FOLDER: &str = "assets";

/// Directory the default asset server reads from. Resolves `BEVY_ASSET_ROOT`
/// and `CARGO_MANIFEST_DIR` the same way, so lookups do not depend on the
/// working directory.
pub fn asset_root() -> PathBuf {
    FileAssetReader::new(ASSET_FOLDER).root_path().clone()
}
