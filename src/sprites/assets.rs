//! Sprite image loading with flat-color fallbacks.
//!
//! Images live under `assets/images/`. A missing file is not fatal: the
//! sprite is drawn as a solid rectangle of the same size instead.

use bevy::prelude::*;
use std::path::Path;

use crate::content::PlatformKind;
use crate::core::{BLOCK_SIZE, ICE_COLOR, PENGUIN_COLOR, PLAYER_SIZE, SNOW_COLOR, asset_root};

pub const PLAYER_IMAGE: &str = "images/penguinplayer.png";
pub const BLOCK_IMAGE: &str = "images/iceblock.png";

/// Loaded image handles, `None` where the image was not found.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteAssets {
    pub player: Option<Handle<Image>>,
    pub block: Option<Handle<Image>>,
}

impl SpriteAssets {
    pub fn player_sprite(&self) -> Sprite {
        match &self.player {
            Some(image) => Sprite {
                image: image.clone(),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            None => Sprite::from_color(PENGUIN_COLOR, PLAYER_SIZE),
        }
    }

    /// One 50x50 tile of a platform.
    pub fn block_sprite(&self, kind: PlatformKind) -> Sprite {
        let size = Vec2::splat(BLOCK_SIZE);
        match &self.block {
            Some(image) => Sprite {
                image: image.clone(),
                custom_size: Some(size),
                ..default()
            },
            None => {
                let color = match kind {
                    PlatformKind::Ground => SNOW_COLOR,
                    PlatformKind::Floating => ICE_COLOR,
                };
                Sprite::from_color(color, size)
            }
        }
    }
}

pub fn image_exists(root: &Path, path: &str) -> bool {
    root.join(path).is_file()
}

fn load_image(
    asset_server: &AssetServer,
    root: &Path,
    path: &'static str,
) -> Option<Handle<Image>> {
    if !image_exists(root, path) {
        warn!(
            "Sprite image not found at {}, using flat color",
            root.join(path).display()
        );
        return None;
    }

    Some(asset_server.load(path))
}

/// System to load sprite images at startup.
pub(crate) fn load_sprite_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    let root = asset_root();
    let assets = SpriteAssets {
        player: load_image(&asset_server, &root, PLAYER_IMAGE),
        block: load_image(&asset_server, &root, BLOCK_IMAGE),
    };

    info!(
        "Sprite assets: player={}, block={}",
        assets.player.is_some(),
        assets.block.is_some()
    );
    commands.insert_resource(assets);
}
