//! Sprites module: tests for the draw enumeration and screen mapping.

use bevy::prelude::{Vec2, World};
use std::path::Path;

use super::{
    BLOCK_IMAGE, DrawOrder, PLAYER_IMAGE, SpriteAssets, draw_list, image_exists, screen_to_world,
};
use crate::camera::FollowCamera;
use crate::content::PlatformKind;
use crate::core::{
    Aabb, ICE_COLOR, PLAYER_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, SNOW_COLOR, asset_root,
};

const VIEWPORT: Vec2 = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);

#[test]
fn test_full_screen_box_maps_to_origin() {
    let center = screen_to_world(Vec2::ZERO, VIEWPORT, VIEWPORT);
    assert_eq!(center, Vec2::ZERO);
}

#[test]
fn test_screen_to_world_flips_y() {
    let center = screen_to_world(Vec2::new(100.0, 300.0), PLAYER_SIZE, VIEWPORT);
    assert_eq!(center, Vec2::new(-520.0, 35.0));
}

#[test]
fn test_draw_list_applies_camera_and_sorts() {
    let mut camera = FollowCamera::default();
    camera.offset_x = -100.0;

    let player = Aabb::new(Vec2::new(400.0, 300.0), PLAYER_SIZE);
    let ground = Aabb::new(Vec2::new(0.0, 670.0), Vec2::new(12800.0, 50.0));
    let mut world = World::new();
    let ground_entity = world.spawn_empty().id();
    let player_entity = world.spawn_empty().id();

    let list = draw_list(
        &camera,
        [
            (player_entity, DrawOrder(1), &player),
            (ground_entity, DrawOrder(0), &ground),
        ],
    );

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].entity, ground_entity);
    assert_eq!(list[0].screen_position, Vec2::new(-100.0, 670.0));
    assert_eq!(list[1].entity, player_entity);
    assert_eq!(list[1].screen_position, Vec2::new(300.0, 300.0));
    assert_eq!(list[1].size, PLAYER_SIZE);
}

#[test]
fn test_missing_images_fall_back_to_colors() {
    let assets = SpriteAssets::default();

    let player = assets.player_sprite();
    assert_eq!(player.custom_size, Some(PLAYER_SIZE));

    assert_eq!(assets.block_sprite(PlatformKind::Ground).color, SNOW_COLOR);
    assert_eq!(assets.block_sprite(PlatformKind::Floating).color, ICE_COLOR);
}

#[test]
fn test_asset_root_follows_manifest_not_working_dir() {
    if std::env::var_os("BEVY_ASSET_ROOT").is_some() {
        return;
    }

    let root = asset_root();
    assert!(root.is_absolute());
    assert_eq!(root, Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));
    assert!(image_exists(&root, "data/level.ron"));
}

#[test]
fn test_unshipped_images_are_reported_missing() {
    let root = asset_root();
    assert!(!image_exists(&root, PLAYER_IMAGE));
    assert!(!image_exists(&root, BLOCK_IMAGE));
    // Directories never count as images
    assert!(!image_exists(&root, "images"));
}
