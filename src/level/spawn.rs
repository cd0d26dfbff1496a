//! Level domain: spawning platforms and the player from the level layout.

use bevy::prelude::*;

use crate::camera::CameraTarget;
use crate::content::{LevelLayout, PlatformDef};
use crate::core::{BLOCK_SIZE, Body, PLAYER_SIZE};
use crate::level::Platform;
use crate::movement::{MovementState, Player, Velocity};
use crate::sprites::{DrawOrder, SpriteAssets};

/// Spawn every platform, then the player. Registration order is draw order.
pub(crate) fn spawn_level(
    mut commands: Commands,
    layout: Res<LevelLayout>,
    sprites: Option<Res<SpriteAssets>>,
) {
    let sprites = sprites.as_deref().cloned().unwrap_or_default();
    let mut order = 0;

    for def in &layout.platforms {
        spawn_platform(&mut commands, &sprites, def, DrawOrder(order));
        order += 1;
    }

    let spawn = Vec2::from(layout.spawn);
    commands.spawn((
        Player,
        CameraTarget,
        MovementState::default(),
        Velocity::default(),
        Body::new(spawn, PLAYER_SIZE),
        DrawOrder(order),
        sprites.player_sprite(),
    ));

    info!(
        "Level spawned: {} platforms, player at ({}, {})",
        layout.platforms.len(),
        spawn.x,
        spawn.y
    );
}

fn spawn_platform(
    commands: &mut Commands,
    sprites: &SpriteAssets,
    def: &PlatformDef,
    order: DrawOrder,
) {
    let rect = def.aabb();
    let half_width = rect.size.x * 0.5;

    commands
        .spawn((
            Platform,
            Body(rect),
            order,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for i in 0..def.block_count() {
                let x = -half_width + BLOCK_SIZE * 0.5 + i as f32 * BLOCK_SIZE;
                parent.spawn((sprites.block_sprite(def.kind), Transform::from_xyz(x, 0.0, 0.0)));
            }
        });
}
