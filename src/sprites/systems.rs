//! Sprite placement and facing systems.

use bevy::prelude::*;

use crate::camera::FollowCamera;
use crate::core::Body;
use crate::movement::{Facing, MovementState, Player};
use crate::sprites::{DrawOrder, draw_list, screen_to_world};

/// Place every drawable entity at its camera-relative screen position.
pub(crate) fn sync_sprites(
    camera: Res<FollowCamera>,
    mut query: Query<(Entity, &DrawOrder, &Body, &mut Transform)>,
) {
    let items = draw_list(
        &camera,
        query
            .iter()
            .map(|(entity, order, body, _)| (entity, *order, &body.0)),
    );

    for item in items {
        if let Ok((_, _, _, mut transform)) = query.get_mut(item.entity) {
            let center = screen_to_world(item.screen_position, item.size, camera.viewport);
            transform.translation = center.extend(item.order.z());
        }
    }
}

/// Mirror the player sprite when facing left.
pub(crate) fn sync_player_facing(mut query: Query<(&MovementState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
