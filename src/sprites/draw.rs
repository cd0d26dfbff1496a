//! Draw enumeration: where each entity lands on screen this frame.

use bevy::prelude::*;

use crate::camera::FollowCamera;
use crate::core::Aabb;

/// Registration order of a drawable entity. Lower values are drawn first.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DrawOrder(pub u32);

impl DrawOrder {
    /// Depth used so later registrations render on top.
    pub fn z(self) -> f32 {
        self.0 as f32
    }
}

/// One blit: an entity and its screen-space top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub entity: Entity,
    pub order: DrawOrder,
    pub screen_position: Vec2,
    pub size: Vec2,
}

/// Offset every box by the camera and return them in draw order.
pub fn draw_list<'a>(
    camera: &FollowCamera,
    items: impl IntoIterator<Item = (Entity, DrawOrder, &'a Aabb)>,
) -> Vec<DrawItem> {
    let mut list: Vec<DrawItem> = items
        .into_iter()
        .map(|(entity, order, rect)| DrawItem {
            entity,
            order,
            screen_position: camera.apply(rect),
            size: rect.size,
        })
        .collect();
    list.sort_by_key(|item| item.order);
    list
}

/// Convert a screen-space top-left (y down, origin at the top-left corner)
/// into the world-space center seen by a `Camera2d` sitting at the origin.
pub fn screen_to_world(screen_position: Vec2, size: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        screen_position.x + size.x * 0.5 - viewport.x * 0.5,
        viewport.y * 0.5 - (screen_position.y + size.y * 0.5),
    )
}
