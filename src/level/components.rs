//! Level domain: static platform components and level bounds.

use bevy::prelude::*;

use crate::core::{Aabb, LEVEL_HEIGHT, LEVEL_WIDTH};

/// Marker for static collision geometry. Never moves after spawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct Platform;

/// Playable area in level space, anchored at the origin.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            width: LEVEL_WIDTH,
            height: LEVEL_HEIGHT,
        }
    }
}

impl LevelBounds {
    pub fn contains(&self, rect: &Aabb) -> bool {
        rect.left() >= 0.0
            && rect.top() >= 0.0
            && rect.right() <= self.width
            && rect.bottom() <= self.height
    }
}
