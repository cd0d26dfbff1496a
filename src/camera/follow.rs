//! Camera domain: horizontal follow camera with exponential smoothing.

use bevy::prelude::*;

use crate::core::{Aabb, LEVEL_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Camera smoothing factor (fraction of the remaining distance covered per tick)
pub const CAMERA_SMOOTH_SPEED: f32 = 0.1;

/// Scrolls horizontally only. `offset_x` is added to level-space positions
/// to get screen-space positions, so it is zero at the left edge and
/// negative as the view moves right.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FollowCamera {
    pub offset_x: f32,
    /// Width of the area the camera may show (the whole level)
    pub width: f32,
    pub viewport: Vec2,
    pub smooth_speed: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(LEVEL_WIDTH)
    }
}

impl FollowCamera {
    pub fn new(width: f32) -> Self {
        Self {
            offset_x: 0.0,
            width,
            viewport: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            smooth_speed: CAMERA_SMOOTH_SPEED,
        }
    }

    /// Most negative offset, reached when the view touches the right edge.
    pub fn min_offset(&self) -> f32 {
        -(self.width - self.viewport.x)
    }

    /// Offset that would center the target, limited to the level edges.
    pub fn target_offset(&self, target: &Aabb) -> f32 {
        let centered = -target.center().x + self.viewport.x / 2.0;
        self.clamp_offset(centered)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.min(0.0).max(self.min_offset())
    }

    /// Ease toward the target, then keep the target on screen vertically.
    pub fn update(&mut self, target: &mut Aabb) {
        let target_x = self.target_offset(target);
        let eased = self.offset_x + (target_x - self.offset_x) * self.smooth_speed;
        self.offset_x = self.clamp_offset(eased);

        // The view never scrolls vertically; the target is clamped instead
        if target.top() < 0.0 {
            target.set_top(0.0);
        }
        if target.bottom() > self.viewport.y {
            target.set_bottom(self.viewport.y);
        }
    }

    /// Screen-space top-left of a level-space box.
    pub fn apply(&self, rect: &Aabb) -> Vec2 {
        rect.position + Vec2::new(self.offset_x, 0.0)
    }
}
