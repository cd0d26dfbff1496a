//! Core domain: axis-aligned boxes in level space.
//!
//! Level space has its origin at the top-left of the level and y grows
//! downward. Every simulated entity carries a [`Body`]; rendering converts
//! to Bevy's world space only at the very end of a frame.

use bevy::prelude::*;

/// Axis-aligned bounding box stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub position: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn set_left(&mut self, left: f32) {
        self.position.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.position.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: f32) {
        self.position.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.position.y = bottom - self.size.y;
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.overlaps_horizontally(other)
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

/// Level-space bounding box of a simulated entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Deref, DerefMut)]
pub struct Body(pub Aabb);

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self(Aabb::new(position, size))
    }
}
