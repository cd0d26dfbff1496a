//! Movement domain: player components and the kinematic state machine.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Displacement per tick in level space (y grows downward).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    pub gliding: bool,
    pub can_glide: bool,
    pub jump_held: bool,
    pub jump_hold_time: f32,
    /// Seconds left before gliding can be re-enabled after a jump
    pub jump_cooldown: f32,
    /// Motion state classified at the end of the last tick
    pub motion: MotionState,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            on_ground: false,
            facing: Facing::Right,
            gliding: false,
            can_glide: true,
            jump_held: false,
            jump_hold_time: 0.0,
            jump_cooldown: 0.0,
            motion: MotionState::Falling,
        }
    }
}

impl MovementState {
    /// Derive the state machine node from the flags and vertical velocity.
    pub fn classify(&self, velocity: Vec2) -> MotionState {
        if self.on_ground {
            MotionState::Grounded
        } else if self.gliding {
            MotionState::Gliding
        } else if velocity.y < 0.0 {
            MotionState::Jumping
        } else {
            MotionState::Falling
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    Grounded,
    Jumping,
    Gliding,
    #[default]
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}
