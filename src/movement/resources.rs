//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::core::{PLAYER_GRAVITY, PLAYER_JUMP_FORCE, PLAYER_SPEED};

/// Velocities are in pixels per tick, times in seconds.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub speed: f32,
    pub gravity: f32,
    /// Base jump force (negative is up). Launch and hold forces scale from it.
    pub jump_force: f32,
    /// Longest time holding jump keeps shaping the ascent
    pub max_jump_hold: f32,
    /// Seconds after a jump before gliding is allowed again
    pub jump_glide_cooldown: f32,
    pub glide_speed: f32,
    pub glide_gravity: f32,
    pub glide_boost: f32,
    /// Fastest upward speed allowed while gliding
    pub max_glide_boost: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            gravity: PLAYER_GRAVITY,
            jump_force: PLAYER_JUMP_FORCE,
            max_jump_hold: 0.3,
            jump_glide_cooldown: 0.2,
            glide_speed: 2.0,
            glide_gravity: 0.05,
            glide_boost: 0.1,
            max_glide_boost: 0.4,
        }
    }
}

impl MovementTuning {
    /// Vertical velocity set on the tick a jump starts.
    pub fn max_jump_force(&self) -> f32 {
        self.jump_force * 0.75
    }

    /// Vertical velocity the hold curve tends to at the end of the hold window.
    pub fn min_jump_force(&self) -> f32 {
        self.jump_force * 0.5
    }

    /// Linear interpolation from max to min force over the hold window.
    pub fn jump_force_at(&self, hold_time: f32) -> f32 {
        let max = self.max_jump_force();
        let min = self.min_jump_force();
        max - (hold_time / self.max_jump_hold) * (max - min)
    }
}

/// Keyboard snapshot taken once per tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub glide: bool,
}
