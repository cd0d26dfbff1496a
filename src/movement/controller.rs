//! Movement domain: player controller and gravity/glide integration.
//!
//! These are plain functions over the player's components so they can run
//! inside the fixed-tick systems and in unit tests alike. `dt` is the fixed
//! timestep in seconds; velocities stay in pixels per tick.

use bevy::prelude::*;

use crate::core::Aabb;
use crate::movement::{Facing, MovementInput, MovementState, MovementTuning};

/// Decay the jump/glide cooldown. Gliding is re-armed only once the cooldown
/// has run out and the player has stopped rising.
pub fn advance_timers(state: &mut MovementState, velocity: Vec2, dt: f32) {
    if state.can_glide {
        return;
    }

    state.jump_cooldown -= dt;
    if state.jump_cooldown <= 0.0 && velocity.y >= 0.0 {
        state.can_glide = true;
    }
}

/// Start a jump at full launch force. Cancels any glide.
pub fn jump(state: &mut MovementState, velocity: &mut Vec2, tuning: &MovementTuning) {
    velocity.y = tuning.max_jump_force();
    state.gliding = false;
    state.can_glide = false;
    state.jump_cooldown = tuning.jump_glide_cooldown;
}

/// Apply one tick of input. Returns true when a jump started this tick.
pub fn handle_input(
    state: &mut MovementState,
    velocity: &mut Vec2,
    input: &MovementInput,
    tuning: &MovementTuning,
    dt: f32,
) -> bool {
    // Right is checked first and wins when both are held
    if input.right {
        velocity.x = tuning.speed;
        state.facing = Facing::Right;
    } else if input.left {
        velocity.x = -tuning.speed;
        state.facing = Facing::Left;
    } else {
        velocity.x = 0.0;
    }

    let mut jumped = false;
    if input.jump {
        if !state.jump_held && state.on_ground {
            jump(state, velocity, tuning);
            state.jump_held = true;
            state.jump_hold_time = 0.0;
            jumped = true;
        } else if state.jump_held && !state.on_ground {
            state.jump_hold_time += dt;
            if state.jump_hold_time < tuning.max_jump_hold {
                velocity.y = tuning.jump_force_at(state.jump_hold_time);
            }
        }
    } else {
        state.jump_held = false;
        state.jump_hold_time = 0.0;
    }

    state.gliding = input.glide && !state.on_ground && state.can_glide;

    jumped
}

/// Integrate vertical velocity into the body's position.
///
/// Horizontal displacement is applied by the collision resolver before this
/// runs, so the glide speed written here only lasts until the next input.
pub fn apply_gravity(
    body: &mut Aabb,
    velocity: &mut Vec2,
    state: &MovementState,
    tuning: &MovementTuning,
) {
    if state.gliding {
        if velocity.y < 0.0 {
            velocity.y = (velocity.y + tuning.glide_boost).max(-tuning.max_glide_boost);
        } else {
            velocity.y += tuning.glide_gravity;
        }

        velocity.x = state.facing.sign() * tuning.glide_speed;
    } else {
        velocity.y += tuning.gravity;
    }

    body.position.y += velocity.y;
}
