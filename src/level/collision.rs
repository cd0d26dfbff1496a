//! Level domain: collision resolution against level bounds and platforms.
//!
//! One call to [`resolve`] is one tick of player motion. The order of the
//! phases is part of the game feel and must not be rearranged: horizontal
//! move and clamp first, then gravity, then vertical clamp, then platforms.

use bevy::prelude::*;

use crate::core::Aabb;
use crate::level::LevelBounds;
use crate::movement::controller::apply_gravity;
use crate::movement::{MovementState, MovementTuning};

/// Horizontal motion is applied whether or not the player is grounded.
pub fn move_horizontal(body: &mut Aabb, velocity: Vec2) {
    body.position.x += velocity.x;
}

pub fn clamp_horizontal(body: &mut Aabb, bounds: &LevelBounds) {
    if body.left() < 0.0 {
        body.set_left(0.0);
    }
    if body.right() > bounds.width {
        body.set_right(bounds.width);
    }
}

/// Keep the box inside the level vertically. Returns true when the box was
/// pushed back up off the level floor.
pub fn clamp_vertical(
    body: &mut Aabb,
    velocity: &mut Vec2,
    state: &mut MovementState,
    bounds: &LevelBounds,
) -> bool {
    if body.top() < 0.0 {
        body.set_top(0.0);
        velocity.y = 0.0;
    }
    if body.bottom() > bounds.height {
        body.set_bottom(bounds.height);
        velocity.y = 0.0;
        state.on_ground = true;
        return true;
    }
    false
}

/// Snap the box out of every overlapping platform, in iteration order.
///
/// Ground contact is recomputed from scratch. Later platforms see the box
/// as left by earlier ones, so the first snap usually wins once velocity
/// has been zeroed.
pub fn resolve_platforms<'a>(
    body: &mut Aabb,
    velocity: &mut Vec2,
    state: &mut MovementState,
    platforms: impl IntoIterator<Item = &'a Aabb>,
) {
    state.on_ground = false;

    for platform in platforms {
        if !platform.intersects(body) {
            continue;
        }

        if velocity.y > 0.0 {
            // Landing on top
            body.set_bottom(platform.top());
            velocity.y = 0.0;
            state.on_ground = true;
        } else if velocity.y < 0.0 {
            // Head hit the underside
            body.set_top(platform.bottom());
            velocity.y = 0.0;
        }

        if body.bottom() == platform.top() && body.overlaps_horizontally(platform) {
            state.on_ground = true;
        }
    }
}

/// Run one full tick of motion and collision for the player.
pub fn resolve<'a>(
    body: &mut Aabb,
    velocity: &mut Vec2,
    state: &mut MovementState,
    tuning: &MovementTuning,
    platforms: impl IntoIterator<Item = &'a Aabb>,
    bounds: &LevelBounds,
) {
    move_horizontal(body, *velocity);
    clamp_horizontal(body, bounds);

    apply_gravity(body, velocity, state, tuning);
    let on_floor = clamp_vertical(body, velocity, state, bounds);

    resolve_platforms(body, velocity, state, platforms);

    // The level floor is solid even where no platform covers it
    if on_floor {
        state.on_ground = true;
    }
}
