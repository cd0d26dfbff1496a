//! Movement domain: fixed-tick controller systems.

use bevy::prelude::*;

use crate::movement::controller::{advance_timers, handle_input};
use crate::movement::{MovementInput, MovementState, MovementTuning, Player, Velocity};

pub(crate) fn advance_player(
    time: Res<Time<Fixed>>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut Velocity), With<Player>>,
) {
    let dt = time.timestep().as_secs_f32();

    for (mut state, mut velocity) in &mut query {
        advance_timers(&mut state, velocity.0, dt);

        if handle_input(&mut state, &mut velocity.0, &input, &tuning, dt) {
            debug!("Jump: vy={:.3}, glide locked", velocity.y);
        }
    }
}

/// Reclassify the state machine after collisions and log transitions.
pub(crate) fn update_motion_state(
    mut query: Query<(&mut MovementState, &Velocity), With<Player>>,
) {
    for (mut state, velocity) in &mut query {
        let next = state.classify(velocity.0);
        if next != state.motion {
            debug!("Motion: {:?} -> {:?}", state.motion, next);
            state.motion = next;
        }
    }
}
