//! Movement domain: player input, jump/glide state machine and gravity.

mod components;
pub mod controller;
mod resources;
mod systems;


pub use components::{Facing, MotionState, MovementState, Player, Velocity};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::level::TickSet;
use crate::movement::systems::{advance_player, read_input, update_motion_state};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(FixedUpdate, read_input.in_set(TickSet::Input))
            .add_systems(FixedUpdate, advance_player.in_set(TickSet::Control))
            .add_systems(
                FixedUpdate,
                update_motion_state
                    .after(TickSet::Collision)
                    .before(TickSet::Camera),
            );
    }
}
