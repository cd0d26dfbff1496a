//! Movement domain: system modules for the player controller.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{advance_player, update_motion_state};
