//! Core domain: shared geometry, constants and app-wide setup.

pub mod geometry;
pub mod settings;
mod systems;


pub use geometry::{Aabb, Body};
pub use settings::*;

use bevy::prelude::*;

use crate::core::systems::{exit_on_quit, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_COLOR))
            .insert_resource(Time::<Fixed>::from_hz(FPS))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, exit_on_quit);
    }
}
