//! Camera domain: follow camera resource and its update system.

mod follow;
mod systems;


pub use follow::{CAMERA_SMOOTH_SPEED, FollowCamera};

use bevy::prelude::*;

use crate::camera::systems::update_follow_camera;
use crate::level::TickSet;

/// Marker for the entity the camera follows
#[derive(Component, Debug)]
pub struct CameraTarget;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FollowCamera>()
            .add_systems(FixedUpdate, update_follow_camera.in_set(TickSet::Camera));
    }
}
