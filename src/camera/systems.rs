//! Camera domain: fixed-tick follow system.

use bevy::prelude::*;

use crate::camera::{CameraTarget, FollowCamera};
use crate::core::Body;

pub(crate) fn update_follow_camera(
    mut camera: ResMut<FollowCamera>,
    mut targets: Query<&mut Body, With<CameraTarget>>,
) {
    let Ok(mut body) = targets.single_mut() else {
        return;
    };

    camera.update(&mut body);
}
