//! Core domain: camera setup and process exit.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Quit when Escape is pressed. Closing the window is handled by Bevy.
pub(crate) fn exit_on_quit(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}
