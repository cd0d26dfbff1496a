//! Movement domain: input sampling for the player controller.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    *input = MovementInput {
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
        jump: keyboard.pressed(KeyCode::KeyZ),
        glide: keyboard.pressed(KeyCode::KeyG),
    };
}
