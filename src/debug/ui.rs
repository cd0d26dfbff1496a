//! Debug overlay: the info panel bundle and its text.

use bevy::prelude::*;

use crate::camera::FollowCamera;
use crate::core::Aabb;
use crate::movement::MovementState;

const OVERLAY_MARGIN: f32 = 12.0;
const OVERLAY_FONT_SIZE: f32 = 14.0;

/// Marker for the info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Semi-transparent panel pinned to the top-left, above the level sprites.
pub(crate) fn debug_info_overlay(info: String) -> impl Bundle {
    (
        DebugInfoOverlay,
        Text::new(info),
        TextFont {
            font_size: OVERLAY_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(OVERLAY_MARGIN),
            top: Val::Px(OVERLAY_MARGIN),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.05, 0.1, 0.2, 0.75)),
        ZIndex(100),
    )
}

/// One line per quantity the movement tuning depends on.
pub(crate) fn format_debug_info(
    body: &Aabb,
    velocity: Vec2,
    state: &MovementState,
    camera: &FollowCamera,
) -> String {
    format!(
        "Pos: ({:.0}, {:.0})\nVel: ({:.2}, {:.2})\nState: {:?} facing {:?}\nGround: {} Glide: {} (ready: {})\nJump held: {:.2}s\nCamera: {:.1}",
        body.left(),
        body.top(),
        velocity.x,
        velocity.y,
        state.motion,
        state.facing,
        state.on_ground,
        state.gliding,
        state.can_glide,
        state.jump_hold_time,
        camera.offset_x,
    )
}
