//! Level domain: fixed-tick collision system.

use bevy::prelude::*;

use crate::core::Body;
use crate::level::collision::resolve;
use crate::level::{LevelBounds, Platform};
use crate::movement::{MovementState, MovementTuning, Player, Velocity};
use crate::sprites::DrawOrder;

pub(crate) fn resolve_player_movement(
    tuning: Res<MovementTuning>,
    bounds: Res<LevelBounds>,
    platforms: Query<(&DrawOrder, &Body), (With<Platform>, Without<Player>)>,
    mut players: Query<(&mut Body, &mut Velocity, &mut MovementState), With<Player>>,
) {
    // Resolve in registration order so overlapping platforms behave the same every run
    let mut solids: Vec<(&DrawOrder, &Body)> = platforms.iter().collect();
    solids.sort_by_key(|(order, _)| **order);

    for (mut body, mut velocity, mut state) in &mut players {
        let was_on_ground = state.on_ground;

        resolve(
            &mut body,
            &mut velocity.0,
            &mut state,
            &tuning,
            solids.iter().map(|(_, solid)| &solid.0),
            &bounds,
        );

        if state.on_ground && !was_on_ground {
            debug!("Landed at ({:.1}, {:.1})", body.left(), body.top());
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground at ({:.1}, {:.1})", body.left(), body.top());
        }
    }
}
