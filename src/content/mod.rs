//! Content domain: data-driven level layout loaded from RON.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{LevelLayout, PlatformDef, PlatformKind, Vec2Def};
pub use loader::{ContentLoadError, load_level, parse_level};
pub use validation::{ValidationError, sanitize_layout, validate_layout};

use bevy::prelude::*;

use crate::core::asset_root;
use crate::level::LevelBounds;

/// Path of the level layout, relative to the asset root.
pub const LEVEL_FILE: &str = "data/level.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_level_layout);
    }
}

/// Load the layout, falling back to the built-in one if the file is unusable.
fn load_level_layout(mut commands: Commands, bounds: Option<Res<LevelBounds>>) {
    let bounds = bounds.as_deref().copied().unwrap_or_default();

    let layout = match load_level(&asset_root().join(LEVEL_FILE)) {
        Ok(layout) => layout,
        Err(e) => {
            error!("{}", e);
            warn!("Using built-in level layout");
            LevelLayout::default()
        }
    };

    let (layout, problems) = sanitize_layout(layout, &bounds);
    for problem in &problems {
        warn!("Level layout: {}", problem);
    }

    info!(
        "Level layout ready: {} platforms ({} rejected)",
        layout.platforms.len(),
        problems.len()
    );
    commands.insert_resource(layout);
}
