//! Data definitions for the RON level layout.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Aabb, BLOCK_SIZE, LEVEL_HEIGHT, LEVEL_WIDTH};

/// Serializable Vec2 for RON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
pub enum PlatformKind {
    Ground,
    #[default]
    Floating,
}

/// One platform: top-left corner plus requested width. The built platform
/// is rounded up to whole blocks and is always one block tall.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    #[serde(default)]
    pub kind: PlatformKind,
}

impl PlatformDef {
    pub fn floating(x: f32, y: f32, width: f32) -> Self {
        Self {
            x,
            y,
            width,
            kind: PlatformKind::Floating,
        }
    }

    pub fn block_count(&self) -> u32 {
        (self.width / BLOCK_SIZE).ceil().max(0.0) as u32
    }

    pub fn tiled_width(&self) -> f32 {
        self.block_count() as f32 * BLOCK_SIZE
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.tiled_width(), BLOCK_SIZE),
        )
    }
}

/// Level layout resource. Loaded from `assets/data/level.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelLayout {
    /// Player top-left at level start
    pub spawn: Vec2Def,
    pub platforms: Vec<PlatformDef>,
}

impl Default for LevelLayout {
    /// Ground across the whole level plus ten floating platforms.
    fn default() -> Self {
        let mut platforms = vec![PlatformDef {
            x: 0.0,
            y: LEVEL_HEIGHT - BLOCK_SIZE,
            width: LEVEL_WIDTH,
            kind: PlatformKind::Ground,
        }];

        let floating = [
            (500.0, 500.0),
            (1000.0, 400.0),
            (1500.0, 300.0),
            (2000.0, 500.0),
            (2500.0, 400.0),
            (3000.0, 300.0),
            (3500.0, 500.0),
            (4000.0, 400.0),
            (4500.0, 300.0),
            (5000.0, 500.0),
        ];
        platforms.extend(
            floating
                .iter()
                .map(|&(x, y)| PlatformDef::floating(x, y, 200.0)),
        );

        Self {
            spawn: Vec2Def { x: 100.0, y: 300.0 },
            platforms,
        }
    }
}
