//! Validation of a loaded level layout against the level bounds.

use bevy::prelude::*;

use super::data::LevelLayout;
use crate::core::{Aabb, PLAYER_SIZE};
use crate::level::LevelBounds;

/// A validation problem with context about which entry failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub index: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]: {}", self.field, i, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

fn check_rect(rect: &Aabb, bounds: &LevelBounds) -> Option<String> {
    let finite = rect.position.is_finite() && rect.size.is_finite();
    if !finite {
        return Some("non-finite coordinates".to_string());
    }
    if !bounds.contains(rect) {
        return Some(format!(
            "box ({}, {}) {}x{} lies outside the {}x{} level",
            rect.left(),
            rect.top(),
            rect.size.x,
            rect.size.y,
            bounds.width,
            bounds.height
        ));
    }
    None
}

/// Collect every problem in the layout without modifying it.
pub fn validate_layout(layout: &LevelLayout, bounds: &LevelBounds) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let spawn = Aabb::new(Vec2::from(layout.spawn), PLAYER_SIZE);
    if let Some(message) = check_rect(&spawn, bounds) {
        errors.push(ValidationError {
            field: "spawn",
            index: None,
            message,
        });
    }

    for (i, def) in layout.platforms.iter().enumerate() {
        if def.width.is_nan() || def.width <= 0.0 {
            errors.push(ValidationError {
                field: "platforms",
                index: Some(i),
                message: format!("width must be positive, got {}", def.width),
            });
            continue;
        }
        if let Some(message) = check_rect(&def.aabb(), bounds) {
            errors.push(ValidationError {
                field: "platforms",
                index: Some(i),
                message,
            });
        }
    }

    errors
}

/// Drop invalid platforms and reset an invalid spawn point to the default.
/// Returns the cleaned layout and the problems that were fixed.
pub fn sanitize_layout(
    mut layout: LevelLayout,
    bounds: &LevelBounds,
) -> (LevelLayout, Vec<ValidationError>) {
    let errors = validate_layout(&layout, bounds);

    if errors.iter().any(|e| e.field == "spawn") {
        layout.spawn = LevelLayout::default().spawn;
    }

    let rejected: Vec<usize> = errors
        .iter()
        .filter(|e| e.field == "platforms")
        .filter_map(|e| e.index)
        .collect();
    let mut index = 0;
    layout.platforms.retain(|_| {
        let keep = !rejected.contains(&index);
        index += 1;
        keep
    });

    (layout, errors)
}
