//! Content domain: tests for layout parsing and validation.

use super::{
    LEVEL_FILE, LevelLayout, PlatformDef, PlatformKind, Vec2Def, load_level, parse_level,
    sanitize_layout, validate_layout,
};
use crate::core::{BLOCK_SIZE, LEVEL_HEIGHT, LEVEL_WIDTH, asset_root};
use crate::level::LevelBounds;

#[test]
fn test_default_layout_matches_reference_level() {
    let layout = LevelLayout::default();
    assert_eq!(layout.platforms.len(), 11);
    assert_eq!(layout.spawn, Vec2Def { x: 100.0, y: 300.0 });

    let ground = layout.platforms[0];
    assert_eq!(ground.kind, PlatformKind::Ground);
    assert_eq!(ground.y, LEVEL_HEIGHT - BLOCK_SIZE);
    assert_eq!(ground.block_count(), 256);
    assert_eq!(ground.tiled_width(), LEVEL_WIDTH);

    assert!(
        layout.platforms[1..]
            .iter()
            .all(|p| p.kind == PlatformKind::Floating && p.tiled_width() == 200.0)
    );
}

#[test]
fn test_platform_width_rounds_up_to_whole_blocks() {
    let def = PlatformDef::floating(0.0, 0.0, 175.0);
    assert_eq!(def.block_count(), 4);
    assert_eq!(def.tiled_width(), 200.0);

    let rect = def.aabb();
    assert_eq!(rect.size.y, BLOCK_SIZE);
    assert_eq!(rect.right(), 200.0);
}

#[test]
fn test_shipped_level_file_matches_default() {
    let layout = load_level(&asset_root().join(LEVEL_FILE)).expect("level.ron should parse");
    assert_eq!(layout, LevelLayout::default());
}

#[test]
fn test_parse_defaults_platform_kind() {
    let layout = parse_level(
        "(spawn: (x: 10.0, y: 20.0), platforms: [(x: 0.0, y: 100.0, width: 60.0)])",
        "inline",
    )
    .expect("inline layout should parse");

    assert_eq!(layout.platforms[0].kind, PlatformKind::Floating);
    assert_eq!(layout.platforms[0].block_count(), 2);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_level("(spawn: oops", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_level(&asset_root().join("data/does_not_exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_default_layout_is_valid() {
    let errors = validate_layout(&LevelLayout::default(), &LevelBounds::default());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_sanitize_drops_bad_platforms() {
    let mut layout = LevelLayout::default();
    layout.platforms.push(PlatformDef::floating(600.0, 200.0, 0.0));
    layout.platforms.push(PlatformDef::floating(LEVEL_WIDTH - 100.0, 200.0, 200.0));
    layout.platforms.push(PlatformDef::floating(700.0, 100.0, 100.0));

    let (clean, errors) = sanitize_layout(layout, &LevelBounds::default());

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.field == "platforms"));
    assert_eq!(errors[0].index, Some(11));
    assert_eq!(errors[1].index, Some(12));
    assert_eq!(clean.platforms.len(), 12);
    assert_eq!(clean.platforms[11].x, 700.0);
}

#[test]
fn test_sanitize_resets_out_of_bounds_spawn() {
    let layout = LevelLayout {
        spawn: Vec2Def { x: -10.0, y: 300.0 },
        platforms: Vec::new(),
    };

    let (clean, errors) = sanitize_layout(layout, &LevelBounds::default());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "spawn");
    assert_eq!(clean.spawn, LevelLayout::default().spawn);
}
