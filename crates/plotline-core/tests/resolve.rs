// File: crates/plotline-core/tests/resolve.rs
// Purpose: Validate the configuration cascade: layering, style inheritance,
// idempotence and order-index conflicts.

use plotline_core::config::{ConfigOverlay, LineStyleOverlay, ResolvedConfig, SeriesStyleOverlay};
use plotline_core::error::ConstructionError;
use plotline_core::theme;
use plotline_core::types::Color;

use proptest::prelude::*;

#[test]
fn defaults_fill_gaps_without_overwriting() {
    let mut options = ConfigOverlay::default();
    options.margin = Some(12.0);

    let resolved = ResolvedConfig::resolve(&theme::defaults(), None, &options).unwrap();
    assert_eq!(resolved.margin, 12.0);
    // Untouched fields come straight from the defaults table.
    assert_eq!(resolved.width, 640.0);
    assert_eq!(resolved.height, 400.0);
    assert_eq!(resolved.padding, 20.0);
    assert_eq!(resolved.axis.y.steps, 10);
}

#[test]
fn options_win_over_theme_which_wins_over_defaults() {
    let mut theme_overlay = ConfigOverlay::default();
    theme_overlay.margin = Some(30.0);
    theme_overlay.padding = Some(0.0);

    let mut options = ConfigOverlay::default();
    options.margin = Some(5.0);

    let resolved =
        ResolvedConfig::resolve(&theme::defaults(), Some(&theme_overlay), &options).unwrap();
    // Explicit option beats the theme.
    assert_eq!(resolved.margin, 5.0);
    // Theme beats the defaults where the options are silent.
    assert_eq!(resolved.padding, 0.0);
}

#[test]
fn partial_series_style_inherits_every_default_field() {
    let mut options = ConfigOverlay::default();
    options.style.series.insert(
        "y1".into(),
        SeriesStyleOverlay {
            line: LineStyleOverlay { stroke: Some(Color::rgb(0xff, 0x00, 0x00)), ..Default::default() },
            ..Default::default()
        },
    );

    let resolved = ResolvedConfig::resolve(&theme::defaults(), None, &options).unwrap();
    let y1 = &resolved.style.series["y1"];
    let default = &resolved.style.default;

    assert_eq!(y1.line.stroke, Color::rgb(0xff, 0x00, 0x00));
    // Every other line field is untouched.
    assert_eq!(y1.line.width, default.line.width);
    assert_eq!(y1.line.fill, default.line.fill);
    assert_eq!(y1.line.visible, default.line.visible);
    // Sibling blocks are complete too.
    assert_eq!(y1.point, default.point);
    assert_eq!(y1.tick, default.tick);
    assert_eq!(y1.label, default.label);
}

#[test]
fn modern_theme_style_cascades_into_series_blocks() {
    let mut options = ConfigOverlay::default();
    options.style.series.insert("y".into(), SeriesStyleOverlay::default());

    let modern = theme::modern();
    let resolved = ResolvedConfig::resolve(&theme::defaults(), Some(&modern), &options).unwrap();
    // The theme hid points in its default style; named blocks inherit that.
    assert!(!resolved.style.series["y"].point.visible);
    assert_eq!(resolved.style.series["y"].line.stroke, Color::rgb(0xe6, 0x47, 0x42));
}

#[test]
fn built_in_themes_are_found_by_name() {
    let names: Vec<&str> = theme::presets().iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["modern"]);
    assert_eq!(theme::find("modern"), Some(theme::modern()));
    assert_eq!(theme::find("MODERN"), Some(theme::modern()));
    assert_eq!(theme::find("brutalist"), None);
}

#[test]
fn index_collision_is_fatal() {
    let mut options = ConfigOverlay::default();
    // Fill already owns index 0 in the defaults.
    options.line.index = Some(0);

    let err = ResolvedConfig::resolve(&theme::defaults(), None, &options).unwrap_err();
    assert!(matches!(err, ConstructionError::IndexCollision { index: 0, .. }));
}

#[test]
fn resolve_is_idempotent() {
    let mut options = ConfigOverlay::default();
    options.width = Some(800.0);
    options.style.series.insert(
        "y2".into(),
        SeriesStyleOverlay {
            line: LineStyleOverlay { width: Some(1.0), ..Default::default() },
            ..Default::default()
        },
    );

    let resolved = ResolvedConfig::resolve(&theme::defaults(), None, &options).unwrap();
    let again = ResolvedConfig::resolve(&resolved, None, &resolved.to_overlay()).unwrap();
    assert_eq!(resolved, again);
}

proptest! {
    #[test]
    fn resolve_is_idempotent_for_any_dimensions(
        width in 1.0f64..4096.0,
        height in 1.0f64..4096.0,
        margin in 0.0f64..100.0,
        padding in 0.0f64..100.0,
    ) {
        let mut options = ConfigOverlay::default();
        options.width = Some(width);
        options.height = Some(height);
        options.margin = Some(margin);
        options.padding = Some(padding);

        let resolved = ResolvedConfig::resolve(&theme::defaults(), None, &options).unwrap();
        let again = ResolvedConfig::resolve(&resolved, None, &resolved.to_overlay()).unwrap();
        prop_assert_eq!(resolved, again);
    }

    #[test]
    fn explicit_option_always_beats_theme(theme_margin in 0.0f64..100.0, opt_margin in 0.0f64..100.0) {
        let mut t = ConfigOverlay::default();
        t.margin = Some(theme_margin);
        let mut o = ConfigOverlay::default();
        o.margin = Some(opt_margin);
        let resolved = ResolvedConfig::resolve(&theme::defaults(), Some(&t), &o).unwrap();
        prop_assert_eq!(resolved.margin, opt_margin);
    }
}
