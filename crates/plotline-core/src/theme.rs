// File: crates/plotline-core/src/theme.rs
// Summary: Built-in theme data tables (default tree and named overlays).

use crate::config::{
    AxisConfig, AxisOverlay, AxisScaleConfig, AxisScaleOverlay, AxisSideStyle, AxisStyle,
    AxisStyleOverlay, ConfigOverlay, FeatureConfig, FillConfig, LabelAxisConfig, LabelConfig,
    LabelSideStyle, LabelSideStyleOverlay, LabelStyle, LabelStyleOverlay, LineStyle,
    LineStyleOverlay, PointStyle, PointStyleOverlay, ResolvedConfig, SeriesStyle,
    SeriesStyleOverlay, StyleOverlaySet, StyleSet, TickClassifier, TickConfig, TickSideStyle,
    TickStyle, TickStyleOverlay, TitleConfig, TitleSideStyle, TitleStyle, TitleStyleOverlay,
};
use crate::types::{Color, FontSpec, FontStyle, TextAlign, TextBaseline, TickAlign};

/// The built-in fully-populated defaults tree. Every resolution starts here,
/// so every field of [`ResolvedConfig`] is guaranteed present downstream.
pub fn defaults() -> ResolvedConfig {
    ResolvedConfig {
        width: crate::types::WIDTH,
        height: crate::types::HEIGHT,
        margin: 70.0,
        padding: 20.0,
        render: true,
        fill: FillConfig { index: 0, visible: true, fill_to_baseline: true },
        axis: AxisConfig {
            index: 1,
            visible: true,
            x: AxisScaleConfig { steps: 5, min: None, max: None },
            y: AxisScaleConfig { steps: 10, min: None, max: None },
        },
        tick: TickConfig {
            index: 2,
            visible: true,
            x_classifier: TickClassifier::LabelMarker,
            y_classifier: TickClassifier::IntervalParity,
        },
        line: FeatureConfig { index: 3, visible: true },
        point: FeatureConfig { index: 4, visible: true },
        label: LabelConfig {
            index: 5,
            visible: true,
            x: LabelAxisConfig { step: 1 },
            y: LabelAxisConfig { step: 1 },
        },
        title: TitleConfig { index: 6, visible: true, x: "x".into(), y: "y".into() },
        style: StyleSet { default: default_style(), series: Default::default() },
    }
}

fn default_style() -> SeriesStyle {
    SeriesStyle {
        point: PointStyle {
            stroke: Color::rgb(0x00, 0x00, 0x00),
            fill: Color::rgb(0xff, 0xff, 0xff),
            radius: 4.0,
            width: 3.0,
            visible: true,
        },
        line: LineStyle {
            stroke: Color::rgb(0x29, 0x82, 0x81),
            width: 3.0,
            fill: Color::rgba(150, 215, 226, 102),
            visible: true,
        },
        axis: AxisStyle {
            stroke: Color::rgb(0xdd, 0xdd, 0xdd),
            width: 3.0,
            visible: true,
            x: AxisSideStyle { visible: true, fixed: true },
            y: AxisSideStyle { visible: true, fixed: true },
        },
        tick: TickStyle {
            align: TickAlign::Middle,
            stroke: Color::rgb(0xdd, 0xdd, 0xdd),
            width: 2.0,
            minor: 10.0,
            major: 15.0,
            visible: true,
            x: TickSideStyle { fixed: true },
            y: TickSideStyle { fixed: true },
        },
        label: LabelStyle {
            x: LabelSideStyle {
                font: FontSpec::new("Helvetica", 14.0),
                color: Color::rgb(0x00, 0x00, 0x00),
                align: TextAlign::Center,
                baseline: TextBaseline::Bottom,
                offset_x: 3.0,
                offset_y: 8.0,
                visible: true,
                fixed: true,
            },
            y: LabelSideStyle {
                font: FontSpec::new("Helvetica", 10.0),
                color: Color::rgb(0x00, 0x00, 0x00),
                align: TextAlign::Center,
                baseline: TextBaseline::Bottom,
                offset_x: 8.0,
                offset_y: 8.0,
                visible: true,
                fixed: true,
            },
        },
        title: TitleStyle {
            color: Color::rgb(0x77, 0x77, 0x77),
            font: FontSpec { family: "georgia".into(), size: 16.0, style: FontStyle::Italic },
            visible: true,
            x: TitleSideStyle { offset_x: 0.0, offset_y: 120.0, visible: true },
            y: TitleSideStyle { offset_x: -135.0, offset_y: 10.0, visible: true },
        },
    }
}

/// The "modern" theme: flat strokes, hidden points, no padding.
pub fn modern() -> ConfigOverlay {
    ConfigOverlay {
        width: Some(640.0),
        height: Some(400.0),
        margin: Some(70.0),
        padding: Some(0.0),
        render: Some(true),
        axis: AxisOverlay {
            x: AxisScaleOverlay { steps: Some(5), ..Default::default() },
            y: AxisScaleOverlay { steps: Some(5), ..Default::default() },
            ..Default::default()
        },
        style: StyleOverlaySet {
            default: SeriesStyleOverlay {
                point: PointStyleOverlay { visible: Some(false), ..Default::default() },
                line: LineStyleOverlay {
                    stroke: Some(Color::rgb(0xe6, 0x47, 0x42)),
                    width: Some(2.0),
                    visible: Some(true),
                    ..Default::default()
                },
                axis: AxisStyleOverlay {
                    stroke: Some(Color::rgb(0xcc, 0xcc, 0xcc)),
                    width: Some(1.0),
                    ..Default::default()
                },
                tick: TickStyleOverlay {
                    align: Some(TickAlign::Outside),
                    stroke: Some(Color::rgb(0xcc, 0xcc, 0xcc)),
                    width: Some(1.0),
                    minor: Some(4.0),
                    major: Some(8.0),
                    ..Default::default()
                },
                label: LabelStyleOverlay {
                    x: LabelSideStyleOverlay {
                        font: Some("Helvetica".into()),
                        font_size: Some(12.0),
                        color: Some(Color::rgb(0x7f, 0x7f, 0x7f)),
                        offset_x: Some(3.0),
                        offset_y: Some(20.0),
                        ..Default::default()
                    },
                    y: LabelSideStyleOverlay {
                        font: Some("Helvetica".into()),
                        font_size: Some(12.0),
                        color: Some(Color::rgb(0x7f, 0x7f, 0x7f)),
                        offset_x: Some(12.0),
                        offset_y: Some(8.0),
                        ..Default::default()
                    },
                },
                title: TitleStyleOverlay { visible: Some(false), ..Default::default() },
            },
            series: Default::default(),
        },
        ..Default::default()
    }
}

/// Return the list of built-in theme overlays.
pub fn presets() -> Vec<(&'static str, ConfigOverlay)> {
    vec![("modern", modern())]
}

/// Find a built-in theme overlay by name.
pub fn find(name: &str) -> Option<ConfigOverlay> {
    presets().into_iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, t)| t)
}
