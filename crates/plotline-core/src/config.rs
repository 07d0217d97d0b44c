// File: crates/plotline-core/src/config.rs
// Summary: Typed option tree, cascade resolver and feature order table.
//
// The cascade is asymmetric: a resolved tree holds a value for every field,
// an overlay holds `Option`s, and overlaying prefers the overlay's explicit
// values. Resolution applies two overlay passes (theme over built-in
// defaults, then user options over the result) followed by a style pass that
// completes every named per-series style block from the resolved default
// style.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::DataSet;
use crate::error::ConstructionError;
use crate::render::Feature;
use crate::types::{Color, FontSpec, FontStyle, TextAlign, TextBaseline, TickAlign};

/// How tick marks are classified as major/minor/none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickClassifier {
    /// Alternate by tick ordinal: even ordinals are major, odd are minor.
    IntervalParity,
    /// Derive from the tick label: `#`-prefixed labels are major, other
    /// labels minor, unlabeled ticks are not marked at all.
    LabelMarker,
}

// ---- resolved tree ----------------------------------------------------------

/// Enablement and position of one render feature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub index: u32,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillConfig {
    pub index: u32,
    pub visible: bool,
    /// Close the fill polygon at the padding-expanded baseline instead of
    /// the box bottom.
    pub fill_to_baseline: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisScaleConfig {
    /// Number of intervals between grid steps along this axis.
    pub steps: u32,
    /// Manual domain override; wins over the data-derived bound when set.
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub index: u32,
    pub visible: bool,
    pub x: AxisScaleConfig,
    pub y: AxisScaleConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickConfig {
    pub index: u32,
    pub visible: bool,
    pub x_classifier: TickClassifier,
    pub y_classifier: TickClassifier,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelAxisConfig {
    /// Draw only every `step`-th label along this axis.
    pub step: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub index: u32,
    pub visible: bool,
    pub x: LabelAxisConfig,
    pub y: LabelAxisConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitleConfig {
    pub index: u32,
    pub visible: bool,
    pub x: String,
    pub y: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub stroke: Color,
    pub fill: Color,
    pub radius: f64,
    pub width: f64,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub stroke: Color,
    pub width: f64,
    pub fill: Color,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSideStyle {
    pub visible: bool,
    /// Fixed axes sit at the box edge; floating axes pass through the data
    /// origin.
    pub fixed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub stroke: Color,
    pub width: f64,
    pub visible: bool,
    pub x: AxisSideStyle,
    pub y: AxisSideStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickSideStyle {
    pub fixed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub align: TickAlign,
    pub stroke: Color,
    pub width: f64,
    pub minor: f64,
    pub major: f64,
    pub visible: bool,
    pub x: TickSideStyle,
    pub y: TickSideStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelSideStyle {
    pub font: FontSpec,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub offset_x: f64,
    pub offset_y: f64,
    pub visible: bool,
    pub fixed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub x: LabelSideStyle,
    pub y: LabelSideStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitleSideStyle {
    pub offset_x: f64,
    pub offset_y: f64,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    pub color: Color,
    pub font: FontSpec,
    pub visible: bool,
    pub x: TitleSideStyle,
    pub y: TitleSideStyle,
}

/// Complete per-series style block; every field populated after resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub point: PointStyle,
    pub line: LineStyle,
    pub axis: AxisStyle,
    pub tick: TickStyle,
    pub label: LabelStyle,
    pub title: TitleStyle,
}

/// Default style plus named per-series blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleSet {
    pub default: SeriesStyle,
    #[serde(flatten)]
    pub series: BTreeMap<String, SeriesStyle>,
}

impl StyleSet {
    /// Style for a series key, falling back to the default block.
    pub fn for_series(&self, key: &str) -> &SeriesStyle {
        self.series.get(key).unwrap_or(&self.default)
    }
}

/// The fully merged, conflict-checked configuration tree used by every
/// downstream computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub padding: f64,
    /// Whether the embedding caller should draw immediately after
    /// construction.
    pub render: bool,
    pub fill: FillConfig,
    pub axis: AxisConfig,
    pub tick: TickConfig,
    pub line: FeatureConfig,
    pub point: FeatureConfig,
    pub label: LabelConfig,
    pub title: TitleConfig,
    pub style: StyleSet,
}

// ---- overlay tree -----------------------------------------------------------

macro_rules! pick {
    ($base:expr, $over:expr) => {
        $over.unwrap_or($base)
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureOverlay {
    pub index: Option<u32>,
    pub visible: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillOverlay {
    pub index: Option<u32>,
    pub visible: Option<bool>,
    pub fill_to_baseline: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisScaleOverlay {
    pub steps: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOverlay {
    pub index: Option<u32>,
    pub visible: Option<bool>,
    pub x: AxisScaleOverlay,
    pub y: AxisScaleOverlay,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickOverlay {
    pub index: Option<u32>,
    pub visible: Option<bool>,
    pub x_classifier: Option<TickClassifier>,
    pub y_classifier: Option<TickClassifier>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelAxisOverlay {
    pub step: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverlay {
    pub index: Option<u32>,
    pub visible: Option<bool>,
    pub x: LabelAxisOverlay,
    pub y: LabelAxisOverlay,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleOverlay {
    pub index: Option<u32>,
    pub visible: Option<bool>,
    pub x: Option<String>,
    pub y: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyleOverlay {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub radius: Option<f64>,
    pub width: Option<f64>,
    pub visible: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyleOverlay {
    pub stroke: Option<Color>,
    pub width: Option<f64>,
    pub fill: Option<Color>,
    pub visible: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSideStyleOverlay {
    pub visible: Option<bool>,
    pub fixed: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyleOverlay {
    pub stroke: Option<Color>,
    pub width: Option<f64>,
    pub visible: Option<bool>,
    pub x: AxisSideStyleOverlay,
    pub y: AxisSideStyleOverlay,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickSideStyleOverlay {
    pub fixed: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickStyleOverlay {
    pub align: Option<TickAlign>,
    pub stroke: Option<Color>,
    pub width: Option<f64>,
    pub minor: Option<f64>,
    pub major: Option<f64>,
    pub visible: Option<bool>,
    pub x: TickSideStyleOverlay,
    pub y: TickSideStyleOverlay,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSideStyleOverlay {
    pub font: Option<String>,
    pub font_size: Option<f64>,
    pub font_style: Option<FontStyle>,
    pub color: Option<Color>,
    pub align: Option<TextAlign>,
    pub baseline: Option<TextBaseline>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub visible: Option<bool>,
    pub fixed: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyleOverlay {
    pub x: LabelSideStyleOverlay,
    pub y: LabelSideStyleOverlay,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSideStyleOverlay {
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub visible: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStyleOverlay {
    pub color: Option<Color>,
    pub font: Option<String>,
    pub font_size: Option<f64>,
    pub font_style: Option<FontStyle>,
    pub visible: Option<bool>,
    pub x: TitleSideStyleOverlay,
    pub y: TitleSideStyleOverlay,
}

/// Partial per-series style block as supplied by a user or a theme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesStyleOverlay {
    pub point: PointStyleOverlay,
    pub line: LineStyleOverlay,
    pub axis: AxisStyleOverlay,
    pub tick: TickStyleOverlay,
    pub label: LabelStyleOverlay,
    pub title: TitleStyleOverlay,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverlaySet {
    pub default: SeriesStyleOverlay,
    #[serde(flatten)]
    pub series: BTreeMap<String, SeriesStyleOverlay>,
}

/// Partial configuration tree. Both user options and themes are overlays;
/// an absent field falls through to the layer below.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<f64>,
    pub padding: Option<f64>,
    pub render: Option<bool>,
    pub fill: FillOverlay,
    pub axis: AxisOverlay,
    pub tick: TickOverlay,
    pub line: FeatureOverlay,
    pub point: FeatureOverlay,
    pub label: LabelOverlay,
    pub title: TitleOverlay,
    pub style: StyleOverlaySet,
}

/// Top-level options: a config overlay plus the data to plot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    #[serde(flatten)]
    pub config: ConfigOverlay,
    pub data: Option<DataSet>,
}

// ---- overlay application ----------------------------------------------------

impl FeatureConfig {
    fn overlaid(self, o: &FeatureOverlay) -> Self {
        Self { index: pick!(self.index, o.index), visible: pick!(self.visible, o.visible) }
    }
}

impl FillConfig {
    fn overlaid(self, o: &FillOverlay) -> Self {
        Self {
            index: pick!(self.index, o.index),
            visible: pick!(self.visible, o.visible),
            fill_to_baseline: pick!(self.fill_to_baseline, o.fill_to_baseline),
        }
    }
}

impl AxisScaleConfig {
    fn overlaid(self, o: &AxisScaleOverlay) -> Self {
        Self {
            steps: pick!(self.steps, o.steps),
            min: o.min.or(self.min),
            max: o.max.or(self.max),
        }
    }
}

impl AxisConfig {
    fn overlaid(self, o: &AxisOverlay) -> Self {
        Self {
            index: pick!(self.index, o.index),
            visible: pick!(self.visible, o.visible),
            x: self.x.overlaid(&o.x),
            y: self.y.overlaid(&o.y),
        }
    }
}

impl TickConfig {
    fn overlaid(self, o: &TickOverlay) -> Self {
        Self {
            index: pick!(self.index, o.index),
            visible: pick!(self.visible, o.visible),
            x_classifier: pick!(self.x_classifier, o.x_classifier),
            y_classifier: pick!(self.y_classifier, o.y_classifier),
        }
    }
}

impl LabelConfig {
    fn overlaid(self, o: &LabelOverlay) -> Self {
        Self {
            index: pick!(self.index, o.index),
            visible: pick!(self.visible, o.visible),
            x: LabelAxisConfig { step: pick!(self.x.step, o.x.step) },
            y: LabelAxisConfig { step: pick!(self.y.step, o.y.step) },
        }
    }
}

impl TitleConfig {
    fn overlaid(&self, o: &TitleOverlay) -> Self {
        Self {
            index: pick!(self.index, o.index),
            visible: pick!(self.visible, o.visible),
            x: o.x.clone().unwrap_or_else(|| self.x.clone()),
            y: o.y.clone().unwrap_or_else(|| self.y.clone()),
        }
    }
}

impl PointStyle {
    fn overlaid(self, o: &PointStyleOverlay) -> Self {
        Self {
            stroke: pick!(self.stroke, o.stroke),
            fill: pick!(self.fill, o.fill),
            radius: pick!(self.radius, o.radius),
            width: pick!(self.width, o.width),
            visible: pick!(self.visible, o.visible),
        }
    }
}

impl LineStyle {
    fn overlaid(self, o: &LineStyleOverlay) -> Self {
        Self {
            stroke: pick!(self.stroke, o.stroke),
            width: pick!(self.width, o.width),
            fill: pick!(self.fill, o.fill),
            visible: pick!(self.visible, o.visible),
        }
    }
}

impl AxisStyle {
    fn overlaid(self, o: &AxisStyleOverlay) -> Self {
        Self {
            stroke: pick!(self.stroke, o.stroke),
            width: pick!(self.width, o.width),
            visible: pick!(self.visible, o.visible),
            x: AxisSideStyle {
                visible: pick!(self.x.visible, o.x.visible),
                fixed: pick!(self.x.fixed, o.x.fixed),
            },
            y: AxisSideStyle {
                visible: pick!(self.y.visible, o.y.visible),
                fixed: pick!(self.y.fixed, o.y.fixed),
            },
        }
    }
}

impl TickStyle {
    fn overlaid(self, o: &TickStyleOverlay) -> Self {
        Self {
            align: pick!(self.align, o.align),
            stroke: pick!(self.stroke, o.stroke),
            width: pick!(self.width, o.width),
            minor: pick!(self.minor, o.minor),
            major: pick!(self.major, o.major),
            visible: pick!(self.visible, o.visible),
            x: TickSideStyle { fixed: pick!(self.x.fixed, o.x.fixed) },
            y: TickSideStyle { fixed: pick!(self.y.fixed, o.y.fixed) },
        }
    }
}

impl LabelSideStyle {
    fn overlaid(&self, o: &LabelSideStyleOverlay) -> Self {
        Self {
            font: FontSpec {
                family: o.font.clone().unwrap_or_else(|| self.font.family.clone()),
                size: pick!(self.font.size, o.font_size),
                style: pick!(self.font.style, o.font_style),
            },
            color: pick!(self.color, o.color),
            align: pick!(self.align, o.align),
            baseline: pick!(self.baseline, o.baseline),
            offset_x: pick!(self.offset_x, o.offset_x),
            offset_y: pick!(self.offset_y, o.offset_y),
            visible: pick!(self.visible, o.visible),
            fixed: pick!(self.fixed, o.fixed),
        }
    }
}

impl TitleStyle {
    fn overlaid(&self, o: &TitleStyleOverlay) -> Self {
        Self {
            color: pick!(self.color, o.color),
            font: FontSpec {
                family: o.font.clone().unwrap_or_else(|| self.font.family.clone()),
                size: pick!(self.font.size, o.font_size),
                style: pick!(self.font.style, o.font_style),
            },
            visible: pick!(self.visible, o.visible),
            x: TitleSideStyle {
                offset_x: pick!(self.x.offset_x, o.x.offset_x),
                offset_y: pick!(self.x.offset_y, o.x.offset_y),
                visible: pick!(self.x.visible, o.x.visible),
            },
            y: TitleSideStyle {
                offset_x: pick!(self.y.offset_x, o.y.offset_x),
                offset_y: pick!(self.y.offset_y, o.y.offset_y),
                visible: pick!(self.y.visible, o.y.visible),
            },
        }
    }
}

impl SeriesStyle {
    fn overlaid(&self, o: &SeriesStyleOverlay) -> Self {
        Self {
            point: self.point.overlaid(&o.point),
            line: self.line.overlaid(&o.line),
            axis: self.axis.overlaid(&o.axis),
            tick: self.tick.overlaid(&o.tick),
            label: LabelStyle {
                x: self.label.x.overlaid(&o.label.x),
                y: self.label.y.overlaid(&o.label.y),
            },
            title: self.title.overlaid(&o.title),
        }
    }
}

// ---- resolution -------------------------------------------------------------

impl ResolvedConfig {
    fn overlaid(&self, o: &ConfigOverlay) -> Self {
        Self {
            width: pick!(self.width, o.width),
            height: pick!(self.height, o.height),
            margin: pick!(self.margin, o.margin),
            padding: pick!(self.padding, o.padding),
            render: pick!(self.render, o.render),
            fill: self.fill.overlaid(&o.fill),
            axis: self.axis.overlaid(&o.axis),
            tick: self.tick.overlaid(&o.tick),
            line: self.line.overlaid(&o.line),
            point: self.point.overlaid(&o.point),
            label: self.label.overlaid(&o.label),
            title: self.title.overlaid(&o.title),
            // Style blocks are completed in a dedicated pass below.
            style: self.style.clone(),
        }
    }

    /// Merge defaults, an optional theme and user options into one complete
    /// tree, then validate the feature order table.
    ///
    /// Explicit user values always win over theme values, which win over the
    /// built-in defaults; fields the user never set are filled, never
    /// overwritten.
    pub fn resolve(
        defaults: &ResolvedConfig,
        theme: Option<&ConfigOverlay>,
        options: &ConfigOverlay,
    ) -> Result<ResolvedConfig, ConstructionError> {
        let effective = match theme {
            Some(t) => defaults.overlaid(t),
            None => defaults.clone(),
        };
        let mut resolved = effective.overlaid(options);

        // Default style cascades through theme and options layers first.
        let mut default_style = defaults.style.default.clone();
        if let Some(t) = theme {
            default_style = default_style.overlaid(&t.style.default);
        }
        default_style = default_style.overlaid(&options.style.default);

        // Then every named block starts from the completed default so a
        // partial override still yields a full block.
        let mut series: BTreeMap<String, SeriesStyle> = BTreeMap::new();
        let mut keys: Vec<&String> = options.style.series.keys().collect();
        if let Some(t) = theme {
            keys.extend(t.style.series.keys());
        }
        for key in keys {
            let mut block = default_style.clone();
            if let Some(t) = theme {
                if let Some(o) = t.style.series.get(key) {
                    block = block.overlaid(o);
                }
            }
            if let Some(o) = options.style.series.get(key) {
                block = block.overlaid(o);
            }
            series.insert(key.clone(), block);
        }
        resolved.style = StyleSet { default: default_style, series };

        resolved.feature_order()?;
        Ok(resolved)
    }

    /// Resolved feature draw order, ascending by order index.
    ///
    /// Fails when two features occupy the same index.
    pub fn feature_order(&self) -> Result<Vec<Feature>, ConstructionError> {
        let mut entries: Vec<(u32, Feature)> = Vec::with_capacity(Feature::ALL.len());
        for feature in Feature::ALL {
            let index = self.feature_index(feature);
            if let Some(&(_, prior)) = entries.iter().find(|(i, _)| *i == index) {
                return Err(ConstructionError::IndexCollision { first: prior, second: feature, index });
            }
            entries.push((index, feature));
        }
        entries.sort_by_key(|&(i, _)| i);
        Ok(entries.into_iter().map(|(_, f)| f).collect())
    }

    /// Resolved order index of one feature.
    pub fn feature_index(&self, feature: Feature) -> u32 {
        match feature {
            Feature::Fill => self.fill.index,
            Feature::Axis => self.axis.index,
            Feature::Tick => self.tick.index,
            Feature::Line => self.line.index,
            Feature::Point => self.point.index,
            Feature::Label => self.label.index,
            Feature::Title => self.title.index,
        }
    }

    /// Resolved visibility flag of one feature.
    pub fn feature_visible(&self, feature: Feature) -> bool {
        match feature {
            Feature::Fill => self.fill.visible,
            Feature::Axis => self.axis.visible,
            Feature::Tick => self.tick.visible,
            Feature::Line => self.line.visible,
            Feature::Point => self.point.visible,
            Feature::Label => self.label.visible,
            Feature::Title => self.title.visible,
        }
    }

    /// Express this resolved tree as a fully-populated overlay. Resolving
    /// the result against any lower layers reproduces this tree.
    pub fn to_overlay(&self) -> ConfigOverlay {
        ConfigOverlay {
            width: Some(self.width),
            height: Some(self.height),
            margin: Some(self.margin),
            padding: Some(self.padding),
            render: Some(self.render),
            fill: FillOverlay {
                index: Some(self.fill.index),
                visible: Some(self.fill.visible),
                fill_to_baseline: Some(self.fill.fill_to_baseline),
            },
            axis: AxisOverlay {
                index: Some(self.axis.index),
                visible: Some(self.axis.visible),
                x: AxisScaleOverlay { steps: Some(self.axis.x.steps), min: self.axis.x.min, max: self.axis.x.max },
                y: AxisScaleOverlay { steps: Some(self.axis.y.steps), min: self.axis.y.min, max: self.axis.y.max },
            },
            tick: TickOverlay {
                index: Some(self.tick.index),
                visible: Some(self.tick.visible),
                x_classifier: Some(self.tick.x_classifier),
                y_classifier: Some(self.tick.y_classifier),
            },
            line: FeatureOverlay { index: Some(self.line.index), visible: Some(self.line.visible) },
            point: FeatureOverlay { index: Some(self.point.index), visible: Some(self.point.visible) },
            label: LabelOverlay {
                index: Some(self.label.index),
                visible: Some(self.label.visible),
                x: LabelAxisOverlay { step: Some(self.label.x.step) },
                y: LabelAxisOverlay { step: Some(self.label.y.step) },
            },
            title: TitleOverlay {
                index: Some(self.title.index),
                visible: Some(self.title.visible),
                x: Some(self.title.x.clone()),
                y: Some(self.title.y.clone()),
            },
            style: StyleOverlaySet {
                default: self.style.default.to_overlay(),
                series: self.style.series.iter().map(|(k, v)| (k.clone(), v.to_overlay())).collect(),
            },
        }
    }
}

impl SeriesStyle {
    fn to_overlay(&self) -> SeriesStyleOverlay {
        SeriesStyleOverlay {
            point: PointStyleOverlay {
                stroke: Some(self.point.stroke),
                fill: Some(self.point.fill),
                radius: Some(self.point.radius),
                width: Some(self.point.width),
                visible: Some(self.point.visible),
            },
            line: LineStyleOverlay {
                stroke: Some(self.line.stroke),
                width: Some(self.line.width),
                fill: Some(self.line.fill),
                visible: Some(self.line.visible),
            },
            axis: AxisStyleOverlay {
                stroke: Some(self.axis.stroke),
                width: Some(self.axis.width),
                visible: Some(self.axis.visible),
                x: AxisSideStyleOverlay { visible: Some(self.axis.x.visible), fixed: Some(self.axis.x.fixed) },
                y: AxisSideStyleOverlay { visible: Some(self.axis.y.visible), fixed: Some(self.axis.y.fixed) },
            },
            tick: TickStyleOverlay {
                align: Some(self.tick.align),
                stroke: Some(self.tick.stroke),
                width: Some(self.tick.width),
                minor: Some(self.tick.minor),
                major: Some(self.tick.major),
                visible: Some(self.tick.visible),
                x: TickSideStyleOverlay { fixed: Some(self.tick.x.fixed) },
                y: TickSideStyleOverlay { fixed: Some(self.tick.y.fixed) },
            },
            label: LabelStyleOverlay {
                x: self.label.x.to_overlay(),
                y: self.label.y.to_overlay(),
            },
            title: TitleStyleOverlay {
                color: Some(self.title.color),
                font: Some(self.title.font.family.clone()),
                font_size: Some(self.title.font.size),
                font_style: Some(self.title.font.style),
                visible: Some(self.title.visible),
                x: TitleSideStyleOverlay {
                    offset_x: Some(self.title.x.offset_x),
                    offset_y: Some(self.title.x.offset_y),
                    visible: Some(self.title.x.visible),
                },
                y: TitleSideStyleOverlay {
                    offset_x: Some(self.title.y.offset_x),
                    offset_y: Some(self.title.y.offset_y),
                    visible: Some(self.title.y.visible),
                },
            },
        }
    }
}

impl LabelSideStyle {
    fn to_overlay(&self) -> LabelSideStyleOverlay {
        LabelSideStyleOverlay {
            font: Some(self.font.family.clone()),
            font_size: Some(self.font.size),
            font_style: Some(self.font.style),
            color: Some(self.color),
            align: Some(self.align),
            baseline: Some(self.baseline),
            offset_x: Some(self.offset_x),
            offset_y: Some(self.offset_y),
            visible: Some(self.visible),
            fixed: Some(self.fixed),
        }
    }
}
