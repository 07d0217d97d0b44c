// File: crates/plotline-core/src/render.rs
// Summary: Render dispatch: feature order walk, renderer registry, and the
// built-in per-feature renderers driving the drawing backend.

use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::config::{ResolvedConfig, SeriesStyle, TickClassifier};
use crate::data::DataSet;
use crate::error::DispatchError;
use crate::layout::{AxisGeometry, PlotBox};
use crate::project::{ProjectedPoint, Projection};
use crate::range::Domain;
use crate::types::{AxisKind, Color, FontSpec, TextAlign, TextBaseline, TickAlign};

/// The seven drawable features, in declaration order (draw order comes from
/// the resolved index table instead).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Fill,
    Axis,
    Tick,
    Line,
    Point,
    Label,
    Title,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Fill,
        Feature::Axis,
        Feature::Tick,
        Feature::Line,
        Feature::Point,
        Feature::Label,
        Feature::Title,
    ];
}

/// Major/minor classification of one tick mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickClass {
    Major,
    Minor,
    /// Not marked at all (an unlabeled tick under the label-marker policy).
    None,
}

/// Classify a tick by ordinal and label under the selected policy.
pub fn classify_tick(policy: TickClassifier, ordinal: usize, label: Option<&str>) -> TickClass {
    match policy {
        TickClassifier::IntervalParity => {
            if ordinal % 2 == 0 {
                TickClass::Major
            } else {
                TickClass::Minor
            }
        }
        TickClassifier::LabelMarker => match label {
            None => TickClass::None,
            Some(s) if s.starts_with('#') => TickClass::Major,
            Some(_) => TickClass::Minor,
        },
    }
}

/// Drawing-primitive collaborator: a stateful 2D surface the renderers
/// drive. The core only issues geometry and style values; it never draws.
pub trait DrawBackend {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_stroke(&mut self, color: Color, width: f64);
    fn set_fill(&mut self, color: Color);
    fn set_font(&mut self, font: &FontSpec, align: TextAlign, baseline: TextBaseline);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
    /// Append a full circle of radius `r` around (`cx`, `cy`) to the path.
    fn arc(&mut self, cx: f64, cy: f64, r: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Draw text rotated by `angle` radians around (`x`, `y`).
    fn fill_text_rotated(&mut self, text: &str, x: f64, y: f64, angle: f64);
}

/// Everything one render pass needs, precomputed by the update cycle.
pub struct RenderPass<'a> {
    pub config: &'a ResolvedConfig,
    pub data: &'a DataSet,
    pub domain: &'a Domain,
    pub plot: &'a PlotBox,
    pub axis: &'a AxisGeometry,
    pub projection: &'a Projection,
    /// Device scale factor; stroke widths, radii and font sizes multiply by
    /// it so geometry and styling scale together.
    pub resolution: f64,
}

/// Strategy interface: one implementation per feature kind, selected by the
/// resolved feature rather than by a callable stored in the config tree.
pub trait FeatureRenderer {
    fn render(&self, pass: &RenderPass<'_>, backend: &mut dyn DrawBackend);
}

/// Registry mapping each feature kind to its renderer. Callers may replace
/// any slot with a custom implementation.
pub struct RendererRegistry {
    slots: BTreeMap<Feature, Box<dyn FeatureRenderer>>,
}

impl RendererRegistry {
    /// A registry with no renderers; dispatching any visible feature fails.
    pub fn empty() -> Self {
        Self { slots: BTreeMap::new() }
    }

    /// A registry with all seven built-in renderers.
    pub fn with_defaults() -> Self {
        let mut r = Self::empty();
        r.register(Feature::Fill, Box::new(FillRenderer));
        r.register(Feature::Axis, Box::new(AxisRenderer));
        r.register(Feature::Tick, Box::new(TickRenderer));
        r.register(Feature::Line, Box::new(LineRenderer));
        r.register(Feature::Point, Box::new(PointRenderer));
        r.register(Feature::Label, Box::new(LabelRenderer));
        r.register(Feature::Title, Box::new(TitleRenderer));
        r
    }

    pub fn register(&mut self, feature: Feature, renderer: Box<dyn FeatureRenderer>) {
        self.slots.insert(feature, renderer);
    }

    pub fn get(&self, feature: Feature) -> Option<&dyn FeatureRenderer> {
        self.slots.get(&feature).map(|b| b.as_ref())
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Walk the resolved feature order and invoke each visible feature's
/// renderer. Owns no drawing state; any subset of features may be invisible
/// or have nothing to draw.
pub fn dispatch(
    order: &[Feature],
    pass: &RenderPass<'_>,
    registry: &RendererRegistry,
    backend: &mut dyn DrawBackend,
) -> Result<(), DispatchError> {
    for &feature in order {
        if !pass.config.feature_visible(feature) {
            continue;
        }
        let renderer = registry.get(feature).ok_or(DispatchError::UnregisteredFeature(feature))?;
        debug!(?feature, "render feature");
        renderer.render(pass, backend);
    }
    Ok(())
}

// ---- label text convention --------------------------------------------------

/// Label text convention: `~`-prefixed labels render verbatim (marker
/// stripped, including a classification `#`), otherwise the leading signed
/// decimal number (at most one fractional digit) is extracted; a label with
/// neither renders nothing.
pub fn format_label(text: &str) -> Option<String> {
    let text = text.strip_prefix('#').unwrap_or(text);
    if let Some(rest) = text.strip_prefix('~') {
        return Some(rest.to_string());
    }
    extract_numeric_prefix(text)
}

fn extract_numeric_prefix(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut end = 0usize;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == int_start {
        return None;
    }
    // Optionally one fractional digit.
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 2;
    }
    Some(text[..end].to_string())
}

/// Format a computed axis value the same way the label convention would
/// surface it: integral values bare, otherwise one fractional digit.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

// ---- built-in renderers -----------------------------------------------------

fn style_for<'a>(pass: &'a RenderPass<'_>, key: &str) -> &'a SeriesStyle {
    pass.config.style.for_series(key)
}

pub struct FillRenderer;

impl FeatureRenderer for FillRenderer {
    fn render(&self, pass: &RenderPass<'_>, backend: &mut dyn DrawBackend) {
        let baseline = pass.plot.y1
            + if pass.config.fill.fill_to_baseline { pass.config.padding } else { 0.0 };
        for (key, points) in &pass.projection.lines {
            let style = style_for(pass, key);
            // A fully transparent fill means "no fill" for this series.
            if style.line.fill.a == 0 {
                continue;
            }
            let Some(first) = points.first() else { continue };
            let last = points[points.len() - 1];
            backend.save();
            backend.set_fill(style.line.fill);
            backend.begin_path();
            backend.move_to(first.rx, first.ry);
            for p in points {
                backend.line_to(p.rx, p.ry);
            }
            backend.line_to(last.rx, baseline);
            backend.line_to(first.rx, baseline);
            backend.close_path();
            backend.fill();
            backend.restore();
        }
    }
}

pub struct AxisRenderer;

impl FeatureRenderer for AxisRenderer {
    fn render(&self, pass: &RenderPass<'_>, backend: &mut dyn DrawBackend) {
        let style = &pass.config.style.default;
        if !style.axis.visible {
            return;
        }
        let axis = pass.axis;
        let origin = pass.projection.origin;

        if style.axis.x.visible {
            // A fixed x axis sits on the padded bottom anchor; a floating
            // one passes through the data origin.
            let y = if style.axis.x.fixed { axis.x.y } else { origin.y };
            let y1 = if style.axis.x.fixed { axis.x.y1 } else { origin.y };
            draw_axis_line(backend, style, axis.x.x, y, axis.x.x1, y1, pass.resolution);
        }
        if style.axis.y.visible {
            let x = if style.axis.y.fixed { axis.y.x } else { origin.x };
            let x1 = if style.axis.y.fixed { axis.y.x1 } else { origin.x };
            draw_axis_line(backend, style, x, axis.y.y, x1, axis.y.y1, pass.resolution);
        }
    }
}

fn draw_axis_line(
    backend: &mut dyn DrawBackend,
    style: &SeriesStyle,
    x: f64,
    y: f64,
    x1: f64,
    y1: f64,
    resolution: f64,
) {
    backend.save();
    backend.set_stroke(style.axis.stroke, style.axis.width * resolution);
    backend.begin_path();
    backend.move_to(x, y);
    backend.line_to(x1, y1);
    backend.stroke();
    backend.restore();
}

pub struct TickRenderer;

impl FeatureRenderer for TickRenderer {
    fn render(&self, pass: &RenderPass<'_>, backend: &mut dyn DrawBackend) {
        let style = &pass.config.style.default;
        if !style.tick.visible {
            return;
        }
        let plot = pass.plot;
        let axis = pass.axis;
        let origin = pass.projection.origin;

        // One x tick per data tick, evenly spaced over the interval count.
        let intervals = pass.data.interval_count() as f64;
        let dis_x = plot.width() / intervals;
        let anchor_y = if style.tick.x.fixed { axis.x.y1 } else { origin.y };
        for (i, label) in pass.data.tick.iter().enumerate() {
            let (rx, _) = crate::transform::to_surface(plot, Some(dis_x * i as f64), None);
            let class = classify_tick(pass.config.tick.x_classifier, i, label.as_deref());
            draw_tick(backend, style, rx.unwrap_or_default(), anchor_y, AxisKind::X, class, pass.resolution);
        }

        // Y ticks at fixed-count intervals from the axis steps. Each tick
        // carries its computed value as label text so the marker policy
        // still sees something to classify.
        let steps = pass.config.axis.y.steps.max(1);
        let dis_y = plot.height() / steps as f64;
        let anchor_x = if style.tick.y.fixed { axis.y.x1 } else { origin.x };
        for i in 0..=steps as usize {
            let (_, ry) = crate::transform::to_surface(plot, None, Some(dis_y * i as f64));
            let value = pass.domain.y.min + pass.domain.y.range / steps as f64 * i as f64;
            let text = format_value(value);
            let class = classify_tick(pass.config.tick.y_classifier, i, Some(&text));
            draw_tick(backend, style, anchor_x, ry.unwrap_or_default(), AxisKind::Y, class, pass.resolution);
        }
    }
}

fn draw_tick(
    backend: &mut dyn DrawBackend,
    style: &SeriesStyle,
    x: f64,
    y: f64,
    kind: AxisKind,
    class: TickClass,
    resolution: f64,
) {
    let length = match class {
        TickClass::Major => style.tick.major,
        TickClass::Minor => style.tick.minor,
        TickClass::None => return,
    } * resolution;

    // Alignment of the mark relative to its anchor point.
    let (mut mx, mut my) = (x, y);
    match style.tick.align {
        TickAlign::Middle => match kind {
            AxisKind::X => my = y - length / 2.0,
            AxisKind::Y => mx = x - length / 2.0,
        },
        TickAlign::Inside => {
            if kind == AxisKind::X {
                my = y - length;
            }
        }
        TickAlign::Outside => {
            if kind == AxisKind::Y {
                mx = x - length;
            }
        }
    }

    backend.save();
    backend.set_stroke(style.tick.stroke, style.tick.width * resolution);
    backend.begin_path();
    backend.move_to(mx, my);
    match kind {
        AxisKind::X => backend.line_to(mx, my + length),
        AxisKind::Y => backend.line_to(mx + length, my),
    }
    backend.stroke();
    backend.restore();
}

pub struct LineRenderer;

impl FeatureRenderer for LineRenderer {
    fn render(&self, pass: &RenderPass<'_>, backend: &mut dyn DrawBackend) {
        for (key, points) in &pass.projection.lines {
            let style = style_for(pass, key);
            if !style.line.visible {
                continue;
            }
            let Some(first) = points.first() else { continue };
            backend.save();
            backend.set_stroke(style.line.stroke, style.line.width * pass.resolution);
            backend.begin_path();
            backend.move_to(first.rx, first.ry);
            for p in &points[1..] {
                backend.line_to(p.rx, p.ry);
            }
            backend.stroke();
            backend.restore();
        }
    }
}

pub struct PointRenderer;

impl FeatureRenderer for PointRenderer {
    fn render(&self, pass: &RenderPass<'_>, backend: &mut dyn DrawBackend) {
        for (key, points) in &pass.projection.lines {
            let style = style_for(pass, key);
            if !style.point.visible {
                continue;
            }
            for p in points {
                draw_point(backend, style, p, pass.resolution);
            }
        }
    }
}

fn draw_point(backend: &mut dyn DrawBackend, style: &SeriesStyle, p: &ProjectedPoint, resolution: f64) {
    backend.save();
    backend.set_stroke(style.point.stroke, style.point.width * resolution);
    backend.set_fill(style.point.fill);
    backend.begin_path();
    backend.arc(p.rx, p.ry, style.point.radius * resolution);
    backend.fill();
    backend.stroke();
    backend.restore();
}

pub struct LabelRenderer;

impl FeatureRenderer for LabelRenderer {
    fn render(&self, pass: &RenderPass<'_>, backend: &mut dyn DrawBackend) {
        let style = &pass.config.style.default;
        let plot = pass.plot;
        let axis = pass.axis;
        let origin = pass.projection.origin;
        let res = pass.resolution;

        if style.label.x.visible {
            let side = &style.label.x;
            let step = pass.config.label.x.step.max(1) as usize;
            let intervals = pass.data.interval_count() as f64;
            let dis_x = plot.width() / intervals;
            let anchor_y = if side.fixed { axis.x.y1 } else { origin.y };
            for (i, label) in pass.data.tick.iter().enumerate() {
                if i % step != 0 {
                    continue;
                }
                let Some(text) = label.as_deref().and_then(format_label) else { continue };
                let (rx, _) = crate::transform::to_surface(plot, Some(dis_x * i as f64), None);
                let x = rx.unwrap_or_default();
                let y = anchor_y + (style.tick.major + side.offset_y) * res;
                draw_label(backend, side, &text, x, y, res);
            }
        }

        if style.label.y.visible {
            let side = &style.label.y;
            let step = pass.config.label.y.step.max(1) as usize;
            let steps = pass.config.axis.y.steps.max(1);
            let dis_y = plot.height() / steps as f64;
            let anchor_x = if side.fixed { axis.y.x1 } else { origin.x };
            for i in 0..=steps as usize {
                if i % step != 0 {
                    continue;
                }
                let value = pass.domain.y.min + pass.domain.y.range / steps as f64 * i as f64;
                let text = format_value(value);
                let (_, ry) = crate::transform::to_surface(plot, None, Some(dis_y * i as f64));
                let x = anchor_x - (style.tick.major + side.offset_x) * res;
                let y = ry.unwrap_or_default() + side.offset_y * res;
                draw_label(backend, side, &text, x, y, res);
            }
        }
    }
}

fn draw_label(
    backend: &mut dyn DrawBackend,
    side: &crate::config::LabelSideStyle,
    text: &str,
    x: f64,
    y: f64,
    resolution: f64,
) {
    let font = FontSpec {
        family: side.font.family.clone(),
        size: side.font.size * resolution,
        style: side.font.style,
    };
    backend.save();
    backend.set_font(&font, side.align, side.baseline);
    backend.set_fill(side.color);
    backend.fill_text(text, x, y);
    backend.restore();
}

pub struct TitleRenderer;

impl FeatureRenderer for TitleRenderer {
    fn render(&self, pass: &RenderPass<'_>, backend: &mut dyn DrawBackend) {
        let style = &pass.config.style.default;
        if !style.title.visible {
            return;
        }
        let plot = pass.plot;
        let font = FontSpec {
            family: style.title.font.family.clone(),
            size: style.title.font.size * pass.resolution,
            style: style.title.font.style,
        };

        if style.title.x.visible {
            let x = (plot.x + plot.x1) / 2.0 + style.title.x.offset_x;
            let y = plot.y1 + style.title.x.offset_y;
            backend.save();
            backend.set_font(&font, TextAlign::Center, TextBaseline::Bottom);
            backend.set_fill(style.title.color);
            backend.fill_text(&pass.config.title.x, x, y);
            backend.restore();
        }
        if style.title.y.visible {
            let x = plot.x + style.title.y.offset_x;
            let y = (plot.y + plot.y1) / 2.0 + style.title.y.offset_y;
            backend.save();
            backend.set_font(&font, TextAlign::Center, TextBaseline::Bottom);
            backend.set_fill(style.title.color);
            backend.fill_text_rotated(&pass.config.title.y, x, y, FRAC_PI_2);
            backend.restore();
        }
    }
}
