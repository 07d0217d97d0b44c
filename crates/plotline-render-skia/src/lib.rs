// File: crates/plotline-render-skia/src/lib.rs
// Summary: Skia CPU raster DrawBackend, surface provisioning and PNG export.

use anyhow::Result;
use skia_safe as skia;

use plotline_core::render::DrawBackend;
use plotline_core::types::{Color, FontSpec, FontStyle, TextAlign, TextBaseline};
use plotline_core::Chart;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// CPU raster surface implementing the core's drawing-primitive contract:
/// persistent stroke/fill/font state plus an explicit path being built.
pub struct SkiaSurface {
    surface: skia::Surface,
    stroke: skia::Paint,
    fill: skia::Paint,
    path: skia::Path,
    font: skia::Font,
    align: TextAlign,
    baseline: TextBaseline,
}

impl SkiaSurface {
    /// Create a raster surface at the given pixel size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        Ok(Self {
            surface,
            stroke,
            fill,
            path: skia::Path::new(),
            font: skia::Font::default(),
            align: TextAlign::Left,
            baseline: TextBaseline::Bottom,
        })
    }

    /// Provision a surface sized for a chart's device-pixel dimensions.
    pub fn for_chart(chart: &Chart) -> Result<Self> {
        let (w, h) = chart.surface_size();
        Self::new(w, h)
    }

    /// Clear the whole surface to one color.
    pub fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    /// Snapshot the surface contents as an encoded PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the surface contents to a PNG file, creating parent dirs.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn make_font(&self, spec: &FontSpec) -> skia::Font {
        let style = match spec.style {
            FontStyle::Normal => skia::FontStyle::normal(),
            FontStyle::Italic => skia::FontStyle::italic(),
            FontStyle::Bold => skia::FontStyle::bold(),
        };
        let mgr = skia::FontMgr::default();
        match mgr.match_family_style(&spec.family, style) {
            Some(typeface) => skia::Font::from_typeface(typeface, spec.size as f32),
            None => {
                let mut f = skia::Font::default();
                f.set_size(spec.size as f32);
                f
            }
        }
    }

    fn anchored(&self, text: &str, x: f64, y: f64) -> (f32, f32) {
        let (advance, _) = self.font.measure_str(text, None);
        let x = match self.align {
            TextAlign::Left => x as f32,
            TextAlign::Center => x as f32 - advance / 2.0,
            TextAlign::Right => x as f32 - advance,
        };
        let size = self.font.size();
        let y = match self.baseline {
            TextBaseline::Top => y as f32 + size,
            TextBaseline::Middle => y as f32 + size / 2.0,
            TextBaseline::Bottom => y as f32,
        };
        (x, y)
    }
}

impl DrawBackend for SkiaSurface {
    fn save(&mut self) {
        self.surface.canvas().save();
    }

    fn restore(&mut self) {
        self.surface.canvas().restore();
    }

    fn set_stroke(&mut self, color: Color, width: f64) {
        self.stroke.set_color(to_skia(color));
        self.stroke.set_stroke_width(width as f32);
    }

    fn set_fill(&mut self, color: Color) {
        self.fill.set_color(to_skia(color));
    }

    fn set_font(&mut self, font: &FontSpec, align: TextAlign, baseline: TextBaseline) {
        self.font = self.make_font(font);
        self.align = align;
        self.baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) {
        let path = self.path.clone();
        self.surface.canvas().draw_path(&path, &self.stroke);
    }

    fn fill(&mut self) {
        let path = self.path.clone();
        self.surface.canvas().draw_path(&path, &self.fill);
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64) {
        self.path.add_circle((cx as f32, cy as f32), r as f32, None);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let (ax, ay) = self.anchored(text, x, y);
        let font = self.font.clone();
        self.surface.canvas().draw_str(text, (ax, ay), &font, &self.fill);
    }

    fn fill_text_rotated(&mut self, text: &str, x: f64, y: f64, angle: f64) {
        let (ax, ay) = self.anchored(text, 0.0, 0.0);
        let font = self.font.clone();
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.translate((x as f32, y as f32));
        canvas.rotate(angle.to_degrees() as f32, None);
        canvas.draw_str(text, (ax, ay), &font, &self.fill);
        canvas.restore();
    }
}
