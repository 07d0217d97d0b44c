// File: crates/plotline-examples/src/bin/lines.rs
// Summary: Minimal example that renders a themed two-series line chart to PNG.

use anyhow::Result;

use plotline_core::config::{ChartOptions, LineStyleOverlay, SeriesStyleOverlay};
use plotline_core::{theme, Chart, Color, DataSet, RendererRegistry, XDescriptor};
use plotline_render_skia::SkiaSurface;

fn main() -> Result<()> {
    let data = DataSet::new(
        XDescriptor::Length(6.0),
        vec![
            Some("#0".into()),
            Some("1".into()),
            Some("#2".into()),
            Some("3".into()),
            Some("#4".into()),
            Some("~end".into()),
        ],
    )
    .with_series("y", vec![0.0, 1.2, 0.8, 1.8, 1.4, 2.0])
    .with_series("y1", vec![0.4, 0.6, 1.5, 1.1, 2.2, 1.7]);

    let mut options = ChartOptions { data: Some(data), ..Default::default() };
    options.config.width = Some(640.0);
    options.config.height = Some(400.0);
    options.config.style.series.insert(
        "y1".into(),
        SeriesStyleOverlay {
            line: LineStyleOverlay {
                stroke: Some(Color::rgb(0xe6, 0x47, 0x42)),
                fill: Some(Color::rgba(0xe6, 0x47, 0x42, 0x30)),
                ..Default::default()
            },
            ..Default::default()
        },
    );

    let modern = theme::find("modern")
        .ok_or_else(|| anyhow::anyhow!("missing built-in theme: modern"))?;
    let chart = Chart::with_theme(options, modern)?;
    let mut surface = SkiaSurface::for_chart(&chart)?;
    surface.clear(Color::rgb(0xff, 0xff, 0xff));
    if chart.renders_on_construct() {
        chart.render(&RendererRegistry::with_defaults(), &mut surface)?;
    }

    let out = std::path::PathBuf::from("target/out/example_lines.png");
    surface.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
