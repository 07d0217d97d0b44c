// File: crates/plotline-core/src/transform.rs
// Summary: Pure data-space to surface-space coordinate mapping.

use crate::layout::PlotBox;

/// Map plot-space offsets to surface coordinates.
///
/// Surface x grows rightward from the box's left edge; surface y is flipped
/// (canvas-style y-down), measured up from the box's bottom edge. A `None`
/// component passes through untouched so callers can transform a single
/// axis. Pure: identical inputs always yield identical outputs.
pub fn to_surface(plot: &PlotBox, x: Option<f64>, y: Option<f64>) -> (Option<f64>, Option<f64>) {
    (x.map(|x| plot.x + x), y.map(|y| plot.y1 - y))
}

/// Infallible variant for callers that always transform both components.
pub fn to_surface_xy(plot: &PlotBox, x: f64, y: f64) -> (f64, f64) {
    (plot.x + x, plot.y1 - y)
}
