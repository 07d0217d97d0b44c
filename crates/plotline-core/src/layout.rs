// File: crates/plotline-core/src/layout.rs
// Summary: Plot box and axis anchor geometry from surface dimensions.

use crate::config::ResolvedConfig;

/// The plot's drawable rectangle in surface coordinates, inset from the
/// surface edges by the margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBox {
    pub x: f64,
    pub y: f64,
    pub x1: f64,
    pub y1: f64,
}

impl PlotBox {
    pub fn width(&self) -> f64 {
        self.x1 - self.x
    }
    pub fn height(&self) -> f64 {
        self.y1 - self.y
    }
}

/// Endpoints of one axis line in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLine {
    pub x: f64,
    pub y: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Padding-expanded anchors for both axes. Used as drawn when an axis is
/// fixed; a floating axis replaces the pinned coordinate with the data
/// origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGeometry {
    pub x: AxisLine,
    pub y: AxisLine,
}

/// Symmetric-margin bounding box of the plot area.
pub fn compute_box(width: f64, height: f64, margin: f64) -> PlotBox {
    PlotBox { x: margin, y: margin, x1: width - margin, y1: height - margin }
}

/// Axis anchor lines: x along the padded bottom edge, y along the padded
/// left edge.
pub fn axis_anchors(plot: &PlotBox, padding: f64) -> AxisGeometry {
    AxisGeometry {
        x: AxisLine {
            x: plot.x - padding, // bottom-left
            y: plot.y1 + padding,
            x1: plot.x1 + padding, // bottom-right
            y1: plot.y1 + padding,
        },
        y: AxisLine {
            x: plot.x - padding, // top-left
            y: plot.y - padding,
            x1: plot.x - padding, // bottom-left
            y1: plot.y1 + padding,
        },
    }
}

/// Apply a surface resolution scale factor multiplicatively to every
/// dimension field, once. Callers must start from the logical-unit tree on
/// each update; scaling is never compounded onto an already-scaled tree.
pub fn apply_resolution(config: &ResolvedConfig, resolution: f64) -> ResolvedConfig {
    let mut scaled = config.clone();
    scaled.width *= resolution;
    scaled.height *= resolution;
    scaled.margin *= resolution;
    scaled.padding *= resolution;
    scaled
}
