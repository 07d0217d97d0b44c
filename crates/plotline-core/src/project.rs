// File: crates/plotline-core/src/project.rs
// Summary: Per-series point projection feeding line/fill/point rendering.

use std::collections::BTreeMap;

use tracing::trace;

use crate::data::DataSet;
use crate::downsample::stride_indices;
use crate::error::DataDegeneracyError;
use crate::layout::PlotBox;
use crate::range::Domain;
use crate::transform::to_surface_xy;

/// One plotted point: data-space plot offsets plus surface coordinates.
/// Rebuilt wholesale on every update, never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub rx: f64,
    pub ry: f64,
}

/// Surface location of data-space zero, used to anchor floating axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// The projection of one update cycle: ordered point lists per series plus
/// the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub lines: BTreeMap<String, Vec<ProjectedPoint>>,
    pub origin: Origin,
}

/// Project every y-series into surface space.
///
/// Each value is paired with an evenly spaced x position from its index and
/// the interval count (tick count minus one); long series are strided by the
/// downsampling policy first, with kept points retaining their original
/// index positions.
pub fn project(data: &DataSet, domain: &Domain, plot: &PlotBox) -> Result<Projection, DataDegeneracyError> {
    let intervals = data.interval_count() as f64;
    let x_unit = plot.width() / intervals;
    let y_unit = plot.height() / domain.y.range;

    let mut lines = BTreeMap::new();
    for (key, values) in &data.series {
        let points: Vec<ProjectedPoint> = stride_indices(values.len())?
            .map(|i| {
                let x = x_unit * i as f64;
                let y = (values[i] - domain.y.min) * y_unit;
                let (rx, ry) = to_surface_xy(plot, x, y);
                ProjectedPoint { x, y, rx, ry }
            })
            .collect();
        trace!(series = %key, raw = values.len(), plotted = points.len(), "projected series");
        lines.insert(key.clone(), points);
    }

    // Same transform as every point, evaluated at data-space (0, 0).
    let x0 = (0.0 - domain.x.min) / domain.x.range * plot.width();
    let y0 = (0.0 - domain.y.min) * y_unit;
    let (ox, oy) = to_surface_xy(plot, x0, y0);

    Ok(Projection { lines, origin: Origin { x: ox, y: oy } })
}
