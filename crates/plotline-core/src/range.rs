// File: crates/plotline-core/src/range.rs
// Summary: Data domain calculation (per-axis min/max/range with overrides).

use crate::config::ResolvedConfig;
use crate::data::DataSet;
use crate::error::DataDegeneracyError;
use crate::types::AxisKind;

/// One axis bound set; `range` is always `max - min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl AxisRange {
    fn new(kind: AxisKind, min: f64, max: f64) -> Result<Self, DataDegeneracyError> {
        let range = max - min;
        if range == 0.0 {
            return Err(DataDegeneracyError::ZeroRange(kind));
        }
        Ok(Self { min, max, range })
    }
}

/// The data domain for one update cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub x: AxisRange,
    pub y: AxisRange,
}

/// Compute the domain from the raw series and the resolved configuration.
///
/// Y is the union bound across every y-series; an explicit `axis.y.min` /
/// `axis.y.max` override wins regardless of the data. X comes verbatim from
/// the descriptor. A zero range on either axis is fatal here rather than
/// surfacing later as non-finite geometry.
pub fn compute_domain(data: &DataSet, config: &ResolvedConfig) -> Result<Domain, DataDegeneracyError> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for values in data.series.values() {
        for &v in values {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }
    let y_min = config.axis.y.min.unwrap_or(y_min);
    let y_max = config.axis.y.max.unwrap_or(y_max);

    let (x_min, x_max) = data.x.domain();
    let x_min = config.axis.x.min.unwrap_or(x_min);
    let x_max = config.axis.x.max.unwrap_or(x_max);

    Ok(Domain {
        x: AxisRange::new(AxisKind::X, x_min, x_max)?,
        y: AxisRange::new(AxisKind::Y, y_min, y_max)?,
    })
}
