// File: crates/plotline-core/src/error.rs
// Summary: Error taxonomy for construction, data degeneracy and dispatch.

use crate::render::Feature;
use crate::types::AxisKind;

/// Invalid input rejected at construction or update time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("missing required data field {0:?}")]
    MissingData(&'static str),
    #[error("series {key:?} has {len} values but the tick sequence has {ticks}")]
    LengthMismatch { key: String, len: usize, ticks: usize },
    #[error("series key {0:?} is not of the form y, y1, y2, ...")]
    BadSeriesKey(String),
    #[error("series {key:?} contains a non-finite value at index {index}")]
    NonNumericValue { key: String, index: usize },
    #[error("x descriptor must be a length or a [min, max] pair")]
    MalformedXDescriptor,
    #[error("fewer than two ticks; nothing to plot")]
    TooFewTicks,
    #[error("features {first:?} and {second:?} both claim order index {index}")]
    IndexCollision { first: Feature, second: Feature, index: u32 },
}

/// Data that survived construction but cannot produce finite geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DataDegeneracyError {
    #[error("{0:?} axis has zero range (min == max)")]
    ZeroRange(AxisKind),
    #[error("series reduced to fewer than two plotted points")]
    TooFewPoints,
}

/// Render-time failure; indicates a corrupted resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("no renderer registered for feature {0:?}")]
    UnregisteredFeature(Feature),
}

/// Umbrella error for the update and render entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Degeneracy(#[from] DataDegeneracyError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
