// File: crates/plotline-core/src/downsample.rs
// Summary: Adaptive stride downsampling for very long series.

use crate::error::DataDegeneracyError;

/// Stride factor for a series of `len` points: no reduction up to 1,000
/// points, then one in 5, one in 50 past 10,000 and one in 5,000 past
/// 100,000. Bounds per-render cost without interpolating.
pub fn stride_factor(len: usize) -> usize {
    if len > 100_000 {
        5_000
    } else if len > 10_000 {
        50
    } else if len > 1_000 {
        5
    } else {
        1
    }
}

/// Indices of the points kept by the stride policy, in order.
///
/// Fails when fewer than two points survive, since no line segment would be
/// drawable.
pub fn stride_indices(len: usize) -> Result<impl Iterator<Item = usize>, DataDegeneracyError> {
    let factor = stride_factor(len);
    let kept = len.div_ceil(factor);
    if kept < 2 {
        return Err(DataDegeneracyError::TooFewPoints);
    }
    Ok((0..len).step_by(factor))
}

/// Number of points the policy keeps for a series of `len` points.
pub fn plotted_count(len: usize) -> usize {
    len.div_ceil(stride_factor(len))
}
