// File: crates/plotline-core/src/data.rs
// Summary: Series data model (y-series map, shared ticks, x descriptor).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// Shape of the shared x domain: a plain length (domain `[0, n]`) or an
/// explicit `[min, max]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XDescriptor {
    Length(f64),
    Span([f64; 2]),
}

impl XDescriptor {
    /// Domain endpoints described by this descriptor.
    pub fn domain(&self) -> (f64, f64) {
        match *self {
            XDescriptor::Length(n) => (0.0, n),
            XDescriptor::Span([min, max]) => (min, max),
        }
    }
}

/// Raw chart data: named numeric series (`y`, `y1`, ...) sharing one tick
/// sequence and one x descriptor. A tick is either unlabeled or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub x: XDescriptor,
    pub tick: Vec<Option<String>>,
    #[serde(flatten)]
    pub series: BTreeMap<String, Vec<f64>>,
}

impl DataSet {
    pub fn new(x: XDescriptor, tick: Vec<Option<String>>) -> Self {
        Self { x, tick, series: BTreeMap::new() }
    }

    /// Add one named y-series. Key shape and length are checked later by
    /// [`DataSet::validate`].
    pub fn with_series(mut self, key: impl Into<String>, values: Vec<f64>) -> Self {
        self.series.insert(key.into(), values);
        self
    }

    /// Convenience: label every tick from plain strings.
    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.tick = labels.iter().map(|s| Some((*s).to_string())).collect();
        self
    }

    /// Validate the construction-time invariants: at least one y-series,
    /// keys of the form `y<digits?>`, every series as long as the tick
    /// sequence, at least two ticks, all values finite, a sane x descriptor.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if self.series.is_empty() {
            return Err(ConstructionError::MissingData("y"));
        }
        if self.tick.is_empty() {
            return Err(ConstructionError::MissingData("tick"));
        }
        if self.tick.len() < 2 {
            return Err(ConstructionError::TooFewTicks);
        }
        if let XDescriptor::Span([min, max]) = self.x {
            if !min.is_finite() || !max.is_finite() {
                return Err(ConstructionError::MalformedXDescriptor);
            }
        }
        if let XDescriptor::Length(n) = self.x {
            if !n.is_finite() {
                return Err(ConstructionError::MalformedXDescriptor);
            }
        }
        for (key, values) in &self.series {
            if !is_series_key(key) {
                return Err(ConstructionError::BadSeriesKey(key.clone()));
            }
            if values.len() != self.tick.len() {
                return Err(ConstructionError::LengthMismatch {
                    key: key.clone(),
                    len: values.len(),
                    ticks: self.tick.len(),
                });
            }
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(ConstructionError::NonNumericValue { key: key.clone(), index });
            }
        }
        Ok(())
    }

    /// Number of intervals along the shared x axis (tick count minus one).
    pub fn interval_count(&self) -> usize {
        self.tick.len().saturating_sub(1)
    }
}

/// `y`, `y1`, `y2`, ... and nothing else.
fn is_series_key(key: &str) -> bool {
    let Some(rest) = key.strip_prefix('y') else { return false };
    rest.chars().all(|c| c.is_ascii_digit())
}
