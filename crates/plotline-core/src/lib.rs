// File: crates/plotline-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart
// configuration, layout math and render dispatch.

pub mod chart;
pub mod config;
pub mod data;
pub mod downsample;
pub mod error;
pub mod layout;
pub mod project;
pub mod range;
pub mod render;
pub mod theme;
pub mod transform;
pub mod types;

pub use chart::Chart;
pub use config::{ChartOptions, ConfigOverlay, ResolvedConfig, SeriesStyle, TickClassifier};
pub use data::{DataSet, XDescriptor};
pub use error::{ChartError, ConstructionError, DataDegeneracyError, DispatchError};
pub use layout::{AxisGeometry, PlotBox};
pub use project::{Origin, ProjectedPoint, Projection};
pub use range::Domain;
pub use render::{DrawBackend, Feature, FeatureRenderer, RenderPass, RendererRegistry, TickClass};
pub use types::Color;
