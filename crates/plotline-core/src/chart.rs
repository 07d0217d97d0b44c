// File: crates/plotline-core/src/chart.rs
// Summary: Chart façade wiring resolve → range → layout → project → render.

use tracing::debug;

use crate::config::{ChartOptions, ConfigOverlay, ResolvedConfig};
use crate::data::DataSet;
use crate::error::{ChartError, ConstructionError};
use crate::layout::{self, AxisGeometry, PlotBox};
use crate::project::{self, Projection};
use crate::range::{self, Domain};
use crate::render::{dispatch, DrawBackend, Feature, RenderPass, RendererRegistry};
use crate::theme;
use crate::types::HEIGHT_FROM_WIDTH;

/// A single line chart: options, data and every derived structure of the
/// most recent update cycle.
///
/// Options are stored in logical units; the device resolution is applied
/// fresh on every update, so it never compounds. One logical owner drives
/// updates and renders serially; nothing here is shared across cycles
/// except by full replacement.
#[derive(Debug)]
pub struct Chart {
    options: ChartOptions,
    theme: Option<ConfigOverlay>,
    resolution: f64,
    data: DataSet,
    config: ResolvedConfig,
    order: Vec<Feature>,
    domain: Domain,
    plot: PlotBox,
    axis: AxisGeometry,
    projection: Projection,
}

impl Chart {
    /// Build a chart from options alone.
    pub fn new(options: ChartOptions) -> Result<Self, ChartError> {
        Self::with_resolution(options, None, 1.0)
    }

    /// Build a chart with a theme overlay between the defaults and the
    /// options.
    pub fn with_theme(options: ChartOptions, theme: ConfigOverlay) -> Result<Self, ChartError> {
        Self::with_resolution(options, Some(theme), 1.0)
    }

    /// Build a chart for a surface with a device scale factor (e.g. 2.0 on
    /// high-density displays). Supplied once, at construction.
    pub fn with_resolution(
        options: ChartOptions,
        theme: Option<ConfigOverlay>,
        resolution: f64,
    ) -> Result<Self, ChartError> {
        let data = options.data.clone().ok_or(ConstructionError::MissingData("data"))?;
        data.validate()?;

        let mut chart = Self {
            options,
            theme,
            resolution,
            data,
            // Placeholder derived state; `update` replaces all of it.
            config: theme::defaults(),
            order: Vec::new(),
            domain: Domain {
                x: range::AxisRange { min: 0.0, max: 1.0, range: 1.0 },
                y: range::AxisRange { min: 0.0, max: 1.0, range: 1.0 },
            },
            plot: PlotBox { x: 0.0, y: 0.0, x1: 0.0, y1: 0.0 },
            axis: layout::axis_anchors(&PlotBox { x: 0.0, y: 0.0, x1: 0.0, y1: 0.0 }, 0.0),
            projection: Projection { lines: Default::default(), origin: project::Origin { x: 0.0, y: 0.0 } },
        };
        chart.update()?;
        Ok(chart)
    }

    /// Rebuild every derived structure from the logical-unit options:
    /// resolve → range → layout → project. Everything is computed into
    /// locals and assigned only once every step has succeeded, so a failed
    /// update leaves the previous derived state intact.
    pub fn update(&mut self) -> Result<(), ChartError> {
        let mut overlay = self.options.config.clone();
        // Height inference: width without height picks the default aspect.
        if let (Some(w), None) = (overlay.width, overlay.height) {
            overlay.height = Some((w * HEIGHT_FROM_WIDTH).floor());
        }

        let resolved = ResolvedConfig::resolve(&theme::defaults(), self.theme.as_ref(), &overlay)?;
        let config = layout::apply_resolution(&resolved, self.resolution);
        let order = config.feature_order()?;

        let domain = range::compute_domain(&self.data, &config)?;
        let plot = layout::compute_box(config.width, config.height, config.margin);
        let axis = layout::axis_anchors(&plot, config.padding);
        let projection = project::project(&self.data, &domain, &plot)?;
        debug!(
            width = config.width,
            height = config.height,
            series = projection.lines.len(),
            "chart updated"
        );

        self.config = config;
        self.order = order;
        self.domain = domain;
        self.plot = plot;
        self.axis = axis;
        self.projection = projection;
        Ok(())
    }

    /// Replace the options tree and rebuild.
    pub fn set_options(&mut self, options: ChartOptions) -> Result<(), ChartError> {
        if let Some(data) = &options.data {
            data.validate()?;
            self.data = data.clone();
        }
        self.options = options;
        self.update()
    }

    /// Replace (or clear) the theme overlay and rebuild.
    pub fn set_theme(&mut self, theme: Option<ConfigOverlay>) -> Result<(), ChartError> {
        self.theme = theme;
        self.update()
    }

    /// Replace the data and rebuild.
    pub fn set_data(&mut self, data: DataSet) -> Result<(), ChartError> {
        data.validate()?;
        self.data = data;
        self.options.data = Some(self.data.clone());
        self.update()
    }

    /// Drive one render pass through the registry against a backend.
    pub fn render(
        &self,
        registry: &RendererRegistry,
        backend: &mut dyn DrawBackend,
    ) -> Result<(), ChartError> {
        let pass = RenderPass {
            config: &self.config,
            data: &self.data,
            domain: &self.domain,
            plot: &self.plot,
            axis: &self.axis,
            projection: &self.projection,
            resolution: self.resolution,
        };
        dispatch(&self.order, &pass, registry, backend)?;
        Ok(())
    }

    /// Whether the options asked for an immediate draw after construction.
    pub fn renders_on_construct(&self) -> bool {
        self.config.render
    }

    /// Device-pixel surface size for provisioning a drawing surface.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width.round() as u32, self.config.height.round() as u32)
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }
    pub fn data(&self) -> &DataSet {
        &self.data
    }
    pub fn domain(&self) -> &Domain {
        &self.domain
    }
    pub fn plot_box(&self) -> &PlotBox {
        &self.plot
    }
    pub fn axis_geometry(&self) -> &AxisGeometry {
        &self.axis
    }
    pub fn projection(&self) -> &Projection {
        &self.projection
    }
    pub fn feature_order(&self) -> &[Feature] {
        &self.order
    }
    pub fn resolution(&self) -> f64 {
        self.resolution
    }
}
