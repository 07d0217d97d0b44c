// File: crates/plotline-core/tests/projection.rs
// Purpose: Validate layout, coordinate transform, projection and the
// downsampling policy end to end through the chart façade.

use approx::assert_relative_eq;
use plotline_core::config::ChartOptions;
use plotline_core::data::{DataSet, XDescriptor};
use plotline_core::downsample::{plotted_count, stride_factor, stride_indices};
use plotline_core::error::{ChartError, ConstructionError, DataDegeneracyError};
use plotline_core::layout::PlotBox;
use plotline_core::transform::to_surface;
use plotline_core::Chart;

use proptest::prelude::*;

fn options_with(data: DataSet) -> ChartOptions {
    ChartOptions { data: Some(data), ..Default::default() }
}

fn small_chart() -> Chart {
    let data = DataSet::new(XDescriptor::Span([0.0, 2.0]), Vec::new())
        .with_labels(&["a", "b", "c"])
        .with_series("y", vec![0.0, 5.0, 10.0]);
    let mut options = options_with(data);
    options.config.width = Some(100.0);
    options.config.height = Some(100.0);
    options.config.margin = Some(0.0);
    Chart::new(options).unwrap()
}

#[test]
fn box_domain_and_top_of_box_scenario() {
    let chart = small_chart();

    let plot = chart.plot_box();
    assert_eq!((plot.x, plot.y, plot.x1, plot.y1), (0.0, 0.0, 100.0, 100.0));

    let domain = chart.domain();
    assert_eq!((domain.y.min, domain.y.max, domain.y.range), (0.0, 10.0, 10.0));

    // y = 10 is the domain max, so the third point sits at the top of the box.
    let points = &chart.projection().lines["y"];
    assert_eq!(points.len(), 3);
    assert_relative_eq!(points[2].ry, 0.0);
    assert_relative_eq!(points[0].ry, 100.0);
    // Even x spacing over two intervals.
    assert_relative_eq!(points[1].rx, 50.0);
}

#[test]
fn origin_matches_data_space_zero_through_the_transform() {
    let chart = small_chart();
    let domain = chart.domain();
    let plot = chart.plot_box();

    let x0 = (0.0 - domain.x.min) / domain.x.range * plot.width();
    let y0 = (0.0 - domain.y.min) / domain.y.range * plot.height();
    let (rx, ry) = to_surface(plot, Some(x0), Some(y0));

    let origin = chart.projection().origin;
    assert_relative_eq!(origin.x, rx.unwrap());
    assert_relative_eq!(origin.y, ry.unwrap());
    // With both minima at zero, the origin is the box's bottom-left corner.
    assert_relative_eq!(origin.x, plot.x);
    assert_relative_eq!(origin.y, plot.y1);
}

#[test]
fn axis_anchors_expand_the_box_by_the_padding() {
    // Margin 0 box with the default padding of 20.
    let chart = small_chart();
    let axis = chart.axis_geometry();
    assert_eq!((axis.x.x, axis.x.y, axis.x.x1, axis.x.y1), (-20.0, 120.0, 120.0, 120.0));
    assert_eq!((axis.y.x, axis.y.y, axis.y.x1, axis.y.y1), (-20.0, -20.0, -20.0, 120.0));
}

#[test]
fn transform_passes_null_components_through() {
    let plot = PlotBox { x: 10.0, y: 10.0, x1: 90.0, y1: 90.0 };
    assert_eq!(to_surface(&plot, Some(5.0), None), (Some(15.0), None));
    assert_eq!(to_surface(&plot, None, Some(5.0)), (None, Some(85.0)));
    assert_eq!(to_surface(&plot, None, None), (None, None));
}

#[test]
fn point_count_equals_input_length_absent_downsampling() {
    let n = 1_000usize;
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin()).collect();
    let data = DataSet::new(XDescriptor::Length(n as f64), vec![None; n]).with_series("y", values);
    let chart = Chart::new(options_with(data)).unwrap();
    assert_eq!(chart.projection().lines["y"].len(), n);
}

#[test]
fn stride_policy_thresholds() {
    assert_eq!(stride_factor(1_000), 1);
    assert_eq!(stride_factor(1_001), 5);
    assert_eq!(stride_factor(10_001), 50);
    assert_eq!(stride_factor(100_001), 5_000);
}

#[test]
fn huge_series_reduces_to_thirty_points() {
    let n = 150_000usize;
    assert_eq!(stride_factor(n), 5_000);
    assert_eq!(plotted_count(n), 30);

    let values: Vec<f64> = (0..n).map(|i| (i % 100) as f64).collect();
    let data = DataSet::new(XDescriptor::Length(n as f64), vec![None; n]).with_series("y", values);
    let chart = Chart::new(options_with(data)).unwrap();

    let points = &chart.projection().lines["y"];
    assert_eq!(points.len(), 30);
    assert!(points.len() >= 2);
    // Kept points stay at their original index positions.
    let plot = chart.plot_box();
    let x_unit = plot.width() / (n - 1) as f64;
    assert_relative_eq!(points[1].x, x_unit * 5_000.0);
}

#[test]
fn stride_never_yields_fewer_than_two_points() {
    for n in [2usize, 3, 999, 1_001, 10_001, 100_001, 150_000] {
        let kept = stride_indices(n).unwrap().count();
        assert!(kept >= 2, "len {n} kept {kept}");
        assert_eq!(kept, plotted_count(n));
    }
    // A single point cannot form a segment.
    assert!(stride_indices(1).is_err());
}

#[test]
fn mismatched_series_length_fails_construction() {
    let data = DataSet::new(XDescriptor::Length(3.0), vec![None, None, None])
        .with_series("y", vec![1.0, 2.0]);
    let err = Chart::new(options_with(data)).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Construction(ConstructionError::LengthMismatch { .. })
    ));
}

#[test]
fn non_finite_values_fail_construction() {
    let data = DataSet::new(XDescriptor::Length(2.0), vec![None, None])
        .with_series("y", vec![1.0, f64::NAN]);
    let err = Chart::new(options_with(data)).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Construction(ConstructionError::NonNumericValue { .. })
    ));
}

#[test]
fn bad_series_key_fails_construction() {
    let data = DataSet::new(XDescriptor::Length(2.0), vec![None, None])
        .with_series("z", vec![1.0, 2.0]);
    let err = Chart::new(options_with(data)).unwrap_err();
    assert!(matches!(err, ChartError::Construction(ConstructionError::BadSeriesKey(_))));
}

#[test]
fn missing_data_fails_construction() {
    let err = Chart::new(ChartOptions::default()).unwrap_err();
    assert!(matches!(err, ChartError::Construction(ConstructionError::MissingData("data"))));
}

#[test]
fn flat_series_is_a_degeneracy_error() {
    let data = DataSet::new(XDescriptor::Length(2.0), vec![None, None])
        .with_series("y", vec![3.0, 3.0]);
    let err = Chart::new(options_with(data)).unwrap_err();
    assert!(matches!(err, ChartError::Degeneracy(DataDegeneracyError::ZeroRange(_))));
}

#[test]
fn resolution_scales_dimensions_once_per_update() {
    let data = DataSet::new(XDescriptor::Length(1.0), vec![None, None])
        .with_series("y", vec![0.0, 1.0]);
    let mut options = options_with(data);
    options.config.width = Some(100.0);
    options.config.height = Some(100.0);
    options.config.margin = Some(10.0);

    let mut chart = Chart::with_resolution(options, None, 2.0).unwrap();
    assert_eq!(chart.resolution(), 2.0);
    assert_eq!(chart.surface_size(), (200, 200));
    assert_eq!(chart.plot_box().x, 20.0);

    // A second update starts from logical units again.
    chart.update().unwrap();
    assert_eq!(chart.surface_size(), (200, 200));
    assert_eq!(chart.plot_box().x, 20.0);
}

#[test]
fn height_is_inferred_from_width() {
    let data = DataSet::new(XDescriptor::Length(1.0), vec![None, None])
        .with_series("y", vec![0.0, 1.0]);
    let mut options = options_with(data);
    options.config.width = Some(300.0);

    let chart = Chart::new(options).unwrap();
    assert_eq!(chart.config().height, (300.0f64 * 0.67).floor());
}

#[test]
fn auto_render_flag_surfaces_through_the_facade() {
    let chart = small_chart();
    assert!(chart.renders_on_construct());

    let data = DataSet::new(XDescriptor::Length(1.0), vec![None, None])
        .with_series("y", vec![0.0, 1.0]);
    let mut options = options_with(data);
    options.config.render = Some(false);
    let chart = Chart::new(options).unwrap();
    assert!(!chart.renders_on_construct());
}

#[test]
fn failed_update_leaves_previous_derived_state_intact() {
    let mut chart = small_chart();
    let plot_before = *chart.plot_box();
    let projection_before = chart.projection().clone();

    // Claiming fill's index 0 for the line must fail resolution.
    let mut options = ChartOptions::default();
    options.config.line.index = Some(0);
    let err = chart.set_options(options).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Construction(ConstructionError::IndexCollision { .. })
    ));

    assert_eq!(*chart.plot_box(), plot_before);
    assert_eq!(*chart.projection(), projection_before);
}

proptest! {
    // Pure transform: identical inputs yield identical outputs, and the
    // mapping is the documented affine flip.
    #[test]
    fn transform_is_pure_and_flips_y(
        x in -1e6f64..1e6,
        y in -1e6f64..1e6,
        left in 0.0f64..500.0,
        bottom in 500.0f64..1000.0,
    ) {
        let plot = PlotBox { x: left, y: 0.0, x1: left + 100.0, y1: bottom };
        let a = to_surface(&plot, Some(x), Some(y));
        let b = to_surface(&plot, Some(x), Some(y));
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.0.unwrap(), left + x);
        prop_assert_eq!(a.1.unwrap(), bottom - y);
    }
}
