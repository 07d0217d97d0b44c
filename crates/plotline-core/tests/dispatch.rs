// File: crates/plotline-core/tests/dispatch.rs
// Purpose: Validate render dispatch ordering, visibility gating, registry
// misses, tick classification policies and the label text convention.

use std::cell::RefCell;
use std::rc::Rc;

use plotline_core::config::{ChartOptions, TickClassifier};
use plotline_core::data::{DataSet, XDescriptor};
use plotline_core::error::{ChartError, DispatchError};
use plotline_core::render::{
    classify_tick, format_label, format_value, DrawBackend, Feature, FeatureRenderer, RenderPass,
    RendererRegistry, TickClass, TickRenderer,
};
use plotline_core::types::{Color, FontSpec, TextAlign, TextBaseline};
use plotline_core::Chart;

/// Backend that records primitive names in call order.
#[derive(Default)]
struct Recorder {
    ops: Vec<&'static str>,
}

impl DrawBackend for Recorder {
    fn save(&mut self) {
        self.ops.push("save");
    }
    fn restore(&mut self) {
        self.ops.push("restore");
    }
    fn set_stroke(&mut self, _: Color, _: f64) {
        self.ops.push("set_stroke");
    }
    fn set_fill(&mut self, _: Color) {
        self.ops.push("set_fill");
    }
    fn set_font(&mut self, _: &FontSpec, _: TextAlign, _: TextBaseline) {
        self.ops.push("set_font");
    }
    fn begin_path(&mut self) {
        self.ops.push("begin_path");
    }
    fn move_to(&mut self, _: f64, _: f64) {
        self.ops.push("move_to");
    }
    fn line_to(&mut self, _: f64, _: f64) {
        self.ops.push("line_to");
    }
    fn close_path(&mut self) {
        self.ops.push("close_path");
    }
    fn stroke(&mut self) {
        self.ops.push("stroke");
    }
    fn fill(&mut self) {
        self.ops.push("fill");
    }
    fn arc(&mut self, _: f64, _: f64, _: f64) {
        self.ops.push("arc");
    }
    fn fill_text(&mut self, _: &str, _: f64, _: f64) {
        self.ops.push("fill_text");
    }
    fn fill_text_rotated(&mut self, _: &str, _: f64, _: f64, _: f64) {
        self.ops.push("fill_text_rotated");
    }
}

/// Renderer that records which feature slot got invoked.
struct Probe {
    feature: Feature,
    log: Rc<RefCell<Vec<Feature>>>,
}

impl FeatureRenderer for Probe {
    fn render(&self, _pass: &RenderPass<'_>, _backend: &mut dyn DrawBackend) {
        self.log.borrow_mut().push(self.feature);
    }
}

fn probe_registry(log: &Rc<RefCell<Vec<Feature>>>) -> RendererRegistry {
    let mut registry = RendererRegistry::empty();
    for feature in Feature::ALL {
        registry.register(feature, Box::new(Probe { feature, log: Rc::clone(log) }));
    }
    registry
}

fn chart_with(f: impl FnOnce(&mut ChartOptions)) -> Chart {
    let data = DataSet::new(XDescriptor::Length(2.0), Vec::new())
        .with_labels(&["#a", "b", "#c"])
        .with_series("y", vec![0.0, 5.0, 10.0]);
    let mut options = ChartOptions { data: Some(data), ..Default::default() };
    f(&mut options);
    Chart::new(options).unwrap()
}

#[test]
fn features_render_in_ascending_index_order() {
    let chart = chart_with(|_| {});
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut backend = Recorder::default();
    chart.render(&probe_registry(&log), &mut backend).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            Feature::Fill,
            Feature::Axis,
            Feature::Tick,
            Feature::Line,
            Feature::Point,
            Feature::Label,
            Feature::Title,
        ]
    );
}

#[test]
fn reindexing_reorders_the_walk() {
    let chart = chart_with(|options| {
        // Swap title to the front and fill to the back.
        options.config.title.index = Some(0);
        options.config.fill.index = Some(6);
    });
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut backend = Recorder::default();
    chart.render(&probe_registry(&log), &mut backend).unwrap();

    let order = log.borrow();
    assert_eq!(order.first(), Some(&Feature::Title));
    assert_eq!(order.last(), Some(&Feature::Fill));
    // The walk matches the resolved order the chart exposes.
    assert_eq!(order.as_slice(), chart.feature_order());
}

#[test]
fn invisible_features_are_skipped_without_error() {
    let chart = chart_with(|options| {
        options.config.point.visible = Some(false);
        options.config.title.visible = Some(false);
    });
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut backend = Recorder::default();
    chart.render(&probe_registry(&log), &mut backend).unwrap();

    assert!(!log.borrow().contains(&Feature::Point));
    assert!(!log.borrow().contains(&Feature::Title));
    assert_eq!(log.borrow().len(), 5);
}

#[test]
fn missing_registry_slot_is_a_dispatch_error() {
    let chart = chart_with(|_| {});
    let mut backend = Recorder::default();
    let err = chart.render(&RendererRegistry::empty(), &mut backend).unwrap_err();
    assert_eq!(
        err,
        ChartError::Dispatch(DispatchError::UnregisteredFeature(Feature::Fill))
    );
}

#[test]
fn built_in_renderers_balance_save_and_restore() {
    let chart = chart_with(|_| {});
    let mut backend = Recorder::default();
    chart.render(&RendererRegistry::with_defaults(), &mut backend).unwrap();

    let saves = backend.ops.iter().filter(|&&op| op == "save").count();
    let restores = backend.ops.iter().filter(|&&op| op == "restore").count();
    assert!(saves > 0);
    assert_eq!(saves, restores);
    // The line series stroke is in there somewhere.
    assert!(backend.ops.contains(&"move_to"));
    assert!(backend.ops.contains(&"stroke"));
    assert!(backend.ops.contains(&"fill_text"));
}

#[test]
fn custom_renderer_replaces_a_built_in_slot() {
    let chart = chart_with(|_| {});
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = RendererRegistry::with_defaults();
    registry.register(Feature::Line, Box::new(Probe { feature: Feature::Line, log: Rc::clone(&log) }));

    let mut backend = Recorder::default();
    chart.render(&registry, &mut backend).unwrap();
    assert_eq!(*log.borrow(), vec![Feature::Line]);
}

#[test]
fn interval_parity_alternates_major_minor() {
    let p = TickClassifier::IntervalParity;
    assert_eq!(classify_tick(p, 0, None), TickClass::Major);
    assert_eq!(classify_tick(p, 1, None), TickClass::Minor);
    assert_eq!(classify_tick(p, 2, Some("anything")), TickClass::Major);
    assert_eq!(classify_tick(p, 3, Some("#anything")), TickClass::Minor);
}

#[test]
fn label_marker_classifies_by_prefix() {
    let p = TickClassifier::LabelMarker;
    assert_eq!(classify_tick(p, 0, Some("#jan")), TickClass::Major);
    assert_eq!(classify_tick(p, 1, Some("feb")), TickClass::Minor);
    assert_eq!(classify_tick(p, 2, None), TickClass::None);
}

#[test]
fn label_marker_on_y_still_draws_tick_marks() {
    let chart = chart_with(|options| {
        options.config.tick.y_classifier = Some(TickClassifier::LabelMarker);
    });
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = probe_registry(&log);
    registry.register(Feature::Tick, Box::new(TickRenderer));

    let mut backend = Recorder::default();
    chart.render(&registry, &mut backend).unwrap();

    // Three marked x ticks plus one mark per y step boundary; the computed
    // y value labels classify as minor rather than unmarked.
    let steps = chart.config().axis.y.steps as usize;
    let marks = backend.ops.iter().filter(|&&op| op == "begin_path").count();
    assert_eq!(marks, 3 + steps + 1);
}

#[test]
fn both_policies_are_selectable_per_axis() {
    let chart = chart_with(|options| {
        options.config.tick.x_classifier = Some(TickClassifier::IntervalParity);
        options.config.tick.y_classifier = Some(TickClassifier::LabelMarker);
    });
    assert_eq!(chart.config().tick.x_classifier, TickClassifier::IntervalParity);
    assert_eq!(chart.config().tick.y_classifier, TickClassifier::LabelMarker);

    // Defaults: marker convention on x, parity on y.
    let default_chart = chart_with(|_| {});
    assert_eq!(default_chart.config().tick.x_classifier, TickClassifier::LabelMarker);
    assert_eq!(default_chart.config().tick.y_classifier, TickClassifier::IntervalParity);
}

#[test]
fn label_text_convention() {
    assert_eq!(format_label("~hello"), Some("hello".into()));
    assert_eq!(format_label("#~March"), Some("March".into()));
    assert_eq!(format_label("12.5%"), Some("12.5".into()));
    assert_eq!(format_label("-3deg"), Some("-3".into()));
    assert_eq!(format_label("#42"), Some("42".into()));
    assert_eq!(format_label("n/a"), None);
    assert_eq!(format_value(2.0), "2");
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(-0.25), "-0.2");
}
