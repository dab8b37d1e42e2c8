// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use range_slider::app::config::{self, Crossing};
use range_slider::app::i18n::fluent::I18n;
use range_slider::domain::slider::{
    drag, drag_lower, drag_upper, CrossingPolicy, DragOutcome, RangeValues, SliderRange, Thumb,
    TrackGeometry,
};
use std::fs;
use tempfile::tempdir;

const EPSILON: f32 = 1e-3;

fn reference_setup() -> (SliderRange, TrackGeometry, RangeValues) {
    let range = SliderRange::new(0.0, 100.0).expect("valid range");
    let geometry = TrackGeometry::new(200.0, 28.0);
    (range, geometry, RangeValues::new(0.0, 50.0))
}

#[test]
fn reference_values_map_to_expected_offsets() {
    let (range, geometry, values) = reference_setup();
    assert_abs_diff_eq!(geometry.location_for_value(&range, values.lower), 0.0);
    assert_abs_diff_eq!(
        geometry.location_for_value(&range, values.upper),
        100.0,
        epsilon = EPSILON
    );
}

#[test]
fn dragging_upper_thumb_to_150_selects_75() {
    let (range, geometry, mut values) = reference_setup();
    let outcome = drag_upper(&mut values, 150.0, &range, &geometry, CrossingPolicy::Hold);

    assert!(matches!(outcome, DragOutcome::Moved(_)));
    assert_abs_diff_eq!(values.upper, 75.0, epsilon = EPSILON);
    assert_abs_diff_eq!(values.lower, 0.0);
}

#[test]
fn dragging_lower_thumb_left_of_track_pins_to_min() {
    let (range, geometry, mut values) = reference_setup();
    values.lower = 20.0;

    let outcome = drag_lower(&mut values, -10.0, &range, &geometry, CrossingPolicy::Hold);

    assert_eq!(outcome, DragOutcome::Clamped(0.0));
    assert_abs_diff_eq!(values.lower, 0.0);
}

#[test]
fn dragging_upper_thumb_right_of_track_pins_to_max() {
    let (range, geometry, mut values) = reference_setup();
    let outcome = drag_upper(&mut values, 260.0, &range, &geometry, CrossingPolicy::Hold);

    assert_eq!(outcome, DragOutcome::Clamped(100.0));
    assert_abs_diff_eq!(values.upper, 100.0);
}

#[test]
fn repeated_samples_are_idempotent() {
    let (range, geometry, mut values) = reference_setup();

    drag(Thumb::Lower, &mut values, 40.0, &range, &geometry, CrossingPolicy::Hold);
    let first = values;
    drag(Thumb::Lower, &mut values, 40.0, &range, &geometry, CrossingPolicy::Hold);

    assert_eq!(values, first);
}

#[test]
fn lower_thumb_dragged_past_upper_holds_or_stops() {
    let (range, geometry, values) = reference_setup();

    // Upper sits at 100px, so the lower thumb may travel up to 72px.
    let mut held = values;
    drag_lower(&mut held, 30.0, &range, &geometry, CrossingPolicy::Hold);
    let outcome = drag_lower(&mut held, 150.0, &range, &geometry, CrossingPolicy::Hold);
    assert_eq!(outcome, DragOutcome::Held);
    assert_abs_diff_eq!(held.lower, 15.0, epsilon = EPSILON);

    let mut stopped = values;
    let outcome = drag_lower(&mut stopped, 150.0, &range, &geometry, CrossingPolicy::Stop);
    assert!(matches!(outcome, DragOutcome::Clamped(_)));
    assert_abs_diff_eq!(stopped.lower, 36.0, epsilon = EPSILON);
    assert!(stopped.lower <= stopped.upper);
}

#[test]
fn degenerate_ranges_are_rejected() {
    assert!(SliderRange::new(5.0, 5.0).is_err());
    assert!(SliderRange::new(10.0, 0.0).is_err());
    assert!(SliderRange::new(f32::NAN, 1.0).is_err());
}

#[test]
fn config_file_drives_range_and_language() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[general]
language = "fr"

[slider]
min = -50.0
max = 50.0
lower = -60.0
upper = 10.0
crossing = "stop"
"#,
    )
    .expect("Failed to write config file");

    let config = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(config.slider.crossing, Crossing::Stop);

    let range = config.slider.range().expect("valid range");
    assert_abs_diff_eq!(range.min(), -50.0);
    assert_abs_diff_eq!(range.max(), 50.0);
    assert_eq!(
        config.slider.initial_values(&range),
        RangeValues::new(-50.0, 10.0)
    );

    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[slider\nmin = ")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, config::Config::default());
    assert_eq!(warning.as_deref(), Some(config::WARNING_LOAD_ERROR));
}

#[derive(Debug, Clone)]
struct Sample {
    thumb: Thumb,
    /// Pointer offset as a fraction of the track width.
    fraction: f32,
}

fn sample() -> impl Strategy<Value = Sample> {
    (any::<bool>(), -0.3f32..1.3).prop_map(|(lower, fraction)| Sample {
        thumb: if lower { Thumb::Lower } else { Thumb::Upper },
        fraction,
    })
}

fn policy() -> impl Strategy<Value = CrossingPolicy> {
    prop_oneof![Just(CrossingPolicy::Hold), Just(CrossingPolicy::Stop)]
}

/// Arbitrary non-degenerate range, including fractional bounds.
fn slider_range() -> impl Strategy<Value = SliderRange> {
    (-1000.0f32..1000.0, 0.5f32..2000.0)
        .prop_map(|(min, span)| SliderRange::new(min, min + span).expect("span is positive"))
}

fn track() -> impl Strategy<Value = TrackGeometry> {
    (60.0f32..800.0, 8.0f32..40.0)
        .prop_map(|(track_width, thumb_size)| TrackGeometry::new(track_width, thumb_size))
}

fn starting_values(range: &SliderRange) -> RangeValues {
    RangeValues::new(range.min(), range.clamp(range.min() + range.span() / 2.0))
}

proptest! {
    #[test]
    fn lower_never_exceeds_upper(
        range in slider_range(),
        geometry in track(),
        samples in prop::collection::vec(sample(), 1..64),
        policy in policy(),
    ) {
        let mut values = starting_values(&range);

        for Sample { thumb, fraction } in samples {
            let x = fraction * geometry.track_width;
            drag(thumb, &mut values, x, &range, &geometry, policy);
            prop_assert!(values.lower <= values.upper, "{values:?} after {thumb:?} at {x}");
            prop_assert!(range.contains(values.lower), "{values:?} outside {range:?}");
            prop_assert!(range.contains(values.upper), "{values:?} outside {range:?}");
        }
    }

    #[test]
    fn track_ends_select_exact_bounds(
        range in slider_range(),
        geometry in track(),
        past_end in 0.0f32..200.0,
        before_start in 0.001f32..200.0,
        policy in policy(),
    ) {
        let mut values = starting_values(&range);

        drag_upper(&mut values, geometry.track_width + past_end, &range, &geometry, policy);
        prop_assert_eq!(values.upper, range.max());

        drag_lower(&mut values, -before_start, &range, &geometry, policy);
        prop_assert_eq!(values.lower, range.min());
    }

    #[test]
    fn location_round_trips_through_value(
        range in slider_range(),
        geometry in track(),
        fraction in 0.0f32..=1.0,
    ) {
        let value = range.clamp(range.min() + fraction * range.span());
        let location = geometry.location_for_value(&range, value);
        let back = geometry.value_for_location(&range, location);
        let tolerance = 1e-4 * range.min().abs().max(range.max().abs()).max(1.0);
        prop_assert!((back - value).abs() < tolerance, "{back} != {value}");
    }
}
