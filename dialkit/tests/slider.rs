use dialkit::prelude::*;

const TRACK: Bounds = Bounds {
    width: 200.0,
    height: 10.0,
};

fn at(x: f64) -> Point {
    Point::new(x, 5.0)
}

fn changes(events: &[ValueEvent]) -> Vec<f64> {
    events
        .iter()
        .filter_map(|e| match e {
            ValueEvent::Change(v) => Some(*v),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Continuous slider
// =============================================================================

#[test]
fn test_slider_rejects_reversed_range() {
    let err = Slider::new(SliderConfig::new(1.0, 0.0)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidRange { min: 1.0, max: 0.0 });
}

#[test]
fn test_slider_maps_track_position() {
    let mut slider = Slider::new(SliderConfig::new(0.0, 10.0)).unwrap();
    slider.press();
    assert_eq!(slider.pointer_move(at(50.0), TRACK), Some(ValueEvent::Change(2.5)));
    assert_eq!(slider.fraction(), 0.25);
}

#[test]
fn test_slider_clamps_outside_track() {
    let mut slider = Slider::new(SliderConfig::new(0.0, 10.0)).unwrap();
    slider.press();
    assert_eq!(slider.pointer_move(at(-40.0), TRACK), Some(ValueEvent::Change(0.0)));
    assert_eq!(slider.pointer_move(at(400.0), TRACK), Some(ValueEvent::Change(10.0)));
}

#[test]
fn test_slider_reports_repeated_positions() {
    let mut slider = Slider::new(SliderConfig::new(0.0, 1.0)).unwrap();
    let events = slider.drag_along(&[at(100.0), at(100.0)], TRACK);
    assert_eq!(changes(&events), vec![0.5, 0.5]);
}

#[test]
fn test_slider_ignores_zero_width_track() {
    let mut slider = Slider::new(SliderConfig::new(0.0, 1.0)).unwrap();
    slider.press();
    assert_eq!(slider.pointer_move(at(10.0), Bounds::new(0.0, 10.0)), None);
}

#[test]
fn test_slider_reset_on_end() {
    let mut slider =
        Slider::new(SliderConfig::new(0.0, 10.0).default_value(4.0).reset_on_end(true)).unwrap();
    let events = slider.drag_along(&[at(200.0)], TRACK);
    assert_eq!(events.last(), Some(&ValueEvent::ChangeEnd(10.0)));
    assert_eq!(slider.value(), 4.0);
}

#[test]
fn test_slider_disabled() {
    let mut slider = Slider::new(SliderConfig::new(0.0, 1.0).disabled(true)).unwrap();
    assert!(slider.drag_along(&[at(100.0)], TRACK).is_empty());
    slider.set_disabled(false);
    assert_eq!(slider.drag_along(&[at(100.0)], TRACK).len(), 3);
}

#[test]
fn test_slider_leave_ends_session() {
    let mut slider = Slider::new(SliderConfig::new(0.0, 1.0)).unwrap();
    slider.press();
    slider.pointer_move(at(100.0), TRACK);
    assert_eq!(slider.leave(), Some(ValueEvent::ChangeEnd(0.5)));
    assert!(!slider.is_active());
    assert_eq!(slider.pointer_move(at(150.0), TRACK), None);
}

// =============================================================================
// Stepped slider
// =============================================================================

#[test]
fn test_stepped_rejects_single_step() {
    let err = SteppedSlider::new(SteppedSliderConfig::new(0.0, 1.0).step_count(1)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidStepCount(1));
}

#[test]
fn test_stepped_rejects_default_outside_range() {
    let err =
        SteppedSlider::new(SteppedSliderConfig::new(0.0, 1.0).default_value(-1.0)).unwrap_err();
    assert!(matches!(err, ConfigError::DefaultOutOfRange { .. }));
}

#[test]
fn test_stepped_drag_reports_only_step_changes() {
    // Four steps over 0..=30: positions at 0, 10, 20, 30.
    let mut slider = SteppedSlider::new(SteppedSliderConfig::new(0.0, 30.0)).unwrap();
    let path: Vec<Point> = (0..=20).map(|i| at(i as f64 * 3.0)).collect();
    let events = slider.drag_along(&path, TRACK);

    // 60px of a 200px track is 0.3 of the travel: one boundary crossed.
    let values = changes(&events);
    assert_eq!(values.len(), 1);
    assert!((values[0] - 10.0).abs() < 1e-9);
}

#[test]
fn test_stepped_full_sweep_visits_every_step_once() {
    let mut slider =
        SteppedSlider::new(SteppedSliderConfig::new(0.0, 1.0).step_count(5)).unwrap();
    let path: Vec<Point> = (0..=200).map(|i| at(i as f64)).collect();
    let events = slider.drag_along(&path, TRACK);
    assert_eq!(changes(&events), vec![0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_stepped_default_snaps_to_nearest_step() {
    let slider = SteppedSlider::new(SteppedSliderConfig::new(0.0, 1.0).default_value(0.4)).unwrap();
    assert_eq!(slider.thumb_fraction(), 1.0 / 3.0);
}

#[test]
fn test_stepped_marks() {
    let slider =
        SteppedSlider::new(SteppedSliderConfig::new(0.0, 1.0).step_count(5)).unwrap();
    assert_eq!(slider.positions(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(slider.step_marks(), vec![0.25, 0.5, 0.75]);

    let two = SteppedSlider::new(SteppedSliderConfig::new(0.0, 1.0).step_count(2)).unwrap();
    assert!(two.step_marks().is_empty());
}

#[test]
fn test_stepped_reset_on_end() {
    let mut slider = SteppedSlider::new(
        SteppedSliderConfig::new(0.0, 4.0)
            .step_count(5)
            .default_value(2.0)
            .reset_on_end(true),
    )
    .unwrap();
    let events = slider.drag_along(&[at(0.0)], TRACK);
    assert_eq!(events.last(), Some(&ValueEvent::ChangeEnd(0.0)));
    assert_eq!(slider.value(), 2.0);
}
