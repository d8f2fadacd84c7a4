use std::cell::RefCell;
use std::rc::Rc;

use dialkit::prelude::*;

/// Center-relative pointer offset that lands on `fraction` of the dial's travel.
fn offset_for(dial: &Dial, fraction: f64) -> (f64, f64) {
    let geom = dial.geometry();
    let angle = geom.start_angle() + fraction * geom.sweep();
    (-angle.sin(), -angle.cos())
}

fn recorder() -> (Callbacks, Rc<RefCell<Vec<ValueEvent>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (start, change, end) = (log.clone(), log.clone(), log.clone());
    let callbacks = Callbacks::new()
        .on_change_start(move |v| start.borrow_mut().push(ValueEvent::ChangeStart(v)))
        .on_change(move |v| change.borrow_mut().push(ValueEvent::Change(v)))
        .on_change_end(move |v| end.borrow_mut().push(ValueEvent::ChangeEnd(v)));
    (callbacks, log)
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_invalid_range() {
    let err = Dial::new(DialConfig::new(10.0, 5.0)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidRange { min: 10.0, max: 5.0 });
}

#[test]
fn test_invalid_step_count() {
    let err = Dial::new(DialConfig::new(0.0, 100.0).step_count(1)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidStepCount(1));
}

#[test]
fn test_default_out_of_range() {
    let err = Dial::new(DialConfig::new(0.0, 100.0).default_value(150.0)).unwrap_err();
    assert!(matches!(err, ConfigError::DefaultOutOfRange { value, .. } if value == 150.0));
}

#[test]
fn test_invalid_angle_offset() {
    let err = Dial::new(DialConfig::new(0.0, 1.0).angle_offset(180.0)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidAngleOffset(180.0));

    let err = Dial::new(DialConfig::new(0.0, 1.0).angle_offset(270.0)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidAngleOffset(270.0));
    assert!(Dial::new(DialConfig::new(0.0, 1.0).angle_offset(179.0)).is_ok());
}

#[test]
fn test_default_value_sets_initial_fraction() {
    let dial = Dial::new(DialConfig::new(0.0, 200.0).default_value(50.0)).unwrap();
    assert_eq!(dial.fraction(), 0.25);
    assert_eq!(dial.value(), 50.0);
    assert!(!dial.is_active());
}

#[test]
fn test_stepped_default_is_snapped() {
    let dial = Dial::new(DialConfig::new(0.0, 100.0).step_count(3).default_value(30.0)).unwrap();
    assert_eq!(dial.fraction(), 0.5);
}

#[test]
fn test_degenerate_range_rests_at_start() {
    let dial = Dial::new(DialConfig::new(7.0, 7.0)).unwrap();
    assert_eq!(dial.fraction(), 0.0);
    assert_eq!(dial.value(), 7.0);
}

// =============================================================================
// Interaction
// =============================================================================

#[test]
fn test_session_lifecycle() {
    let (callbacks, log) = recorder();
    let mut dial = Dial::new(DialConfig::new(0.0, 100.0))
        .unwrap()
        .with_callbacks(callbacks);

    assert_eq!(dial.press(), Some(ValueEvent::ChangeStart(0.0)));
    assert!(dial.is_active());

    let (x, y) = offset_for(&dial, 0.5);
    let event = dial.move_to_offset(x, y).unwrap();
    assert!((event.value() - 50.0).abs() < 1e-9);

    let end = dial.release().unwrap();
    assert!(matches!(end, ValueEvent::ChangeEnd(v) if (v - 50.0).abs() < 1e-9));
    assert!(!dial.is_active());

    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut dial = Dial::new(DialConfig::new(0.0, 100.0)).unwrap();
    assert_eq!(dial.move_to_offset(0.0, 1.0), None);
    assert_eq!(dial.release(), None);
    assert_eq!(dial.fraction(), 0.0);
}

#[test]
fn test_disabled_ignores_press() {
    let mut dial = Dial::new(DialConfig::new(0.0, 100.0).disabled(true)).unwrap();
    assert_eq!(dial.press(), None);
    assert!(!dial.is_active());
}

#[test]
fn test_leave_behaves_as_release() {
    let mut dial = Dial::new(DialConfig::new(0.0, 100.0)).unwrap();
    dial.press();
    let (x, y) = offset_for(&dial, 0.5);
    dial.move_to_offset(x, y);
    let end = dial.leave().unwrap();
    assert!(matches!(end, ValueEvent::ChangeEnd(_)));
    assert!(!dial.is_active());
    assert_eq!(dial.leave(), None);
}

#[test]
fn test_continuous_dial_reports_every_move() {
    let mut dial = Dial::new(DialConfig::new(0.0, 1.0)).unwrap();
    dial.press();
    let (x, y) = offset_for(&dial, 0.4);
    assert!(dial.move_to_offset(x, y).is_some());
    assert!(dial.move_to_offset(x, y).is_some());
}

#[test]
fn test_stepped_drag_emits_one_change_at_snap_boundary() {
    let (callbacks, log) = recorder();
    let mut dial = Dial::new(DialConfig::new(0.0, 300.0).step_count(4))
        .unwrap()
        .with_callbacks(callbacks);

    dial.press();
    for fraction in [0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3] {
        let (x, y) = offset_for(&dial, fraction);
        dial.move_to_offset(x, y);
    }

    let changes: Vec<f64> = log
        .borrow()
        .iter()
        .filter_map(|e| match e {
            ValueEvent::Change(v) => Some(*v),
            _ => None,
        })
        .collect();
    assert_eq!(changes.len(), 1);
    assert!((changes[0] - 100.0).abs() < 1e-9);
    assert_eq!(dial.fraction(), 1.0 / 3.0);
}

#[test]
fn test_stepped_dial_reaches_exactly_step_count_fractions() {
    let mut dial = Dial::new(DialConfig::new(0.0, 1.0).step_count(5)).unwrap();
    dial.press();
    let mut seen: Vec<f64> = Vec::new();
    for i in 0..=200 {
        let (x, y) = offset_for(&dial, i as f64 / 200.0);
        dial.move_to_offset(x, y);
        if !seen.contains(&dial.fraction()) {
            seen.push(dial.fraction());
        }
    }
    assert_eq!(seen, dialkit::dialmath::step_fractions(5));
}

#[test]
fn test_reset_on_end_returns_to_default() {
    let mut dial = Dial::new(
        DialConfig::new(0.0, 100.0)
            .default_value(25.0)
            .reset_on_end(true),
    )
    .unwrap();
    dial.press();
    let (x, y) = offset_for(&dial, 0.9);
    dial.move_to_offset(x, y);

    // The end notification reports where the drag stopped.
    let end = dial.release().unwrap();
    assert!((end.value() - 90.0).abs() < 1e-9);
    assert_eq!(dial.value(), 25.0);
}

#[test]
fn test_pointer_move_uses_box_coordinates() {
    let mut dial = Dial::new(DialConfig::new(0.0, 100.0)).unwrap();
    let bounds = Bounds::new(100.0, 90.0);
    dial.press();
    // Straight above the center: half way.
    let event = dial.pointer_move(Point::new(50.0, 0.0), bounds).unwrap();
    assert!((event.value() - 50.0).abs() < 1e-9);
    // Far left edge at center height: the low side of the arc.
    let center_y = bounds.height / dial.geometry().height_fraction;
    let event = dial.pointer_move(Point::new(0.0, center_y), bounds).unwrap();
    assert!((event.value() - 20.0).abs() < 1e-9);
}

#[test]
fn test_drag_along_collects_session() {
    let mut dial = Dial::new(DialConfig::new(0.0, 100.0)).unwrap();
    let events = dial.drag_along(&[Point::new(50.0, 0.0)], Bounds::new(100.0, 90.0));
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], ValueEvent::ChangeStart(_)));
    assert!(matches!(events[1], ValueEvent::Change(_)));
    assert!(matches!(events[2], ValueEvent::ChangeEnd(_)));
}

// =============================================================================
// Presentation values
// =============================================================================

#[test]
fn test_label() {
    let dial = Dial::new(
        DialConfig::new(0.0, 10.0)
            .default_value(2.5)
            .text_round_precision(1)
            .suffix(" dB"),
    )
    .unwrap();
    assert_eq!(dial.label().as_deref(), Some("2.5 dB"));

    let hidden = Dial::new(DialConfig::new(0.0, 10.0).display_text(false)).unwrap();
    assert_eq!(hidden.label(), None);
}

#[test]
fn test_label_rounds_halfway_values_up() {
    let dial = Dial::new(DialConfig::new(0.0, 10.0).default_value(2.5)).unwrap();
    assert_eq!(dial.label().as_deref(), Some("3"));

    let dial = Dial::new(
        DialConfig::new(0.0, 1.0)
            .default_value(0.125)
            .text_round_precision(2),
    )
    .unwrap();
    assert_eq!(dial.label().as_deref(), Some("0.13"));
}

#[test]
fn test_step_marks_follow_step_count() {
    let mut dial = Dial::new(DialConfig::new(0.0, 1.0)).unwrap();
    assert!(dial.step_marks_deg().is_empty());

    dial.set_step_count(Some(4)).unwrap();
    assert_eq!(dial.step_marks_deg().len(), 2);
    assert_eq!(dial.set_step_count(Some(0)), Err(ConfigError::InvalidStepCount(0)));
    assert_eq!(dial.config().step_count, Some(4));
}

#[test]
fn test_set_step_count_resnaps_position() {
    let mut dial = Dial::new(DialConfig::new(0.0, 100.0).default_value(40.0)).unwrap();
    assert_eq!(dial.fraction(), 0.4);
    dial.set_step_count(Some(3)).unwrap();
    assert_eq!(dial.fraction(), 0.5);
}

#[test]
fn test_set_angle_offset_recomputes_geometry() {
    let mut dial = Dial::new(DialConfig::new(0.0, 1.0)).unwrap();
    let before = *dial.geometry();
    dial.set_angle_offset(120.0).unwrap();
    assert_ne!(*dial.geometry(), before);
    assert_eq!(dial.geometry().height_fraction, 1.0);
    assert!(dial.set_angle_offset(f64::NAN).is_err());
}

#[test]
fn test_filled_length_tracks_fraction() {
    let dial = Dial::new(DialConfig::new(0.0, 100.0).default_value(50.0)).unwrap();
    let expected = dial.geometry().arc_length() / 2.0;
    assert!((dial.filled_length() - expected).abs() < 1e-9);
    assert!((dial.thumb_rotation_deg() - 90.0).abs() < 1e-9);
}
