//! Pointer interaction shared by every slider widget.
//!
//! A session is press, zero or more moves, then release. The pointer leaving
//! the widget ends the session exactly like a release.

use crate::event::ValueEvent;

/// Per-instance interaction state.
///
/// `fraction` is the current position in `[0, 1]`; the widget maps it onto
/// its value range when it reports a value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interaction {
    /// A pointer is currently dragging the widget.
    pub active: bool,
    pub fraction: f64,
}

impl Interaction {
    pub fn new(fraction: f64) -> Self {
        Self {
            active: false,
            fraction,
        }
    }
}

/// Pointer position relative to the widget's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the widget's interactive box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A widget driven by a single pointer.
///
/// Each method returns the notification it produced, if any. Implementations
/// also forward that notification to their registered callbacks.
pub trait PointerTarget {
    /// Pointer pressed on the thumb. Ignored while disabled.
    fn press(&mut self) -> Option<ValueEvent>;

    /// Pointer moved. Ignored unless a session is active.
    fn pointer_move(&mut self, pos: Point, bounds: Bounds) -> Option<ValueEvent>;

    /// Pointer released. Ignored unless a session is active.
    fn release(&mut self) -> Option<ValueEvent>;

    /// Pointer left the widget.
    fn leave(&mut self) -> Option<ValueEvent> {
        self.release()
    }

    /// Run a full press-move-release session along `path`.
    fn drag_along(&mut self, path: &[Point], bounds: Bounds) -> Vec<ValueEvent> {
        let mut events = Vec::new();
        events.extend(self.press());
        for pos in path {
            events.extend(self.pointer_move(*pos, bounds));
        }
        events.extend(self.release());
        events
    }
}
