//! Synthetic scrollbar for a scroll container.
//!
//! The host owns the actual scroll container. It reports the container's
//! metrics through [`ScrollBar::sync`] and applies the scroll requests
//! returned by [`ScrollBar::drag`] and [`ScrollBar::track_click`]. The
//! scrollbar only tracks drag state and maps bar coordinates onto content
//! coordinates.

use std::fmt;

use dialmath::map;
use log::{debug, trace};

use crate::config::{HorizontalSide, ScrollBarConfig, VerticalSide};
use crate::interaction::{Bounds, Point};

/// Scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Scroll state of one axis of the container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset (`scrollTop` / `scrollLeft`).
    pub offset: f64,
    /// Visible size of the container.
    pub client: f64,
    /// Full size of the scrolled content.
    pub content: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, client: f64, content: f64) -> Self {
        Self {
            offset,
            client,
            content,
        }
    }

    /// Largest offset the container can scroll to.
    pub fn max_offset(&self) -> f64 {
        (self.content - self.client).max(0.0)
    }

    pub fn overflows(&self) -> bool {
        self.content > self.client
    }
}

/// Thumb placement as fractions of the bar length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thumb {
    /// Start of the thumb along the bar.
    pub position: f64,
    /// Length of the thumb.
    pub size: f64,
}

impl Default for Thumb {
    fn default() -> Self {
        Self {
            position: 0.0,
            size: 1.0,
        }
    }
}

impl Thumb {
    fn from_metrics(metrics: &ScrollMetrics, enabled: bool) -> Self {
        if metrics.content <= 0.0 {
            return Self::default();
        }
        Self {
            position: if enabled {
                metrics.offset / metrics.content
            } else {
                0.0
            },
            size: metrics.client / metrics.content,
        }
    }
}

/// Scroll notification carrying the container's raw offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollEvent {
    pub x: f64,
    pub y: f64,
}

/// Relative scroll requested by a thumb drag, in content units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Space reserved around the content, in bar thicknesses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct AxisState {
    dragging: bool,
    metrics: ScrollMetrics,
    thumb: Thumb,
}

type ScrollCallback = Box<dyn FnMut(ScrollEvent)>;

/// Drag and thumb state of a vertical and/or horizontal scrollbar.
pub struct ScrollBar {
    config: ScrollBarConfig,
    x: AxisState,
    y: AxisState,
    on_scroll: Option<ScrollCallback>,
}

impl ScrollBar {
    pub fn new(config: ScrollBarConfig) -> Self {
        Self {
            config,
            x: AxisState::default(),
            y: AxisState::default(),
            on_scroll: None,
        }
    }

    /// Register a callback invoked on every [`ScrollBar::sync`].
    pub fn on_scroll(mut self, f: impl FnMut(ScrollEvent) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &ScrollBarConfig {
        &self.config
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.release();
        }
    }

    /// Whether the container scrolls along `axis`.
    pub fn enabled(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.config.direction.horizontal(),
            Axis::Y => self.config.direction.vertical(),
        }
    }

    pub fn thumb(&self, axis: Axis) -> Thumb {
        self.axis(axis).thumb
    }

    pub fn metrics(&self, axis: Axis) -> ScrollMetrics {
        self.axis(axis).metrics
    }

    pub fn is_dragging(&self, axis: Axis) -> bool {
        self.axis(axis).dragging
    }

    /// Animated scrolling is suspended while a thumb is dragged so the
    /// content follows the pointer directly.
    pub fn smooth_scrolling(&self) -> bool {
        !self.x.dragging && !self.y.dragging
    }

    /// Record the container's current metrics after it scrolled or resized.
    ///
    /// Recomputes both thumbs and notifies the scroll callback.
    pub fn sync(&mut self, x: ScrollMetrics, y: ScrollMetrics) -> ScrollEvent {
        let x_enabled = self.enabled(Axis::X);
        let y_enabled = self.enabled(Axis::Y);
        self.x.metrics = x;
        self.x.thumb = Thumb::from_metrics(&x, x_enabled);
        self.y.metrics = y;
        self.y.thumb = Thumb::from_metrics(&y, y_enabled);

        let event = ScrollEvent {
            x: x.offset,
            y: y.offset,
        };
        trace!("ScrollBar synced: {:?}", event);
        if let Some(callback) = self.on_scroll.as_mut() {
            callback(event);
        }
        event
    }

    /// Grab the thumb of `axis`. Returns false when the bar is disabled or
    /// the container does not scroll along `axis`.
    pub fn begin_drag(&mut self, axis: Axis) -> bool {
        if self.config.disabled || !self.enabled(axis) {
            return false;
        }
        self.axis_mut(axis).dragging = true;
        debug!("ScrollBar drag started on {:?}", axis);
        true
    }

    /// Convert pointer movement into a content scroll.
    ///
    /// `bar` holds the on-screen length of the horizontal bar (`width`) and
    /// the vertical bar (`height`). Pointer travel along the bar scales up to
    /// the full content length. Returns `None` when no thumb is dragged.
    pub fn drag(&mut self, movement: Point, bar: Bounds) -> Option<ScrollDelta> {
        if !self.x.dragging && !self.y.dragging {
            return None;
        }
        let delta = ScrollDelta {
            dx: drag_delta(&self.x, movement.x, bar.width),
            dy: drag_delta(&self.y, movement.y, bar.height),
        };
        trace!("ScrollBar drag delta: {:?}", delta);
        Some(delta)
    }

    /// Offset to scroll to after a click at `pos` along the bar of `axis`.
    ///
    /// The clicked point is centered in the viewport. Returns `None` when the
    /// bar is disabled, the axis does not scroll, or the bar has no length.
    pub fn track_click(&self, axis: Axis, pos: f64, bar_length: f64) -> Option<f64> {
        if self.config.disabled || !self.enabled(axis) || bar_length <= 0.0 {
            return None;
        }
        let metrics = self.axis(axis).metrics;
        Some(map(pos, 0.0, bar_length, 0.0, metrics.content, true) - metrics.client / 2.0)
    }

    /// End any thumb drag.
    pub fn release(&mut self) {
        if self.x.dragging || self.y.dragging {
            debug!("ScrollBar drag ended");
        }
        self.x.dragging = false;
        self.y.dragging = false;
    }

    /// Padding around the content, in bar thicknesses.
    ///
    /// An edge carrying a visible bar reserves three thicknesses (gap, bar,
    /// gap). Other edges get one thickness when padding is enabled.
    pub fn padding(&self) -> Padding {
        let base = if self.config.padding { 1.0 } else { 0.0 };
        let reserve = |has_bar: bool| if has_bar && !self.config.hiding { 3.0 } else { base };
        let vertical = self.enabled(Axis::Y);
        let horizontal = self.enabled(Axis::X);

        Padding {
            top: reserve(horizontal && self.config.horizontal_position == HorizontalSide::Top),
            right: reserve(vertical && self.config.vertical_position == VerticalSide::Right),
            bottom: reserve(horizontal && self.config.horizontal_position == HorizontalSide::Bottom),
            left: reserve(vertical && self.config.vertical_position == VerticalSide::Left),
        }
    }

    /// Gaps `(leading, trailing)` between the ends of the bar of `axis` and
    /// the container edges, in bar thicknesses.
    ///
    /// When both bars are shown each one stops short of the other's corner.
    pub fn bar_insets(&self, axis: Axis) -> (f64, f64) {
        if !self.config.direction.vertical() || !self.config.direction.horizontal() {
            return (1.0, 1.0);
        }
        let other_at_start = match axis {
            Axis::Y => self.config.horizontal_position == HorizontalSide::Top,
            Axis::X => self.config.vertical_position == VerticalSide::Left,
        };
        if other_at_start { (3.0, 1.0) } else { (1.0, 3.0) }
    }

    fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

fn drag_delta(state: &AxisState, movement: f64, bar_length: f64) -> f64 {
    if !state.dragging || bar_length <= 0.0 {
        return 0.0;
    }
    map(movement, 0.0, bar_length, 0.0, state.metrics.content, false)
}

impl fmt::Debug for ScrollBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollBar")
            .field("config", &self.config)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("on_scroll", &self.on_scroll.is_some())
            .finish()
    }
}
