//! Radial (dial-style) slider.
//!
//! The dial keeps its position as a fraction of the travel arc. Pointer
//! positions are converted to a fraction through the inverse polar mapping,
//! snapped when the dial is stepped, and reported as a value of the
//! configured range.

use dialmath::{RadialGeometry, snap_fraction};
use log::{debug, trace};

use crate::config::{DialConfig, check_angle_offset};
use crate::error::Result;
use crate::event::{Callbacks, ValueEvent};
use crate::interaction::{Bounds, Interaction, Point, PointerTarget};
use crate::range::{ValueRange, check_step_count};
use crate::text::format_value;

/// A radial slider instance.
#[derive(Debug)]
pub struct Dial {
    config: DialConfig,
    range: ValueRange,
    geometry: RadialGeometry,
    /// Fraction the dial starts at and resets to.
    default_fraction: f64,
    state: Interaction,
    callbacks: Callbacks,
}

impl Dial {
    /// Validate `config` and create a dial resting at its default value.
    pub fn new(config: DialConfig) -> Result<Self> {
        let range = config.validate()?;
        let default_fraction =
            snap_fraction(range.to_fraction(config.resolved_default()), config.step_count);
        let geometry = RadialGeometry::new(config.angle_offset);

        debug!(
            "Dial created: range [{}, {}], steps {:?}, angle offset {}",
            config.min, config.max, config.step_count, config.angle_offset
        );

        Ok(Self {
            config,
            range,
            geometry,
            default_fraction,
            state: Interaction::new(default_fraction),
            callbacks: Callbacks::default(),
        })
    }

    /// Register the host's notification callbacks.
    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn callbacks_mut(&mut self) -> &mut Callbacks {
        &mut self.callbacks
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn geometry(&self) -> &RadialGeometry {
        &self.geometry
    }

    pub fn state(&self) -> Interaction {
        self.state
    }

    pub fn fraction(&self) -> f64 {
        self.state.fraction
    }

    /// Current value in the configured range.
    pub fn value(&self) -> f64 {
        self.range.to_value(self.state.fraction)
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn is_stepped(&self) -> bool {
        self.config.step_count.is_some()
    }

    /// The value label, or `None` when the dial hides its text.
    pub fn label(&self) -> Option<String> {
        self.config.display_text.then(|| {
            format_value(
                self.value(),
                self.config.text_round_precision,
                &self.config.suffix,
            )
        })
    }

    /// Length of the highlighted part of the track.
    pub fn filled_length(&self) -> f64 {
        self.geometry.filled_length(self.state.fraction)
    }

    pub fn thumb_rotation_deg(&self) -> f64 {
        self.geometry.thumb_rotation_deg(self.state.fraction)
    }

    /// Rotations of the interior tick marks; empty for a continuous dial.
    pub fn step_marks_deg(&self) -> Vec<f64> {
        self.config
            .step_count
            .map(|n| self.geometry.step_marks_deg(n))
            .unwrap_or_default()
    }

    /// Change the dead zone and recompute the geometry.
    pub fn set_angle_offset(&mut self, degrees: f64) -> Result<()> {
        check_angle_offset(degrees)?;
        self.config.angle_offset = degrees;
        self.geometry = RadialGeometry::new(degrees);
        debug!("Dial angle offset set to {}", degrees);
        Ok(())
    }

    /// Switch between continuous (`None`) and stepped operation.
    ///
    /// The current and default positions are re-snapped to the new grid.
    pub fn set_step_count(&mut self, step_count: Option<u32>) -> Result<()> {
        if let Some(n) = step_count {
            check_step_count(n)?;
        }
        self.config.step_count = step_count;
        self.default_fraction = snap_fraction(
            self.range.to_fraction(self.config.resolved_default()),
            step_count,
        );
        self.state.fraction = snap_fraction(self.state.fraction, step_count);
        debug!("Dial step count set to {:?}", step_count);
        Ok(())
    }

    /// Disabling does not end a session already in progress.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Move the thumb toward a pointer at `(x, y)` from the dial center, `y` up.
    ///
    /// Stepped dials only report a change when the snapped position differs
    /// from the current one.
    pub fn move_to_offset(&mut self, x: f64, y: f64) -> Option<ValueEvent> {
        if !self.state.active {
            return None;
        }
        let fraction = snap_fraction(self.geometry.pointer_fraction(x, y), self.config.step_count);
        if self.is_stepped() && fraction == self.state.fraction {
            return None;
        }
        self.state.fraction = fraction;
        trace!("Dial moved to fraction {}", fraction);
        self.emit(ValueEvent::Change(self.value()))
    }

    fn emit(&mut self, event: ValueEvent) -> Option<ValueEvent> {
        self.callbacks.dispatch(event);
        Some(event)
    }
}

impl PointerTarget for Dial {
    fn press(&mut self) -> Option<ValueEvent> {
        if self.config.disabled {
            return None;
        }
        self.state.active = true;
        debug!("Dial session started at {}", self.value());
        self.emit(ValueEvent::ChangeStart(self.value()))
    }

    fn pointer_move(&mut self, pos: Point, bounds: Bounds) -> Option<ValueEvent> {
        let (x, y) = self
            .geometry
            .center_offset(pos.x, pos.y, bounds.width, bounds.height);
        self.move_to_offset(x, y)
    }

    fn release(&mut self) -> Option<ValueEvent> {
        if !self.state.active {
            return None;
        }
        let value = self.value();
        self.state.active = false;
        if self.config.reset_on_end {
            self.state.fraction = self.default_fraction;
        }
        debug!("Dial session ended at {}", value);
        self.emit(ValueEvent::ChangeEnd(value))
    }
}
