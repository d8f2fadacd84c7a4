//! Horizontal slider with a fixed number of positions.

use dialmath::{snap_fraction, step_fractions, stepped_track_fraction};
use log::{debug, trace};

use crate::config::SteppedSliderConfig;
use crate::error::Result;
use crate::event::{Callbacks, ValueEvent};
use crate::interaction::{Bounds, Interaction, Point, PointerTarget};
use crate::range::ValueRange;

/// A linear slider that snaps to `step_count` evenly spaced positions.
///
/// A change is reported only when the pointer crosses into a different
/// position, never for movement within the same step.
#[derive(Debug)]
pub struct SteppedSlider {
    config: SteppedSliderConfig,
    range: ValueRange,
    default_fraction: f64,
    state: Interaction,
    callbacks: Callbacks,
}

impl SteppedSlider {
    pub fn new(config: SteppedSliderConfig) -> Result<Self> {
        let range = config.validate()?;
        let default_fraction = snap_fraction(
            range.to_fraction(config.resolved_default()),
            Some(config.step_count),
        );

        Ok(Self {
            config,
            range,
            default_fraction,
            state: Interaction::new(default_fraction),
            callbacks: Callbacks::default(),
        })
    }

    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn callbacks_mut(&mut self) -> &mut Callbacks {
        &mut self.callbacks
    }

    pub fn config(&self) -> &SteppedSliderConfig {
        &self.config
    }

    pub fn state(&self) -> Interaction {
        self.state
    }

    /// Position of the thumb along the track, always one of [`Self::positions`].
    pub fn thumb_fraction(&self) -> f64 {
        self.state.fraction
    }

    pub fn value(&self) -> f64 {
        self.range.to_value(self.state.fraction)
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Every fraction the thumb can rest at, ends included.
    pub fn positions(&self) -> Vec<f64> {
        step_fractions(self.config.step_count)
    }

    /// Track fractions of the interior tick marks.
    pub fn step_marks(&self) -> Vec<f64> {
        let mut marks = self.positions();
        if marks.len() >= 2 {
            marks.pop();
            marks.remove(0);
        }
        marks
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    fn emit(&mut self, event: ValueEvent) -> Option<ValueEvent> {
        self.callbacks.dispatch(event);
        Some(event)
    }
}

impl PointerTarget for SteppedSlider {
    fn press(&mut self) -> Option<ValueEvent> {
        if self.config.disabled {
            return None;
        }
        self.state.active = true;
        debug!("Stepped slider session started at {}", self.value());
        self.emit(ValueEvent::ChangeStart(self.value()))
    }

    fn pointer_move(&mut self, pos: Point, bounds: Bounds) -> Option<ValueEvent> {
        if !self.state.active || bounds.width <= 0.0 {
            return None;
        }
        let fraction = stepped_track_fraction(pos.x, bounds.width, self.config.step_count);
        if fraction == self.state.fraction {
            return None;
        }
        self.state.fraction = fraction;
        trace!("Stepped slider moved to fraction {}", fraction);
        self.emit(ValueEvent::Change(self.value()))
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
        debug!("Stepped slider session ended at {}", value);
        self.emit(ValueEvent::ChangeEnd(value))
    }
}
