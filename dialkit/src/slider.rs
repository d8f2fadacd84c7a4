//! Continuous horizontal slider.

use dialmath::track_fraction;
use log::{debug, trace};

use crate::config::SliderConfig;
use crate::error::Result;
use crate::event::{Callbacks, ValueEvent};
use crate::interaction::{Bounds, Interaction, Point, PointerTarget};
use crate::range::ValueRange;

/// A continuous linear slider. Every pointer move reports a change.
#[derive(Debug)]
pub struct Slider {
    config: SliderConfig,
    range: ValueRange,
    default_fraction: f64,
    state: Interaction,
    callbacks: Callbacks,
}

impl Slider {
    pub fn new(config: SliderConfig) -> Result<Self> {
        let range = config.validate()?;
        let default_fraction = range.to_fraction(config.resolved_default());

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

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn state(&self) -> Interaction {
        self.state
    }

    /// Position of the thumb along the track, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.state.fraction
    }

    pub fn value(&self) -> f64 {
        self.range.to_value(self.state.fraction)
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    fn emit(&mut self, event: ValueEvent) -> Option<ValueEvent> {
        self.callbacks.dispatch(event);
        Some(event)
    }
}

impl PointerTarget for Slider {
    fn press(&mut self) -> Option<ValueEvent> {
        if self.config.disabled {
            return None;
        }
        self.state.active = true;
        debug!("Slider session started at {}", self.value());
        self.emit(ValueEvent::ChangeStart(self.value()))
    }

    /// Only `pos.x` and `bounds.width` matter: the track runs left to right.
    fn pointer_move(&mut self, pos: Point, bounds: Bounds) -> Option<ValueEvent> {
        if !self.state.active || bounds.width <= 0.0 {
            return None;
        }
        self.state.fraction = track_fraction(pos.x, bounds.width);
        trace!("Slider moved to fraction {}", self.state.fraction);
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
        debug!("Slider session ended at {}", value);
        self.emit(ValueEvent::ChangeEnd(value))
    }
}
