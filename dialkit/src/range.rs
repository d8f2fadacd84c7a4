//! Validated value range shared by every slider.

use dialmath::map;

use crate::error::{ConfigError, Result};

/// An ordered `[min, max]` pair with finite bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Create a range, rejecting `min > max` and non-finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `min == max`, i.e. every fraction maps to the same value.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check that `value` is a usable default for this range.
    pub fn check_default(&self, value: f64) -> Result<f64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ConfigError::DefaultOutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Normalize `value` to a fraction of the range.
    ///
    /// A degenerate range has no meaningful position; it reports 0.
    pub fn to_fraction(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        map(value, self.min, self.max, 0.0, 1.0, false)
    }

    /// Value at `fraction` of the range.
    pub fn to_value(&self, fraction: f64) -> f64 {
        map(fraction, 0.0, 1.0, self.min, self.max, false)
    }
}

/// Reject step counts below 2.
pub(crate) fn check_step_count(step_count: u32) -> Result<u32> {
    if step_count < 2 {
        Err(ConfigError::InvalidStepCount(step_count))
    } else {
        Ok(step_count)
    }
}
