//! Configuration errors raised when a widget is constructed.

use thiserror::Error;

/// Result alias for widget construction and reconfiguration.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Invalid widget configuration.
///
/// These are raised synchronously by constructors and setters. A widget is
/// never left half-configured: on error nothing was changed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `min` is greater than `max`, or a bound is not a finite number.
    #[error("invalid range: min {min} must not exceed max {max}")]
    InvalidRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// The default value lies outside `[min, max]`.
    #[error("default value {value} must be between {min} and {max}")]
    DefaultOutOfRange {
        /// The rejected default value.
        value: f64,
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },

    /// A stepped widget needs at least a start and an end position.
    #[error("step count must be at least 2, got {0}")]
    InvalidStepCount(u32),

    /// The dial dead zone must leave a non-empty travel arc.
    #[error("angle offset must be within [0, 180) degrees, got {0}")]
    InvalidAngleOffset(f64),
}
