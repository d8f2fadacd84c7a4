//! Widget configuration types.
//!
//! Each config is a plain record with builder methods and serde support, so
//! hosts can either build it in code or load it from JSON with the same
//! camelCase option names (`defaultValue`, `stepCount`, ...).

use dialmath::DEFAULT_ANGLE_OFFSET;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::range::{ValueRange, check_step_count};

fn default_angle_offset() -> f64 {
    DEFAULT_ANGLE_OFFSET
}

fn default_true() -> bool {
    true
}

fn default_step_count() -> u32 {
    4
}

/// Configuration of a radial dial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialConfig {
    pub min: f64,
    pub max: f64,

    /// Initial value. Defaults to `min`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,

    /// Number of positions. `None` makes the dial continuous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_count: Option<u32>,

    /// Dead zone at the bottom of the dial, in degrees.
    ///
    /// Must lie in `[0, 180)`. Wider dead zones leave no arc to travel along
    /// and are rejected with [`ConfigError::InvalidAngleOffset`].
    #[serde(default = "default_angle_offset")]
    pub angle_offset: f64,

    /// Whether the value label is shown.
    #[serde(default = "default_true")]
    pub display_text: bool,

    /// Appended to the value label.
    #[serde(default)]
    pub suffix: String,

    /// Decimal places of the value label.
    #[serde(default)]
    pub text_round_precision: usize,

    /// Return to the default value when an interaction ends.
    #[serde(default)]
    pub reset_on_end: bool,

    #[serde(default)]
    pub disabled: bool,
}

impl DialConfig {
    /// Create a continuous dial over `[min, max]` with default options.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            default_value: None,
            step_count: None,
            angle_offset: DEFAULT_ANGLE_OFFSET,
            display_text: true,
            suffix: String::new(),
            text_round_precision: 0,
            reset_on_end: false,
            disabled: false,
        }
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Turn the dial into a stepped dial with `count` positions.
    pub fn step_count(mut self, count: u32) -> Self {
        self.step_count = Some(count);
        self
    }

    /// Set the dead zone in degrees, within `[0, 180)`.
    pub fn angle_offset(mut self, degrees: f64) -> Self {
        self.angle_offset = degrees;
        self
    }

    pub fn display_text(mut self, display: bool) -> Self {
        self.display_text = display;
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn text_round_precision(mut self, precision: usize) -> Self {
        self.text_round_precision = precision;
        self
    }

    pub fn reset_on_end(mut self, reset: bool) -> Self {
        self.reset_on_end = reset;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The default value, falling back to `min`.
    pub fn resolved_default(&self) -> f64 {
        self.default_value.unwrap_or(self.min)
    }

    /// Check every option that could leave the dial unusable and return
    /// the validated range.
    pub fn validate(&self) -> Result<ValueRange> {
        let range = ValueRange::new(self.min, self.max)?;
        range.check_default(self.resolved_default())?;
        if let Some(count) = self.step_count {
            check_step_count(count)?;
        }
        check_angle_offset(self.angle_offset)?;
        Ok(range)
    }
}

/// Reject dead zones that leave no arc to travel along.
pub(crate) fn check_angle_offset(degrees: f64) -> Result<f64> {
    if degrees.is_finite() && (0.0..180.0).contains(&degrees) {
        Ok(degrees)
    } else {
        Err(ConfigError::InvalidAngleOffset(degrees))
    }
}

/// Configuration of a continuous linear slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
    #[serde(default)]
    pub reset_on_end: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl SliderConfig {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            default_value: None,
            reset_on_end: false,
            disabled: false,
        }
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn reset_on_end(mut self, reset: bool) -> Self {
        self.reset_on_end = reset;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn resolved_default(&self) -> f64 {
        self.default_value.unwrap_or(self.min)
    }

    pub fn validate(&self) -> Result<ValueRange> {
        let range = ValueRange::new(self.min, self.max)?;
        range.check_default(self.resolved_default())?;
        Ok(range)
    }
}

/// Configuration of a stepped linear slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteppedSliderConfig {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_step_count")]
    pub step_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
    #[serde(default)]
    pub reset_on_end: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl SteppedSliderConfig {
    /// Create a four-step slider over `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step_count: default_step_count(),
            default_value: None,
            reset_on_end: false,
            disabled: false,
        }
    }

    pub fn step_count(mut self, count: u32) -> Self {
        self.step_count = count;
        self
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn reset_on_end(mut self, reset: bool) -> Self {
        self.reset_on_end = reset;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn resolved_default(&self) -> f64 {
        self.default_value.unwrap_or(self.min)
    }

    pub fn validate(&self) -> Result<ValueRange> {
        let range = ValueRange::new(self.min, self.max)?;
        range.check_default(self.resolved_default())?;
        check_step_count(self.step_count)?;
        Ok(range)
    }
}

/// Which axes a scroll container scrolls along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

impl ScrollDirection {
    pub fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    pub fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }
}

/// Side of the container the vertical bar is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalSide {
    #[default]
    Right,
    Left,
}

/// Side of the container the horizontal bar is attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalSide {
    #[default]
    Bottom,
    Top,
}

/// Configuration of a synthetic scrollbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollBarConfig {
    pub direction: ScrollDirection,
    pub vertical_position: VerticalSide,
    pub horizontal_position: HorizontalSide,
    /// Only show the bars while hovered; hidden bars reserve no space.
    pub hiding: bool,
    pub disabled: bool,
    /// Pad the content by one bar thickness on every edge.
    pub padding: bool,
}

impl Default for ScrollBarConfig {
    fn default() -> Self {
        Self {
            direction: ScrollDirection::Vertical,
            vertical_position: VerticalSide::Right,
            horizontal_position: HorizontalSide::Bottom,
            hiding: false,
            disabled: false,
            padding: true,
        }
    }
}

impl ScrollBarConfig {
    pub fn new(direction: ScrollDirection) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    pub fn vertical_position(mut self, position: VerticalSide) -> Self {
        self.vertical_position = position;
        self
    }

    pub fn horizontal_position(mut self, position: HorizontalSide) -> Self {
        self.horizontal_position = position;
        self
    }

    pub fn hiding(mut self, hiding: bool) -> Self {
        self.hiding = hiding;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }
}
