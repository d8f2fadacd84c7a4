pub mod config;
pub mod dial;
pub mod error;
pub mod event;
pub mod input;
pub mod interaction;
pub mod range;
pub mod scrollbar;
pub mod slider;
pub mod stepped;
pub mod text;

pub use dialmath;

pub mod prelude {
    pub use crate::config::{
        DialConfig, HorizontalSide, ScrollBarConfig, ScrollDirection, SliderConfig,
        SteppedSliderConfig, VerticalSide,
    };
    pub use crate::dial::Dial;
    pub use crate::error::{ConfigError, Result};
    pub use crate::event::{Callbacks, ValueEvent};
    pub use crate::input::InputField;
    pub use crate::interaction::{Bounds, Interaction, Point, PointerTarget};
    pub use crate::range::ValueRange;
    pub use crate::scrollbar::{Axis, ScrollBar, ScrollEvent, ScrollMetrics, Thumb};
    pub use crate::slider::Slider;
    pub use crate::stepped::SteppedSlider;
    pub use crate::text::format_value;
}
