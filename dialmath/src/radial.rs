//! Polar geometry of a radial (dial-style) slider.
//!
//! The dial is drawn as an arc with a dead zone of `angle_offset` on each side
//! of the bottom. All lengths are in view-box units where the full dial is
//! 100 units across, so a host only has to scale the result.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::math::{RAD_TO_DEG, clamp_to, map};

/// Dead zone used when a dial does not specify one, in degrees.
pub const DEFAULT_ANGLE_OFFSET: f64 = 30.0;

/// Size of one dial radius in `em`, used by [`RadialGeometry::em_size`].
const EM_PER_RADIUS: f64 = 5.625;

/// Extra `em` around the dial for the stroke and thumb overhang.
const EM_MARGIN: f64 = 0.75;

/// Angle of a pointer offset from the dial center, in `[0, 2π]`.
///
/// `y` points up. The angle grows clockwise from straight down, so the left
/// side of the dial reads `π/2`, the top `π` and the right side `3π/2`.
pub fn pointer_angle(x: f64, y: f64) -> f64 {
    x.atan2(y) + PI
}

/// Render parameters of a dial, derived from its angle offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadialGeometry {
    /// Dead zone on either side of the bottom, in radians.
    pub angle_offset: f64,
    /// Horizontal extent in radii, in `[0, 2]`.
    pub width_fraction: f64,
    /// Vertical extent in radii, in `[1, 2]`.
    pub height_fraction: f64,
    pub stroke_half_width: f64,
    pub radius: f64,
}

/// The track arc as an SVG-style relative arc command.
///
/// The arc starts at `start`, sweeps clockwise with `radius` and ends at
/// `start + (chord, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcPath {
    pub start: (f64, f64),
    pub radius: f64,
    pub large_arc: bool,
    pub chord: f64,
}

/// A position inside the view box as fractions of its width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub left: f64,
    pub top: f64,
}

impl RadialGeometry {
    /// Compute the geometry for a dead zone of `angle_offset_deg` degrees.
    pub fn new(angle_offset_deg: f64) -> Self {
        let angle_offset = angle_offset_deg.to_radians();
        let width_fraction = 2.0 * clamp_to(angle_offset, FRAC_PI_2, PI).sin();
        let height_fraction = 1.0 + angle_offset.cos().max(0.0);
        let stroke_half_width = (100.0 / 32.0) / clamp_to(height_fraction, 0.0, 1.0);
        let radius = 50.0 - stroke_half_width;

        Self {
            angle_offset,
            width_fraction,
            height_fraction,
            stroke_half_width,
            radius,
        }
    }

    /// Angle at which the travel range starts (fraction 0).
    pub fn start_angle(&self) -> f64 {
        self.angle_offset
    }

    /// Angle at which the travel range ends (fraction 1).
    pub fn end_angle(&self) -> f64 {
        TAU - self.angle_offset
    }

    /// Total angle the thumb can travel, excluding the dead zone.
    pub fn sweep(&self) -> f64 {
        TAU - 2.0 * self.angle_offset
    }

    /// Length of the track arc.
    pub fn arc_length(&self) -> f64 {
        self.sweep() * self.radius
    }

    /// Length of the highlighted part of the arc for `fraction`.
    pub fn filled_length(&self, fraction: f64) -> f64 {
        fraction * self.arc_length()
    }

    /// View box `(width, height)` that fits the arc and its stroke.
    pub fn view_box(&self) -> (f64, f64) {
        let s = self.stroke_half_width;
        (
            self.width_fraction * self.radius + 2.0 * s,
            self.height_fraction.max(1.0) * self.radius + 2.0 * s,
        )
    }

    /// Outer size of the dial in `em`.
    pub fn em_size(&self) -> (f64, f64) {
        (
            EM_PER_RADIUS * self.width_fraction + EM_MARGIN,
            EM_PER_RADIUS * self.height_fraction.max(1.0) + EM_MARGIN,
        )
    }

    /// The track arc, starting at the low end of the travel range.
    pub fn arc(&self) -> ArcPath {
        let s = self.stroke_half_width;
        let r = self.radius;
        let off = self.angle_offset;

        ArcPath {
            start: (
                s + (1.0 - clamp_to(off, 0.0, FRAC_PI_2).sin()) * r,
                s + (1.0 + off.cos()) * r,
            ),
            radius: r,
            large_arc: off <= FRAC_PI_2,
            chord: 2.0 * off.sin() * r,
        }
    }

    /// Rotation of the thumb for `fraction`, in degrees.
    ///
    /// The thumb is drawn pointing left (toward `-x`), so fraction 0 sits at
    /// `-(90° - offset)` and fraction 1 at `270° - offset`.
    pub fn thumb_rotation_deg(&self, fraction: f64) -> f64 {
        let (from, to) = self.rotation_span_deg();
        map(fraction, 0.0, 1.0, from, to, false)
    }

    /// Rotations of the interior tick marks of a stepped dial, in degrees.
    ///
    /// The two end positions coincide with the ends of the arc and get no mark.
    pub fn step_marks_deg(&self, step_count: u32) -> Vec<f64> {
        if step_count < 2 {
            return Vec::new();
        }
        let (from, to) = self.rotation_span_deg();
        let last = f64::from(step_count - 1);
        (1..step_count - 1)
            .map(|i| map(f64::from(i), 0.0, last, from, to, false))
            .collect()
    }

    /// Vertical position of the value label as a fraction of the view box.
    pub fn label_top(&self) -> f64 {
        let s = self.stroke_half_width;
        let r = self.radius;
        (r + s) / (self.height_fraction * r + 2.0 * s)
    }

    /// Pivot of the thumb as fractions of the view box.
    pub fn thumb_anchor(&self) -> Anchor {
        let s = self.stroke_half_width;
        let r = self.radius;
        Anchor {
            left: (r * (self.width_fraction / 2.0) - s) / (self.width_fraction * r + 2.0 * s),
            top: (r - s) / (self.height_fraction * r + 2.0 * s),
        }
    }

    /// Pivot of the tick marks as fractions of the view box.
    pub fn step_anchor(&self) -> Anchor {
        let s = self.stroke_half_width;
        let r = self.radius;
        Anchor {
            left: (r * (self.width_fraction / 2.0) + s / 2.0)
                / (self.width_fraction * r + 2.0 * s),
            top: (r + s / 2.0) / (self.height_fraction * r + 2.0 * s),
        }
    }

    /// Convert a pointer position relative to the dial box's top-left corner
    /// into an offset from the dial center with `y` pointing up.
    ///
    /// The position is clamped to the box first, so dragging outside the dial
    /// keeps tracking along its edge.
    pub fn center_offset(&self, px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
        let x = clamp_to(px, 0.0, width) - width / 2.0;
        let y = -clamp_to(py, 0.0, height) + height / self.height_fraction;
        (x, y)
    }

    /// Fraction of travel for a pointer at center-relative offset `(x, y)`.
    ///
    /// Pointers inside the dead zone stick to the nearest end.
    pub fn pointer_fraction(&self, x: f64, y: f64) -> f64 {
        let start = self.start_angle();
        let end = self.end_angle();
        let angle = clamp_to(pointer_angle(x, y), start, end);
        map(angle, start, end, 0.0, 1.0, false)
    }

    fn rotation_span_deg(&self) -> (f64, f64) {
        let off = self.angle_offset;
        (
            -(FRAC_PI_2 - off) * RAD_TO_DEG,
            (PI + FRAC_PI_2 - off) * RAD_TO_DEG,
        )
    }
}

impl Default for RadialGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE_OFFSET)
    }
}
