//! Track mapping for horizontal sliders.

use crate::math::{clamp_to, snap_fraction};

/// Fraction of the track covered by a pointer at `x` from the track start.
///
/// Positions before or past the track stick to its ends. `track_length` must
/// be positive.
pub fn track_fraction(x: f64, track_length: f64) -> f64 {
    clamp_to(x, 0.0, track_length) / track_length
}

/// Like [`track_fraction`], snapped to the nearest of `step_count` positions.
pub fn stepped_track_fraction(x: f64, track_length: f64, step_count: u32) -> f64 {
    snap_fraction(track_fraction(x, track_length), Some(step_count))
}

/// Distance of the thumb from the track start for `fraction`.
pub fn thumb_offset(fraction: f64, track_length: f64) -> f64 {
    fraction * track_length
}
