//! Scalar mapping between ranges, clamping and grid snapping.
//!
//! Every slider variant composes these: a continuous slider calls [`map`]
//! once per pointer event, a stepped slider runs the normalized fraction
//! through [`snap_to_grid`] before the final [`map`].

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Linearly remap `value` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// When `clamp` is set the input is first restricted to the source range, so
/// the result stays inside the destination range.
///
/// `src_min == src_max` divides by zero. Callers must pass a non-degenerate
/// source range.
pub fn map(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64, clamp: bool) -> f64 {
    let value = if clamp {
        clamp_to(value, src_min, src_max)
    } else {
        value
    };
    (value - src_min) / (src_max - src_min) * (dst_max - dst_min) + dst_min
}

/// Restrict `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: with `min > max` the result is `min`.
pub fn clamp_to(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Snap `value` to the nearest point of the grid `origin + k * gap`.
///
/// Ties round away from zero. `gap` must be non-zero.
pub fn snap_to_grid(value: f64, gap: f64, origin: f64) -> f64 {
    ((value - origin) / gap).round() * gap + origin
}

/// Grid spacing between the `step_count` evenly spaced fractions of `[0, 1]`.
pub fn step_gap(step_count: u32) -> f64 {
    1.0 / (f64::from(step_count) - 1.0)
}

/// Snap a normalized fraction to the step grid, or pass it through when the
/// slider is continuous.
pub fn snap_fraction(fraction: f64, step_count: Option<u32>) -> f64 {
    match step_count {
        Some(n) => snap_to_grid(fraction, step_gap(n), 0.0),
        None => fraction,
    }
}

/// Every fraction a stepped slider with `step_count` positions can settle on.
///
/// The values are produced with the same arithmetic as [`snap_fraction`], so
/// they compare exactly equal to snapped pointer positions.
pub fn step_fractions(step_count: u32) -> Vec<f64> {
    if step_count < 2 {
        return Vec::new();
    }
    let gap = step_gap(step_count);
    (0..step_count)
        .map(|k| f64::from(k) * gap + 0.0)
        .collect()
}
