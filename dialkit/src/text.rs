//! Value label formatting.

/// Format `value` with `precision` decimal places followed by `suffix`.
///
/// Halfway cases round away from zero (`2.5` shows as `3`), not to even.
pub fn format_value(value: f64, precision: usize, suffix: &str) -> String {
    let scale = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let rounded = (value * scale).round() / scale;
    let value = if rounded.is_finite() { rounded } else { value };
    format!("{value:.precision$}{suffix}")
}
