//! Progress width derived from the countdown

/// Percentage width of the progress indicator for `remaining` seconds out of `total`.
///
/// Pure: the value is recomputed from its inputs on every state change and
/// never cached. It is 0 at the start of a run and -100 when the countdown
/// reaches zero. `total` is never zero (enforced by the CLI).
pub fn width(remaining: u32, total: u32) -> f64 {
    (f64::from(remaining) - f64::from(total)) * (100.0 / f64::from(total))
}

/// Fraction of the bar to fill for a given width, clamped to `0.0..=1.0`.
pub fn fill_ratio(width: f64) -> f64 {
    (width.abs() / 100.0).clamp(0.0, 1.0)
}
