//! CLI output formatting.

use std::time::Duration;

/// Format a real value with 10 fractional digits.
///
/// An undefined (NaN) value renders as the word "undefined" rather than
/// Rust's default "NaN".
#[must_use]
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "undefined".to_string()
    } else {
        format!("{v:.10}")
    }
}

/// Format an absolute difference in scientific notation.
#[must_use]
pub fn format_difference(d: f64) -> String {
    if d.is_nan() {
        "undefined".to_string()
    } else {
        format!("{d:.2e}")
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}
