//! The series term function.

/// Compute the n-th series term `1 / ((2n - 1) * x^(2n - 1))`, n >= 1.
///
/// Overflow policy: a term whose computed magnitude leaves the representable
/// range is reported as exactly `0.0`. The accumulator treats that as a
/// normal convergence exit, not an error.
///
/// # Example
/// ```
/// use sercalc_core::term::series_term;
///
/// assert_eq!(series_term(1, 3.0), 1.0 / 3.0);
/// assert_eq!(series_term(2, 2.0), 1.0 / 24.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn series_term(n: u64, x: f64) -> f64 {
    let odd = (2 * n - 1) as f64;
    let term = 1.0 / (odd * x.powf(odd));
    if term.is_finite() {
        term
    } else {
        0.0
    }
}
