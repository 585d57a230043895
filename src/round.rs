//! Fixed-precision rounding of scores.

use crate::DECIMAL_PLACES;

/// Round a score to [`DECIMAL_PLACES`] decimals, ties to even.
#[inline]
pub(crate) fn round_score(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    (value * scale).round_ties_even() / scale
}

/// Complement of a similarity score, rounded like the score itself.
#[inline]
pub(crate) fn complement(score: f64) -> f64 {
    round_score(1.0 - score)
}
