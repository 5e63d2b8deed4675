//! Strict variants of the numeric helpers.
//!
//! The plain helpers never fail and let degenerate input flow through as NaN, infinity
//! or a saturated value. The functions here check preconditions first and report
//! violations as [`NumericError`], then delegate to the plain helper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::math::rand::RandomSource;
use crate::{clamp, invlerp, rand_range, range, scale, value_at_percentile};

/// Error type for rejected inputs of the checked helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericError {
    /// A sequence lookup was requested on an empty sequence.
    EmptySequence,

    /// The interpolation range has identical endpoints, so no fraction can be recovered.
    DegenerateRange { from: f64, to: f64 },

    /// The lower limit is greater than the upper limit.
    InvertedRange { min: f64, max: f64 },

    /// A named argument is NaN or infinite.
    NonFinite { name: &'static str, value: f64 },
}

impl Display for NumericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericError::EmptySequence => f.write_str("sequence is empty"),
            NumericError::DegenerateRange { from, to } => {
                write!(f, "range [{}, {}] has no extent", from, to)
            }
            NumericError::InvertedRange { min, max } => {
                write!(f, "lower limit {} is greater than upper limit {}", min, max)
            }
            NumericError::NonFinite { name, value } => write!(f, "{} must be finite, got {}", name, value),
        }
    }
}

impl Error for NumericError {}

fn finite(name: &'static str, value: f64) -> Result<f64, NumericError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericError::NonFinite { name, value })
    }
}

fn ordered(min: f64, max: f64) -> Result<(), NumericError> {
    if min > max {
        Err(NumericError::InvertedRange { min, max })
    } else {
        Ok(())
    }
}

fn non_degenerate(from: f64, to: f64) -> Result<(), NumericError> {
    if from == to {
        Err(NumericError::DegenerateRange { from, to })
    } else {
        Ok(())
    }
}

/// [`clamp`] that rejects NaN and inverted limits.
pub fn try_clamp(value: f64, min: f64, max: f64) -> Result<f64, NumericError> {
    if value.is_nan() {
        return Err(NumericError::NonFinite { name: "value", value });
    }
    ordered(min, max)?;
    Ok(clamp(value, min, max))
}

/// [`invlerp`] that rejects non-finite arguments and an empty range.
pub fn try_invlerp(x: f64, y: f64, a: f64) -> Result<f64, NumericError> {
    finite("x", x)?;
    finite("y", y)?;
    finite("a", a)?;
    non_degenerate(x, y)?;
    Ok(invlerp(x, y, a))
}

/// [`scale`] that rejects non-finite arguments and an empty source range.
pub fn try_scale(x1: f64, y1: f64, x2: f64, y2: f64, a: f64) -> Result<f64, NumericError> {
    finite("x2", x2)?;
    finite("y2", y2)?;
    try_invlerp(x1, y1, a)?;
    Ok(scale(x1, y1, x2, y2, a))
}

/// [`rand_range`] that rejects non-finite and inverted limits.
pub fn try_rand_range<R: RandomSource + ?Sized>(source: &mut R, min: f64, max: f64) -> Result<f64, NumericError> {
    finite("min", min)?;
    finite("max", max)?;
    ordered(min, max)?;
    Ok(rand_range(source, min, max))
}

/// [`range`] that reports inverted bounds instead of returning an empty vector.
pub fn try_range(start: i64, end: i64) -> Result<Vec<i64>, NumericError> {
    if start > end {
        return Err(NumericError::InvertedRange {
            min: start as f64,
            max: end as f64,
        });
    }
    Ok(range(start, end))
}

/// [`value_at_percentile`] that rejects an empty sequence and a NaN percentage.
///
/// Out-of-range percentages are still accepted and saturate to the first or last value.
pub fn try_value_at_percentile(values: &[f64], percentage: f64) -> Result<f64, NumericError> {
    if values.is_empty() {
        return Err(NumericError::EmptySequence);
    }
    if percentage.is_nan() {
        return Err(NumericError::NonFinite {
            name: "percentage",
            value: percentage,
        });
    }
    Ok(value_at_percentile(values, percentage))
}

// ---------------------------------------------------------- //
// ------------------------- Tests -------------------------- //
// ---------------------------------------------------------- //
