use crate::log_trc;

pub mod percentile;
pub mod rand;
pub mod range;

/// Clamps a value between a lower and upper limit.
///
/// The upper limit is applied first and the lower limit second, so an inverted range
/// (`min > max`) always yields `min`. A NaN `value` is passed through unchanged.
///
/// # Parameters
/// - `value`: The value to clamp.
/// - `min`: The minimum allowed value.
/// - `max`: The maximum allowed value.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let upper_limited = if value > max { max } else { value };
    if upper_limited < min { min } else { upper_limited }
}

/// Clamps a value to the unit interval `[0, 1]`.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Linearly interpolates between two values.
///
/// Uses the weighted form `x * (1 - a) + y * a`, which returns `x` and `y` exactly
/// when `a` is `0.0` or `1.0`. The factor is not clamped, so values outside `[0, 1]`
/// extrapolate past the endpoints.
///
/// # Parameters
/// - `x`: The start value.
/// - `y`: The end value.
/// - `a`: The interpolation factor, typically between 0.0 and 1.0.
#[inline]
pub fn lerp(x: f64, y: f64, a: f64) -> f64 {
    x * (1.0 - a) + y * a
}

/// The inverse of [`lerp`]: returns the fraction at which `a` falls between `x` and `y`,
/// clamped to `[0, 1]`.
///
/// An empty range (`x == y`) is not guarded. The ratio becomes NaN when `a == x`, and
/// positive or negative infinity otherwise, which then saturates to `1` or `0`.
#[inline]
pub fn invlerp(x: f64, y: f64, a: f64) -> f64 {
    if x == y {
        log_trc!("invlerp over empty range [{}, {}] for {}", x, y, a);
    }
    clamp01((a - x) / (y - x))
}

/// Remaps `a` from the range `[x1, y1]` to the range `[x2, y2]`.
///
/// The position within the source range is clamped, so the result never leaves `[x2, y2]`.
#[inline]
pub fn scale(x1: f64, y1: f64, x2: f64, y2: f64, a: f64) -> f64 {
    lerp(x2, y2, invlerp(x1, y1, a))
}

// ---------------------------------------------------------- //
// ------------------------- Tests -------------------------- //
// ---------------------------------------------------------- //
