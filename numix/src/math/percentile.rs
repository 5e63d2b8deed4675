use crate::log_warn;

/// Returns the value at a fractional position within `values`.
///
/// The sequence is treated as a piecewise-linear function over its normalized index:
/// `0.0` maps to the first element and `1.0` to the last, with positions in between
/// interpolated from the two bracketing elements. The sequence does not need to be sorted.
///
/// Percentages outside `[0, 1]` saturate to the first or last element. A single element
/// sequence always returns that element. An empty sequence returns `NaN`.
///
/// # Example
/// ```
/// use numix::value_at_percentile;
///
/// assert_eq!(value_at_percentile(&[0.0, 100.0, 50.0], 0.25), 50.0);
/// ```
pub fn value_at_percentile(values: &[f64], percentage: f64) -> f64 {
    let Some(last_index) = values.len().checked_sub(1) else {
        log_warn!("Requested value at {} of an empty sequence", percentage);
        return f64::NAN;
    };
    if last_index == 0 {
        return values[0];
    }

    let position = percentage * last_index as f64;
    let lower_bound = clamp_index(position.floor(), last_index);
    let upper_bound = clamp_index(position.ceil(), last_index);

    let lower_value = values[lower_bound];
    let upper_value = values[upper_bound];
    if lower_value == upper_value {
        return lower_value;
    }

    let value_diff = (lower_value - upper_value).abs();
    let direction = if lower_value > upper_value { -1.0 } else { 1.0 };

    let lower_percentage = lower_bound as f64 / last_index as f64;
    let upper_percentage = upper_bound as f64 / last_index as f64;
    let percentage_diff = upper_percentage - lower_percentage;

    lower_value + value_diff * ((percentage - lower_percentage) / percentage_diff) * direction
}

/// Converts a continuous position into a valid index. NaN maps to the first index.
#[inline]
fn clamp_index(position: f64, last_index: usize) -> usize {
    if position.is_nan() || position <= 0.0 {
        0
    } else if position >= last_index as f64 {
        last_index
    } else {
        position as usize
    }
}

// ---------------------------------------------------------- //
// ------------------------- Tests -------------------------- //
// ---------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_bracketing_values() {
        assert_eq!(value_at_percentile(&[0.0, 100.0, 50.0], 0.25), 50.0);
        assert_eq!(value_at_percentile(&[0.0, 10.0, 20.0, 30.0, 40.0], 0.625), 25.0);
    }

    #[test]
    fn exact_positions_return_elements() {
        let values = [3.0, -1.0, 8.0, 2.0, 5.0];
        assert_eq!(value_at_percentile(&values, 0.0), 3.0);
        assert_eq!(value_at_percentile(&values, 0.25), -1.0);
        assert_eq!(value_at_percentile(&values, 0.5), 8.0);
        assert_eq!(value_at_percentile(&values, 1.0), 5.0);
    }

    #[test]
    fn interpolates_descending_segments() {
        assert_eq!(value_at_percentile(&[100.0, 0.0], 0.25), 75.0);
        assert_eq!(value_at_percentile(&[0.0, 100.0, 50.0], 0.75), 75.0);
    }

    #[test]
    fn single_value_is_returned_for_any_percentage() {
        for percentage in [-3.0, 0.0, 0.3, 1.0, 42.0, f64::NAN] {
            assert_eq!(value_at_percentile(&[10.0], percentage), 10.0);
        }
    }

    #[test]
    fn equal_bracketing_values_short_circuit() {
        assert_eq!(value_at_percentile(&[5.0, 5.0, 5.0], 0.5), 5.0);
        assert_eq!(value_at_percentile(&[5.0, 5.0, 5.0], 0.3), 5.0);
    }

    #[test]
    fn out_of_range_percentages_saturate() {
        let values = [1.0, 2.0, 4.0];
        assert_eq!(value_at_percentile(&values, -0.5), 1.0);
        assert_eq!(value_at_percentile(&values, -100.0), 1.0);
        assert_eq!(value_at_percentile(&values, 1.5), 4.0);
        assert_eq!(value_at_percentile(&values, 100.0), 4.0);
    }

    #[test]
    fn nan_percentage_returns_first_value() {
        assert_eq!(value_at_percentile(&[7.0, 8.0, 9.0], f64::NAN), 7.0);
    }

    #[test]
    fn empty_sequence_is_nan() {
        assert!(value_at_percentile(&[], 0.5).is_nan());
    }
}
