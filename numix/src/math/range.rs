use std::ops::RangeInclusive;

/// Returns all integers from `start` to `end`, both inclusive, in ascending order.
///
/// Returns an empty vector when `start > end`.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    range_iter(start, end).collect()
}

/// Lazy form of [`range`].
#[inline]
pub fn range_iter(start: i64, end: i64) -> RangeInclusive<i64> {
    start..=end
}

// ---------------------------------------------------------- //
// ------------------------- Tests -------------------------- //
// ---------------------------------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        assert_eq!(range(1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(range(-2, 1), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn range_with_equal_bounds_has_one_value() {
        assert_eq!(range(3, 3), vec![3]);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(range(5, 1).is_empty());
        assert_eq!(range_iter(5, 1).count(), 0);
    }

    #[test]
    fn range_does_not_overflow_at_max() {
        assert_eq!(range(i64::MAX - 1, i64::MAX), vec![i64::MAX - 1, i64::MAX]);
        assert_eq!(range(i64::MIN, i64::MIN + 1), vec![i64::MIN, i64::MIN + 1]);
    }
}
