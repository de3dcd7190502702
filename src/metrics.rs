//! Scalar summaries over record collections.
//!
//! Every derived number the portal serves comes through here: totals, means,
//! status counts, percentage ratios, and order-preserving filters. All
//! functions are pure and total; the empty-collection and zero-denominator
//! cases return 0 rather than NaN or a panic.

/// Total of `value` over the collection. 0 for an empty collection.
pub fn sum<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(value).sum()
}

/// Arithmetic mean of `value` over the collection. 0 when empty.
pub fn mean<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    sum(records, value) / records.len() as f64
}

/// Number of records matching `pred`.
pub fn count_where<T>(records: &[T], pred: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| pred(r)).count()
}

/// numerator / denominator as a percentage. 0 when the denominator is 0.
pub fn ratio_as_percent(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64 * 100.0
}

/// part / whole as a percentage for already-numeric quantities (used hours of
/// a total entitlement, hours of an 8-hour day). 0 when the whole is 0.
pub fn share_percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}

/// Records matching `pred`, cloned, in the collection's original order.
pub fn filter_where<T: Clone>(records: &[T], pred: impl Fn(&T) -> bool) -> Vec<T> {
    records.iter().filter(|r| pred(r)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The attendance page's January dataset, as total-hours values.
    const HOURS: [f64; 8] = [8.5, 8.5, 7.75, 4.0, 8.5, 8.5, 8.5, 8.0];

    #[test]
    fn sum_of_attendance_hours() {
        let total = sum(&HOURS, |h| *h);
        assert!((total - 62.25).abs() < 1e-9);
    }

    #[test]
    fn mean_of_attendance_hours() {
        let avg = mean(&HOURS, |h| *h);
        assert!((avg - 7.78125).abs() < 1e-9);
    }

    #[test]
    fn mean_times_count_equals_sum() {
        let avg = mean(&HOURS, |h| *h);
        let total = sum(&HOURS, |h| *h);
        assert!((avg * HOURS.len() as f64 - total).abs() < 1e-9);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        let empty: [f64; 0] = [];
        assert_eq!(mean(&empty, |h| *h), 0.0);
        assert_eq!(sum(&empty, |h| *h), 0.0);
    }

    #[test]
    fn zero_denominator_yields_zero() {
        assert_eq!(ratio_as_percent(0, 0), 0.0);
        assert_eq!(share_percent(5.0, 0.0), 0.0);
    }

    #[test]
    fn attendance_rate_scenario() {
        // 5 of the 8 January records carry the "present" tag.
        let statuses = [
            "present", "present", "late", "half-day", "present", "present", "present", "late",
        ];
        let present = count_where(&statuses, |s| *s == "present");
        assert_eq!(present, 5);
        assert!((ratio_as_percent(present, statuses.len()) - 62.5).abs() < 1e-9);
    }

    #[test]
    fn filter_preserves_order_and_matches_count() {
        let records = [(1, "pending"), (2, "approved"), (3, "pending"), (4, "rejected")];
        let pending = filter_where(&records, |r| r.1 == "pending");
        assert!(pending.iter().all(|r| r.1 == "pending"));
        assert_eq!(pending.iter().map(|r| r.0).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(pending.len(), count_where(&records, |r| r.1 == "pending"));
    }

    #[test]
    fn filter_is_restartable() {
        let records = [1, 2, 3, 4];
        let first = filter_where(&records, |r| r % 2 == 0);
        let second = filter_where(&records, |r| r % 2 == 0);
        assert_eq!(first, second);
    }
}
