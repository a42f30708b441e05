use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quantile::Quartiles;

/// Multiplier applied to the IQR when computing Tukey fences.
pub const FENCE_MULTIPLIER: f64 = 1.5;

/// Returns the value if it can take part in a computation.
///
/// Missing entries (`None`) and NaN are rejected; infinities are kept.
///
/// # Examples
///
/// ```
/// use boxstat_stats::boxplot::valid_value;
///
/// assert_eq!(valid_value(Some(1.5)), Some(1.5));
/// assert_eq!(valid_value(Some(f64::NAN)), None);
/// assert_eq!(valid_value(None), None);
/// ```
#[must_use]
pub fn valid_value(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Tukey fences bounding the inliers of a dataset.
///
/// Values inside `[lower_fence, upper_fence]` (inclusive) are inliers, everything
/// strictly outside is an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fences {
    /// `q1 - 1.5 * iqr`
    pub lower_fence: f64,
    /// `q3 + 1.5 * iqr`
    pub upper_fence: f64,
}

impl Fences {
    /// Computes the fences from the quartiles of a dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxstat_stats::{boxplot::Fences, quantile::Quartiles};
    ///
    /// let quartiles = Quartiles { q1: 3.25, median: 5.5, q3: 7.75 };
    /// let fences = Fences::from_quartiles(&quartiles);
    /// assert_eq!(fences.lower_fence, -3.5);
    /// assert_eq!(fences.upper_fence, 14.5);
    /// ```
    #[must_use]
    pub fn from_quartiles(quartiles: &Quartiles) -> Self {
        let iqr = quartiles.iqr();
        Self {
            lower_fence: quartiles.q1 - FENCE_MULTIPLIER * iqr,
            upper_fence: quartiles.q3 + FENCE_MULTIPLIER * iqr,
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_fence && value <= self.upper_fence
    }

    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_fence || value > self.upper_fence
    }
}

/// Boxplot statistics of a single group.
///
/// `stats` holds the five-number summary `[min, q1, median, q3, max]`, where
/// `min` and `max` are the smallest and largest *inliers* rather than the sample
/// extremes. Values beyond the fences are listed in `outliers` (ascending).
///
/// The summary is not always non-decreasing. Quartiles are interpolated while
/// the whiskers snap to actual inliers, so in small samples `min` can exceed
/// `q1` (or `max` fall below `q3`).
///
/// # Examples
///
/// ```
/// use boxstat_stats::boxplot::BoxStats;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
/// let stats = BoxStats::from_values(values).unwrap();
///
/// assert_eq!(stats.stats, [1.0, 3.25, 5.5, 7.75, 9.0]);
/// assert_eq!(stats.outliers, vec![100.0]);
/// assert_eq!(stats.n, 10);
/// assert_eq!(stats.iqr, 4.5);
/// assert_eq!(stats.fences.upper_fence, 14.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    /// `[min, q1, median, q3, max]`
    pub stats: [f64; 5],
    /// Values outside the fences, sorted in ascending order.
    pub outliers: Vec<f64>,
    /// Number of valid values, outliers included.
    pub n: usize,
    /// Interquartile range.
    pub iqr: f64,
    pub fences: Fences,
}

impl BoxStats {
    /// Computes boxplot statistics from unsorted, possibly incomplete values.
    ///
    /// Accepts plain `f64` values as well as `Option<f64>`; missing entries and
    /// NaN are dropped before computation.
    ///
    /// # Returns
    ///
    /// * `Some(BoxStats)` - if at least one valid value remains
    /// * `None` - if the input is empty or contains only invalid values
    ///
    /// # Examples
    ///
    /// ```
    /// use boxstat_stats::boxplot::BoxStats;
    ///
    /// let stats = BoxStats::from_values([Some(3.0), None, Some(1.0), Some(f64::NAN)]).unwrap();
    /// assert_eq!(stats.n, 2);
    /// assert_eq!(stats.min(), 1.0);
    ///
    /// assert!(BoxStats::from_values([None, Some(f64::NAN)]).is_none());
    /// ```
    #[must_use]
    pub fn from_values<I, V>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<f64>>,
    {
        BoxOutcome::evaluate(values).into_summary()
    }

    /// Computes boxplot statistics from pre-sorted, valid values.
    ///
    /// Returns `None` if the dataset is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let quartiles = Quartiles::from_sorted(sorted_values)?;
        let fences = Fences::from_quartiles(&quartiles);

        let mut inliers = sorted_values.iter().copied().filter(|&v| fences.contains(v));
        let first_inlier = inliers.next();
        let last_inlier = inliers.next_back().or(first_inlier);
        // Without inliers the whiskers fall back to the sample extremes
        let min = first_inlier.or_else(|| sorted_values.first().copied())?;
        let max = last_inlier.or_else(|| sorted_values.last().copied())?;

        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| fences.is_outlier(v))
            .collect();

        Some(Self {
            stats: [min, quartiles.q1, quartiles.median, quartiles.q3, max],
            outliers,
            n: sorted_values.len(),
            iqr: quartiles.iqr(),
            fences,
        })
    }

    /// Smallest inlier.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.stats[0]
    }

    #[must_use]
    pub fn q1(&self) -> f64 {
        self.stats[1]
    }

    #[must_use]
    pub fn median(&self) -> f64 {
        self.stats[2]
    }

    #[must_use]
    pub fn q3(&self) -> f64 {
        self.stats[3]
    }

    /// Largest inlier.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.stats[4]
    }

    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        self.fences.is_outlier(value)
    }
}

/// Why a group produced no statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The group has no values at all.
    Empty,
    /// Every value of the group was missing or NaN.
    AllInvalid { invalid: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => f.write_str("no values"),
            SkipReason::AllInvalid { invalid } => {
                write!(f, "all {invalid} values are missing or NaN")
            }
        }
    }
}

/// Result of evaluating a group of raw values.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxOutcome {
    Summary(BoxStats),
    Skipped(SkipReason),
}

impl BoxOutcome {
    /// Filters, sorts and summarizes raw values.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxstat_stats::boxplot::{BoxOutcome, SkipReason};
    ///
    /// let outcome = BoxOutcome::evaluate(Vec::<f64>::new());
    /// assert_eq!(outcome, BoxOutcome::Skipped(SkipReason::Empty));
    ///
    /// let outcome = BoxOutcome::evaluate([None, Some(f64::NAN)]);
    /// assert_eq!(outcome, BoxOutcome::Skipped(SkipReason::AllInvalid { invalid: 2 }));
    /// ```
    #[must_use]
    pub fn evaluate<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<f64>>,
    {
        let mut total = 0;
        let mut sorted = values
            .into_iter()
            .inspect(|_| total += 1)
            .filter_map(|v| valid_value(v.into()))
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);

        match BoxStats::from_sorted(&sorted) {
            Some(stats) => BoxOutcome::Summary(stats),
            None if total == 0 => BoxOutcome::Skipped(SkipReason::Empty),
            None => BoxOutcome::Skipped(SkipReason::AllInvalid { invalid: total }),
        }
    }

    #[must_use]
    pub fn into_summary(self) -> Option<BoxStats> {
        match self {
            BoxOutcome::Summary(stats) => Some(stats),
            BoxOutcome::Skipped(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(BoxStats::from_values(Vec::<f64>::new()).is_none());
        assert!(BoxStats::from_sorted(&[]).is_none());
    }

    #[test]
    fn test_all_invalid_values() {
        assert!(BoxStats::from_values([None, None, Some(f64::NAN)]).is_none());
        assert_eq!(
            BoxOutcome::evaluate([None, None, Some(f64::NAN)]),
            BoxOutcome::Skipped(SkipReason::AllInvalid { invalid: 3 })
        );
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Empty.to_string(), "no values");
        assert_eq!(
            SkipReason::AllInvalid { invalid: 3 }.to_string(),
            "all 3 values are missing or NaN"
        );
    }

    #[test]
    fn test_tukey_outlier() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let stats = BoxStats::from_values(values).unwrap();

        assert_eq!(stats.q1(), 3.25);
        assert_eq!(stats.median(), 5.5);
        assert_eq!(stats.q3(), 7.75);
        assert_eq!(stats.iqr, 4.5);
        assert_eq!(stats.fences.lower_fence, -3.5);
        assert_eq!(stats.fences.upper_fence, 14.5);
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.min(), 1.0);
        assert_eq!(stats.max(), 9.0);
        assert_eq!(stats.n, 10);
        assert!(stats.is_outlier(100.0));
        assert!(!stats.is_outlier(9.0));
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let stats = BoxStats::from_values([100.0, 9.0, 1.0, 8.0, 2.0, 7.0, 3.0, 6.0, 4.0, 5.0])
            .unwrap();
        assert_eq!(stats.stats, [1.0, 3.25, 5.5, 7.75, 9.0]);
        assert_eq!(stats.outliers, vec![100.0]);
    }

    #[test]
    fn test_outliers_on_both_sides() {
        let values = [-50.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 80.0, 90.0];
        let stats = BoxStats::from_values(values).unwrap();

        assert_eq!(stats.outliers, vec![-50.0, 80.0, 90.0]);
        assert_eq!(stats.min(), 10.0);
        assert_eq!(stats.max(), 15.0);
        assert_eq!(stats.n, 9);
    }

    #[test]
    fn test_constant_values() {
        for n in 1..=6 {
            let stats = BoxStats::from_values(vec![4.2; n]).unwrap();
            assert_eq!(stats.stats, [4.2; 5]);
            assert_eq!(stats.iqr, 0.0);
            assert_eq!(stats.fences.lower_fence, 4.2);
            assert_eq!(stats.fences.upper_fence, 4.2);
            assert!(stats.outliers.is_empty());
            assert_eq!(stats.n, n);
        }
    }

    #[test]
    fn test_fence_is_inclusive() {
        // q1 = 1, q3 = 1, iqr = 0: values equal to the fence stay inliers
        let stats = BoxStats::from_values([1.0, 1.0, 1.0, 1.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.fences.upper_fence, 1.0);
        assert_eq!(stats.outliers, vec![2.0]);
        assert_eq!(stats.max(), 1.0);
    }

    #[test]
    fn test_whisker_can_exceed_quartile() {
        // q1 is interpolated below the first inlier once 0 is cut off by the fence
        let stats = BoxStats::from_values([0.0, 100.0, 100.0, 100.0]).unwrap();
        assert_eq!(stats.stats, [100.0, 75.0, 100.0, 100.0, 100.0]);
        assert_eq!(stats.fences.lower_fence, 37.5);
        assert_eq!(stats.fences.upper_fence, 137.5);
        assert_eq!(stats.outliers, vec![0.0]);
        assert!(stats.min() > stats.q1());
    }

    #[test]
    fn test_missing_values_are_not_counted() {
        let stats =
            BoxStats::from_values([Some(2.0), None, Some(f64::NAN), Some(4.0), Some(6.0)])
                .unwrap();
        assert_eq!(stats.n, 3);
        assert_eq!(stats.stats, [2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_infinity_is_kept() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, f64::INFINITY];
        let stats = BoxStats::from_values(values).unwrap();
        assert_eq!(stats.n, 9);
        assert_eq!(stats.fences.upper_fence, 13.0);
        assert_eq!(stats.outliers, vec![f64::INFINITY]);
        assert_eq!(stats.max(), 8.0);
    }

    #[test]
    fn test_whiskers_fall_back_to_extremes_without_inliers() {
        // An infinite spread makes both fences NaN, so no value is an inlier
        let stats = BoxStats::from_values([f64::NEG_INFINITY, 0.0, f64::INFINITY]).unwrap();
        assert!(stats.fences.lower_fence.is_nan());
        assert!(stats.outliers.is_empty());
        assert_eq!(stats.min(), f64::NEG_INFINITY);
        assert_eq!(stats.max(), f64::INFINITY);
    }
}
