/// Computes a single empirical quantile from sorted data.
///
/// This function uses linear interpolation between order statistics (R Type 7,
/// the default in R and most spreadsheet software). For a dataset with `n`
/// values, the fractional rank of the `p`-quantile is `(n - 1) * p`; the result
/// interpolates between the two values bracketing that rank.
///
/// `p` is clamped rather than extrapolated: `p <= 0.0` yields the first value
/// and `p >= 1.0` yields the last one.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `p` - The probability to compute (0.0 to 1.0)
///
/// # Returns
///
/// * `Some(value)` - the interpolated quantile
/// * `None` - if `sorted_values` is empty or `p` is NaN
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order. A NaN anywhere in
/// the input breaks the ordering and panics as well.
///
/// # Examples
///
/// ```
/// use boxstat_stats::quantile::quantile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&values, 0.5), Some(2.5));
/// assert_eq!(quantile(&values, 0.0), Some(1.0));
/// assert_eq!(quantile(&values, 1.0), Some(4.0));
/// assert_eq!(quantile(&[], 0.5), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile(sorted_values: &[f64], p: f64) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let first = *sorted_values.first()?;
    let last = *sorted_values.last()?;
    if p.is_nan() {
        return None;
    }
    if p <= 0.0 {
        return Some(first);
    }
    if p >= 1.0 {
        return Some(last);
    }

    let pos = (sorted_values.len() - 1) as f64 * p;
    let base = pos.floor();
    let rest = pos - base;
    let base = base as usize;

    let lower = sorted_values[base];
    let value = match sorted_values.get(base + 1) {
        Some(&upper) => lower + rest * (upper - lower),
        None => lower,
    };
    Some(value)
}

/// The three quartiles of a dataset.
///
/// # Examples
///
/// ```
/// use boxstat_stats::quantile::Quartiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
/// let quartiles = Quartiles::from_sorted(&values).unwrap();
///
/// assert_eq!(quartiles.q1, 3.25);
/// assert_eq!(quartiles.median, 5.5);
/// assert_eq!(quartiles.q3, 7.75);
/// assert_eq!(quartiles.iqr(), 4.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// The first quartile (p = 0.25).
    pub q1: f64,
    /// The median (p = 0.5).
    pub median: f64,
    /// The third quartile (p = 0.75).
    pub q3: f64,
}

impl Quartiles {
    /// Computes the quartiles from pre-sorted values.
    ///
    /// Returns `None` if the dataset is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        Some(Self {
            q1: quantile(sorted_values, 0.25)?,
            median: quantile(sorted_values, 0.5)?,
            q3: quantile(sorted_values, 0.75)?,
        })
    }

    /// Returns the interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        for p in [-1.0, 0.0, 0.25, 0.5, 1.0, 2.0] {
            assert_eq!(quantile(&[], p), None);
        }
        assert_eq!(Quartiles::from_sorted(&[]), None);
    }

    #[test]
    fn test_clamps_probability() {
        let values = [2.0, 4.0, 8.0];
        assert_eq!(quantile(&values, 0.0), Some(2.0));
        assert_eq!(quantile(&values, -0.5), Some(2.0));
        assert_eq!(quantile(&values, 1.0), Some(8.0));
        assert_eq!(quantile(&values, 1.5), Some(8.0));
    }

    #[test]
    fn test_nan_probability() {
        assert_eq!(quantile(&[1.0, 2.0], f64::NAN), None);
    }

    #[test]
    fn test_interpolates_between_order_statistics() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.5), Some(2.5));
        // pos = 0.75
        assert_eq!(quantile(&values, 0.25), Some(1.75));
        // pos = 2.25
        assert_eq!(quantile(&values, 0.75), Some(3.25));
    }

    #[test]
    fn test_exact_rank_returns_order_statistic() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(quantile(&values, 0.25), Some(20.0));
        assert_eq!(quantile(&values, 0.5), Some(30.0));
        assert_eq!(quantile(&values, 0.75), Some(40.0));
    }

    #[test]
    fn test_single_value() {
        let values = [42.0];
        for p in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_eq!(quantile(&values, p), Some(42.0));
        }
    }

    #[test]
    fn test_duplicates() {
        let values = [3.0, 3.0, 3.0, 3.0];
        let quartiles = Quartiles::from_sorted(&values).unwrap();
        assert_eq!(quartiles.q1, 3.0);
        assert_eq!(quartiles.median, 3.0);
        assert_eq!(quartiles.q3, 3.0);
        assert_eq!(quartiles.iqr(), 0.0);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_rejects_unsorted_input() {
        let _ = quantile(&[3.0, 1.0, 2.0], 0.5);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_rejects_nan_input() {
        let _ = quantile(&[1.0, f64::NAN, 2.0], 0.5);
    }
}
