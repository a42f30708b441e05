//! Boxplot datasets assembled from many groups
//!
//! [`BoxplotDataset`] joins two views of the same data:
//!
//! - `boxes`: one [`BoxSummary`] per group with at least one valid value
//! - `flat_values`: one [`FlatPoint`] per valid value, flagged as outlier or not
//!
//! Both collections are built in a single pass and never patched afterwards.
//! Groups without valid values are skipped; they appear in neither collection.
//!
//! # Missing values
//!
//! The flat view re-reads each group's original values in input order and drops
//! missing entries and NaN exactly like the statistics do. The number of flat
//! points of a group therefore always equals its `n`.
//!
//! # Examples
//!
//! ```
//! use boxstat_dataset::{dataset::BoxplotDataset, series::Series};
//!
//! let dataset = BoxplotDataset::from_series([
//!     Series::new("a", [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]),
//!     Series::new("empty", Vec::<f64>::new()),
//! ]);
//!
//! assert_eq!(dataset.boxes.len(), 1);
//! assert_eq!(dataset.flat_values.len(), 10);
//! assert!(dataset.flat_values[9].is_outlier);
//! ```

use std::{collections::HashMap, sync::Arc};

use boxstat_stats::boxplot::{BoxOutcome, BoxStats, SkipReason, valid_value};
use serde::{Deserialize, Serialize};

use crate::{
    export::{self, CsvOptions},
    series::{Meta, Series},
};

/// Boxplot statistics of one group together with its key and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub key: String,
    #[serde(flatten)]
    pub box_stats: BoxStats,
    pub meta: Arc<Meta>,
}

/// A single observation of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatPoint {
    pub key: String,
    pub value: f64,
    /// `true` iff `value` lies strictly outside the group's fences.
    pub is_outlier: bool,
    pub meta: Arc<Meta>,
}

/// A group that produced no statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGroup {
    pub key: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxplotDataset {
    pub boxes: Vec<BoxSummary>,
    pub flat_values: Vec<FlatPoint>,
}

impl BoxplotDataset {
    /// Builds a dataset from groups of raw values.
    ///
    /// Boxes keep the order of `series`; flat points are concatenated group by
    /// group, each group in its original value order.
    #[must_use]
    pub fn from_series<I>(series: I) -> Self
    where
        I: IntoIterator<Item = Series>,
    {
        Self::from_series_with_report(series).0
    }

    /// Builds a dataset and reports the groups that were skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxstat_dataset::{dataset::BoxplotDataset, series::Series};
    /// use boxstat_stats::boxplot::SkipReason;
    ///
    /// let (dataset, skipped) = BoxplotDataset::from_series_with_report([
    ///     Series::new("a", [1.0, 2.0]),
    ///     Series::new("b", [None, Some(f64::NAN)]),
    /// ]);
    ///
    /// assert_eq!(dataset.boxes.len(), 1);
    /// assert_eq!(skipped.len(), 1);
    /// assert_eq!(skipped[0].key, "b");
    /// assert_eq!(skipped[0].reason, SkipReason::AllInvalid { invalid: 2 });
    /// ```
    #[must_use]
    pub fn from_series_with_report<I>(series: I) -> (Self, Vec<SkippedGroup>)
    where
        I: IntoIterator<Item = Series>,
    {
        let mut dataset = Self::default();
        let mut skipped = vec![];

        for Series { key, values, meta } in series {
            let box_stats = match BoxOutcome::evaluate(values.iter().copied()) {
                BoxOutcome::Summary(box_stats) => box_stats,
                BoxOutcome::Skipped(reason) => {
                    tracing::debug!(%key, %reason, "skipping group");
                    skipped.push(SkippedGroup { key, reason });
                    continue;
                }
            };
            tracing::trace!(
                %key,
                n = box_stats.n,
                outliers = box_stats.outliers.len(),
                "group summarized"
            );

            let meta = Arc::new(meta);
            dataset
                .flat_values
                .extend(values.iter().filter_map(|v| valid_value(*v)).map(|value| {
                    FlatPoint {
                        key: key.clone(),
                        value,
                        is_outlier: box_stats.is_outlier(value),
                        meta: Arc::clone(&meta),
                    }
                }));
            dataset.boxes.push(BoxSummary {
                key,
                box_stats,
                meta,
            });
        }

        (dataset, skipped)
    }

    /// Returns the first box with the given key.
    #[must_use]
    pub fn find_box(&self, key: &str) -> Option<&BoxSummary> {
        self.boxes.iter().find(|b| b.key == key)
    }

    /// Maps each key to its box. When keys repeat, the first box wins.
    #[must_use]
    pub fn box_index(&self) -> HashMap<&str, &BoxSummary> {
        let mut index = HashMap::with_capacity(self.boxes.len());
        for summary in &self.boxes {
            index.entry(summary.key.as_str()).or_insert(summary);
        }
        index
    }

    /// Returns the flat points of one group.
    pub fn points_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a FlatPoint> + 'a {
        self.flat_values.iter().filter(move |p| p.key == key)
    }

    /// Renders the dataset as delimited text, see [`export::export_csv`].
    #[must_use]
    pub fn to_csv(&self, options: &CsvOptions) -> String {
        export::export_csv(self, options)
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn series_strategy() -> impl Strategy<Value = Vec<Series>> {
        let value = prop_oneof![
            8 => (-1.0e3..1.0e3_f64).prop_map(Some),
            1 => Just(None),
            1 => Just(Some(f64::NAN)),
        ];
        let group = (0u8..8, prop::collection::vec(value, 0..40))
            .prop_map(|(key, values)| Series::new(format!("g{key}"), values));
        prop::collection::vec(group, 0..10)
    }

    proptest! {
        /// Property: every flat point references an existing box
        #[test]
        fn flat_keys_have_boxes(series in series_strategy()) {
            let dataset = BoxplotDataset::from_series(series);
            let index = dataset.box_index();
            for point in &dataset.flat_values {
                prop_assert!(index.contains_key(point.key.as_str()));
            }
        }

        /// Property: the box counts add up to the number of flat points
        #[test]
        fn counts_match(series in series_strategy()) {
            let dataset = BoxplotDataset::from_series(series);
            let total = dataset.boxes.iter().map(|b| b.box_stats.n).sum::<usize>();
            prop_assert_eq!(total, dataset.flat_values.len());
        }

        /// Property: outlier flags agree with the fences of the group's box
        #[test]
        fn outlier_flags_consistent(series in series_strategy()) {
            let (dataset, _) = BoxplotDataset::from_series_with_report(series);
            // Keys may repeat, so walk boxes and points group by group
            let mut points = dataset.flat_values.iter();
            for summary in &dataset.boxes {
                for point in points.by_ref().take(summary.box_stats.n) {
                    let fences = summary.box_stats.fences;
                    prop_assert_eq!(&point.key, &summary.key);
                    prop_assert_eq!(
                        point.is_outlier,
                        point.value < fences.lower_fence || point.value > fences.upper_fence
                    );
                }
            }
        }
    }
}
