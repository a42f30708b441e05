//! Input groups for dataset construction
//!
//! A [`Series`] is one named group of raw measurements. Values may be missing
//! (`None`, `null` in JSON) or NaN; such entries are kept as supplied and only
//! dropped when statistics are computed.
//!
//! # Serialization
//!
//! ```json
//! [
//!   { "key": "1101", "values": [1.2, null, 3.4], "meta": { "color": "#66BB6A" } },
//!   { "key": "1201", "values": [0.8, 2.5] }
//! ]
//! ```
//!
//! `meta` is optional and passed through untouched.

use boxstat_stats::boxplot::valid_value;
use serde::{Deserialize, Serialize};

/// Opaque display metadata attached to a group.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// A named group of raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub values: Vec<Option<f64>>,
    #[serde(default)]
    pub meta: Meta,
}

impl Series {
    /// Creates a series without metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxstat_dataset::series::Series;
    ///
    /// let series = Series::new("beech", [Some(1.0), None, Some(2.0)]);
    /// assert_eq!(series.values.len(), 3);
    /// assert!(series.meta.is_empty());
    ///
    /// let series = Series::new("pine", [1.0, 2.0]);
    /// assert_eq!(series.values, vec![Some(1.0), Some(2.0)]);
    /// ```
    #[must_use]
    pub fn new<K, I, V>(key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Option<f64>>,
    {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
            meta: Meta::new(),
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Returns the values that take part in statistics, in input order.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| valid_value(*v))
    }
}

impl<K> From<(K, Vec<f64>)> for Series
where
    K: Into<String>,
{
    fn from((key, values): (K, Vec<f64>)) -> Self {
        Self::new(key, values)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_with_missing_values() {
        let series: Series = serde_json::from_value(json!({
            "key": "1101",
            "values": [1.5, null, 3.0],
            "meta": { "color": "#66BB6A" }
        }))
        .unwrap();

        assert_eq!(series.key, "1101");
        assert_eq!(series.values, vec![Some(1.5), None, Some(3.0)]);
        assert_eq!(series.meta["color"], "#66BB6A");
    }

    #[test]
    fn test_deserialize_without_meta() {
        let series: Series =
            serde_json::from_value(json!({ "key": "N", "values": [] })).unwrap();
        assert!(series.values.is_empty());
        assert!(series.meta.is_empty());
    }

    #[test]
    fn test_valid_values_keep_order() {
        let series = Series::new("a", [Some(3.0), None, Some(f64::NAN), Some(1.0)]);
        assert_eq!(series.valid_values().collect::<Vec<_>>(), vec![3.0, 1.0]);
    }

    #[test]
    fn test_from_tuple() {
        let series = Series::from(("oak", vec![2.0, 1.0]));
        assert_eq!(series, Series::new("oak", [2.0, 1.0]));
    }
}
