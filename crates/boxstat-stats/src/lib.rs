//! Boxplot statistics for grouped numeric samples.
//!
//! This crate provides the numeric core of the boxstat project:
//!
//! - **Quantiles**: Empirical quantiles by linear interpolation between order
//!   statistics (R Type 7)
//! - **Boxplot statistics**: Five-number summary, interquartile range, Tukey
//!   fences and the outlier partition of a single group
//!
//! # Modules
//!
//! - [`quantile`]: Quantile estimator and quartiles
//! - [`boxplot`]: Boxplot statistics and the skip policy for empty groups
//!
//! # Examples
//!
//! ## Computing a quantile
//!
//! ```
//! use boxstat_stats::quantile::quantile;
//!
//! let sorted = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(quantile(&sorted, 0.5), Some(2.5));
//! ```
//!
//! ## Computing boxplot statistics
//!
//! ```
//! use boxstat_stats::boxplot::BoxStats;
//!
//! let values = [Some(5.0), None, Some(1.0), Some(3.0), Some(f64::NAN)];
//! let stats = BoxStats::from_values(values).unwrap();
//! assert_eq!(stats.n, 3);
//! assert_eq!(stats.stats, [1.0, 2.0, 3.0, 4.0, 5.0]);
//! ```

pub mod boxplot;
pub mod quantile;
