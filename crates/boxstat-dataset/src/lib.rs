//! Grouped boxplot datasets and their delimited text export
//!
//! This crate turns named groups of raw measurements into the two views a
//! boxplot chart needs, and writes them out for spreadsheet tools.
//!
//! # Overview
//!
//! 1. **Describe groups** ([`series::Series`]): key, raw values, display metadata
//! 2. **Build the dataset** ([`dataset::BoxplotDataset`]): one box per group and
//!    one flat point per valid value, with outlier flags
//! 3. **Export** ([`export::export_csv`]): one line per flat point with the
//!    statistics of its group
//!
//! Statistics come from [`boxstat_stats`]. Groups without valid values are
//! skipped and logged at debug level.
//!
//! # Examples
//!
//! ```
//! use boxstat_dataset::{
//!     dataset::BoxplotDataset,
//!     export::CsvOptions,
//!     series::Series,
//! };
//!
//! let dataset = BoxplotDataset::from_series([
//!     Series::new("1101", [Some(2.1), Some(2.4), None, Some(9.8)]),
//!     Series::new("1201", [1.7, 1.9, 2.0]),
//! ]);
//!
//! assert_eq!(dataset.boxes.len(), 2);
//! assert_eq!(dataset.flat_values.len(), 6);
//!
//! let csv = dataset.to_csv(&CsvOptions::default());
//! assert!(csv.starts_with("Gruppe;Anzahl;Min;"));
//! ```

pub mod dataset;
pub mod export;
pub mod series;
