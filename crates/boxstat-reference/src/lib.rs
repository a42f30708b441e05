//! Read-only reference tables for forest monitoring data
//!
//! These tables describe what a group key stands for (a chemical element, a
//! litterfall fraction, a tree species or a plot) so charts and exports can label
//! and color it. They never influence the statistics themselves.
//!
//! # Modules
//!
//! - [`element`]: Chemical elements with units and colors
//! - [`fraction`]: Litterfall sample fractions
//! - [`forest`]: Tree species and monitoring plots
//! - [`descriptor`]: Uniform `{code, key, label, unit, color, icon}` view
//!
//! # Examples
//!
//! ```
//! use boxstat_reference::{descriptor::Describe, element::element_meta};
//!
//! let descriptor = element_meta("K").unwrap().describe();
//! assert_eq!(descriptor.label, "Potassium");
//! assert_eq!(descriptor.unit, Some("mg/g"));
//! ```

pub mod descriptor;
pub mod element;
pub mod forest;
pub mod fraction;
