//! Delimited text export for spreadsheet tools
//!
//! The export writes one line per flat point, repeating the statistics of the
//! point's group on every line:
//!
//! ```text
//! Gruppe;Anzahl;Min;Q1;Median;Q3;Max;IQR;LowerFence;UpperFence;Wert;Outlier
//! a;10;1;3,25;5,5;7,75;9;4,5;-3,5;14,5;100;1
//! ```
//!
//! Column order and header labels are fixed. Only the field separator and the
//! decimal mark can be changed through [`CsvOptions`].

use crate::dataset::BoxplotDataset;

/// Header labels, in column order.
pub const CSV_HEADER: [&str; 12] = [
    "Gruppe",
    "Anzahl",
    "Min",
    "Q1",
    "Median",
    "Q3",
    "Max",
    "IQR",
    "LowerFence",
    "UpperFence",
    "Wert",
    "Outlier",
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CsvOptionsError {
    #[display("separator and decimal mark must differ (both are '{mark}')")]
    SeparatorMatchesDecimal { mark: char },
    #[display("line breaks cannot be used as separator or decimal mark")]
    LineBreak,
}

/// Field separator and decimal mark of the export.
///
/// Defaults to `;` and `,`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    separator: char,
    decimal: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: ';',
            decimal: ',',
        }
    }
}

impl CsvOptions {
    /// Creates export options.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxstat_dataset::export::CsvOptions;
    ///
    /// let options = CsvOptions::new(',', '.').unwrap();
    /// assert_eq!(options.separator(), ',');
    ///
    /// assert!(CsvOptions::new(',', ',').is_err());
    /// ```
    pub fn new(separator: char, decimal: char) -> Result<Self, CsvOptionsError> {
        if separator == decimal {
            return Err(CsvOptionsError::SeparatorMatchesDecimal { mark: separator });
        }
        if is_line_break(separator) || is_line_break(decimal) {
            return Err(CsvOptionsError::LineBreak);
        }
        Ok(Self { separator, decimal })
    }

    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    #[must_use]
    pub fn decimal(&self) -> char {
        self.decimal
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Renders a dataset as delimited text.
///
/// Emits the header and one line per flat point, in flat point order. Each line
/// carries the statistics of the first box sharing the point's key; points
/// without such a box are left out. Lines are joined by `\n` without a trailing
/// line break.
///
/// # Examples
///
/// ```
/// use boxstat_dataset::{
///     dataset::BoxplotDataset,
///     export::{CsvOptions, export_csv},
///     series::Series,
/// };
///
/// let dataset = BoxplotDataset::from_series([Series::new("a", [1.0, 2.0])]);
/// let csv = export_csv(&dataset, &CsvOptions::default());
///
/// let lines = csv.lines().collect::<Vec<_>>();
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[1], "a;2;1;1,25;1,5;1,75;2;0,5;0,5;2,5;1;0");
/// ```
#[must_use]
pub fn export_csv(dataset: &BoxplotDataset, options: &CsvOptions) -> String {
    let separator = options.separator.to_string();
    let boxes = dataset.box_index();

    let mut lines = Vec::with_capacity(dataset.flat_values.len() + 1);
    lines.push(CSV_HEADER.join(separator.as_str()));

    for point in &dataset.flat_values {
        let Some(summary) = boxes.get(point.key.as_str()) else {
            tracing::debug!(key = %point.key, "no box for point, omitting line");
            continue;
        };
        let stats = &summary.box_stats;
        let number = |value| format_number(value, options.decimal);

        let fields = [
            point.key.clone(),
            stats.n.to_string(),
            number(stats.min()),
            number(stats.q1()),
            number(stats.median()),
            number(stats.q3()),
            number(stats.max()),
            number(stats.iqr),
            number(stats.fences.lower_fence),
            number(stats.fences.upper_fence),
            number(point.value),
            u8::from(point.is_outlier).to_string(),
        ];
        lines.push(fields.join(separator.as_str()));
    }

    lines.join("\n")
}

/// Formats a number and substitutes its decimal point.
///
/// This is plain character substitution on [`number_to_string`], not locale
/// aware formatting.
///
/// # Examples
///
/// ```
/// use boxstat_dataset::export::format_number;
///
/// assert_eq!(format_number(3.25, ','), "3,25");
/// assert_eq!(format_number(4.0, ','), "4");
/// assert_eq!(format_number(1.5e-7, ','), "1,5e-7");
/// ```
#[must_use]
pub fn format_number(value: f64, decimal: char) -> String {
    let mut buf = [0; 4];
    let decimal = decimal.encode_utf8(&mut buf);
    number_to_string(value).replacen('.', decimal, 1)
}

/// Shortest round-trip representation of a number.
///
/// Integral values have no fractional part, magnitudes outside
/// `[1e-6, 1e21)` use exponent notation with an explicit exponent sign
/// (`1e+21`, `1.5e-7`), and non-finite values are spelled `NaN`, `Infinity`
/// and `-Infinity`. Negative zero renders as `0`.
///
/// # Examples
///
/// ```
/// use boxstat_dataset::export::number_to_string;
///
/// assert_eq!(number_to_string(2.5), "2.5");
/// assert_eq!(number_to_string(10.0), "10");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        dataset::{BoxplotDataset, FlatPoint},
        series::{Meta, Series},
    };

    fn outlier_dataset() -> BoxplotDataset {
        BoxplotDataset::from_series([Series::new(
            "a",
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0],
        )])
    }

    #[test]
    fn test_header() {
        let csv = export_csv(&BoxplotDataset::default(), &CsvOptions::default());
        assert_eq!(
            csv,
            "Gruppe;Anzahl;Min;Q1;Median;Q3;Max;IQR;LowerFence;UpperFence;Wert;Outlier"
        );
    }

    #[test]
    fn test_default_options() {
        let csv = export_csv(&outlier_dataset(), &CsvOptions::default());
        let lines = csv.split('\n').collect::<Vec<_>>();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "a;10;1;3,25;5,5;7,75;9;4,5;-3,5;14,5;1;0");
        assert_eq!(lines[10], "a;10;1;3,25;5,5;7,75;9;4,5;-3,5;14,5;100;1");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_custom_options() {
        let options = CsvOptions::new(',', '.').unwrap();
        let csv = outlier_dataset().to_csv(&options);
        let lines = csv.split('\n').collect::<Vec<_>>();

        assert_eq!(
            lines[0],
            "Gruppe,Anzahl,Min,Q1,Median,Q3,Max,IQR,LowerFence,UpperFence,Wert,Outlier"
        );
        assert_eq!(lines[10], "a,10,1,3.25,5.5,7.75,9,4.5,-3.5,14.5,100,1");
    }

    #[test]
    fn test_every_line_has_header_field_count() {
        let dataset = BoxplotDataset::from_series([
            Series::new("a", [0.1, 0.2, 0.3, 12.5]),
            Series::new("b", [Some(1e-7), None, Some(2e21), Some(-3.0)]),
        ]);
        let options = CsvOptions::default();
        let csv = export_csv(&dataset, &options);

        for line in csv.split('\n') {
            assert_eq!(line.split(options.separator()).count(), CSV_HEADER.len());
        }
    }

    #[test]
    fn test_missing_box_omits_line() {
        let mut dataset = outlier_dataset();
        dataset.flat_values.push(FlatPoint {
            key: "ghost".to_owned(),
            value: 1.0,
            is_outlier: false,
            meta: Arc::new(Meta::new()),
        });

        let csv = export_csv(&dataset, &CsvOptions::default());
        assert_eq!(csv.split('\n').count(), 11);
        assert!(!csv.contains("ghost"));
    }

    #[test]
    fn test_duplicate_keys_use_first_box() {
        let dataset = BoxplotDataset::from_series([
            Series::new("dup", [1.0, 2.0, 3.0]),
            Series::new("dup", [10.0, 20.0]),
        ]);
        let csv = export_csv(&dataset, &CsvOptions::default());
        let lines = csv.split('\n').collect::<Vec<_>>();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "dup;3;1;1,5;2;2,5;3;1;0;4;10;0");
    }

    #[test]
    fn test_options_validation() {
        assert!(matches!(
            CsvOptions::new(';', ';'),
            Err(CsvOptionsError::SeparatorMatchesDecimal { mark: ';' })
        ));
        assert!(matches!(
            CsvOptions::new('\n', ','),
            Err(CsvOptionsError::LineBreak)
        ));
        assert_eq!(
            CsvOptionsError::SeparatorMatchesDecimal { mark: ',' }.to_string(),
            "separator and decimal mark must differ (both are ',')"
        );
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(0.0), "0");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(-3.5), "-3.5");
        assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_string(1e-6), "0.000001");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(-2.5e22), "-2.5e+22");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_replaces_decimal_point_only() {
        assert_eq!(format_number(-3.5, ','), "-3,5");
        assert_eq!(format_number(2.5e22, ','), "2,5e+22");
        assert_eq!(format_number(12.0, ','), "12");
        assert_eq!(format_number(0.5, '·'), "0·5");
    }
}
