//! Chemical elements analysed in foliage and litter samples

use std::collections::HashSet;

use serde::Serialize;

use crate::descriptor::{Describe, Descriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChemElement {
    /// Chemical symbol, e.g. `"Ca"`.
    pub code: &'static str,
    pub key: &'static str,
    pub text: &'static str,
    pub text_de: &'static str,
    /// Short axis label.
    pub short: &'static str,
    pub unit: &'static str,
    /// Drying temperature of the sample.
    pub temperature: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

const fn element(
    code: &'static str,
    key: &'static str,
    text: &'static str,
    text_de: &'static str,
    unit: &'static str,
    icon: &'static str,
    color: &'static str,
) -> ChemElement {
    ChemElement {
        code,
        key,
        text,
        text_de,
        short: code,
        unit,
        temperature: "105°C",
        icon,
        color,
    }
}

pub const CHEM_ELEMENTS: &[ChemElement] = &[
    element(
        "N",
        "nitrogen",
        "Nitrogen",
        "Stickstoff",
        "mg/g",
        "mdi-atom",
        "#1E88E5",
    ),
    element(
        "S",
        "sulphur",
        "Sulphur",
        "Schwefel",
        "mg/g",
        "mdi-test-tube",
        "#8E24AA",
    ),
    element(
        "P",
        "phosphorus",
        "Phosphorus",
        "Phosphor",
        "mg/g",
        "mdi-flask",
        "#FB8C00",
    ),
    element(
        "Ca",
        "calcium",
        "Calcium",
        "Kalzium",
        "mg/g",
        "mdi-flask-round-bottom",
        "#6D4C41",
    ),
    element(
        "Mg",
        "magnesium",
        "Magnesium",
        "Magnesium",
        "mg/g",
        "mdi-flask-outline",
        "#43A047",
    ),
    element(
        "K",
        "potassium",
        "Potassium",
        "Kalium",
        "mg/g",
        "mdi-test-tube-empty",
        "#F4511E",
    ),
    element(
        "C",
        "carbon",
        "Carbon",
        "Kohlenstoff",
        "g/100g",
        "mdi-molecule-co2",
        "#000000",
    ),
    element(
        "Zn",
        "zinc",
        "Zinc",
        "Zink",
        "µg/g",
        "mdi-beaker",
        "#00ACC1",
    ),
    element(
        "Mn",
        "manganese",
        "Manganese",
        "Mangan",
        "µg/g",
        "mdi-beaker-outline",
        "#00897B",
    ),
    element(
        "Fe",
        "iron",
        "Iron",
        "Eisen",
        "µg/g",
        "mdi-magnet",
        "#D32F2F",
    ),
    element(
        "Cu",
        "copper",
        "Copper",
        "Kupfer",
        "µg/g",
        "mdi-beaker-outline",
        "#8D6E63",
    ),
    element(
        "Pb",
        "lead",
        "Lead",
        "Blei",
        "µg/g",
        "mdi-alert-circle-outline",
        "#607D8B",
    ),
    element(
        "Cd",
        "cadmium",
        "Cadmium",
        "Kadmium",
        "ng/g",
        "mdi-biohazard",
        "#AD1457",
    ),
    element(
        "B",
        "boron",
        "Boron",
        "Bor",
        "µg/g",
        "mdi-beaker-plus",
        "#C0CA33",
    ),
    element(
        "As",
        "arsenic",
        "Arsenic",
        "Arsen",
        "ng/g",
        "mdi-alert",
        "#7B1FA2",
    ),
    element(
        "Cr",
        "chromium",
        "Chromium",
        "Chrom",
        "µg/g",
        "mdi-hexagon",
        "#7CB342",
    ),
    element(
        "Co",
        "cobalt",
        "Cobalt",
        "Kobalt",
        "µg/g",
        "mdi-hexagon-multiple",
        "#5E35B1",
    ),
    element(
        "Hg",
        "mercury",
        "Mercury",
        "Quecksilber",
        "ng/g",
        "mdi-thermometer",
        "#3949AB",
    ),
    element(
        "Ni",
        "nickel",
        "Nickel",
        "Nickel",
        "µg/g",
        "mdi-coin",
        "#558B2F",
    ),
    element(
        "Al",
        "aluminium",
        "Aluminium",
        "Aluminium",
        "ng/g",
        "mdi-flask-plus",
        "#7f9b3fff",
    ),
    element(
        "Na",
        "sodium",
        "Sodium",
        "Natrium",
        "µg/g",
        "mdi-flask-empty-outline",
        "#8f1b7fff",
    ),
];

/// Looks up an element by symbol or key, ignoring case.
///
/// # Examples
///
/// ```
/// use boxstat_reference::element::element_meta;
///
/// assert_eq!(element_meta("ca").unwrap().key, "calcium");
/// assert_eq!(element_meta("Nitrogen").unwrap().code, "N");
/// assert!(element_meta("Xx").is_none());
/// ```
#[must_use]
pub fn element_meta(code_or_key: &str) -> Option<&'static ChemElement> {
    CHEM_ELEMENTS.iter().find(|e| {
        e.code.eq_ignore_ascii_case(code_or_key) || e.key.eq_ignore_ascii_case(code_or_key)
    })
}

/// Returns the elements that have at least one measured value, in table order.
///
/// Each row is an `(element code, value)` pair; rows without a value are
/// ignored.
///
/// # Examples
///
/// ```
/// use boxstat_reference::element::filter_relevant_elements;
///
/// let rows = [("ca", Some(4.1)), ("N", Some(12.0)), ("Fe", None)];
/// let codes = filter_relevant_elements(rows)
///     .iter()
///     .map(|e| e.code)
///     .collect::<Vec<_>>();
/// assert_eq!(codes, ["N", "Ca"]);
/// ```
#[must_use]
pub fn filter_relevant_elements<'a, I>(rows: I) -> Vec<&'static ChemElement>
where
    I: IntoIterator<Item = (&'a str, Option<f64>)>,
{
    let codes = rows
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(code, _)| code.to_uppercase())
        .collect::<HashSet<_>>();
    CHEM_ELEMENTS
        .iter()
        .filter(|e| codes.contains(&e.code.to_uppercase()))
        .collect()
}

impl Describe for ChemElement {
    fn describe(&self) -> Descriptor {
        Descriptor {
            code: self.code.to_owned(),
            key: self.key,
            label: self.text,
            unit: Some(self.unit),
            color: self.color,
            icon: Some(self.icon),
        }
    }
}
