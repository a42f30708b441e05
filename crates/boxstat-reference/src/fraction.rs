//! Litterfall sample fractions

use serde::Serialize;

use crate::descriptor::{Describe, Descriptor};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LitterfallFraction {
    /// Numeric fraction code; sub-fractions use decimal places (`114.11`).
    pub code: f64,
    pub key: &'static str,
    pub text: &'static str,
    /// Short axis label.
    pub short: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const LITTERFALL_FRACTIONS: &[LitterfallFraction] = &[
    LitterfallFraction {
        code: 10.0,
        key: "total",
        text: "Total litter",
        short: "Total",
        icon: "mdi-sigma",
        color: "#1E88E5",
    },
    LitterfallFraction {
        code: 11.0,
        key: "foliar_total",
        text: "Foliar total",
        short: "Foliar",
        icon: "mdi-leaf",
        color: "#43A047",
    },
    LitterfallFraction {
        code: 11.1,
        key: "foliar_main",
        text: "Foliar main",
        short: "Foliar M",
        icon: "mdi-leaf-maple",
        color: "#2E7D32",
    },
    LitterfallFraction {
        code: 11.2,
        key: "foliar_sec",
        text: "Foliar secondary",
        short: "Foliar S",
        icon: "mdi-leaf-circle",
        color: "#66BB6A",
    },
    LitterfallFraction {
        code: 12.0,
        key: "non_foliar",
        text: "Non foliar",
        short: "Non fol.",
        icon: "mdi-leaf-off",
        color: "#8E24AA",
    },
    LitterfallFraction {
        code: 13.0,
        key: "flower_total",
        text: "Flowering total",
        short: "Flower",
        icon: "mdi-flower",
        color: "#F4511E",
    },
    LitterfallFraction {
        code: 13.1,
        key: "flower_main",
        text: "Flowering main",
        short: "Flower M",
        icon: "mdi-flower-outline",
        color: "#FB8C00",
    },
    LitterfallFraction {
        code: 13.2,
        key: "flower_sec",
        text: "Flowering secondary",
        short: "Flower S",
        icon: "mdi-flower-tulip",
        color: "#FFB300",
    },
    LitterfallFraction {
        code: 15.0,
        key: "buds_scales",
        text: "Buds scales",
        short: "Buds",
        icon: "mdi-eyedropper",
        color: "#5E35B1",
    },
    LitterfallFraction {
        code: 16.0,
        key: "wood",
        text: "Wood fraction",
        short: "Wood",
        icon: "mdi-tree-outline",
        color: "#6D4C41",
    },
    LitterfallFraction {
        code: 17.0,
        key: "fines",
        text: "Fines + frass + insects",
        short: "Fines",
        icon: "mdi-bug",
        color: "#00897B",
    },
    LitterfallFraction {
        code: 18.0,
        key: "rest",
        text: "Rest",
        short: "Rest",
        icon: "mdi-dots-horizontal",
        color: "#546E7A",
    },
    LitterfallFraction {
        code: 19.0,
        key: "leftover",
        text: "Leftover biomass",
        short: "Leftov.",
        icon: "mdi-alert-circle",
        color: "#90A4AE",
    },
    LitterfallFraction {
        code: 114.0,
        key: "fruit_total",
        text: "Fruits & seeds total",
        short: "Fruit",
        icon: "mdi-seed",
        color: "#C0CA33",
    },
    LitterfallFraction {
        code: 114.1,
        key: "fruit_main",
        text: "Fruits & seeds main",
        short: "Fruit M",
        icon: "mdi-seed-outline",
        color: "#9E9D24",
    },
    LitterfallFraction {
        code: 114.11,
        key: "seeds_main",
        text: "Seeds only main",
        short: "Seeds M",
        icon: "mdi-seed-plus",
        color: "#827717",
    },
    LitterfallFraction {
        code: 114.12,
        key: "cones_main",
        text: "Capsules & cones main",
        short: "Cones M",
        icon: "mdi-pine-tree",
        color: "#388E3C",
    },
    LitterfallFraction {
        code: 114.2,
        key: "fruit_sec",
        text: "Fruits & seeds secondary",
        short: "Fruit S",
        icon: "mdi-seed",
        color: "#7CB342",
    },
    LitterfallFraction {
        code: 114.21,
        key: "seeds_sec",
        text: "Seeds only secondary",
        short: "Seeds S",
        icon: "mdi-seed-plus",
        color: "#558B2F",
    },
    LitterfallFraction {
        code: 114.22,
        key: "cones_sec",
        text: "Capsules & cones secondary",
        short: "Cones S",
        icon: "mdi-pine-tree",
        color: "#2E7D32",
    },
];

/// Looks up a fraction by its numeric code.
///
/// # Examples
///
/// ```
/// use boxstat_reference::fraction::fraction_meta;
///
/// assert_eq!(fraction_meta(114.11).unwrap().key, "seeds_main");
/// assert_eq!(fraction_meta(10.0).unwrap().short, "Total");
/// assert!(fraction_meta(99.0).is_none());
/// ```
#[must_use]
pub fn fraction_meta(code: f64) -> Option<&'static LitterfallFraction> {
    LITTERFALL_FRACTIONS.iter().find(|f| f.code == code)
}

/// Returns the fractions that have at least one recorded mass, in table order.
///
/// Each row is a `(fraction code, mass)` pair; rows without a mass are ignored.
///
/// # Examples
///
/// ```
/// use boxstat_reference::fraction::filter_relevant_fractions;
///
/// let rows = [(16.0, Some(3.2)), (11.1, Some(20.5)), (13.0, None)];
/// let keys = filter_relevant_fractions(rows)
///     .iter()
///     .map(|f| f.key)
///     .collect::<Vec<_>>();
/// assert_eq!(keys, ["foliar_main", "wood"]);
/// ```
#[must_use]
pub fn filter_relevant_fractions<I>(rows: I) -> Vec<&'static LitterfallFraction>
where
    I: IntoIterator<Item = (f64, Option<f64>)>,
{
    let codes = rows
        .into_iter()
        .filter(|(_, mass)| mass.is_some())
        .map(|(code, _)| code)
        .collect::<Vec<_>>();
    LITTERFALL_FRACTIONS
        .iter()
        .filter(|f| codes.contains(&f.code))
        .collect()
}

impl Describe for LitterfallFraction {
    fn describe(&self) -> Descriptor {
        Descriptor {
            code: self.code.to_string(),
            key: self.key,
            label: self.text,
            unit: None,
            color: self.color,
            icon: Some(self.icon),
        }
    }
}
