//! Tree species and monitoring plots

use serde::Serialize;

use crate::descriptor::{Describe, Descriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeSpecies {
    pub label: &'static str,
    pub value: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub code: u32,
}

pub const TREE_SPECIES: &[TreeSpecies] = &[
    TreeSpecies {
        label: "Kiefern",
        value: "Kiefern",
        color: "green-darken-2",
        icon: "mdi-pine-tree",
        code: 134,
    },
    TreeSpecies {
        label: "Buchen",
        value: "Buchen",
        color: "green-darken-2",
        icon: "mdi-tree",
        code: 20,
    },
    TreeSpecies {
        label: "Eichen",
        value: "Eichen",
        color: "green-darken-2",
        icon: "mdi-tree-outline",
        code: 48,
    },
];

/// A monitoring plot and the species growing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plot {
    /// Plot number as used in the monitoring data, e.g. `"1101"`.
    pub code: &'static str,
    pub name: &'static str,
    pub species: &'static [u32],
    /// Boxplot color of the plot.
    pub color: &'static str,
}

const PINE: &[u32] = &[134];
const BEECH: &[u32] = &[20];
const OAK: &[u32] = &[48];

pub const PLOTS: &[Plot] = &[
    Plot {
        code: "1101",
        name: "Grunewald",
        species: PINE,
        color: "#66BB6A",
    },
    Plot {
        code: "1201",
        name: "Natteheide",
        species: PINE,
        color: "#64B5F6",
    },
    Plot {
        code: "1202",
        name: "Beerenbusch",
        species: PINE,
        color: "#EF5350",
    },
    Plot {
        code: "1203",
        name: "Kienhorst",
        species: PINE,
        color: "#AB47BC",
    },
    Plot {
        code: "1204",
        name: "Weitzgrund",
        species: PINE,
        color: "#FFCA28",
    },
    Plot {
        code: "1205",
        name: "Neusorgefeld",
        species: PINE,
        color: "#FFA726",
    },
    Plot {
        code: "1206",
        name: "Schwenow",
        species: PINE,
        color: "#26C6DA",
    },
    Plot {
        code: "1207",
        name: "Beerenbusch Buchen",
        species: BEECH,
        color: "#9CCC65",
    },
    Plot {
        code: "1208",
        name: "Fünfeichen",
        species: OAK,
        color: "#8D6E63",
    },
    Plot {
        code: "1209",
        name: "Kienhorst Eichen",
        species: OAK,
        color: "#EC407A",
    },
];

#[must_use]
pub fn tree_species(code: u32) -> Option<&'static TreeSpecies> {
    TREE_SPECIES.iter().find(|s| s.code == code)
}

/// Looks up a plot by its code.
///
/// # Examples
///
/// ```
/// use boxstat_reference::forest::plot;
///
/// assert_eq!(plot("1207").unwrap().name, "Beerenbusch Buchen");
/// assert!(plot("42").is_none());
/// ```
#[must_use]
pub fn plot(code: &str) -> Option<&'static Plot> {
    PLOTS.iter().find(|p| p.code == code)
}

/// Singular German species name, `"Unbekannt"` for unknown codes.
///
/// # Examples
///
/// ```
/// use boxstat_reference::forest::species_name_by_code;
///
/// assert_eq!(species_name_by_code(134), "Kiefer");
/// assert_eq!(species_name_by_code(7), "Unbekannt");
/// ```
#[must_use]
pub fn species_name_by_code(code: u32) -> &'static str {
    match code {
        134 => "Kiefer",
        20 => "Buche",
        48 => "Eiche",
        _ => "Unbekannt",
    }
}

impl Describe for TreeSpecies {
    fn describe(&self) -> Descriptor {
        Descriptor {
            code: self.code.to_string(),
            key: self.value,
            label: self.label,
            unit: None,
            color: self.color,
            icon: Some(self.icon),
        }
    }
}

impl Describe for Plot {
    fn describe(&self) -> Descriptor {
        Descriptor {
            code: self.code.to_owned(),
            key: self.name,
            label: self.name,
            unit: None,
            color: self.color,
            // Plots carry the icon of their (first) species
            icon: self
                .species
                .first()
                .and_then(|&code| tree_species(code))
                .map(|s| s.icon),
        }
    }
}
