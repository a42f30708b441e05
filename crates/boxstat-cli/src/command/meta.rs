//! Display metadata from the reference tables

use anyhow::Context;
use boxstat_dataset::series::{Meta, Series};
use boxstat_reference::{
    descriptor::{Describe, Descriptor},
    element, forest, fraction,
};

/// Reference table used to describe group keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum MetaTable {
    /// Keys are element symbols or names (`"Ca"`, `"calcium"`)
    Element,
    /// Keys are litterfall fraction codes (`"114.11"`)
    Fraction,
    /// Keys are plot codes (`"1101"`)
    Plot,
}

impl MetaTable {
    fn lookup(self, key: &str) -> Option<Descriptor> {
        let key = key.trim();
        match self {
            MetaTable::Element => element::element_meta(key).map(Describe::describe),
            MetaTable::Fraction => key
                .parse()
                .ok()
                .and_then(fraction::fraction_meta)
                .map(Describe::describe),
            MetaTable::Plot => forest::plot(key).map(Describe::describe),
        }
    }
}

/// Fill the metadata of series that have none from a reference table
///
/// Series with existing metadata are left untouched. Keys without a matching
/// table entry are logged and keep an empty `meta`.
pub(crate) fn attach_meta(series: &mut [Series], table: MetaTable) -> anyhow::Result<()> {
    for series in series.iter_mut().filter(|s| s.meta.is_empty()) {
        let Some(descriptor) = table.lookup(&series.key) else {
            tracing::warn!(key = %series.key, ?table, "no reference entry for group");
            continue;
        };
        series.meta = descriptor_to_meta(&descriptor)
            .with_context(|| format!("Failed to convert metadata of {}", series.key))?;
    }
    Ok(())
}

fn descriptor_to_meta(descriptor: &Descriptor) -> serde_json::Result<Meta> {
    serde_json::to_value(descriptor).and_then(serde_json::from_value)
}
