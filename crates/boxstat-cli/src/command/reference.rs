use boxstat_reference::{
    element::CHEM_ELEMENTS, forest::PLOTS, forest::TREE_SPECIES,
    fraction::LITTERFALL_FRACTIONS,
};

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReferenceArg {
    /// Table to print [elements, fractions, species, plots]
    table: ReferenceTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
enum ReferenceTable {
    Elements,
    Fractions,
    Species,
    Plots,
}

pub(crate) fn run(arg: &ReferenceArg) -> anyhow::Result<()> {
    let mut output = Output::stdout();
    match arg.table {
        ReferenceTable::Elements => output.write_json(CHEM_ELEMENTS),
        ReferenceTable::Fractions => output.write_json(LITTERFALL_FRACTIONS),
        ReferenceTable::Species => output.write_json(TREE_SPECIES),
        ReferenceTable::Plots => output.write_json(PLOTS),
    }
}
