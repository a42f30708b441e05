use std::path::PathBuf;

use anyhow::Context as _;
use boxstat_dataset::export::CsvOptions;

use super::{meta::MetaTable, summarize};
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ExportCsvArg {
    /// Path to the series JSON file
    series: PathBuf,
    /// Field separator
    #[arg(long, default_value_t = ';')]
    separator: char,
    /// Decimal mark used in numbers
    #[arg(long, default_value_t = ',')]
    decimal: char,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Describe groups without metadata using a reference table [element, fraction, plot]
    #[arg(long)]
    attach_meta: Option<MetaTable>,
}

pub(crate) fn run(arg: &ExportCsvArg) -> anyhow::Result<()> {
    let ExportCsvArg {
        series,
        separator,
        decimal,
        output,
        attach_meta,
    } = arg;

    // Check the options before doing any work
    let options = CsvOptions::new(*separator, *decimal).context("Invalid CSV options")?;
    let dataset = summarize::load_dataset(series, *attach_meta)?;

    let mut output = Output::from_output_path(output.as_deref())?;
    output.write_text(&dataset.to_csv(&options))?;
    if let Output::File { path, .. } = &output {
        tracing::info!("Wrote CSV export to {}", path.display());
    }
    Ok(())
}
