use std::path::{Path, PathBuf};

use boxstat_dataset::dataset::BoxplotDataset;

use super::meta::{self, MetaTable};
use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    /// Path to the series JSON file
    series: PathBuf,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Describe groups without metadata using a reference table [element, fraction, plot]
    #[arg(long)]
    attach_meta: Option<MetaTable>,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let SummarizeArg {
        series,
        output,
        attach_meta,
    } = arg;

    let dataset = load_dataset(series, *attach_meta)?;

    let mut output = Output::from_output_path(output.as_deref())?;
    output.write_json(&dataset)?;
    if let Output::File { path, .. } = &output {
        tracing::info!("Wrote boxplot dataset to {}", path.display());
    }
    Ok(())
}

/// Reads a series file and builds the dataset, reporting skipped groups.
pub(crate) fn load_dataset(
    series_path: &Path,
    attach_meta: Option<MetaTable>,
) -> anyhow::Result<BoxplotDataset> {
    let mut series = util::read_series_file(series_path)?;
    if let Some(table) = attach_meta {
        meta::attach_meta(&mut series, table)?;
    }

    let (dataset, skipped) = BoxplotDataset::from_series_with_report(series);
    for group in &skipped {
        tracing::warn!("Skipped group {}: {}", group.key, group.reason);
    }
    tracing::info!(
        boxes = dataset.boxes.len(),
        points = dataset.flat_values.len(),
        skipped = skipped.len(),
        "Computed boxplot statistics"
    );
    Ok(dataset)
}
