use clap::{Parser, Subcommand};
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use self::{export_csv::ExportCsvArg, reference::ReferenceArg, summarize::SummarizeArg};

mod export_csv;
mod meta;
mod reference;
mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug diagnostics, such as skipped groups
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute boxplot statistics and write the dataset as JSON
    Summarize(#[clap(flatten)] SummarizeArg),
    /// Compute boxplot statistics and write them as delimited text
    ExportCsv(#[clap(flatten)] ExportCsvArg),
    /// Print a reference table as JSON
    Reference(#[clap(flatten)] ReferenceArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);

    match args.mode {
        Mode::Summarize(arg) => summarize::run(&arg)?,
        Mode::ExportCsv(arg) => export_csv::run(&arg)?,
        Mode::Reference(arg) => reference::run(&arg)?,
    }
    Ok(())
}

/// Logs go to stderr so that stdout only carries data.
fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref(), verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// `RUST_LOG` replaces the default `info` level; `--verbose` raises it to `debug`.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}
