// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::config::consts::{CSV_URL, DEFAULT_OUT_DIR, PLACEHOLDER_IMAGE_URL, WORKERS};
use crate::config::RunOptions;
use crate::progress::LogProgress;

/// Fetch the roster sheet, canonicalize profile pictures and write sorted JSON.
/// Every flag is optional; without any the published defaults are used.
#[derive(Debug, Parser)]
#[command(name = "roster_fetch", version, about)]
pub struct Args {
    /// Published CSV export of the roster sheet
    #[arg(long, default_value = CSV_URL)]
    pub csv_url: String,

    /// Output directory (receives data.json and images/)
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Rows normalized in parallel
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Picture stored as images/placeholder.jpg
    #[arg(long, default_value = PLACEHOLDER_IMAGE_URL, conflicts_with = "no_placeholder")]
    pub placeholder_url: String,

    /// Skip fetching the placeholder picture
    #[arg(long)]
    pub no_placeholder: bool,

    /// Per-row debug output (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            csv_url: self.csv_url,
            out_dir: self.out_dir,
            placeholder_url: (!self.no_placeholder).then_some(self.placeholder_url),
            workers: self.workers.max(1),
            ..RunOptions::default()
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.into_options();
    let mut progress = LogProgress::default();
    let summary = crate::runner::run(&opts, Some(&mut progress))
        .wrap_err("roster run failed")?;

    info!(
        "{} records, {} rows dropped, {} warnings",
        summary.records_written,
        summary.skipped.len(),
        summary.diagnostics.len()
    );
    Ok(())
}
