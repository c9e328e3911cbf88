// src/runner.rs
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc,
};
use std::thread;

use tracing::{info, warn};

use crate::{
    config::{consts::FIRST_DATA_ROW, RunOptions},
    csv, file, log,
    error::{NormalizeError, RunError},
    normalize::{normalize, NormalizeCtx, Normalized},
    picture::{HttpImageSource, ImageSource},
    progress::{NullProgress, Progress},
    record::{Diagnostic, DiagnosticKind, PersonRecord, RawRow},
    store::ImageCache,
};

/// What a pass over the rows produced, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    pub records: Vec<PersonRecord>,
    /// Ordinals of dropped rows.
    pub skipped: Vec<usize>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub records_written: usize,
    pub skipped: Vec<usize>,
    pub diagnostics: Vec<Diagnostic>,
    pub placeholder: Option<PathBuf>,
}

/// Top-level runner against the real network.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let images = HttpImageSource::new(opts.image);
    run_with(opts, &images, progress)
}

/// Same as [`run`] with an injectable picture source.
/// Only the sheet fetch and local I/O on the output paths are fatal.
pub fn run_with(
    opts: &RunOptions,
    images: &dyn ImageSource,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    log::banner("FETCH");

    let cache = ImageCache::open(opts.image_dir())?;

    log::section("Fetching CSV...");
    info!("URL: {}", opts.csv_url);
    let rows = csv::fetch(&opts.csv_url)?;
    info!("Done!");

    log::section("Parsing CSV...");
    let ctx = NormalizeCtx { cache: &cache, images };
    let batch = process_rows(&rows, ctx, opts.workers, progress);
    info!("Done!");

    let placeholder = match &opts.placeholder_url {
        Some(url) => {
            log::section("Fetching placeholder image...");
            info!("URL: {url}");
            let path = fetch_placeholder(url, ctx);
            info!("Done!");
            path
        }
        None => None,
    };

    let output = opts.output_json();
    log::section("Writing JSON...");
    info!("File: {}", output.display());
    file::write_json(&batch.records, &output)?;
    info!("Done!");

    progress.log(&format!("Wrote {} records to {}", batch.records.len(), output.display()));

    Ok(RunSummary {
        output,
        records_written: batch.records.len(),
        skipped: batch.skipped,
        diagnostics: batch.diagnostics,
        placeholder,
    })
}

/// Normalize every row. Rows are independent: with `workers > 1` they are
/// spread over a small thread pool; results are put back in source order.
pub fn process_rows(
    rows: &[RawRow],
    ctx: NormalizeCtx<'_>,
    workers: usize,
    progress: &mut dyn Progress,
) -> Batch {
    progress.begin(rows.len());

    type RowResult = (usize, Result<Normalized, NormalizeError>);

    let workers = workers.clamp(1, rows.len().max(1));
    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<RowResult>();
    let mut results: Vec<RowResult> = Vec::with_capacity(rows.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move || {
                loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= rows.len() {
                        break;
                    }
                    let outcome = normalize(&rows[i], i + FIRST_DATA_ROW, ctx);
                    if tx.send((i, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx); // this thread is sole receiver now

        for (i, outcome) in rx {
            report(i + FIRST_DATA_ROW, &outcome, progress);
            results.push((i, outcome));
        }
    });

    progress.finish();

    results.sort_by_key(|(i, _)| *i);

    let mut batch = Batch::default();
    for (i, outcome) in results {
        let ordinal = i + FIRST_DATA_ROW;
        match outcome {
            Ok(Normalized { record, diagnostics }) => {
                batch.diagnostics.extend(diagnostics);
                batch.records.push(record);
            }
            Err(NormalizeError::NameMissing) => {
                batch.diagnostics.push(Diagnostic::new(ordinal, DiagnosticKind::NoName));
                batch.skipped.push(ordinal);
            }
        }
    }
    batch
}

fn report(
    ordinal: usize,
    outcome: &Result<Normalized, NormalizeError>,
    progress: &mut dyn Progress,
) {
    match outcome {
        Ok(normalized) => {
            for d in &normalized.diagnostics {
                warn!("{d}");
                progress.diagnostic(d);
            }
            progress.item_done(ordinal, &normalized.record.name);
        }
        Err(e) => {
            let d = Diagnostic::new(ordinal, DiagnosticKind::NoName);
            warn!("{d}");
            progress.diagnostic(&d);
            progress.item_failed(ordinal, &e.to_string());
        }
    }
}

/// Best effort: a missing placeholder never fails the run.
fn fetch_placeholder(url: &str, ctx: NormalizeCtx<'_>) -> Option<PathBuf> {
    let name = ImageCache::placeholder_name();
    match ctx.images.canonicalize(url) {
        Ok(img) => match ctx.cache.store(&name, &img) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Unable to save image - {url} ({e})");
                None
            }
        },
        Err(e) => {
            warn!("{} - {url}", e.failure().describe());
            None
        }
    }
}
