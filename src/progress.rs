// src/progress.rs
use tracing::{debug, info};

use crate::record::Diagnostic;

/// Lightweight progress reporting for a batch run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sheet rows.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A row produced a record.
    fn item_done(&mut self, _ordinal: usize, _name: &str) {}

    /// A row was dropped.
    fn item_failed(&mut self, _ordinal: usize, _reason: &str) {}

    /// A non-fatal finding, already logged by the runner.
    fn diagnostic(&mut self, _diagnostic: &Diagnostic) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Console sink used by the CLI: status lines at info, per-row chatter at debug.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!("{total} rows");
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, ordinal: usize, name: &str) {
        self.done += 1;
        debug!("R{ordinal}: {name} ({}/{})", self.done + self.failed, self.total);
    }

    fn item_failed(&mut self, _ordinal: usize, _reason: &str) {
        self.failed += 1;
    }

    fn finish(&mut self) {
        info!("{} kept, {} dropped", self.done, self.failed);
    }
}
