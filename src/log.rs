// src/log.rs
// Console logging: a tracing subscriber plus the section banners the run prints.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::consts::PRINT_WIDTH;

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose { "info,roster_fetch=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

fn rule() {
    info!("{}", "-".repeat(PRINT_WIDTH));
}

/// Full-width rule with a centered title.
pub fn banner(title: &str) {
    rule();
    info!("{title:^PRINT_WIDTH$}");
}

/// Rule followed by a step heading.
pub fn section(title: &str) {
    rule();
    info!("{title}");
}
