//! Diagnostic logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. The level comes
//! from the `-v` count alone; `RUST_LOG` is not consulted.

use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Map `-v` occurrences to a level: none → warn, 1 → info, 2 → debug, 3+ → trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Call once, before the pipeline runs.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .parse_lossy("");

    let fmt_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
