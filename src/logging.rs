//! Logging setup.
//!
//! The library only emits `tracing` events. Applications that want to see them
//! call [`init_logging`] once at startup. Output goes to stderr so log lines
//! never interleave with frames written to stdout.

use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Idempotent. Does nothing if another global subscriber is already set.
pub fn init_logging() {
    TRACING_INSTALLED.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let console = fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("spark-flow: a global tracing subscriber is already installed");
        }
    });
}
