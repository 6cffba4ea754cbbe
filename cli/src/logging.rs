//! Logging configuration for the command-line binary.
//!
//! Stdout-only tracing output. Set `RUST_LOG` to adjust verbosity
//! (default `info`).

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize stdout logging honoring `RUST_LOG`
pub fn init() {
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(filter)
        .init();
}
