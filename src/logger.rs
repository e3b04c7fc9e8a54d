//! Process-wide tracing setup for the demo binary and tools.
//!
//! The analysis core only emits events and spans; installing a subscriber is
//! left to the embedding application, which calls [`init`] once at startup.

pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
};

/// Installs a global subscriber filtered by `RUST_LOG` (default `info`).
///
/// Stage span timings are reported when the filter asks for `debug` output.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let span_events = if std::env::var("RUST_LOG").unwrap_or_default().contains("debug")
        || env_filter.to_string().contains("debug")
    {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
