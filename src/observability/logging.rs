//! Structured logging.
//!
//! Debug mode logs pretty, verbose output; release mode logs JSON at `info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::RunMode;

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(mode: RunMode) -> &'static str {
    match mode {
        RunMode::Debug => "fixtures_relay=debug,tower_http=debug",
        RunMode::Release => "fixtures_relay=info,tower_http=info",
    }
}

/// Install the global tracing subscriber. Call once, at process start.
pub fn init_logging(mode: RunMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(mode)));

    let registry = tracing_subscriber::registry().with(filter);

    match mode {
        RunMode::Debug => registry.with(tracing_subscriber::fmt::layer()).init(),
        RunMode::Release => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true),
            )
            .init(),
    }
}
