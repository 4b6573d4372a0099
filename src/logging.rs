//! Structured logging initialization for embedding harnesses
//!
//! The engine itself only emits `tracing` spans; a harness that wants them
//! on stderr calls [`init_tracing`] once at startup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize a stderr `tracing` subscriber.
///
/// `level` is a filter directive (`"debug"`, `"trunkline=trace"`, ...);
/// when `None` the default is `trunkline=warn`. The `TRUNKLINE_LOG`
/// environment variable (or `RUST_LOG`) overrides whatever is passed.
/// With `json` set, events are emitted as JSON objects with span open and
/// close events for log-collecting harnesses.
pub fn init_tracing(level: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match level {
        Some(value) if value.contains('=') => value.to_string(),
        Some(value) => format!("trunkline={value}"),
        None => "trunkline=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("TRUNKLINE_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
