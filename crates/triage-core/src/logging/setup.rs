//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "TRIAGE_LOG";

/// Environment variable selecting the output format (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "TRIAGE_LOG_FORMAT";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Read the format from `TRIAGE_LOG_FORMAT`, defaulting to text.
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// Reads `TRIAGE_LOG` for per-module levels, e.g.
/// `TRIAGE_LOG=triage_pipeline=debug,triage_embeddings=warn`.
/// Falls back to `info` when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(format: LogFormat) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);
        match format {
            LogFormat::Text => registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .init(),
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init(),
        }
    });
}
