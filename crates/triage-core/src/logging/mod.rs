//! Logging setup: `tracing` with an `EnvFilter` read from `TRIAGE_LOG`.

pub mod setup;

pub use setup::{init_tracing, LogFormat};
