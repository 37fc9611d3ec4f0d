//! Centralized structured logging configuration.
//!
//! Triage results stay on stdout via `println!`. Operational telemetry
//! (skipped records, timing, diagnostics) goes to stderr via tracing.

pub mod journal;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable colored output
    Pretty,
    /// Structured JSON lines
    Json,
}

/// Errors from logging initialization.
#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("Failed to parse log filter: {0}")]
    FilterError(String),

    #[error("Failed to set global subscriber: {0}")]
    SetGlobalError(String),
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` env var overrides the provided level when set.
/// All output is directed to **stderr** so stdout remains clean for
/// triage results.
pub fn init(level: Level, format: LogFormat) -> Result<(), LogInitError> {
    let filter = build_env_filter(level)?;
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    let result = match format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(
            tracing_subscriber::registry().with(filter).with(layer),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            tracing_subscriber::registry().with(filter).with(layer.json()),
        ),
    };
    result.map_err(|e| LogInitError::SetGlobalError(e.to_string()))
}

fn build_env_filter(level: Level) -> Result<EnvFilter, LogInitError> {
    // RUST_LOG overrides the CLI-provided level when set
    let filter_str = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    EnvFilter::try_new(&filter_str).map_err(|e| LogInitError::FilterError(e.to_string()))
}
