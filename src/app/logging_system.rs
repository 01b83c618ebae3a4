use super::config::{LogFormat, LogLevel};
use crate::domain::CatalogError;
use std::io;
use std::sync::OnceLock;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the diagnostics filter.
///
/// A non-empty `RUST_LOG` value takes precedence over the configured level.
pub fn build_filter(level: LogLevel, rust_log: Option<&str>) -> Result<EnvFilter, ParseError> {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => Ok(EnvFilter::default().add_directive(tracing::Level::from(level).into())),
    }
}

fn init_subscriber(
    level: LogLevel,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(level, rust_log.as_deref())?;

    // Diagnostics go to stderr; stdout carries the pattern output.
    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

/// Install the global subscriber. Only the first call does any work; later
/// calls report the outcome of the first.
pub fn setup_logging(level: LogLevel, format: LogFormat) -> Result<(), CatalogError> {
    static INIT: OnceLock<Result<(), String>> = OnceLock::new();

    INIT.get_or_init(|| init_subscriber(level, format).map_err(|e| e.to_string()))
        .clone()
        .map_err(CatalogError::Logging)
}
