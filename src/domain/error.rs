use crate::app::ConfigError;
use crate::behavioral::responsibility::ChainError;
use thiserror::Error;

/// Errors raised when text does not name a member of one of the closed sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unknown severity: {0} (expected info, debug or error)")]
    UnknownSeverity(String),

    #[error("Unknown logger kind: {0} (expected debug, info or error)")]
    UnknownLoggerKind(String),

    #[error("Unknown shape: {0} (expected circle, rectangle or square)")]
    UnknownShape(String),

    #[error("Unsupported media format: {0}")]
    UnknownMediaFormat(String),
}

/// Top-level error type for the catalogue.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}
