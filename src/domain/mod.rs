//! Domain layer for pattern-catalog.
//!
//! Contains the canonical types shared across all patterns:
//! - `Severity`: Ordered log request severity (Info < Debug < Error)
//! - `LoggerKind`: The concrete handler variety that labels chain output
//! - `CatalogError` / `PatternError`: Error types

pub mod error;
pub mod logger_kind;
pub mod severity;

pub use error::{CatalogError, PatternError};
pub use logger_kind::LoggerKind;
pub use severity::Severity;
