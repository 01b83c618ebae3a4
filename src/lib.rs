#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. ChainError in chain module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

pub mod app;
pub mod behavioral;
pub mod creational;
pub mod domain;
pub mod sink;
pub mod structural;

// Re-export main types for easy access
pub use app::{App, Config};
pub use behavioral::responsibility::{Dispatch, LogHandler, LoggerChain, LoggerChainBuilder};
pub use domain::{CatalogError, LoggerKind, PatternError, Severity};
pub use sink::{LineSink, MemorySink, StdoutSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
