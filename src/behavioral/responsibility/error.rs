use super::Dispatch;
use crate::domain::LoggerKind;
use std::io;
use thiserror::Error;

/// A handler whose sink refused its line.
#[derive(Debug)]
pub struct SinkFailure {
    /// Zero-based position of the handler in the chain.
    pub position: usize,
    pub kind: LoggerKind,
    pub source: io::Error,
}

#[derive(Error, Debug)]
pub enum ChainError {
    /// One or more sink writes failed. Every other handler was still visited;
    /// `dispatch` records what did get written.
    #[error(
        "{} of {} handler writes failed for {} request (first: {} handler at position {}: {})",
        .failures.len(),
        .dispatch.admitted,
        .dispatch.severity,
        .failures[0].kind,
        .failures[0].position,
        .failures[0].source
    )]
    SinkWrite {
        failures: Vec<SinkFailure>,
        dispatch: Dispatch,
    },
}

impl ChainError {
    pub fn failures(&self) -> &[SinkFailure] {
        match self {
            ChainError::SinkWrite { failures, .. } => failures,
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        match self {
            ChainError::SinkWrite { dispatch, .. } => dispatch,
        }
    }
}
