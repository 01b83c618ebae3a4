//! Chain of Responsibility: a logging dispatcher.
//!
//! A `LoggerChain` is a singly linked list of `LogHandler`s. Every request is
//! offered to every handler, head to tail. A handler whose threshold admits the
//! request's severity writes one line to its sink; the request then moves on
//! whether or not the handler acted.

pub mod chain;
pub mod error;
pub mod handler;

pub use chain::{Dispatch, Iter, LoggerChain, LoggerChainBuilder};
pub use error::{ChainError, SinkFailure};
pub use handler::{HandlerSpec, LogHandler, STANDARD_CHAIN};
