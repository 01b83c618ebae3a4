use super::error::{ChainError, SinkFailure};
use super::handler::{HandlerSpec, LogHandler, STANDARD_CHAIN};
use crate::domain::{LoggerKind, Severity};
use crate::sink::LineSink;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Outcome of offering one request to a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub severity: Severity,
    /// Handlers visited. Always the chain length.
    pub visited: usize,
    /// Handlers whose threshold admitted the request.
    pub admitted: usize,
    /// Kinds of the handlers that wrote successfully, head to tail.
    pub written: Vec<LoggerKind>,
}

impl Dispatch {
    fn new(severity: Severity) -> Self {
        Self {
            severity,
            visited: 0,
            admitted: 0,
            written: Vec::new(),
        }
    }
}

/// An immutable chain of log handlers.
///
/// The chain owns its nodes. Once built it is never mutated, so a shared
/// reference can be used from several threads without locking.
pub struct LoggerChain {
    head: Option<Box<LogHandler>>,
    len: usize,
}

impl LoggerChain {
    /// A chain with no handlers. Requests to it write nothing.
    pub fn empty() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn builder(sink: Arc<dyn LineSink>) -> LoggerChainBuilder {
        LoggerChainBuilder::new(sink)
    }

    /// Link `handlers` in the given order, first element at the head.
    pub fn from_handlers<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = LogHandler>,
    {
        let handlers: Vec<LogHandler> = handlers.into_iter().collect();
        let len = handlers.len();

        let mut head: Option<Box<LogHandler>> = None;
        for mut handler in handlers.into_iter().rev() {
            handler.next = head.take();
            head = Some(Box::new(handler));
        }

        Self { head, len }
    }

    /// Build one handler per spec, all writing to `sink`.
    pub fn from_specs(specs: &[HandlerSpec], sink: Arc<dyn LineSink>) -> Self {
        Self::from_handlers(
            specs
                .iter()
                .map(|spec| LogHandler::from_spec(*spec, Arc::clone(&sink))),
        )
    }

    /// The three-handler demo chain (see [`STANDARD_CHAIN`]).
    pub fn standard(sink: Arc<dyn LineSink>) -> Self {
        Self::from_specs(&STANDARD_CHAIN, sink)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&LogHandler> {
        self.head.as_deref()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn specs(&self) -> Vec<HandlerSpec> {
        self.iter().map(LogHandler::spec).collect()
    }

    /// Offer a request to every handler, head to tail.
    ///
    /// Each handler whose threshold is at or below `severity` writes
    /// `"<Kind>::Logger: <message>"`. Traversal never stops early: a failed
    /// write is recorded and the walk carries on, and the failures are
    /// returned together once the tail has been visited.
    pub fn handle(&self, severity: Severity, message: &str) -> Result<Dispatch, ChainError> {
        let mut dispatch = Dispatch::new(severity);
        let mut failures = Vec::new();

        for (position, handler) in self.iter().enumerate() {
            dispatch.visited += 1;

            if !handler.handles(severity) {
                trace!(
                    position,
                    kind = %handler.kind(),
                    threshold = %handler.threshold(),
                    %severity,
                    "Handler passed request on"
                );
                continue;
            }

            dispatch.admitted += 1;
            match handler.write(message) {
                Ok(()) => {
                    debug!(
                        position,
                        kind = %handler.kind(),
                        threshold = %handler.threshold(),
                        %severity,
                        "Handler wrote request"
                    );
                    dispatch.written.push(handler.kind());
                }
                Err(source) => {
                    warn!(
                        position,
                        kind = %handler.kind(),
                        error = %source,
                        "Handler sink unavailable"
                    );
                    failures.push(SinkFailure {
                        position,
                        kind: handler.kind(),
                        source,
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(dispatch)
        } else {
            Err(ChainError::SinkWrite { failures, dispatch })
        }
    }
}

impl Default for LoggerChain {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for LoggerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Unlink iteratively so long chains cannot overflow the stack on drop.
impl Drop for LoggerChain {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<'a> IntoIterator for &'a LoggerChain {
    type Item = &'a LogHandler;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over a chain's handlers.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a LogHandler>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a LogHandler;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}

/// Assembles handlers into a [`LoggerChain`].
///
/// Handlers added with [`handler`](Self::handler) share the builder's default
/// sink; [`handler_with_sink`](Self::handler_with_sink) binds a specific one.
pub struct LoggerChainBuilder {
    sink: Arc<dyn LineSink>,
    handlers: Vec<LogHandler>,
}

impl LoggerChainBuilder {
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self {
            sink,
            handlers: Vec::new(),
        }
    }

    pub fn handler(mut self, kind: LoggerKind, threshold: Severity) -> Self {
        let sink = Arc::clone(&self.sink);
        self.handlers.push(LogHandler::new(kind, threshold, sink));
        self
    }

    pub fn handler_with_sink(
        mut self,
        kind: LoggerKind,
        threshold: Severity,
        sink: Arc<dyn LineSink>,
    ) -> Self {
        self.handlers.push(LogHandler::new(kind, threshold, sink));
        self
    }

    pub fn specs(mut self, specs: &[HandlerSpec]) -> Self {
        for spec in specs {
            self = self.handler(spec.kind, spec.threshold);
        }
        self
    }

    pub fn build(self) -> LoggerChain {
        LoggerChain::from_handlers(self.handlers)
    }
}

impl fmt::Debug for LoggerChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerChainBuilder")
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, MockLineSink};
    use std::io;

    fn standard_with_memory() -> (LoggerChain, MemorySink) {
        let sink = MemorySink::new();
        let chain = LoggerChain::standard(Arc::new(sink.clone()));
        (chain, sink)
    }

    #[test]
    fn test_empty_chain_writes_nothing() {
        let chain = LoggerChain::empty();
        let dispatch = chain.handle(Severity::Error, "nobody listens").unwrap();

        assert!(chain.is_empty());
        assert_eq!(dispatch.visited, 0);
        assert_eq!(dispatch.admitted, 0);
        assert!(dispatch.written.is_empty());
    }

    #[test]
    fn test_from_handlers_keeps_order() {
        let (chain, _) = standard_with_memory();

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.specs(), STANDARD_CHAIN.to_vec());
        assert_eq!(chain.head().map(LogHandler::kind), Some(LoggerKind::Debug));
    }

    #[test]
    fn test_info_request_reaches_only_first_handler() {
        let (chain, sink) = standard_with_memory();
        let dispatch = chain
            .handle(Severity::Info, "This is an info information.")
            .unwrap();

        assert_eq!(dispatch.visited, 3);
        assert_eq!(dispatch.written, vec![LoggerKind::Debug]);
        assert_eq!(
            sink.lines(),
            vec!["Debug::Logger: This is an info information."]
        );
    }

    #[test]
    fn test_duplicate_thresholds_fire_independently() {
        let sink = MemorySink::new();
        let chain = LoggerChain::builder(Arc::new(sink.clone()))
            .handler(LoggerKind::Error, Severity::Debug)
            .handler(LoggerKind::Error, Severity::Debug)
            .build();

        chain.handle(Severity::Debug, "twice").unwrap();

        assert_eq!(
            sink.lines(),
            vec!["Error::Logger: twice", "Error::Logger: twice"]
        );
    }

    #[test]
    fn test_failed_write_does_not_stop_traversal() {
        let mut broken = MockLineSink::new();
        broken
            .expect_write_line()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed")));

        let healthy = MemorySink::new();
        let chain = LoggerChain::builder(Arc::new(healthy.clone()))
            .handler_with_sink(LoggerKind::Debug, Severity::Info, Arc::new(broken))
            .handler(LoggerKind::Info, Severity::Debug)
            .handler(LoggerKind::Error, Severity::Error)
            .build();

        let err = chain.handle(Severity::Error, "still flowing").unwrap_err();

        assert_eq!(err.failures().len(), 1);
        assert_eq!(err.failures()[0].position, 0);
        assert_eq!(err.failures()[0].kind, LoggerKind::Debug);
        assert_eq!(err.dispatch().visited, 3);
        assert_eq!(err.dispatch().admitted, 3);
        assert_eq!(
            err.dispatch().written,
            vec![LoggerKind::Info, LoggerKind::Error]
        );
        assert_eq!(
            healthy.lines(),
            vec!["Info::Logger: still flowing", "Error::Logger: still flowing"]
        );
        assert!(err.to_string().contains("1 of 3"));
    }

    #[test]
    fn test_skipped_handler_never_touches_sink() {
        let mut silent = MockLineSink::new();
        silent.expect_write_line().times(0);

        let chain = LoggerChain::from_handlers([LogHandler::new(
            LoggerKind::Error,
            Severity::Error,
            Arc::new(silent),
        )]);

        let dispatch = chain.handle(Severity::Info, "below threshold").unwrap();
        assert_eq!(dispatch.visited, 1);
        assert_eq!(dispatch.admitted, 0);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let sink: Arc<dyn LineSink> = Arc::new(MemorySink::new());
        let chain = LoggerChain::from_handlers(
            (0..200_000).map(|_| LogHandler::new(LoggerKind::Info, Severity::Error, Arc::clone(&sink))),
        );
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }
}
