use crate::domain::{LoggerKind, Severity};
use crate::sink::LineSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::sync::Arc;

/// Declarative description of one chain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerSpec {
    pub kind: LoggerKind,
    pub threshold: Severity,
}

impl HandlerSpec {
    pub const fn new(kind: LoggerKind, threshold: Severity) -> Self {
        Self { kind, threshold }
    }
}

/// The demo chain: a Debug-kind handler at `Info`, an Info-kind handler at
/// `Debug` and an Error-kind handler at `Error`.
///
/// The first two pair each kind with the other's level. Demo output depends
/// on this pairing.
pub const STANDARD_CHAIN: [HandlerSpec; 3] = [
    HandlerSpec::new(LoggerKind::Debug, Severity::Info),
    HandlerSpec::new(LoggerKind::Info, Severity::Debug),
    HandlerSpec::new(LoggerKind::Error, Severity::Error),
];

/// One link of a [`LoggerChain`](super::LoggerChain).
pub struct LogHandler {
    kind: LoggerKind,
    threshold: Severity,
    sink: Arc<dyn LineSink>,
    pub(super) next: Option<Box<LogHandler>>,
}

impl LogHandler {
    pub fn new(kind: LoggerKind, threshold: Severity, sink: Arc<dyn LineSink>) -> Self {
        Self {
            kind,
            threshold,
            sink,
            next: None,
        }
    }

    pub fn from_spec(spec: HandlerSpec, sink: Arc<dyn LineSink>) -> Self {
        Self::new(spec.kind, spec.threshold, sink)
    }

    pub fn kind(&self) -> LoggerKind {
        self.kind
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn spec(&self) -> HandlerSpec {
        HandlerSpec::new(self.kind, self.threshold)
    }

    pub fn next(&self) -> Option<&LogHandler> {
        self.next.as_deref()
    }

    /// Whether this handler writes requests of the given severity.
    #[inline]
    pub fn handles(&self, severity: Severity) -> bool {
        self.threshold.admits(severity)
    }

    /// Write `message` to this handler's sink, prefixed with the kind label.
    pub fn write(&self, message: &str) -> io::Result<()> {
        self.sink.write_line(&self.kind.format_line(message))
    }
}

impl fmt::Debug for LogHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogHandler")
            .field("kind", &self.kind)
            .field("threshold", &self.threshold)
            .field("has_next", &self.next.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_handles_uses_threshold_not_kind() {
        let sink = MemorySink::new();
        let handler = LogHandler::new(LoggerKind::Info, Severity::Debug, Arc::new(sink));

        assert!(!handler.handles(Severity::Info));
        assert!(handler.handles(Severity::Debug));
        assert!(handler.handles(Severity::Error));
    }

    #[test]
    fn test_write_prefixes_kind_label() {
        let sink = MemorySink::new();
        let handler = LogHandler::new(LoggerKind::Error, Severity::Error, Arc::new(sink.clone()));

        handler.write("disk full").unwrap();

        assert_eq!(sink.lines(), vec!["Error::Logger: disk full"]);
    }

    #[test]
    fn test_standard_chain_pairing() {
        assert_eq!(STANDARD_CHAIN[0].kind, LoggerKind::Debug);
        assert_eq!(STANDARD_CHAIN[0].threshold, Severity::Info);
        assert_eq!(STANDARD_CHAIN[1].kind, LoggerKind::Info);
        assert_eq!(STANDARD_CHAIN[1].threshold, Severity::Debug);
        assert_eq!(STANDARD_CHAIN[2].kind, LoggerKind::Error);
        assert_eq!(STANDARD_CHAIN[2].threshold, Severity::Error);
    }

    #[test]
    fn test_debug_output_omits_sink() {
        let handler = LogHandler::new(
            LoggerKind::Debug,
            Severity::Info,
            Arc::new(MemorySink::new()),
        );
        let rendered = format!("{handler:?}");
        assert!(rendered.contains("Debug"));
        assert!(rendered.contains("has_next: false"));
    }
}
