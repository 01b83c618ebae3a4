//! Line sinks
//!
//! Every pattern in the catalogue reports its effect as whole lines of text.
//! `LineSink` is the seam those lines go through, so the same code can print to
//! stdout in the binary and be captured in tests.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// Destination for one line of pattern output.
#[cfg_attr(test, automock)]
pub trait LineSink: Send + Sync {
    /// Write `line` followed by a newline.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes lines to the process stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> Arc<dyn LineSink> {
        Arc::new(Self)
    }
}

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// Captures lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Remove and return every captured line.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        clone.write_line("shared").unwrap();

        assert_eq!(sink.lines(), vec!["shared"]);
        assert_eq!(sink.take(), vec!["shared"]);
        assert!(clone.is_empty());
    }

    #[test]
    fn test_memory_sink_concurrent_writes() {
        let sink = MemorySink::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for j in 0..50 {
                        sink.write_line(&format!("{i}-{j}")).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 400);
    }

    #[test]
    fn test_mock_sink_can_fail() {
        let mut mock = MockLineSink::new();
        mock.expect_write_line()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));

        let err = mock.write_line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
