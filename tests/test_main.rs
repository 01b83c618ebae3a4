use pattern_catalog::app::{App, Config, Demo, get_version};
use pattern_catalog::behavioral::responsibility::HandlerSpec;
use pattern_catalog::{CatalogError, LineSink, LoggerKind, MemorySink, Severity};
use serial_test::serial;
use std::io;
use std::sync::Arc;

fn run_with_memory(config: Config) -> Vec<String> {
    let sink = MemorySink::new();
    App::with_sink(config, Arc::new(sink.clone())).run().unwrap();
    sink.lines()
}

#[test]
fn test_full_demo_output() {
    let lines = run_with_memory(Config::default());

    assert_eq!(
        lines,
        vec![
            "Debug::Logger: This is an info information.",
            "Debug::Logger: This is a debug information.",
            "Info::Logger: This is a debug information.",
            "Debug::Logger: This is an error information.",
            "Info::Logger: This is an error information.",
            "Error::Logger: This is an error information.",
            "Circle::draw() method.",
            "Rectangle::draw() method.",
            "Square::draw() method.",
            "Playing mp3 file. Name: beyond the horizon.mp3",
            "Playing mp4 file. Name: alone.mp4",
            "Playing vlc file. Name: far far away.vlc",
        ]
    );
}

#[test]
fn test_single_request_through_custom_chain() {
    let config = Config {
        demo: Demo::Chain,
        severity: Some(Severity::Debug),
        message: Some("custom".to_string()),
        chain: vec![
            HandlerSpec::new(LoggerKind::Error, Severity::Info),
            HandlerSpec::new(LoggerKind::Debug, Severity::Error),
            HandlerSpec::new(LoggerKind::Info, Severity::Debug),
        ],
        ..Config::default()
    };

    assert_eq!(
        run_with_memory(config),
        vec!["Error::Logger: custom", "Info::Logger: custom"]
    );
}

#[test]
fn test_empty_chain_demo_prints_nothing() {
    let config = Config {
        demo: Demo::Chain,
        chain: Vec::new(),
        ..Config::default()
    };

    assert!(run_with_memory(config).is_empty());
}

#[test]
fn test_closed_stdout_fails_run() {
    struct ClosedSink;

    impl LineSink for ClosedSink {
        fn write_line(&self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    let config = Config {
        demo: Demo::Factory,
        ..Config::default()
    };
    let err = App::with_sink(config, Arc::new(ClosedSink)).run().unwrap_err();
    assert!(matches!(err, CatalogError::Output(_)));

    let config = Config {
        demo: Demo::Chain,
        ..Config::default()
    };
    let err = App::with_sink(config, Arc::new(ClosedSink)).run().unwrap_err();
    assert!(matches!(err, CatalogError::Chain(_)));
}

#[test]
#[serial]
fn test_app_from_args() {
    let app = App::from_args(["pattern-catalog", "--demo", "factory"]).unwrap();
    assert_eq!(app.config().demo, Demo::Factory);
    assert_eq!(app.chain().len(), 3);
}

#[test]
fn test_version() {
    assert_eq!(get_version(), pattern_catalog::VERSION);
}

/// Refuses every line from the Debug-kind handler and records the rest.
struct NoDebugLoggerSink {
    kept: MemorySink,
}

impl LineSink for NoDebugLoggerSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        if line.starts_with("Debug::Logger:") {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        self.kept.write_line(line)
    }
}

#[test]
fn test_failed_chain_writes_do_not_stop_later_demos() {
    let kept = MemorySink::new();
    let app = App::with_sink(
        Config::default(),
        Arc::new(NoDebugLoggerSink { kept: kept.clone() }),
    );

    let err = app.run().unwrap_err();

    assert!(matches!(err, CatalogError::Chain(_)));
    assert_eq!(
        kept.lines(),
        vec![
            "Info::Logger: This is a debug information.",
            "Info::Logger: This is an error information.",
            "Error::Logger: This is an error information.",
            "Circle::draw() method.",
            "Rectangle::draw() method.",
            "Square::draw() method.",
            "Playing mp3 file. Name: beyond the horizon.mp3",
            "Playing mp4 file. Name: alone.mp4",
            "Playing vlc file. Name: far far away.vlc",
        ]
    );
}
