pub mod config;
pub mod demo;
pub mod logging_system;

pub use config::{Config, ConfigError, Demo, LogFormat, LogLevel};
pub use logging_system::setup_logging;

use crate::behavioral::responsibility::LoggerChain;
use crate::domain::CatalogError;
use crate::sink::{LineSink, StdoutSink};
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct App {
    config: Config,
    sink: Arc<dyn LineSink>,
    chain: LoggerChain,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args(args)?;
        Ok(Self::from_config(config))
    }

    /// An app printing to stdout.
    pub fn from_config(config: Config) -> Self {
        Self::with_sink(config, StdoutSink::shared())
    }

    /// An app writing every pattern's output to `sink`.
    pub fn with_sink(config: Config, sink: Arc<dyn LineSink>) -> Self {
        let chain = LoggerChain::from_specs(&config.chain, Arc::clone(&sink));
        Self {
            config,
            sink,
            chain,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn chain(&self) -> &LoggerChain {
        &self.chain
    }

    /// Run the selected demos. A failing demo does not stop the ones after
    /// it; the first failure is returned at the end.
    pub fn run(&self) -> Result<(), CatalogError> {
        let selected = self.config.demo;
        let mut failures: Vec<CatalogError> = Vec::new();

        if selected.includes(Demo::Chain) {
            info!(handlers = self.chain.len(), "Running chain of responsibility demo");
            let result = match self.config.request() {
                Some(request) => demo::run_chain(&self.chain, &[request]),
                None => demo::run_chain(&self.chain, &demo::CHAIN_REQUESTS),
            };
            if let Err(e) = result {
                failures.push(e.into());
            }
        }

        if selected.includes(Demo::Factory) {
            info!("Running factory demo");
            if let Err(e) = demo::run_factory(self.sink.as_ref()) {
                failures.push(e.into());
            }
        }

        if selected.includes(Demo::Adapter) {
            info!("Running adapter demo");
            if let Err(e) = demo::run_adapter(Arc::clone(&self.sink)) {
                failures.push(e.into());
            }
        }

        let mut failures = failures.into_iter();
        match failures.next() {
            None => Ok(()),
            Some(first) => {
                for other in failures {
                    warn!(error = %other, "Demo failed");
                }
                Err(first)
            }
        }
    }
}

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Main entry point for the application
pub fn main() -> anyhow::Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        // --help, --version and usage errors are rendered by clap
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };

    setup_logging(config.log_level, config.log_format)?;

    info!("Starting pattern-catalog v{}", get_version());
    info!(
        "Configuration: demo={:?}, chain_len={}, config_file={:?}",
        config.demo,
        config.chain.len(),
        config.config_file
    );

    let app = App::from_config(config);
    if let Err(e) = app.run() {
        error!("Application error: {}", e);
        process::exit(1);
    }

    Ok(())
}
