use crate::behavioral::responsibility::{HandlerSpec, STANDARD_CHAIN};
use crate::domain::{PatternError, Severity};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

/// Level of the catalogue's own diagnostics (not the chain's severities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Output format of diagnostics on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Which pattern demonstrations to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demo {
    #[default]
    All,
    Chain,
    Factory,
    Adapter,
}

impl Demo {
    pub fn includes(self, other: Demo) -> bool {
        self == Demo::All || self == other
    }
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Pattern demonstration to run
    #[arg(long, env = "PATTERN_DEMO", default_value = "all", ignore_case = true)]
    pub demo: Demo,

    /// Diagnostic log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", ignore_case = true)]
    pub log_level: LogLevel,

    /// Diagnostic log format
    #[arg(long, env = "LOG_FORMAT", default_value = "text", ignore_case = true)]
    pub log_format: LogFormat,

    /// Configuration file path (optional)
    #[arg(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Severity of a single request to send through the chain instead of the
    /// demo requests (info, debug, error or 1 to 3)
    #[arg(long, value_parser = parse_severity, requires = "message")]
    pub severity: Option<Severity>,

    /// Message of the single chain request
    #[arg(long, requires = "severity")]
    pub message: Option<String>,

    /// Chain layout, head first (config file only)
    #[arg(skip = STANDARD_CHAIN.to_vec())]
    pub chain: Vec<HandlerSpec>,
}

fn parse_severity(value: &str) -> Result<Severity, PatternError> {
    value.parse()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: Demo::All,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Text,
            config_file: None,
            severity: None,
            message: None,
            chain: STANDARD_CHAIN.to_vec(),
        }
    }
}

impl Config {
    /// Parse CLI arguments (and their environment fallbacks), then layer the
    /// config file underneath if one was named.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;

        let config = match config.config_file.clone() {
            Some(path) => config.merge_file(&path)?,
            None => config,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// File values form the base; CLI values that differ from the defaults win.
    fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let mut merged = Config::from_file(path)?;

        if self.demo != defaults.demo {
            merged.demo = self.demo;
        }
        if self.log_level != defaults.log_level {
            merged.log_level = self.log_level;
        }
        if self.log_format != defaults.log_format {
            merged.log_format = self.log_format;
        }
        if self.severity.is_some() {
            merged.severity = self.severity;
            merged.message = self.message;
        }
        merged.config_file = Some(path.to_path_buf());

        Ok(merged)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.severity.is_some() != self.message.is_some() {
            return Err(ConfigError::InvalidConfig(
                "severity and message must be given together".to_string(),
            ));
        }

        if self.severity.is_some() && !self.demo.includes(Demo::Chain) {
            return Err(ConfigError::InvalidConfig(format!(
                "A chain request cannot be sent when running the {:?} demo",
                self.demo
            )));
        }

        Ok(())
    }

    /// The single chain request, if one was configured.
    pub fn request(&self) -> Option<(Severity, &str)> {
        match (self.severity, self.message.as_deref()) {
            (Some(severity), Some(message)) => Some((severity, message)),
            _ => None,
        }
    }
}
