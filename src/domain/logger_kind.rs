use super::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The concrete variety of a chain handler.
///
/// A kind only decides the label a handler prefixes its output with. The
/// threshold a handler filters on is chosen independently when the chain is
/// built, so a `Debug` handler may well carry an `Info` threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LoggerKind {
    Debug,
    Info,
    Error,
}

impl LoggerKind {
    pub fn label(self) -> &'static str {
        match self {
            LoggerKind::Debug => "Debug",
            LoggerKind::Info => "Info",
            LoggerKind::Error => "Error",
        }
    }

    /// Render a message the way a handler of this kind writes it.
    pub fn format_line(self, message: &str) -> String {
        format!("{}::Logger: {}", self.label(), message)
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LoggerKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, PatternError> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LoggerKind::Debug),
            "info" => Ok(LoggerKind::Info),
            "error" => Ok(LoggerKind::Error),
            _ => Err(PatternError::UnknownLoggerKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for LoggerKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, PatternError> {
        value.parse()
    }
}
