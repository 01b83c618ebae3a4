use super::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log request.
///
/// The order is fixed by the numeric assignment `Info = 1 < Debug = 2 < Error = 3`.
/// Note that this differs from the usual `Debug < Info` ordering of most logging
/// frameworks; it is the order the chain filters on.
///
/// Text forms (CLI, config file) go through [`FromStr`]: the level name in any
/// case, or its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[repr(u8)]
pub enum Severity {
    Info = 1,
    Debug = 2,
    Error = 3,
}

impl Severity {
    /// Every severity, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Debug, Severity::Error];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Error => "error",
        }
    }

    /// Whether a handler with threshold `self` admits a request of `requested` severity.
    #[inline]
    pub fn admits(self, requested: Severity) -> bool {
        self <= requested
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, PatternError> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "error" => Ok(Severity::Error),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(|value| Severity::try_from(value).ok())
                .ok_or_else(|| PatternError::UnknownSeverity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, PatternError> {
        value.parse()
    }
}

impl TryFrom<u8> for Severity {
    type Error = PatternError;

    fn try_from(value: u8) -> Result<Self, PatternError> {
        match value {
            1 => Ok(Severity::Info),
            2 => Ok(Severity::Debug),
            3 => Ok(Severity::Error),
            other => Err(PatternError::UnknownSeverity(other.to_string())),
        }
    }
}
