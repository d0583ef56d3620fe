//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    /// All levels, most urgent first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Resolve a configured level name, falling back to `Info`
    ///
    /// Matching is case-insensitive. Empty or unrecognized names never fail,
    /// they resolve to the default level.
    ///
    /// # Example
    ///
    /// ```
    /// use agent_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_config("fatal"), LogLevel::Fatal);
    /// assert_eq!(LogLevel::from_config("ERROR"), LogLevel::Error);
    /// assert_eq!(LogLevel::from_config(""), LogLevel::Info);
    /// assert_eq!(LogLevel::from_config("bogus"), LogLevel::Info);
    /// ```
    #[must_use]
    pub fn from_config(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }

    /// Whether a call at `self` passes a logger whose threshold is `threshold`
    #[inline]
    pub fn passes(&self, threshold: LogLevel) -> bool {
        *self >= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
