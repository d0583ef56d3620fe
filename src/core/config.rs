//! Resolved configuration view consumed by the logger
//!
//! Loading the configuration is the host's job. The logger only needs the
//! four settings below, which can be deserialized from any serde format.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `log_file_path` value that routes output to standard output
pub const STDOUT_SENTINEL: &str = "STDOUT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory prefix of the log file, or `STDOUT`
    pub log_file_path: String,
    pub log_file_name: String,
    /// Raw level name; resolved leniently by [`LoggerConfig::level`]
    pub log_level: String,
    pub agent_enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file_path: "log/".to_string(),
            log_file_name: "agent.log".to_string(),
            log_level: "info".to_string(),
            agent_enabled: true,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_file_path(mut self, path: impl Into<String>) -> Self {
        self.log_file_path = path.into();
        self
    }

    #[must_use]
    pub fn with_log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    #[must_use]
    pub fn with_agent_enabled(mut self, enabled: bool) -> Self {
        self.agent_enabled = enabled;
        self
    }

    /// Threshold for the logger, `Info` when unset or unrecognized
    pub fn level(&self) -> LogLevel {
        LogLevel::from_config(&self.log_level)
    }

    /// Whether `log_file_path` is the literal `STDOUT` sentinel (case-sensitive)
    pub fn wants_stdout(&self) -> bool {
        self.log_file_path == STDOUT_SENTINEL
    }

    /// Absolute path of `log_file_path + log_file_name`
    ///
    /// The two settings are joined as strings, so the path is expected to
    /// carry its own trailing separator. Relative results are anchored at the
    /// current directory; if that cannot be read the joined path is returned
    /// as-is and the open attempt decides.
    pub fn log_file(&self) -> PathBuf {
        let joined = PathBuf::from(format!("{}{}", self.log_file_path, self.log_file_name));
        std::path::absolute(&joined).unwrap_or(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert!(config.agent_enabled);
        assert_eq!(config.level(), LogLevel::Info);
        assert!(!config.wants_stdout());
    }

    #[test]
    fn test_stdout_sentinel_is_case_sensitive() {
        assert!(LoggerConfig::new().with_log_file_path("STDOUT").wants_stdout());
        assert!(!LoggerConfig::new().with_log_file_path("stdout").wants_stdout());
    }

    #[test]
    fn test_log_file_is_absolute_join() {
        let config = LoggerConfig::new()
            .with_log_file_path("log/")
            .with_log_file_name("testlog.log");
        let path = config.log_file();

        assert!(path.is_absolute());
        assert!(path.ends_with("log/testlog.log"));
    }

    #[test]
    fn test_deserialize_partial_view() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"log_level": "debug", "agent_enabled": false}"#).unwrap();

        assert_eq!(config.level(), LogLevel::Debug);
        assert!(!config.agent_enabled);
        assert_eq!(config.log_file_name, "agent.log");
    }
}
