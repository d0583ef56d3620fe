//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod context;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod startup;

pub use appender::{Appender, LogTarget};
pub use config::{LoggerConfig, STDOUT_SENTINEL};
pub use context::{startup_logger, system_hostname, HostnameLookup, LoggerContext};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{LeveledLogger, LeveledLoggerBuilder};
pub use message::{ExceptionInfo, Fragments, Message};
pub use metrics::LoggerMetrics;
pub use startup::StartupLogger;
