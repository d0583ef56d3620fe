//! # Agent Logger
//!
//! A leveled logger facade for agents embedded in a host process.
//!
//! ## Features
//!
//! - **Configuration-driven destination**: file, stdout sentinel, or a no-op
//!   sink when the agent is disabled
//! - **Graceful fallback**: an unwritable log file degrades to stdout
//! - **Exception formatting**: type, message and optional backtrace
//! - **Log-once**: per-key deduplication of repeated warnings
//! - **Startup buffering**: messages logged before configuration is known
//!   are replayed into the first real logger

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, NullAppender};
    pub use crate::core::{
        startup_logger, Appender, ExceptionInfo, Fragments, HostnameLookup, LeveledLogger,
        LeveledLoggerBuilder, LogEntry, LogLevel, LogTarget, LoggerConfig, LoggerContext,
        LoggerError, LoggerMetrics, Message, Result, StartupLogger,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, NullAppender};
pub use crate::core::{
    startup_logger, Appender, ExceptionInfo, Fragments, HostnameLookup, LeveledLogger,
    LeveledLoggerBuilder, LogEntry, LogLevel, LogTarget, LoggerConfig, LoggerContext, LoggerError,
    LoggerMetrics, Message, Result, StartupLogger, STDOUT_SENTINEL,
};
