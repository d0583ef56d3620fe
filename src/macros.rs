//! Logging macros for ergonomic log message formatting.
//!
//! Each macro formats its arguments like `format!` and forwards the result
//! to the matching [`LeveledLogger`](crate::LeveledLogger) method, returning
//! its `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use agent_logger::prelude::*;
//! use agent_logger::info;
//!
//! # fn main() -> agent_logger::Result<()> {
//! let lines = MemoryAppender::new();
//! let logger = LeveledLogger::builder().appender(lines.clone()).build();
//!
//! let port = 8080;
//! info!(logger, "Agent reporting on port {}", port)?;
//!
//! assert!(lines.lines()[0].ends_with("INFO : Agent reporting on port 8080"));
//! # Ok(())
//! # }
//! ```

/// Log a formatted message at an explicit level.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
