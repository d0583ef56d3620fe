//! Log entry structure and line format

use super::log_level::LogLevel;
use super::message::ExceptionInfo;
use chrono::{DateTime, Local};

/// strftime layout of the timestamp in each line header
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %H:%M:%S %z";

/// Marker placed in front of lines written to standard output
pub const STDOUT_PREFIX: &str = "** [Agent]";

pub const BACKTRACE_HEADER: &str = "Debugging backtrace:";
pub const NO_BACKTRACE: &str = "No backtrace available.";

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// `<Type>: <message>` line for an exception
    pub fn exception(level: LogLevel, exception: &ExceptionInfo) -> Self {
        Self::new(level, exception.to_string())
    }

    /// Backtrace block, frames one per line in their original order
    pub fn backtrace(level: LogLevel, exception: &ExceptionInfo) -> Self {
        match exception.backtrace.as_deref() {
            Some(frames) => {
                let mut message = String::from(BACKTRACE_HEADER);
                for frame in frames {
                    message.push('\n');
                    message.push_str(frame);
                }
                Self::new(level, message)
            }
            None => Self::new(level, NO_BACKTRACE),
        }
    }

    /// Render the full line: `[<time> <host> (<pid>)] <LEVEL> : <message>`
    pub fn format(&self, hostname: &str, stdout: bool) -> String {
        format!(
            "{}[{} {} ({})] {} : {}",
            if stdout { STDOUT_PREFIX } else { "" },
            self.timestamp.format(TIMESTAMP_FORMAT),
            hostname,
            std::process::id(),
            self.level.to_str(),
            self.message
        )
    }
}
