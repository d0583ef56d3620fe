//! Appender trait for log output destinations

use super::error::Result;
use std::path::PathBuf;

/// Destination an appender is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    File(PathBuf),
    Null,
    /// Caller-supplied appender, identified by its name
    Custom(String),
}

/// Line-oriented writer owned by exactly one logger
pub trait Appender: Send {
    /// Append one formatted line (without trailing newline)
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    /// Release the destination; later appends fail
    fn close(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    fn target(&self) -> LogTarget {
        LogTarget::Custom(self.name().to_string())
    }
}
