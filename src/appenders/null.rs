//! Appender that discards everything

use crate::core::{Appender, LogTarget, Result};

/// Backing writer of a disabled logger
///
/// Every operation succeeds without touching any file or stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAppender;

impl NullAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for NullAppender {
    #[inline]
    fn append(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }

    fn target(&self) -> LogTarget {
        LogTarget::Null
    }
}
