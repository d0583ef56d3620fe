//! Console appender implementation

use crate::core::{Appender, LogTarget, LoggerError, Result};
use std::io::{self, Write};

/// Writes lines to the process's standard output
pub struct ConsoleAppender {
    closed: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { closed: false }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        if self.closed {
            return Err(LoggerError::closed(self.name()));
        }
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    // The process owns stdout, closing only detaches this appender from it.
    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.flush()?;
            self.closed = true;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn target(&self) -> LogTarget {
        LogTarget::Stdout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_after_close_fails() {
        let mut appender = ConsoleAppender::new();
        appender.close().unwrap();

        assert!(matches!(
            appender.append("late"),
            Err(LoggerError::WriterClosed(_))
        ));
        assert_eq!(appender.target(), LogTarget::Stdout);
    }
}
