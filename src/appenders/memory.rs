//! In-memory appender
//!
//! Keeps every line in a shared list. Clones share the same list, so a caller
//! can hand one clone to a logger and read the lines back through another.

use crate::core::{Appender, LoggerError, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
    closed: Arc<AtomicBool>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        if self.is_closed() {
            return Err(LoggerError::closed(self.name()));
        }
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed.store(true, Ordering::Release);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
