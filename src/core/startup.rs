//! Memory-only logger for messages emitted before the real logger exists
//!
//! The startup logger has no threshold and no destination. Everything it
//! receives waits, in order, until the first enabled [`LeveledLogger`] is
//! built; that logger drains the buffer and replays it through its own
//! level gate.
//!
//! [`LeveledLogger`]: crate::core::LeveledLogger

use super::log_level::LogLevel;
use super::message::{ExceptionInfo, Fragments, Message};
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct StartupLogger {
    entries: Mutex<Vec<(LogLevel, Message)>>,
}

impl StartupLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, level: LogLevel, fragments: impl Fragments) {
        let mut entries = self.entries.lock();
        for message in fragments.into_fragments() {
            entries.push((level, message));
        }
    }

    #[inline]
    pub fn debug(&self, fragments: impl Fragments) {
        self.log(LogLevel::Debug, fragments);
    }

    #[inline]
    pub fn info(&self, fragments: impl Fragments) {
        self.log(LogLevel::Info, fragments);
    }

    #[inline]
    pub fn warn(&self, fragments: impl Fragments) {
        self.log(LogLevel::Warn, fragments);
    }

    #[inline]
    pub fn error(&self, fragments: impl Fragments) {
        self.log(LogLevel::Error, fragments);
    }

    #[inline]
    pub fn fatal(&self, fragments: impl Fragments) {
        self.log(LogLevel::Fatal, fragments);
    }

    pub fn log_exception(&self, level: LogLevel, exception: &ExceptionInfo) {
        self.log(level, exception);
    }

    /// Take every buffered entry, oldest first, leaving the buffer empty
    pub fn drain(&self) -> Vec<(LogLevel, Message)> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_every_level_in_order() {
        let startup = StartupLogger::new();
        startup.fatal("boo!");
        startup.error("boo!");
        startup.warn("boo!");
        startup.info("boo!");
        startup.debug("boo!");

        let levels: Vec<LogLevel> = startup.drain().into_iter().map(|(level, _)| level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    fn test_drain_consumes_once() {
        let startup = StartupLogger::new();
        startup.warn(["one", "two"]);

        assert_eq!(startup.len(), 2);
        assert_eq!(startup.drain().len(), 2);
        assert!(startup.is_empty());
        assert!(startup.drain().is_empty());
    }
}
