//! Logger metrics for observability
//!
//! Counters for what a logger wrote, what its threshold filtered out, and
//! how often log-once suppression and destination fallback kicked in.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use agent_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.lines_filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the appender
    lines_written: AtomicU64,

    /// Lines rejected by the severity threshold
    lines_filtered: AtomicU64,

    /// `log_once` calls skipped because their key was already used
    once_suppressed: AtomicU64,

    /// Times the configured file could not be opened and stdout was used
    fallback_events: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            lines_filtered: AtomicU64::new(0),
            once_suppressed: AtomicU64::new(0),
            fallback_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_filtered(&self) -> u64 {
        self.lines_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn once_suppressed(&self) -> u64 {
        self.once_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fallback_events(&self) -> u64 {
        self.fallback_events.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.lines_filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_once_suppressed(&self) -> u64 {
        self.once_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_fallback(&self) -> u64 {
        self.fallback_events.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            lines_filtered: AtomicU64::new(self.lines_filtered()),
            once_suppressed: AtomicU64::new(self.once_suppressed()),
            fallback_events: AtomicU64::new(self.fallback_events()),
        }
    }
}
