//! Main logger implementation

use super::{
    appender::{Appender, LogTarget},
    config::LoggerConfig,
    context::LoggerContext,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    message::{ExceptionInfo, Fragments, Message},
    metrics::LoggerMetrics,
};
use crate::appenders::{ConsoleAppender, FileAppender, NullAppender};
use parking_lot::{Mutex, RwLock};
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The bound writer plus what its lines look like
struct Sink {
    appender: Box<dyn Appender>,
    stdout: bool,
}

impl Sink {
    fn new(appender: Box<dyn Appender>) -> Self {
        let stdout = appender.target() == LogTarget::Stdout;
        Self { appender, stdout }
    }
}

/// Leveled logger facade over a single appender
///
/// The appender is picked at construction from a [`LoggerConfig`]:
///
/// 1. an explicit override, used as-is;
/// 2. a [`NullAppender`] when `agent_enabled` is false;
/// 3. stdout when `log_file_path` is `STDOUT`;
/// 4. the file `log_file_path + log_file_name`, or stdout plus one warning
///    line if that file cannot be opened.
///
/// # Example
///
/// ```
/// use agent_logger::prelude::*;
///
/// # fn main() -> agent_logger::Result<()> {
/// let lines = MemoryAppender::new();
/// let logger = LeveledLogger::builder()
///     .config(LoggerConfig::new().with_log_level("warn"))
///     .appender(lines.clone())
///     .build();
///
/// logger.warn("disk almost full")?;
/// logger.info("not written")?;
///
/// assert_eq!(lines.len(), 1);
/// assert!(lines.lines()[0].ends_with("WARN : disk almost full"));
/// # Ok(())
/// # }
/// ```
pub struct LeveledLogger {
    min_level: RwLock<LogLevel>,
    sink: Mutex<Sink>,
    /// Mirrors whether the bound appender's target is anything but `Null`
    enabled: AtomicBool,
    logged_once: Mutex<HashSet<String>>,
    context: Arc<LoggerContext>,
    metrics: LoggerMetrics,
}

impl LeveledLogger {
    /// Build from configuration against the process-wide context
    #[must_use]
    pub fn new(config: &LoggerConfig) -> Self {
        Self::builder().config(config.clone()).build()
    }

    /// Build around a caller-supplied appender, skipping destination resolution
    #[must_use]
    pub fn with_override(config: &LoggerConfig, appender: Box<dyn Appender>) -> Self {
        Self::builder()
            .config(config.clone())
            .boxed_appender(appender)
            .build()
    }

    #[must_use]
    pub fn builder() -> LeveledLoggerBuilder {
        LeveledLoggerBuilder::new()
    }

    /// Log each fragment as its own line at `level`
    ///
    /// Exception fragments write their message at `level` and their
    /// backtrace at `Debug`.
    pub fn log(&self, level: LogLevel, fragments: impl Fragments) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        for message in fragments.into_fragments() {
            self.log_message(level, message)?;
        }
        Ok(())
    }

    fn log_message(&self, level: LogLevel, message: Message) -> Result<()> {
        match message {
            Message::Text(text) => self.write_entries(&[LogEntry::new(level, text)]),
            Message::Exception(exception) => {
                self.log_exception_with_backtrace_level(level, &exception, LogLevel::Debug)
            }
        }
    }

    #[inline]
    pub fn debug(&self, fragments: impl Fragments) -> Result<()> {
        self.log(LogLevel::Debug, fragments)
    }

    #[inline]
    pub fn info(&self, fragments: impl Fragments) -> Result<()> {
        self.log(LogLevel::Info, fragments)
    }

    #[inline]
    pub fn warn(&self, fragments: impl Fragments) -> Result<()> {
        self.log(LogLevel::Warn, fragments)
    }

    #[inline]
    pub fn error(&self, fragments: impl Fragments) -> Result<()> {
        self.log(LogLevel::Error, fragments)
    }

    #[inline]
    pub fn fatal(&self, fragments: impl Fragments) -> Result<()> {
        self.log(LogLevel::Fatal, fragments)
    }

    /// Log an exception with its backtrace at the same level
    pub fn log_exception(&self, level: LogLevel, exception: &ExceptionInfo) -> Result<()> {
        self.log_exception_with_backtrace_level(level, exception, level)
    }

    /// Log `<Type>: <message>` at `level`, then the backtrace block at
    /// `backtrace_level`
    ///
    /// Each line passes the threshold on its own. Both are written under one
    /// lock so they stay adjacent in the output.
    pub fn log_exception_with_backtrace_level(
        &self,
        level: LogLevel,
        exception: &ExceptionInfo,
        backtrace_level: LogLevel,
    ) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.write_entries(&[
            LogEntry::exception(level, exception),
            LogEntry::backtrace(backtrace_level, exception),
        ])
    }

    /// Log only the first time `key` is seen by this logger
    ///
    /// Returns `true` when the call claimed the key. Later calls with the
    /// same key do nothing, whatever their level or message.
    pub fn log_once(
        &self,
        level: LogLevel,
        key: impl Into<String>,
        fragments: impl Fragments,
    ) -> Result<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }
        if !self.logged_once.lock().insert(key.into()) {
            self.metrics.record_once_suppressed();
            return Ok(false);
        }
        self.log(level, fragments)?;
        Ok(true)
    }

    fn write_entries(&self, entries: &[LogEntry]) -> Result<()> {
        let threshold = *self.min_level.read();
        let (passing, filtered): (Vec<&LogEntry>, Vec<&LogEntry>) = entries
            .iter()
            .partition(|entry| entry.level.passes(threshold));

        for _ in &filtered {
            self.metrics.record_filtered();
        }
        if passing.is_empty() {
            return Ok(());
        }

        let hostname = self.context.hostname();
        let mut sink = self.sink.lock();
        let stdout = sink.stdout;
        for entry in passing {
            sink.appender.append(&entry.format(hostname, stdout))?;
            self.metrics.record_written();
        }
        sink.appender.flush()
    }

    /// Whether a call at `level` would write anything
    pub fn enabled_for(&self, level: LogLevel) -> bool {
        self.is_enabled() && level.passes(*self.min_level.read())
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// `false` while the bound appender is a [`NullAppender`]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Destination the current appender writes to
    pub fn target(&self) -> LogTarget {
        self.sink.lock().appender.target()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn context(&self) -> &Arc<LoggerContext> {
        &self.context
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().appender.flush()
    }

    /// Close the appender; later writes return its error
    pub fn close(&self) -> Result<()> {
        self.sink.lock().appender.close()
    }

    /// Bind a new appender, closing the previous one
    ///
    /// The logger is enabled exactly when the new appender is not a
    /// [`NullAppender`]. A logger that goes from disabled to enabled replays
    /// any startup lines still pending. The new appender is in place even
    /// when closing the old one fails.
    pub fn replace_appender(&self, appender: Box<dyn Appender>) -> Result<()> {
        let enabled = appender.target() != LogTarget::Null;
        let (mut previous, was_enabled) = {
            let mut sink = self.sink.lock();
            let was_enabled = self.enabled.swap(enabled, Ordering::AcqRel);
            (std::mem::replace(&mut *sink, Sink::new(appender)), was_enabled)
        };
        let closed = previous.appender.close();
        if enabled && !was_enabled {
            self.replay_startup();
        }
        closed
    }

    fn replay_startup(&self) {
        for (level, message) in self.context.startup().drain() {
            if let Err(e) = self.log_message(level, message) {
                eprintln!("[LOGGER ERROR] Failed to replay startup log: {}", e);
            }
        }
    }
}

impl Drop for LeveledLogger {
    fn drop(&mut self) {
        if let Err(e) = self.sink.get_mut().appender.close() {
            eprintln!("[LOGGER ERROR] Failed to close writer during shutdown: {}", e);
        }
    }
}

/// Pick the appender for `config` when no override was given
///
/// Never fails: an unusable file path degrades to stdout, announced by one
/// warning line written straight to stdout.
fn resolve_destination(
    config: &LoggerConfig,
    context: &LoggerContext,
    metrics: &LoggerMetrics,
) -> Box<dyn Appender> {
    if !config.agent_enabled {
        return Box::new(NullAppender::new());
    }
    if config.wants_stdout() {
        return Box::new(ConsoleAppender::new());
    }

    let path = config.log_file();
    match FileAppender::new(&path) {
        Ok(appender) => Box::new(appender),
        Err(e) => {
            metrics.record_fallback();
            Box::new(fall_back(ConsoleAppender::new(), &path, &e, context))
        }
    }
}

/// The single line announcing that `path` could not be opened
fn fallback_warning(path: &Path, error: &LoggerError) -> LogEntry {
    LogEntry::new(
        LogLevel::Warn,
        format!(
            "Failed creating logger for file {}, using standard out for logging. ({})",
            path.display(),
            error
        ),
    )
}

/// Write the fallback warning to `console` and hand it back as the destination
fn fall_back<A: Appender>(
    mut console: A,
    path: &Path,
    error: &LoggerError,
    context: &LoggerContext,
) -> A {
    let line = fallback_warning(path, error).format(context.hostname(), true);
    if let Err(write_err) = console.append(&line).and_then(|()| console.flush()) {
        eprintln!("[LOGGER ERROR] Failed to report log file fallback: {}", write_err);
    }
    console
}

/// Builder for constructing LeveledLogger with a fluent API
///
/// # Example
/// ```
/// use agent_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = LeveledLogger::builder()
///     .config(LoggerConfig::new().with_log_file_path("STDOUT"))
///     .context(Arc::new(LoggerContext::new()))
///     .build();
///
/// assert_eq!(logger.target(), LogTarget::Stdout);
/// ```
pub struct LeveledLoggerBuilder {
    config: LoggerConfig,
    appender: Option<Box<dyn Appender>>,
    context: Option<Arc<LoggerContext>>,
}

impl LeveledLoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appender: None,
            context: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this appender instead of resolving one from the configuration
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(self, appender: A) -> Self {
        self.boxed_appender(Box::new(appender))
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appender = Some(appender);
        self
    }

    /// Share state with this context instead of the process-wide one
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: Arc<LoggerContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// Build the logger, replaying pending startup lines if it is enabled
    pub fn build(self) -> LeveledLogger {
        let context = self.context.unwrap_or_else(LoggerContext::global);
        let metrics = LoggerMetrics::new();

        let appender = match self.appender {
            Some(appender) => appender,
            None => resolve_destination(&self.config, &context, &metrics),
        };
        let enabled = appender.target() != LogTarget::Null;

        let logger = LeveledLogger {
            min_level: RwLock::new(self.config.level()),
            sink: Mutex::new(Sink::new(appender)),
            enabled: AtomicBool::new(enabled),
            logged_once: Mutex::new(HashSet::new()),
            context,
            metrics,
        };

        if enabled {
            logger.replay_startup();
        }
        logger
    }
}

impl Default for LeveledLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;

    fn memory_logger(level: &str) -> (LeveledLogger, MemoryAppender) {
        let lines = MemoryAppender::new();
        let logger = LeveledLogger::builder()
            .config(LoggerConfig::new().with_log_level(level))
            .appender(lines.clone())
            .context(Arc::new(LoggerContext::new()))
            .build();
        (logger, lines)
    }

    #[test]
    fn test_threshold_from_config() {
        let (logger, _) = memory_logger("debug");
        assert_eq!(logger.level(), LogLevel::Debug);

        let (logger, _) = memory_logger("garbage");
        assert_eq!(logger.level(), LogLevel::Info);
    }

    #[test]
    fn test_set_level_at_runtime() {
        let (logger, lines) = memory_logger("info");
        logger.debug("hidden").unwrap();

        logger.set_level(LogLevel::Debug);
        logger.debug("shown").unwrap();

        assert_eq!(lines.len(), 1);
        assert!(lines.lines()[0].ends_with("DEBUG : shown"));
    }

    #[test]
    fn test_enabled_for() {
        let (logger, _) = memory_logger("warn");
        assert!(logger.enabled_for(LogLevel::Error));
        assert!(logger.enabled_for(LogLevel::Warn));
        assert!(!logger.enabled_for(LogLevel::Info));
    }

    #[test]
    fn test_replace_appender_closes_previous() {
        let (logger, first) = memory_logger("info");
        let second = MemoryAppender::new();

        logger.replace_appender(Box::new(second.clone())).unwrap();
        logger.info("after").unwrap();

        assert!(first.is_closed());
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_drop_closes_appender() {
        let (logger, lines) = memory_logger("info");
        drop(logger);
        assert!(lines.is_closed());
    }

    #[test]
    fn test_writes_after_close_propagate() {
        let (logger, _) = memory_logger("info");
        logger.close().unwrap();

        assert!(logger.info("late").is_err());
        // filtered calls never reach the writer
        assert!(logger.debug("late").is_ok());
    }

    #[test]
    fn test_metrics_track_gate() {
        let (logger, _) = memory_logger("info");
        logger.info("one").unwrap();
        logger.debug("two").unwrap();
        logger.log_once(LogLevel::Info, "k", "three").unwrap();
        logger.log_once(LogLevel::Info, "k", "three").unwrap();

        assert_eq!(logger.metrics().lines_written(), 2);
        assert_eq!(logger.metrics().lines_filtered(), 1);
        assert_eq!(logger.metrics().once_suppressed(), 1);
    }

    fn disabled_logger(context: Arc<LoggerContext>) -> LeveledLogger {
        LeveledLogger::builder()
            .config(LoggerConfig::new().with_agent_enabled(false))
            .context(context)
            .build()
    }

    #[test]
    fn test_replacing_null_appender_enables_logger() {
        let logger = disabled_logger(Arc::new(LoggerContext::new()));
        assert!(!logger.is_enabled());

        let lines = MemoryAppender::new();
        logger.replace_appender(Box::new(lines.clone())).unwrap();
        logger.warn("after replace").unwrap();

        assert!(logger.is_enabled());
        assert!(logger.enabled_for(LogLevel::Fatal));
        assert_eq!(lines.len(), 1);
        assert!(lines.lines()[0].ends_with("WARN : after replace"));
    }

    #[test]
    fn test_replacing_with_null_appender_disables_logger() {
        let (logger, lines) = memory_logger("info");
        logger.replace_appender(Box::new(NullAppender::new())).unwrap();

        assert_eq!(logger.target(), LogTarget::Null);
        assert!(!logger.is_enabled());
        assert!(!logger.enabled_for(LogLevel::Fatal));
        assert!(!logger.log_once(LogLevel::Error, "k", "dropped").unwrap());
        logger.error("dropped").unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_enabling_by_replace_replays_pending_startup() {
        let context = Arc::new(LoggerContext::new());
        context.startup().info("buffered before config");

        let logger = disabled_logger(Arc::clone(&context));
        assert_eq!(context.startup().len(), 1);

        let lines = MemoryAppender::new();
        logger.replace_appender(Box::new(lines.clone())).unwrap();
        assert!(context.startup().is_empty());
        assert!(lines.lines()[0].ends_with("INFO : buffered before config"));

        // already enabled, nothing left to replay
        context.startup().info("late");
        logger.replace_appender(Box::new(MemoryAppender::new())).unwrap();
        assert_eq!(context.startup().len(), 1);
    }

    #[test]
    fn test_fallback_warning_text() {
        let path = Path::new("/var/agent/log/agent.log");
        let error = LoggerError::closed("file");
        let entry = fallback_warning(path, &error);

        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(
            entry.message,
            "Failed creating logger for file /var/agent/log/agent.log, \
             using standard out for logging. (Writer 'file' is closed)"
        );
    }

    #[test]
    fn test_fall_back_writes_one_stdout_warning() {
        let context = LoggerContext::with_hostname_lookup(Arc::new(|| "box".to_string()));
        let lines = MemoryAppender::new();
        let error = LoggerError::io_operation(
            "creating log directory",
            "denied",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );

        let console = fall_back(lines.clone(), Path::new("/x/agent.log"), &error, &context);

        let logged = lines.lines();
        assert_eq!(logged.len(), 1);
        assert!(logged[0].starts_with("** [Agent]["));
        assert!(logged[0].contains(" box ("));
        assert!(logged[0].contains(
            "WARN : Failed creating logger for file /x/agent.log, using standard out for logging. (IO error while creating log directory: denied)"
        ));
        assert!(!console.is_closed());
    }
}
