//! Process-wide state shared by every logger
//!
//! A [`LoggerContext`] owns the cached hostname and the [`StartupLogger`].
//! Loggers reference the global context unless one is injected through the
//! builder, which keeps the sharing explicit and lets tests isolate it.

use super::startup::StartupLogger;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Hostname query; called at most once per context
pub type HostnameLookup = Arc<dyn Fn() -> String + Send + Sync>;

/// Name used when the operating system cannot report one
pub const UNKNOWN_HOSTNAME: &str = "unknown";

static GLOBAL: OnceLock<Arc<LoggerContext>> = OnceLock::new();

pub struct LoggerContext {
    hostname: OnceLock<String>,
    lookup: HostnameLookup,
    startup: StartupLogger,
}

impl LoggerContext {
    /// A fresh context that asks the operating system for the hostname
    pub fn new() -> Self {
        Self::with_hostname_lookup(Arc::new(system_hostname))
    }

    pub fn with_hostname_lookup(lookup: HostnameLookup) -> Self {
        Self {
            hostname: OnceLock::new(),
            lookup,
            startup: StartupLogger::new(),
        }
    }

    /// The process-wide context, created on first use
    pub fn global() -> Arc<Self> {
        Arc::clone(global_ref())
    }

    /// Cached hostname; the first caller runs the lookup, others wait for it
    pub fn hostname(&self) -> &str {
        self.hostname.get_or_init(|| (self.lookup)())
    }

    pub fn startup(&self) -> &StartupLogger {
        &self.startup
    }
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerContext")
            .field("hostname", &self.hostname.get())
            .field("startup_entries", &self.startup.len())
            .finish()
    }
}

fn global_ref() -> &'static Arc<LoggerContext> {
    GLOBAL.get_or_init(|| Arc::new(LoggerContext::new()))
}

/// Startup logger of the process-wide context
pub fn startup_logger() -> &'static StartupLogger {
    global_ref().startup()
}

/// Local hostname via the `hostname` crate
pub fn system_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string())
}
