//! Message fragments and exception descriptors
//!
//! Callers describe an error as a value ([`ExceptionInfo`]) carrying a type
//! label, a message and an optional list of frames. The logger formats these
//! uniformly, whatever produced them.

use std::backtrace::Backtrace;
use std::fmt;

/// Type label used when an exception carries none
pub const DEFAULT_EXCEPTION_TYPE: &str = "Exception";

/// Type label for errors raised from a plain message
pub const RUNTIME_ERROR_TYPE: &str = "RuntimeError";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionInfo {
    pub type_name: Option<String>,
    pub message: String,
    pub backtrace: Option<Vec<String>>,
}

impl ExceptionInfo {
    /// An untyped exception without a backtrace
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            type_name: None,
            message: message.into(),
            backtrace: None,
        }
    }

    /// A `RuntimeError` whose backtrace is captured at the call site
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(message)
            .with_type(RUNTIME_ERROR_TYPE)
            .with_captured_backtrace()
    }

    /// Describe a Rust error value
    ///
    /// The type label is the last path segment of the error's type name and
    /// the message is its `Display` output. No backtrace is attached.
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        let full = std::any::type_name::<E>();
        let base = full.split('<').next().unwrap_or(full);
        let short = base.rsplit("::").next().unwrap_or(base);
        Self::new(error.to_string()).with_type(short)
    }

    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn with_backtrace<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backtrace = Some(frames.into_iter().map(Into::into).collect());
        self
    }

    /// Attach the current thread's stack, one frame line per entry
    #[must_use]
    pub fn with_captured_backtrace(self) -> Self {
        let captured = Backtrace::force_capture().to_string();
        let frames: Vec<String> = captured
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        self.with_backtrace(frames)
    }

    pub fn type_label(&self) -> &str {
        self.type_name.as_deref().unwrap_or(DEFAULT_EXCEPTION_TYPE)
    }
}

impl fmt::Display for ExceptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_label(), self.message)
    }
}

/// One fragment of a log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(String),
    Exception(ExceptionInfo),
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::Text(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::Text(s)
    }
}

impl From<&String> for Message {
    fn from(s: &String) -> Self {
        Message::Text(s.clone())
    }
}

impl From<ExceptionInfo> for Message {
    fn from(e: ExceptionInfo) -> Self {
        Message::Exception(e)
    }
}

impl From<&ExceptionInfo> for Message {
    fn from(e: &ExceptionInfo) -> Self {
        Message::Exception(e.clone())
    }
}

/// Arguments of a single level call: one value, an array or a `Vec`
///
/// Each fragment becomes its own line.
pub trait Fragments {
    fn into_fragments(self) -> Vec<Message>;
}

macro_rules! single_fragment {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Fragments for $ty {
                fn into_fragments(self) -> Vec<Message> {
                    vec![self.into()]
                }
            }
        )*
    };
}

single_fragment!(&str, String, &String, ExceptionInfo, &ExceptionInfo);

impl Fragments for Message {
    fn into_fragments(self) -> Vec<Message> {
        vec![self]
    }
}

impl<M: Into<Message>, const N: usize> Fragments for [M; N] {
    fn into_fragments(self) -> Vec<Message> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<M: Into<Message>> Fragments for Vec<M> {
    fn into_fragments(self) -> Vec<Message> {
        self.into_iter().map(Into::into).collect()
    }
}
