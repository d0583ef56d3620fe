//! Error types for the agent logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Write attempted after the writer was closed
    #[error("Writer '{0}' is closed")]
    WriterClosed(String),

    /// Unrecognized severity name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn closed<S: Into<String>>(name: S) -> Self {
        LoggerError::WriterClosed(name.into())
    }
}
