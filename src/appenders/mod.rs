//! Appender implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod null;

pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use memory::MemoryAppender;
pub use null::NullAppender;

pub use crate::core::{Appender, LogTarget};
