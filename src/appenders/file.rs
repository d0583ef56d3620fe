//! File appender implementation

use crate::core::{Appender, LogTarget, LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileAppender {
    /// Open `path` for appending, creating it and its parent directory
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                LoggerError::io_operation(
                    "creating log directory",
                    format!("cannot create '{}'", dir.display()),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::closed("file"))?;

        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }

    fn target(&self) -> LogTarget {
        LogTarget::File(self.path.clone())
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
