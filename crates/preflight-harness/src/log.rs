//! Run log - the explicit logging handle shared by every case
//!
//! There is deliberately no global logger here. The handle is constructed
//! once at process start, handed to each case's `execute`, and closed when
//! it drops at exit. Each event becomes one `LEVEL timestamp - message`
//! line in an append-mode file, so successive runs accumulate.

use chrono::Local;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::HarnessResult;

/// Name of the log file placed in the working directory.
pub const LOG_FILE_NAME: &str = "logfile.log";

/// Timestamp layout for one event line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Severity of a single log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// Append-only log handle backing a whole run.
pub struct RunLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl RunLog {
    /// Open (appending) [`LOG_FILE_NAME`] inside `dir`.
    pub fn open_in(dir: &Path) -> HarnessResult<Self> {
        Self::open_at(dir.join(LOG_FILE_NAME))
    }

    /// Open (appending) the log file at an explicit path.
    pub fn open_at(path: PathBuf) -> HarnessResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(RunLog {
            path,
            file: Mutex::new(file),
        })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a DEBUG event.
    pub fn debug(&self, message: impl AsRef<str>) -> HarnessResult<()> {
        self.write(Level::Debug, message.as_ref())
    }

    /// Record an INFO event.
    pub fn info(&self, message: impl AsRef<str>) -> HarnessResult<()> {
        self.write(Level::Info, message.as_ref())
    }

    /// Record an ERROR event.
    pub fn error(&self, message: impl AsRef<str>) -> HarnessResult<()> {
        self.write(Level::Error, message.as_ref())
    }

    /// Format one event line and push it to the file. Write failures
    /// propagate; nothing here retries or swallows.
    fn write(&self, level: Level, message: &str) -> HarnessResult<()> {
        let line = format!(
            "{} {} - {}\n",
            level,
            Local::now().format(TIMESTAMP_FORMAT),
            message
        );
        let mut file = self.file.lock().expect("run log lock poisoned");
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
