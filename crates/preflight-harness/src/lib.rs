//! Preflight - a minimal test-case lifecycle harness
//!
//! A preflight test case is four stages behind one contract:
//! - `prep` evaluates an environment precondition and gates everything else
//! - `run` performs the case's observable action
//! - `clean_up` restores the machine to its pre-test state
//! - `execute` drives the stages in order and logs each transition
//!
//! Two stock cases ship with the harness: [`FileListingCase`] lists the
//! regular files in the user's home directory, and [`RandomFileCase`] writes
//! and then removes a megabyte of random bytes.
//!
//! # Example
//!
//! ```no_run
//! use preflight_harness::{probe, run_sequence, FileListingCase, RandomFileCase, RunLog, TestCase};
//!
//! fn main() -> Result<(), preflight_harness::HarnessError> {
//!     let cwd = std::env::current_dir()?;
//!     let log = RunLog::open_in(&cwd)?;
//!     let cases: Vec<Box<dyn TestCase>> = vec![
//!         Box::new(FileListingCase::new(1, "home-listing", probe::home_dir()?)),
//!         Box::new(RandomFileCase::new(2, "random-file", cwd)),
//!     ];
//!     run_sequence(&cases, &log)?;
//!     Ok(())
//! }
//! ```

/// Harness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod case;
pub mod cases;
pub mod log;
pub mod probe;
pub mod runner;

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the harness
#[derive(Debug, Error)]
pub enum HarnessError {
    /// I/O error (directory listing, artifact writes, log writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The current user's home directory could not be resolved
    #[error("home directory not found")]
    HomeNotFound,

    /// Cleanup expected an artifact on disk and it was not there
    #[error("expected artifact missing during cleanup: {0}")]
    MissingArtifact(PathBuf),
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

// Re-export commonly used types
pub use case::{RunOutput, TestCase, Verdict};
pub use cases::{FileListingCase, RandomFileCase};
pub use log::{Level, RunLog, LOG_FILE_NAME};
pub use probe::{Clock, FixedClock, FixedMemory, MemoryProbe, SystemClock, SystemMemory};
pub use runner::{run_sequence, RunSummary};
