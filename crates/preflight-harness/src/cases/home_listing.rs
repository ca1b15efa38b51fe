//! Home-directory listing case

use std::fs;
use std::path::PathBuf;

use crate::case::{RunOutput, TestCase};
use crate::probe::{Clock, SystemClock};
use crate::HarnessResult;

/// Lists the regular files directly under a root directory.
///
/// The precondition is the parity of the current Unix timestamp: the case
/// runs on an odd second and aborts on an even one. That polarity is the
/// contract; both outcomes are equally healthy.
///
/// `run` returns the file names sorted, so the console output is stable for
/// a given directory. Entries whose names do not decode as UTF-8 are
/// skipped. Nothing is created, so `clean_up` has nothing to do.
pub struct FileListingCase {
    id: u32,
    name: String,
    root: PathBuf,
    clock: Box<dyn Clock>,
}

impl FileListingCase {
    /// Create a case listing `root`, gated by the wall clock.
    pub fn new(id: u32, name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        FileListingCase {
            id,
            name: name.into(),
            root: root.into(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock behind the parity gate.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl TestCase for FileListingCase {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn prep(&self) -> bool {
        self.clock.epoch_seconds() % 2 != 0
    }

    fn run(&self) -> HarnessResult<RunOutput> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(RunOutput::Listing(names))
    }

    fn clean_up(&self) -> HarnessResult<()> {
        // Listing leaves no residue.
        Ok(())
    }
}
