//! Random-artifact case

use rand::Rng;
use std::fs;
use std::path::PathBuf;

use crate::case::{RunOutput, TestCase};
use crate::probe::{MemoryProbe, SystemMemory};
use crate::{HarnessError, HarnessResult};

/// Name of the artifact `run` writes into the working directory.
pub const ARTIFACT_NAME: &str = "test";

/// Exact size of the artifact: 1 MiB of random bytes.
pub const ARTIFACT_SIZE: usize = 1024 * 1024;

/// Smallest total memory the gate accepts, inclusive: 1 GiB.
const MIN_TOTAL_MEMORY: u64 = 1024 * 1024 * 1024;

/// Writes a 1 MiB random file and removes it again during cleanup.
///
/// The precondition requires at least 1 GiB of total physical memory;
/// exactly 1 GiB passes. `clean_up` insists the artifact is still there -
/// if something else removed it mid-run, that is a
/// [`HarnessError::MissingArtifact`] and the whole run stops.
pub struct RandomFileCase {
    id: u32,
    name: String,
    dir: PathBuf,
    memory: Box<dyn MemoryProbe>,
}

impl RandomFileCase {
    /// Create a case writing its artifact into `dir`, gated by the
    /// machine's real memory size.
    pub fn new(id: u32, name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        RandomFileCase {
            id,
            name: name.into(),
            dir: dir.into(),
            memory: Box::new(SystemMemory),
        }
    }

    /// Replace the memory probe behind the gate.
    pub fn with_memory(mut self, memory: Box<dyn MemoryProbe>) -> Self {
        self.memory = memory;
        self
    }

    /// Where the artifact lives while the case is mid-flight.
    pub fn artifact_path(&self) -> PathBuf {
        self.dir.join(ARTIFACT_NAME)
    }
}

impl TestCase for RandomFileCase {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn prep(&self) -> bool {
        self.memory.total_bytes() >= MIN_TOTAL_MEMORY
    }

    fn run(&self) -> HarnessResult<RunOutput> {
        let path = self.artifact_path();
        let mut rng = rand::rng();
        let mut bytes = vec![0u8; ARTIFACT_SIZE];
        rng.fill_bytes(&mut bytes);
        fs::write(&path, &bytes)?;
        Ok(RunOutput::Created(path))
    }

    fn clean_up(&self) -> HarnessResult<()> {
        let path = self.artifact_path();
        if !path.exists() {
            return Err(HarnessError::MissingArtifact(path));
        }
        fs::remove_file(&path)?;
        Ok(())
    }
}
