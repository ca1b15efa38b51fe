//! Environment probes backing the precondition gates
//!
//! The gates read the machine through small seam traits so tests can pin the
//! clock parity or the memory size instead of hoping the host cooperates.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{HarnessError, HarnessResult};

/// Source of the current Unix time, in whole seconds.
pub trait Clock {
    fn epoch_seconds(&self) -> u64;
}

/// Wall clock. A system clock set before the epoch degrades to zero.
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_seconds(&self) -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs(),
            Err(_) => 0,
        }
    }
}

/// Clock pinned to one instant; lets a test pick the parity it needs.
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn epoch_seconds(&self) -> u64 {
        self.0
    }
}

/// Source of the machine's total physical memory, in bytes.
pub trait MemoryProbe {
    fn total_bytes(&self) -> u64;
}

/// Probe backed by `sysinfo`, refreshing memory data only.
pub struct SystemMemory;

impl MemoryProbe for SystemMemory {
    fn total_bytes(&self) -> u64 {
        let mut system = sysinfo::System::new();
        system.refresh_memory();
        system.total_memory()
    }
}

/// Probe reporting a fixed total; for exercising the gate's threshold.
pub struct FixedMemory(pub u64);

impl MemoryProbe for FixedMemory {
    fn total_bytes(&self) -> u64 {
        self.0
    }
}

/// Resolve the current user's home directory.
pub fn home_dir() -> HarnessResult<PathBuf> {
    dirs::home_dir().ok_or(HarnessError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z; anything earlier means the probe is broken,
        // not the host.
        assert!(SystemClock.epoch_seconds() > 1_577_836_800);
    }

    #[test]
    fn test_system_memory_reports_something() {
        assert!(SystemMemory.total_bytes() > 0);
    }

    #[test]
    fn test_fixed_probes_echo_their_value() {
        assert_eq!(FixedClock(42).epoch_seconds(), 42);
        assert_eq!(FixedMemory(1024).total_bytes(), 1024);
    }
}
