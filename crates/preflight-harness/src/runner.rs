//! Sequential case execution

use crate::case::{TestCase, Verdict};
use crate::log::RunLog;
use crate::HarnessResult;

/// Tally of a finished sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Cases whose precondition held and whose stages all completed
    pub executed: usize,
    /// Cases turned away at the precondition gate
    pub aborted: usize,
}

impl RunSummary {
    /// Number of cases the sequence visited
    pub fn total(&self) -> usize {
        self.executed + self.aborted
    }
}

/// Execute every case in order, stopping at the first hard failure.
///
/// An aborted precondition is not a failure; the sequence carries on with
/// the next case. A stage error is fatal and surfaces immediately, leaving
/// the remaining cases untouched.
pub fn run_sequence(cases: &[Box<dyn TestCase>], log: &RunLog) -> HarnessResult<RunSummary> {
    let mut summary = RunSummary::default();

    for case in cases {
        match case.execute(log)? {
            Verdict::Executed => summary.executed += 1,
            Verdict::Aborted => summary.aborted += 1,
        }
    }

    log.info(format!(
        "run finished: {} executed, {} aborted",
        summary.executed, summary.aborted
    ))?;
    Ok(summary)
}
