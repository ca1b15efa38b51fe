//! Test lifecycle contract - the four-stage capability every case implements

use std::path::PathBuf;
use std::time::Instant;

use crate::log::RunLog;
use crate::HarnessResult;

/// What a case's action produced.
///
/// The two stock actions are unrelated (one gathers names, one leaves a file
/// on disk), so the contract funnels them through one enum and lets
/// [`TestCase::execute`] decide what each variant means for the console and
/// the run log.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutput {
    /// The action produced nothing that needs reporting.
    Quiet,
    /// Entry names gathered by the action; printed to stdout, one per line.
    Listing(Vec<String>),
    /// Path of a file the action left on disk.
    Created(PathBuf),
}

/// Terminal state of one executed case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The precondition held and every stage ran to completion.
    Executed,
    /// The precondition failed; the action and cleanup never ran.
    Aborted,
}

impl Verdict {
    /// Check if the case ran to completion
    pub fn is_executed(&self) -> bool {
        matches!(self, Verdict::Executed)
    }

    /// Check if the case was stopped at the precondition gate
    pub fn is_aborted(&self) -> bool {
        matches!(self, Verdict::Aborted)
    }
}

/// A single test case: identity plus the four lifecycle stages.
///
/// Implementors supply `prep`, `run` and `clean_up`; the provided `execute`
/// is the one place the stage ordering lives, so every conforming case gets
/// the same guarantees: `prep` runs first, `run` is never called after a
/// failed `prep`, and `clean_up` only follows a completed `run`.
pub trait TestCase {
    /// Numeric identity, carried into every log line.
    fn id(&self) -> u32;

    /// Human-readable name, carried into every log line.
    fn name(&self) -> &str;

    /// Evaluate the environment precondition. Must be free of side effects;
    /// returning `false` aborts the case before anything observable happens.
    fn prep(&self) -> bool;

    /// Perform the case's primary action. Only invoked after `prep` held.
    fn run(&self) -> HarnessResult<RunOutput>;

    /// Undo whatever `run` left behind, or do nothing if the action leaves
    /// no residue. Errors if an artifact it expected to remove is already
    /// gone.
    fn clean_up(&self) -> HarnessResult<()>;

    /// Drive the stages in order, logging each transition to `log`.
    ///
    /// A failed precondition is not an error: the case is reported as
    /// [`Verdict::Aborted`] and the caller moves on. Errors out of `run` or
    /// `clean_up` are fatal and propagate immediately; no stage after the
    /// failing one is attempted.
    fn execute(&self, log: &RunLog) -> HarnessResult<Verdict> {
        let started = Instant::now();
        log.debug(format!(
            "test {} `{}`: checking precondition",
            self.id(),
            self.name()
        ))?;

        if !self.prep() {
            log.error(format!(
                "test {} `{}`: precondition not met, execution aborted",
                self.id(),
                self.name()
            ))?;
            return Ok(Verdict::Aborted);
        }
        log.info(format!(
            "test {} `{}`: precondition held, running",
            self.id(),
            self.name()
        ))?;

        match self.run()? {
            RunOutput::Quiet => {}
            RunOutput::Listing(names) => {
                for name in &names {
                    println!("{}", name);
                }
                log.info(format!(
                    "test {} `{}`: listed {} entries to the console",
                    self.id(),
                    self.name(),
                    names.len()
                ))?;
            }
            RunOutput::Created(path) => {
                log.info(format!(
                    "test {} `{}`: created {}",
                    self.id(),
                    self.name(),
                    path.display()
                ))?;
            }
        }

        self.clean_up()?;
        log.info(format!(
            "test {} `{}` completed successfully in {:.2?}",
            self.id(),
            self.name(),
            started.elapsed()
        ))?;
        Ok(Verdict::Executed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HarnessError;
    use std::cell::RefCell;
    use std::fs;
    use std::io;
    use tempfile::tempdir;

    /// Conforming case that records which stages were reached.
    struct ScriptedCase {
        gate: bool,
        fail_run: bool,
        output: RunOutput,
        calls: RefCell<Vec<&'static str>>,
    }

    impl ScriptedCase {
        fn new(gate: bool) -> Self {
            ScriptedCase {
                gate,
                fail_run: false,
                output: RunOutput::Quiet,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn with_output(mut self, output: RunOutput) -> Self {
            self.output = output;
            self
        }

        fn failing_run(mut self) -> Self {
            self.fail_run = true;
            self
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl TestCase for ScriptedCase {
        fn id(&self) -> u32 {
            7
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn prep(&self) -> bool {
            self.calls.borrow_mut().push("prep");
            self.gate
        }

        fn run(&self) -> HarnessResult<RunOutput> {
            self.calls.borrow_mut().push("run");
            if self.fail_run {
                return Err(HarnessError::Io(io::Error::new(
                    io::ErrorKind::Other,
                    "scripted action failure",
                )));
            }
            Ok(self.output.clone())
        }

        fn clean_up(&self) -> HarnessResult<()> {
            self.calls.borrow_mut().push("clean_up");
            Ok(())
        }
    }

    fn log_in_tempdir() -> (tempfile::TempDir, RunLog) {
        let dir = tempdir().unwrap();
        let log = RunLog::open_in(dir.path()).unwrap();
        (dir, log)
    }

    #[test]
    fn test_execute_runs_stages_in_order() {
        let (_dir, log) = log_in_tempdir();
        let case = ScriptedCase::new(true);

        let verdict = case.execute(&log).unwrap();

        assert!(verdict.is_executed());
        assert_eq!(case.calls(), vec!["prep", "run", "clean_up"]);
    }

    #[test]
    fn test_execute_skips_run_and_cleanup_on_failed_prep() {
        let (_dir, log) = log_in_tempdir();
        let case = ScriptedCase::new(false);

        let verdict = case.execute(&log).unwrap();

        assert!(verdict.is_aborted());
        assert_eq!(case.calls(), vec!["prep"]);

        let logged = fs::read_to_string(log.path()).unwrap();
        assert!(logged.contains("precondition not met, execution aborted"));
        assert!(!logged.contains("completed successfully"));
    }

    #[test]
    fn test_execute_propagates_run_failure_without_cleanup() {
        let (_dir, log) = log_in_tempdir();
        let case = ScriptedCase::new(true).failing_run();

        let result = case.execute(&log);

        assert!(matches!(result, Err(HarnessError::Io(_))));
        assert_eq!(case.calls(), vec!["prep", "run"]);
    }

    #[test]
    fn test_execute_logs_listing_size() {
        let (_dir, log) = log_in_tempdir();
        let names = vec!["alpha.txt".to_string(), "beta.txt".to_string()];
        let case = ScriptedCase::new(true).with_output(RunOutput::Listing(names));

        case.execute(&log).unwrap();

        let logged = fs::read_to_string(log.path()).unwrap();
        assert!(logged.contains("listed 2 entries to the console"));
        assert!(logged.contains("completed successfully"));
    }

    #[test]
    fn test_execute_logs_created_path() {
        let (_dir, log) = log_in_tempdir();
        let case =
            ScriptedCase::new(true).with_output(RunOutput::Created(PathBuf::from("/tmp/artifact")));

        case.execute(&log).unwrap();

        let logged = fs::read_to_string(log.path()).unwrap();
        assert!(logged.contains("created /tmp/artifact"));
    }

    #[test]
    fn test_verdict_predicates() {
        assert!(Verdict::Executed.is_executed());
        assert!(!Verdict::Executed.is_aborted());
        assert!(Verdict::Aborted.is_aborted());
        assert!(!Verdict::Aborted.is_executed());
    }
}
