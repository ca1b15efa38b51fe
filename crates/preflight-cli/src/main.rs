use anyhow::{Context, Result};
use preflight_harness::{probe, run_sequence, FileListingCase, RandomFileCase, RunLog, TestCase};
use std::env;

/// Preflight check runner.
///
/// Runs the stock cases in order against the current working directory:
/// the home-listing case prints the files in the home directory, the
/// random-file case writes and removes a 1 MiB scratch artifact. Every
/// stage is recorded in `logfile.log` next to where the binary was
/// invoked.
fn main() -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let log = RunLog::open_in(&cwd).context("Failed to open run log")?;
    let home = probe::home_dir().context("Failed to locate home directory")?;

    let cases: Vec<Box<dyn TestCase>> = vec![
        Box::new(FileListingCase::new(1, "home-listing", home)),
        Box::new(RandomFileCase::new(2, "random-file", cwd)),
    ];

    run_sequence(&cases, &log).context("Preflight run failed")?;
    Ok(())
}
