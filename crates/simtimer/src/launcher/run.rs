use std::io::{self, Write};

use super::types::{Measurement, Phase};
use crate::cfg::EXIT_FAILURE;
use crate::clock::ClockSample;
use crate::error::LaunchError;
use crate::launch_spec::LaunchSpec;
use crate::platform::Platform;
use crate::report::{elapsed_line, failure_line, RunRecord};

/// Runs one child per call on top of a `Platform`.
///
/// Runs share nothing: the phase log is reset at the start of each call.
#[derive(Debug)]
pub struct TimedLauncher<P: Platform> {
    platform: P,
    phases: Vec<Phase>,
}

impl<P: Platform> TimedLauncher<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            phases: vec![Phase::Idle],
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phases.last().copied().unwrap_or(Phase::Idle)
    }

    /// Every phase visited by the latest run, starting at `Idle`.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    fn enter(&mut self, next: Phase) {
        tracing::debug!(from = ?self.phase(), to = ?next, "phase");
        self.phases.push(next);
    }

    /// Spawn, wait and time `spec`. Stops at `Waited` on success.
    ///
    /// Post: the clock pair brackets the full child lifetime; the child
    /// handle has been released when this returns.
    pub fn run(&mut self, spec: &LaunchSpec) -> Result<Measurement, LaunchError> {
        self.phases.clear();
        self.phases.push(Phase::Idle);

        let start = self.platform.start_clock();
        self.enter(Phase::Spawning);
        let mut handle = match self.platform.spawn(spec) {
            Ok(h) => h,
            Err(e) => {
                tracing::debug!(command = %spec, code = e.os_code(), "spawn failed");
                self.enter(Phase::Failed);
                return Err(e);
            }
        };
        self.enter(Phase::Running);

        let waited = self.platform.wait(&mut handle);
        let end = self.platform.stop_clock();
        drop(handle);

        let child_exit = match waited {
            Ok(exit) => exit,
            Err(e) => {
                tracing::debug!(command = %spec, code = e.os_code(), "wait failed");
                self.enter(Phase::Failed);
                return Err(e);
            }
        };
        self.enter(Phase::Waited);
        tracing::debug!(code = ?child_exit.code, success = child_exit.success(), "child exited");

        Ok(Measurement {
            command: spec.clone(),
            elapsed_seconds: ClockSample::elapsed_seconds(start, end),
            child_exit,
        })
    }

    /// Full contract: run `spec`, write exactly one line to `out` on success
    /// or to `err` on failure, and return the process exit status.
    pub fn run_report<O, E>(&mut self, spec: &LaunchSpec, out: &mut O, err: &mut E) -> io::Result<i32>
    where
        O: Write,
        E: Write,
    {
        match self.run(spec) {
            Ok(m) => {
                self.enter(Phase::Reporting);
                writeln!(out, "{}", elapsed_line(m.elapsed_seconds))?;
                out.flush()?;
                match serde_json::to_string(&RunRecord::from(&m)) {
                    Ok(record) => tracing::debug!(record, "run"),
                    Err(e) => tracing::warn!(error = %e, "run record not serializable"),
                }
                self.enter(Phase::Done);
            }
            Err(e) => {
                writeln!(err, "{}", failure_line(&e))?;
                err.flush()?;
            }
        }
        Ok(self.phase().exit_code().unwrap_or(EXIT_FAILURE))
    }
}
