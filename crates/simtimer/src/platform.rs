//! Capability interface over the OS: clock reads, spawn, blocking wait.
//!
//! `StdPlatform` is the only production implementation; tests substitute
//! their own to observe ordering without starting real processes.

use std::process::{Child, ExitStatus};

use crate::clock::{ClockSample, MonotonicClock};
use crate::error::LaunchError;
use crate::launch_spec::LaunchSpec;

/// How the child ended. Recorded for logs only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChildExit {
    /// `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl ChildExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

pub trait Platform {
    /// Exclusively owned reference to a running child. Dropping it releases
    /// every OS resource tied to the child.
    type Handle;

    fn start_clock(&self) -> ClockSample;
    fn spawn(&self, spec: &LaunchSpec) -> Result<Self::Handle, LaunchError>;
    /// Blocks until the child terminates. No timeout.
    fn wait(&self, handle: &mut Self::Handle) -> Result<ChildExit, LaunchError>;
    fn stop_clock(&self) -> ClockSample;
}

/// Owns a spawned `std::process::Child`.
#[derive(Debug)]
pub struct ChildHandle {
    child: Child,
    command: String,
}

impl ChildHandle {
    pub fn id(&self) -> u32 {
        self.child.id()
    }
}

/// `std::process` + `MonotonicClock`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdPlatform {
    clock: MonotonicClock,
}

impl StdPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Platform for StdPlatform {
    type Handle = ChildHandle;

    fn start_clock(&self) -> ClockSample {
        self.clock.now()
    }

    fn spawn(&self, spec: &LaunchSpec) -> Result<ChildHandle, LaunchError> {
        let command = spec.to_string();
        // On error no Child exists, so there is nothing to release.
        let child = spec
            .to_command()
            .spawn()
            .map_err(|e| LaunchError::spawn(command.as_str(), e))?;
        tracing::debug!(pid = child.id(), command, "spawned");
        Ok(ChildHandle { child, command })
    }

    fn wait(&self, handle: &mut ChildHandle) -> Result<ChildExit, LaunchError> {
        handle
            .child
            .wait()
            .map(ChildExit::from)
            .map_err(|e| LaunchError::wait(handle.command.as_str(), e))
    }

    fn stop_clock(&self) -> ClockSample {
        self.clock.now()
    }
}
