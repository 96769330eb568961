//! Timed launcher: bracket one child process between two clock reads.
//!
//! Purpose
//! - Read the clock, spawn the target, block until it exits (no timeout),
//!   read the clock again and report the difference in seconds.
//! - A spawn failure is fatal and immediate: one line on the error stream,
//!   exit status 1, no timing report, no retry.
//!
//! Lifecycle
//! - `Idle → Spawning → (Failed | Running) → Waited → Reporting → Done`.
//!   `Failed` is also reached from `Running` when the wait itself errors.
//! - The child handle is owned by `run` and dropped on every path after a
//!   successful spawn; a failed spawn never produces one.
//!
//! Code cross-refs: `platform::{Platform, StdPlatform}`, `report::{elapsed_line, failure_line}`.

mod run;
mod types;

pub use run::TimedLauncher;
pub use types::{Measurement, Phase};
