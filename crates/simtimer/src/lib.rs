//! Wall-clock timing of an external simulation run.
//!
//! One child process per launch: read a monotonic clock, spawn the target,
//! wait for it without a timeout, read the clock again, report the seconds.
//!
//! Layout
//! - `clock`: tick samples and the monotonic clock.
//! - `launch_spec`: executable + argument list (default `vvp SMTTTimingFast.out`).
//! - `platform`: capability trait over spawn/wait/clock and its std backend.
//! - `launcher`: the timed launcher and its lifecycle.
//! - `report`: exact output lines and the structured run record.

pub mod cfg;
pub mod clock;
pub mod error;
pub mod launch_spec;
pub mod launcher;
pub mod platform;
pub mod report;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::LaunchError;
pub use launch_spec::LaunchSpec;
pub use launcher::{Measurement, Phase, TimedLauncher};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clock::{ClockSample, MonotonicClock};
    pub use crate::error::LaunchError;
    pub use crate::launch_spec::LaunchSpec;
    pub use crate::launcher::{Measurement, Phase, TimedLauncher};
    pub use crate::platform::{ChildExit, ChildHandle, Platform, StdPlatform};
}
