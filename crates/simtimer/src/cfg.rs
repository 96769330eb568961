//! Fixed defaults for the launcher (internal).
//!
//! Policy
//! - There are no config files and no environment contract. Everything the
//!   binary needs is a constant here; callers wanting a different target
//!   build their own `LaunchSpec` instead.

/// Interpreter resolved through the search path.
pub const DEFAULT_INTERPRETER: &str = "vvp";
/// Compiled simulation artifact handed to the interpreter.
pub const DEFAULT_ARTIFACT: &str = "SMTTTimingFast.out";

/// Ticks per second of `MonotonicClock` (nanosecond resolution).
pub const TICKS_PER_SECOND: u64 = 1_000_000_000;

/// Exit status on a clean run, whatever the child returned.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when the child could not be started (or waited on).
pub const EXIT_FAILURE: i32 = 1;
/// Printed in place of an OS error code when the OS supplied none.
pub(crate) const UNKNOWN_OS_CODE: i32 = -1;

/// Significant digits used when rendering elapsed seconds.
pub(crate) const REPORT_PRECISION: usize = 6;

/// Commit the binary was built from (`GIT_COMMIT` at build time).
pub fn code_rev() -> &'static str {
    match option_env!("GIT_COMMIT") {
        Some(rev) if !rev.is_empty() => rev,
        _ => "unknown",
    }
}
