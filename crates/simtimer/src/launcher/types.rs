use crate::cfg::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::launch_spec::LaunchSpec;
use crate::platform::ChildExit;

/// Where a launcher is in its (linear) lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spawning,
    Failed,
    Running,
    Waited,
    Reporting,
    Done,
}

impl Phase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Failed | Phase::Done)
    }

    /// Process exit status for terminal phases.
    pub fn exit_code(self) -> Option<i32> {
        match self {
            Phase::Failed => Some(EXIT_FAILURE),
            Phase::Done => Some(EXIT_SUCCESS),
            _ => None,
        }
    }
}

/// Result of one completed launch.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub command: LaunchSpec,
    /// Wall-clock seconds from before the spawn to after the wait returned.
    pub elapsed_seconds: f64,
    /// Not propagated; a failing child still yields a measurement.
    pub child_exit: ChildExit,
}
