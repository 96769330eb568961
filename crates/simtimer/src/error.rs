use std::io;
use thiserror::Error;

use crate::cfg::UNKNOWN_OS_CODE;

/// Failures of a timed launch. Both are fatal: no elapsed time is reported.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The OS could not start the target (not found, permission denied, ...).
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        code: Option<i32>,
        #[source]
        source: io::Error,
    },

    /// The child was started but waiting for it failed.
    #[error("failed to wait for `{command}`: {source}")]
    Wait {
        command: String,
        code: Option<i32>,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn spawn(command: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            code: source.raw_os_error(),
            source,
        }
    }

    pub fn wait(command: impl Into<String>, source: io::Error) -> Self {
        Self::Wait {
            command: command.into(),
            code: source.raw_os_error(),
            source,
        }
    }

    /// Platform error code as printed on the failure line.
    pub fn os_code(&self) -> i32 {
        match self {
            Self::Spawn { code, .. } | Self::Wait { code, .. } => code.unwrap_or(UNKNOWN_OS_CODE),
        }
    }

    pub fn is_spawn(&self) -> bool {
        matches!(self, Self::Spawn { .. })
    }
}
