//! What to launch: an executable plus its argument list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::Command;

use crate::cfg::{DEFAULT_ARTIFACT, DEFAULT_INTERPRETER};

/// Executable (resolved via the search path unless it contains a separator)
/// and the arguments passed to it verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl LaunchSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `vvp SMTTTimingFast.out`.
    pub fn default_simulation() -> Self {
        Self::new(DEFAULT_INTERPRETER).arg(DEFAULT_ARTIFACT)
    }

    /// A `Command` with inherited stdio, environment and working directory.
    pub(crate) fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl Default for LaunchSpec {
    fn default() -> Self {
        Self::default_simulation()
    }
}

impl fmt::Display for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
