use anyhow::Result;
use clap::Parser;
use simtimer::prelude::*;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Logs share stderr with the failure line, so only warnings get through.
const LOG_LEVEL: tracing::Level = tracing::Level::WARN;

#[derive(Parser)]
#[command(name = "measure")]
#[command(about = "Run the simulation (vvp SMTTTimingFast.out) and report its wall-clock time")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cmd {
    /// Accepted and ignored; the launched command is fixed.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<OsString>,
}

fn main() -> Result<ExitCode> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(LOG_LEVEL)
        .init();
    let Cmd { ignored } = Cmd::parse();
    tracing::debug!(ignored = ignored.len(), "arguments");

    let spec = LaunchSpec::default_simulation();
    tracing::debug!(command = %spec, version = simtimer::VERSION, "measure");
    let mut launcher = TimedLauncher::new(StdPlatform::new());
    let status = launcher.run_report(&spec, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::from(u8::try_from(status).unwrap_or(1)))
}
