//! Output lines and the structured run record.
//!
//! Seconds are printed in general notation with six significant digits,
//! the same text a default-configured C++ `ostream` produces for a `double`,
//! so existing scripts that scrape the line keep working.

use serde::Serialize;

use crate::cfg::{code_rev, REPORT_PRECISION};
use crate::error::LaunchError;
use crate::launcher::Measurement;

/// `Elapsed Wall Clock Time: <seconds> seconds`
pub fn elapsed_line(seconds: f64) -> String {
    format!(
        "Elapsed Wall Clock Time: {} seconds",
        format_general(seconds, REPORT_PRECISION)
    )
}

/// `CreateProcess failed (<code>).`
pub fn spawn_failure_line(code: i32) -> String {
    format!("CreateProcess failed ({code}).")
}

/// `Wait failed (<code>).`
pub fn wait_failure_line(code: i32) -> String {
    format!("Wait failed ({code}).")
}

pub fn failure_line(err: &LaunchError) -> String {
    if err.is_spawn() {
        spawn_failure_line(err.os_code())
    } else {
        wait_failure_line(err.os_code())
    }
}

/// `%g`-style rendering: `precision` significant digits, trailing zeros
/// removed, exponent form when the decimal exponent is below -4 or at least
/// `precision`.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let p = precision.max(1);
    // Exponent after rounding to `p` significant digits.
    let sci = format!("{:.*e}", p - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// One finished run, serialized into the debug log.
#[derive(Clone, Debug, Serialize)]
pub struct RunRecord {
    pub code_rev: &'static str,
    pub command: String,
    pub elapsed_seconds: f64,
    pub child_exit_code: Option<i32>,
    pub child_succeeded: bool,
}

impl From<&Measurement> for RunRecord {
    fn from(m: &Measurement) -> Self {
        Self {
            code_rev: code_rev(),
            command: m.command.to_string(),
            elapsed_seconds: m.elapsed_seconds,
            child_exit_code: m.child_exit.code,
            child_succeeded: m.child_exit.success(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch_spec::LaunchSpec;
    use crate::platform::ChildExit;
    use proptest::prelude::*;
    use std::io;

    #[test]
    fn general_format_matches_ostream_defaults() {
        let cases = [
            (1.5, "1.5"),
            (2.0, "2"),
            (0.1234567, "0.123457"),
            (1.0000004, "1"),
            (0.0001, "0.0001"),
            (0.000012345, "1.2345e-05"),
            (100000.0, "100000"),
            (1234567.0, "1.23457e+06"),
            (999999.7, "1e+06"),
            (0.0, "0"),
            (3.25e-9, "3.25e-09"),
            (1e100, "1e+100"),
        ];
        for (v, want) in cases {
            assert_eq!(format_general(v, 6), want, "value {v}");
        }
    }

    #[test]
    fn lines_have_exact_text() {
        assert_eq!(elapsed_line(1.5), "Elapsed Wall Clock Time: 1.5 seconds");
        assert_eq!(spawn_failure_line(2), "CreateProcess failed (2).");
        let err = LaunchError::wait("x", io::Error::from_raw_os_error(10));
        assert_eq!(failure_line(&err), "Wait failed (10).");
        let err = LaunchError::spawn("x", io::Error::from_raw_os_error(13));
        assert_eq!(failure_line(&err), "CreateProcess failed (13).");
    }

    #[test]
    fn run_record_serializes_command_line() {
        let m = Measurement {
            command: LaunchSpec::new("sh").args(["-c", "exit 1"]),
            elapsed_seconds: 0.25,
            child_exit: ChildExit { code: Some(1) },
        };
        let json = serde_json::to_value(RunRecord::from(&m)).unwrap();
        assert_eq!(json["command"], "sh -c exit 1");
        assert_eq!(json["elapsed_seconds"], 0.25);
        assert_eq!(json["child_exit_code"], 1);
        assert_eq!(json["child_succeeded"], false);
    }

    proptest! {
        #[test]
        fn general_format_round_trips_within_precision(v in 1e-9f64..1e9) {
            let s = format_general(v, 6);
            let back: f64 = s.parse().unwrap();
            prop_assert!(((back - v) / v).abs() <= 1e-5, "{v} -> {s}");
        }
    }
}
