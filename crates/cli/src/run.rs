// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess runs of the host and their captured output.

use crate::host;
use hookprobe_lines::LineMatcher;
use regex::Regex;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

const RUN_TARGET: &str = "hookprobe::run";

/// Matches `<count> <word>` pairs in a summary line
static OUTCOME_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(\d+) (\w+)").ok());

/// Errors from running a subprocess
#[derive(Debug, Error)]
pub enum RunError {
    #[error("host executable not initialized; call host::init first")]
    HostNotInitialized,

    #[error("failed to run '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no outcome summary line in output")]
    NoSummary,

    #[error("outcomes differ: expected {expected:?}, got {actual:?}")]
    OutcomeMismatch {
        expected: BTreeMap<String, u64>,
        actual: BTreeMap<String, u64>,
    },
}

/// Result of running a command
#[derive(Clone, Debug)]
pub struct RunResult {
    /// Exit code, `None` if terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: LineMatcher,
    pub stderr: LineMatcher,
    pub duration: Duration,
}

impl RunResult {
    pub fn from_output(output: &Output, duration: Duration) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: LineMatcher::from_text(&decode(&output.stdout)),
            stderr: LineMatcher::from_text(&decode(&output.stderr)),
            duration,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Outcome counts from the last stdout line mentioning "seconds".
    ///
    /// `"=== 3 passed, 1 skipped in 0.12 seconds ==="` yields
    /// `{"passed": 3, "skipped": 1}`.
    pub fn parse_outcomes(&self) -> Option<BTreeMap<String, u64>> {
        let regex = OUTCOME_REGEX.as_ref()?;
        self.stdout
            .lines()
            .iter()
            .rev()
            .filter(|line| line.contains("seconds"))
            .find_map(|line| {
                let outcomes: BTreeMap<String, u64> = regex
                    .captures_iter(line)
                    .filter_map(|caps| {
                        let word = caps.get(2)?.as_str();
                        // The elapsed time reads as "<n> seconds" too.
                        if word == "seconds" {
                            return None;
                        }
                        let count = caps.get(1)?.as_str().parse().ok()?;
                        Some((word.to_string(), count))
                    })
                    .collect();
                (!outcomes.is_empty()).then_some(outcomes)
            })
    }

    /// Check the summary reports exactly `expected`; absent outcomes count as zero
    pub fn assert_outcomes(&self, expected: &[(&str, u64)]) -> Result<(), RunError> {
        let actual = self.parse_outcomes().ok_or(RunError::NoSummary)?;
        let nonzero = |map: BTreeMap<String, u64>| -> BTreeMap<String, u64> {
            map.into_iter().filter(|(_, count)| *count > 0).collect()
        };

        let expected = nonzero(
            expected
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
        );
        let actual = nonzero(actual);
        if expected != actual {
            return Err(RunError::OutcomeMismatch { expected, actual });
        }
        Ok(())
    }
}

/// Run `program` with `args`, capturing its output
pub fn run_command<I, S>(program: &Path, args: I, cwd: Option<&Path>) -> Result<RunResult, RunError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    debug!(target: RUN_TARGET, program = %program.display(), "running command");
    let start = Instant::now();
    let output = command.output().map_err(|source| RunError::Spawn {
        program: program.to_path_buf(),
        source,
    })?;
    let duration = start.elapsed();
    debug!(
        target: RUN_TARGET,
        code = ?output.status.code(),
        elapsed_ms = duration.as_millis() as u64,
        "command finished"
    );

    Ok(RunResult::from_output(&output, duration))
}

/// Run the registered host executable
pub fn run_host<I, S>(args: I, cwd: Option<&Path>) -> Result<RunResult, RunError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = host::executable().ok_or(RunError::HostNotInitialized)?;
    run_command(program, args, cwd)
}

fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => format!(
            "INTERNAL not-utf8-decodeable, truncated string:\n{}",
            String::from_utf8_lossy(bytes)
        ),
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
