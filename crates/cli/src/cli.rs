// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface for matching captured output.

use crate::config::{ConfigError, HarnessConfig};
use crate::host::HostError;
use crate::run::{self, RunError, RunResult};
use crate::telemetry::TelemetryError;
use clap::{Parser, Subcommand};
use hookprobe_lines::{pattern_block, LineMatchError, LineMatcher};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Match captured test-runner output against glob patterns
#[derive(Parser, Debug)]
#[command(name = "hookprobe", version, about = "Match captured test-runner output")]
pub struct Cli {
    /// Harness configuration file (TOML)
    #[arg(long, global = true, env = "HOOKPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tracing filter, overrides the config file (e.g. "hookprobe=debug")
    #[arg(long, global = true, env = "HOOKPROBE_LOG")]
    pub log_filter: Option<String>,

    /// Host executable, overrides the config file
    #[arg(long, global = true, env = "HOOKPROBE_HOST")]
    pub host: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that patterns match output lines
    Match {
        /// Output to check (default: stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Read patterns from a file, one per line, common indentation removed
        #[arg(long, short = 'p')]
        patterns: Option<PathBuf>,

        /// Patterns may match in any order
        #[arg(long)]
        any_order: bool,

        /// Patterns to match, in order
        #[arg(value_name = "PATTERN")]
        pattern: Vec<String>,
    },

    /// Print the lines following the first line matching a pattern
    After {
        /// Output to search (default: stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// Print outcome counts parsed from a run summary as JSON
    Outcomes {
        /// Output to parse (default: stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Run the host executable, echoing its output
    Run {
        /// Arguments passed to the host
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Errors surfaced by the binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error(transparent)]
    Match(#[from] LineMatchError),

    #[error("no outcome summary line in output")]
    NoSummary,

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("host exited with {}", .code.map_or("a signal".to_string(), |c| format!("code {}", c)))]
    HostFailed { code: Option<i32> },
}

impl Cli {
    /// Load the configuration file, if any, applying command-line overrides
    pub fn load_config(&self) -> Result<HarnessConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        if let Some(filter) = &self.log_filter {
            config.log_filter = Some(filter.clone());
        }
        if let Some(host) = &self.host {
            config.host.executable = Some(host.clone());
        }
        Ok(config)
    }
}

impl Command {
    /// Run the command against its input and write any result to `out`
    pub fn execute(&self, stdin: &mut impl Read, out: &mut impl Write) -> Result<(), CliError> {
        match self {
            Command::Match {
                input,
                patterns,
                any_order,
                pattern,
            } => {
                let matcher = LineMatcher::from_text(&read_input(input.as_deref(), stdin)?);
                let mut all = match patterns {
                    Some(path) => pattern_block(&read_file(path)?),
                    None => Vec::new(),
                };
                all.extend(pattern.iter().cloned());

                if *any_order {
                    matcher.match_any_order(&all)?;
                } else {
                    matcher.match_in_order(&all)?;
                }
                Ok(())
            }
            Command::After { input, pattern } => {
                let matcher = LineMatcher::from_text(&read_input(input.as_deref(), stdin)?);
                for line in matcher.find_lines_after(pattern)? {
                    writeln!(out, "{}", line)?;
                }
                Ok(())
            }
            Command::Outcomes { input } => {
                let text = read_input(input.as_deref(), stdin)?;
                let result = RunResult {
                    exit_code: None,
                    stdout: LineMatcher::from_text(&text),
                    stderr: LineMatcher::default(),
                    duration: Duration::ZERO,
                };
                let outcomes = result.parse_outcomes().ok_or(CliError::NoSummary)?;
                let json = serde_json::to_string(&outcomes)
                    .map_err(|e| std::io::Error::other(e.to_string()))?;
                writeln!(out, "{}", json)?;
                Ok(())
            }
            Command::Run { args } => {
                let result = run::run_host(args, None)?;
                for line in result.stdout.lines() {
                    writeln!(out, "{}", line)?;
                }
                if !result.success() {
                    return Err(CliError::HostFailed {
                        code: result.exit_code,
                    });
                }
                Ok(())
            }
        }
    }
}

fn read_input(path: Option<&Path>, stdin: &mut impl Read) -> Result<String, CliError> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
