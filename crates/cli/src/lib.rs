// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Self-testing harness for hook-driven test runners.
//!
//! Runs an instance of the host in-process or as a subprocess, records its
//! hook calls with [`CallRecorder`], and checks its output with
//! [`LineMatcher`].
//!
//! ```
//! use hookprobe::{
//!     record_inline, HookDispatcher, Outcome, OutcomeCounts, Phase, ReportHooks, TestReport,
//! };
//!
//! let dispatcher = HookDispatcher::new();
//! let run = record_inline(&dispatcher, ReportHooks::default(), |d| {
//!     let report = TestReport::new("test_x.py::test_ok", Outcome::Passed).with_phase(Phase::Call);
//!     d.dispatch("runtest_logreport", report.to_payload())
//! })?;
//! run.recorder.assert_outcome_counts(OutcomeCounts::new(1, 0, 0))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod host;
mod names;
mod run;
mod session;
pub mod telemetry;

pub use config::{ConfigError, HarnessConfig, HostConfig};
pub use names::public_names;
pub use run::{run_command, run_host, RunError, RunResult};
pub use session::{record_inline, InlineRun};

pub use hookprobe_capture::{
    CallLog, CallRecorder, DispatchError, ExpectedCall, HookDispatcher, Interceptor,
    InterceptorHandle, ListenerError, Outcome, OutcomeCounts, Outcomes, Payload, Phase,
    RecordedCall, RecorderError, ReportHooks, TestReport,
};
pub use hookprobe_lines::{
    fnmatch, pattern_block, LineComp, LineMatchError, LineMatcher, LinePattern,
};
