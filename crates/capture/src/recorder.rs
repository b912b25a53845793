// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording of all hook calls made through a dispatcher.

use crate::call::RecordedCall;
use crate::dispatch::{DispatchError, HookDispatcher, InterceptorHandle, Payload};
use crate::error::RecorderError;
use crate::log::CallLog;
use crate::report::{OutcomeCounts, Outcomes, Phase, ReportHooks, TestReport, REPORT_KEY};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

const RECORDER_TARGET: &str = "hookprobe::recorder";

/// One step of an expected call sequence
pub struct ExpectedCall<'a> {
    name: String,
    description: String,
    check: Box<dyn Fn(&Payload) -> bool + 'a>,
}

impl<'a> ExpectedCall<'a> {
    /// Expect a call named `name` whose payload satisfies `check`.
    ///
    /// `description` names the check in failure messages.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        check: impl Fn(&Payload) -> bool + 'a,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            check: Box::new(check),
        }
    }

    /// Expect any call named `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "any", |_| true)
    }

    /// Expect a call named `name` whose argument `key` equals `value`
    pub fn with_arg(name: impl Into<String>, key: &'a str, value: Value) -> Self {
        let description = format!("{} == {}", key, value);
        Self::new(name, description, move |payload| {
            payload.get(key) == Some(&value)
        })
    }
}

impl fmt::Debug for ExpectedCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpectedCall")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Records every hook call dispatched through one [`HookDispatcher`].
///
/// The recorder is purely observational: listeners run and return exactly as
/// they would without it. Dropping the recorder stops recording.
pub struct CallRecorder {
    log: CallLog,
    handle: InterceptorHandle,
    hooks: ReportHooks,
}

impl CallRecorder {
    /// Start recording calls on `dispatcher` with the default report hooks
    pub fn install(dispatcher: &HookDispatcher) -> Result<Self, DispatchError> {
        Self::with_report_hooks(dispatcher, ReportHooks::default())
    }

    /// Start recording calls on `dispatcher`
    pub fn with_report_hooks(
        dispatcher: &HookDispatcher,
        hooks: ReportHooks,
    ) -> Result<Self, DispatchError> {
        Self::with_log(dispatcher, CallLog::new(), hooks)
    }

    /// Start recording calls on `dispatcher` into an existing log
    pub fn with_log(
        dispatcher: &HookDispatcher,
        log: CallLog,
        hooks: ReportHooks,
    ) -> Result<Self, DispatchError> {
        let handle = dispatcher.install_interceptor(Arc::new(log.clone()))?;
        Ok(Self { log, handle, hooks })
    }

    /// Stop recording and restore plain dispatch.
    ///
    /// Recorded calls stay queryable. Calling this twice is an error.
    pub fn finish_recording(&mut self) -> Result<(), DispatchError> {
        self.handle.uninstall()
    }

    /// Check if calls are still being recorded
    pub fn is_recording(&self) -> bool {
        self.handle.is_installed()
    }

    /// The underlying call log
    pub fn log(&self) -> &CallLog {
        &self.log
    }

    /// Report hook configuration
    pub fn report_hooks(&self) -> &ReportHooks {
        &self.hooks
    }

    /// All recorded calls in dispatch order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.log.calls()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Calls whose name is one of `names`, in dispatch order
    pub fn calls_named(&self, names: &[&str]) -> Vec<RecordedCall> {
        self.log.filter_by_name(names)
    }

    /// Like [`calls_named`](Self::calls_named) with whitespace-separated names
    pub fn calls_named_str(&self, names: &str) -> Vec<RecordedCall> {
        let names: Vec<&str> = names.split_whitespace().collect();
        self.calls_named(&names)
    }

    /// Check that the expected calls occur in order, not necessarily adjacent.
    ///
    /// Each expected call consumes the first matching call after the one
    /// consumed before it.
    pub fn assert_call_sequence(&self, expected: &[ExpectedCall<'_>]) -> Result<(), RecorderError> {
        let calls = self.log.calls();
        let mut cursor = 0;

        for entry in expected {
            let mut found = None;
            for (offset, call) in calls[cursor..].iter().enumerate() {
                if call.name != entry.name {
                    debug!(target: RECORDER_TARGET, name = %entry.name, %call, "NONAMEMATCH");
                    continue;
                }
                debug!(target: RECORDER_TARGET, name = %entry.name, %call, "NAMEMATCH");
                if (entry.check)(&call.payload) {
                    debug!(
                        target: RECORDER_TARGET,
                        check = %entry.description,
                        %call,
                        "CHECKERMATCH"
                    );
                    found = Some(offset);
                    break;
                }
                debug!(
                    target: RECORDER_TARGET,
                    check = %entry.description,
                    %call,
                    "NOCHECKERMATCH"
                );
            }

            match found {
                Some(offset) => cursor += offset + 1,
                None => {
                    return Err(RecorderError::SequenceViolation {
                        name: entry.name.clone(),
                        check: entry.description.clone(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Remove and return the first call named `name`
    pub fn pop_call(&self, name: &str) -> Result<RecordedCall, RecorderError> {
        self.log
            .remove_first(name)
            .ok_or_else(|| RecorderError::CallNotFound {
                name: name.to_string(),
                remaining: render_calls(&self.log.calls()),
            })
    }

    /// The single call named `name`
    pub fn exactly_one_call(&self, name: &str) -> Result<RecordedCall, RecorderError> {
        let mut calls = self.calls_named(&[name]);
        match calls.len() {
            1 => Ok(calls.remove(0)),
            0 => Err(RecorderError::CallNotFound {
                name: name.to_string(),
                remaining: render_calls(&self.log.calls()),
            }),
            count => Err(RecorderError::AmbiguousCall {
                name: name.to_string(),
                count,
                calls: render_calls(&calls),
            }),
        }
    }

    /// Reports from both report hooks
    pub fn reports(&self) -> Result<Vec<TestReport>, RecorderError> {
        self.reports_for(&self.hooks.all())
    }

    /// Reports carried by calls named `names`
    pub fn reports_for(&self, names: &[&str]) -> Result<Vec<TestReport>, RecorderError> {
        self.calls_named(names)
            .into_iter()
            .map(|call| {
                let value = call.arg(REPORT_KEY).cloned().unwrap_or(Value::Null);
                serde_json::from_value(value).map_err(|source| RecorderError::MalformedReport {
                    hook: call.name.clone(),
                    seq: call.seq,
                    source,
                })
            })
            .collect()
    }

    /// The single report whose node id has a segment equal to `name_part`.
    ///
    /// An empty `name_part` matches every node id. Without `when`, passing
    /// setup and teardown reports are ignored.
    pub fn match_report(
        &self,
        name_part: &str,
        names: &[&str],
        when: Option<Phase>,
    ) -> Result<TestReport, RecorderError> {
        let separator = self.hooks.nodeid_separator.as_str();
        let mut matches: Vec<TestReport> = self
            .reports_for(names)?
            .into_iter()
            .filter(|rep| match when {
                None => !(rep.passed() && rep.when.is_some_and(|w| w != Phase::Call)),
                Some(phase) => rep.when == Some(phase),
            })
            .filter(|rep| {
                name_part.is_empty() || rep.nodeid_segments(separator).any(|s| s == name_part)
            })
            .collect();

        match matches.len() {
            0 => Err(RecorderError::ReportNotFound {
                name_part: name_part.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(RecorderError::AmbiguousReport {
                name_part: name_part.to_string(),
                nodeids: matches.into_iter().map(|rep| rep.nodeid).collect(),
            }),
        }
    }

    /// Like [`match_report`](Self::match_report) over both report hooks
    pub fn match_any_report(
        &self,
        name_part: &str,
        when: Option<Phase>,
    ) -> Result<TestReport, RecorderError> {
        self.match_report(name_part, &self.hooks.all(), when)
    }

    /// Failed reports carried by calls named `names`
    pub fn failed_reports(&self, names: &[&str]) -> Result<Vec<TestReport>, RecorderError> {
        Ok(self
            .reports_for(names)?
            .into_iter()
            .filter(TestReport::failed)
            .collect())
    }

    /// Failed collection reports
    pub fn failed_collections(&self) -> Result<Vec<TestReport>, RecorderError> {
        self.failed_reports(&[self.hooks.collect_report.as_str()])
    }

    /// Group reports by outcome.
    ///
    /// Passes count only for the call phase; skips and failures count in any
    /// phase.
    pub fn list_outcomes(&self) -> Result<Outcomes, RecorderError> {
        let mut outcomes = Outcomes::default();
        for rep in self.reports()? {
            if rep.passed() {
                if rep.when == Some(Phase::Call) {
                    outcomes.passed.push(rep);
                }
            } else if rep.skipped() {
                outcomes.skipped.push(rep);
            } else {
                outcomes.failed.push(rep);
            }
        }
        Ok(outcomes)
    }

    pub fn count_outcomes(&self) -> Result<OutcomeCounts, RecorderError> {
        Ok(self.list_outcomes()?.counts())
    }

    pub fn assert_outcome_counts(&self, expected: OutcomeCounts) -> Result<(), RecorderError> {
        let actual = self.count_outcomes()?;
        if actual != expected {
            return Err(RecorderError::OutcomeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Drop all recorded calls. Recording continues.
    pub fn clear(&self) {
        self.log.clear();
    }
}

impl fmt::Debug for CallRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallRecorder")
            .field("calls", &self.log.len())
            .field("recording", &self.is_recording())
            .field("hooks", &self.hooks)
            .finish()
    }
}

fn render_calls(calls: &[RecordedCall]) -> String {
    calls
        .iter()
        .map(|call| format!("  {}", call))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
