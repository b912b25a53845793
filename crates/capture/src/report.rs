// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test report types carried in hook payloads.

use crate::dispatch::Payload;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload key holding the report of a report hook
pub const REPORT_KEY: &str = "report";

/// Default hook for per-phase test results
pub const DEFAULT_TEST_REPORT_HOOK: &str = "runtest_logreport";
/// Default hook for collection results
pub const DEFAULT_COLLECT_REPORT_HOOK: &str = "collectreport";
/// Default node id segment delimiter
pub const DEFAULT_NODEID_SEPARATOR: &str = "::";

/// Result of a report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

/// Part of an item's run a report describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    Call,
    Teardown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Setup => "setup",
            Phase::Call => "call",
            Phase::Teardown => "teardown",
        })
    }
}

/// Outcome of collecting or running one item.
///
/// Collection reports have no phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestReport {
    pub nodeid: String,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<Phase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longrepr: Option<String>,
}

impl TestReport {
    pub fn new(nodeid: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            nodeid: nodeid.into(),
            outcome,
            when: None,
            longrepr: None,
        }
    }

    /// Set the phase
    pub fn with_phase(mut self, when: Phase) -> Self {
        self.when = Some(when);
        self
    }

    /// Set the failure representation
    pub fn with_longrepr(mut self, longrepr: impl Into<String>) -> Self {
        self.longrepr = Some(longrepr.into());
        self
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    pub fn failed(&self) -> bool {
        self.outcome == Outcome::Failed
    }

    pub fn skipped(&self) -> bool {
        self.outcome == Outcome::Skipped
    }

    /// Node id split on `separator`
    pub fn nodeid_segments<'a>(&'a self, separator: &'a str) -> impl Iterator<Item = &'a str> {
        self.nodeid.split(separator)
    }

    /// Build the payload for dispatching this report through a hook
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        // Serializing a plain struct of strings and unit enums cannot fail.
        if let Ok(value) = serde_json::to_value(self) {
            payload.insert(REPORT_KEY.to_string(), value);
        }
        payload
    }
}

/// Hook names and node id layout used by the report helpers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportHooks {
    /// Hook reporting per-phase test results
    pub test_report: String,
    /// Hook reporting collection results
    pub collect_report: String,
    /// Delimiter between node id segments
    pub nodeid_separator: String,
}

impl ReportHooks {
    /// Both report hook names
    pub fn all(&self) -> [&str; 2] {
        [self.test_report.as_str(), self.collect_report.as_str()]
    }
}

impl Default for ReportHooks {
    fn default() -> Self {
        Self {
            test_report: DEFAULT_TEST_REPORT_HOOK.to_string(),
            collect_report: DEFAULT_COLLECT_REPORT_HOOK.to_string(),
            nodeid_separator: DEFAULT_NODEID_SEPARATOR.to_string(),
        }
    }
}

/// Reports grouped by outcome
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcomes {
    pub passed: Vec<TestReport>,
    pub skipped: Vec<TestReport>,
    pub failed: Vec<TestReport>,
}

impl Outcomes {
    pub fn counts(&self) -> OutcomeCounts {
        OutcomeCounts {
            passed: self.passed.len(),
            skipped: self.skipped.len(),
            failed: self.failed.len(),
        }
    }
}

/// Number of reports per outcome
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl OutcomeCounts {
    pub fn new(passed: usize, skipped: usize, failed: usize) -> Self {
        Self {
            passed,
            skipped,
            failed,
        }
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passed={} skipped={} failed={}",
            self.passed, self.skipped, self.failed
        )
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
