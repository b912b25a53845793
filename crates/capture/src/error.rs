// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorder assertion errors.

use crate::dispatch::DispatchError;
use crate::report::OutcomeCounts;
use thiserror::Error;

/// Failures raised by [`CallRecorder`](crate::CallRecorder) queries
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("could not find call {name:?}, in:\n{remaining}")]
    CallNotFound { name: String, remaining: String },

    #[error("expected exactly one call {name:?}, found {count}:\n{calls}")]
    AmbiguousCall {
        name: String,
        count: usize,
        calls: String,
    },

    #[error("could not find {name:?} check {check:?}")]
    SequenceViolation { name: String, check: String },

    #[error("could not find test report matching {name_part:?}")]
    ReportNotFound { name_part: String },

    #[error("found 2 or more test reports matching {name_part:?}: {nodeids:?}")]
    AmbiguousReport {
        name_part: String,
        nodeids: Vec<String>,
    },

    #[error("outcome counts differ: expected {expected}, got {actual}")]
    OutcomeMismatch {
        expected: OutcomeCounts,
        actual: OutcomeCounts,
    },

    #[error("call #{seq} to {hook:?} carries no valid report: {source}")]
    MalformedReport {
        hook: String,
        seq: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
