// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook call interception and recording for test assertions.
//!
//! A [`HookDispatcher`] routes named hook calls to listeners. A
//! [`CallRecorder`] installs itself as the dispatcher's interceptor, records
//! every call with its keyword payload, and answers ordering, lookup, and
//! report-outcome queries over the recorded calls.

mod call;
mod dispatch;
mod error;
mod log;
mod recorder;
mod report;

pub use call::RecordedCall;
pub use dispatch::{
    DispatchError, HookDispatcher, Interceptor, InterceptorHandle, Listener, ListenerError,
    Payload,
};
pub use error::RecorderError;
pub use log::CallLog;
pub use recorder::{CallRecorder, ExpectedCall};
pub use report::{
    Outcome, OutcomeCounts, Outcomes, Phase, ReportHooks, TestReport, DEFAULT_COLLECT_REPORT_HOOK,
    DEFAULT_NODEID_SEPARATOR, DEFAULT_TEST_REPORT_HOOK, REPORT_KEY,
};
