// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-process recorded runs.

use hookprobe_capture::{CallRecorder, DispatchError, HookDispatcher, ReportHooks};

/// A finished in-process run
#[derive(Debug)]
pub struct InlineRun<T> {
    /// Calls recorded during the run; no longer recording
    pub recorder: CallRecorder,
    /// Whatever the run body returned
    pub outcome: T,
}

/// Record every hook call `body` makes through `dispatcher`.
///
/// Recording stops when the body returns, whatever it returned. If the body
/// panics, dropping the recorder during unwinding restores the dispatcher.
pub fn record_inline<T, F>(
    dispatcher: &HookDispatcher,
    hooks: ReportHooks,
    body: F,
) -> Result<InlineRun<T>, DispatchError>
where
    F: FnOnce(&HookDispatcher) -> T,
{
    let mut recorder = CallRecorder::with_report_hooks(dispatcher, hooks)?;
    let outcome = body(dispatcher);
    recorder.finish_recording()?;
    Ok(InlineRun { recorder, outcome })
}
