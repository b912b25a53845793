// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call log implementation.

use crate::call::RecordedCall;
use crate::dispatch::{Interceptor, Payload};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

const LOG_TARGET: &str = "hookprobe::log";

#[derive(Default)]
struct LogState {
    next_seq: u64,
    calls: Vec<RecordedCall>,
}

/// Ordered, append-only log of recorded hook calls.
///
/// Clones share the same underlying log.
pub struct CallLog {
    state: Arc<Mutex<LogState>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl CallLog {
    /// Create a new in-memory call log
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(LogState::default())),
            file_writer: None,
        }
    }

    /// Create a call log that also writes to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            state: Arc::new(Mutex::new(LogState::default())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a call
    pub fn record(&self, name: &str, payload: &Payload) {
        let call = {
            let mut state = self.state.lock();
            let call = RecordedCall {
                seq: state.next_seq,
                name: name.to_string(),
                payload: payload.clone(),
            };
            state.next_seq += 1;
            state.calls.push(call.clone());
            call
        };

        // Write to file if configured
        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            if let Err(e) = write_jsonl(&mut *w, &call) {
                warn!(
                    target: LOG_TARGET,
                    seq = call.seq,
                    error = %e,
                    "failed to mirror call to log file"
                );
            }
        }
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    /// Get calls whose name is in `names`, in log order
    pub fn filter_by_name(&self, names: &[&str]) -> Vec<RecordedCall> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| names.contains(&c.name.as_str()))
            .cloned()
            .collect()
    }

    /// Remove and return the first call named `name`
    pub fn remove_first(&self, name: &str) -> Option<RecordedCall> {
        let mut state = self.state.lock();
        let index = state.calls.iter().position(|c| c.name == name)?;
        Some(state.calls.remove(index))
    }

    pub fn len(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.state.lock().calls.is_empty()
    }

    /// Clear all recorded calls
    pub fn clear(&self) {
        self.state.lock().calls.clear();
    }
}

impl Interceptor for CallLog {
    fn before_call(&self, hook: &str, payload: &Payload) {
        self.record(hook, payload);
    }
}

impl Default for CallLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CallLog {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

fn write_jsonl<W: Write>(w: &mut W, call: &RecordedCall) -> std::io::Result<()> {
    serde_json::to_writer(&mut *w, call)?;
    writeln!(w)?;
    w.flush()
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
