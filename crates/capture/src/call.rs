// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded hook call.

use crate::dispatch::Payload;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single intercepted hook call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedCall {
    /// Dispatch index, assigned when the call was recorded
    pub seq: u64,

    /// Hook name
    pub name: String,

    /// Keyword arguments the hook was called with
    pub payload: Payload,
}

impl RecordedCall {
    /// Look up a single argument
    pub fn arg(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

impl fmt::Display for RecordedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = serde_json::to_string(&self.payload).map_err(|_| fmt::Error)?;
        write!(f, "<RecordedCall #{} {}(**{})>", self.seq, self.name, args)
    }
}
