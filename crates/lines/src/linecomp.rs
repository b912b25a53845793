// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Write-then-match text buffer.

use crate::error::LineMatchError;
use crate::matcher::LineMatcher;
use std::fmt;

/// Text buffer that tests write output into and then match against.
#[derive(Clone, Debug, Default)]
pub struct LineComp {
    buffer: String,
}

impl LineComp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written since the last check
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Check that `patterns` occur in order in the buffered text.
    ///
    /// The buffer is emptied whether or not the check succeeds. Returns the
    /// lines skipped while matching.
    pub fn assert_contains_lines<P: AsRef<str>>(
        &mut self,
        patterns: &[P],
    ) -> Result<Vec<String>, LineMatchError> {
        let text = std::mem::take(&mut self.buffer);
        LineMatcher::new(text.split('\n')).match_in_order(patterns)
    }
}

impl fmt::Write for LineComp {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}
