// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line matching errors.

use thiserror::Error;

/// Failures raised by [`LineMatcher`](crate::LineMatcher)
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LineMatchError {
    /// No line satisfies the pattern
    #[error("line {pattern:?} not found in output")]
    LineNotFound { pattern: String },

    /// The lines ran out before an ordered pattern was satisfied
    #[error("remains unmatched: {pattern:?}, skipped {} line(s)", .extra_lines.len())]
    Unmatched {
        pattern: String,
        extra_lines: Vec<String>,
    },
}

impl LineMatchError {
    /// The pattern that could not be satisfied
    pub fn pattern(&self) -> &str {
        match self {
            LineMatchError::LineNotFound { pattern }
            | LineMatchError::Unmatched { pattern, .. } => pattern,
        }
    }
}
