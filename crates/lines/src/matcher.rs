// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob matching over captured output lines.

use crate::block::pattern_block;
use crate::error::LineMatchError;
use crate::pattern::LinePattern;
use std::fmt;
use tracing::debug;

const MATCH_TARGET: &str = "hookprobe::lines";

/// Flexible matching of text, typically a command's output.
///
/// Holds lines without their trailing newlines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMatcher {
    lines: Vec<String>,
}

impl LineMatcher {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split `text` into lines
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace all lines
    pub fn reset<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
    }

    /// The original text, lines joined with `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Every line after the first one matching `pattern`
    pub fn find_lines_after(&self, pattern: &str) -> Result<&[String], LineMatchError> {
        let compiled = LinePattern::new(pattern);
        self.lines
            .iter()
            .position(|line| compiled.matches(line))
            .map(|index| &self.lines[index + 1..])
            .ok_or_else(|| LineMatchError::LineNotFound {
                pattern: pattern.to_string(),
            })
    }

    /// Check that every pattern matches some line, in any order
    pub fn match_any_order<P: AsRef<str>>(&self, patterns: &[P]) -> Result<(), LineMatchError> {
        for pattern in patterns {
            let compiled = LinePattern::new(pattern.as_ref());
            match self.lines.iter().find(|line| compiled.matches(line)) {
                Some(line) => {
                    debug!(
                        target: MATCH_TARGET,
                        pattern = compiled.as_str(),
                        line = %line,
                        "matched"
                    );
                }
                None => {
                    return Err(LineMatchError::LineNotFound {
                        pattern: compiled.as_str().to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Check that the patterns match lines in order.
    ///
    /// Each pattern consumes the first remaining line it matches; lines
    /// skipped on the way are never revisited. On success returns the
    /// skipped lines. Lines after the last match are not examined.
    pub fn match_in_order<P: AsRef<str>>(
        &self,
        patterns: &[P],
    ) -> Result<Vec<String>, LineMatchError> {
        let mut remaining = self.lines.iter();
        let mut extra_lines = Vec::new();

        for pattern in patterns {
            let compiled = LinePattern::new(pattern.as_ref());
            let mut nomatch_shown = false;
            let mut matched = false;

            for line in remaining.by_ref() {
                if compiled.is_exact(line) {
                    debug!(target: MATCH_TARGET, pattern = compiled.as_str(), "exact match");
                    matched = true;
                    break;
                }
                if compiled.is_glob_match(line) {
                    debug!(
                        target: MATCH_TARGET,
                        pattern = compiled.as_str(),
                        line = %line,
                        "fnmatch"
                    );
                    matched = true;
                    break;
                }
                if !nomatch_shown {
                    debug!(target: MATCH_TARGET, pattern = compiled.as_str(), "nomatch");
                    nomatch_shown = true;
                }
                debug!(target: MATCH_TARGET, line = %line, "and");
                extra_lines.push(line.clone());
            }

            if !matched {
                return Err(LineMatchError::Unmatched {
                    pattern: compiled.as_str().to_string(),
                    extra_lines,
                });
            }
        }
        Ok(extra_lines)
    }

    /// [`match_in_order`](Self::match_in_order) with patterns given as a text block
    pub fn match_in_order_block(&self, block: &str) -> Result<Vec<String>, LineMatchError> {
        self.match_in_order(&pattern_block(block))
    }

    /// [`match_any_order`](Self::match_any_order) with patterns given as a text block
    pub fn match_any_order_block(&self, block: &str) -> Result<(), LineMatchError> {
        self.match_any_order(&pattern_block(block))
    }
}

impl fmt::Display for LineMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<Vec<String>> for LineMatcher {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
