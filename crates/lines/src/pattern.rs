// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-style line patterns.
//!
//! A line matches a pattern when it is equal to it, or when the pattern,
//! read as a glob, matches the whole line:
//! - `*` - any run of characters, including `/`
//! - `?` - any single character
//! - `[seq]` / `[!seq]` - any character in / not in `seq`
//!
//! A `[` without a closing `]` is an ordinary character. Matching is
//! case-sensitive.

use glob::Pattern;
use std::fmt;

/// A compiled line pattern
#[derive(Clone, Debug)]
pub struct LinePattern {
    raw: String,
    glob: Option<Pattern>,
}

impl LinePattern {
    /// Compile `raw`. Text that is not a valid glob still matches literally.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let glob = Pattern::new(&to_glob(&raw)).ok();
        Self { raw, glob }
    }

    /// The pattern text as given
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check if `line` equals the pattern literally
    pub fn is_exact(&self, line: &str) -> bool {
        line == self.raw
    }

    /// Check if the glob form of the pattern matches all of `line`
    pub fn is_glob_match(&self, line: &str) -> bool {
        self.glob.as_ref().is_some_and(|glob| glob.matches(line))
    }

    /// Check if `line` satisfies the pattern
    pub fn matches(&self, line: &str) -> bool {
        self.is_exact(line) || self.is_glob_match(line)
    }
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for LinePattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LinePattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Check if `line` satisfies the shell-style `pattern`
pub fn fnmatch(line: &str, pattern: &str) -> bool {
    LinePattern::new(pattern).matches(line)
}

/// Rewrite shell pattern text into `glob` syntax.
///
/// `glob` reserves `**` for whole path components, so any run of stars
/// becomes one. An unclosed `[` becomes the class `[[]`.
fn to_glob(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            ch => out.push(ch),
        }
        i += 1;
    }
    out
}

// A `]` directly after `[` or `[!` is a member of the class, not its end.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let first = match chars.get(open + 1) {
        Some('!') => open + 2,
        _ => open + 1,
    };
    let search = first + 1;
    chars
        .get(search..)?
        .iter()
        .position(|&ch| ch == ']')
        .map(|offset| search + offset)
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
