// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern lists written as indented text blocks.

/// Split a text block into patterns.
///
/// Leading and trailing blank lines are dropped and the common indentation
/// is removed, so raw string literals can be indented with the test code.
pub fn pattern_block(text: &str) -> Vec<String> {
    fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }

    let lines: Vec<&str> = text.lines().collect();

    let Some(start) = lines.iter().position(|l| !is_blank(l)) else {
        return Vec::new();
    };
    let end = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(start);
    let body = &lines[start..=end];

    let indent = body
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| l.get(indent..).unwrap_or_else(|| l.trim_start()).to_string())
        .collect()
}
