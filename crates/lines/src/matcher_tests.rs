// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;

fn matcher(lines: &[&str]) -> LineMatcher {
    LineMatcher::new(lines.iter().copied())
}

#[test]
fn test_to_text_round_trips_lines() {
    let text = "first\nsecond\n\nfourth";
    let lm = LineMatcher::from_text(text);
    assert_eq!(lm.lines().len(), 4);
    assert_eq!(lm.to_text(), text);
    assert_eq!(lm.to_string(), text);
}

#[test]
fn test_reset_replaces_lines() {
    let mut lm = matcher(&["a"]);
    lm.reset(["b", "c"]);
    assert_eq!(lm.lines(), ["b", "c"]);
}

#[test]
fn test_find_lines_after() {
    let lm = matcher(&["x", "START", "y", "z"]);
    assert_eq!(lm.find_lines_after("START").unwrap(), ["y", "z"]);
}

#[test]
fn test_find_lines_after_glob_uses_first_match() {
    let lm = matcher(&["== one ==", "a", "== two ==", "b"]);
    assert_eq!(lm.find_lines_after("== * ==").unwrap(), ["a", "== two ==", "b"]);
}

#[test]
fn test_find_lines_after_last_line_is_empty() {
    let lm = matcher(&["x", "END"]);
    assert!(lm.find_lines_after("END").unwrap().is_empty());
}

#[test]
fn test_find_lines_after_missing() {
    let lm = matcher(&["x", "y"]);
    assert_eq!(
        lm.find_lines_after("START").unwrap_err(),
        LineMatchError::LineNotFound {
            pattern: "START".to_string()
        }
    );
}

#[rstest]
#[case(&["a", "b"], &["b", "a"])]
#[case(&["a", "b"], &["a", "b"])]
#[case(&["x", "a", "b"], &["*b", "?"])]
#[case(&["a"], &["a", "a"])]
#[case(&[], &[])]
#[case(&["a"], &[])]
fn test_match_any_order_succeeds(#[case] lines: &[&str], #[case] patterns: &[&str]) {
    assert!(matcher(lines).match_any_order(patterns).is_ok());
}

#[test]
fn test_match_any_order_reports_first_missing() {
    let lm = matcher(&["a", "b"]);
    let err = lm.match_any_order(&["a", "c", "d"]).unwrap_err();
    assert_eq!(err.to_string(), "line \"c\" not found in output");
}

#[test]
fn test_match_in_order_empty_patterns() {
    assert_eq!(
        matcher(&[]).match_in_order::<&str>(&[]).unwrap(),
        Vec::<String>::new()
    );
    assert!(matcher(&["x"]).match_in_order::<&str>(&[]).is_ok());
}

#[test]
fn test_match_in_order_subsequence() {
    let lm = matcher(&["x", "a", "y", "b", "z"]);
    let extra = lm.match_in_order(&["a", "b"]).unwrap();
    // "z" is never examined.
    assert_eq!(extra, vec!["x", "y"]);
}

#[test]
fn test_match_in_order_wrong_order_fails() {
    let lm = matcher(&["b", "a"]);
    let err = lm.match_in_order(&["a", "b"]).unwrap_err();
    // "a" consumes both lines, leaving nothing for "b".
    assert_eq!(
        err,
        LineMatchError::Unmatched {
            pattern: "b".to_string(),
            extra_lines: vec!["b".to_string()],
        }
    );
}

#[test]
fn test_match_in_order_consumes_lines() {
    let lm = matcher(&["item", "other"]);
    let err = lm.match_in_order(&["item", "item"]).unwrap_err();
    assert_eq!(err.pattern(), "item");
}

#[test]
fn test_match_in_order_is_greedy() {
    // The loose first pattern takes "a1", and "a1" cannot be found again.
    let lm = matcher(&["a1", "b"]);
    assert!(lm.match_in_order(&["a*", "a1"]).is_err());
    assert!(lm.match_in_order(&["a1", "b"]).is_ok());
}

#[test]
fn test_match_in_order_glob_and_exact() {
    let lm = LineMatcher::from_text(
        "platform linux\ncollected 3 items\n\ntest_x.py ..F\n\n=== 1 failed, 2 passed in 0.01 seconds ===",
    );
    lm.match_in_order(&["collected 3 items", "test_x.py*", "*1 failed, 2 passed*"])
        .unwrap();
}

#[test]
fn test_match_in_order_literal_brackets() {
    let lm = matcher(&["values[0", "done"]);
    assert!(lm.match_in_order(&["values[0", "done"]).is_ok());
}

#[test]
fn test_match_in_order_failure_message() {
    let lm = matcher(&["one", "two"]);
    let err = lm.match_in_order(&["three"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "remains unmatched: \"three\", skipped 2 line(s)"
    );
}

#[test]
fn test_block_helpers() {
    let lm = matcher(&["header", "*** 2 passed ***", "footer"]);
    lm.match_in_order_block(
        r#"
        header
        *2 passed*
        "#,
    )
    .unwrap();
    lm.match_any_order_block("footer\nheader").unwrap();
}

proptest! {
    #[test]
    fn prop_lines_match_themselves_in_order(lines in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let lm = LineMatcher::new(lines.clone());
        prop_assert_eq!(lm.match_in_order(&lines).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn prop_extra_lines_are_skipped_prefix(
        lines in prop::collection::vec("[a-z]{1,8}", 1..20),
        pick in 0usize..20,
    ) {
        let index = pick % lines.len();
        let lm = LineMatcher::new(lines.clone());
        let target = lines[index].clone();
        let first = lines.iter().position(|l| *l == target).unwrap_or(index);

        let extra = lm.match_in_order(&[target]).unwrap();
        prop_assert_eq!(extra, lines[..first].to_vec());
    }
}
