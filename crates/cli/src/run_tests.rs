// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use rstest::rstest;

fn result_with_stdout(text: &str) -> RunResult {
    RunResult {
        exit_code: Some(0),
        stdout: LineMatcher::from_text(text),
        stderr: LineMatcher::default(),
        duration: Duration::ZERO,
    }
}

#[test]
fn test_parse_outcomes_uses_last_summary() {
    let result = result_with_stdout(
        "collected 4 items\n\
         in 0 seconds 1 warnings\n\
         === 3 passed, 1 skipped in 0.12 seconds ===\n\
         trailing",
    );

    let outcomes = result.parse_outcomes().unwrap();
    assert_eq!(outcomes.get("passed"), Some(&3));
    assert_eq!(outcomes.get("skipped"), Some(&1));
    assert_eq!(outcomes.len(), 2);
}

#[test]
fn test_parse_outcomes_none_without_summary() {
    let result = result_with_stdout("no summary here\n2 passed");
    assert!(result.parse_outcomes().is_none());
}

#[rstest]
#[case(&[("passed", 3), ("skipped", 1)], true)]
#[case(&[("passed", 3), ("skipped", 1), ("failed", 0)], true)]
#[case(&[("passed", 3)], false)]
#[case(&[("passed", 2), ("skipped", 1)], false)]
fn test_assert_outcomes(#[case] expected: &[(&str, u64)], #[case] ok: bool) {
    let result = result_with_stdout("=== 3 passed, 1 skipped in 0.12 seconds ===");
    assert_eq!(result.assert_outcomes(expected).is_ok(), ok);
}

#[test]
fn test_assert_outcomes_without_summary() {
    let result = result_with_stdout("");
    assert!(matches!(
        result.assert_outcomes(&[]),
        Err(RunError::NoSummary)
    ));
}

#[test]
fn test_decode_invalid_utf8() {
    let text = decode(&[0x66, 0xff, 0x6f]);
    assert!(text.starts_with("INTERNAL not-utf8-decodeable"));
}

#[cfg(unix)]
#[test]
fn test_run_command_captures_output() {
    let result = run_command(
        Path::new("/bin/sh"),
        ["-c", "echo out1; echo out2; echo err >&2; exit 3"],
        None,
    )
    .unwrap();

    assert_eq!(result.exit_code, Some(3));
    assert!(!result.success());
    result.stdout.match_in_order(&["out1", "out2"]).unwrap();
    assert_eq!(result.stderr.lines(), ["err"]);
}

#[cfg(unix)]
#[test]
fn test_run_command_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_command(Path::new("/bin/sh"), ["-c", "pwd"], Some(dir.path())).unwrap();

    assert!(result.success());
    let name = dir.path().file_name().unwrap().to_string_lossy().to_string();
    result.stdout.match_any_order(&[format!("*{}", name)]).unwrap();
}

#[test]
fn test_run_command_missing_program() {
    let err = run_command(Path::new("/nonexistent/host"), ["--version"], None).unwrap_err();
    assert!(matches!(err, RunError::Spawn { .. }));
}
