// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;
use std::thread;

fn args(n: u64) -> Payload {
    let mut payload = Payload::new();
    payload.insert("n".to_string(), json!(n));
    payload
}

#[test]
fn test_record_and_retrieve() {
    let log = CallLog::new();

    log.record("session_start", &args(7));

    assert_eq!(log.len(), 1);
    let calls = log.calls();
    assert_eq!(calls[0].seq, 0);
    assert_eq!(calls[0].name, "session_start");
    assert_eq!(calls[0].arg("n"), Some(&json!(7)));
}

#[rstest]
#[case(&["a", "c"], &[0, 2, 3])]
#[case(&["b"], &[1])]
#[case(&["c", "a"], &[0, 2, 3])]
#[case(&["missing"], &[])]
#[case(&[], &[])]
fn test_filter_by_name_preserves_order(#[case] names: &[&str], #[case] expected: &[u64]) {
    let log = CallLog::new();
    log.record("a", &args(0));
    log.record("b", &args(1));
    log.record("c", &args(2));
    log.record("a", &args(3));

    let seqs: Vec<u64> = log.filter_by_name(names).iter().map(|c| c.seq).collect();
    assert_eq!(seqs, expected);
}

#[test]
fn test_remove_first() {
    let log = CallLog::new();
    log.record("a", &args(0));
    log.record("b", &args(1));
    log.record("a", &args(2));

    let removed = log.remove_first("a").unwrap();
    assert_eq!(removed.seq, 0);
    assert_eq!(log.len(), 2);
    assert!(log.remove_first("missing").is_none());
}

#[test]
fn test_clear_keeps_sequence_numbers_increasing() {
    let log = CallLog::new();
    log.record("a", &args(0));
    log.clear();
    assert!(log.is_empty());

    log.record("b", &args(1));
    assert_eq!(log.calls()[0].seq, 1);
}

#[test]
fn test_clone_shares_state() {
    let log = CallLog::new();
    let clone = log.clone();

    clone.record("a", &args(0));
    assert_eq!(log.len(), 1);
}

#[test]
fn test_thread_safety() {
    let log = CallLog::new();
    let mut handles = vec![];

    for t in 0..4 {
        let log = log.clone();
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                log.record("hook", &args(t * 100 + i));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let seqs: Vec<u64> = log.calls().iter().map(|c| c.seq).collect();
    assert_eq!(seqs, (0..100).collect::<Vec<u64>>());
}

#[test]
fn test_with_file_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calls.jsonl");

    let log = CallLog::with_file(&path).unwrap();
    log.record("a", &args(1));
    log.record("b", &args(2));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let parsed: RecordedCall = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(parsed.name, "b");
    assert_eq!(parsed.seq, 1);
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_file_mirror_keeps_calls_in_memory() {
    // Every write to /dev/full fails with ENOSPC.
    let log = CallLog::with_file(Path::new("/dev/full")).unwrap();
    log.record("a", &args(1));
    log.record("b", &args(2));

    let seqs: Vec<u64> = log.calls().iter().map(|c| c.seq).collect();
    assert_eq!(seqs, vec![0, 1]);
}

#[test]
fn test_write_jsonl_reports_errors() {
    struct FullWriter;
    impl Write for FullWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let call = RecordedCall {
        seq: 0,
        name: "a".to_string(),
        payload: args(1),
    };
    assert!(write_jsonl(&mut FullWriter, &call).is_err());

    let mut out = Vec::new();
    write_jsonl(&mut out, &call).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"seq\":0,\"name\":\"a\",\"payload\":{\"n\":1}}\n"
    );
}

#[test]
fn test_intercepts_as_interceptor() {
    let log = CallLog::new();
    log.before_call("hook", &args(3));
    assert_eq!(log.calls()[0].name, "hook");
}

proptest! {
    #[test]
    fn prop_log_matches_record_order(names in prop::collection::vec("[a-c]", 0..40)) {
        let log = CallLog::new();
        for name in &names {
            log.record(name, &Payload::new());
        }

        let recorded: Vec<String> = log.calls().into_iter().map(|c| c.name).collect();
        prop_assert_eq!(recorded, names);
    }
}
