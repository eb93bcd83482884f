//! Exit statuses and error output of the `suffix` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn suffix(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_suffix"))
        .args(args)
        .stdin(if stdin.is_empty() {
            Stdio::null()
        } else {
            Stdio::piped()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    if let Some(mut input) = child.stdin.take() {
        input.write_all(stdin).unwrap();
    }
    child.wait_with_output().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_pattern_prints_usage() {
    let output = suffix(&[], b"");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_missing_rule_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let path = path.to_str().unwrap();

    let output = suffix(&["-f", path], b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with(&format!("{}: ", path)));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let path = path.to_str().unwrap();

    let output = suffix(&["example.com", path], b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with(&format!("{}: ", path)));
}

#[test]
fn test_invalid_literal_pattern() {
    let output = suffix(&["."], b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid suffix pattern"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_filters_stdin() {
    let output = suffix(
        &["golang.org"],
        b"blog.golang.org\namigolang.org\ngolang.org\n",
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "blog.golang.org\ngolang.org\n"
    );
}

#[test]
fn test_rule_file_with_undecodable_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.txt");
    std::fs::write(&path, b"caf\xe9.com\ngolang.org\n").unwrap();

    let output = suffix(
        &["-f", path.to_str().unwrap()],
        b"caf\xe9.com\nblog.golang.org\n",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "blog.golang.org\n");
}
