//! Integration tests for the `docmut` CLI binary.
//!
//! These tests invoke the compiled binary directly via `std::process::Command`.
//! Run with: `cargo test -p docmut --test cli_integration`

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn docmut_bin() -> &'static str {
    env!("CARGO_BIN_EXE_docmut")
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn truncate_corruption_matches_the_contract() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("sample.txt");
    let data: Vec<u8> = (0..100u8).collect();
    fs::write(&src, &data).expect("write source");

    let out = Command::new(docmut_bin())
        .args([
            src.to_str().expect("utf-8 path"),
            "--corrupt",
            "--mode",
            "truncate",
            "--bytes",
            "10",
        ])
        .output()
        .expect("failed to run docmut");
    assert!(out.status.success(), "exit code: {}", out.status);

    let produced = fs::read(dir.path().join("sample.corrupt.txt")).expect("read output");
    assert_eq!(produced.len(), 90);
    assert_eq!(produced, &data[10..]);
    assert_eq!(fs::read(&src).expect("read source"), data);
}

#[test]
fn seeded_rename_is_deterministic_across_runs() {
    let run_once = || {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("input.txt");
        fs::write(&src, b"stable content").expect("write source");
        let out = Command::new(docmut_bin())
            .args([src.to_str().expect("utf-8 path"), "--rename", "--seed", "42"])
            .output()
            .expect("failed to run docmut");
        assert!(out.status.success(), "exit code: {}", out.status);
        dir_entries(dir.path())
    };
    assert_eq!(run_once(), run_once());
}

#[test]
fn dry_run_creates_no_filesystem_entries() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("a.txt");
    fs::write(&src, b"hello").expect("write source");

    let out = Command::new(docmut_bin())
        .args([
            dir.path().to_str().expect("utf-8 path"),
            "--all",
            "--dry-run",
            "--seed",
            "1",
        ])
        .output()
        .expect("failed to run docmut");
    assert!(out.status.success(), "exit code: {}", out.status);
    assert_eq!(dir_entries(dir.path()), vec!["a.txt".to_string()]);

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.lines().count() >= 4,
        "expected planned actions on stdout, got: {stdout:?}"
    );
}

#[test]
fn json_report_is_valid() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("a.txt");
    fs::write(&src, b"hello").expect("write source");

    let out = Command::new(docmut_bin())
        .args([src.to_str().expect("utf-8 path"), "--corrupt", "--json"])
        .output()
        .expect("failed to run docmut");
    assert!(out.status.success(), "exit code: {}", out.status);

    let stdout = String::from_utf8_lossy(&out.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is not valid JSON");
    assert_eq!(json.get("dry_run").and_then(|v| v.as_bool()), Some(false));
    let stage = json
        .pointer("/files/0/stages/0/stage")
        .and_then(|v| v.as_str());
    assert_eq!(stage, Some("corrupt_header"));
}

#[test]
fn out_dir_receives_the_variants() {
    let dir = tempdir().expect("tempdir");
    let out_dir = dir.path().join("variants");
    let src = dir.path().join("a.txt");
    fs::write(&src, b"hello").expect("write source");

    let out = Command::new(docmut_bin())
        .args([
            src.to_str().expect("utf-8 path"),
            "--corrupt",
            "--out",
            out_dir.to_str().expect("utf-8 path"),
        ])
        .output()
        .expect("failed to run docmut");
    assert!(out.status.success(), "exit code: {}", out.status);
    assert!(out_dir.join("a.corrupt.txt").exists());
}

#[test]
fn unknown_mode_is_rejected() {
    let out = Command::new(docmut_bin())
        .args(["whatever.txt", "--corrupt", "--mode", "shred"])
        .output()
        .expect("failed to run docmut");
    assert!(!out.status.success(), "expected non-zero exit for bad mode");
}

#[test]
fn missing_paths_argument_is_an_error() {
    let out = Command::new(docmut_bin())
        .output()
        .expect("failed to run docmut");
    assert!(!out.status.success(), "expected non-zero exit without paths");
}
