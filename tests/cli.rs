//! Runs the compiled binary: malformed flags must be reported instead of
//! being replaced by defaults, and exports must all happen.

use std::path::Path;
use std::process::{Command, Output};

fn work_hours(directory: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_work-hours"))
        .current_dir(directory)
        .env("RUST_APP_LOG", "info")
        .args(args)
        .output()
        .expect("the binary should run")
}

#[test]
fn test_sum_records_to_history() {
    let directory = tempfile::tempdir().unwrap();

    let output = work_hours(
        directory.path(),
        &["sum", "--days", "2", "--minutes", "120", "--history", "history.json"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("18.00 h"), "unexpected output: {}", stdout);

    let history = std::fs::read_to_string(directory.path().join("history.json")).unwrap();
    assert!(history.contains("18.00 h total, around 2 work days"));
}

#[test]
fn test_malformed_days_flag_is_rejected() {
    let directory = tempfile::tempdir().unwrap();

    let output = work_hours(
        directory.path(),
        &["sum", "--days", "abc", "--minutes", "30", "--history", "history.json"],
    );

    assert!(!output.status.success());
    assert!(!directory.path().join("history.json").exists());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("expects a whole number"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_malformed_hours_flag_is_rejected() {
    let directory = tempfile::tempdir().unwrap();

    let output = work_hours(
        directory.path(),
        &[
            "range",
            "--start",
            "2025-09-01",
            "--end",
            "2025-09-05",
            "--hours",
            "abc",
            "--history",
            "history.json",
        ],
    );

    assert!(!output.status.success());
    assert!(!directory.path().join("history.json").exists());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("expects a number"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_malformed_vacation_flag_is_rejected() {
    let directory = tempfile::tempdir().unwrap();

    let output = work_hours(
        directory.path(),
        &[
            "range",
            "--start",
            "2025-09-01",
            "--end",
            "2025-09-05",
            "--vacation",
            "two",
            "--history",
            "history.json",
        ],
    );

    assert!(!output.status.success());
    assert!(!directory.path().join("history.json").exists());
}

#[test]
fn test_history_exports_spreadsheet_and_document_together() {
    let directory = tempfile::tempdir().unwrap();

    let output = work_hours(
        directory.path(),
        &["sum", "--days", "1", "--minutes", "0", "--history", "history.json"],
    );
    assert!(output.status.success());

    let output = work_hours(
        directory.path(),
        &[
            "history",
            "--history",
            "history.json",
            "--spreadsheet",
            "history.csv",
            "--document",
            "history.txt",
        ],
    );
    assert!(output.status.success());

    let spreadsheet = std::fs::read_to_string(directory.path().join("history.csv")).unwrap();
    assert!(spreadsheet.starts_with("kind,timestamp,summary\n"));
    assert!(spreadsheet.contains("manual sum"));

    let document = std::fs::read_to_string(directory.path().join("history.txt")).unwrap();
    assert!(document.starts_with("Page 1\n"));
    assert!(document.contains("8.00 h total, around 1 work days"));
}
