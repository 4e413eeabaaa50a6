//! # ContextSynth CLI File Integration Tests
//!
//! File: cli/tests/file.rs
//!
//! ## Overview
//!
//! End-to-end tests for `contextsynth file`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_file_markdown_output() {
    let dir = tempdir().unwrap();
    create_mock_tree(
        dir.path(),
        &[(
            "worker.py",
            "import os\nimport requests\nfrom . import helpers\n\n\
             # Runs the job loop.\ndef run():\n    # TODO: retry on failure\n    pass\n",
        )],
    );

    contextsynth_cmd()
        .arg("file")
        .arg(dir.path().join("worker.py"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# File Summary: worker.py")
                .and(predicate::str::contains("**Type:** python"))
                .and(predicate::str::contains("- **function** `run` (line 6)"))
                .and(predicate::str::contains("  - Runs the job loop."))
                .and(predicate::str::contains("- [ ] retry on failure")),
        );
}

#[test]
fn test_file_json_fields() {
    let dir = tempdir().unwrap();
    create_mock_tree(
        dir.path(),
        &[(
            "notes.js",
            "// FIXME: BLOCKER: database schema missing\n// TODO: add tests\n",
        )],
    );

    let json = run_json(
        contextsynth_cmd()
            .args(["f", "-f", "json"])
            .arg(dir.path().join("notes.js")),
    );
    assert_eq!(json["file_type"], "javascript");
    assert_eq!(json["line_count"], 2);
    // A line with both kinds of keyword is only a blocker.
    assert_eq!(json["todos"], serde_json::json!(["add tests"]));
    assert_eq!(
        json["blockers"],
        serde_json::json!(["BLOCKER: database schema missing"])
    );
}

#[test]
fn test_empty_file() {
    let dir = tempdir().unwrap();
    create_mock_tree(dir.path(), &[("empty.rs", "")]);

    let json = run_json(
        contextsynth_cmd()
            .args(["file", "--format", "json"])
            .arg(dir.path().join("empty.rs")),
    );
    assert_eq!(json["line_count"], 0);
    assert_eq!(json["size_bytes"], 0);
    assert_eq!(json["imports"], serde_json::json!([]));
    assert_eq!(json["key_elements"], serde_json::json!([]));
    assert_eq!(json["description"], "empty.rs - 0 lines");
}

#[test]
fn test_file_text_output_to_file() {
    let dir = tempdir().unwrap();
    create_mock_tree(dir.path(), &[("run.sh", "#!/bin/bash\necho hi\n")]);
    let target = dir.path().join("reports/run.txt");

    contextsynth_cmd()
        .args(["file", "-f", "text", "-o"])
        .arg(&target)
        .arg(dir.path().join("run.sh"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary saved to"));

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("Type: shell\n"));
    assert!(written.contains("Lines: 2\n"));
}

#[test]
fn test_file_missing_path() {
    let dir = tempdir().unwrap();
    contextsynth_cmd()
        .arg("file")
        .arg(dir.path().join("absent.rs"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Path not found"));
}

#[test]
fn test_file_rejects_directory() {
    let dir = tempdir().unwrap();
    contextsynth_cmd()
        .arg("file")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected a file"));
}
