//! # ContextSynth CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates (`file.rs`, `folder.rs`,
//! `project.rs`, `main_tests.rs`). Each `.rs` file in `cli/tests/` is its own
//! test crate and pulls this module in with `mod common;`.
//!

// Different test crates use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// # Get ContextSynth Command (`contextsynth_cmd`)
///
/// An `assert_cmd::Command` for the compiled `contextsynth` binary. The user
/// configuration directory is pointed at an empty location and `RUST_LOG` is
/// cleared, so results do not depend on the machine running the tests.
///
/// ## Panics
/// Panics if the `contextsynth` binary cannot be found via `Command::cargo_bin`.
pub fn contextsynth_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("contextsynth").expect("Failed to find contextsynth binary for testing");
    cmd.env(
        "XDG_CONFIG_HOME",
        std::env::temp_dir().join("contextsynth-tests-no-config"),
    )
    .env_remove("RUST_LOG");
    cmd
}

/// Writes `files` (relative path, content) under `root`, creating parents.
pub fn create_mock_tree(root: &Path, files: &[(&str, &str)]) {
    for (file, content) in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write mock file");
    }
}

/// Runs the command, asserts success and parses stdout as JSON.
pub fn run_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be valid JSON")
}
