//! # ContextSynth Version-Control Feed (`common::vcs`)
//!
//! File: cli/src/common/vcs.rs
//!
//! ## Overview
//!
//! Supplies the optional recent-change strings folded into a project summary.
//! The feed is `git log --oneline`, one "hash message" string per commit,
//! newest first. Absence of git, a directory that is not a repository, or any
//! other failure simply yields an empty list.
//!
use crate::common::process;
use std::path::Path;
use tracing::debug;

/// Returns up to `max_entries` one-line commit descriptions for `root`.
pub fn recent_changes(root: &Path, max_entries: usize) -> Vec<String> {
    if max_entries == 0 {
        return Vec::new();
    }
    let count = max_entries.to_string();
    match process::run_command_capture("git", &["log", "--oneline", "-n", &count], Some(root)) {
        Ok(stdout) => parse_oneline_log(&stdout, max_entries),
        Err(e) => {
            debug!("No recent changes for {}: {:#}", root.display(), e);
            Vec::new()
        }
    }
}

fn parse_oneline_log(stdout: &str, max_entries: usize) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max_entries)
        .map(String::from)
        .collect()
}
