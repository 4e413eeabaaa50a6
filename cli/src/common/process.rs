//! # ContextSynth Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Wrappers around `std::process::Command` for running external tools. The
//! only current caller is the version-control feed (`common::vcs`), which
//! treats every failure here as "no history available".
//!
//! ## Architecture
//!
//! - **`run_command_capture`**: Runs a command to completion in an optional
//!   working directory and returns its stdout. A spawn failure (e.g. the tool
//!   is not installed) carries context; a non-zero exit becomes
//!   `SynthError::ExternalCommand` with the exit status and stderr.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process;
//!
//! let stdout = process::run_command_capture("git", &["log", "--oneline"], Some(root))?;
//! ```
//!
use crate::core::error::{Result, SynthError};
use anyhow::Context;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// # Run Command and Capture Output (`run_command_capture`)
///
/// Executes `cmd` with `args`, waits for it to exit and returns stdout decoded
/// lossily as UTF-8. Stdin is closed so a tool that prompts cannot block.
///
/// ## Arguments
///
/// * `cmd` - Program name or path, resolved through `PATH`.
/// * `args` - Arguments passed verbatim.
/// * `cwd` - Working directory for the child; inherits ours when `None`.
///
/// ## Returns
///
/// * `Result<String>` - Captured stdout on a zero exit status.
pub fn run_command_capture(cmd: &str, args: &[&str], cwd: Option<&Path>) -> Result<String> {
    let command_line = format!("{} {}", cmd, args.join(" "));
    debug!("Running external command: {}", command_line);

    let mut command = Command::new(cmd);
    command.args(args).stdin(Stdio::null());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command
        .output()
        .with_context(|| format!("Failed to execute '{}'", command_line))?;

    if !output.status.success() {
        anyhow::bail!(SynthError::ExternalCommand {
            cmd: command_line,
            status: output.status.to_string(),
            output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_an_error() {
        let result = run_command_capture("contextsynth-no-such-program", &[], None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to execute 'contextsynth-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_in_working_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("marker.txt"), "").unwrap();
        let stdout = run_command_capture("ls", &[], Some(temp_dir.path())).unwrap();
        assert!(stdout.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_maps_to_external_command_error() {
        let err = run_command_capture("sh", &["-c", "echo oops >&2; exit 3"], None).unwrap_err();
        match err.downcast_ref::<SynthError>() {
            Some(SynthError::ExternalCommand { cmd, output, .. }) => {
                assert_eq!(cmd, "sh -c echo oops >&2; exit 3");
                assert_eq!(output, "oops");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
