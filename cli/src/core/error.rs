//! # ContextSynth Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout contextsynth. Very few
//! conditions are actually fatal: summarization always prefers a partial
//! answer over an abort, so unreadable files, missing project markers and
//! malformed manifests are recovered where they happen and only logged.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `SynthError`: A custom error enum using `thiserror` for the conditions that
//!   do reach the caller (unsupported paths, bad configuration, failed renders,
//!   failed external commands).
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.exists() {
//!     anyhow::bail!(SynthError::PathNotFound { path: path.display().to_string() });
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for contextsynth.
#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    #[error("Expected a file but found a directory: {path}")]
    NotAFile { path: String },

    #[error("Expected a directory but found a file: {path}")]
    NotADirectory { path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let not_found = SynthError::PathNotFound {
            path: "/tmp/missing".into(),
        };
        assert_eq!(not_found.to_string(), "Path not found: /tmp/missing");

        let config_err = SynthError::Config("max_key_files must be at least 1".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: max_key_files must be at least 1"
        );

        let not_dir = SynthError::NotADirectory {
            path: "notes.txt".into(),
        };
        assert_eq!(
            not_dir.to_string(),
            "Expected a directory but found a file: notes.txt"
        );
    }

    #[test]
    fn test_error_downcast_through_anyhow() {
        let err: anyhow::Error = SynthError::NotAFile {
            path: "src".into(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<SynthError>(),
            Some(SynthError::NotAFile { .. })
        ));
    }
}
