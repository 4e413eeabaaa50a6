//! # ContextSynth Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output operations needed
//! around the summarization engine. It provides thin wrappers around `std::fs`
//! that attach context to I/O errors.
//!
//! ## Architecture
//!
//! - **`read_bytes`**: Reads a whole file as raw bytes. The file summarizer uses
//!   this so binary content can be detected before any text decoding.
//! - **`read_text_lossy`**: Reads a file and decodes it as UTF-8, replacing
//!   invalid sequences instead of failing. Used for manifests and READMEs.
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and
//!   rejects paths that exist but are not directories.
//! - **`write_string_to_file`**: Writes rendered output, creating the parent
//!   directory first. Overwrites existing files.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let raw = io::read_bytes(Path::new("src/main.rs"))?;
//! io::write_string_to_file(Path::new("out/summary.md"), &rendered)?;
//! ```
//!
use crate::core::error::{Result, SynthError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates it, including any
/// necessary parent directories (similar to `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(SynthError::NotADirectory {
            path: path.display().to_string(),
        });
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file as raw bytes.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Reads a file and decodes it as UTF-8, substituting U+FFFD for invalid bytes.
///
/// # Errors
///
/// Returns an `Err` only when the file cannot be opened or read; decoding
/// never fails.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// The parent directory is created first when missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // An empty parent means a bare file name in the current directory.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
