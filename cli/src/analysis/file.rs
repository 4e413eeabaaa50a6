//! # ContextSynth File Summarizer
//!
//! File: cli/src/analysis/file.rs
//!
//! ## Overview
//!
//! Wraps classification and signal extraction for one file into a
//! `FileSummary`. Size and line count are always populated, even when the
//! content is binary or cannot be read at all; only the extracted lists
//! degrade to empty.
//!
//! ## Architecture
//!
//! 1. Read raw bytes. On failure, fall back to the metadata size (or 0) and
//!    an empty text.
//! 2. Decode lossily, classify, and extract unless the bytes look binary.
//! 3. Describe the file with its top-of-file doc comment, or with a generic
//!    line naming the file and its element counts.
//! 4. Reduce imports to external dependency names.
//!
//! `summarize_file` is the public entry point and rejects missing paths and
//! directories. The folder aggregator calls `summarize_entry` directly, which
//! never fails, so one bad file cannot abort a scan.
//!
use crate::analysis::classifier;
use crate::analysis::extractor::{self, Extraction};
use crate::analysis::model::{CodeElement, FileSummary};
use crate::common::fs::io;
use crate::core::error::{Result, SynthError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// # Summarize File (`summarize_file`)
///
/// Builds the summary for a single file. The summary's `path` is `path` as
/// given.
///
/// ## Errors
///
/// * `SynthError::PathNotFound` when nothing exists at `path`.
/// * `SynthError::NotAFile` when `path` is a directory.
pub fn summarize_file(path: &Path) -> Result<FileSummary> {
    if !path.exists() {
        anyhow::bail!(SynthError::PathNotFound {
            path: path.display().to_string(),
        });
    }
    if path.is_dir() {
        anyhow::bail!(SynthError::NotAFile {
            path: path.display().to_string(),
        });
    }
    Ok(summarize_entry(path, path.display().to_string()))
}

/// Summarizes the file at `path`, recording it under `display_path`.
/// Unreadable files yield a zero-signal summary instead of an error.
pub fn summarize_entry(path: &Path, display_path: String) -> FileSummary {
    let (bytes, size_bytes) = match io::read_bytes(path) {
        Ok(bytes) => {
            let size = bytes.len() as u64;
            (bytes, size)
        }
        Err(e) => {
            warn!("Treating unreadable file as empty: {:#}", e);
            let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            (Vec::new(), size)
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let line_count = text.lines().count();
    let file_type = classifier::classify_file(path, &text);

    let extraction = if extractor::is_binary(&bytes) {
        debug!("Binary content in {}, skipping extraction", display_path);
        Extraction::default()
    } else {
        extractor::extract(&text, file_type)
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| display_path.clone());
    let description = extractor::file_doc_comment(&text, file_type)
        .unwrap_or_else(|| generic_description(&file_name, &extraction.elements, line_count));
    let dependencies = extractor::dependencies_from_imports(&extraction.imports, file_type);

    FileSummary {
        path: display_path,
        file_type,
        size_bytes,
        line_count,
        description,
        key_elements: extraction.elements,
        imports: extraction.imports,
        todos: extraction.todos,
        blockers: extraction.blockers,
        dependencies,
    }
}

/// `"<name> - <C> class(es) - <F> function(s) - <L> lines"`, zero counts omitted.
fn generic_description(file_name: &str, elements: &[CodeElement], line_count: usize) -> String {
    let classes = elements.iter().filter(|e| e.kind.is_class_like()).count();
    let functions = elements.len() - classes;
    let mut parts = vec![file_name.to_string()];
    if classes > 0 {
        parts.push(format!("{} class(es)", classes));
    }
    if functions > 0 {
        parts.push(format!("{} function(s)", functions));
    }
    parts.push(format!("{} lines", line_count));
    parts.join(" - ")
}
