//! # ContextSynth Renderer
//!
//! File: cli/src/render/mod.rs
//!
//! ## Overview
//!
//! Turns any `Summary` into text in one of three formats:
//!
//! - **json**: pretty-printed structured data. Every field is serialized and
//!   the detail level is ignored, so the output parses back into an equal
//!   summary.
//! - **markdown**: sections per list, truncated per `DetailLevel` (see
//!   `limits`).
//! - **text**: a short `Key: value` digest.
//!
//! Rendering is pure: the same summary, format and detail level always give
//! byte-identical output. Every rendering ends with a newline.
//!
//! ## Usage
//!
//! ```rust
//! let text = render::render(&summary.into(), OutputFormat::Markdown, DetailLevel::Brief)?;
//! ```
//!
pub mod limits;
pub mod markdown;
pub mod text;

use crate::analysis::model::{DetailLevel, Summary};
use crate::core::error::{Result, SynthError};
use clap::ValueEnum;
use limits::Limits;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured data, lossless.
    Json,
    /// Human-readable sections.
    #[default]
    Markdown,
    /// Plain key/value digest.
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
        })
    }
}

/// # Render (`render`)
///
/// ## Errors
///
/// `SynthError::Render` if the JSON serializer fails. The text formats only
/// write into a `String`.
pub fn render(summary: &Summary, format: OutputFormat, detail: DetailLevel) -> Result<String> {
    let limits = Limits::for_level(detail);
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(summary)
                .map_err(|e| SynthError::Render(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Markdown => match summary {
            Summary::File(s) => markdown::render_file(s, &limits),
            Summary::Folder(s) => markdown::render_folder(s, &limits),
            Summary::Project(s) => markdown::render_project(s, &limits),
        },
        OutputFormat::Text => match summary {
            Summary::File(s) => text::render_file(s),
            Summary::Folder(s) => text::render_folder(s),
            Summary::Project(s) => text::render_project(s),
        },
    }
}

/// Last path component, or the whole path when there is none (e.g. `.`).
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
