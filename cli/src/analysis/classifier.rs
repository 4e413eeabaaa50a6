//! # ContextSynth Classifier
//!
//! File: cli/src/analysis/classifier.rs
//!
//! ## Overview
//!
//! Infers a file's `FileType` from its name and content, and a project's
//! `ProjectType` from the marker files present at its root. Both functions are
//! pure: they work on a path plus a content sample, or on a `RootListing`
//! collected beforehand, and never fail. No rule matching means `Unknown` or
//! `Generic`.
//!
//! ## Architecture
//!
//! File classification, in order:
//!
//! 1. Well-known extension-less names (`Dockerfile`, `Makefile`, `LICENSE`, ...)
//! 2. Extension lookup (case-insensitive). `.h` is ambiguous between C and
//!    C++ and is resolved by sniffing the content for C++-only syntax.
//! 3. Content sniffing for missing or unrecognized extensions: the shebang
//!    interpreter, then a leading HTML doctype or `<html>` tag.
//!
//! Project classification walks `PROJECT_MARKERS`, an ordered table of
//! (marker path, optional content hint, type). The first row whose marker is
//! present, and whose hint (if any) occurs in the marker's content, wins. No
//! scoring across rows.
//!
//! ## Usage
//!
//! ```rust
//! use crate::analysis::classifier;
//!
//! let file_type = classifier::classify_file(Path::new("src/main.rs"), &text);
//!
//! let listing = classifier::RootListing::from_dir(root);
//! let project_type = classifier::classify_project(&listing);
//! ```
//!
use crate::analysis::model::{FileType, ProjectType};
use crate::common::fs::io;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// # Project Marker (`ProjectMarker`)
///
/// One row of the project classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectMarker {
    /// Path relative to the project root, `/`-separated.
    pub path: &'static str,
    /// Literal that must occur in the marker file (case-insensitive).
    pub content_hint: Option<&'static str>,
    pub project_type: ProjectType,
}

/// Marker table in priority order: most framework-specific first.
pub const PROJECT_MARKERS: &[ProjectMarker] = &[
    ProjectMarker {
        path: "src-tauri/tauri.conf.json",
        content_hint: None,
        project_type: ProjectType::Tauri,
    },
    ProjectMarker {
        path: "package.json",
        content_hint: Some("\"electron\""),
        project_type: ProjectType::Electron,
    },
    ProjectMarker {
        path: "package.json",
        content_hint: Some("\"react-native\""),
        project_type: ProjectType::ReactNative,
    },
    ProjectMarker {
        path: "package.json",
        content_hint: Some("\"react\""),
        project_type: ProjectType::React,
    },
    ProjectMarker {
        path: "package.json",
        content_hint: None,
        project_type: ProjectType::Node,
    },
    ProjectMarker {
        path: "Cargo.toml",
        content_hint: None,
        project_type: ProjectType::Rust,
    },
    ProjectMarker {
        path: "pyproject.toml",
        content_hint: None,
        project_type: ProjectType::Python,
    },
    ProjectMarker {
        path: "requirements.txt",
        content_hint: None,
        project_type: ProjectType::Python,
    },
    ProjectMarker {
        path: "setup.py",
        content_hint: None,
        project_type: ProjectType::Python,
    },
    ProjectMarker {
        path: "go.mod",
        content_hint: None,
        project_type: ProjectType::Go,
    },
];

/// # Root Listing (`RootListing`)
///
/// The marker files present at a project root, with their text content.
/// Built from disk with `from_dir`, or from literal entries in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootListing {
    markers: BTreeMap<String, String>,
}

impl RootListing {
    /// Collects every marker path named in `PROJECT_MARKERS` that exists under `root`.
    ///
    /// A marker that exists but cannot be read is recorded with empty content,
    /// so it still matches rows without a content hint.
    pub fn from_dir(root: &Path) -> Self {
        let mut listing = Self::default();
        for marker in PROJECT_MARKERS {
            if listing.markers.contains_key(marker.path) {
                continue;
            }
            let candidate = root.join(marker.path);
            if !candidate.is_file() {
                continue;
            }
            let content = io::read_text_lossy(&candidate).unwrap_or_else(|e| {
                warn!("Could not read marker file {}: {:#}", candidate.display(), e);
                String::new()
            });
            listing.markers.insert(marker.path.to_string(), content);
        }
        debug!(
            "Root listing for {}: {:?}",
            root.display(),
            listing.markers.keys().collect::<Vec<_>>()
        );
        listing
    }

    /// Builds a listing from `(path, content)` pairs.
    #[cfg(test)]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            markers: entries
                .into_iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn contains(&self, path: &str) -> bool {
        self.markers.contains_key(path)
    }

    pub fn content(&self, path: &str) -> Option<&str> {
        self.markers.get(path).map(String::as_str)
    }
}

/// # Classify Project (`classify_project`)
///
/// Returns the type of the first `PROJECT_MARKERS` row satisfied by `listing`,
/// or `ProjectType::Generic`.
pub fn classify_project(listing: &RootListing) -> ProjectType {
    PROJECT_MARKERS
        .iter()
        .find(|marker| marker_matches(marker, listing))
        .map(|marker| {
            debug!(
                "Project marker '{}' matched -> {}",
                marker.path, marker.project_type
            );
            marker.project_type
        })
        .unwrap_or(ProjectType::Generic)
}

fn marker_matches(marker: &ProjectMarker, listing: &RootListing) -> bool {
    match (listing.content(marker.path), marker.content_hint) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(content), Some(hint)) => content.to_lowercase().contains(hint),
    }
}

// --- File classification ---

/// Extension-less file names with a fixed type.
const WELL_KNOWN_NAMES: &[(&str, FileType)] = &[
    ("dockerfile", FileType::Config),
    ("makefile", FileType::Config),
    ("procfile", FileType::Config),
    (".env", FileType::Config),
    ("license", FileType::Text),
    ("readme", FileType::Text),
    ("changelog", FileType::Text),
];

/// Maps a lowercase extension to its type. `None` for `h`, which needs sniffing.
fn type_for_extension(ext: &str) -> Option<FileType> {
    let file_type = match ext {
        "py" | "pyw" | "pyi" => FileType::Python,
        "js" | "jsx" | "mjs" | "cjs" => FileType::JavaScript,
        "ts" | "tsx" | "mts" | "cts" => FileType::TypeScript,
        "json" => FileType::Json,
        "md" | "markdown" => FileType::Markdown,
        "yaml" | "yml" => FileType::Yaml,
        "html" | "htm" => FileType::Html,
        "css" | "scss" | "sass" | "less" => FileType::Css,
        "rs" => FileType::Rust,
        "go" => FileType::Go,
        "java" => FileType::Java,
        "c" => FileType::C,
        "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => FileType::Cpp,
        "sh" | "bash" | "zsh" => FileType::Shell,
        "toml" | "ini" | "cfg" | "conf" | "env" => FileType::Config,
        "txt" | "rst" => FileType::Text,
        _ => return None,
    };
    Some(file_type)
}

/// # Classify File (`classify_file`)
///
/// Determines the `FileType` of `path`, consulting `content_sample` only when
/// the name alone is ambiguous or unrecognized.
///
/// ## Arguments
///
/// * `path` - The file path. Only the final component is inspected.
/// * `content_sample` - Leading text of the file. May be empty.
///
/// ## Returns
///
/// * `FileType` - `FileType::Unknown` when no rule matches.
pub fn classify_file(path: &Path, content_sample: &str) -> FileType {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if let Some((_, file_type)) = WELL_KNOWN_NAMES.iter().find(|(known, _)| *known == name) {
        return *file_type;
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("h") => sniff_header(content_sample),
        Some(ext) => type_for_extension(ext).unwrap_or_else(|| sniff_content(content_sample)),
        None => sniff_content(content_sample),
    }
}

/// Resolves a `.h` header to C++ when it uses C++-only syntax.
fn sniff_header(content: &str) -> FileType {
    const CPP_HINTS: &[&str] = &["class ", "namespace ", "template<", "template <", "std::"];
    if CPP_HINTS.iter().any(|hint| content.contains(hint)) {
        FileType::Cpp
    } else {
        FileType::C
    }
}

fn sniff_content(content: &str) -> FileType {
    let first_line = content.lines().next().unwrap_or("").trim();
    if let Some(interpreter) = shebang_interpreter(first_line) {
        if interpreter.starts_with("python") {
            return FileType::Python;
        }
        if matches!(interpreter, "node" | "nodejs" | "deno" | "bun") {
            return FileType::JavaScript;
        }
        if matches!(interpreter, "sh" | "bash" | "zsh" | "dash" | "ksh") {
            return FileType::Shell;
        }
    }

    let head = content.trim_start().to_lowercase();
    if head.starts_with("<!doctype html") || head.starts_with("<html") {
        return FileType::Html;
    }
    FileType::Unknown
}

/// Extracts the interpreter name from a shebang line, looking through `env`.
fn shebang_interpreter(line: &str) -> Option<&str> {
    let command = line.strip_prefix("#!")?.trim();
    let mut words = command.split_whitespace();
    let program = words.next()?;
    let program = program.rsplit('/').next().unwrap_or(program);
    if program == "env" {
        // Skip env flags such as `-S`.
        words.find(|w| !w.starts_with('-'))
    } else {
        Some(program)
    }
}
