//! # ContextSynth Data Model
//!
//! File: cli/src/analysis/model.rs
//!
//! ## Overview
//!
//! The value types produced by the summarization engine and consumed by the
//! renderer. Every summary is built fresh for each call and returned by value;
//! nothing here is mutated once the producing aggregator hands it back.
//!
//! ## Architecture
//!
//! - Closed tag sets: `DetailLevel`, `FileType`, `ProjectType`, `ElementKind`.
//! - Records: `CodeElement` → `FileSummary` → `FolderSummary` / `ProjectSummary`.
//! - `Summary`: the union handed to the renderer.
//!
//! All records derive `Serialize` + `Deserialize`, so the structured-data
//! rendering can be parsed back into an equal value.
//!
//! Ordered list fields keep first-seen order. Lists whose entries are names or
//! paths (imports, dependencies, technologies, entry points) never contain
//! duplicates; `push_unique` is the helper every producer uses for that.
//!
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Verbosity of rendered output. Chosen once per invocation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// One-liners; code elements are dropped entirely.
    Brief,
    /// Key points.
    #[default]
    Standard,
    /// Everything that was found.
    Detailed,
}

impl DetailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Brief => "brief",
            DetailLevel::Standard => "standard",
            DetailLevel::Detailed => "detailed",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized source categories.
///
/// Declaration order doubles as the sort order for the per-folder type
/// histogram, which keeps rendered histograms stable across runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Python,
    JavaScript,
    TypeScript,
    Json,
    Markdown,
    Yaml,
    Html,
    Css,
    Rust,
    Go,
    Java,
    C,
    Cpp,
    Shell,
    Config,
    Text,
    Unknown,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Python => "python",
            FileType::JavaScript => "javascript",
            FileType::TypeScript => "typescript",
            FileType::Json => "json",
            FileType::Markdown => "markdown",
            FileType::Yaml => "yaml",
            FileType::Html => "html",
            FileType::Css => "css",
            FileType::Rust => "rust",
            FileType::Go => "go",
            FileType::Java => "java",
            FileType::C => "c",
            FileType::Cpp => "cpp",
            FileType::Shell => "shell",
            FileType::Config => "config",
            FileType::Text => "text",
            FileType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized project ecosystems. `Generic` when no marker file matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Tauri,
    Electron,
    ReactNative,
    React,
    Node,
    Rust,
    Python,
    Go,
    #[default]
    Generic,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Tauri => "tauri",
            ProjectType::Electron => "electron",
            ProjectType::ReactNative => "react_native",
            ProjectType::React => "react",
            ProjectType::Node => "node",
            ProjectType::Rust => "rust",
            ProjectType::Python => "python",
            ProjectType::Go => "go",
            ProjectType::Generic => "generic",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a detected declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Function,
    Class,
    Struct,
    Enum,
    Trait,
    Interface,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Function => "function",
            ElementKind::Class => "class",
            ElementKind::Struct => "struct",
            ElementKind::Enum => "enum",
            ElementKind::Trait => "trait",
            ElementKind::Interface => "interface",
        }
    }

    /// True for every type-like kind (class, struct, enum, trait, interface).
    pub fn is_class_like(&self) -> bool {
        !matches!(self, ElementKind::Function)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declaration found by the signal extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeElement {
    pub name: String,
    pub kind: ElementKind,
    /// 1-based line of the declaration.
    pub line: usize,
    /// Adjacent comment or docstring text, if any.
    pub description: Option<String>,
}

/// Per-file record produced by the file summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: String,
    pub file_type: FileType,
    pub size_bytes: u64,
    pub line_count: usize,
    pub description: String,
    /// Declaration order, not alphabetical.
    pub key_elements: Vec<CodeElement>,
    pub imports: Vec<String>,
    pub todos: Vec<String>,
    pub blockers: Vec<String>,
    /// External imports, reduced to their package names.
    pub dependencies: Vec<String>,
}

/// Aggregate over the files of one directory (optionally recursive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub path: String,
    pub description: String,
    /// Every non-excluded file, including those not present in `key_files`.
    pub file_count: usize,
    pub total_lines: usize,
    pub file_types: BTreeMap<FileType, usize>,
    /// Ranked, capped subset of the scanned files.
    pub key_files: Vec<FileSummary>,
}

/// Top-level artifact of one project synthesis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub path: String,
    pub project_type: ProjectType,
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub file_count: usize,
    pub total_lines: usize,
    pub main_technologies: Vec<String>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub entry_points: Vec<String>,
    pub key_files: Vec<FileSummary>,
    pub todos: Vec<String>,
    pub blockers: Vec<String>,
    pub recent_changes: Vec<String>,
}

/// Any summary the renderer accepts. Serializes as the wrapped record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Summary {
    File(FileSummary),
    Folder(FolderSummary),
    Project(ProjectSummary),
}

impl From<FileSummary> for Summary {
    fn from(summary: FileSummary) -> Self {
        Summary::File(summary)
    }
}

impl From<FolderSummary> for Summary {
    fn from(summary: FolderSummary) -> Self {
        Summary::Folder(summary)
    }
}

impl From<ProjectSummary> for Summary {
    fn from(summary: ProjectSummary) -> Self {
        Summary::Project(summary)
    }
}

/// Appends `item` unless an equal entry is already present.
/// Returns `true` when the item was added.
pub fn push_unique(list: &mut Vec<String>, item: impl Into<String>) -> bool {
    let item = item.into();
    if list.iter().any(|existing| *existing == item) {
        return false;
    }
    list.push(item);
    true
}
