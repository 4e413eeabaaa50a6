//! # ContextSynth Analysis Engine
//!
//! File: cli/src/analysis/mod.rs
//!
//! ## Overview
//!
//! Classification, signal extraction and aggregation, leaves first:
//!
//! - `model`: the summary records and closed tag sets.
//! - `classifier`: file and project type detection.
//! - `patterns`: per-language line patterns and marker keywords.
//! - `extractor`: imports, declarations, markers and doc comments from text.
//! - `file`: the per-file summary.
//! - `folder`: traversal, exclusion policy and folder rollups.
//! - `manifest`: project identity and dependencies from manifest files.
//! - `project`: the project-level summary.
//!
pub mod classifier;
pub mod extractor;
pub mod file;
pub mod folder;
pub mod manifest;
pub mod model;
pub mod patterns;
pub mod project;
