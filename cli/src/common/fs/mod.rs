//! # ContextSynth Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Organizational unit for filesystem helpers. All functionality currently
//! lives in the `io` submodule; callers import it directly
//! (`crate::common::fs::io::read_text_lossy`).
//!

/// Basic file I/O (`read_bytes`, `read_text_lossy`, `write_string_to_file`, `ensure_dir_exists`).
pub mod io;
