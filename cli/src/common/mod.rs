//! # ContextSynth Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the entry point for the collaborators that sit around the
//! summarization engine: filesystem access, external process execution and
//! the version-control history feed. The engine itself (`analysis::`) only
//! ever sees bytes, listings and strings handed to it by these modules.
//!
//! ## Architecture
//!
//! - **`fs`**: Reading raw file bytes with lossy text decoding, writing rendered
//!   output, ensuring directories exist.
//! - **`process`**: Running an external command in a working directory and
//!   capturing its output.
//! - **`vcs`**: The recent-change feed built from `git log`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{fs, vcs};
//!
//! let text = fs::io::read_text_lossy(path)?;
//! let changes = vcs::recent_changes(root, 5);
//! ```
//!

/// Filesystem reads and writes used by the engine and the output step.
pub mod fs;
/// Executes external processes and captures their output.
pub mod process;
/// Recent-change feed from version control.
pub mod vcs;
