//! # ContextSynth Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per subcommand. Each defines a Clap `*Args` struct and a
//! `handle_*` function that `main.rs` routes to.
//!
//! - `file`: summarize a single file.
//! - `folder`: summarize a directory, optionally recursively.
//! - `project`: synthesize a whole-project summary.
//!
//! `output` holds the rendering flags and delivery shared by all three.
//!

/// `contextsynth file <PATH>`.
pub mod file;
/// `contextsynth folder <PATH> [-r]`.
pub mod folder;
/// Shared `--format`, `--detail` and `--output` handling.
pub mod output;
/// `contextsynth project [PATH]`.
pub mod project;
