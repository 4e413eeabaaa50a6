//! # ContextSynth File Command
//!
//! File: cli/src/commands/file.rs
//!
//! ## Overview
//!
//! Implements `contextsynth file <PATH>`: summarizes one file and renders
//! it.
//!
//! ## Examples
//!
//! ```bash
//! contextsynth file src/main.rs
//! contextsynth f app.py -f json -o summary.json
//! ```
//!
use super::output::{self, OutputArgs};
use crate::analysis::file;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `contextsynth file`.
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Path to the file to summarize
    path: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

/// # Handle File Command (`handle_file`)
///
/// Loads configuration for the file's location, summarizes the file and
/// emits the rendering.
///
/// ## Returns
///
/// * `Err` - The path does not exist or is a directory, the configuration is
///   invalid, or the output file cannot be written.
pub fn handle_file(args: FileArgs) -> Result<()> {
    info!("Handling file command for {}", args.path.display());
    let cfg = config::load_config(&args.path).context("Failed to load configuration")?;
    let summary = file::summarize_file(&args.path)?;
    output::emit(summary.into(), &args.output, &cfg)
}
