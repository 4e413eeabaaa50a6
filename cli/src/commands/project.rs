//! # ContextSynth Project Command
//!
//! File: cli/src/commands/project.rs
//!
//! ## Overview
//!
//! Implements `contextsynth project [PATH]`: synthesizes the summary of a
//! whole project tree (default: the current directory).
//!
//! ## Architecture
//!
//! 1. Load and merge configuration, then apply `--max-key-files`.
//! 2. Check the root, then collect recent changes from `git log` unless
//!    `--no-history` or `history.enabled = false`.
//! 3. Run the project synthesizer and emit the rendering.
//!
//! ## Examples
//!
//! ```bash
//! contextsynth project
//! contextsynth p ../service -d detailed --no-history
//! ```
//!
use super::folder::scan_options;
use super::output::{self, OutputArgs};
use crate::analysis::{folder, project};
use crate::common::vcs;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments for `contextsynth project`.
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Project root directory
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Maximum number of key files listed
    #[arg(long, value_name = "N")]
    max_key_files: Option<usize>,

    /// Do not read recent changes from git
    #[arg(long)]
    no_history: bool,

    #[command(flatten)]
    output: OutputArgs,
}

/// # Handle Project Command (`handle_project`)
pub fn handle_project(args: ProjectArgs) -> Result<()> {
    info!("Handling project command for {}", args.path.display());
    let mut cfg = config::load_config(&args.path).context("Failed to load configuration")?;
    if let Some(max) = args.max_key_files {
        cfg.scan.max_key_files = max;
        config::validate_config(&cfg)?;
    }
    folder::ensure_directory(&args.path)?;

    let recent_changes = if args.no_history || !cfg.history.enabled {
        debug!("Recent change history disabled");
        Vec::new()
    } else {
        vcs::recent_changes(&args.path, cfg.history.max_entries)
    };

    let options = scan_options(&cfg, true);
    let summary = project::summarize_project(&args.path, &options, recent_changes)?;
    output::emit(summary.into(), &args.output, &cfg)
}
