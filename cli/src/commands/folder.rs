//! # ContextSynth Folder Command
//!
//! File: cli/src/commands/folder.rs
//!
//! ## Overview
//!
//! Implements `contextsynth folder <PATH> [-r]`: summarizes the files of a
//! directory, recursing into subdirectories with `-r`.
//!
//! The key-file cap comes from `--max-key-files`, else `scan.max_key_files`.
//! Extra excluded directory names come from `scan.exclude_dirs`.
//!
//! ## Examples
//!
//! ```bash
//! contextsynth folder src
//! contextsynth d . -r --max-key-files 5 -f text
//! ```
//!
use super::output::{self, OutputArgs};
use crate::analysis::folder::{self, ScanOptions};
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `contextsynth folder`.
#[derive(Parser, Debug)]
pub struct FolderArgs {
    /// Path to the directory to summarize
    path: PathBuf,

    /// Include files in nested directories
    #[arg(short, long)]
    recursive: bool,

    /// Maximum number of key files listed
    #[arg(long, value_name = "N")]
    max_key_files: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

/// # Handle Folder Command (`handle_folder`)
pub fn handle_folder(args: FolderArgs) -> Result<()> {
    info!(
        "Handling folder command for {} (recursive: {})",
        args.path.display(),
        args.recursive
    );
    let mut cfg = config::load_config(&args.path).context("Failed to load configuration")?;
    if let Some(max) = args.max_key_files {
        cfg.scan.max_key_files = max;
        config::validate_config(&cfg)?;
    }
    let options = scan_options(&cfg, args.recursive);
    let summary = folder::summarize_folder_with(&args.path, &options)?;
    output::emit(summary.into(), &args.output, &cfg)
}

/// Scan options from the merged configuration.
pub fn scan_options(cfg: &Config, recursive: bool) -> ScanOptions {
    ScanOptions {
        recursive,
        max_key_files: cfg.scan.max_key_files,
        extra_exclude_dirs: cfg.scan.exclude_dirs.clone(),
    }
}
