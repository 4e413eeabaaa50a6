//! # ContextSynth Output Options
//!
//! File: cli/src/commands/output.rs
//!
//! ## Overview
//!
//! Flags shared by every summarizing subcommand (`-f/--format`,
//! `-d/--detail`, `-o/--output`) and the single place where a finished
//! summary is rendered and delivered. Flags left unset fall back to the
//! `[output]` table of the loaded configuration.
//!
//! Without `--output` the rendering goes to stdout unchanged. With it, the
//! rendering is written to the file (parent directories created) and only a
//! confirmation line is printed.
//!
use crate::analysis::model::{DetailLevel, Summary};
use crate::common::fs::io;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::render::{self, OutputFormat};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Rendering flags, flattened into each subcommand.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct OutputArgs {
    /// Output format [default: config `output.format`, else markdown]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Detail level [default: config `output.detail`, else standard]
    #[arg(short, long, value_enum)]
    pub detail: Option<DetailLevel>,

    /// Write the summary to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Format and detail level after applying configuration defaults.
    pub fn resolve(&self, config: &Config) -> (OutputFormat, DetailLevel) {
        (
            self.format.unwrap_or(config.output.format),
            self.detail.unwrap_or(config.output.detail),
        )
    }
}

/// # Emit Summary (`emit`)
///
/// Renders `summary` and prints it, or writes it to `--output`.
pub fn emit(summary: Summary, args: &OutputArgs, config: &Config) -> Result<()> {
    let (format, detail) = args.resolve(config);
    debug!("Rendering summary as {} ({})", format, detail);
    let rendered = render::render(&summary, format, detail)?;

    match &args.output {
        Some(path) => {
            io::write_string_to_file(path, &rendered)
                .with_context(|| format!("Failed to save summary to {}", path.display()))?;
            println!("Summary saved to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
