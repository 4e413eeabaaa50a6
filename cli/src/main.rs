//! # ContextSynth Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ContextSynth CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - Each subcommand (`file`, `folder`, `project`) is a variant of `Commands`
//!   mapped to a handler in `commands`.
//! - The summarization engine lives in `analysis`, the output formats in
//!   `render`, and the collaborators (filesystem, processes, git) in `common`.
//! - All errors propagate to this level, are printed as `Error: <message>` on
//!   stderr, and end the process with status 1.
//! - Logs go to stderr so stdout carries only the summary.
//!
//! ## Examples
//!
//! ```bash
//! # Summarize the project in the current directory
//! contextsynth project
//!
//! # Summarize a folder recursively as JSON, with debug logging
//! contextsynth -vv folder src -r -f json
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod analysis; // Summarization engine (classification, extraction, aggregation)
mod commands; // Subcommand arguments and handlers
mod common; // Collaborators (fs, process, vcs)
mod core; // Infrastructure (errors, config)
mod render; // Output formats

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "contextsynth",
    about = "ContextSynth: instant context summaries for files, folders and projects",
    long_about = "Summarizes a source file, a directory or a whole project: type, \
                  technologies, dependencies, key code elements, TODOs and blockers.\n\
                  Output is markdown, JSON or plain text.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Summarize a single file
    #[command(alias = "f")]
    File(commands::file::FileArgs),
    /// Summarize the files of a directory
    #[command(alias = "d")]
    Folder(commands::folder::FolderArgs),
    /// Summarize a whole project
    #[command(alias = "p")]
    Project(commands::project::ProjectArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::File(args) => commands::file::handle_file(args),
        Commands::Folder(args) => commands::folder::handle_folder(args),
        Commands::Project(args) => commands::project::handle_project(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases_and_global_verbosity() {
        let cli = Cli::try_parse_from(["contextsynth", "-vv", "p", "--no-history"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Project(_)));

        let cli = Cli::try_parse_from(["contextsynth", "d", "src", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Folder(_)));

        let cli = Cli::try_parse_from(["contextsynth", "f", "main.rs"]).unwrap();
        assert!(matches!(cli.command, Commands::File(_)));
    }
}
