//! # ContextSynth Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for contextsynth, handling
//! loading, merging and validation of configuration data. It supports a
//! multi-level approach that combines defaults, user settings and
//! project-specific overrides. Command-line flags are applied on top by the
//! command handlers.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.contextsynth.toml` in the target directory or its ancestors
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Default values defined in the code
//!
//! The project search walks upward from the path being summarized and stops at
//! the first directory containing `.git`, so a repository's config never leaks
//! into a sibling checkout.
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config(&target)?;
//!
//! let cap = cfg.scan.max_key_files;
//! let format = cfg.output.format;
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::analysis::model::DetailLevel;
use crate::core::error::{Result, SynthError};
use crate::render::OutputFormat;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Default rendering choices, overridable with `--format` / `--detail`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub detail: DetailLevel,
}

/// Folder and project scan settings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Cap on the number of key files carried in full detail.
    #[serde(default = "default_max_key_files")]
    pub max_key_files: usize,
    /// Extra directory names skipped during traversal.
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_key_files: default_max_key_files(),
            exclude_dirs: Vec::new(),
        }
    }
}

/// Settings for the `git log` recent-change feed.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    #[serde(default = "default_history_enabled")]
    pub enabled: bool,
    #[serde(default = "default_history_max_entries")]
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_history_enabled(),
            max_entries: default_history_max_entries(),
        }
    }
}

fn default_max_key_files() -> usize {
    20
}
fn default_history_enabled() -> bool {
    true
}
fn default_history_max_entries() -> usize {
    5
}

const PROJECT_CONFIG_FILENAME: &str = ".contextsynth.toml";
const MAX_HISTORY_ENTRIES: usize = 100;

/// # Load Configuration (`load_config`)
///
/// Loads the user configuration, then the nearest project configuration found
/// from `start` upward, merges them and validates the result.
///
/// ## Arguments
///
/// * `start` - The path being summarized. Files start the search at their parent.
///
/// ## Returns
///
/// * `Result<Config>` - The merged configuration, or a `SynthError::Config`
///   wrapped in context when a file is unreadable, malformed or invalid.
pub fn load_config(start: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config(start)?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ContextSynth", "contextsynth") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start)? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found from {} upward.",
            PROJECT_CONFIG_FILENAME,
            start.display()
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Result<Option<PathBuf>> {
    // Relative targets like "." need an absolute anchor to walk parents.
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(start)
    };
    let mut path: &Path = if start.is_file() {
        start.parent().unwrap_or(start.as_path())
    } else {
        &start
    };
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(SynthError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();
    merged.output.format = if project_cfg.output.format != defaults.output.format {
        project_cfg.output.format
    } else {
        user.output.format
    };
    merged.output.detail = if project_cfg.output.detail != defaults.output.detail {
        project_cfg.output.detail
    } else {
        user.output.detail
    };
    merged.scan.max_key_files = if project_cfg.scan.max_key_files != default_max_key_files() {
        project_cfg.scan.max_key_files
    } else {
        user.scan.max_key_files
    };
    merged.scan.exclude_dirs = if !project_cfg.scan.exclude_dirs.is_empty() {
        project_cfg.scan.exclude_dirs
    } else {
        user.scan.exclude_dirs
    };
    merged.history.enabled = if project_cfg.history.enabled != default_history_enabled() {
        project_cfg.history.enabled
    } else {
        user.history.enabled
    };
    merged.history.max_entries =
        if project_cfg.history.max_entries != default_history_max_entries() {
            project_cfg.history.max_entries
        } else {
            user.history.max_entries
        };
    merged
}

/// Checks value ranges that serde cannot express.
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.scan.max_key_files == 0 {
        return Err(anyhow!(SynthError::Config(
            "scan.max_key_files must be at least 1".to_string()
        )));
    }
    if config.history.max_entries > MAX_HISTORY_ENTRIES {
        return Err(anyhow!(SynthError::Config(format!(
            "history.max_entries must not exceed {} (got {})",
            MAX_HISTORY_ENTRIES, config.history.max_entries
        ))));
    }
    for dir in &config.scan.exclude_dirs {
        if dir.trim().is_empty() {
            return Err(anyhow!(SynthError::Config(
                "scan.exclude_dirs cannot contain an empty name".to_string()
            )));
        }
        if dir.contains('/') || dir.contains('\\') {
            return Err(anyhow!(SynthError::Config(format!(
                "Invalid exclude_dirs entry '{}'. Expected a bare directory name.",
                dir
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
