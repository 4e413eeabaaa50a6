//! # ContextSynth Manifest Reader
//!
//! File: cli/src/analysis/manifest.rs
//!
//! ## Overview
//!
//! Reads project identity (name, version, description) and declared
//! dependencies from the manifest files of a classified project. Which files
//! are consulted depends on the `ProjectType`:
//!
//! | Project type                         | Manifests (in order)                      |
//! |--------------------------------------|-------------------------------------------|
//! | node, react, react_native, electron  | `package.json`                            |
//! | rust                                 | `Cargo.toml`                              |
//! | tauri                                | `package.json`, `src-tauri/Cargo.toml`    |
//! | python                               | `pyproject.toml`, `requirements.txt`      |
//! | go                                   | `go.mod`                                  |
//! | generic                              | none                                      |
//!
//! When several manifests apply, identity comes from the first one that
//! provides each field and dependency lists are concatenated without
//! duplicates. A missing or malformed manifest is logged and treated as
//! absent, never as an error.
//!
//! Each `parse_*` function works on text so it can be tested without a
//! filesystem.
//!
use crate::analysis::extractor::truncate_chars;
use crate::analysis::model::{push_unique, ProjectType};
use crate::common::fs::io;
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, warn};

/// Maximum characters kept from a README description line.
const MAX_README_DESCRIPTION_CHARS: usize = 200;

/// Identity and dependency data read from one or more manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl ManifestInfo {
    /// Fills missing identity fields from `other` and appends its dependencies.
    fn absorb(&mut self, other: ManifestInfo) {
        if self.name.is_none() {
            self.name = other.name;
        }
        if self.version.is_none() {
            self.version = other.version;
        }
        if self.description.is_none() {
            self.description = other.description;
        }
        for dep in other.dependencies {
            push_unique(&mut self.dependencies, dep);
        }
        for dep in other.dev_dependencies {
            push_unique(&mut self.dev_dependencies, dep);
        }
    }
}

type Parser = fn(&str) -> Result<ManifestInfo>;

const NODE_MANIFESTS: &[(&str, Parser)] = &[("package.json", parse_package_json)];
const RUST_MANIFESTS: &[(&str, Parser)] = &[("Cargo.toml", parse_cargo_toml)];
const TAURI_MANIFESTS: &[(&str, Parser)] = &[
    ("package.json", parse_package_json),
    ("src-tauri/Cargo.toml", parse_cargo_toml),
];
const PYTHON_MANIFESTS: &[(&str, Parser)] = &[
    ("pyproject.toml", parse_pyproject),
    ("requirements.txt", parse_requirements),
];
const GO_MANIFESTS: &[(&str, Parser)] = &[("go.mod", parse_go_mod)];

fn manifests_for(project_type: ProjectType) -> &'static [(&'static str, Parser)] {
    match project_type {
        ProjectType::Node
        | ProjectType::React
        | ProjectType::ReactNative
        | ProjectType::Electron => NODE_MANIFESTS,
        ProjectType::Rust => RUST_MANIFESTS,
        ProjectType::Tauri => TAURI_MANIFESTS,
        ProjectType::Python => PYTHON_MANIFESTS,
        ProjectType::Go => GO_MANIFESTS,
        ProjectType::Generic => &[],
    }
}

/// # Read Manifests (`read_manifests`)
///
/// Reads and merges every manifest that applies to `project_type` under `root`.
pub fn read_manifests(root: &Path, project_type: ProjectType) -> ManifestInfo {
    let mut info = ManifestInfo::default();
    for (relative, parse) in manifests_for(project_type) {
        let path = root.join(relative);
        if !path.is_file() {
            debug!("Manifest {} not present", path.display());
            continue;
        }
        let parsed = io::read_text_lossy(&path).and_then(|text| {
            parse(&text).with_context(|| format!("Failed to parse manifest {}", path.display()))
        });
        match parsed {
            Ok(manifest) => {
                debug!("Read manifest {}: {:?}", path.display(), manifest);
                info.absorb(manifest);
            }
            Err(e) => warn!("Ignoring manifest: {:#}", e),
        }
    }
    info
}

// --- package.json ---

/// Parses `package.json`: identity fields and the keys of `dependencies` /
/// `devDependencies` in document order.
pub fn parse_package_json(text: &str) -> Result<ManifestInfo> {
    let data: serde_json::Value = serde_json::from_str(text)?;
    let string_field = |key: &str| {
        data.get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let keys = |key: &str| -> Vec<String> {
        data.get(key)
            .and_then(|v| v.as_object())
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default()
    };
    Ok(ManifestInfo {
        name: string_field("name"),
        version: string_field("version"),
        description: string_field("description"),
        dependencies: keys("dependencies"),
        dev_dependencies: keys("devDependencies"),
    })
}

// --- Cargo.toml ---

fn table_keys(table: Option<&toml::Value>) -> Vec<String> {
    table
        .and_then(|v| v.as_table())
        .map(|t| t.keys().cloned().collect())
        .unwrap_or_default()
}

fn toml_string(value: Option<&toml::Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses `Cargo.toml`. A workspace root without `[package]` contributes the
/// keys of `[workspace.dependencies]`.
pub fn parse_cargo_toml(text: &str) -> Result<ManifestInfo> {
    let data: toml::Table = toml::from_str(text)?;
    let package = data.get("package");
    let field = |key: &str| toml_string(package.and_then(|p| p.get(key)));

    let mut dependencies = table_keys(data.get("dependencies"));
    let workspace_deps = data
        .get("workspace")
        .and_then(|w| w.get("dependencies"));
    for dep in table_keys(workspace_deps) {
        push_unique(&mut dependencies, dep);
    }

    Ok(ManifestInfo {
        name: field("name"),
        version: field("version"),
        description: field("description"),
        dependencies,
        dev_dependencies: table_keys(data.get("dev-dependencies")),
    })
}

// --- Python ---

/// Package name of a PEP 508 requirement (`requests[socks]>=2.0; python_version>"3"`).
pub fn requirement_name(requirement: &str) -> Option<String> {
    let name: String = requirement
        .trim()
        .chars()
        .take_while(|c| !matches!(c, '<' | '>' | '=' | '!' | '~' | ';' | '[' | '@' | ' ' | '('))
        .collect();
    (!name.is_empty()).then_some(name)
}

fn requirement_list(value: Option<&toml::Value>) -> Vec<String> {
    let mut names = Vec::new();
    if let Some(items) = value.and_then(|v| v.as_array()) {
        for item in items.iter().filter_map(|i| i.as_str()) {
            if let Some(name) = requirement_name(item) {
                push_unique(&mut names, name);
            }
        }
    }
    names
}

/// Parses `pyproject.toml`: PEP 621 `[project]` first, then `[tool.poetry]`
/// for anything still missing. Poetry's `python` entry is not a dependency.
pub fn parse_pyproject(text: &str) -> Result<ManifestInfo> {
    let data: toml::Table = toml::from_str(text)?;
    let mut info = ManifestInfo::default();

    if let Some(project) = data.get("project") {
        info.absorb(ManifestInfo {
            name: toml_string(project.get("name")),
            version: toml_string(project.get("version")),
            description: toml_string(project.get("description")),
            dependencies: requirement_list(project.get("dependencies")),
            dev_dependencies: requirement_list(
                project
                    .get("optional-dependencies")
                    .and_then(|o| o.get("dev")),
            ),
        });
    }

    if let Some(poetry) = data.get("tool").and_then(|t| t.get("poetry")) {
        let without_python = |keys: Vec<String>| -> Vec<String> {
            keys.into_iter()
                .filter(|k| !k.eq_ignore_ascii_case("python"))
                .collect()
        };
        let mut dev = table_keys(poetry.get("dev-dependencies"));
        let group_dev = poetry
            .get("group")
            .and_then(|g| g.get("dev"))
            .and_then(|d| d.get("dependencies"));
        for dep in table_keys(group_dev) {
            push_unique(&mut dev, dep);
        }
        info.absorb(ManifestInfo {
            name: toml_string(poetry.get("name")),
            version: toml_string(poetry.get("version")),
            description: toml_string(poetry.get("description")),
            dependencies: without_python(table_keys(poetry.get("dependencies"))),
            dev_dependencies: without_python(dev),
        });
    }
    Ok(info)
}

/// Parses `requirements.txt`: one requirement per line. Comments, blank
/// lines and option lines (`-r`, `-e`, `--index-url`) are skipped.
pub fn parse_requirements(text: &str) -> Result<ManifestInfo> {
    let mut info = ManifestInfo::default();
    for line in text.lines() {
        let line = line.split(" #").next().unwrap_or("").trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(name) = requirement_name(line) {
            push_unique(&mut info.dependencies, name);
        }
    }
    Ok(info)
}

// --- go.mod ---

/// Parses `go.mod`: the module path is the name, `require` entries
/// (single-line or block form) are dependencies.
pub fn parse_go_mod(text: &str) -> Result<ManifestInfo> {
    let mut info = ManifestInfo::default();
    let mut in_require_block = false;
    for line in text.lines() {
        let line = line.split("//").next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        if in_require_block {
            if line == ")" {
                in_require_block = false;
            } else if let Some(module) = line.split_whitespace().next() {
                push_unique(&mut info.dependencies, module);
            }
            continue;
        }
        if let Some(module) = line.strip_prefix("module ") {
            info.name = Some(module.trim().trim_matches('"').to_string());
        } else if let Some(rest) = line.strip_prefix("require") {
            let rest = rest.trim();
            if rest == "(" {
                in_require_block = true;
            } else if let Some(module) = rest.split_whitespace().next() {
                push_unique(&mut info.dependencies, module);
            }
        }
    }
    Ok(info)
}

// --- README ---

/// # README Description (`readme_description`)
///
/// First line among lines 2-10 of `README.md` that is neither blank, a
/// heading (`#`) nor an image/badge (`!`), truncated to 200 characters.
pub fn readme_description(root: &Path) -> Option<String> {
    let path = root.join("README.md");
    if !path.is_file() {
        return None;
    }
    match io::read_text_lossy(&path) {
        Ok(text) => description_from_readme(&text),
        Err(e) => {
            warn!("Could not read README: {:#}", e);
            None
        }
    }
}

fn description_from_readme(text: &str) -> Option<String> {
    text.lines()
        .skip(1)
        .take(9)
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .map(|line| truncate_chars(line, MAX_README_DESCRIPTION_CHARS))
}
