//! # ContextSynth Project Synthesizer
//!
//! File: cli/src/analysis/project.rs
//!
//! ## Overview
//!
//! Produces the top-level `ProjectSummary` for a project root. It combines
//! the project classifier, the manifest reader, and a recursive folder scan,
//! then derives entry points and the technology stack from what was found.
//!
//! ## Architecture
//!
//! 1. **Classify**: a `RootListing` of marker files feeds `classify_project`.
//! 2. **Identity**: manifests for the project type supply name, version,
//!    description and dependencies. The name falls back to the root folder
//!    name and the description to the README.
//! 3. **Scan**: `scan_files` runs recursively with the standard exclusion
//!    policy, and `aggregate` supplies counts and the ranked key files.
//! 4. **Markers**: todos and blockers from every scanned file, in traversal
//!    order.
//! 5. **Entry points**: conventional paths for the project type that exist in
//!    the scanned set.
//! 6. **Technologies**: root indicator files first, then the dependency
//!    display-name table.
//!
//! Recent changes are supplied by the caller. The synthesizer never shells
//! out itself.
//!
use crate::analysis::classifier::{self, RootListing};
use crate::analysis::folder::{self, ScanOptions};
use crate::analysis::manifest;
use crate::analysis::model::{push_unique, FileSummary, ProjectSummary, ProjectType};
use crate::core::error::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Root files whose presence implies a technology.
const TECHNOLOGY_INDICATORS: &[(&str, &str)] = &[
    ("package.json", "Node.js"),
    ("requirements.txt", "Python"),
    ("pyproject.toml", "Python"),
    ("Cargo.toml", "Rust"),
    ("go.mod", "Go"),
    ("tsconfig.json", "TypeScript"),
    ("tailwind.config.js", "Tailwind CSS"),
    ("next.config.js", "Next.js"),
    ("vite.config.js", "Vite"),
    ("vite.config.ts", "Vite"),
    ("webpack.config.js", "Webpack"),
    ("jest.config.js", "Jest"),
    ("pytest.ini", "pytest"),
    ("Dockerfile", "Docker"),
];

/// Dependency name to display name. Unlisted dependencies are not technologies.
const TECHNOLOGY_MAPPING: &[(&str, &str)] = &[
    // JavaScript / TypeScript
    ("react", "React"),
    ("react-native", "React Native"),
    ("vue", "Vue.js"),
    ("svelte", "Svelte"),
    ("@angular/core", "Angular"),
    ("next", "Next.js"),
    ("express", "Express.js"),
    ("fastify", "Fastify"),
    ("socket.io", "Socket.IO"),
    ("tailwindcss", "Tailwind CSS"),
    ("prisma", "Prisma"),
    ("@prisma/client", "Prisma"),
    ("mongodb", "MongoDB"),
    ("mongoose", "MongoDB"),
    ("electron", "Electron"),
    ("@tauri-apps/api", "Tauri"),
    ("typescript", "TypeScript"),
    ("vite", "Vite"),
    ("jest", "Jest"),
    // Python
    ("flask", "Flask"),
    ("django", "Django"),
    ("fastapi", "FastAPI"),
    ("numpy", "NumPy"),
    ("pandas", "pandas"),
    ("pytest", "pytest"),
    ("sqlalchemy", "SQLAlchemy"),
    // Rust
    ("tokio", "Tokio"),
    ("axum", "Axum"),
    ("actix-web", "Actix Web"),
    ("serde", "Serde"),
    ("tauri", "Tauri"),
    ("clap", "Clap"),
    // Go
    ("github.com/gin-gonic/gin", "Gin"),
    ("github.com/spf13/cobra", "Cobra"),
];

const PYTHON_ENTRY_POINTS: &[&str] = &[
    "main.py",
    "app.py",
    "__main__.py",
    "manage.py",
    "src/main.py",
    "src/app.py",
    "src/__main__.py",
    "src/manage.py",
];

const NODE_ENTRY_POINTS: &[&str] = &[
    "index.js",
    "index.ts",
    "main.js",
    "main.ts",
    "server.js",
    "app.js",
    "src/index.js",
    "src/index.ts",
    "src/main.js",
    "src/main.ts",
    "src/server.js",
    "src/app.js",
];

const REACT_ENTRY_POINTS: &[&str] = &[
    "App.tsx",
    "App.jsx",
    "App.js",
    "index.tsx",
    "index.js",
    "main.tsx",
    "src/App.tsx",
    "src/App.jsx",
    "src/App.js",
    "src/index.tsx",
    "src/index.js",
    "src/main.tsx",
];

const RUST_ENTRY_POINTS: &[&str] = &["src/main.rs", "src/lib.rs", "main.rs", "lib.rs"];

const TAURI_BACKEND_ENTRY_POINTS: &[&str] = &["src-tauri/src/main.rs", "src-tauri/src/lib.rs"];

const GO_ENTRY_POINTS: &[&str] = &["main.go", "cmd/main.go"];

/// Candidate entry-point lists for a project type, in checking order.
fn entry_point_candidates(project_type: ProjectType) -> Vec<&'static [&'static str]> {
    match project_type {
        ProjectType::Python => vec![PYTHON_ENTRY_POINTS],
        ProjectType::Node | ProjectType::Electron => vec![NODE_ENTRY_POINTS],
        ProjectType::React | ProjectType::ReactNative => vec![REACT_ENTRY_POINTS],
        ProjectType::Rust => vec![RUST_ENTRY_POINTS],
        ProjectType::Tauri => vec![REACT_ENTRY_POINTS, TAURI_BACKEND_ENTRY_POINTS],
        ProjectType::Go => vec![GO_ENTRY_POINTS],
        ProjectType::Generic => vec![
            PYTHON_ENTRY_POINTS,
            NODE_ENTRY_POINTS,
            REACT_ENTRY_POINTS,
            RUST_ENTRY_POINTS,
            TAURI_BACKEND_ENTRY_POINTS,
            GO_ENTRY_POINTS,
        ],
    }
}

/// # Summarize Project (`summarize_project`)
///
/// Synthesizes the summary of the project rooted at `root`. The scan is
/// always recursive; `options.recursive` is ignored.
///
/// ## Arguments
///
/// * `root` - Project root directory.
/// * `options` - Key-file cap and extra excluded directories.
/// * `recent_changes` - Change descriptions embedded verbatim, newest first.
///
/// ## Errors
///
/// Fails only when `root` does not exist or is not a directory. Unreadable
/// files and malformed manifests degrade the result instead.
pub fn summarize_project(
    root: &Path,
    options: &ScanOptions,
    recent_changes: Vec<String>,
) -> Result<ProjectSummary> {
    folder::ensure_directory(root)?;
    info!("Summarizing project {}", root.display());

    let listing = RootListing::from_dir(root);
    let project_type = classifier::classify_project(&listing);
    debug!("Classified {} as {}", root.display(), project_type);

    let manifest = manifest::read_manifests(root, project_type);
    let root_name = folder::folder_name(root);
    let name = manifest.name.clone().unwrap_or_else(|| root_name.clone());
    let description = manifest
        .description
        .clone()
        .or_else(|| manifest::readme_description(root));

    let scan = ScanOptions {
        recursive: true,
        ..options.clone()
    };
    let files = folder::scan_files(root, &scan);
    let rollup = folder::aggregate(
        root.display().to_string(),
        &root_name,
        &files,
        options.max_key_files,
    );

    let (todos, blockers) = merge_markers(&files);
    let entry_points = find_entry_points(project_type, &files);
    let main_technologies =
        detect_technologies(root, &manifest.dependencies, &manifest.dev_dependencies);

    Ok(ProjectSummary {
        path: root.display().to_string(),
        project_type,
        name,
        description,
        version: manifest.version,
        file_count: rollup.file_count,
        total_lines: rollup.total_lines,
        main_technologies,
        dependencies: manifest.dependencies,
        dev_dependencies: manifest.dev_dependencies,
        entry_points,
        key_files: rollup.key_files,
        todos,
        blockers,
        recent_changes,
    })
}

/// Concatenates per-file todos and blockers in traversal order.
fn merge_markers(files: &[FileSummary]) -> (Vec<String>, Vec<String>) {
    let mut todos = Vec::new();
    let mut blockers = Vec::new();
    for file in files {
        todos.extend(file.todos.iter().cloned());
        blockers.extend(file.blockers.iter().cloned());
    }
    (todos, blockers)
}

/// Conventional entry-point paths for `project_type` present among `files`.
pub fn find_entry_points(project_type: ProjectType, files: &[FileSummary]) -> Vec<String> {
    let scanned: HashSet<&str> = files.iter().map(|f| f.path.as_str()).collect();
    let mut found = Vec::new();
    for candidates in entry_point_candidates(project_type) {
        for candidate in candidates {
            if scanned.contains(candidate) {
                push_unique(&mut found, *candidate);
            }
        }
    }
    found
}

/// # Detect Technologies (`detect_technologies`)
///
/// Indicator files at `root` first, then mapped runtime and dev
/// dependencies, without duplicates.
pub fn detect_technologies(
    root: &Path,
    dependencies: &[String],
    dev_dependencies: &[String],
) -> Vec<String> {
    let mut technologies = Vec::new();
    for (indicator, technology) in TECHNOLOGY_INDICATORS {
        if root.join(indicator).is_file() {
            push_unique(&mut technologies, *technology);
        }
    }
    for dependency in dependencies.iter().chain(dev_dependencies) {
        if let Some(technology) = technology_for(dependency) {
            push_unique(&mut technologies, technology);
        }
    }
    technologies
}

/// Display name for a dependency, if it names a known technology.
pub fn technology_for(dependency: &str) -> Option<&'static str> {
    TECHNOLOGY_MAPPING
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(dependency))
        .map(|(_, technology)| *technology)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Helper to create a mock project tree
    fn create_mock_project(files: &[(&str, &str)]) -> tempfile::TempDir {
        let temp_dir = tempdir().unwrap();
        for (file, content) in files {
            let file_path = temp_dir.path().join(file);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(file_path, content).unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_demo_node_project() {
        let dir = create_mock_project(&[
            (
                "package.json",
                r#"{"name": "demo", "version": "2.0.0", "dependencies": {"left-pad": "1.3.0"}}"#,
            ),
            ("index.js", "// TODO: add tests\nconsole.log('hi');\n"),
        ]);
        let summary = summarize_project(dir.path(), &ScanOptions::default(), vec![]).unwrap();
        assert_eq!(summary.project_type, ProjectType::Node);
        assert_eq!(summary.name, "demo");
        assert_eq!(summary.version.as_deref(), Some("2.0.0"));
        assert_eq!(summary.dependencies, vec!["left-pad"]);
        assert_eq!(summary.todos, vec!["add tests"]);
        assert_eq!(summary.entry_points, vec!["index.js"]);
        assert_eq!(summary.main_technologies, vec!["Node.js"]);
        assert_eq!(summary.file_count, 2);
    }

    #[test]
    fn test_generic_project_without_manifest() {
        let dir = create_mock_project(&[
            ("README.md", "# Notes\n\nA pile of scripts.\n"),
            ("tools/run.sh", "#!/bin/sh\n# FIXME: quote paths\n# BLOCKED: waiting on infra\n"),
        ]);
        let summary = summarize_project(dir.path(), &ScanOptions::default(), vec![]).unwrap();
        assert_eq!(summary.project_type, ProjectType::Generic);
        assert_eq!(summary.name, folder::folder_name(dir.path()));
        assert_eq!(summary.version, None);
        assert!(summary.dependencies.is_empty());
        assert_eq!(summary.description.as_deref(), Some("A pile of scripts."));
        assert_eq!(summary.todos, vec!["quote paths"]);
        assert_eq!(summary.blockers, vec!["waiting on infra"]);
        assert!(summary.entry_points.is_empty());
    }

    #[test]
    fn test_malformed_manifest_is_not_fatal() {
        let dir = create_mock_project(&[("Cargo.toml", "[package\n"), ("src/main.rs", "fn main() {}\n")]);
        let summary = summarize_project(dir.path(), &ScanOptions::default(), vec![]).unwrap();
        assert_eq!(summary.project_type, ProjectType::Rust);
        assert_eq!(summary.name, folder::folder_name(dir.path()));
        assert!(summary.dependencies.is_empty());
        assert_eq!(summary.entry_points, vec!["src/main.rs"]);
    }

    #[test]
    fn test_counts_survive_key_file_cap_and_changes_pass_through() {
        let dir = create_mock_project(&[
            ("a.py", "x = 1\n"),
            ("b.py", "y = 2\n"),
            ("pkg/c.py", "z = 3\n"),
        ]);
        let options = ScanOptions {
            max_key_files: 1,
            ..ScanOptions::default()
        };
        let changes = vec!["abc1234 Initial commit".to_string()];
        let summary = summarize_project(dir.path(), &options, changes.clone()).unwrap();
        assert_eq!(summary.file_count, 3);
        assert_eq!(summary.total_lines, 3);
        assert_eq!(summary.key_files.len(), 1);
        assert_eq!(summary.recent_changes, changes);
    }

    #[test]
    fn test_technologies_from_indicators_and_dependencies() {
        let dir = create_mock_project(&[("tsconfig.json", "{}"), ("Dockerfile", "FROM node\n")]);
        let deps = vec!["react".to_string(), "left-pad".to_string(), "express".to_string()];
        let dev = vec!["jest".to_string(), "React".to_string()];
        assert_eq!(
            detect_technologies(dir.path(), &deps, &dev),
            vec!["TypeScript", "Docker", "React", "Express.js", "Jest"]
        );
        assert_eq!(technology_for("left-pad"), None);
    }

    #[test]
    fn test_entry_points_follow_candidate_order() {
        let make = |path: &str| FileSummary {
            path: path.into(),
            file_type: crate::analysis::model::FileType::Unknown,
            size_bytes: 0,
            line_count: 0,
            description: String::new(),
            key_elements: vec![],
            imports: vec![],
            todos: vec![],
            blockers: vec![],
            dependencies: vec![],
        };
        let files = vec![make("src-tauri/src/main.rs"), make("src/main.tsx"), make("src/App.tsx")];
        assert_eq!(
            find_entry_points(ProjectType::Tauri, &files),
            vec!["src/App.tsx", "src/main.tsx", "src-tauri/src/main.rs"]
        );
        assert!(find_entry_points(ProjectType::Go, &files).is_empty());
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = tempdir().unwrap();
        assert!(summarize_project(&dir.path().join("nope"), &ScanOptions::default(), vec![]).is_err());
    }
}
