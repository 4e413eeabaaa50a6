//! # ContextSynth Folder Aggregator
//!
//! File: cli/src/analysis/folder.rs
//!
//! ## Overview
//!
//! Runs the file summarizer over the files of a directory and rolls the
//! results up into a `FolderSummary`: file count, total lines, a histogram of
//! file types, and a ranked, capped list of key files.
//!
//! ## Architecture
//!
//! - **Traversal** (`scan_files`): `walkdir` sorted by file name, so the order
//!   is lexical and depth-first and repeated runs see the same sequence.
//!   Non-recursive scans stop at direct children. Excluded directories are
//!   pruned before descent; excluded files are skipped.
//! - **Exclusion policy**: hidden entries, dependency caches, VCS metadata and
//!   build output directories (plus any configured extras), binary file
//!   extensions, and generated lock files.
//! - **Aggregation** (`aggregate`): counts and line totals always cover every
//!   scanned file. Only `key_files` is capped.
//! - **Ranking** (`rank_key_files`): stable sort by entry-point-like name
//!   first, then size descending, then path ascending, then truncation.
//!
//! Paths inside the summary are relative to the scanned folder and use `/`
//! separators on every platform.
//!
use crate::analysis::file;
use crate::analysis::model::{FileSummary, FileType, FolderSummary};
use crate::core::error::{Result, SynthError};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Default cap on `key_files`.
pub const DEFAULT_MAX_KEY_FILES: usize = 20;

/// Directory names never descended into.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".hg",
    ".svn",
    "__pycache__",
    ".venv",
    "venv",
    ".env",
    "dist",
    "build",
    "target",
    ".next",
    ".nuxt",
    "coverage",
    ".idea",
    ".vscode",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
];

/// Extensions of files that carry no readable source.
pub const BINARY_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tif", "tiff", "psd",
    // audio / video
    "mp3", "wav", "ogg", "flac", "m4a", "mp4", "mov", "avi", "mkv", "webm",
    // archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar", "war",
    // compiled objects and libraries
    "exe", "dll", "so", "dylib", "o", "a", "lib", "obj", "class", "pyc", "pyo", "wasm", "bin",
    // fonts
    "woff", "woff2", "ttf", "otf", "eot",
    // databases and documents
    "db", "sqlite", "sqlite3", "pdf",
];

/// Generated lock files.
pub const LOCK_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "poetry.lock",
    "Pipfile.lock",
    "composer.lock",
    "go.sum",
];

/// File stems that mark a likely program entry point when ranking key files.
const ENTRY_POINT_STEMS: &[&str] = &[
    "main", "index", "app", "lib", "__main__", "server", "manage", "cli",
];

/// Options for a folder or project scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub recursive: bool,
    pub max_key_files: usize,
    /// Directory names skipped in addition to `SKIP_DIRS`.
    pub extra_exclude_dirs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            max_key_files: DEFAULT_MAX_KEY_FILES,
            extra_exclude_dirs: Vec::new(),
        }
    }
}

/// # Summarize Folder (`summarize_folder`)
///
/// Summarizes the files directly inside `path`, or every nested file when
/// `recursive` is set, with the default cap and exclusion policy.
#[allow(dead_code)] // The CLI goes through `summarize_folder_with`.
pub fn summarize_folder(path: &Path, recursive: bool) -> Result<FolderSummary> {
    summarize_folder_with(
        path,
        &ScanOptions {
            recursive,
            ..ScanOptions::default()
        },
    )
}

/// # Summarize Folder With Options (`summarize_folder_with`)
///
/// ## Errors
///
/// * `SynthError::PathNotFound` when nothing exists at `path`.
/// * `SynthError::NotADirectory` when `path` is a file.
pub fn summarize_folder_with(path: &Path, options: &ScanOptions) -> Result<FolderSummary> {
    ensure_directory(path)?;
    info!(
        "Summarizing folder {} (recursive: {})",
        path.display(),
        options.recursive
    );
    let files = scan_files(path, options);
    Ok(aggregate(
        path.display().to_string(),
        &folder_name(path),
        &files,
        options.max_key_files,
    ))
}

/// Fails with the unsupported-path errors unless `path` is an existing directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!(SynthError::PathNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        anyhow::bail!(SynthError::NotADirectory {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// Display name of a folder. Resolves `.` and `..` through the filesystem.
pub fn folder_name(path: &Path) -> String {
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_name()
        .or_else(|| path.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// # Scan Files (`scan_files`)
///
/// Summarizes every non-excluded file under `root` in traversal order.
/// Entries that cannot be accessed are logged and skipped.
pub fn scan_files(root: &Path, options: &ScanOptions) -> Vec<FileSummary> {
    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_entry(entry, &options.extra_exclude_dirs));

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to access entry during walk in '{}': {}",
                    root.display(),
                    e
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = match entry.path().strip_prefix(root) {
            Ok(p) => p,
            Err(_) => {
                warn!(
                    "Could not determine relative path for '{}'",
                    entry.path().display()
                );
                continue;
            }
        };
        files.push(file::summarize_entry(entry.path(), to_slash_path(relative)));
    }
    debug!("Scanned {} file(s) under {}", files.len(), root.display());
    files
}

fn is_excluded_entry(entry: &DirEntry, extra_dirs: &[String]) -> bool {
    // The root is scanned even when its own name is hidden (e.g. `.tmpXYZ`).
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_dir() {
        is_excluded_dir(&name, extra_dirs)
    } else {
        is_excluded_file(&name)
    }
}

/// Directory exclusion: hidden names, `SKIP_DIRS`, and `extra_dirs`.
pub fn is_excluded_dir(name: &str, extra_dirs: &[String]) -> bool {
    name.starts_with('.')
        || SKIP_DIRS.contains(&name)
        || extra_dirs.iter().any(|extra| extra == name)
}

/// File exclusion: hidden names, lock files, and binary extensions.
pub fn is_excluded_file(name: &str) -> bool {
    if name.starts_with('.') || LOCK_FILES.contains(&name) {
        return true;
    }
    match Path::new(name).extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            BINARY_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

fn to_slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// --- Aggregation ---

/// # Aggregate (`aggregate`)
///
/// Rolls scanned files up into a `FolderSummary`. Counts cover all of
/// `files`; `key_files` holds at most `max_key_files` of them.
pub fn aggregate(
    path: String,
    name: &str,
    files: &[FileSummary],
    max_key_files: usize,
) -> FolderSummary {
    let mut file_types: BTreeMap<FileType, usize> = BTreeMap::new();
    for summary in files {
        *file_types.entry(summary.file_type).or_insert(0) += 1;
    }
    let total_lines = files.iter().map(|f| f.line_count).sum();

    FolderSummary {
        path,
        description: describe_folder(name, files.len(), &file_types),
        file_count: files.len(),
        total_lines,
        file_types,
        key_files: rank_key_files(files, max_key_files),
    }
}

/// `"<N> files in <name>, primarily <type>"`; ties go to the earlier type.
fn describe_folder(name: &str, count: usize, file_types: &BTreeMap<FileType, usize>) -> String {
    let mut description = format!("{} files in {}", count, name);
    let mut dominant: Option<(FileType, usize)> = None;
    for (file_type, n) in file_types {
        if dominant.map_or(true, |(_, best)| *n > best) {
            dominant = Some((*file_type, *n));
        }
    }
    if let Some((file_type, _)) = dominant {
        description.push_str(&format!(", primarily {}", file_type));
    }
    description
}

/// True when the file's stem names a conventional entry point.
pub fn is_entry_point_like(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path);
    let stem = name.split('.').next().unwrap_or(name).to_lowercase();
    ENTRY_POINT_STEMS.contains(&stem.as_str())
}

/// # Rank Key Files (`rank_key_files`)
///
/// Stable sort over (entry-point-like first, larger first, path ascending),
/// then truncation to `cap`.
pub fn rank_key_files(files: &[FileSummary], cap: usize) -> Vec<FileSummary> {
    let mut ranked: Vec<&FileSummary> = files.iter().collect();
    ranked.sort_by(|a, b| compare_key_files(a, b));
    ranked.into_iter().take(cap).cloned().collect()
}

fn compare_key_files(a: &FileSummary, b: &FileSummary) -> Ordering {
    is_entry_point_like(&b.path)
        .cmp(&is_entry_point_like(&a.path))
        .then_with(|| b.size_bytes.cmp(&a.size_bytes))
        .then_with(|| a.path.cmp(&b.path))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // Helper to create a mock folder with file content
    fn create_mock_folder(files: &[(&str, &str)]) -> tempfile::TempDir {
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
    fn test_non_recursive_scan_sees_direct_children_only() {
        let dir = create_mock_folder(&[
            ("b.py", "import os\n"),
            ("a.rs", "fn main() {}\n"),
            ("nested/c.go", "package main\n"),
        ]);
        let summary = summarize_folder(dir.path(), false).unwrap();
        assert_eq!(summary.file_count, 2);
        let paths: Vec<_> = summary.key_files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.rs", "b.py"]);
        assert_eq!(summary.total_lines, 2);
    }

    #[test]
    fn test_recursive_scan_and_exclusions() {
        let dir = create_mock_folder(&[
            ("src/main.rs", "fn main() {}\n"),
            ("src/util/mod.rs", "pub fn f() {}\n"),
            ("node_modules/left-pad/index.js", "module.exports = 1;\n"),
            ("target/debug/out.rs", "fn x() {}\n"),
            (".git/config", "[core]\n"),
            (".env.local", "SECRET=1\n"),
            ("logo.png", "not really a png"),
            ("Cargo.lock", "# generated\n"),
            ("vendor/lib.rs", "fn v() {}\n"),
        ]);
        let options = ScanOptions {
            recursive: true,
            extra_exclude_dirs: vec!["vendor".into()],
            ..ScanOptions::default()
        };
        let files = scan_files(dir.path(), &options);
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/main.rs", "src/util/mod.rs"]);
    }

    #[test]
    fn test_cap_keeps_counts_complete() {
        let dir = create_mock_folder(&[
            ("one.txt", "1\n"),
            ("two.txt", "1\n2\n"),
            ("three.txt", "1\n2\n3\n"),
            ("four.txt", "1\n2\n3\n4\n"),
        ]);
        let options = ScanOptions {
            max_key_files: 2,
            ..ScanOptions::default()
        };
        let summary = summarize_folder_with(dir.path(), &options).unwrap();
        assert_eq!(summary.file_count, 4);
        assert_eq!(summary.total_lines, 10);
        assert_eq!(summary.key_files.len(), 2);
        assert_eq!(summary.file_types.get(&FileType::Text), Some(&4));
    }

    #[test]
    fn test_key_file_ranking() {
        let make = |path: &str, size: u64| FileSummary {
            path: path.into(),
            file_type: FileType::Unknown,
            size_bytes: size,
            line_count: 0,
            description: String::new(),
            key_elements: vec![],
            imports: vec![],
            todos: vec![],
            blockers: vec![],
            dependencies: vec![],
        };
        let files = vec![
            make("src/big.rs", 900),
            make("src/b.rs", 100),
            make("src/a.rs", 100),
            make("src/main.rs", 10),
            make("index.js", 5),
        ];
        let ranked: Vec<_> = rank_key_files(&files, 4)
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(ranked, vec!["src/main.rs", "index.js", "src/big.rs", "src/a.rs"]);
    }

    #[test]
    fn test_folder_description() {
        let dir = create_mock_folder(&[("a.py", ""), ("b.py", ""), ("c.rs", "")]);
        let summary = summarize_folder(dir.path(), false).unwrap();
        let name = folder_name(dir.path());
        assert_eq!(
            summary.description,
            format!("3 files in {}, primarily python", name)
        );

        let empty = tempdir().unwrap();
        let summary = summarize_folder(empty.path(), true).unwrap();
        assert_eq!(summary.file_count, 0);
        assert!(summary.key_files.is_empty());
        assert!(summary.description.starts_with("0 files in "));
    }

    #[test]
    fn test_unsupported_paths() {
        let dir = create_mock_folder(&[("file.txt", "x")]);
        let err = summarize_folder(&dir.path().join("missing"), false).unwrap_err();
        assert!(err.to_string().contains("Path not found"));
        let err = summarize_folder(&dir.path().join("file.txt"), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SynthError>(),
            Some(SynthError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_exclusion_predicates() {
        assert!(is_excluded_dir("node_modules", &[]));
        assert!(is_excluded_dir(".cache", &[]));
        assert!(!is_excluded_dir("src", &[]));
        assert!(is_excluded_file("photo.JPG"));
        assert!(is_excluded_file("yarn.lock"));
        assert!(!is_excluded_file("Makefile"));
        assert!(is_entry_point_like("src/App.tsx"));
        assert!(!is_entry_point_like("src/mainframe.rs"));
    }
}
