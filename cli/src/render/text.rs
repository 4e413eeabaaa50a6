//! # ContextSynth Plain Text Renderer
//!
//! File: cli/src/render/text.rs
//!
//! ## Overview
//!
//! A single-screen `Key: value` digest. Lists are reported as counts, except
//! technologies and entry points which are short enough to show inline.
//!
use super::group_thousands;
use crate::analysis::model::{FileSummary, FolderSummary, ProjectSummary};
use crate::core::error::Result;
use std::fmt::Write as FmtWrite;

pub fn render_file(summary: &FileSummary) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "File: {}", summary.path)?;
    writeln!(out, "Type: {}", summary.file_type)?;
    writeln!(out, "Size: {} bytes", group_thousands(summary.size_bytes))?;
    writeln!(out, "Lines: {}", group_thousands(summary.line_count as u64))?;
    writeln!(out, "Description: {}", summary.description)?;
    writeln!(out, "Elements: {}", summary.key_elements.len())?;
    writeln!(out, "Imports: {}", summary.imports.len())?;
    writeln!(out, "TODOs: {}", summary.todos.len())?;
    writeln!(out, "Blockers: {}", summary.blockers.len())?;
    Ok(out)
}

pub fn render_folder(summary: &FolderSummary) -> Result<String> {
    let types: Vec<String> = summary
        .file_types
        .iter()
        .map(|(file_type, count)| format!("{}:{}", file_type, count))
        .collect();
    let mut out = String::new();
    writeln!(out, "Folder: {}", summary.path)?;
    writeln!(out, "Description: {}", summary.description)?;
    writeln!(out, "Files: {}", group_thousands(summary.file_count as u64))?;
    writeln!(out, "Lines: {}", group_thousands(summary.total_lines as u64))?;
    writeln!(out, "Types: {}", types.join(", "))?;
    Ok(out)
}

pub fn render_project(summary: &ProjectSummary) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Project: {}", summary.name)?;
    writeln!(out, "Type: {}", summary.project_type)?;
    writeln!(
        out,
        "Version: {}",
        summary.version.as_deref().unwrap_or("unknown")
    )?;
    writeln!(out, "Files: {}", group_thousands(summary.file_count as u64))?;
    writeln!(out, "Lines: {}", group_thousands(summary.total_lines as u64))?;
    writeln!(out, "Technologies: {}", summary.main_technologies.join(", "))?;
    writeln!(out, "Entry points: {}", summary.entry_points.join(", "))?;
    writeln!(out, "Dependencies: {}", summary.dependencies.len())?;
    writeln!(out, "Dev dependencies: {}", summary.dev_dependencies.len())?;
    writeln!(out, "TODOs: {}", summary.todos.len())?;
    writeln!(out, "Blockers: {}", summary.blockers.len())?;
    writeln!(out, "Recent changes: {}", summary.recent_changes.len())?;
    Ok(out)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::{FileType, ProjectType};
    use std::collections::BTreeMap;

    #[test]
    fn test_project_digest() {
        let project = ProjectSummary {
            path: ".".into(),
            project_type: ProjectType::Generic,
            name: "scripts".into(),
            description: None,
            version: None,
            file_count: 3,
            total_lines: 1500,
            main_technologies: vec![],
            dependencies: vec![],
            dev_dependencies: vec![],
            entry_points: vec!["main.py".into()],
            key_files: vec![],
            todos: vec!["one".into(), "two".into()],
            blockers: vec![],
            recent_changes: vec![],
        };
        let out = render_project(&project).unwrap();
        assert!(out.starts_with("Project: scripts\nType: generic\nVersion: unknown\n"));
        assert!(out.contains("Lines: 1,500\n"));
        assert!(out.contains("Entry points: main.py\n"));
        assert!(out.contains("TODOs: 2\n"));
    }

    #[test]
    fn test_folder_digest() {
        let mut file_types = BTreeMap::new();
        file_types.insert(FileType::Rust, 2);
        file_types.insert(FileType::Python, 1);
        let folder = FolderSummary {
            path: "src".into(),
            description: "3 files in src, primarily rust".into(),
            file_count: 3,
            total_lines: 30,
            file_types,
            key_files: vec![],
        };
        let out = render_folder(&folder).unwrap();
        assert!(out.contains("Types: python:1, rust:2\n"));
    }
}
