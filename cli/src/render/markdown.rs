//! # ContextSynth Markdown Renderer
//!
//! File: cli/src/render/markdown.rs
//!
//! ## Overview
//!
//! Human-readable Markdown for each summary kind. A header block with the
//! scalar fields comes first, followed by one `##` section per non-empty
//! list. Lists are cut to the `Limits` of the detail level and end with a
//! `- … and N more` line when entries were hidden. A section whose limit is
//! zero is left out.
//!
use super::limits::{self, Limits};
use super::{display_name, group_thousands};
use crate::analysis::model::{FileSummary, FileType, FolderSummary, ProjectSummary};
use crate::core::error::Result;
use std::fmt::Write as FmtWrite;

pub fn render_file(summary: &FileSummary, limits: &Limits) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# File Summary: {}", display_name(&summary.path))?;
    writeln!(out)?;
    writeln!(out, "**Path:** `{}`", summary.path)?;
    writeln!(out, "**Type:** {}", summary.file_type)?;
    writeln!(out, "**Size:** {} bytes", group_thousands(summary.size_bytes))?;
    writeln!(out, "**Lines:** {}", group_thousands(summary.line_count as u64))?;
    writeln!(out)?;
    writeln!(out, "> {}", summary.description)?;

    let (elements, hidden) = limits::truncate(&summary.key_elements, limits.elements);
    if !elements.is_empty() {
        section(&mut out, "Key Elements")?;
        for element in elements {
            writeln!(
                out,
                "- **{}** `{}` (line {})",
                element.kind, element.name, element.line
            )?;
            if let Some(description) = &element.description {
                writeln!(out, "  - {}", description)?;
            }
        }
        more(&mut out, hidden)?;
    }

    code_list(&mut out, "Imports", &summary.imports, limits.imports)?;
    code_list(&mut out, "Dependencies", &summary.dependencies, limits.dependencies)?;
    marker_list(&mut out, "TODOs", "- [ ]", &summary.todos, limits.todos)?;
    marker_list(&mut out, "Blockers", "- [!]", &summary.blockers, limits.blockers)?;
    Ok(out)
}

pub fn render_folder(summary: &FolderSummary, limits: &Limits) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# Folder Summary: {}", display_name(&summary.path))?;
    writeln!(out)?;
    writeln!(out, "**Path:** `{}`", summary.path)?;
    writeln!(out, "**Files:** {}", group_thousands(summary.file_count as u64))?;
    writeln!(
        out,
        "**Total Lines:** {}",
        group_thousands(summary.total_lines as u64)
    )?;
    writeln!(out)?;
    writeln!(out, "> {}", summary.description)?;

    if !summary.file_types.is_empty() {
        section(&mut out, "File Types")?;
        for (file_type, count) in types_by_frequency(summary) {
            writeln!(out, "- {}: {}", file_type, count)?;
        }
    }

    let (files, hidden) = limits::truncate(&summary.key_files, limits.key_files);
    if !files.is_empty() {
        section(&mut out, "Key Files")?;
        for file in files {
            writeln!(out, "- `{}` - {}", file.path, file.description)?;
        }
        more(&mut out, hidden)?;
    }

    let todos: Vec<String> = summary
        .key_files
        .iter()
        .flat_map(|f| f.todos.iter().cloned())
        .collect();
    let blockers: Vec<String> = summary
        .key_files
        .iter()
        .flat_map(|f| f.blockers.iter().cloned())
        .collect();
    marker_list(&mut out, "TODOs", "- [ ]", &todos, limits.todos)?;
    marker_list(&mut out, "Blockers", "- [!]", &blockers, limits.blockers)?;
    Ok(out)
}

pub fn render_project(summary: &ProjectSummary, limits: &Limits) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# Project Summary: {}", summary.name)?;
    writeln!(out)?;
    writeln!(out, "**Path:** `{}`", summary.path)?;
    writeln!(out, "**Type:** {}", summary.project_type)?;
    if let Some(version) = &summary.version {
        writeln!(out, "**Version:** {}", version)?;
    }
    writeln!(out, "**Files:** {}", group_thousands(summary.file_count as u64))?;
    writeln!(
        out,
        "**Total Lines:** {}",
        group_thousands(summary.total_lines as u64)
    )?;
    if let Some(description) = &summary.description {
        writeln!(out)?;
        writeln!(out, "> {}", description)?;
    }

    if !summary.main_technologies.is_empty() {
        section(&mut out, "Technologies")?;
        let technologies: Vec<String> = summary
            .main_technologies
            .iter()
            .map(|t| format!("**{}**", t))
            .collect();
        writeln!(out, "{}", technologies.join(", "))?;
    }

    if !summary.entry_points.is_empty() {
        section(&mut out, "Entry Points")?;
        for entry in &summary.entry_points {
            writeln!(out, "- `{}`", entry)?;
        }
    }

    code_list(&mut out, "Dependencies", &summary.dependencies, limits.dependencies)?;
    code_list(
        &mut out,
        "Dev Dependencies",
        &summary.dev_dependencies,
        limits.dependencies,
    )?;

    let (files, hidden) = limits::truncate(&summary.key_files, limits.key_files);
    if !files.is_empty() {
        section(&mut out, "Key Files")?;
        for file in files {
            writeln!(out, "### {}", file.path)?;
            writeln!(out, "{}", file.description)?;
            writeln!(out)?;
        }
        more(&mut out, hidden)?;
    }

    marker_list(&mut out, "TODOs", "- [ ]", &summary.todos, limits.todos)?;
    marker_list(&mut out, "Blockers", "- [!]", &summary.blockers, limits.blockers)?;

    let (changes, hidden) = limits::truncate(&summary.recent_changes, limits.recent_changes);
    if !changes.is_empty() {
        section(&mut out, "Recent Changes")?;
        for change in changes {
            writeln!(out, "- {}", change)?;
        }
        more(&mut out, hidden)?;
    }
    Ok(out)
}

// --- Helpers ---

fn section(out: &mut String, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "## {}", title)?;
    writeln!(out)?;
    Ok(())
}

fn more(out: &mut String, hidden: usize) -> Result<()> {
    if hidden > 0 {
        writeln!(out, "- … and {} more", hidden)?;
    }
    Ok(())
}

/// Bulleted list of code-formatted names.
fn code_list(out: &mut String, title: &str, items: &[String], limit: Option<usize>) -> Result<()> {
    let (shown, hidden) = limits::truncate(items, limit);
    if shown.is_empty() {
        return Ok(());
    }
    section(out, title)?;
    for item in shown {
        writeln!(out, "- `{}`", item)?;
    }
    more(out, hidden)
}

fn marker_list(
    out: &mut String,
    title: &str,
    bullet: &str,
    items: &[String],
    limit: Option<usize>,
) -> Result<()> {
    let (shown, hidden) = limits::truncate(items, limit);
    if shown.is_empty() {
        return Ok(());
    }
    section(out, title)?;
    for item in shown {
        writeln!(out, "{} {}", bullet, item)?;
    }
    more(out, hidden)
}

/// File types by descending count; equal counts keep enum order.
fn types_by_frequency(summary: &FolderSummary) -> Vec<(FileType, usize)> {
    let mut types: Vec<(FileType, usize)> =
        summary.file_types.iter().map(|(t, n)| (*t, *n)).collect();
    types.sort_by(|a, b| b.1.cmp(&a.1));
    types
}
