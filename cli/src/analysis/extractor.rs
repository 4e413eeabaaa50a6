//! # ContextSynth Signal Extractor
//!
//! File: cli/src/analysis/extractor.rs
//!
//! ## Overview
//!
//! Pulls structural and textual signals out of a file's text without parsing
//! it: import identifiers, top-level declarations, and TODO/blocker markers.
//! Also derives the package-level dependency names from the import list and
//! the top-of-file doc comment used as a file description.
//!
//! Extraction never fails. Content that looks binary yields an empty
//! `Extraction`, and a line that matches nothing simply contributes nothing.
//!
//! ## Architecture
//!
//! Every signal is computed per physical line against the tables in
//! `analysis::patterns`:
//!
//! - Imports: first non-empty capture of the first matching import pattern.
//!   Verbatim, first-seen order, duplicates collapsed. A Python `import a, b`
//!   yields one import per module, and Go block patterns only apply between
//!   `import (` and its closing `)`.
//! - Declarations: first matching declaration pattern yields a `CodeElement`
//!   with the 1-based line number. The description comes from a docstring
//!   directly below (Python) or the nearest comment within two lines above.
//! - Markers: a line with a blocker keyword is recorded as a blocker, even
//!   when it also carries a todo keyword. Otherwise a todo keyword makes it a
//!   todo. The recorded text is whatever follows the first keyword on the line.
//!
use crate::analysis::model::{push_unique, CodeElement, FileType};
use crate::analysis::patterns::{self, CompiledPatterns, NON_DECLARATION_NAMES};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Maximum characters kept for a marker string.
pub const MAX_MARKER_CHARS: usize = 100;
/// Maximum characters kept for a description line.
pub const MAX_DESCRIPTION_CHARS: usize = 120;
/// How far above a declaration a describing comment may sit.
const COMMENT_LOOKBACK: usize = 2;

/// Signals extracted from one file's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub imports: Vec<String>,
    pub elements: Vec<CodeElement>,
    pub todos: Vec<String>,
    pub blockers: Vec<String>,
}

/// Category of a marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Todo(String),
    Blocker(String),
}

/// True when the bytes look like binary data (a NUL in the first 8 KiB).
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(8192).any(|b| *b == 0)
}

/// # Extract Signals (`extract`)
///
/// Runs import, declaration and marker extraction over `content`.
///
/// ## Arguments
///
/// * `content` - The full file text.
/// * `file_type` - Selects the pattern row; types without a row still get
///   marker extraction.
///
/// ## Returns
///
/// * `Extraction` - Empty for binary-like content.
pub fn extract(content: &str, file_type: FileType) -> Extraction {
    let mut extraction = Extraction::default();
    if content.contains('\0') {
        trace!("Binary-like content, skipping extraction");
        return extraction;
    }

    let lines: Vec<&str> = content.lines().collect();
    let table = patterns::patterns_for(file_type);
    let mut in_import_block = false;

    for (index, line) in lines.iter().enumerate() {
        if let Some(table) = table {
            let imports = if in_import_block {
                in_import_block = !line.trim_start().starts_with(')');
                match_block_import(table, line).into_iter().collect()
            } else {
                in_import_block = !table.block_imports.is_empty() && opens_import_block(line);
                match_imports(table, line, file_type)
            };
            for import in imports {
                push_unique(&mut extraction.imports, import);
            }
            if let Some(mut element) = match_declaration(table, line, index) {
                element.description = describe_declaration(&lines, index, table, file_type);
                extraction.elements.push(element);
            }
        }
        match extract_marker(line) {
            Some(Marker::Todo(text)) => extraction.todos.push(text),
            Some(Marker::Blocker(text)) => extraction.blockers.push(text),
            None => {}
        }
    }
    extraction
}

fn first_capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.iter().skip(1).flatten().next().map(|m| m.as_str()))
        .filter(|s| !s.is_empty())
}

fn match_imports(table: &CompiledPatterns, line: &str, file_type: FileType) -> Vec<String> {
    let Some(raw) = table.imports.iter().find_map(|re| first_capture(re, line)) else {
        return Vec::new();
    };
    let names: Vec<&str> = match file_type {
        // `use a::b::{C, D}` captures a trailing `::`.
        FileType::Rust => vec![raw.trim_end_matches(':')],
        // `import a, b as c` captures the whole module list.
        FileType::Python => raw
            .split(',')
            .filter_map(|module| module.split_whitespace().next())
            .collect(),
        _ => vec![raw],
    };
    names
        .into_iter()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn match_block_import(table: &CompiledPatterns, line: &str) -> Option<String> {
    table
        .block_imports
        .iter()
        .find_map(|re| first_capture(re, line))
        .map(str::to_string)
}

/// True for a line like `import (` that starts a grouped import.
fn opens_import_block(line: &str) -> bool {
    line.trim()
        .strip_prefix("import")
        .map(str::trim_start)
        .is_some_and(|rest| rest.starts_with('(') && !rest.contains(')'))
}

fn match_declaration(table: &CompiledPatterns, line: &str, index: usize) -> Option<CodeElement> {
    table.declarations.iter().find_map(|(kind, re)| {
        let name = first_capture(re, line)?;
        if NON_DECLARATION_NAMES.contains(&name) {
            return None;
        }
        Some(CodeElement {
            name: name.to_string(),
            kind: *kind,
            line: index + 1,
            description: None,
        })
    })
}

// --- Descriptions ---

fn describe_declaration(
    lines: &[&str],
    index: usize,
    table: &CompiledPatterns,
    file_type: FileType,
) -> Option<String> {
    if file_type == FileType::Python {
        if let Some(doc) = docstring_at(lines, index + 1) {
            return Some(doc);
        }
    }
    preceding_comment(lines, index, table.comment_prefixes)
}

/// Nearest comment text in the `COMMENT_LOOKBACK` lines above `index`.
/// Attributes, decorators, block-comment closers and doc tags (`@param`)
/// are stepped over without using up the window. Blank lines and empty
/// comment lines are skipped; any other code line ends the search.
fn preceding_comment(lines: &[&str], index: usize, prefixes: &[&str]) -> Option<String> {
    if prefixes.is_empty() {
        return None;
    }
    let mut remaining = COMMENT_LOOKBACK;
    for line in lines[..index].iter().rev() {
        let trimmed = line.trim();
        let body = strip_comment(trimmed, prefixes);
        if trimmed == "*/"
            || trimmed.starts_with("#[")
            || trimmed.starts_with('@')
            || body.as_deref().is_some_and(|text| text.starts_with('@'))
        {
            continue;
        }
        if remaining == 0 {
            break;
        }
        remaining -= 1;
        match body {
            Some(text) if !text.is_empty() => {
                return Some(truncate_chars(&text, MAX_DESCRIPTION_CHARS))
            }
            Some(_) => continue,
            None if trimmed.is_empty() => continue,
            None => break,
        }
    }
    None
}

/// Returns the comment body when `trimmed` starts with one of `prefixes`.
fn strip_comment(trimmed: &str, prefixes: &[&str]) -> Option<String> {
    let prefix = prefixes.iter().find(|p| trimmed.starts_with(**p))?;
    let body = trimmed[prefix.len()..]
        .trim_end()
        .trim_end_matches("*/")
        .trim();
    Some(body.to_string())
}

/// Reads a Python docstring opening at `index`, if any.
fn docstring_at(lines: &[&str], index: usize) -> Option<String> {
    let trimmed = lines.get(index)?.trim();
    let quote = ["\"\"\"", "'''"]
        .into_iter()
        .find(|q| trimmed.starts_with(q))?;
    let rest = trimmed[quote.len()..].trim();
    let first = match rest.find(quote) {
        Some(end) => rest[..end].trim(),
        None => rest,
    };
    if !first.is_empty() {
        return Some(truncate_chars(first, MAX_DESCRIPTION_CHARS));
    }
    // Docstring text starts on the following line.
    let next = lines.get(index + 1)?.trim();
    let next = next.split(quote).next().unwrap_or("").trim();
    (!next.is_empty()).then(|| truncate_chars(next, MAX_DESCRIPTION_CHARS))
}

static HTML_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>\s*(.*?)\s*</title>").ok());

/// # File Doc Comment (`file_doc_comment`)
///
/// Finds an explicit description at the top of a file: a Rust `//!` block, a
/// Python module docstring, a leading block or line comment for C-family and
/// web languages, the first `# ` heading in Markdown, an HTML `<title>`, or a
/// leading `#` comment for shell, YAML and config files.
pub fn file_doc_comment(content: &str, file_type: FileType) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    let text = match file_type {
        FileType::Rust => lines
            .iter()
            .map(|l| l.trim())
            .take_while(|l| l.starts_with("//!") || l.is_empty())
            .filter_map(|l| l.strip_prefix("//!"))
            .map(|l| l.trim().trim_start_matches('#').trim())
            .find(|l| !l.is_empty())
            .map(str::to_string),
        FileType::Python => {
            let start = lines.iter().position(|l| {
                let t = l.trim();
                !t.is_empty() && !t.starts_with('#')
            })?;
            docstring_at(&lines, start)
        }
        FileType::C
        | FileType::Cpp
        | FileType::JavaScript
        | FileType::TypeScript
        | FileType::Go
        | FileType::Java
        | FileType::Css => leading_c_comment(&lines),
        FileType::Markdown => lines
            .iter()
            .find_map(|l| l.trim_start().strip_prefix("# "))
            .map(|l| l.trim().to_string()),
        FileType::Html => HTML_TITLE
            .as_ref()
            .and_then(|re| re.captures(content))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        FileType::Shell | FileType::Yaml | FileType::Config => lines
            .iter()
            .map(|l| l.trim())
            .skip_while(|l| l.starts_with("#!"))
            .find(|l| !l.is_empty())
            .and_then(|l| l.strip_prefix('#'))
            .map(|l| l.trim_start_matches('#').trim().to_string()),
        _ => None,
    }?;
    let text = text.trim();
    (!text.is_empty()).then(|| truncate_chars(text, MAX_DESCRIPTION_CHARS))
}

fn leading_c_comment(lines: &[&str]) -> Option<String> {
    let mut iter = lines.iter().map(|l| l.trim()).skip_while(|l| {
        l.is_empty()
            || l.starts_with("#!")
            || l.starts_with("\"use strict\"")
            || l.starts_with("'use strict'")
    });
    let first = iter.next()?;
    if let Some(rest) = first.strip_prefix("//") {
        let rest = rest.trim_start_matches('/').trim();
        return (!rest.is_empty()).then(|| rest.to_string());
    }
    let rest = first.strip_prefix("/*")?;
    let mut candidates = std::iter::once(rest).chain(iter);
    candidates.find_map(|line| {
        let closes = line.contains("*/");
        let text = line
            .split("*/")
            .next()
            .unwrap_or("")
            .trim()
            .trim_start_matches('*')
            .trim()
            .to_string();
        if !text.is_empty() && !text.starts_with('@') {
            Some(Some(text))
        } else if closes {
            Some(None)
        } else {
            None
        }
    })?
}

// --- Markers ---

/// # Extract Marker (`extract_marker`)
///
/// Classifies one line as a todo, a blocker, or neither. A blocker keyword
/// anywhere on the line makes it a blocker. The recorded text follows the
/// earliest keyword of either kind, with an `(owner)` tag, leading
/// punctuation and trailing comment closers removed. A keyword followed by
/// nothing but punctuation records nothing.
pub fn extract_marker(line: &str) -> Option<Marker> {
    let blocker = patterns::blocker_marker().and_then(|re| re.find(line));
    let todo = patterns::todo_marker().and_then(|re| re.find(line));
    let earliest_end = match (blocker, todo) {
        (Some(b), Some(t)) => {
            if b.start() <= t.start() {
                b.end()
            } else {
                t.end()
            }
        }
        (Some(m), None) | (None, Some(m)) => m.end(),
        (None, None) => return None,
    };
    let text = clean_marker_text(&line[earliest_end..])?;
    Some(if blocker.is_some() {
        Marker::Blocker(text)
    } else {
        Marker::Todo(text)
    })
}

fn clean_marker_text(remainder: &str) -> Option<String> {
    let mut text = remainder;
    if text.starts_with('(') {
        if let Some(close) = text.find(')') {
            text = &text[close + 1..];
        }
    }
    let text = text
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end();
    let text = text
        .strip_suffix("*/")
        .or_else(|| text.strip_suffix("-->"))
        .unwrap_or(text)
        .trim_end();
    (!text.is_empty()).then(|| truncate_chars(text, MAX_MARKER_CHARS))
}

// --- Dependencies ---

/// # Dependencies From Imports (`dependencies_from_imports`)
///
/// Reduces imports to external package names. Relative imports (leading `.`
/// or `/`, Rust `crate`/`self`/`super` paths, quoted C includes) are local
/// and dropped. Types whose imports are plain file references (shell, CSS,
/// HTML) have no dependencies.
pub fn dependencies_from_imports(imports: &[String], file_type: FileType) -> Vec<String> {
    let mut deps = Vec::new();
    for import in imports {
        if let Some(dep) = package_name(import, file_type) {
            push_unique(&mut deps, dep);
        }
    }
    deps
}

fn package_name(import: &str, file_type: FileType) -> Option<String> {
    let import = import.trim();
    if import.is_empty() {
        return None;
    }
    let name = match file_type {
        FileType::Python => {
            if import.starts_with('.') {
                return None;
            }
            import.split('.').next()?.to_string()
        }
        FileType::JavaScript | FileType::TypeScript => {
            if import.starts_with('.') || import.starts_with('/') {
                return None;
            }
            let import = import.strip_prefix("node:").unwrap_or(import);
            let mut parts = import.split('/');
            let first = parts.next()?;
            if first.starts_with('@') {
                format!("{}/{}", first, parts.next()?)
            } else {
                first.to_string()
            }
        }
        FileType::Rust => {
            let root = import.split("::").next()?;
            if matches!(root, "crate" | "self" | "super") {
                return None;
            }
            root.to_string()
        }
        FileType::Go => {
            if import.starts_with('.') {
                return None;
            }
            import.to_string()
        }
        FileType::Java => import.split('.').take(2).collect::<Vec<_>>().join("."),
        FileType::C | FileType::Cpp => {
            if import.starts_with('"') {
                return None;
            }
            import.trim_matches(|c| c == '<' || c == '>').to_string()
        }
        _ => return None,
    };
    (!name.is_empty()).then_some(name)
}

/// Truncates to at most `max` characters on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].trim_end().to_string(),
        None => text.to_string(),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::ElementKind;

    #[test]
    fn test_extract_python_file() {
        let content = r#"#!/usr/bin/env python3
"""Command line entry point."""
import os
import os.path
from requests import Session
from .models import User

# Parses the configuration file.
def load(path):
    # TODO: cache results
    return path

class App:
    """Top-level application."""
    def run(self):
        pass
"#;
        let extraction = extract(content, FileType::Python);
        assert_eq!(extraction.imports, vec!["os", "os.path", "requests", ".models"]);
        assert_eq!(extraction.elements.len(), 2);
        assert_eq!(extraction.elements[0].name, "load");
        assert_eq!(extraction.elements[0].kind, ElementKind::Function);
        assert_eq!(extraction.elements[0].line, 9);
        assert_eq!(
            extraction.elements[0].description.as_deref(),
            Some("Parses the configuration file.")
        );
        assert_eq!(extraction.elements[1].name, "App");
        assert_eq!(
            extraction.elements[1].description.as_deref(),
            Some("Top-level application.")
        );
        assert_eq!(extraction.todos, vec!["cache results"]);
        assert!(extraction.blockers.is_empty());

        let deps = dependencies_from_imports(&extraction.imports, FileType::Python);
        assert_eq!(deps, vec!["os", "requests"]);
    }

    #[test]
    fn test_extract_rust_file_with_block_comment_description() {
        let content = r#"use std::fmt;
use serde::{Deserialize, Serialize};
use crate::model::Summary;

/// Renders a summary.
#[derive(Debug)]
pub struct Renderer;

/**
 * Entry point.
 */
fn main() {}
"#;
        let extraction = extract(content, FileType::Rust);
        assert_eq!(extraction.imports, vec!["std::fmt", "serde", "crate::model::Summary"]);
        let names: Vec<_> = extraction.elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Renderer", "main"]);
        assert_eq!(
            extraction.elements[0].description.as_deref(),
            Some("Renders a summary.")
        );
        assert_eq!(extraction.elements[1].description, None);
        assert_eq!(
            dependencies_from_imports(&extraction.imports, FileType::Rust),
            vec!["std", "serde"]
        );
    }

    #[test]
    fn test_javascript_description_inside_jsdoc() {
        let content = "/**\n * Adds two numbers.\n */\nfunction add(a, b) { return a + b; }\n";
        let extraction = extract(content, FileType::JavaScript);
        assert_eq!(extraction.elements.len(), 1);
        assert_eq!(
            extraction.elements[0].description.as_deref(),
            Some("Adds two numbers.")
        );
    }

    #[test]
    fn test_jsdoc_tags_do_not_become_descriptions() {
        let content = "/**\n * Adds two numbers.\n * @param a first\n * @param b second\n */\nfunction add(a, b) { return a + b; }\n";
        let extraction = extract(content, FileType::JavaScript);
        assert_eq!(
            extraction.elements[0].description.as_deref(),
            Some("Adds two numbers.")
        );

        // A tag block with no summary line describes nothing.
        let content = "/**\n * @returns {number}\n */\nfunction one() { return 1; }\n";
        let extraction = extract(content, FileType::JavaScript);
        assert_eq!(extraction.elements[0].description, None);
    }

    #[test]
    fn test_go_imports_only_inside_import_group() {
        let content = r#"package greet

import "fmt"

func Hello() string {
	return "hello"
}

func World() string {
	return "github.com/x/y"
}
"#;
        let extraction = extract(content, FileType::Go);
        assert_eq!(extraction.imports, vec!["fmt"]);
        assert_eq!(
            dependencies_from_imports(&extraction.imports, FileType::Go),
            vec!["fmt"]
        );

        let content = r#"package main

import (
	"fmt"
	log "github.com/sirupsen/logrus" // logging
	_ "./local"
)

func main() {
	fmt.Println("done")
	log.Info("started")
}
"#;
        let extraction = extract(content, FileType::Go);
        assert_eq!(
            extraction.imports,
            vec!["fmt", "github.com/sirupsen/logrus", "./local"]
        );
        assert_eq!(
            dependencies_from_imports(&extraction.imports, FileType::Go),
            vec!["fmt", "github.com/sirupsen/logrus"]
        );
        assert_eq!(extraction.elements[0].name, "main");
    }

    #[test]
    fn test_python_import_lists_are_split() {
        let extraction = extract("import os, sys as system
import json
", FileType::Python);
        assert_eq!(extraction.imports, vec!["os", "sys", "json"]);
        assert_eq!(
            dependencies_from_imports(&extraction.imports, FileType::Python),
            vec!["os", "sys", "json"]
        );
    }

    #[test]
    fn test_blocker_takes_precedence_over_todo() {
        assert_eq!(
            extract_marker("// TODO: fix CRITICAL race in cache"),
            Some(Marker::Blocker("fix CRITICAL race in cache".into()))
        );
        assert_eq!(
            extract_marker("# BLOCKER: needs TODO review"),
            Some(Marker::Blocker("needs TODO review".into()))
        );
        let extraction = extract("// FIXME blocked by upstream\n", FileType::JavaScript);
        assert!(extraction.todos.is_empty());
        assert_eq!(extraction.blockers, vec!["blocked by upstream"]);
    }

    #[test]
    fn test_marker_cleanup() {
        assert_eq!(
            extract_marker("    // TODO(alice): handle retries"),
            Some(Marker::Todo("handle retries".into()))
        );
        assert_eq!(
            extract_marker("/* hack - temporary workaround */"),
            Some(Marker::Todo("temporary workaround".into()))
        );
        assert_eq!(
            extract_marker("<!-- XXX: remove banner -->"),
            Some(Marker::Todo("remove banner".into()))
        );
        assert_eq!(extract_marker("// TODO:"), None);
        assert_eq!(
            extract_marker("// FIXME: BLOCKER: schema migration"),
            Some(Marker::Blocker("BLOCKER: schema migration".into()))
        );
        assert_eq!(
            extract_marker("# todo => \"quoted\" follow-up"),
            Some(Marker::Todo("quoted\" follow-up".into()))
        );
        assert_eq!(extract_marker("let todos = vec![];"), None);

        let long = format!("// TODO: {}", "x".repeat(300));
        match extract_marker(&long) {
            Some(Marker::Todo(text)) => assert_eq!(text.chars().count(), MAX_MARKER_CHARS),
            other => panic!("unexpected marker: {:?}", other),
        }
    }

    #[test]
    fn test_keyword_followed_by_punctuation_records_nothing() {
        let content = "if level == \"critical\":\n    pass\nstate = 'BLOCKED'\n";
        let extraction = extract(content, FileType::Python);
        assert!(extraction.blockers.is_empty());
        assert!(extraction.todos.is_empty());
    }

    #[test]
    fn test_markers_found_in_any_file_type() {
        let extraction = extract("Notes\nTODO: write docs\n", FileType::Text);
        assert_eq!(extraction.todos, vec!["write docs"]);
        assert!(extraction.imports.is_empty());
        assert!(extraction.elements.is_empty());
    }

    #[test]
    fn test_binary_and_empty_content() {
        assert_eq!(extract("", FileType::Rust), Extraction::default());
        assert_eq!(
            extract("fn main() {}\0\0// TODO: x", FileType::Rust),
            Extraction::default()
        );
        assert!(is_binary(b"\x89PNG\r\n\x1a\n\0\0"));
        assert!(!is_binary(b"plain text"));
    }

    #[test]
    fn test_import_order_and_dedup() {
        let content = "import b from 'b';\nimport a from 'a';\nconst b2 = require('b');\nimport x from './x';\n";
        let extraction = extract(content, FileType::JavaScript);
        assert_eq!(extraction.imports, vec!["b", "a", "./x"]);
        assert_eq!(
            dependencies_from_imports(&extraction.imports, FileType::JavaScript),
            vec!["b", "a"]
        );
    }

    #[test]
    fn test_package_names() {
        let imports: Vec<String> = ["@scope/pkg/sub", "lodash/fp", "node:fs", "/abs/path"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            dependencies_from_imports(&imports, FileType::TypeScript),
            vec!["@scope/pkg", "lodash", "fs"]
        );
        let includes = vec!["<stdio.h>".to_string(), "\"local.h\"".to_string()];
        assert_eq!(dependencies_from_imports(&includes, FileType::C), vec!["stdio.h"]);
        let sources = vec!["lib.sh".to_string()];
        assert!(dependencies_from_imports(&sources, FileType::Shell).is_empty());
    }

    #[test]
    fn test_file_doc_comments() {
        assert_eq!(
            file_doc_comment("//! # Pattern Table\n//!\n//! More.\nuse x;", FileType::Rust),
            Some("Pattern Table".into())
        );
        assert_eq!(
            file_doc_comment("# coding\n\n\"\"\"\nUtilities for parsing.\n\"\"\"\n", FileType::Python),
            Some("Utilities for parsing.".into())
        );
        assert_eq!(
            file_doc_comment("/**\n * HTTP server setup.\n */\nconst x = 1;", FileType::JavaScript),
            Some("HTTP server setup.".into())
        );
        assert_eq!(
            file_doc_comment("// Package main runs the server.\npackage main", FileType::Go),
            Some("Package main runs the server.".into())
        );
        assert_eq!(
            file_doc_comment("Intro\n# Title Here\n", FileType::Markdown),
            Some("Title Here".into())
        );
        assert_eq!(
            file_doc_comment("<html><head><TITLE> Dashboard </TITLE></head>", FileType::Html),
            Some("Dashboard".into())
        );
        assert_eq!(
            file_doc_comment("#!/bin/sh\n# Deploys the site\nset -e", FileType::Shell),
            Some("Deploys the site".into())
        );
        assert_eq!(file_doc_comment("fn main() {}", FileType::Rust), None);
        assert_eq!(file_doc_comment("", FileType::Python), None);
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
