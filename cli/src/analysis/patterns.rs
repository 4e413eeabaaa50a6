//! # ContextSynth Pattern Table
//!
//! File: cli/src/analysis/patterns.rs
//!
//! ## Overview
//!
//! The fixed table of line patterns used by the signal extractor, keyed by
//! `FileType`. Extraction is deliberately shallow: each physical line is
//! matched against a short ordered list of regular expressions, and whatever
//! the first non-empty capture group holds is taken verbatim. There is no
//! parsing beyond that.
//!
//! ## Architecture
//!
//! - `LanguagePatterns`: the static source table, one row per language
//!   (import patterns, declaration patterns tagged with an `ElementKind`,
//!   and the line-comment prefixes used for description lookback). Go also
//!   carries block import patterns, which the extractor only applies inside
//!   an `import ( ... )` group.
//! - `CompiledPatterns`: the same rows with every pattern compiled. The whole
//!   table is compiled once, on first use, behind a `LazyLock`. A pattern
//!   that fails to compile is logged and dropped instead of panicking, so
//!   extraction degrades to fewer matches.
//! - Marker patterns: blocker keywords and todo keywords, both
//!   case-insensitive and whole-word.
//!
//! Declaration patterns are anchored at column 0 so only top-level items
//! match; indented methods and nested functions are ignored. Java is the
//! exception, since its methods always live inside a class body.
//!
use crate::analysis::model::{ElementKind, FileType};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

/// Raw pattern row for one language.
pub struct LanguagePatterns {
    pub file_types: &'static [FileType],
    pub imports: &'static [&'static str],
    /// Applied only to lines inside an `import ( ... )` block.
    pub block_imports: &'static [&'static str],
    pub declarations: &'static [(ElementKind, &'static str)],
    /// Line-comment prefixes, longest first.
    pub comment_prefixes: &'static [&'static str],
}

/// A language row with its patterns compiled.
pub struct CompiledPatterns {
    pub imports: Vec<Regex>,
    pub block_imports: Vec<Regex>,
    pub declarations: Vec<(ElementKind, Regex)>,
    pub comment_prefixes: &'static [&'static str],
}

// --- Source Table ---

const JS_IMPORTS: &[&str] = &[
    r#"^\s*import\s+(?:[\w*{}\s,$]+\s+from\s+)?["']([^"']+)["']"#,
    r#"^\s*export\s+(?:\*|\{[^}]*\})(?:\s+as\s+\w+)?\s+from\s+["']([^"']+)["']"#,
    r#"\brequire\s*\(\s*["']([^"']+)["']\s*\)"#,
    r#"\bimport\s*\(\s*["']([^"']+)["']\s*\)"#,
];

const JS_DECLARATIONS: &[(ElementKind, &str)] = &[
    (
        ElementKind::Function,
        r"^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*(\w+)",
    ),
    (
        ElementKind::Function,
        r"^(?:export\s+)?(?:const|let|var)\s+(\w+)\s*(?::[^=]+)?=\s*(?:async\s+)?(?:function\b|\([^)]*\)(?:\s*:\s*[^=]+)?\s*=>|\w+\s*=>)",
    ),
    (
        ElementKind::Class,
        r"^(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(\w+)",
    ),
];

const TS_DECLARATIONS: &[(ElementKind, &str)] = &[
    (
        ElementKind::Function,
        r"^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*(\w+)",
    ),
    (
        ElementKind::Function,
        r"^(?:export\s+)?(?:const|let|var)\s+(\w+)\s*(?::[^=]+)?=\s*(?:async\s+)?(?:function\b|\([^)]*\)(?:\s*:\s*[^=]+)?\s*=>|\w+\s*=>)",
    ),
    (
        ElementKind::Class,
        r"^(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(\w+)",
    ),
    (ElementKind::Interface, r"^(?:export\s+)?interface\s+(\w+)"),
    (ElementKind::Enum, r"^(?:export\s+)?(?:const\s+)?enum\s+(\w+)"),
];

const C_FUNCTION: &str = r"^(?:(?:static|inline|extern)\s+)*[A-Za-z_][\w\s\*&:<>,]*?[\s\*&](\w+)\s*\([^;]*$";

pub const LANGUAGE_PATTERNS: &[LanguagePatterns] = &[
    LanguagePatterns {
        file_types: &[FileType::Python],
        imports: &[
            r"^\s*import\s+([\w.]+(?:\s+as\s+\w+)?(?:\s*,\s*[\w.]+(?:\s+as\s+\w+)?)*)",
            r"^\s*from\s+(\.*[\w.]*)\s+import\b",
        ],
        block_imports: &[],
        declarations: &[
            (ElementKind::Function, r"^(?:async\s+)?def\s+(\w+)\s*\("),
            (ElementKind::Class, r"^class\s+(\w+)\s*[:(]"),
        ],
        comment_prefixes: &["#"],
    },
    LanguagePatterns {
        file_types: &[FileType::JavaScript],
        imports: JS_IMPORTS,
        block_imports: &[],
        declarations: JS_DECLARATIONS,
        comment_prefixes: &["///", "//", "/**", "/*", "*"],
    },
    LanguagePatterns {
        file_types: &[FileType::TypeScript],
        imports: JS_IMPORTS,
        block_imports: &[],
        declarations: TS_DECLARATIONS,
        comment_prefixes: &["///", "//", "/**", "/*", "*"],
    },
    LanguagePatterns {
        file_types: &[FileType::Rust],
        imports: &[
            r"^\s*(?:pub(?:\([^)]*\))?\s+)?use\s+(?:::)?([\w:]+)",
            r"^\s*(?:pub(?:\([^)]*\))?\s+)?extern\s+crate\s+(\w+)",
        ],
        block_imports: &[],
        declarations: &[
            (
                ElementKind::Function,
                r#"^(?:pub(?:\([^)]*\))?\s+)?(?:const\s+)?(?:async\s+)?(?:unsafe\s+)?(?:extern\s+"[^"]*"\s+)?fn\s+(\w+)"#,
            ),
            (ElementKind::Struct, r"^(?:pub(?:\([^)]*\))?\s+)?struct\s+(\w+)"),
            (ElementKind::Enum, r"^(?:pub(?:\([^)]*\))?\s+)?enum\s+(\w+)"),
            (
                ElementKind::Trait,
                r"^(?:pub(?:\([^)]*\))?\s+)?(?:unsafe\s+)?trait\s+(\w+)",
            ),
        ],
        comment_prefixes: &["///", "//!", "//"],
    },
    LanguagePatterns {
        file_types: &[FileType::Go],
        imports: &[r#"^\s*import\s+(?:[\w.]+\s+)?"([^"]+)""#],
        block_imports: &[r#"^\s*(?:[\w.]+\s+)?"([^"]+)"\s*(?://.*)?$"#],
        declarations: &[
            (
                ElementKind::Function,
                r"^func\s+(?:\([^)]*\)\s*)?(\w+)\s*[(\[]",
            ),
            (ElementKind::Struct, r"^type\s+(\w+)\s+struct\b"),
            (ElementKind::Interface, r"^type\s+(\w+)\s+interface\b"),
        ],
        comment_prefixes: &["//"],
    },
    LanguagePatterns {
        file_types: &[FileType::Java],
        imports: &[r"^\s*import\s+(?:static\s+)?([\w.]+)"],
        block_imports: &[],
        declarations: &[
            (
                ElementKind::Class,
                r"^(?:(?:public|protected|private|abstract|final|static|sealed)\s+)*class\s+(\w+)",
            ),
            (
                ElementKind::Interface,
                r"^(?:(?:public|protected|private|abstract|sealed)\s+)*@?interface\s+(\w+)",
            ),
            (
                ElementKind::Enum,
                r"^(?:(?:public|protected|private)\s+)*enum\s+(\w+)",
            ),
            (
                ElementKind::Function,
                r"^\s{2,8}(?:(?:public|protected|private|static|final|abstract|synchronized)\s+)+[\w<>\[\],.?\s]*?\s(\w+)\s*\([^;]*$",
            ),
        ],
        comment_prefixes: &["//", "/**", "/*", "*"],
    },
    LanguagePatterns {
        file_types: &[FileType::C],
        imports: &[r#"^\s*#\s*include\s*([<"][^>"]+[>"])"#],
        block_imports: &[],
        declarations: &[
            (ElementKind::Struct, r"^(?:typedef\s+)?struct\s+(\w+)\s*\{"),
            (ElementKind::Enum, r"^(?:typedef\s+)?enum\s+(\w+)\s*\{"),
            (ElementKind::Function, C_FUNCTION),
        ],
        comment_prefixes: &["//", "/**", "/*", "*"],
    },
    LanguagePatterns {
        file_types: &[FileType::Cpp],
        imports: &[r#"^\s*#\s*include\s*([<"][^>"]+[>"])"#],
        block_imports: &[],
        declarations: &[
            (
                ElementKind::Class,
                r"^(?:template\s*<[^>]*>\s*)?class\s+(\w+)[^;]*$",
            ),
            (
                ElementKind::Struct,
                r"^(?:template\s*<[^>]*>\s*)?(?:typedef\s+)?struct\s+(\w+)[^;]*$",
            ),
            (ElementKind::Enum, r"^enum\s+(?:class\s+)?(\w+)[^;]*$"),
            (ElementKind::Function, C_FUNCTION),
        ],
        comment_prefixes: &["///", "//", "/**", "/*", "*"],
    },
    LanguagePatterns {
        file_types: &[FileType::Shell],
        imports: &[r"^\s*(?:source|\.)\s+([^\s;]+)"],
        block_imports: &[],
        declarations: &[(
            ElementKind::Function,
            r"^(?:function\s+([\w-]+)|([\w-]+)\s*\(\s*\))",
        )],
        comment_prefixes: &["#"],
    },
    LanguagePatterns {
        file_types: &[FileType::Css],
        imports: &[r#"^\s*@import\s+(?:url\(\s*)?["']?([^"')\s;]+)"#],
        block_imports: &[],
        declarations: &[],
        comment_prefixes: &["/*", "*"],
    },
    LanguagePatterns {
        file_types: &[FileType::Html],
        imports: &[
            r#"<script\b[^>]*\bsrc=["']([^"']+)["']"#,
            r#"<link\b[^>]*\bhref=["']([^"']+)["']"#,
        ],
        block_imports: &[],
        declarations: &[],
        comment_prefixes: &[],
    },
];

/// Names the C-family function pattern can pick up from control flow.
pub const NON_DECLARATION_NAMES: &[&str] = &[
    "if", "for", "while", "switch", "return", "sizeof", "else", "catch", "do",
];

// --- Compiled Table ---

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping invalid extraction pattern {:?}: {}", pattern, e);
            None
        }
    }
}

static COMPILED: LazyLock<HashMap<FileType, CompiledPatterns>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for row in LANGUAGE_PATTERNS {
        for file_type in row.file_types {
            table.insert(
                *file_type,
                CompiledPatterns {
                    imports: row.imports.iter().filter_map(|p| compile(p)).collect(),
                    block_imports: row.block_imports.iter().filter_map(|p| compile(p)).collect(),
                    declarations: row
                        .declarations
                        .iter()
                        .filter_map(|(kind, p)| compile(p).map(|re| (*kind, re)))
                        .collect(),
                    comment_prefixes: row.comment_prefixes,
                },
            );
        }
    }
    table
});

/// Compiled patterns for `file_type`, or `None` for types with no row
/// (data, markup, config, text and unknown files).
pub fn patterns_for(file_type: FileType) -> Option<&'static CompiledPatterns> {
    COMPILED.get(&file_type)
}

// --- Marker Patterns ---

static BLOCKER_MARKER: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)\b(?:BLOCKER|BLOCKED|CRITICAL)\b"));

static TODO_MARKER: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)\b(?:TODO|FIXME|HACK|XXX)\b"));

/// Whole-word, case-insensitive blocker keywords.
pub fn blocker_marker() -> Option<&'static Regex> {
    BLOCKER_MARKER.as_ref()
}

/// Whole-word, case-insensitive todo keywords.
pub fn todo_marker() -> Option<&'static Regex> {
    TODO_MARKER.as_ref()
}
