//! # ContextSynth Rendering Limits
//!
//! File: cli/src/render/limits.rs
//!
//! ## Overview
//!
//! How many entries of each list the human-readable renderers show for a
//! `DetailLevel`. `None` means no limit.
//!
//! | list            | brief | standard | detailed |
//! |-----------------|-------|----------|----------|
//! | code elements   | 0     | 10       | all      |
//! | imports         | 5     | 10       | all      |
//! | dependencies    | 5     | 15       | all      |
//! | todos           | 3     | 5        | all      |
//! | blockers        | 3     | 5        | all      |
//! | key files       | 3     | 5        | all      |
//! | recent changes  | 3     | 5        | all      |
//!
use crate::analysis::model::DetailLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub elements: Option<usize>,
    pub imports: Option<usize>,
    pub dependencies: Option<usize>,
    pub todos: Option<usize>,
    pub blockers: Option<usize>,
    pub key_files: Option<usize>,
    pub recent_changes: Option<usize>,
}

impl Limits {
    pub fn for_level(level: DetailLevel) -> Self {
        match level {
            DetailLevel::Brief => Self {
                elements: Some(0),
                imports: Some(5),
                dependencies: Some(5),
                todos: Some(3),
                blockers: Some(3),
                key_files: Some(3),
                recent_changes: Some(3),
            },
            DetailLevel::Standard => Self {
                elements: Some(10),
                imports: Some(10),
                dependencies: Some(15),
                todos: Some(5),
                blockers: Some(5),
                key_files: Some(5),
                recent_changes: Some(5),
            },
            DetailLevel::Detailed => Self {
                elements: None,
                imports: None,
                dependencies: None,
                todos: None,
                blockers: None,
                key_files: None,
                recent_changes: None,
            },
        }
    }
}

/// Splits `items` into the shown prefix and the number of hidden entries.
pub fn truncate<T>(items: &[T], limit: Option<usize>) -> (&[T], usize) {
    match limit {
        Some(max) if items.len() > max => (&items[..max], items.len() - max),
        _ => (items, 0),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        let items = [1, 2, 3, 4];
        assert_eq!(truncate(&items, Some(2)), (&items[..2], 2));
        assert_eq!(truncate(&items, Some(4)), (&items[..], 0));
        assert_eq!(truncate(&items, None), (&items[..], 0));
        assert_eq!(truncate(&items, Some(0)), (&items[..0], 4));
    }

    #[test]
    fn test_levels_grow_monotonically() {
        let brief = Limits::for_level(DetailLevel::Brief);
        let standard = Limits::for_level(DetailLevel::Standard);
        let detailed = Limits::for_level(DetailLevel::Detailed);
        assert_eq!(brief.elements, Some(0));
        assert_eq!(standard.dependencies, Some(15));
        assert!(brief.todos < standard.todos);
        assert_eq!(detailed.key_files, None);
    }
}
