//! Phase 4: Path Resolver
//!
//! Parses the caller's dotted path and finds which tree of the forest (if
//! any) contains it, root to target. Trees are tried in document order and
//! the first one validating the full path wins.

use std::fmt;

use crate::error::{MashError, Result};
use crate::scanner::KeyRecord;
use crate::tree::Tree;

/// A dot-separated sequence of key names, left-to-right from a root key to
/// the target key, e.g. "service.handlers.timeout".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
    segments: Vec<String>,
}

impl DottedPath {
    /// Parse a dotted path string into its key names.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    /// The key names, left to right.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Find the first tree containing the full path and return the record of
/// the deepest matching node.
pub fn resolve<'a>(forest: &'a [Tree], path: &DottedPath) -> Result<&'a KeyRecord> {
    forest
        .iter()
        .find(|tree| tree.is_valid_path(path.segments()))
        .map(|tree| tree.path_target(path.segments()))
        .ok_or_else(|| MashError::PathNotFound {
            path: path.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;
    use crate::forest::split_into_trees;
    use crate::tree::build_tree;

    fn forest_of(source: &str) -> Vec<Tree> {
        split_into_trees(scan(source).unwrap())
            .into_iter()
            .map(|run| build_tree(run).unwrap())
            .collect()
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let path = DottedPath::parse("service.handlers.timeout");
        assert_eq!(
            path.segments(),
            &["service", "handlers", "timeout"]
        );
        assert_eq!(path.to_string(), "service.handlers.timeout");
    }

    #[test]
    fn test_resolve_nested_path() {
        let forest = forest_of("a:\n  b:\n    c:\n  d:\n");
        let record = resolve(&forest, &DottedPath::parse("a.b.c")).unwrap();
        assert_eq!(record.key, "c");
        assert_eq!(record.line_number, 3);
    }

    #[test]
    fn test_resolve_missing_path_fails() {
        let forest = forest_of("a:\n  b:\n    c:\n  d:\n");
        let result = resolve(&forest, &DottedPath::parse("a.d.x"));
        assert_eq!(
            result.unwrap_err(),
            MashError::PathNotFound {
                path: "a.d.x".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_tries_trees_in_order() {
        // The path is only valid in the second tree.
        let forest = forest_of("first:\n  x:\nsecond:\n  y:\n");
        assert_eq!(forest.len(), 2);
        let record = resolve(&forest, &DottedPath::parse("second.y")).unwrap();
        assert_eq!(record.line_number, 4);
    }

    #[test]
    fn test_resolve_single_segment_path() {
        let forest = forest_of("first:\n  x:\nsecond:\n  y:\n");
        let record = resolve(&forest, &DottedPath::parse("second")).unwrap();
        assert_eq!(record.line_number, 3);
        assert_eq!(record.indent, 0);
    }
}
