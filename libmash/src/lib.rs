//! mash document reconstruction.
//!
//! mash rebuilds the key hierarchy of an indentation-based yaml document,
//! locates a dotted key path inside it, and computes the exact line and
//! indentation at which new content must be spliced in so the result stays
//! valid under the same indentation convention.
//!
//! # Pipeline
//!
//! The reconstruction operates in five phases:
//!
//! 1. **Scanner**: converts raw document lines into key records, rejecting
//!    tab indentation and quoted keys.
//!
//! 2. **Forest splitter**: partitions the records into one run per
//!    top-level tree, split at the recurring minimum indentation.
//!
//! 3. **Tree builder**: infers each run's spacing interval and attaches
//!    records over an explicit indentation stack.
//!
//! 4. **Path resolver**: finds the first tree containing the dotted path
//!    and walks to the deepest matching record.
//!
//! 5. **Insertion planner**: derives the target line and padding width and
//!    shapes the merged output.

mod error;
mod forest;
mod path;
mod scanner;
mod splice;
mod tree;

pub use error::{MashError, Result};
pub use forest::split_into_trees;
pub use path::{resolve, DottedPath};
pub use scanner::{scan, strip_key, KeyRecord};
pub use splice::{merge, plan, ContentKind, InsertionPoint};
pub use tree::{build_tree, Tree};

/// Build the forest of key trees for a document.
pub fn grow_forest(document: &str) -> Result<Vec<Tree>> {
    let records = scan(document)?;
    split_into_trees(records)
        .into_iter()
        .map(build_tree)
        .collect()
}

/// Locate the insertion point for a dotted path within a document.
///
/// # Example
///
/// ```
/// use libmash::locate;
///
/// let point = locate("server:\n  port:\n", "server.port").unwrap();
/// assert_eq!(point.line, 2);
/// assert_eq!(point.indent, 4);
/// ```
pub fn locate(document: &str, raw_path: &str) -> Result<InsertionPoint> {
    let forest = grow_forest(document)?;
    let path = DottedPath::parse(raw_path);
    let record = resolve(&forest, &path)?;
    Ok(plan(record))
}

/// Splice content into a document at the dotted path.
///
/// Runs the full pipeline and returns the merged document text. The
/// original document is untouched outside the target line.
pub fn splice(document: &str, content: &str, raw_path: &str, kind: ContentKind) -> Result<String> {
    let point = locate(document, raw_path)?;
    Ok(merge(document, content, point, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_reports_line_and_padding() {
        let document = "service:\n  handlers:\n    timeout:\n";
        let point = locate(document, "service.handlers.timeout").unwrap();
        assert_eq!(point.line, 3);
        assert_eq!(point.indent, 6);
    }

    #[test]
    fn test_splice_code_block() {
        let document = "service:\n  handler:\n";
        let merged = splice(document, "fn main() {}\n", "service.handler", ContentKind::Code)
            .unwrap();
        assert_eq!(merged, "service:\n  handler: |\n    fn main() {}\n");
    }

    #[test]
    fn test_splice_error_propagates() {
        let document = "service:\n  handler:\n";
        let result = splice(document, "x\n", "service.missing", ContentKind::Code);
        assert_eq!(
            result.unwrap_err(),
            MashError::PathNotFound {
                path: "service.missing".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_content_round_trips_the_forest() {
        // Splicing an empty stream may add a block marker to the target
        // line but never changes the reconstructed structure.
        let document = "a:\n  b:\n    c:\n  d:\nsecond:\n  e:\n";
        let merged = splice(document, "", "a.b", ContentKind::Code).unwrap();
        assert_eq!(scan(document).unwrap(), scan(&merged).unwrap());
    }
}
