//! Phase 2: Forest Splitter
//!
//! Partitions the ordered key-record list into one run per top-level tree.
//! Every record carrying the document-wide minimum indentation starts a new
//! tree; the records between two such boundaries belong to the earlier one.
//! A document may legally contain several indentation-0 roots, each resolved
//! as an independent tree.

use crate::scanner::KeyRecord;

/// Split the full record sequence into per-tree runs, in document order.
///
/// The minimum indentation is assumed to unambiguously mark tree boundaries:
/// root-level keys are never nested elsewhere at the same indentation as a
/// deeper level. When only one record carries the minimum, the result is a
/// single run spanning the entire input.
pub fn split_into_trees(records: Vec<KeyRecord>) -> Vec<Vec<KeyRecord>> {
    let min_indent = match records.iter().map(|r| r.indent).min() {
        Some(min) => min,
        None => return Vec::new(),
    };

    let mut runs: Vec<Vec<KeyRecord>> = Vec::new();
    let mut current: Vec<KeyRecord> = Vec::new();
    let mut seen_root = false;

    for record in records {
        if record.indent == min_indent {
            if seen_root {
                runs.push(std::mem::take(&mut current));
            }
            seen_root = true;
        }
        current.push(record);
    }
    runs.push(current);
    runs
}
