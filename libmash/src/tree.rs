//! Phase 3: Tree Builder
//!
//! Converts one record run into a rooted tree. The spacing interval (step)
//! is inferred from the first consecutive indent difference; every later
//! difference must be an exact multiple of it, or the document's nesting
//! cannot be derived from spacing alone.
//!
//! Placement walks an explicit stack of (node, indent) pairs: a record pops
//! the stack to the nearest strictly-shallower entry and attaches there, so
//! returns to any earlier ancestor level land on the right branch. Nodes
//! live in an arena addressed by index and child links are indices, never
//! live references into a reallocating vector.

use crate::error::{MashError, Result};
use crate::scanner::KeyRecord;

/// One key and the indices of its nested keys, in document order.
#[derive(Debug)]
struct Node {
    record: KeyRecord,
    children: Vec<usize>,
}

/// A rooted tree over an arena of nodes. Index 0 is the root.
///
/// Trees are append-only during the build and read-only afterwards.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
    step: usize,
}

impl Tree {
    /// The record at the root of this tree.
    pub fn root(&self) -> &KeyRecord {
        &self.nodes[0].record
    }

    /// The inferred spacing interval.
    pub fn step(&self) -> usize {
        self.step
    }

    fn key(&self, index: usize) -> &str {
        &self.nodes[index].record.key
    }

    fn children(&self, index: usize) -> &[usize] {
        &self.nodes[index].children
    }

    /// Whether the whole path, starting at this tree's root, names a chain
    /// of nested keys. Returns false rather than failing when it does not.
    pub fn is_valid_path(&self, path: &[String]) -> bool {
        self.validate_from(0, path)
    }

    fn validate_from(&self, index: usize, path: &[String]) -> bool {
        match path {
            [] => false,
            [last] => self.key(index) == last.as_str(),
            [head, tail @ ..] => {
                self.key(index) == head.as_str()
                    && self
                        .children(index)
                        .iter()
                        .any(|&child| self.validate_from(child, tail))
            }
        }
    }

    /// Re-walk the path from the root and return the deepest record reached.
    ///
    /// Each step descends into the first child whose key matches the next
    /// path element; duplicate sibling keys are not deduplicated, first
    /// match wins. An element with no matching child leaves the cursor in
    /// place. An empty path names the root.
    pub fn path_target(&self, path: &[String]) -> &KeyRecord {
        let mut index = 0;
        for key in path.iter().skip(1) {
            let matched = self
                .children(index)
                .iter()
                .find(|&&child| self.key(child) == key.as_str());
            if let Some(&child) = matched {
                index = child;
            }
        }
        &self.nodes[index].record
    }
}

/// Build one tree from a record run. The first record is the root.
pub fn build_tree(records: Vec<KeyRecord>) -> Result<Tree> {
    let step = infer_step(&records)?;

    let mut iter = records.into_iter();
    let root = match iter.next() {
        Some(root) => root,
        None => return Err(MashError::EmptyDocument),
    };
    let root_indent = root.indent;
    let mut nodes = vec![Node {
        record: root,
        children: Vec::new(),
    }];

    // Stack of (node index, indent), innermost last. The root entry is
    // never popped, so every record finds a parent.
    let mut stack: Vec<(usize, usize)> = vec![(0, root_indent)];
    for record in iter {
        while stack.len() > 1 && stack[stack.len() - 1].1 >= record.indent {
            stack.pop();
        }
        let (parent, _) = stack[stack.len() - 1];

        let index = nodes.len();
        let indent = record.indent;
        nodes.push(Node {
            record,
            children: Vec::new(),
        });
        nodes[parent].children.push(index);
        stack.push((index, indent));
    }

    Ok(Tree { nodes, step })
}

/// Infer the spacing interval from the first consecutive indent difference.
///
/// A run of one record has no differences and takes the root's own indent;
/// the value is never consulted because there is nothing left to place.
fn infer_step(records: &[KeyRecord]) -> Result<usize> {
    if records.len() < 2 {
        return Ok(records.first().map_or(0, |r| r.indent));
    }

    let deltas: Vec<i64> = records
        .windows(2)
        .map(|pair| pair[1].indent as i64 - pair[0].indent as i64)
        .collect();

    let step = deltas[0];
    if step <= 0 {
        return Err(MashError::InconsistentIndentation {
            line: records[1].line_number,
            step: step.unsigned_abs() as usize,
            indent: records[1].indent,
        });
    }
    for (delta, record) in deltas.iter().zip(&records[1..]) {
        if delta % step != 0 {
            return Err(MashError::InconsistentIndentation {
                line: record.line_number,
                step: step as usize,
                indent: record.indent,
            });
        }
    }
    Ok(step as usize)
}
