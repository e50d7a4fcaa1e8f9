//! Phase 5: Insertion Planner
//!
//! Computes the output line at which injected content begins and the width
//! its lines are padded to, then shapes the merged document: a single
//! linear pass over the source lines with the content interleaved at the
//! target line.

use crate::scanner::KeyRecord;

/// The computed (line, indentation) at which new content is spliced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPoint {
    /// One-based line number of the matched key; content follows this line.
    pub line: usize,
    /// Width injected lines are padded to, one nesting level deeper than
    /// the matched key.
    pub indent: usize,
}

/// How injected content is treated at the insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Source code: the matched line gains a " |" block-scalar marker so
    /// every injected line reads as literal text.
    Code,
    /// Structured data: injected lines nest as-is under the matched key.
    Structured,
}

/// Plan the insertion point for a resolved record.
pub fn plan(record: &KeyRecord) -> InsertionPoint {
    InsertionPoint {
        line: record.line_number,
        indent: record.indent + 2,
    }
}

/// Interleave content into the document at the insertion point.
///
/// Lines away from the target line are copied verbatim. At the target line
/// the original text is emitted, then the kind's value marker, then each
/// content line left-padded to the planned indentation. Blank content lines
/// are padded like any other.
pub fn merge(document: &str, content: &str, point: InsertionPoint, kind: ContentKind) -> String {
    let mut out = String::new();
    for (i, line) in document.lines().enumerate() {
        out.push_str(line);
        if i + 1 == point.line {
            if kind == ContentKind::Code {
                out.push_str(" |");
            }
            out.push('\n');
            for injected in content.lines() {
                push_padded(&mut out, injected, point.indent);
            }
        } else {
            out.push('\n');
        }
    }
    out
}

/// Append one content line padded with the given number of spaces.
fn push_padded(out: &mut String, line: &str, width: usize) {
    for _ in 0..width {
        out.push(' ');
    }
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, line_number: usize, indent: usize) -> KeyRecord {
        KeyRecord {
            raw_text: format!("{}{}:", " ".repeat(indent), key),
            key: key.to_string(),
            line_number,
            indent,
        }
    }

    #[test]
    fn test_plan_targets_matched_line_one_level_deeper() {
        let point = plan(&record("run", 4, 2));
        assert_eq!(point, InsertionPoint { line: 4, indent: 4 });
    }

    #[test]
    fn test_merge_code_adds_block_scalar_marker() {
        let document = "a:\n  run:\n  next:\n";
        let point = InsertionPoint { line: 2, indent: 4 };
        let merged = merge(document, "print(1)\nprint(2)\n", point, ContentKind::Code);
        assert_eq!(
            merged,
            "a:\n  run: |\n    print(1)\n    print(2)\n  next:\n"
        );
    }

    #[test]
    fn test_merge_structured_keeps_bare_newline() {
        let document = "a:\n  sub:\n";
        let point = InsertionPoint { line: 2, indent: 4 };
        let merged = merge(document, "x: 1\n", point, ContentKind::Structured);
        assert_eq!(merged, "a:\n  sub:\n    x: 1\n");
    }

    #[test]
    fn test_merge_pads_blank_content_lines() {
        let document = "a:\n";
        let point = InsertionPoint { line: 1, indent: 2 };
        let merged = merge(document, "x\n\ny\n", point, ContentKind::Code);
        assert_eq!(merged, "a: |\n  x\n  \n  y\n");
    }

    #[test]
    fn test_merge_empty_content_structured_is_identity() {
        let document = "a:\n  b:\n";
        let point = InsertionPoint { line: 2, indent: 4 };
        let merged = merge(document, "", point, ContentKind::Structured);
        assert_eq!(merged, document);
    }
}
