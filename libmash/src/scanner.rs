//! Phase 1: Line Scanner
//!
//! The scanner converts raw document text into key records. It performs:
//! - Tab rejection (tabs and spaces cannot be mixed for indentation arithmetic)
//! - Key matching (a non-whitespace token ending in a colon at line start)
//! - Quoted-key rejection (flow-style documents are unsupported)
//! - Indentation counting and 1-based line numbering

use crate::error::{MashError, Result};

/// One recognized "key:" occurrence in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    /// The matched fragment, from line start through the key's last colon.
    pub raw_text: String,
    /// The bare key name, with trailing colons stripped.
    pub key: String,
    /// One-based line number in the source document.
    pub line_number: usize,
    /// Count of leading space characters on the line.
    pub indent: usize,
}

/// Scan document text into key records.
///
/// Lines that do not start a key (continuation lines, comments, list items)
/// are skipped. A document with no keys at all is an error, not an empty
/// result.
pub fn scan(source: &str) -> Result<Vec<KeyRecord>> {
    let mut records = Vec::new();

    for (i, line) in source.lines().enumerate() {
        let line_number = i + 1;
        if line.contains('\t') {
            return Err(MashError::UnsupportedIndentation { line: line_number });
        }
        if let Some(record) = match_key(line, line_number)? {
            records.push(record);
        }
    }

    if records.is_empty() {
        return Err(MashError::EmptyDocument);
    }
    Ok(records)
}

/// Count the number of leading spaces in a line.
fn count_indent(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Strip whitespace and trailing colons from a matched key fragment.
pub fn strip_key(fragment: &str) -> &str {
    fragment.trim().trim_end_matches(':')
}

/// Match the key-at-line-start rule against one line.
///
/// After leading spaces, the first whitespace-delimited token must contain a
/// colon; the match runs from line start through the token's last colon, so
/// "key: value" matches "key:" and "a:b: rest" matches "a:b:". Lines whose
/// first token carries no colon (or nothing but colons) yield no record.
fn match_key(line: &str, line_number: usize) -> Result<Option<KeyRecord>> {
    let indent = count_indent(line);
    let rest = &line[indent..];

    let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let token = &rest[..token_end];
    let colon = match token.rfind(':') {
        Some(colon) => colon,
        None => return Ok(None),
    };

    let raw_text = &line[..indent + colon + 1];
    let key = strip_key(raw_text);
    if key.is_empty() {
        return Ok(None);
    }
    if key.contains('"') {
        return Err(MashError::UnsupportedSyntax {
            key: key.to_string(),
            line: line_number,
        });
    }

    Ok(Some(KeyRecord {
        raw_text: raw_text.to_string(),
        key: key.to_string(),
        line_number,
        indent,
    }))
}
