//! Error types for mash document reconstruction.

use thiserror::Error;

/// Result type for mash operations.
pub type Result<T> = std::result::Result<T, MashError>;

/// Error type covering every terminal diagnostic.
///
/// Every failure aborts the whole operation: there is no partial output and
/// no best-effort fallback. Each variant carries the offending key, line, or
/// path so the diagnostic can name it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MashError {
    /// Tab character found in a document line.
    #[error("cannot mash tab-indented files (line {line}); convert to spaces and try again")]
    UnsupportedIndentation { line: usize },

    /// Quoted key detected (flow-style syntax unsupported).
    #[error("found a quote in key {key} on line {line}; JSON-looking yaml is not supported")]
    UnsupportedSyntax { key: String, line: usize },

    /// No recognizable keys found in the document.
    #[error("no keys in input yaml")]
    EmptyDocument,

    /// Indentation deltas within one tree are not multiples of the inferred step.
    #[error("inconsistent spacing at line {line}: {indent} spaces do not align to a step of {step}")]
    InconsistentIndentation {
        line: usize,
        step: usize,
        indent: usize,
    },

    /// No tree validates the requested dotted path.
    #[error("no tree contains the path {path}")]
    PathNotFound { path: String },
}
