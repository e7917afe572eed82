//! Error types for the type-ahead widget.
//!
//! The widget itself has no error conditions: an empty candidate source, a
//! short query, and a no-match pass all resolve to the well-defined
//! empty-result state. The one fallible seam is highlight-pattern
//! construction.

use thiserror::Error;

/// Errors that can occur while building a highlight pattern.
#[derive(Error, Debug)]
pub enum HighlightError {
    /// Every query keyword was filtered out (too short or duplicate), so no
    /// usable alternation exists. Callers must fall back to plain text
    /// rather than compile a match-everything pattern.
    #[error("no usable keywords in query")]
    NoKeywords,

    /// The escaped alternation failed to compile.
    #[error("invalid highlight pattern: {0}")]
    Pattern(#[from] regex::Error),
}
