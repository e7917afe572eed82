//! Query normalization and candidate matching.

/// Normalize raw input text into a query.
///
/// Matching is case-insensitive throughout, so both the query and every
/// candidate's projected value go through this before comparison.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// Selects how a candidate's projected value is compared against the query.
///
/// # Related
///
/// - [`TypeAheadConfig::with_match_mode`](crate::TypeAheadConfig::with_match_mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The candidate matches iff its value starts with the whole query.
    #[default]
    Prefix,
    /// The candidate matches iff every whitespace-separated query keyword is
    /// a substring of its value.
    ///
    /// Keywords are checked in written order and the scan short-circuits on
    /// the first miss, but inclusion itself is an AND of substring tests:
    /// permuting the keywords never changes the outcome.
    FullText,
}

impl MatchMode {
    /// Compare a normalized candidate value against a normalized query.
    pub fn matches(&self, candidate_value: &str, query: &str) -> bool {
        match self {
            MatchMode::Prefix => candidate_value.starts_with(query),
            MatchMode::FullText => query
                .split_whitespace()
                .all(|keyword| candidate_value.contains(keyword)),
        }
    }
}
