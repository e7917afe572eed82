//! Match highlighting.
//!
//! Splits a candidate's display string into plain and emphasized segments so
//! the render surface can wrap query keywords in emphasis markup. The
//! segment list always concatenates back to the original string.

use regex::Regex;

use crate::error::HighlightError;

/// One run of text in a highlighted display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any keyword match.
    Plain(String),
    /// Text matching a query keyword; rendered inside an emphasis element.
    Emphasis(String),
}

impl Segment {
    /// The text content of this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Emphasis(s) => s,
        }
    }

    /// Whether this segment is emphasized.
    pub fn is_emphasis(&self) -> bool {
        matches!(self, Segment::Emphasis(_))
    }
}

/// A compiled keyword highlighter for one query.
///
/// Built once per query change and reused across every row of the result
/// list. Construction fails if the query yields no usable keywords; callers
/// fall back to plain text in that case.
///
/// # Example
///
/// ```
/// use horizon_typeahead::highlight::{Highlighter, Segment};
///
/// let hl = Highlighter::new("ban").unwrap();
/// let segments = hl.highlight("Banana");
/// assert_eq!(segments[0], Segment::Emphasis("Ban".to_string()));
/// assert_eq!(segments[1], Segment::Plain("ana".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Compile a highlighter from a normalized query.
    ///
    /// The query is split on whitespace into keywords; duplicates and
    /// keywords of length 1 or less are dropped, the rest are regex-escaped
    /// and joined into a case-insensitive alternation.
    pub fn new(query: &str) -> Result<Self, HighlightError> {
        let mut keywords: Vec<&str> = Vec::new();
        for keyword in query.split_whitespace() {
            if keyword.chars().count() > 1 && !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }

        if keywords.is_empty() {
            return Err(HighlightError::NoKeywords);
        }

        let alternation = keywords
            .iter()
            .map(|kw| regex::escape(kw))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?i){alternation}"))?;
        Ok(Self { pattern })
    }

    /// Split a display string into plain and emphasized segments.
    ///
    /// Matches are non-overlapping and leftmost-first. Gaps between matches
    /// become [`Segment::Plain`]; empty gaps are omitted. Concatenating all
    /// segment texts reproduces `display` exactly.
    pub fn highlight(&self, display: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for found in self.pattern.find_iter(display) {
            if found.start() > last_end {
                segments.push(Segment::Plain(display[last_end..found.start()].to_string()));
            }
            segments.push(Segment::Emphasis(found.as_str().to_string()));
            last_end = found.end();
        }

        if last_end < display.len() || segments.is_empty() {
            segments.push(Segment::Plain(display[last_end..].to_string()));
        }

        segments
    }
}

/// A single plain segment covering the whole display string.
///
/// Used wherever highlighting is bypassed: missing candidate, query shorter
/// than 3 chars, or no usable keywords.
pub fn plain(display: &str) -> Vec<Segment> {
    vec![Segment::Plain(display.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn test_basic_highlight() {
        let hl = Highlighter::new("apr").unwrap();
        let segments = hl.highlight("apricot");
        assert_eq!(
            segments,
            vec![
                Segment::Emphasis("apr".to_string()),
                Segment::Plain("icot".to_string()),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_preserves_original_casing() {
        let hl = Highlighter::new("ban").unwrap();
        let segments = hl.highlight("BANANA");
        assert_eq!(segments[0], Segment::Emphasis("BAN".to_string()));
        assert_eq!(concat(&segments), "BANANA");
    }

    #[test]
    fn test_multiple_keywords() {
        let hl = Highlighter::new("an ba").unwrap();
        let segments = hl.highlight("banana");
        // Leftmost-first: "ba" at 0, then "an" at 3 inside the remainder.
        assert_eq!(
            segments,
            vec![
                Segment::Emphasis("ba".to_string()),
                Segment::Plain("n".to_string()),
                Segment::Emphasis("an".to_string()),
                Segment::Plain("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_keywords_dropped() {
        // "a" is length 1 and must not make it into the alternation.
        let hl = Highlighter::new("a br").unwrap();
        let segments = hl.highlight("a brown banana");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("a ".to_string()),
                Segment::Emphasis("br".to_string()),
                Segment::Plain("own banana".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_keywords_deduplicated() {
        let a = Highlighter::new("ban ban ban").unwrap();
        let b = Highlighter::new("ban").unwrap();
        assert_eq!(a.highlight("banana"), b.highlight("banana"));
    }

    #[test]
    fn test_all_keywords_filtered_is_error() {
        assert!(matches!(
            Highlighter::new("a b c"),
            Err(HighlightError::NoKeywords)
        ));
        assert!(matches!(
            Highlighter::new("   "),
            Err(HighlightError::NoKeywords)
        ));
        assert!(matches!(
            Highlighter::new(""),
            Err(HighlightError::NoKeywords)
        ));
    }

    #[test]
    fn test_regex_metacharacters_escaped() {
        let hl = Highlighter::new("c++ (v2)").unwrap();
        let segments = hl.highlight("c++ compiler (v2)");
        assert_eq!(concat(&segments), "c++ compiler (v2)");
        assert_eq!(segments[0], Segment::Emphasis("c++".to_string()));
        assert!(segments.contains(&Segment::Emphasis("(v2)".to_string())));
    }

    #[test]
    fn test_no_match_is_single_plain_segment() {
        let hl = Highlighter::new("zzz").unwrap();
        assert_eq!(hl.highlight("banana"), plain("banana"));
    }

    #[test]
    fn test_empty_display() {
        let hl = Highlighter::new("ban").unwrap();
        assert_eq!(hl.highlight(""), vec![Segment::Plain(String::new())]);
    }

    #[test]
    fn test_round_trip() {
        let hl = Highlighter::new("an na ba").unwrap();
        for display in [
            "banana",
            "a brown banana",
            "BANANA boat",
            "nothing here matches... or does it? na!",
            "",
        ] {
            let segments = hl.highlight(display);
            assert_eq!(concat(&segments), display, "round trip for {display:?}");
        }
    }

    #[test]
    fn test_adjacent_matches_have_no_empty_plain_between() {
        let hl = Highlighter::new("ba na").unwrap();
        let segments = hl.highlight("bana");
        assert_eq!(
            segments,
            vec![
                Segment::Emphasis("ba".to_string()),
                Segment::Emphasis("na".to_string()),
            ]
        );
    }
}
