//! Configuration for the type-ahead widget.

use crate::matcher::MatchMode;

/// Configuration for [`TypeAhead`](crate::TypeAhead).
///
/// All options have defaults; construct with [`TypeAheadConfig::new`] (or
/// `Default`) and adjust with the builder methods.
///
/// # Example
///
/// ```
/// use horizon_typeahead::{MatchMode, TypeAheadConfig};
///
/// let config = TypeAheadConfig::new()
///     .with_min_length(2)
///     .with_limit(Some(10))
///     .with_match_mode(MatchMode::FullText)
///     .with_scrollable(true);
///
/// assert_eq!(config.min_length(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAheadConfig {
    /// Minimum query length (in chars) before filtering activates.
    min_length: usize,
    /// Maximum result count; `None` disables the cap.
    limit: Option<usize>,
    /// Which matching algorithm to use.
    match_mode: MatchMode,
    /// Whether the dropdown keeps the active row inside a scroll window.
    scrollable: bool,
    /// Height of the scroll window, in rows. Only used when `scrollable`.
    max_visible_items: usize,
}

impl Default for TypeAheadConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            limit: Some(5),
            match_mode: MatchMode::Prefix,
            scrollable: false,
            max_visible_items: 7,
        }
    }
}

impl TypeAheadConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Minimum query length (in chars) before filtering activates.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum number of results collected per filter pass, or `None` for
    /// no cap.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// The matching algorithm.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Whether the dropdown scrolls to keep the active row visible.
    pub fn scrollable(&self) -> bool {
        self.scrollable
    }

    /// Maximum number of rows drawn when scrolling is enabled.
    pub fn max_visible_items(&self) -> usize {
        self.max_visible_items
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Set the minimum query length before filtering activates.
    pub fn set_min_length(&mut self, min_length: usize) {
        self.min_length = min_length;
    }

    /// Set the result cap. `None` disables it.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    /// Set the matching algorithm.
    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.match_mode = mode;
    }

    /// Enable or disable the scroll window.
    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.scrollable = scrollable;
    }

    /// Set the scroll window height in rows (clamped to at least 1).
    pub fn set_max_visible_items(&mut self, count: usize) {
        self.max_visible_items = count.max(1);
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the minimum query length using the builder pattern.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the result cap using the builder pattern.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Set the matching algorithm using the builder pattern.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Enable or disable the scroll window using the builder pattern.
    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Set the scroll window height using the builder pattern.
    pub fn with_max_visible_items(mut self, count: usize) -> Self {
        self.max_visible_items = count.max(1);
        self
    }
}
