//! The type-ahead matcher/controller.
//!
//! [`TypeAhead`] owns the normalized query, the candidate source, the
//! filtering and highlighting logic, and keyboard-driven command dispatch.
//! The dropdown itself lives in [`ResultList`]; the controller only issues
//! clear/add/render commands against it.
//!
//! # Example
//!
//! ```ignore
//! use horizon_typeahead::{Key, TypeAhead, TypeAheadConfig};
//!
//! let mut type_ahead = TypeAhead::with_strings(
//!     Box::new(my_input),
//!     vec!["apple".to_string(), "apricot".to_string(), "banana".to_string()],
//!     TypeAheadConfig::new(),
//! );
//!
//! // Host notifies a committed value
//! type_ahead.committed.connect(|value| {
//!     println!("Selected: {}", value);
//! });
//!
//! // Wire host events through:
//! type_ahead.handle_key_released(Key::Character('a'), &mut my_surface);
//! let captured = type_ahead.handle_key_pressed(Key::ArrowDown, &mut my_surface);
//! ```

use std::sync::Arc;

use horizon_typeahead_core::Signal;

use crate::command::{Command, Key};
use crate::config::TypeAheadConfig;
use crate::highlight::{self, Highlighter, Segment};
use crate::matcher::normalize;
use crate::result_list::{ItemPainter, ResultList};
use crate::surface::{InputSurface, RenderFrame, RenderSurface};

/// Extracts a candidate's display string.
pub type Projection<C> = Arc<dyn Fn(&C) -> String>;

/// Below this query length the highlighter is bypassed entirely and rows
/// render as plain text.
const HIGHLIGHT_MIN_QUERY: usize = 3;

/// Paints a candidate's highlighted display string into a row.
struct HighlightPainter<C> {
    projection: Projection<C>,
    highlighter: Option<Highlighter>,
}

impl<C> ItemPainter<C> for HighlightPainter<C> {
    fn paint(&self, candidate: &C, frame: &mut dyn RenderFrame) {
        let display = (self.projection)(candidate);
        let segments = match &self.highlighter {
            Some(hl) => hl.highlight(&display),
            None => highlight::plain(&display),
        };
        for segment in segments {
            match segment {
                Segment::Plain(text) => frame.text(&text),
                Segment::Emphasis(text) => {
                    frame.element_open("strong", None, &[]);
                    frame.text(&text);
                    frame.element_close("strong");
                }
            }
        }
    }
}

/// An incremental-search controller over a text input.
///
/// As the host relays keystrokes, the controller recomputes the query,
/// filters the candidate source, and drives the [`ResultList`]. Navigation
/// and commit commands arrive through [`handle_key_pressed`](Self::handle_key_pressed)
/// (or [`handle_pointer_press`](Self::handle_pointer_press) for direct row
/// selection).
///
/// # Signals
///
/// - `committed` — every commit, regardless of input modality
/// - `key_committed` / `pointer_committed` — commit, split by modality
/// - `highlighted` — the active row changed
pub struct TypeAhead<C: Clone + 'static> {
    /// The attached text-entry element.
    input: Box<dyn InputSurface>,
    /// Full candidate source, filtered on every query change.
    candidates: Vec<C>,
    /// Display-string projection; identity for string candidates.
    projection: Projection<C>,
    config: TypeAheadConfig,
    /// Normalized query derived from the input's current text.
    query: String,
    /// Filter-pass generation; stale result batches are dropped.
    generation: u64,
    /// Compiled keyword highlighter for the current query, if usable.
    highlighter: Option<Highlighter>,
    /// The dropdown; sole owner of the matching candidates.
    list: ResultList<C>,
    /// Last committed candidate.
    selection: Option<C>,

    // Signals
    /// Emitted on every commit with the committed candidate.
    pub committed: Signal<C>,
    /// Emitted after a keyboard (Enter) commit.
    pub key_committed: Signal<C>,
    /// Emitted after a pointer-press commit.
    pub pointer_committed: Signal<C>,
    /// Emitted when the active row changes.
    pub highlighted: Signal<C>,
}

impl TypeAhead<String> {
    /// Create a type-ahead over plain string candidates.
    pub fn with_strings(
        input: Box<dyn InputSurface>,
        candidates: Vec<String>,
        config: TypeAheadConfig,
    ) -> Self {
        Self::new(input, candidates, |candidate: &String| candidate.clone(), config)
    }
}

impl<C: Clone + 'static> TypeAhead<C> {
    /// Create a type-ahead over arbitrary candidates with a display-string
    /// projection.
    pub fn new<P>(
        input: Box<dyn InputSurface>,
        candidates: Vec<C>,
        projection: P,
        config: TypeAheadConfig,
    ) -> Self
    where
        P: Fn(&C) -> String + 'static,
    {
        let list = ResultList::new(&config);
        Self {
            input,
            candidates,
            projection: Arc::new(projection),
            config,
            query: String::new(),
            generation: 0,
            highlighter: None,
            list,
            selection: None,
            committed: Signal::new(),
            key_committed: Signal::new(),
            pointer_committed: Signal::new(),
            highlighted: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The configuration this widget was built with.
    pub fn config(&self) -> &TypeAheadConfig {
        &self.config
    }

    /// The dropdown list state.
    pub fn list(&self) -> &ResultList<C> {
        &self.list
    }

    /// The last committed candidate, if any.
    pub fn selected(&self) -> Option<&C> {
        self.selection.as_ref()
    }

    /// The attached input surface.
    pub fn input(&self) -> &dyn InputSurface {
        self.input.as_ref()
    }

    /// The generation of the most recent filter pass.
    ///
    /// Asynchronous candidate sources capture this when a pass begins and
    /// hand it back to [`apply_results`](Self::apply_results); a batch whose
    /// generation no longer matches is stale and gets dropped.
    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    // =========================================================================
    // Text changes and filtering
    // =========================================================================

    /// Recompute the query from the input's text and rerun the filter pass.
    ///
    /// A query shorter than the configured minimum clears the dropdown.
    /// Otherwise candidates are scanned in source order and collected until
    /// the configured limit is reached.
    pub fn handle_text_changed(&mut self, surface: &mut dyn RenderSurface) {
        self.query = normalize(&self.input.value());
        self.generation = self.generation.wrapping_add(1);
        self.list.clear();

        let query_chars = self.query.chars().count();
        if query_chars < self.config.min_length() {
            self.highlighter = None;
            let painter = self.painter();
            self.list.render(surface, &painter);
            return;
        }

        self.highlighter = if query_chars >= HIGHLIGHT_MIN_QUERY {
            Highlighter::new(&self.query).ok()
        } else {
            None
        };

        let generation = self.generation;
        let matches = self.collect_matches();
        tracing::debug!(
            target: "horizon_typeahead",
            query = %self.query,
            matches = matches.len(),
            "filter pass"
        );
        self.apply_results(generation, matches, surface);
    }

    /// Replace the candidate source and rerun the filter pass against the
    /// input's current text.
    pub fn set_candidates(&mut self, candidates: Vec<C>, surface: &mut dyn RenderSurface) {
        self.candidates = candidates;
        self.handle_text_changed(surface);
    }

    /// Apply a batch of filtered candidates delivered for `generation`.
    ///
    /// This is the seam asynchronously-delivered candidate results come
    /// through; the synchronous path uses it too. Batches for a superseded
    /// generation are dropped so a slow pass can never overwrite a newer
    /// one's results.
    pub fn apply_results(
        &mut self,
        generation: u64,
        items: Vec<C>,
        surface: &mut dyn RenderSurface,
    ) {
        if generation != self.generation {
            tracing::debug!(
                target: "horizon_typeahead",
                stale = generation,
                current = self.generation,
                "dropping stale result batch"
            );
            return;
        }

        self.list.clear();
        for item in items {
            self.list.add(item);
        }
        let painter = self.painter();
        self.list.render(surface, &painter);
        self.emit_highlighted();
    }

    /// Scan the candidate source in order, collecting matches up to the
    /// configured limit.
    fn collect_matches(&self) -> Vec<C> {
        let mut matches = Vec::new();
        for candidate in &self.candidates {
            let value = normalize(&(self.projection)(candidate));
            if self.config.match_mode().matches(&value, &self.query) {
                matches.push(candidate.clone());
                if Some(matches.len()) == self.config.limit() {
                    break;
                }
            }
        }
        matches
    }

    // =========================================================================
    // Keyboard handling
    // =========================================================================

    /// Handle a key release from the input.
    ///
    /// Command keys (Enter, vertical arrows) never re-filter; any other
    /// release re-reads the input text and reruns the filter pass.
    pub fn handle_key_released(&mut self, key: Key, surface: &mut dyn RenderSurface) {
        if !Command::refilters_on_release(key) {
            return;
        }
        self.handle_text_changed(surface);
    }

    /// Handle a key press from the input.
    ///
    /// Returns whether the event was captured by the widget (hosts should
    /// suppress default handling for captured events and propagate the
    /// rest). Enter on an empty dropdown is not captured.
    pub fn handle_key_pressed(&mut self, key: Key, surface: &mut dyn RenderSurface) -> bool {
        match Command::from_key(key) {
            Command::Commit => {
                if self.list.is_empty() {
                    return false;
                }
                self.commit_selection(surface);
                true
            }
            Command::MovePrevious => {
                let painter = self.painter();
                self.list.move_previous(surface, &painter);
                self.emit_highlighted();
                true
            }
            Command::MoveNext => {
                let painter = self.painter();
                self.list.move_next(surface, &painter);
                self.emit_highlighted();
                true
            }
            Command::Ignore => false,
        }
    }

    // =========================================================================
    // Focus handling
    // =========================================================================

    /// Re-show the dropdown on focus if it still holds drawn rows.
    pub fn handle_focus(&mut self, surface: &mut dyn RenderSurface) {
        if !self.list.is_empty() {
            self.list.show(surface);
        }
    }

    /// Hide the dropdown on blur. Selection and items are preserved.
    pub fn handle_blur(&mut self, surface: &mut dyn RenderSurface) {
        self.list.hide(surface);
    }

    // =========================================================================
    // Committing
    // =========================================================================

    /// Commit the active candidate (keyboard path), then hide the dropdown.
    ///
    /// No-op when nothing is drawn.
    pub fn commit_selection(&mut self, surface: &mut dyn RenderSurface) {
        let Some(candidate) = self.list.active_item().cloned() else {
            return;
        };
        self.commit(candidate.clone());
        self.list.hide(surface);
        self.key_committed.emit(candidate);
    }

    /// Commit the row at `index` directly (pointer path), then clear and
    /// redraw the dropdown.
    ///
    /// Out-of-range indices are no-ops.
    pub fn handle_pointer_press(&mut self, index: usize, surface: &mut dyn RenderSurface) {
        let Some(candidate) = self.list.get(index).cloned() else {
            return;
        };
        self.commit(candidate.clone());
        self.pointer_committed.emit(candidate);
        self.list.clear();
        let painter = self.painter();
        self.list.render(surface, &painter);
    }

    /// Shared commit tail: record the selection, write the projected value
    /// into the input, dispatch the synthetic change notification, and fire
    /// the unconditional commit signal.
    fn commit(&mut self, candidate: C) {
        let display_text = (self.projection)(&candidate);
        tracing::debug!(target: "horizon_typeahead", value = %display_text, "commit");
        self.selection = Some(candidate.clone());
        self.input.set_value(&display_text);
        self.input.notify_changed();
        self.committed.emit(candidate);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn painter(&self) -> HighlightPainter<C> {
        HighlightPainter {
            projection: self.projection.clone(),
            highlighter: self.highlighter.clone(),
        }
    }

    fn emit_highlighted(&self) {
        if let Some(item) = self.list.active_item() {
            self.highlighted.emit(item.clone());
        }
    }
}
