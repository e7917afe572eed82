//! The dropdown result list.
//!
//! [`ResultList`] is the sole owner of the currently-matching candidates,
//! the active-cursor index, and dropdown visibility. The
//! controller never touches the item vector directly; it issues clear/add/
//! render commands, which keeps the ownership story single-sided.

use std::ops::Range;

use crate::config::TypeAheadConfig;
use crate::surface::{RenderFrame, RenderSurface};

/// Paints one candidate's content into a render frame.
///
/// Implemented by the controller so the list can delegate row content (the
/// highlighted display string) without owning the query state.
pub trait ItemPainter<C> {
    /// Draw the candidate's content. Called inside an open `a` element.
    fn paint(&self, candidate: &C, frame: &mut dyn RenderFrame);
}

/// The ordered set of currently-matching candidates plus the list cursor.
///
/// State machine: the dropdown is either hidden or visible-with-items. A
/// render producing one or more rows shows it; a render producing zero rows,
/// an explicit [`hide`](Self::hide) (blur, post-commit), or a cleared list
/// hides it.
#[derive(Debug)]
pub struct ResultList<C> {
    /// Candidates matching the current query, in source order.
    items: Vec<C>,
    /// Cursor into `items`; only meaningful while `items` is non-empty.
    active: usize,
    /// First row of the scroll window.
    scroll_offset: usize,
    /// Whether rendering windows the items to `max_visible_items` rows.
    scrollable: bool,
    /// Scroll window height, in rows.
    max_visible_items: usize,
    /// Number of rows materialized by the last render.
    rendered_count: usize,
    /// Whether the dropdown container is currently shown.
    visible: bool,
}

impl<C> ResultList<C> {
    /// Create an empty, hidden list configured from the widget config.
    pub fn new(config: &TypeAheadConfig) -> Self {
        Self {
            items: Vec::new(),
            active: 0,
            scroll_offset: 0,
            scrollable: config.scrollable(),
            max_visible_items: config.max_visible_items(),
            rendered_count: 0,
            visible: false,
        }
    }

    // =========================================================================
    // Item commands
    // =========================================================================

    /// Empty the list and reset the cursor. Does not render.
    pub fn clear(&mut self) {
        self.items.clear();
        self.active = 0;
        self.scroll_offset = 0;
    }

    /// Append a candidate. Items are only ever appended during a single
    /// filter pass; the set is replaced wholesale, never patched.
    pub fn add(&mut self, candidate: C) {
        self.items.push(candidate);
    }

    /// Number of items currently queued (independent of render state).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The queued items, in order.
    pub fn items(&self) -> &[C] {
        &self.items
    }

    /// The item at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&C> {
        self.items.get(index)
    }

    /// The item under the cursor, if any.
    pub fn active_item(&self) -> Option<&C> {
        self.items.get(self.active)
    }

    /// Current cursor position.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether the last render produced no rows.
    ///
    /// Reflects render state, not the queued item count; the two diverge
    /// between a `clear` and the next `render`. "Empty" means "nothing
    /// currently drawn", which is what focus handling keys off.
    pub fn is_empty(&self) -> bool {
        self.rendered_count == 0
    }

    /// Whether the dropdown container is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Show the dropdown container without redrawing.
    pub fn show(&mut self, surface: &mut dyn RenderSurface) {
        self.visible = true;
        surface.set_visible(true);
    }

    /// Hide the dropdown container. Items and cursor are preserved.
    pub fn hide(&mut self, surface: &mut dyn RenderSurface) {
        self.visible = false;
        surface.set_visible(false);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The range of rows the next render will draw.
    fn visible_range(&self) -> Range<usize> {
        if self.scrollable {
            let start = self.scroll_offset;
            let end = (start + self.max_visible_items).min(self.items.len());
            start..end
        } else {
            0..self.items.len()
        }
    }

    /// Adjust the scroll window so the active row lies inside it.
    ///
    /// Scrolls up if the active row precedes the window, down if it passes
    /// the window's last row.
    fn ensure_active_visible(&mut self) {
        if self.active < self.scroll_offset {
            self.scroll_offset = self.active;
        } else if self.active >= self.scroll_offset + self.max_visible_items {
            self.scroll_offset = self.active - self.max_visible_items + 1;
        }
    }

    /// Draw the list through the render surface.
    ///
    /// Each row is a keyed `li` (class `active` on the cursor row) wrapping
    /// an `a` whose content is delegated to the painter. Afterwards the
    /// container is shown iff the list holds items.
    pub fn render(&mut self, surface: &mut dyn RenderSurface, painter: &dyn ItemPainter<C>) {
        if self.scrollable {
            self.ensure_active_visible();
        }
        let range = self.visible_range();
        let active = self.active;
        let items = &self.items;

        surface.patch(&mut |frame| {
            for index in range.clone() {
                let attrs: &[(&str, &str)] = if index == active {
                    &[("class", "active")]
                } else {
                    &[]
                };
                frame.element_open("li", Some(index as u64), attrs);
                frame.element_open("a", None, &[]);
                painter.paint(&items[index], frame);
                frame.element_close("a");
                frame.element_close("li");
            }
        });

        self.rendered_count = range.len();
        self.visible = !self.items.is_empty();
        surface.set_visible(self.visible);

        tracing::trace!(
            target: "horizon_typeahead::result_list",
            rows = self.rendered_count,
            active = self.active,
            visible = self.visible,
            "rendered result list"
        );
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move the cursor to `index` and re-render. Out-of-range indices are
    /// no-ops.
    pub fn move_to(
        &mut self,
        index: usize,
        surface: &mut dyn RenderSurface,
        painter: &dyn ItemPainter<C>,
    ) {
        if index >= self.items.len() {
            return;
        }
        self.active = index;
        self.render(surface, painter);
    }

    /// Move the cursor to the previous row, wrapping from the first row to
    /// the last, and re-render. No-op on an empty list.
    pub fn move_previous(&mut self, surface: &mut dyn RenderSurface, painter: &dyn ItemPainter<C>) {
        if self.items.is_empty() {
            return;
        }
        let previous = if self.active == 0 {
            self.items.len() - 1
        } else {
            self.active - 1
        };
        self.move_to(previous, surface, painter);
    }

    /// Move the cursor to the next row, wrapping from the last row to the
    /// first, and re-render. No-op on an empty list.
    pub fn move_next(&mut self, surface: &mut dyn RenderSurface, painter: &dyn ItemPainter<C>) {
        if self.items.is_empty() {
            return;
        }
        let next = if self.active == self.items.len() - 1 {
            0
        } else {
            self.active + 1
        };
        self.move_to(next, surface, painter);
    }
}
