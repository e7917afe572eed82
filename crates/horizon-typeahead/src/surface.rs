//! Host collaborator traits.
//!
//! The widget never reaches for ambient globals: the text field it reads and
//! the renderer it draws through are both injected. Hosts implement
//! [`InputSurface`] over their text-entry element and [`RenderSurface`] /
//! [`RenderFrame`] over an incremental structural renderer (one that
//! reconciles the previous tree against a render function, in the style of
//! incremental-dom).

/// The text-entry element the widget is attached to.
///
/// The widget only ever reads and writes the text value and dispatches a
/// synthetic change notification after a commit; event delivery flows the
/// other way, from the host into
/// [`TypeAhead::handle_key_pressed`](crate::TypeAhead::handle_key_pressed)
/// and friends.
pub trait InputSurface {
    /// Current text value of the input.
    fn value(&self) -> String;

    /// Overwrite the text value (used on commit).
    fn set_value(&mut self, value: &str);

    /// Dispatch a synthetic "value changed" notification to the host,
    /// mirroring what a real keystroke would have produced.
    fn notify_changed(&mut self);
}

/// Draw primitives available inside one [`RenderSurface::patch`] pass.
///
/// Mirrors the incremental renderer's structural vocabulary: open an
/// element, close it, emit a text node. The widget assumes nothing about how
/// the renderer reconciles previous and next trees; it only requires that
/// redrawing with the same calls is idempotent.
pub trait RenderFrame {
    /// Open an element. `key` identifies the element across patches for
    /// keyed reconciliation; `attrs` are attribute name/value pairs.
    fn element_open(&mut self, tag: &str, key: Option<u64>, attrs: &[(&str, &str)]);

    /// Close the most recently opened element with this tag.
    fn element_close(&mut self, tag: &str);

    /// Emit a text node.
    fn text(&mut self, content: &str);
}

/// The dropdown's render collaborator.
pub trait RenderSurface {
    /// Reconcile the dropdown's root container against a render function.
    ///
    /// The render function re-describes the entire current item tree; the
    /// surface is responsible for diffing that against whatever it drew
    /// last time.
    fn patch(&mut self, render: &mut dyn FnMut(&mut dyn RenderFrame));

    /// Show or hide the dropdown container.
    fn set_visible(&mut self, visible: bool);
}
