//! Keyboard input mapping for the type-ahead widget.
//!
//! Hosts deliver named [`Key`] values (translated from whatever their
//! platform produces) and the widget turns them into abstract [`Command`]s.
//! The state machine never sees raw key codes.

/// A named keyboard key, as delivered by the host input surface.
///
/// Only a subset of a full keyboard map: the widget cares about the three
/// command keys (Enter and the vertical arrows) and otherwise just needs to
/// know "some other key was involved". Printable input arrives as
/// [`Key::Character`]; anything the host cannot name maps to
/// [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    // Editing
    Enter,
    Tab,
    Backspace,
    Delete,

    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Control
    Escape,

    // Whitespace
    Space,

    /// A printable character key.
    Character(char),

    /// Unknown/unmapped key.
    Unknown(u16),
}

impl Key {
    /// Check if this is a vertical navigation key.
    pub fn is_vertical_navigation(&self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown)
    }

    /// Check if this key edits the input text when pressed.
    ///
    /// Used by hosts that want to avoid delivering redundant text-change
    /// notifications; the widget itself refilters on any released key that
    /// does not map to a command.
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            Key::Character(_) | Key::Space | Key::Backspace | Key::Delete
        )
    }
}

/// An abstract command produced by the input-mapping layer.
///
/// Dispatch happens on named commands rather than raw key codes, so the
/// mapping can be tested independently of the widget state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Commit the active candidate into the input.
    Commit,
    /// Move the active cursor to the previous row (wrapping).
    MovePrevious,
    /// Move the active cursor to the next row (wrapping).
    MoveNext,
    /// Not a widget command; the event should propagate normally.
    #[default]
    Ignore,
}

impl Command {
    /// Map a key to the command it triggers on key-press.
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Enter => Command::Commit,
            Key::ArrowUp => Command::MovePrevious,
            Key::ArrowDown => Command::MoveNext,
            _ => Command::Ignore,
        }
    }

    /// Whether a key-release of `key` should re-run the filter pass.
    ///
    /// Command keys (Enter and the vertical arrows) never re-filter: their
    /// release carries no new text. Everything else does, which is what keeps
    /// the dropdown in sync while the user types.
    pub fn refilters_on_release(key: Key) -> bool {
        Command::from_key(key) == Command::Ignore
    }
}
