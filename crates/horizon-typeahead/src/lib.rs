//! Horizon TypeAhead - an incremental-search input widget.
//!
//! Attach a [`TypeAhead`] to a host text input and it filters a candidate
//! source as the user types, renders the matches as a keyed dropdown with
//! the query keywords emphasized, and dispatches keyboard navigation and
//! commit commands. The host supplies the text input and the renderer
//! through the [`surface`] traits; committed values come back through
//! signals.
//!
//! # Example
//!
//! ```no_run
//! use horizon_typeahead::{TypeAhead, TypeAheadConfig};
//! # use horizon_typeahead::surface::{InputSurface, RenderSurface, RenderFrame};
//! # struct MyInput; struct MySurface;
//! # impl InputSurface for MyInput {
//! #     fn value(&self) -> String { String::new() }
//! #     fn set_value(&mut self, _: &str) {}
//! #     fn notify_changed(&mut self) {}
//! # }
//! # impl RenderSurface for MySurface {
//! #     fn patch(&mut self, _: &mut dyn FnMut(&mut dyn RenderFrame)) {}
//! #     fn set_visible(&mut self, _: bool) {}
//! # }
//!
//! let mut type_ahead = TypeAhead::with_strings(
//!     Box::new(MyInput),
//!     vec!["apple".into(), "apricot".into(), "banana".into()],
//!     TypeAheadConfig::new(),
//! );
//!
//! type_ahead.committed.connect(|value| {
//!     println!("selected: {value}");
//! });
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod result_list;
pub mod surface;
pub mod type_ahead;

pub use command::{Command, Key};
pub use config::TypeAheadConfig;
pub use error::HighlightError;
pub use highlight::{Highlighter, Segment};
pub use matcher::MatchMode;
pub use result_list::{ItemPainter, ResultList};
pub use surface::{InputSurface, RenderFrame, RenderSurface};
pub use type_ahead::{Projection, TypeAhead};

// Signal layer re-exports so hosts can manage connections without a direct
// dependency on the core crate.
pub use horizon_typeahead_core::{ConnectionGuard, ConnectionId, Signal};
