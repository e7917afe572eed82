//! Core systems for Horizon TypeAhead.
//!
//! This crate provides the notification layer the type-ahead widget is built
//! on: a type-safe, Qt-inspired signal/slot mechanism. The widget emits
//! signals when state changes (a candidate is committed, the active row
//! moves) and host applications connect slots (closures) to react.
//!
//! Unlike a full GUI framework, the widget runs entirely inside host event
//! callbacks on a single control thread, so signal emission here is always
//! direct: every connected slot runs to completion inside [`Signal::emit`].
//!
//! # Example
//!
//! ```
//! use horizon_typeahead_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let committed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = committed.connect(|text| {
//!     println!("Committed: {}", text);
//! });
//!
//! // Emit the signal
//! committed.emit("apricot".to_string());
//!
//! // Disconnect when done
//! committed.disconnect(conn_id);
//! ```

pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
