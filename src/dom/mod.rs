//! Document - the live display surface.
//!
//! An in-memory stand-in for a browser document: elements, text nodes and
//! document fragments with attributes, inline style, live properties and
//! bubbling event listeners. The materializer writes into it; tests and
//! hosts read back out of it.
//!
//! # Architecture
//!
//! Nodes are indices into a thread-local arena:
//!
//! ```text
//! Slot 0: Element "div"    (parent=None, children=[1, 2])
//! Slot 1: Text "Count: 0"  (parent=0)
//! Slot 2: Element "button" (parent=0, listeners=[click])
//! ```
//!
//! A [`NodeId`] carries the slot index plus a generation, so handles to
//! released nodes fail with [`DomError::NodeNotFound`](crate::error::DomError)
//! instead of reaching whatever reused the slot.

mod document;
mod events;
mod serialize;
mod style;

pub use document::*;
pub use events::*;
pub use serialize::{inner_html, outer_html};
pub use style::{to_kebab_case, StyleDeclaration};
