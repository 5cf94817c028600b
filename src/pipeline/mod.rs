//! Render Pipeline
//!
//! Connects the authoring surface to the live document.
//!
//! # Pipeline Architecture
//!
//! ```text
//! app() → VNode tree → render_to_dom → container (children replaced)
//!   ↑                                        │
//!   └── reset_state_index ← setter change ←──┘ (event handler)
//! ```
//!
//! ## Key Design Principles
//!
//! - **Whole-tree passes**: every pass rebuilds and replaces everything
//! - **Synchronous**: a changed setter runs a full pass before it returns

pub mod mount;

pub use mount::{create_root, mount, RootHandle};
