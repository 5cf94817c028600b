//! # spark-vdom
//!
//! Minimal virtual DOM runtime with positional state hooks.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals): every
//! hook slot is a `Signal`.
//!
//! ## Architecture
//!
//! Every render pass rebuilds the whole tree. There is no diffing, no keyed
//! reconciliation and no persistent component object: components are plain
//! functions re-invoked on each pass, and the only thing that survives a pass
//! is hook state, addressed by call position.
//!
//! ```text
//! create_element → VNode tree → render_to_dom → live nodes → mount(container)
//!                                   │
//!                         components call use_state
//!                                   │
//!        setter change → root render → reset_state_index → rebuild → mount
//! ```
//!
//! ## Modules
//!
//! - [`vnode`] - VNode model and element factory
//! - [`render`] - Materializer and property reconciliation
//! - [`hooks`] - Hook store, `use_state`, render trigger
//! - [`pipeline`] - `mount` and the root render loop
//! - [`dom`] - In-memory live document (elements, attributes, events)
//! - [`config`] - Runtime settings (hook scoping)
//! - [`error`] - Error types

pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod pipeline;
pub mod render;
pub mod vnode;

// Re-export commonly used items
pub use config::{configure, HookScoping, RuntimeConfig};

pub use error::{DomError, RenderError, Result};

pub use dom::{Event, Modifiers, NodeId};

pub use hooks::{
    clear_root_render, reset_state_index, set_root_render, use_state, SetStateAction, StateGetter,
    StateSetter,
};

pub use pipeline::{create_root, mount, RootHandle};

pub use render::{apply_props, render_to_dom};

pub use vnode::{
    component, create_element, create_fragment, h, Child, ChildArg, Component, NodeType, PropValue,
    Props, StyleValue, VNode, FRAGMENT,
};
