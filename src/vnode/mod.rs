//! VNode Model & Element Factory.
//!
//! A VNode describes a piece of display tree before it exists:
//!
//! ```text
//! VNode { type: Element("div"), props: { className: "card", children: [...] } }
//! VNode { type: Component(counter), props: { start: 0, children: [] } }
//! VNode { type: Fragment, props: { children: [...] } }
//! ```
//!
//! The type alone decides how the materializer treats the node. Children are
//! normalized once, by the factory: nested lists are flattened and `Null` /
//! `false` entries vanish, so conditional expressions disappear cleanly.

mod factory;
mod node;
mod props;

pub use factory::{create_element, create_fragment, flatten_children, h};
pub use node::{component, Child, ChildArg, Component, ComponentFn, NodeType, VNode, FRAGMENT};
pub use props::{format_number, EventHandler, PropValue, Props, RefCallback, StyleValue};
