//! Materializer.
//!
//! Turns a VNode tree into live document nodes in one synchronous,
//! depth-first walk, dispatching on the VNode type:
//!
//! ```text
//! Element(tag)  → create element → apply props → materialize + append children
//! Component(f)  → f(props) → materialize the result (None: nothing)
//! Fragment      → materialize + append children into a fragment
//! Text / Number → text node
//! ```
//!
//! Every pass builds a whole new tree; nothing is diffed or reused.

mod materialize;
mod props;

pub use materialize::{append_rendered, render_child, render_to_dom};
pub use props::apply_props;
