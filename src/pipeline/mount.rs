//! Mount API - Container replacement and the re-render loop.
//!
//! This module provides the entry points for putting a tree on screen.
//!
//! # Example
//!
//! ```ignore
//! use spark_vdom::{create_element, component, dom, pipeline::mount};
//!
//! let container = dom::create_element("div")?;
//!
//! // Option 1: One-shot mount
//! mount::mount(&create_element("p", None, "static"), container)?;
//!
//! // Option 2: Root with a re-render loop driven by use_state setters
//! let root = mount::create_root(container, || create_element(component(app), None, ()))?;
//!
//! // Clean up
//! root.unmount()?;
//! ```

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::{self, NodeId};
use crate::error::Result;
use crate::hooks::{clear_root_render, reset_state_index, set_root_render};
use crate::render::{append_rendered, render_to_dom};
use crate::vnode::VNode;

// =============================================================================
// Mount Function
// =============================================================================

/// Replace the whole content of `container` with the materialized `vnode`.
///
/// The previous children are released before the new tree is built. Cost is
/// proportional to the size of the new tree, never to the size of the
/// change.
pub fn mount(vnode: &VNode, container: NodeId) -> Result<()> {
    let span = tracing::debug_span!("mount", %container);
    let _enter = span.enter();

    dom::clear_children(container)?;
    let node = render_to_dom(vnode)?;
    append_rendered(container, node)?;

    tracing::debug!(nodes = dom::node_count(), "mounted");
    Ok(())
}

// =============================================================================
// Root
// =============================================================================

type RenderPass = Rc<dyn Fn() -> Result<()>>;

/// Handle returned by [`create_root`].
///
/// Holds the render pass closure (the same one registered as the root
/// render trigger) and the pass counter.
pub struct RootHandle {
    container: NodeId,
    pass: RenderPass,
    render_count: Rc<Cell<usize>>,
}

impl RootHandle {
    /// Run a full render pass now.
    pub fn render(&self) -> Result<()> {
        (self.pass)()
    }

    /// Completed render passes, the initial one included.
    pub fn render_count(&self) -> usize {
        self.render_count.get()
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Stop re-rendering and empty the container.
    ///
    /// Hook slots are kept: a root created later on the same thread picks
    /// them up by position.
    pub fn unmount(self) -> Result<()> {
        clear_root_render();
        dom::clear_children(self.container)?;
        Ok(())
    }
}

/// Bootstrap an application on `container`.
///
/// Performs the first pass (reset the hook cursor, call `app`, mount the
/// tree), then registers that pass as the render trigger. A failed first
/// pass is returned and leaves no trigger behind. Errors in passes started
/// by a setter have nowhere to go and are logged.
pub fn create_root(container: NodeId, app: impl Fn() -> VNode + 'static) -> Result<RootHandle> {
    let render_count = Rc::new(Cell::new(0));
    let count = render_count.clone();

    let pass: RenderPass = Rc::new(move || {
        let span = tracing::debug_span!("render_pass", pass = count.get());
        let _enter = span.enter();

        reset_state_index();
        let tree = app();
        mount(&tree, container)?;
        count.set(count.get() + 1);
        Ok(())
    });

    // The trigger only goes live once the first pass succeeded
    pass()?;

    let trigger = pass.clone();
    set_root_render(move || {
        if let Err(err) = trigger() {
            tracing::error!(%err, "re-render failed");
        }
    });

    Ok(RootHandle {
        container,
        pass,
        render_count,
    })
}

// =============================================================================
// Tests
// =============================================================================
