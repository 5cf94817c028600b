//! Render Scheduler - The trigger that reruns the whole render pass.
//!
//! There is no queue and no batching: a state change calls the trigger
//! synchronously, once per change.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type RootRender = Rc<dyn Fn()>;

thread_local! {
    static ROOT_RENDER: RefCell<Option<RootRender>> = RefCell::new(None);
    static TRIGGER_COUNT: Cell<usize> = const { Cell::new(0) };
}

/// Register the function to call whenever a setter detects a change.
///
/// `render` is expected to call [`reset_state_index`](super::reset_state_index)
/// and then rebuild and re-mount the whole tree. Replaces any previous
/// trigger.
pub fn set_root_render(render: impl Fn() + 'static) {
    ROOT_RENDER.with(|r| *r.borrow_mut() = Some(Rc::new(render)));
}

/// Remove the registered trigger.
pub fn clear_root_render() {
    ROOT_RENDER.with(|r| *r.borrow_mut() = None);
}

pub fn has_root_render() -> bool {
    ROOT_RENDER.with(|r| r.borrow().is_some())
}

/// Number of times the trigger has fired on this thread.
pub fn trigger_count() -> usize {
    TRIGGER_COUNT.with(Cell::get)
}

/// Fire the trigger, if any. Returns whether one was registered.
///
/// The trigger is cloned out before it runs, so it may replace or clear
/// itself.
pub(crate) fn request_render() -> bool {
    let render = ROOT_RENDER.with(|r| r.borrow().clone());
    match render {
        Some(render) => {
            TRIGGER_COUNT.with(|c| c.set(c.get() + 1));
            render();
            true
        }
        None => {
            tracing::debug!("state changed with no root render registered");
            false
        }
    }
}

/// Clear the trigger and its counter (for testing).
pub fn reset_scheduler() {
    clear_root_render();
    TRIGGER_COUNT.with(|c| c.set(0));
}
