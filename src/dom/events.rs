//! Events - Event objects and listener types.
//!
//! Listeners are stored on the element they were added to (see
//! [`super::add_event_listener`]). Dispatch walks from the target up through
//! its ancestors, invoking matching listeners in registration order, until
//! the path ends or a listener calls [`Event::stop_propagation`].
//!
//! # Example
//!
//! ```ignore
//! use spark_vdom::dom::{self, Event};
//! use std::rc::Rc;
//!
//! let button = dom::create_element("button")?;
//! dom::add_event_listener(button, "click", Rc::new(|event: &Event| {
//!     println!("clicked {:?}", event.target());
//! }))?;
//!
//! dom::dispatch_event(button, &Event::new("click"))?;
//! ```

use std::cell::Cell;
use std::rc::Rc;

use bitflags::bitflags;

use super::NodeId;

// =============================================================================
// TYPES
// =============================================================================

bitflags! {
    /// Modifier keys held while the event fired.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const CTRL = 1 << 0;
        const ALT = 1 << 1;
        const SHIFT = 1 << 2;
        const META = 1 << 3;
    }
}

/// Event listener (Rc so the arena can hand out clones during dispatch).
pub type EventListener = Rc<dyn Fn(&Event)>;

/// A dispatched event.
///
/// Flags use interior mutability so listeners receive `&Event` and can still
/// stop propagation.
#[derive(Debug, Clone)]
pub struct Event {
    event_type: String,
    modifiers: Modifiers,
    detail: Option<String>,
    target: Cell<Option<NodeId>>,
    current_target: Cell<Option<NodeId>>,
    propagation_stopped: Cell<bool>,
    default_prevented: Cell<bool>,
}

impl Event {
    /// Create an event of the given type (`"click"`, `"input"`, ...).
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into().to_ascii_lowercase(),
            modifiers: Modifiers::empty(),
            detail: None,
            target: Cell::new(None),
            current_target: Cell::new(None),
            propagation_stopped: Cell::new(false),
            default_prevented: Cell::new(false),
        }
    }

    /// Create an event with modifier keys held.
    pub fn with_modifiers(event_type: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            ..Self::new(event_type)
        }
    }

    /// Attach a string payload (e.g. the new value of an `input` event).
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The node the event was dispatched at (`None` before dispatch).
    pub fn target(&self) -> Option<NodeId> {
        self.target.get()
    }

    /// The node whose listener is currently running.
    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target.get()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub(super) fn begin_dispatch(&self, target: NodeId) {
        self.target.set(Some(target));
        self.propagation_stopped.set(false);
    }

    pub(super) fn set_current_target(&self, node: Option<NodeId>) {
        self.current_target.set(node);
    }
}

/// Lower-cased event name for an `on<EventName>` prop key, or `None` when
/// the key does not start with `on` followed by at least one character.
pub fn event_name_from_prop(key: &str) -> Option<String> {
    let rest = key.strip_prefix("on")?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase())
}
