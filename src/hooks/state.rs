//! `use_state` - Positional state hook.
//!
//! # Example
//!
//! ```ignore
//! use spark_vdom::{create_element, children, use_state, Props, VNode};
//!
//! fn counter(_: &Props) -> Option<VNode> {
//!     let (count, set_count) = use_state(0);
//!     Some(create_element(
//!         "button",
//!         Some(Props::new().on("click", move |_| { set_count.update(|n| n + 1); })),
//!         format!("Count: {}", count.get()),
//!     ))
//! }
//! ```

use std::fmt;

use spark_signals::Signal;

use super::scheduler::request_render;
use super::store::claim_slot;

/// Read access to one hook slot.
///
/// Reads go through the slot, so a getter captured by a handler observes
/// later updates.
#[derive(Clone)]
pub struct StateGetter<T: Clone + PartialEq + 'static> {
    slot: Signal<T>,
}

impl<T: Clone + PartialEq + 'static> StateGetter<T> {
    /// Current stored value.
    pub fn get(&self) -> T {
        self.slot.get()
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for StateGetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateGetter").field(&self.get()).finish()
    }
}

/// What a setter was asked to store.
pub enum SetStateAction<T> {
    /// Store this value.
    Value(T),
    /// Compute the value from the previous one.
    Update(Box<dyn FnOnce(&T) -> T>),
}

impl<T> From<T> for SetStateAction<T> {
    fn from(value: T) -> Self {
        SetStateAction::Value(value)
    }
}

/// Write access to one hook slot.
#[derive(Clone)]
pub struct StateSetter<T: Clone + PartialEq + 'static> {
    slot: Signal<T>,
}

impl<T: Clone + PartialEq + 'static> StateSetter<T> {
    /// Store `value`. See [`StateSetter::apply`].
    pub fn set(&self, value: T) -> bool {
        self.apply(SetStateAction::Value(value))
    }

    /// Store `f(previous)`. See [`StateSetter::apply`].
    pub fn update(&self, f: impl FnOnce(&T) -> T + 'static) -> bool {
        self.apply(SetStateAction::Update(Box::new(f)))
    }

    /// Compute the candidate value; if it differs from the stored one, store
    /// it and fire the render trigger once. Equal values are a no-op.
    ///
    /// Returns whether the value changed. With no trigger registered the
    /// value is still stored, nothing re-renders and no error is raised.
    pub fn apply(&self, action: SetStateAction<T>) -> bool {
        let current = self.slot.get();
        let next = match action {
            SetStateAction::Value(value) => value,
            SetStateAction::Update(f) => f(&current),
        };
        if next == current {
            return false;
        }

        self.slot.set(next);
        request_render();
        true
    }
}

impl<T: Clone + PartialEq + 'static> fmt::Debug for StateSetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateSetter(..)")
    }
}

/// Claim the hook slot at the cursor and advance the cursor by one.
///
/// On the first visit to a position the slot is created holding `initial`;
/// on later passes the stored value wins and `initial` is ignored.
///
/// Slot identity is the ordinal of this call within the render pass, counted
/// across the whole tree (see [`HookScoping`](crate::config::HookScoping)).
/// Every pass must therefore call hooks in the same order and count: calling
/// one conditionally, or conditionally rendering a component that calls one,
/// shifts every slot after it.
pub fn use_state<T: Clone + PartialEq + 'static>(initial: T) -> (StateGetter<T>, StateSetter<T>) {
    let slot = claim_slot(initial);
    (StateGetter { slot: slot.clone() }, StateSetter { slot })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{reset_hooks, reset_scheduler, reset_state_index, set_root_render, trigger_count};
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_hooks();
        reset_scheduler();
    }

    #[test]
    fn test_initial_value_on_first_visit() {
        setup();

        let (count, _) = use_state(7);
        assert_eq!(count.get(), 7);
    }

    #[test]
    fn test_revisit_ignores_new_initial() {
        setup();

        let (_, set) = use_state(1);
        set.set(2);

        reset_state_index();
        let (count, _) = use_state(1000);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_equal_value_does_not_trigger() {
        setup();

        let fired = Rc::new(Cell::new(0));
        let fired_clone = fired.clone();
        set_root_render(move || fired_clone.set(fired_clone.get() + 1));

        let (_, set) = use_state("same".to_string());
        assert!(!set.set("same".to_string()));
        assert!(!set.update(|s| s.clone()));
        assert_eq!(fired.get(), 0);

        assert!(set.set("different".to_string()));
        assert_eq!(fired.get(), 1);
        assert_eq!(trigger_count(), 1);
    }

    #[test]
    fn test_update_uses_previous_value() {
        setup();

        let (count, set) = use_state(10);
        set.update(|n| n * 2);
        set.update(|n| n + 1);
        assert_eq!(count.get(), 21);
    }

    #[test]
    fn test_setter_without_trigger_still_stores() {
        setup();

        let (count, set) = use_state(false);
        assert!(set.set(true));
        assert!(count.get());
    }

    #[test]
    fn test_getter_observes_later_writes() {
        setup();

        let (count, set) = use_state(0);
        let getter = count.clone();
        set.apply(5.into());
        assert_eq!(getter.get(), 5);
        assert_eq!(format!("{count:?}"), "StateGetter(5)");
    }
}
