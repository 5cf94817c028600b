//! Hook Store - Positional slot storage and the hook cursor.
//!
//! Every slot holds a `spark_signals::Signal<T>`, type-erased behind
//! `Rc<dyn Any>`. Slots are never destroyed during normal operation, only
//! overwritten; [`reset_hooks`] drops them all (for testing).
//!
//! # Addressing
//!
//! ```text
//! Global:       slots[cursor]                      cursor counts across the whole pass
//! PerComponent: scopes[(tree path, fn type)][cursor] cursor counts within one invocation
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::config::{hook_scoping, HookScoping};

type SlotCell = Rc<dyn Any>;

/// Identity of a component invocation in per-component mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScopeKey {
    path: Vec<usize>,
    component: TypeId,
}

/// A component invocation currently on the call stack.
struct ActiveScope {
    key: ScopeKey,
    slots: Vec<SlotCell>,
    cursor: usize,
}

#[derive(Default)]
struct HookStore {
    /// Flat sequence for global addressing (and for hooks called outside
    /// any component in per-component mode).
    slots: Vec<SlotCell>,
    cursor: usize,
    /// Parked slot lists of component invocations, per-component mode.
    scopes: HashMap<ScopeKey, Vec<SlotCell>>,
    /// Invocations being rendered, innermost last.
    active: Vec<ActiveScope>,
}

impl HookStore {
    fn claim_slot<T: Clone + PartialEq + 'static>(&mut self, initial: T) -> Signal<T> {
        let (slots, cursor) = match self.active.last_mut() {
            Some(scope) => (&mut scope.slots, &mut scope.cursor),
            None => (&mut self.slots, &mut self.cursor),
        };
        let index = *cursor;
        *cursor += 1;

        if let Some(cell) = slots.get(index) {
            if let Some(existing) = cell.downcast_ref::<Signal<T>>() {
                return existing.clone();
            }
            // Hook order changed between passes and this position now holds a
            // different type. Everything after this point is desynchronized.
            tracing::warn!(
                slot = index,
                expected = std::any::type_name::<T>(),
                "hook slot type changed between render passes; resetting slot"
            );
            let fresh = signal(initial);
            slots[index] = Rc::new(fresh.clone());
            return fresh;
        }

        tracing::trace!(slot = index, ty = std::any::type_name::<T>(), "new hook slot");
        let fresh = signal(initial);
        slots.push(Rc::new(fresh.clone()));
        fresh
    }

    /// Park every active scope back into the map, innermost first.
    fn park_scopes_above(&mut self, depth: usize) {
        while self.active.len() > depth {
            if let Some(scope) = self.active.pop() {
                self.scopes.insert(scope.key, scope.slots);
            }
        }
    }
}

thread_local! {
    static STORE: RefCell<HookStore> = RefCell::new(HookStore::default());
}

// =============================================================================
// Cursor
// =============================================================================

/// Reset the hook cursor to the first slot.
///
/// Must run exactly once at the start of every render pass, before the root
/// factory call.
pub fn reset_state_index() {
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        store.cursor = 0;
        store.park_scopes_above(0);
    });
}

/// Current global cursor position (number of global slots visited this pass).
pub fn state_index() -> usize {
    STORE.with(|store| store.borrow().cursor)
}

/// Number of slots in the global sequence.
pub fn slot_count() -> usize {
    STORE.with(|store| store.borrow().slots.len())
}

/// Number of component invocations holding slots in per-component mode.
pub fn scoped_instance_count() -> usize {
    STORE.with(|store| {
        let store = store.borrow();
        store.scopes.len() + store.active.len()
    })
}

/// Claim the slot at the cursor, creating it with `initial` on first visit.
pub(crate) fn claim_slot<T: Clone + PartialEq + 'static>(initial: T) -> Signal<T> {
    STORE.with(|store| store.borrow_mut().claim_slot(initial))
}

/// Drop every slot and reset the cursor (for testing).
pub fn reset_hooks() {
    STORE.with(|store| *store.borrow_mut() = HookStore::default());
}

// =============================================================================
// Component Scopes
// =============================================================================

/// Guard for one component invocation. Dropping it parks the invocation's
/// slots until the next pass reaches the same tree position.
pub struct ComponentScope {
    depth: Option<usize>,
}

impl Drop for ComponentScope {
    fn drop(&mut self) {
        if let Some(depth) = self.depth {
            STORE.with(|store| store.borrow_mut().park_scopes_above(depth));
        }
    }
}

/// Enter a component invocation at `path` (child positions from the root).
///
/// In global mode this does nothing: every hook shares the flat sequence.
pub fn enter_component(path: &[usize], component: TypeId) -> ComponentScope {
    if hook_scoping() != HookScoping::PerComponent {
        return ComponentScope { depth: None };
    }

    STORE.with(|store| {
        let mut store = store.borrow_mut();
        let key = ScopeKey {
            path: path.to_vec(),
            component,
        };
        let slots = store.scopes.remove(&key).unwrap_or_default();
        let depth = store.active.len();
        store.active.push(ActiveScope {
            key,
            slots,
            cursor: 0,
        });
        ComponentScope { depth: Some(depth) }
    })
}
