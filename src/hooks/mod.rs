//! State Store & Render Scheduler.
//!
//! Hook state for the whole application lives in one thread-local store:
//! an ordered sequence of slots plus a cursor. Every render pass:
//!
//! ```text
//! reset_state_index() → root factory → components call use_state() → cursor advances
//! ```
//!
//! A setter that changes its slot fires the trigger registered with
//! [`set_root_render`], which reruns that sequence from the top.
//!
//! - `store` - slots, cursor, per-component scopes
//! - `scheduler` - the render trigger
//! - `state` - `use_state`, getters and setters

mod scheduler;
mod state;
mod store;

pub use scheduler::{clear_root_render, has_root_render, reset_scheduler, set_root_render, trigger_count};
pub use state::{use_state, SetStateAction, StateGetter, StateSetter};
pub use store::{
    enter_component, reset_hooks, reset_state_index, scoped_instance_count, slot_count, state_index,
    ComponentScope,
};
