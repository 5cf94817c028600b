//! Runtime configuration.
//!
//! Settings are thread-local, like every other piece of runtime state: one
//! thread owns one document and one hook store.

use spark_signals::{signal, Signal};

// =============================================================================
// Hook Scoping
// =============================================================================

/// How `use_state` slots are addressed across render passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookScoping {
    /// One flat slot sequence for the whole tree. A slot is identified only by
    /// the ordinal of the `use_state` call within the pass, so every pass must
    /// call hooks in exactly the same order and count across the entire tree.
    #[default]
    Global,
    /// Each component invocation owns its slots, keyed by its position in the
    /// tree plus the identity of the component function. Hooks are still
    /// positional, but only within one component, so conditionally rendering
    /// a component no longer shifts the slots of its siblings.
    PerComponent,
}

/// Runtime-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeConfig {
    pub hook_scoping: HookScoping,
}

impl RuntimeConfig {
    /// Config using per-component hook scoping.
    pub fn scoped() -> Self {
        Self {
            hook_scoping: HookScoping::PerComponent,
        }
    }
}

thread_local! {
    static RUNTIME_CONFIG: Signal<RuntimeConfig> = signal(RuntimeConfig::default());
}

/// Get the current configuration.
pub fn config() -> RuntimeConfig {
    RUNTIME_CONFIG.with(|c| c.get())
}

/// Replace the configuration.
///
/// Takes effect at the next render pass. Switching scoping with slots already
/// stored does not migrate them; call [`crate::hooks::reset_hooks`] first.
pub fn configure(cfg: RuntimeConfig) {
    tracing::debug!(?cfg, "runtime configured");
    RUNTIME_CONFIG.with(|c| c.set(cfg));
}

/// Get the current hook scoping mode.
pub fn hook_scoping() -> HookScoping {
    config().hook_scoping
}

/// Restore the default configuration (for testing).
pub fn reset_config() {
    configure(RuntimeConfig::default());
}
