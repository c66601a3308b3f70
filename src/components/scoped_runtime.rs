// Re-entry into the Dioxus runtime from callbacks the browser invokes directly.
use std::rc::Rc;

use dioxus::core::{current_scope_id, Runtime, ScopeId};

/// The runtime plus the scope of the component that installed a listener.
///
/// A bare `RuntimeGuard` has no scope on the stack, so anything that calls
/// `spawn` or reads the current scope would panic. `run` pushes the owning
/// scope for the duration of the call.
#[derive(Clone)]
pub struct ScopedRuntime {
    runtime: Rc<Runtime>,
    scope: ScopeId,
}

impl ScopedRuntime {
    /// Capture the caller's runtime and scope. Must be called while a
    /// component is rendering (inside a hook initializer).
    pub fn current() -> Self {
        Self {
            runtime: Runtime::current(),
            scope: current_scope_id(),
        }
    }

    pub fn run<O>(&self, f: impl FnOnce() -> O) -> O {
        self.runtime.in_scope(self.scope, f)
    }
}
