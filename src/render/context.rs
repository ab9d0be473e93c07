use std::cell::Cell;

// Thread-local depth of nested render scopes
thread_local! {
    static RENDER_DEPTH: Cell<usize> = Cell::new(0);
}

/// Marker for the ambient render context (thread-local).
///
/// Hooks may only run while a render scope is active on the current thread.
/// [`Connected::render`](crate::binding::Connected::render) enters a scope
/// around the component it wraps, so hooks compose inside connected
/// components; host frameworks drive standalone hooks through
/// [`RenderScope::enter`].
///
/// # Examples
///
/// ```
/// use cinch::RenderScope;
///
/// assert!(!RenderScope::is_active());
/// RenderScope::enter(|| {
///     assert!(RenderScope::is_active());
/// });
/// assert!(!RenderScope::is_active());
/// ```
pub struct RenderScope;

impl RenderScope {
    /// Run a function inside a render scope on the current thread.
    ///
    /// Scopes nest; the scope is restored even if the function panics.
    pub fn enter<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        RENDER_DEPTH.with(|depth| depth.set(depth.get() + 1));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

        RENDER_DEPTH.with(|depth| depth.set(depth.get() - 1));

        match result {
            Ok(r) => r,
            Err(e) => std::panic::resume_unwind(e),
        }
    }

    /// Whether a render scope is active on the current thread.
    pub fn is_active() -> bool {
        RENDER_DEPTH.with(|depth| depth.get()) > 0
    }
}
