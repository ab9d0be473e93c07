use std::sync::Arc;

use crate::binding::connected::SelectorFn;
use crate::binding::props::{Injected, InjectedProps};
use crate::render::RenderScope;
use crate::store::Store;

/// The hook form of a binding.
///
/// Produced by [`create_hook`](crate::create_hook). Calling the hook during
/// a render returns the merged injected props for the current snapshot; the
/// selector is recomputed on every call, and re-rendering on state change is
/// the host framework's job (via [`Store::subscribe`]).
pub struct Hook<S, A, P, B> {
    pub(crate) store: Store<S, A>,
    pub(crate) selector: Option<Arc<SelectorFn<S, P>>>,
    pub(crate) actions: Option<B>,
}

impl<S, A, P, B> Hook<S, A, P, B>
where
    B: Clone,
{
    /// Return the injected props for the current snapshot.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a [`RenderScope`], the way the host
    /// rendering environment signals illegal hook usage.
    pub fn call(&self) -> Injected<P, B> {
        if !RenderScope::is_active() {
            panic!("hook called outside of a render scope");
        }
        let snapshot = self.store.snapshot();
        Injected {
            state: self.selector.as_ref().map(|select| select(&snapshot)),
            actions: self.actions.clone(),
        }
    }
}

impl<S, A, P, B: Clone> Clone for Hook<S, A, P, B> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            selector: self.selector.clone(),
            actions: self.actions.clone(),
        }
    }
}

impl<S, A, P, B> InjectedProps for Hook<S, A, P, B> {
    type State = P;
    type Actions = B;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::bind::create_state_hook;

    #[derive(Debug)]
    enum Tick {
        Tick,
    }

    fn tick_store() -> Store<u64, Tick> {
        Store::new(0, |n: &u64, _: &Tick| n + 1)
    }

    #[test]
    fn hook_projects_the_current_snapshot() {
        let store = tick_store();
        let hook = create_state_hook(&store, |n: &u64| n * 10);

        let first = RenderScope::enter(|| hook.call());
        assert_eq!(first.state, Some(0));
        assert!(first.actions.is_none());

        store.dispatch(Tick::Tick);
        let second = RenderScope::enter(|| hook.call());
        assert_eq!(second.state, Some(10));
    }

    #[test]
    fn hook_is_idempotent_within_one_render() {
        let store = tick_store();
        store.dispatch(Tick::Tick);
        let hook = create_state_hook(&store, |n: &u64| *n);

        RenderScope::enter(|| {
            let a = hook.call();
            let b = hook.call();
            assert_eq!(a, b);
        });
    }

    #[test]
    #[should_panic(expected = "outside of a render scope")]
    fn hook_panics_outside_a_render_scope() {
        let store = tick_store();
        let hook = create_state_hook(&store, |n: &u64| *n);
        hook.call();
    }
}
