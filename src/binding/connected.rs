use std::sync::{Arc, Mutex};

use crate::binding::props::{Injected, InjectedProps, Props};
use crate::render::{Component, RenderScope};
use crate::store::Store;

/// Type-erased selector stored inside bindings.
pub(crate) type SelectorFn<S, P> = dyn Fn(&S) -> P + Send + Sync;

/// The component-wrapper form of a binding.
///
/// Produced by [`create_connector`](crate::create_connector); its
/// [`wrap`](Connector::wrap) method turns a component expecting
/// `{own props, injected props}` into a [`Connected`] component expecting
/// only own props.
pub struct Connector<S, A, P, B> {
    pub(crate) store: Store<S, A>,
    pub(crate) selector: Option<Arc<SelectorFn<S, P>>>,
    pub(crate) actions: Option<B>,
}

impl<S, A, P, B> Connector<S, A, P, B> {
    /// Wrap a component, reducing its prop requirement to own props only.
    ///
    /// The wrapped component receives [`Props`] carrying the caller's own
    /// props plus this connector's injected props.
    pub fn wrap<C, Own>(&self, component: C) -> Connected<S, A, P, B, C, Own, C::Output>
    where
        C: Component<Props<Own, P, B>>,
        B: Clone,
    {
        Connected {
            store: self.store.clone(),
            selector: self.selector.clone(),
            actions: self.actions.clone(),
            component,
            cache: Mutex::new(None),
        }
    }
}

impl<S, A, P, B: Clone> Clone for Connector<S, A, P, B> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            selector: self.selector.clone(),
            actions: self.actions.clone(),
        }
    }
}

impl<S, A, P, B> InjectedProps for Connector<S, A, P, B> {
    type State = P;
    type Actions = B;
}

/// What the previous render saw and produced.
struct RenderCache<Own, P, V> {
    own: Own,
    state: Option<P>,
    output: V,
}

/// A wrapped component bound to a store, expecting only own props.
///
/// Each [`render`](Connected::render) re-runs the connector's selector
/// against the current snapshot and invokes the inner component only when
/// the merged props differ from the previous render; otherwise the cached
/// output is returned. Bound action handles are created once at
/// construction and never participate in the comparison.
pub struct Connected<S, A, P, B, C, Own, V> {
    store: Store<S, A>,
    selector: Option<Arc<SelectorFn<S, P>>>,
    actions: Option<B>,
    component: C,
    cache: Mutex<Option<RenderCache<Own, P, V>>>,
}

impl<S, A, P, B, C, Own, V> Connected<S, A, P, B, C, Own, V>
where
    P: Clone + PartialEq,
    B: Clone,
    Own: Clone + PartialEq,
    V: Clone,
    C: Component<Props<Own, P, B>, Output = V>,
{
    /// Render with the given own props.
    ///
    /// The inner component runs inside a [`RenderScope`], so hooks called
    /// from it are legal.
    pub fn render(&self, own: &Own) -> V {
        let snapshot = self.store.snapshot();
        let state = self.selector.as_ref().map(|select| select(&snapshot));

        {
            let cache = self.cache.lock().unwrap();
            if let Some(previous) = cache.as_ref() {
                if previous.own == *own && previous.state == state {
                    log::trace!("merged props unchanged, reusing previous output");
                    return previous.output.clone();
                }
            }
        }

        let props = Props {
            own: own.clone(),
            injected: Injected {
                state: state.clone(),
                actions: self.actions.clone(),
            },
        };
        let output = RenderScope::enter(|| self.component.render(&props));

        *self.cache.lock().unwrap() = Some(RenderCache {
            own: own.clone(),
            state,
            output: output.clone(),
        });
        output
    }
}

impl<S, A, P, B, C, Own, V> InjectedProps for Connected<S, A, P, B, C, Own, V> {
    type State = P;
    type Actions = B;
}
