use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::binding::actions::{ActionCreators, NoActions};
use crate::binding::connected::{Connector, SelectorFn};
use crate::binding::hook::Hook;
use crate::binding::selector::{NoSelector, Selector};
use crate::store::Store;

/// Errors from constructing a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BindError {
    /// Neither a selector nor a usable action-creator mapping was supplied,
    /// so there is nothing to bind.
    #[error("binding requires a selector, action creators, or both")]
    EmptyBinding,
}

/// Erase the inputs shared by every constructor, binding the action
/// creators to the store's dispatcher exactly once.
#[allow(clippy::type_complexity)]
fn erase<S, A, Sel, Acts>(
    store: &Store<S, A>,
    selector: Option<Sel>,
    actions: Option<Acts>,
) -> Result<(Option<Arc<SelectorFn<S, Sel::Projection>>>, Option<Acts::Bound>), BindError>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + 'static,
    Sel: Selector<S> + Send + Sync + 'static,
    Acts: ActionCreators<A>,
{
    // An empty mapping binds nothing, so it counts as absent.
    let actions = actions.filter(|creators| !creators.is_empty());
    if selector.is_none() && actions.is_none() {
        return Err(BindError::EmptyBinding);
    }

    let selector = selector.map(|sel| {
        Arc::new(move |state: &S| sel.select(state)) as Arc<SelectorFn<S, Sel::Projection>>
    });
    let bound = actions.map(|creators| creators.bind(store.dispatcher()));
    Ok((selector, bound))
}

/// Create the component-wrapper form of a binding.
///
/// At least one of `selector` and `actions` must be supplied (and the
/// mapping non-empty); otherwise this fails with
/// [`BindError::EmptyBinding`]. The returned [`Connector`] wraps components
/// expecting `{own props, injected props}` into components expecting only
/// own props.
pub fn create_connector<S, A, Sel, Acts>(
    store: &Store<S, A>,
    selector: Option<Sel>,
    actions: Option<Acts>,
) -> Result<Connector<S, A, Sel::Projection, Acts::Bound>, BindError>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + 'static,
    Sel: Selector<S> + Send + Sync + 'static,
    Acts: ActionCreators<A>,
{
    let (selector, actions) = erase(store, selector, actions)?;
    Ok(Connector {
        store: store.clone(),
        selector,
        actions,
    })
}

/// Create the hook form of a binding.
///
/// Takes the same inputs and applies the same validity rule as
/// [`create_connector`]; the returned [`Hook`] yields the merged injected
/// props when called during a render.
pub fn create_hook<S, A, Sel, Acts>(
    store: &Store<S, A>,
    selector: Option<Sel>,
    actions: Option<Acts>,
) -> Result<Hook<S, A, Sel::Projection, Acts::Bound>, BindError>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + 'static,
    Sel: Selector<S> + Send + Sync + 'static,
    Acts: ActionCreators<A>,
{
    let (selector, actions) = erase(store, selector, actions)?;
    Ok(Hook {
        store: store.clone(),
        selector,
        actions,
    })
}

/// Create both forms of a binding from the same inputs.
///
/// The pair's connector and hook are built from the very same erased
/// selector and the same bound action handle, so each behaves identically
/// to the output of the per-form constructor. Fails with
/// [`BindError::EmptyBinding`] exactly when the per-form constructors
/// would.
///
/// # Examples
///
/// ```
/// use cinch::{create_binding, NoActions, Props, RenderScope, Store};
///
/// #[derive(Debug)]
/// enum Action {
///     Bump,
/// }
///
/// let store = Store::new(1, |n: &i32, _: &Action| n + 1);
/// let (connector, hook) =
///     create_binding(&store, Some(|n: &i32| n * 2), None::<NoActions>).unwrap();
///
/// let connected = connector.wrap(|props: &Props<(), i32, ()>| props.injected.state.unwrap());
/// assert_eq!(connected.render(&()), 2);
///
/// let doubled = RenderScope::enter(|| hook.call());
/// assert_eq!(doubled.state, Some(2));
/// ```
#[allow(clippy::type_complexity)]
pub fn create_binding<S, A, Sel, Acts>(
    store: &Store<S, A>,
    selector: Option<Sel>,
    actions: Option<Acts>,
) -> Result<
    (
        Connector<S, A, Sel::Projection, Acts::Bound>,
        Hook<S, A, Sel::Projection, Acts::Bound>,
    ),
    BindError,
>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + 'static,
    Sel: Selector<S> + Send + Sync + 'static,
    Acts: ActionCreators<A>,
    Acts::Bound: Clone,
{
    let (selector, actions) = erase(store, selector, actions)?;
    let connector = Connector {
        store: store.clone(),
        selector: selector.clone(),
        actions: actions.clone(),
    };
    let hook = Hook {
        store: store.clone(),
        selector,
        actions,
    };
    Ok((connector, hook))
}

/// Create a connector from a selector alone.
///
/// The selector is always usable, so this form cannot fail; the action
/// slot types as `()`.
pub fn create_state_connector<S, A, Sel>(
    store: &Store<S, A>,
    selector: Sel,
) -> Connector<S, A, Sel::Projection, ()>
where
    S: Send + Sync + 'static,
    Sel: Selector<S> + Send + Sync + 'static,
{
    Connector {
        store: store.clone(),
        selector: Some(Arc::new(move |state: &S| selector.select(state))),
        actions: None,
    }
}

/// Create a hook from a selector alone. Cannot fail.
pub fn create_state_hook<S, A, Sel>(
    store: &Store<S, A>,
    selector: Sel,
) -> Hook<S, A, Sel::Projection, ()>
where
    S: Send + Sync + 'static,
    Sel: Selector<S> + Send + Sync + 'static,
{
    Hook {
        store: store.clone(),
        selector: Some(Arc::new(move |state: &S| selector.select(state))),
        actions: None,
    }
}

/// Create a connector from an action-creator mapping alone.
///
/// Fails with [`BindError::EmptyBinding`] when the mapping reports itself
/// empty; the state slot types as `()`.
pub fn create_action_connector<S, A, Acts>(
    store: &Store<S, A>,
    actions: Acts,
) -> Result<Connector<S, A, (), Acts::Bound>, BindError>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + 'static,
    Acts: ActionCreators<A>,
{
    create_connector(store, None::<NoSelector<S>>, Some(actions))
}

/// Create a hook from an action-creator mapping alone.
///
/// Applies the same validity rule as [`create_action_connector`].
pub fn create_action_hook<S, A, Acts>(
    store: &Store<S, A>,
    actions: Acts,
) -> Result<Hook<S, A, (), Acts::Bound>, BindError>
where
    S: Send + Sync + 'static,
    A: fmt::Debug + 'static,
    Acts: ActionCreators<A>,
{
    create_hook(store, None::<NoSelector<S>>, Some(actions))
}
