use crate::store::Dispatcher;

/// A named collection of action creators, bindable to a dispatcher.
///
/// Binding produces a `Bound` handle whose methods construct actions and
/// dispatch them. Constructors bind a mapping exactly once; every render
/// sees clones of the same bound handle, so the handle stays referentially
/// stable.
///
/// # Examples
///
/// ```
/// use cinch::{ActionCreators, Dispatcher, Store};
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment,
/// }
///
/// #[derive(Clone)]
/// struct CounterCreators;
///
/// #[derive(Clone)]
/// struct CounterHandle {
///     dispatcher: Dispatcher<CounterAction>,
/// }
///
/// impl CounterHandle {
///     fn increment(&self) {
///         self.dispatcher.dispatch(CounterAction::Increment);
///     }
/// }
///
/// impl ActionCreators<CounterAction> for CounterCreators {
///     type Bound = CounterHandle;
///
///     fn bind(&self, dispatcher: Dispatcher<CounterAction>) -> CounterHandle {
///         CounterHandle { dispatcher }
///     }
/// }
///
/// let store = Store::new(0, |n: &i32, _: &CounterAction| n + 1);
/// let handle = CounterCreators.bind(store.dispatcher());
/// handle.increment();
/// assert_eq!(*store.snapshot(), 1);
/// ```
pub trait ActionCreators<A> {
    /// The handle a binding injects as action props.
    type Bound;

    /// Bind every creator in this mapping to the given dispatcher.
    fn bind(&self, dispatcher: Dispatcher<A>) -> Self::Bound;

    /// Whether this mapping contains no creators.
    ///
    /// An empty mapping counts as absent when a binding is constructed.
    fn is_empty(&self) -> bool {
        false
    }
}

/// The absent-actions slot of a binding.
///
/// Always empty, so `None::<NoActions>` and `Some(NoActions)` are both
/// treated as "no action creators supplied"; its bound handle is `()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoActions;

impl<A> ActionCreators<A> for NoActions {
    type Bound = ();

    fn bind(&self, _dispatcher: Dispatcher<A>) {}

    fn is_empty(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[derive(Debug)]
    enum Ping {
        Ping,
    }

    #[test]
    fn no_actions_is_empty() {
        assert!(ActionCreators::<Ping>::is_empty(&NoActions));
    }

    #[test]
    fn no_actions_binds_to_unit() {
        let store = Store::new(0usize, |n: &usize, _: &Ping| n + 1);
        store.dispatch(Ping::Ping);
        NoActions.bind(store.dispatcher());
        assert_eq!(*store.snapshot(), 1);
    }
}
