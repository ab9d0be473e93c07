use std::fmt;
use std::sync::{Arc, RwLock};

type Reducer<S, A> = dyn Fn(&S, &A) -> S + Send + Sync;
type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// A thread-safe state container updated only through dispatched actions.
///
/// The store holds a single immutable snapshot of the application state.
/// Every [`dispatch`](Store::dispatch) runs the reducer against the current
/// snapshot and replaces it wholesale with the reducer's result; the old
/// snapshot is never mutated in place.
///
/// # Examples
///
/// ```
/// use cinch::Store;
///
/// #[derive(Debug)]
/// enum Action {
///     Add(i32),
/// }
///
/// let store = Store::new(0, |state: &i32, action: &Action| match action {
///     Action::Add(n) => state + n,
/// });
///
/// store.dispatch(Action::Add(2));
/// assert_eq!(*store.snapshot(), 2);
/// ```
pub struct Store<S, A> {
    state: Arc<RwLock<Arc<S>>>,
    reducer: Arc<Reducer<S, A>>,
    subscribers: Arc<RwLock<Vec<Subscriber<S>>>>,
}

impl<S, A> Store<S, A> {
    /// Create a new store with the given initial state and reducer.
    pub fn new<R>(initial: S, reducer: R) -> Self
    where
        R: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial))),
            reducer: Arc::new(reducer),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the current state snapshot.
    ///
    /// Snapshots are shared, not copied; this is a cheap reference-count
    /// bump.
    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.state.read().unwrap())
    }

    /// Read the current state with a function, without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Dispatch an action through the reducer.
    ///
    /// The reducer's result becomes the new snapshot, then all subscribers
    /// are notified with it.
    pub fn dispatch(&self, action: A)
    where
        A: fmt::Debug,
    {
        log::trace!("dispatching action {:?}", action);
        let next = {
            let mut state = self.state.write().unwrap();
            let next = Arc::new((self.reducer)(&state, &action));
            *state = Arc::clone(&next);
            next
        };
        self.notify(&next);
    }

    /// Subscribe to snapshot replacements.
    ///
    /// The callback is called with the new snapshot after every dispatch.
    /// Host frameworks hook their re-render scheduling here.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.subscribers.write().unwrap().push(Box::new(callback));
    }

    /// Get a cloneable dispatch handle for this store.
    ///
    /// This is the seam for handing out dispatch access without handing out
    /// the whole store.
    pub fn dispatcher(&self) -> Dispatcher<A>
    where
        S: Send + Sync + 'static,
        A: fmt::Debug + 'static,
    {
        let store = self.clone();
        Dispatcher {
            send: Arc::new(move |action| store.dispatch(action)),
        }
    }

    /// Notify all subscribers of a new snapshot.
    fn notify(&self, state: &S) {
        let subscribers = self.subscribers.read().unwrap();
        log::trace!("notifying {} subscriber(s)", subscribers.len());
        for subscriber in subscribers.iter() {
            subscriber(state);
        }
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

/// A cloneable handle that dispatches actions to its originating store.
pub struct Dispatcher<A> {
    send: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A> Dispatcher<A> {
    /// Dispatch an action to the store this handle came from.
    pub fn dispatch(&self, action: A) {
        (self.send)(action);
    }
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            send: Arc::clone(&self.send),
        }
    }
}
