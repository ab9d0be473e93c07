//! # Cinch
//!
//! Typed bindings between a dispatching state container and UI components.
//!
//! Cinch keeps a single immutable state snapshot in a [`Store`] and derives
//! component props from it through small, pure constructors:
//!
//! ## Store (state side)
//!
//! - [`Store<S, A>`](Store) - state container updated only by dispatching
//!   actions through a reducer; every update replaces the snapshot wholesale
//! - [`Dispatcher<A>`](Dispatcher) - cloneable dispatch handle
//!
//! ## Bindings (UI side)
//!
//! Each constructor takes an optional [`Selector`] and an optional
//! [`ActionCreators`] mapping; at least one must be supplied:
//!
//! - [`create_connector`] - wraps a component expecting
//!   `{own props, injected props}` into one expecting only own props,
//!   re-rendering it only when the merged props change
//! - [`create_hook`] - a hook returning the merged injected props, callable
//!   only inside a [`RenderScope`]
//! - [`create_binding`] - both of the above from the same inputs
//! - [`InjectedProps`] / [`PropsOf`] - recover the injected prop shape of a
//!   binding at the type level
//!
//! ```
//! use cinch::{create_state_connector, Props, Store};
//!
//! #[derive(Debug)]
//! enum Action {
//!     Increment,
//! }
//!
//! let store = Store::new(0, |n: &i32, _: &Action| n + 1);
//!
//! let connector = create_state_connector(&store, |n: &i32| *n);
//! let connected = connector.wrap(|props: &Props<(), i32, ()>| {
//!     format!("count: {}", props.injected.state.unwrap())
//! });
//!
//! assert_eq!(connected.render(&()), "count: 0");
//! store.dispatch(Action::Increment);
//! assert_eq!(connected.render(&()), "count: 1");
//! ```

pub mod binding;
pub mod render;
pub mod store;

// Re-export main types for convenience
pub use binding::{
    create_action_connector, create_action_hook, create_binding, create_connector, create_hook,
    create_state_connector, create_state_hook, ActionCreators, BindError, Connected, Connector,
    Hook, Injected, InjectedOf, InjectedProps, NoActions, NoSelector, Props, PropsOf, Selector,
};
pub use render::{Component, RenderScope};
pub use store::{Dispatcher, Store};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        #[derive(Debug)]
        enum Action {
            Set(i32),
        }

        let store = Store::new(0, |_: &i32, action: &Action| match action {
            Action::Set(n) => *n,
        });
        let hook = create_state_hook(&store, |n: &i32| *n);

        store.dispatch(Action::Set(42));
        let injected = RenderScope::enter(|| hook.call());
        assert_eq!(injected.state, Some(42));
    }
}
