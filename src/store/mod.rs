//! The dispatching state container.
//!
//! A [`Store`] holds one immutable snapshot of application state and
//! replaces it wholesale whenever an action is dispatched through its
//! reducer. Bindings read from it through selectors and write to it through
//! [`Dispatcher`] handles; nothing mutates a snapshot in place.

mod store;

pub use store::{Dispatcher, Store};
