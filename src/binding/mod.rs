//! Binding constructors and the values they produce.
//!
//! A binding pairs an optional [`Selector`] with an optional
//! [`ActionCreators`] mapping and derives UI-facing values from the pair:
//! a [`Connector`] (the component-wrapper form), a [`Hook`] (the hook
//! form), or both at once. Supplying neither input is a caller error and
//! fails fast with [`BindError::EmptyBinding`].

mod actions;
mod bind;
mod connected;
mod hook;
mod props;
mod selector;

pub use actions::{ActionCreators, NoActions};
pub use bind::{
    create_action_connector, create_action_hook, create_binding, create_connector, create_hook,
    create_state_connector, create_state_hook, BindError,
};
pub use connected::{Connected, Connector};
pub use hook::Hook;
pub use props::{Injected, InjectedOf, InjectedProps, Props, PropsOf};
pub use selector::{NoSelector, Selector};
