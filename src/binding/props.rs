/// The props a binding injects into a component: projected state and bound
/// actions.
///
/// Each side is present exactly when the binding was constructed with the
/// corresponding input, mirroring the three valid constructor shapes
/// (selector only, actions only, both).
#[derive(Clone, Debug, PartialEq)]
pub struct Injected<P, B> {
    /// The selector's projection of the current snapshot.
    pub state: Option<P>,
    /// The bound action handle.
    pub actions: Option<B>,
}

/// The full prop set a wrapped component receives: its own props plus the
/// binding's injected props.
#[derive(Clone, Debug, PartialEq)]
pub struct Props<Own, P, B> {
    /// Props supplied by the caller at render time.
    pub own: Own,
    /// Props supplied by the binding.
    pub injected: Injected<P, B>,
}

/// Type-level recovery of the prop shape a binding injects.
///
/// Implemented by [`Connector`](crate::Connector), [`Connected`](crate::Connected)
/// and [`Hook`](crate::Hook), so a consumer can declare a wrapped
/// component's full prop type from the binding's type instead of
/// hand-transcribing the selector's and action mapping's shapes:
///
/// ```
/// use cinch::{Connector, Props, PropsOf};
///
/// struct State;
/// enum Action {}
///
/// // The component's prop declaration follows the connector's type.
/// type TodoConnector = Connector<State, Action, Vec<String>, ()>;
/// fn todo_list(props: &PropsOf<u32, TodoConnector>) -> usize {
///     props.injected.state.as_ref().map_or(0, |open| open.len())
/// }
/// # let _ = todo_list;
/// ```
///
/// This has no runtime behavior; it exists to keep a binding call and the
/// consuming component's prop declaration mechanically in sync.
pub trait InjectedProps {
    /// The projection type of the binding's selector (`()` when absent).
    type State;
    /// The bound handle type of the binding's action creators (`()` when
    /// absent).
    type Actions;
}

/// The [`Injected`] shape of a binding type.
pub type InjectedOf<T> = Injected<<T as InjectedProps>::State, <T as InjectedProps>::Actions>;

/// The full [`Props`] shape of a binding type, given the own props.
pub type PropsOf<Own, T> = Props<Own, <T as InjectedProps>::State, <T as InjectedProps>::Actions>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::connected::Connector;
    use crate::binding::hook::Hook;

    struct State;
    enum Action {}

    #[derive(Clone, Debug, PartialEq)]
    struct OpenTodos {
        open: Vec<String>,
    }

    #[derive(Clone)]
    struct Handle;

    fn assert_injects<T, P, B>()
    where
        T: InjectedProps<State = P, Actions = B>,
    {
    }

    #[test]
    fn injected_shape_is_recoverable_from_binding_types() {
        assert_injects::<Connector<State, Action, OpenTodos, Handle>, OpenTodos, Handle>();
        assert_injects::<Hook<State, Action, OpenTodos, Handle>, OpenTodos, Handle>();
    }

    #[test]
    fn props_alias_names_the_full_prop_set() {
        let props: PropsOf<u8, Connector<State, Action, OpenTodos, Handle>> = Props {
            own: 7,
            injected: Injected {
                state: Some(OpenTodos { open: Vec::new() }),
                actions: None,
            },
        };
        assert_eq!(props.own, 7);
        assert!(props.injected.actions.is_none());
    }

    #[test]
    fn injected_compares_element_wise() {
        let a: Injected<i32, ()> = Injected {
            state: Some(1),
            actions: None,
        };
        let b = Injected {
            state: Some(1),
            actions: None,
        };
        assert_eq!(a, b);
    }
}
