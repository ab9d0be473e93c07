/// A pure projection from a state snapshot to derived props.
///
/// Implemented for every `Fn(&S) -> P` closure, so selectors are written as
/// plain functions:
///
/// ```
/// use cinch::Selector;
///
/// let open_count = |todos: &Vec<bool>| todos.iter().filter(|open| **open).count();
/// assert_eq!(open_count.select(&vec![true, false, true]), 2);
/// ```
///
/// Selectors must be side-effect free: bindings call them repeatedly and
/// speculatively, once per render.
pub trait Selector<S> {
    /// The derived shape this selector projects out of the state.
    type Projection;

    /// Project the given snapshot.
    fn select(&self, state: &S) -> Self::Projection;
}

impl<S, P, F> Selector<S> for F
where
    F: Fn(&S) -> P,
{
    type Projection = P;

    fn select(&self, state: &S) -> P {
        self(state)
    }
}

/// The absent-selector slot of a binding.
///
/// A plain `fn` pointer type so `None::<NoSelector<S>>` satisfies the
/// selector parameter of the fallible constructors; its projection is `()`.
pub type NoSelector<S> = fn(&S) -> ();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_selectors() {
        #[derive(Clone)]
        struct State {
            values: Vec<i32>,
        }

        let sum = |state: &State| state.values.iter().sum::<i32>();
        assert_eq!(sum.select(&State { values: vec![1, 2, 3] }), 6);
    }

    #[test]
    fn fn_items_are_selectors() {
        fn half(n: &i32) -> i32 {
            n / 2
        }
        assert_eq!(half.select(&10), 5);
    }

    #[test]
    fn no_selector_projects_unit() {
        let none: NoSelector<i32> = |_| ();
        none.select(&1);
    }
}
