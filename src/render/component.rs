/// A renderable unit of UI, generic over the props it expects.
///
/// This is the seam a host toolkit adapter implements. Any closure of the
/// shape `Fn(&P) -> V` is a component, so plain functions work directly:
///
/// ```
/// use cinch::Component;
///
/// let greeting = |name: &String| format!("hello, {}", name);
/// assert_eq!(greeting.render(&"world".to_string()), "hello, world");
/// ```
pub trait Component<P> {
    /// Whatever the host framework renders to (a view tree, a string, ...).
    type Output;

    /// Render this component with the given props.
    fn render(&self, props: &P) -> Self::Output;
}

impl<P, V, F> Component<P> for F
where
    F: Fn(&P) -> V,
{
    type Output = V;

    fn render(&self, props: &P) -> V {
        self(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_components() {
        let double = |n: &i32| n * 2;
        assert_eq!(double.render(&21), 42);
    }

    #[test]
    fn fn_items_are_components() {
        fn shout(text: &String) -> String {
            text.to_uppercase()
        }
        assert_eq!(shout.render(&"quiet".to_string()), "QUIET");
    }
}
