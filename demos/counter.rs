//! Demonstration of the hook form: a counter read through a render scope

use cinch::{create_hook, ActionCreators, Dispatcher, RenderScope, Store};

#[derive(Debug)]
enum CounterAction {
    Increment,
    Decrement,
}

#[derive(Clone)]
struct CounterCreators;

#[derive(Clone)]
struct CounterHandle {
    dispatcher: Dispatcher<CounterAction>,
}

impl CounterHandle {
    fn increment(&self) {
        self.dispatcher.dispatch(CounterAction::Increment);
    }

    fn decrement(&self) {
        self.dispatcher.dispatch(CounterAction::Decrement);
    }
}

impl ActionCreators<CounterAction> for CounterCreators {
    type Bound = CounterHandle;

    fn bind(&self, dispatcher: Dispatcher<CounterAction>) -> CounterHandle {
        CounterHandle { dispatcher }
    }
}

fn main() {
    println!("=== Counter Demo ===\n");

    let store = Store::new(0i64, |n: &i64, action: &CounterAction| match action {
        CounterAction::Increment => n + 1,
        CounterAction::Decrement => n - 1,
    });

    // The host would re-render on this notification; here we just log it.
    store.subscribe(|n| println!("  store notified subscribers, counter is now {}", n));

    let hook = create_hook(
        &store,
        Some(|n: &i64| *n),
        Some(CounterCreators),
    )
    .expect("binding is non-empty");

    // A render pass: the hook hands back the projection and the handle.
    RenderScope::enter(|| {
        let props = hook.call();
        println!("render sees counter = {:?}", props.state);

        let handle = props.actions.expect("creators supplied");
        println!("clicking + twice and - once...");
        handle.increment();
        handle.increment();
        handle.decrement();
    });

    // The next render pass sees the updated snapshot.
    RenderScope::enter(|| {
        let props = hook.call();
        println!("next render sees counter = {:?}", props.state);
    });
}
