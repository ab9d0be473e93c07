//! Demonstration of the component-wrapper form: a todo list bound to a store

use cinch::{create_binding, ActionCreators, Dispatcher, Props, Store};

#[derive(Clone, Debug, PartialEq)]
enum TodoStatus {
    Open,
    Done,
}

#[derive(Clone, Debug, PartialEq)]
struct Todo {
    id: usize,
    title: String,
    status: TodoStatus,
}

#[derive(Clone, Debug, PartialEq)]
struct AppState {
    todos: Vec<Todo>,
}

#[derive(Debug)]
enum TodoAction {
    Add { title: String },
    MarkDone { id: usize },
}

fn reduce(state: &AppState, action: &TodoAction) -> AppState {
    match action {
        TodoAction::Add { title } => {
            let mut todos = state.todos.clone();
            todos.push(Todo {
                id: todos.len(),
                title: title.clone(),
                status: TodoStatus::Open,
            });
            AppState { todos }
        }
        TodoAction::MarkDone { id } => AppState {
            todos: state
                .todos
                .iter()
                .map(|todo| {
                    if todo.id == *id {
                        Todo {
                            status: TodoStatus::Done,
                            ..todo.clone()
                        }
                    } else {
                        todo.clone()
                    }
                })
                .collect(),
        },
    }
}

#[derive(Clone, Debug, PartialEq)]
struct OpenTodos {
    open: Vec<Todo>,
}

fn open_todos(state: &AppState) -> OpenTodos {
    OpenTodos {
        open: state
            .todos
            .iter()
            .filter(|todo| todo.status == TodoStatus::Open)
            .cloned()
            .collect(),
    }
}

#[derive(Clone)]
struct TodoCreators;

#[derive(Clone)]
struct TodoHandle {
    dispatcher: Dispatcher<TodoAction>,
}

impl TodoHandle {
    fn add(&self, title: &str) {
        self.dispatcher.dispatch(TodoAction::Add {
            title: title.to_string(),
        });
    }

    fn mark_done(&self, id: usize) {
        self.dispatcher.dispatch(TodoAction::MarkDone { id });
    }
}

impl ActionCreators<TodoAction> for TodoCreators {
    type Bound = TodoHandle;

    fn bind(&self, dispatcher: Dispatcher<TodoAction>) -> TodoHandle {
        TodoHandle { dispatcher }
    }
}

fn main() {
    println!("=== Todos Demo ===\n");

    let store = Store::new(AppState { todos: Vec::new() }, reduce);
    let (connector, _hook) =
        create_binding(&store, Some(open_todos), Some(TodoCreators)).expect("binding is non-empty");

    // The wrapped component sees its own props (a heading) plus the
    // injected projection and action handle.
    let connected = connector.wrap(|props: &Props<String, OpenTodos, TodoHandle>| {
        let open = props.injected.state.as_ref().expect("selector supplied");
        let mut lines = vec![format!("{} ({} open)", props.own, open.open.len())];
        for todo in &open.open {
            lines.push(format!("  - [{}] {}", todo.id, todo.title));
        }
        lines.join("\n")
    });

    let heading = "todos".to_string();
    println!("{}\n", connected.render(&heading));

    println!("Adding two todos...");
    let handle = TodoCreators.bind(store.dispatcher());
    handle.add("write the demo");
    handle.add("run the demo");
    println!("{}\n", connected.render(&heading));

    println!("Marking todo 0 done...");
    handle.mark_done(0);
    println!("{}\n", connected.render(&heading));

    // Rendering again without a state change reuses the cached output.
    println!("{}", connected.render(&heading));
}
