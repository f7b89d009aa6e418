//! Todo list store
//!
//! Static bindings cover the list operations. `CLEAR_DONE` is bound in
//! `initialize` by function reference, extra bindings from the config file
//! are bound by name.

use anyhow::Context;
use fluxbox::{create_store, ActionMap, Payload, Store, StoreClass, StoreDefinition};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const NAME: &str = "todos";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct Todos {
    pub items: Vec<Todo>,
    #[serde(skip)]
    next_id: u64,
}

#[derive(Deserialize)]
struct AddTodo {
    text: String,
}

#[derive(Deserialize)]
struct TodoId {
    id: u64,
}

fn parse<T: DeserializeOwned>(payload: &Payload) -> anyhow::Result<T> {
    serde_json::from_value(payload.clone()).with_context(|| format!("unexpected payload {}", payload))
}

fn find(store: &mut Store<Todos>, id: u64) -> anyhow::Result<&mut Todo> {
    store
        .state_mut()
        .items
        .iter_mut()
        .find(|todo| todo.id == id)
        .with_context(|| format!("no todo with id {}", id))
}

/// Store class; the constructor takes extra `type -> method` bindings
pub fn class() -> StoreClass<Todos, ActionMap> {
    create_store(
        StoreDefinition::<Todos, ActionMap>::new(NAME)
            .actions([
                ("ADD_TODO", "add_todo"),
                ("TOGGLE_TODO", "toggle_todo"),
                ("REMOVE_TODO", "remove_todo"),
            ])
            .initialize(|store, extra| {
                if let Some(clear_done) = store.method("clear_done") {
                    store.bind_actions([("CLEAR_DONE", clear_done)])?;
                }
                store.bind_actions(extra.unwrap_or_default())?;
                Ok(())
            })
            .method("add_todo", |store, payload, _type| {
                let AddTodo { text } = parse(payload)?;
                let todos = store.state_mut();
                todos.next_id += 1;
                let id = todos.next_id;
                todos.items.push(Todo {
                    id,
                    text,
                    done: false,
                });
                Ok(())
            })
            .method("toggle_todo", |store, payload, _type| {
                let TodoId { id } = parse(payload)?;
                let todo = find(store, id)?;
                todo.done = !todo.done;
                Ok(())
            })
            .method("remove_todo", |store, payload, _type| {
                let TodoId { id } = parse(payload)?;
                store.state_mut().items.retain(|todo| todo.id != id);
                Ok(())
            })
            .method("clear_done", |store, _payload, _type| {
                store.state_mut().items.retain(|todo| !todo.done);
                Ok(())
            })
            .method("clear_all", |store, _payload, _type| {
                store.state_mut().items.clear();
                Ok(())
            }),
    )
}
