//! Counter store
//!
//! Starts from the constructor argument and also counts added todos, so
//! both demo stores react to `ADD_TODO`.

use fluxbox::{create_store, ActionMap, StoreClass, StoreDefinition};
use serde::Serialize;

pub const NAME: &str = "counter";

#[derive(Debug, Default, Serialize)]
pub struct Counter {
    pub value: i64,
    pub todos_added: u64,
}

/// Constructor argument: start value and extra `type -> method` bindings
#[derive(Debug, Default)]
pub struct CounterConfig {
    pub start: i64,
    pub actions: ActionMap,
}

pub fn class() -> StoreClass<Counter, CounterConfig> {
    create_store(
        StoreDefinition::<Counter, CounterConfig>::new(NAME)
            .action("INCREMENT", "increment")
            .action("DECREMENT", "decrement")
            .initialize(|store, config| {
                let CounterConfig { start, actions } = config.unwrap_or_default();
                store.state_mut().value = start;
                store.bind_action_names(["RESET", "reset", "ADD_TODO", "count_todo"])?;
                store.bind_actions(actions)?;
                Ok(())
            })
            .method("increment", |store, payload, _type| {
                store.state_mut().value += payload.as_i64().unwrap_or(1);
                Ok(())
            })
            .method("decrement", |store, payload, _type| {
                store.state_mut().value -= payload.as_i64().unwrap_or(1);
                Ok(())
            })
            .method("reset", |store, _payload, _type| {
                store.state_mut().value = 0;
                Ok(())
            })
            .method("count_todo", |store, _payload, _type| {
                store.state_mut().todos_added += 1;
                Ok(())
            }),
    )
}
