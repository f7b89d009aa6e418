//! Dispatcher delivering every action to every registered store
//!
//! Stores are called in registration order. A failing store does not keep
//! the others from seeing the action.

use fluxbox::{Action, ActionHandler, StoreError};

struct Registered {
    name: String,
    handler: Box<dyn ActionHandler>,
}

/// A store that failed to handle an action
#[derive(Debug)]
pub struct DispatchFailure {
    pub store: String,
    pub error: StoreError,
}

pub struct Dispatcher {
    stores: Vec<Registered>,
    dispatched: usize,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            stores: Vec::new(),
            dispatched: 0,
        }
    }

    /// Register a store; stores receive actions in the order they were added
    pub fn register(&mut self, name: impl Into<String>, handler: impl ActionHandler + 'static) {
        let name = name.into();
        log::debug!("Dispatcher: registered store `{}`", name);
        self.stores.push(Registered {
            name,
            handler: Box::new(handler),
        });
    }

    /// Number of actions dispatched so far
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Deliver an action to all stores, collecting failures
    pub fn dispatch(&mut self, action: &Action) -> Vec<DispatchFailure> {
        log::debug!("Action: {} {}", action.action_type, action.payload);
        self.dispatched += 1;

        let mut failures = Vec::new();
        for store in &mut self.stores {
            if let Err(error) = store.handler.handle_action(action) {
                log::error!(
                    "Store `{}` failed on `{}`: {}",
                    store.name,
                    action.action_type,
                    describe(&error)
                );
                failures.push(DispatchFailure {
                    store: store.name.clone(),
                    error,
                });
            }
        }
        failures
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// The error followed by its sources, `: `-separated
pub fn describe(error: &StoreError) -> String {
    anyhow::Chain::new(error)
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use fluxbox::{create_store, StoreDefinition};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_store(fail_on: &'static str) -> Rc<RefCell<fluxbox::Store<u32>>> {
        let class = create_store(
            StoreDefinition::<u32, ()>::new("counting")
                .actions([("TICK", "tick"), ("FAIL", "fail")])
                .method("tick", |store, _payload, _type| {
                    *store.state_mut() += 1;
                    Ok(())
                })
                .method("fail", move |_store, _payload, _type| anyhow::bail!("{}", fail_on)),
        );
        Rc::new(RefCell::new(class.instantiate_empty().unwrap()))
    }

    #[test]
    fn test_dispatch_reaches_every_store() {
        let first = counting_store("first");
        let second = counting_store("second");
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("first", Rc::clone(&first));
        dispatcher.register("second", Rc::clone(&second));

        assert!(dispatcher.dispatch(&Action::bare("TICK")).is_empty());
        assert!(dispatcher.dispatch(&Action::bare("UNKNOWN")).is_empty());

        assert_eq!(dispatcher.dispatched(), 2);
        assert_eq!(*first.borrow().state(), 1);
        assert_eq!(*second.borrow().state(), 1);
    }

    #[test]
    fn test_failures_do_not_stop_other_stores() {
        let first = counting_store("first broke");
        let second = counting_store("second broke");
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("first", Rc::clone(&first));
        dispatcher.register("second", Rc::clone(&second));

        let failures = dispatcher.dispatch(&Action::bare("FAIL"));
        let stores: Vec<&str> = failures.iter().map(|f| f.store.as_str()).collect();
        assert_eq!(stores, vec!["first", "second"]);
        assert_eq!(
            describe(&failures[0].error),
            "handler for action `FAIL` failed: first broke"
        );

        assert!(dispatcher.dispatch(&Action::bare("TICK")).is_empty());
        assert_eq!(*first.borrow().state(), 1);
    }

    #[test]
    fn test_describe_walks_nested_context() {
        let class = create_store(
            StoreDefinition::<(), ()>::new("saving")
                .action("SAVE", "save")
                .method("save", |_store, _payload, _type| {
                    Err(anyhow::anyhow!("disk full")).context("writing snapshot")
                }),
        );
        let mut dispatcher = Dispatcher::new();
        dispatcher.register("saving", Rc::new(RefCell::new(class.instantiate_empty().unwrap())));

        let failures = dispatcher.dispatch(&Action::bare("SAVE"));
        assert_eq!(
            describe(&failures[0].error),
            "handler for action `SAVE` failed: writing snapshot: disk full"
        );
    }
}
