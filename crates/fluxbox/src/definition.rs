//! Store definitions
//!
//! A definition is the blueprint handed to [`create_store`](crate::create_store):
//! an `initialize` procedure, a static action map and the store's methods.

use crate::action::ActionType;
use crate::handler::{method, Method, MethodTable};
use crate::store::Store;
use std::collections::BTreeMap;

/// Static action map: action type -> method name
pub type ActionMap = BTreeMap<ActionType, String>;

pub(crate) type Initializer<S, C> = Box<dyn Fn(&mut Store<S>, Option<C>) -> anyhow::Result<()>>;
pub(crate) type StateFactory<S> = Box<dyn Fn() -> S>;

/// Blueprint of a store class
///
/// `S` is the per-instance application state, `C` the configuration value
/// passed as the first constructor argument.
///
/// ```rust
/// use fluxbox::{create_store, Action, StoreDefinition};
/// use serde_json::json;
///
/// #[derive(Default)]
/// struct Counter {
///     count: i64,
/// }
///
/// let class = create_store(
///     StoreDefinition::<Counter, i64>::new("counter")
///         .action("INCREMENT", "increment")
///         .initialize(|store, start| {
///             store.state_mut().count = start.unwrap_or_default();
///             Ok(())
///         })
///         .method("increment", |store, payload, _type| {
///             store.state_mut().count += payload.as_i64().unwrap_or(1);
///             Ok(())
///         }),
/// );
///
/// let mut store = class.instantiate(10).unwrap();
/// store.handle_action(&Action::new("INCREMENT", json!(5))).unwrap();
/// assert_eq!(store.state().count, 15);
/// ```
pub struct StoreDefinition<S, C> {
    pub(crate) name: String,
    pub(crate) initialize: Option<Initializer<S, C>>,
    pub(crate) actions: ActionMap,
    pub(crate) methods: MethodTable<S>,
    pub(crate) initial_state: StateFactory<S>,
}

impl<S: Default + 'static, C> StoreDefinition<S, C> {
    /// Definition whose instances start from `S::default()`
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_initial_state(name, S::default)
    }
}

impl<S, C> StoreDefinition<S, C> {
    pub fn with_initial_state<F>(name: impl Into<String>, initial_state: F) -> Self
    where
        F: Fn() -> S + 'static,
    {
        Self {
            name: name.into(),
            initialize: None,
            actions: ActionMap::new(),
            methods: MethodTable::new(),
            initial_state: Box::new(initial_state),
        }
    }

    /// Runs inside the constructor with the first constructor argument
    pub fn initialize<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Store<S>, Option<C>) -> anyhow::Result<()> + 'static,
    {
        self.initialize = Some(Box::new(f));
        self
    }

    /// Add one static binding; the method is looked up by name at dispatch time
    pub fn action(mut self, action_type: impl Into<ActionType>, method_name: impl Into<String>) -> Self {
        self.actions.insert(action_type.into(), method_name.into());
        self
    }

    /// Add several static bindings, later entries win
    pub fn actions<I, T, N>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = (T, N)>,
        T: Into<ActionType>,
        N: Into<String>,
    {
        self.actions.extend(
            actions
                .into_iter()
                .map(|(action_type, name)| (action_type.into(), name.into())),
        );
        self
    }

    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Store<S>, &crate::Payload, &ActionType) -> anyhow::Result<()> + 'static,
    {
        self.methods.insert(name.into(), method(f));
        self
    }

    /// Add an already wrapped method (shared between definitions)
    pub fn method_ref(mut self, name: impl Into<String>, func: Method<S>) -> Self {
        self.methods.insert(name.into(), func);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action_map(&self) -> &ActionMap {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_actions_later_entries_win() {
        let definition = StoreDefinition::<(), ()>::new("todo")
            .action("ADD", "add")
            .actions([("ADD", "add_todo"), ("REMOVE", "remove_todo")]);

        let expected: ActionMap = [
            (ActionType::from("ADD"), "add_todo".to_string()),
            (ActionType::from("REMOVE"), "remove_todo".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(definition.action_map(), &expected);
        assert_eq!(definition.name(), "todo");
    }

    #[test]
    fn test_defaults() {
        let definition = StoreDefinition::<u8, ()>::new("empty");
        assert!(definition.initialize.is_none());
        assert!(definition.methods.is_empty());
        assert_eq!((definition.initial_state)(), 0);
    }
}
