//! Store factory
//!
//! [`create_store`] turns a [`StoreDefinition`] into a [`StoreClass`]. The
//! class owns the methods and the static action map; both are shared
//! read-only by every instance it constructs.

use crate::binding::BindingTable;
use crate::definition::{ActionMap, Initializer, StateFactory, StoreDefinition};
use crate::error::{Result, StoreError};
use crate::handler::MethodTable;
use crate::store::Store;
use std::rc::Rc;

struct ClassInner<S, C> {
    name: Rc<str>,
    initialize: Option<Initializer<S, C>>,
    actions: ActionMap,
    methods: Rc<MethodTable<S>>,
    initial_state: StateFactory<S>,
}

/// A constructible store type; cloning is cheap and shares the class
pub struct StoreClass<S, C> {
    inner: Rc<ClassInner<S, C>>,
}

/// Build a store class from its definition
///
/// Handler names in the static action map are not checked here; a missing
/// one surfaces when its action is dispatched.
pub fn create_store<S, C>(definition: StoreDefinition<S, C>) -> StoreClass<S, C> {
    let StoreDefinition {
        name,
        initialize,
        actions,
        methods,
        initial_state,
    } = definition;

    log::debug!(
        "Creating store class `{}` ({} static actions, {} methods)",
        name,
        actions.len(),
        methods.len()
    );

    StoreClass {
        inner: Rc::new(ClassInner {
            name: name.into(),
            initialize,
            actions,
            methods: Rc::new(methods),
            initial_state,
        }),
    }
}

impl<S, C> StoreClass<S, C> {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The static action map, as given in the definition
    pub fn actions(&self) -> &ActionMap {
        &self.inner.actions
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.inner.methods.contains_key(name)
    }

    /// Method names the static action map refers to but the class lacks
    ///
    /// Instances may still provide them as overrides, so this is a lint,
    /// not an error.
    pub fn validate(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .inner
            .actions
            .values()
            .map(String::as_str)
            .filter(|name| !self.has_method(name))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    /// Construct an instance
    ///
    /// Only the first argument reaches `initialize`, any further ones are
    /// dropped. The static action map is bound before `initialize` runs.
    pub fn construct<I>(&self, args: I) -> Result<Store<S>>
    where
        I: IntoIterator<Item = C>,
    {
        let mut args = args.into_iter();
        let config = args.next();
        let ignored = args.count();

        let inner = &self.inner;
        let bindings = BindingTable::seeded(&inner.actions);
        let mut store = Store::new(
            Rc::clone(&inner.name),
            Rc::clone(&inner.methods),
            bindings,
            (inner.initial_state)(),
        );
        if ignored > 0 {
            log::trace!(
                "Store `{}` {}: ignoring {} extra constructor argument(s)",
                inner.name,
                store.id(),
                ignored
            );
        }

        if let Some(initialize) = &inner.initialize {
            initialize(&mut store, config).map_err(|source| StoreError::Initialize {
                store: store.id(),
                source,
            })?;
        }
        store.mark_ready();

        log::debug!(
            "Store `{}` {} ready with {} binding(s)",
            inner.name,
            store.id(),
            store.bindings().len()
        );
        Ok(store)
    }

    /// Construct with a single configuration value
    pub fn instantiate(&self, config: C) -> Result<Store<S>> {
        self.construct(std::iter::once(config))
    }

    /// Construct without arguments; `initialize` receives `None`
    pub fn instantiate_empty(&self) -> Result<Store<S>> {
        self.construct(std::iter::empty())
    }
}

impl<S, C> Clone for StoreClass<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
