//! Store instances and action dispatch

use crate::action::{Action, ActionType, Payload};
use crate::autobind::{autobind, Autobound};
use crate::binding::BindingTable;
use crate::error::{Result, StoreError};
use crate::handler::{invoke, method, HandlerRef, HandlerSpec, Method, MethodTable};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a store instance, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(u64);

impl StoreId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a store: bindings are registered while initializing,
/// actions are handled once ready. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Ready,
}

/// Entry point external dispatchers deliver actions to
pub trait ActionHandler {
    fn handle_action(&mut self, action: &Action) -> Result<()>;
}

/// One instance of a store class
pub struct Store<S> {
    id: StoreId,
    name: Rc<str>,
    phase: Phase,
    /// Methods of the class, shared by all instances
    class_methods: Rc<MethodTable<S>>,
    /// Methods replaced on this instance only, consulted first
    overrides: HashMap<String, Method<S>>,
    bindings: BindingTable<S>,
    state: S,
}

impl<S> Store<S> {
    pub(crate) fn new(
        name: Rc<str>,
        class_methods: Rc<MethodTable<S>>,
        bindings: BindingTable<S>,
        state: S,
    ) -> Self {
        Self {
            id: StoreId::next(),
            name,
            phase: Phase::Initializing,
            class_methods,
            overrides: HashMap::new(),
            bindings,
            state,
        }
    }

    pub(crate) fn mark_ready(&mut self) {
        self.phase = Phase::Ready;
    }

    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Name of the class this store was created from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn bindings(&self) -> &BindingTable<S> {
        &self.bindings
    }

    /// Current implementation of a method: instance override, then class
    pub fn method(&self, name: &str) -> Option<Method<S>> {
        self.overrides
            .get(name)
            .or_else(|| self.class_methods.get(name))
            .cloned()
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.overrides.contains_key(name) || self.class_methods.contains_key(name)
    }

    /// Replace a method on this instance
    ///
    /// Lazy bindings naming it pick the replacement up on the next dispatch,
    /// autobound ones keep running what they captured.
    pub fn set_method<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Store<S>, &Payload, &ActionType) -> anyhow::Result<()> + 'static,
    {
        self.replace_method(name, method(f));
    }

    pub fn replace_method(&mut self, name: impl Into<String>, func: Method<S>) -> Option<Method<S>> {
        self.overrides.insert(name.into(), func)
    }

    /// Drop an instance override, falling back to the class method
    pub fn remove_method(&mut self, name: &str) -> Option<Method<S>> {
        self.overrides.remove(name)
    }

    /// Register bindings; only allowed while the store initializes
    ///
    /// Names become lazy bindings, function references are autobound to
    /// this store. A later binding for the same type replaces the earlier.
    pub fn bind_actions<I, T, H>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (T, H)>,
        T: Into<ActionType>,
        H: Into<HandlerSpec<S>>,
    {
        for (action_type, handler) in pairs {
            let action_type = action_type.into();
            if self.phase == Phase::Ready {
                return Err(StoreError::BindingsSealed {
                    store: self.id,
                    action_type,
                });
            }

            let handler = match handler.into() {
                HandlerSpec::Name(name) => HandlerRef::NameLookup(name),
                HandlerSpec::Function(func) => HandlerRef::Bound(autobind(self.id, func)),
            };
            log::trace!("Store `{}` {}: bind `{}` -> {:?}", self.name, self.id, action_type, handler);
            self.bindings.insert(action_type, handler);
        }
        Ok(())
    }

    /// Flat form of [`bind_actions`](Self::bind_actions): `[type, method, type, method, ..]`
    ///
    /// An odd number of items is rejected before anything is bound.
    pub fn bind_action_names<I, T>(&mut self, flat: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let items: Vec<String> = flat.into_iter().map(Into::into).collect();
        if items.len() % 2 != 0 {
            return Err(StoreError::MalformedBindActions { len: items.len() });
        }

        let mut items = items.into_iter();
        let mut pairs = Vec::new();
        while let (Some(action_type), Some(name)) = (items.next(), items.next()) {
            pairs.push((ActionType::from(action_type), HandlerSpec::Name(name)));
        }
        self.bind_actions(pairs)
    }

    /// The autobound handler registered for a type, if it is one
    pub fn bound_handler(&self, action_type: &str) -> Option<Autobound<S>> {
        match self.bindings.get(action_type)? {
            HandlerRef::Bound(bound) => Some(bound.clone()),
            HandlerRef::NameLookup(_) => None,
        }
    }

    /// Route an action to its handler with `(payload, type)`
    ///
    /// Types without a binding are ignored. Lazy bindings resolve the method
    /// by name right now, so replacements made after construction are seen.
    pub fn handle_action(&mut self, action: &Action) -> Result<()> {
        let action_type = &action.action_type;
        if self.phase != Phase::Ready {
            return Err(StoreError::NotReady {
                store: self.id,
                action_type: action_type.clone(),
            });
        }

        let Some(handler) = self.bindings.get(action_type.as_str()).cloned() else {
            log::trace!("Store `{}` {}: no binding for `{}`", self.name, self.id, action_type);
            return Ok(());
        };

        match handler {
            HandlerRef::NameLookup(name) => {
                let func = self.method(&name).ok_or_else(|| StoreError::UnresolvedHandler {
                    store: self.id,
                    action_type: action_type.clone(),
                    method: name.clone(),
                })?;
                invoke(&func, self, &action.payload, action_type)
            }
            HandlerRef::Bound(bound) => bound.call(self, &action.payload, action_type),
        }
    }
}

impl<S> ActionHandler for Store<S> {
    fn handle_action(&mut self, action: &Action) -> Result<()> {
        Store::handle_action(self, action)
    }
}

impl<T: ActionHandler + ?Sized> ActionHandler for Rc<RefCell<T>> {
    fn handle_action(&mut self, action: &Action) -> Result<()> {
        self.try_borrow_mut()
            .map_err(|_| StoreError::ReceiverBusy)?
            .handle_action(action)
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("bindings", &self.bindings.action_types())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
