//! Handler references
//!
//! A store method is a plain function taking the store as its receiver.
//! Bindings refer to methods either by name, resolved on every dispatch,
//! or by a function reference captured once and autobound to the store.

use crate::action::{ActionType, Payload};
use crate::autobind::Autobound;
use crate::error::{Result, StoreError};
use crate::store::Store;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A store method: `(receiver, payload, type)`
pub type Method<S> = Rc<dyn Fn(&mut Store<S>, &Payload, &ActionType) -> anyhow::Result<()>>;

/// Methods by name
pub type MethodTable<S> = HashMap<String, Method<S>>;

/// Wrap a closure as a [`Method`]
pub fn method<S, F>(f: F) -> Method<S>
where
    F: Fn(&mut Store<S>, &Payload, &ActionType) -> anyhow::Result<()> + 'static,
{
    Rc::new(f)
}

/// Run a method against a receiver, attaching the action type to failures
pub(crate) fn invoke<S>(
    func: &Method<S>,
    store: &mut Store<S>,
    payload: &Payload,
    action_type: &ActionType,
) -> Result<()> {
    func(store, payload, action_type).map_err(|source| StoreError::Handler {
        action_type: action_type.clone(),
        source,
    })
}

/// What `bind_actions` accepts for each action type
pub enum HandlerSpec<S> {
    /// Looked up on the store by name each time the action is dispatched
    Name(String),
    /// Captured now and autobound to the store
    Function(Method<S>),
}

impl<S> HandlerSpec<S> {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&mut Store<S>, &Payload, &ActionType) -> anyhow::Result<()> + 'static,
    {
        Self::Function(method(f))
    }
}

impl<S> From<&str> for HandlerSpec<S> {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl<S> From<String> for HandlerSpec<S> {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl<S> From<Method<S>> for HandlerSpec<S> {
    fn from(func: Method<S>) -> Self {
        Self::Function(func)
    }
}

impl<S> fmt::Debug for HandlerSpec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Entry of a binding table
pub enum HandlerRef<S> {
    NameLookup(String),
    Bound(Autobound<S>),
}

impl<S> HandlerRef<S> {
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::NameLookup(_))
    }
}

impl<S> Clone for HandlerRef<S> {
    fn clone(&self) -> Self {
        match self {
            Self::NameLookup(name) => Self::NameLookup(name.clone()),
            Self::Bound(bound) => Self::Bound(bound.clone()),
        }
    }
}

impl<S> fmt::Debug for HandlerRef<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameLookup(name) => f.debug_tuple("NameLookup").field(name).finish(),
            Self::Bound(bound) => f.debug_tuple("Bound").field(bound).finish(),
        }
    }
}
