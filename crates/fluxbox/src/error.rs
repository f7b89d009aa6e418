//! Errors raised by stores
//!
//! Only programmer errors end up here. Dispatching an action type a store
//! has no binding for is not an error.

use crate::action::ActionType;
use crate::store::StoreId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A lazy binding names a method the store does not have (at dispatch time)
    #[error("no method `{method}` on store {store} to handle action `{action_type}`")]
    UnresolvedHandler {
        store: StoreId,
        action_type: ActionType,
        method: String,
    },

    /// Flat binding list did not alternate type and handler
    #[error("bind_action_names expects (type, handler) pairs, got {len} items")]
    MalformedBindActions { len: usize },

    /// Bindings can only be registered while the store initializes
    #[error("store {store} is initialized, action `{action_type}` can no longer be bound")]
    BindingsSealed {
        store: StoreId,
        action_type: ActionType,
    },

    /// Actions can only be handled once construction returned
    #[error("store {store} is still initializing and cannot handle `{action_type}`")]
    NotReady {
        store: StoreId,
        action_type: ActionType,
    },

    /// An autobound handler was called with a store it was not bound to
    #[error("handler bound to store {bound} was invoked on store {given}")]
    ReceiverMismatch { bound: StoreId, given: StoreId },

    /// A detached callback outlived its store
    #[error("store {0} was dropped before its callback ran")]
    ReceiverDropped(StoreId),

    /// The shared store is already borrowed, e.g. a callback fired from inside a handler
    #[error("store is already borrowed, re-entrant calls are not supported")]
    ReceiverBusy,

    #[error("initialize failed for store {store}")]
    Initialize {
        store: StoreId,
        #[source]
        source: anyhow::Error,
    },

    #[error("handler for action `{action_type}` failed")]
    Handler {
        action_type: ActionType,
        #[source]
        source: anyhow::Error,
    },
}
