//! Autobinder
//!
//! Fixes the receiver of a method at bind time. The bound handler remembers
//! which store it belongs to and refuses to run against any other, no matter
//! where it is stored or how it is called later. Overriding a same-named
//! method on the store afterwards does not change what it runs.

use crate::action::{ActionType, Payload};
use crate::error::{Result, StoreError};
use crate::handler::{invoke, Method};
use crate::store::{Store, StoreId};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A store shared between the application and detached callbacks
pub type SharedStore<S> = Rc<RefCell<Store<S>>>;

/// Free-standing callable with its receiver baked in
pub type Callback = Box<dyn Fn(&Payload, &ActionType) -> Result<()>>;

/// A method bound to one store instance
pub struct Autobound<S> {
    receiver: StoreId,
    func: Method<S>,
}

/// Bind `func` to the store identified by `receiver`
pub fn autobind<S>(receiver: StoreId, func: Method<S>) -> Autobound<S> {
    Autobound { receiver, func }
}

impl<S> Autobound<S> {
    pub fn receiver(&self) -> StoreId {
        self.receiver
    }

    /// Run the captured method on its receiver
    pub fn call(&self, store: &mut Store<S>, payload: &Payload, action_type: &ActionType) -> Result<()> {
        if store.id() != self.receiver {
            return Err(StoreError::ReceiverMismatch {
                bound: self.receiver,
                given: store.id(),
            });
        }
        invoke(&self.func, store, payload, action_type)
    }

    /// Same captured function (used to compare identities)
    pub fn ptr_eq(&self, func: &Method<S>) -> bool {
        Rc::ptr_eq(&self.func, func)
    }
}

impl<S: 'static> Autobound<S> {
    /// Turn the handler into a callback that reaches its store on its own
    ///
    /// The callback holds a weak reference; it fails with
    /// [`StoreError::ReceiverDropped`] once the store is gone.
    pub fn detach(&self, owner: &SharedStore<S>) -> Result<Callback> {
        let given = owner.try_borrow().map_err(|_| StoreError::ReceiverBusy)?.id();
        if given != self.receiver {
            return Err(StoreError::ReceiverMismatch {
                bound: self.receiver,
                given,
            });
        }

        let weak = Rc::downgrade(owner);
        let bound = self.clone();
        Ok(Box::new(move |payload: &Payload, action_type: &ActionType| {
            let owner = weak
                .upgrade()
                .ok_or(StoreError::ReceiverDropped(bound.receiver))?;
            let mut store = owner.try_borrow_mut().map_err(|_| StoreError::ReceiverBusy)?;
            bound.call(&mut store, payload, action_type)
        }))
    }
}

impl<S> Clone for Autobound<S> {
    fn clone(&self) -> Self {
        Self {
            receiver: self.receiver,
            func: Rc::clone(&self.func),
        }
    }
}

impl<S> fmt::Debug for Autobound<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autobound")
            .field("receiver", &self.receiver)
            .finish_non_exhaustive()
    }
}
