//! # fluxbox
//!
//! Minimal stores for unidirectional data flow.
//!
//! A store class is created from a [`StoreDefinition`] with [`create_store`].
//! Each instance owns a binding table mapping action types to handlers:
//!
//! - the definition's static action map is bound by method name, and the
//!   name is looked up on the instance every time the action arrives, so a
//!   method replaced after construction is honored,
//! - `initialize` can add more bindings with [`Store::bind_actions`], either
//!   by name or by function reference; function references are autobound to
//!   the instance and keep running what was captured.
//!
//! An external dispatcher delivers every action of the system to every store
//! through [`Store::handle_action`] (or the [`ActionHandler`] trait). Stores
//! silently ignore action types they have no binding for.
//!
//! ## Usage
//!
//! ```rust
//! use fluxbox::{create_store, Action, StoreDefinition};
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct Todos {
//!     items: Vec<String>,
//! }
//!
//! let class = create_store(
//!     StoreDefinition::<Todos, ()>::new("todos")
//!         .action("ADD_TODO", "add")
//!         .initialize(|store, _config| {
//!             let clear = store.method("clear");
//!             if let Some(clear) = clear {
//!                 store.bind_actions([("CLEAR_TODOS", clear)])?;
//!             }
//!             Ok(())
//!         })
//!         .method("add", |store, payload, _type| {
//!             let text = payload["text"].as_str().unwrap_or_default();
//!             store.state_mut().items.push(text.to_string());
//!             Ok(())
//!         })
//!         .method("clear", |store, _payload, _type| {
//!             store.state_mut().items.clear();
//!             Ok(())
//!         }),
//! );
//!
//! let mut store = class.instantiate_empty()?;
//! store.handle_action(&Action::new("ADD_TODO", json!({"text": "milk"})))?;
//! store.handle_action(&Action::bare("UNRELATED"))?;
//! assert_eq!(store.state().items, vec!["milk"]);
//!
//! store.handle_action(&Action::bare("CLEAR_TODOS"))?;
//! assert!(store.state().items.is_empty());
//! # Ok::<(), fluxbox::StoreError>(())
//! ```

pub mod action;
pub mod autobind;
pub mod binding;
pub mod definition;
pub mod error;
pub mod factory;
pub mod handler;
pub mod store;

pub use action::{Action, ActionType, Payload};
pub use autobind::{autobind, Autobound, Callback, SharedStore};
pub use binding::BindingTable;
pub use definition::{ActionMap, StoreDefinition};
pub use error::{Result, StoreError};
pub use factory::{create_store, StoreClass};
pub use handler::{method, HandlerRef, HandlerSpec, Method, MethodTable};
pub use store::{ActionHandler, Phase, Store, StoreId};
